// Copyright (C) 2025 Temporal Action Detection Framework Contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::core::error::FrameworkError;
use crate::registry::build_from_registry;
use crate::utilities::config::Config;

use super::{Record, Transform, TransformRegistry, PIPELINE_MODULE};

/// Applies a sequence of transforms in declared order.
#[derive(Debug)]
pub struct Compose {
    transforms: Vec<Box<dyn Transform>>,
}

impl Compose {
    pub fn new(transforms: Vec<Box<dyn Transform>>) -> Self {
        Compose { transforms }
    }

    /// Builds each configuration record through `registry` under the
    /// pipeline category, preserving order.
    pub fn from_configs(
        cfgs: &[Config],
        registry: &TransformRegistry,
    ) -> Result<Self, FrameworkError> {
        let mut transforms = Vec::with_capacity(cfgs.len());
        for cfg in cfgs {
            transforms.push(build_from_registry(cfg, registry, PIPELINE_MODULE, None)?);
        }
        Ok(Compose { transforms })
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl Transform for Compose {
    fn apply(&self, record: Record) -> Result<Record, FrameworkError> {
        let mut current = record;
        for transform in &self.transforms {
            current = transform.apply(current)?;
        }
        Ok(current)
    }

    fn name(&self) -> &str {
        "Compose"
    }
}
