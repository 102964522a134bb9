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

use std::sync::OnceLock;

use serde_json::{Map, Value};

use crate::core::error::FrameworkError;
use crate::registry::{IntoRegistered, Registry};

pub mod auto_augment;
pub mod compose;

pub use auto_augment::AutoAugment;
pub use compose::Compose;

/// Module category under which pipeline components register.
pub const PIPELINE_MODULE: &str = "pipeline";

/// The unit of data flowing through a pipeline: a record mapping field names
/// (image, annotations, metadata) to values. Transforms own its shape.
pub type Record = Map<String, Value>;

/// A data transformation step.
pub trait Transform: Send + Sync {
    fn apply(&self, record: Record) -> Result<Record, FrameworkError>;
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transform")
            .field("name", &self.name())
            .finish()
    }
}

impl<C: Transform + 'static> IntoRegistered<Box<dyn Transform>> for C {
    fn into_registered(self) -> Box<dyn Transform> {
        Box::new(self)
    }
}

pub type TransformRegistry = Registry<Box<dyn Transform>>;

static REGISTRY: OnceLock<TransformRegistry> = OnceLock::new();

/// The process-wide transform registry. The first access creates the table
/// and registers the built-in pipeline components; every later access, from
/// anywhere in the process, returns the same table.
pub fn registry() -> &'static TransformRegistry {
    REGISTRY.get_or_init(|| {
        let registry = TransformRegistry::new();
        registry
            .register_module::<AutoAugment>(PIPELINE_MODULE)
            .expect("registering built-ins on a fresh registry");
        registry
    })
}
