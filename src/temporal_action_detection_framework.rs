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

use std::path::Path;

use crate::core::error::FrameworkError;
use crate::pipelines::Compose;
use crate::utilities::config::Configuration;

pub mod core;
pub mod pipelines;
pub mod registry;
pub mod utilities;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const FRAMEWORK_NAME: &str = "Temporal Action Detection Framework";

pub struct Framework {
    config: Configuration,
    initialized: bool,
}

impl Framework {
    pub fn new() -> Self {
        Framework {
            config: Configuration::default(),
            initialized: false,
        }
    }

    pub fn with_config<P: AsRef<Path>>(config_path: P) -> Result<Self, FrameworkError> {
        let config = Configuration::from_file(config_path)?;
        Ok(Framework {
            config,
            initialized: false,
        })
    }

    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        // Set random seed if specified
        if let Some(seed) = self.config.seed {
            core::random::set_seed(seed);
        }

        self.initialized = true;
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Builds the configured data pipeline through the process-wide
    /// transform registry.
    pub fn build_pipeline(&self) -> Result<Compose, FrameworkError> {
        Compose::from_configs(&self.config.pipeline, pipelines::registry())
    }

    pub fn get_version() -> &'static str {
        VERSION
    }

    pub fn get_name() -> &'static str {
        FRAMEWORK_NAME
    }
}

impl Default for Framework {
    fn default() -> Self {
        Self::new()
    }
}
