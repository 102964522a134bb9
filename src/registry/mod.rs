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

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::core::error::FrameworkError;
use crate::utilities::config::Config;

pub mod builder;

pub use builder::{build_from_module, build_from_registry, Module};

/// Module category used when none is given explicitly.
pub const DEFAULT_MODULE: &str = "module";

/// A registered type handle: constructs one instance from a configuration
/// record holding its keyword arguments.
pub type Constructor<T> = Arc<dyn Fn(&Config) -> Result<T, FrameworkError> + Send + Sync>;

/// Types that can register themselves declaratively: they carry their own
/// class name and construct from a configuration record.
pub trait FromConfig: Sized {
    const TYPENAME: &'static str;

    fn from_config(cfg: &Config) -> Result<Self, FrameworkError>;
}

/// Conversion from a concrete registered type into the registry's stored
/// form, typically a boxed trait object.
pub trait IntoRegistered<T> {
    fn into_registered(self) -> T;
}

/// A registry mapping strings to constructors.
///
/// The table has two levels. The first level is the module category, the
/// second the class name: `module_dict["pipeline"]` is itself a mapping from
/// names such as `"AutoAugment"` to their constructors. Independent modules
/// register under distinct categories without colliding across categories,
/// while lookup inside one category stays a flat dictionary access.
///
/// Registration takes the write lock; lookups share the read lock.
pub struct Registry<T> {
    module_dict: RwLock<HashMap<String, HashMap<String, Constructor<T>>>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Registry {
            module_dict: RwLock::new(HashMap::new()),
        }
    }

    /// Associates `constructor` with `(module_name, class_name)`. Each pair
    /// may be registered at most once.
    pub fn register<F>(
        &self,
        module_name: &str,
        class_name: &str,
        constructor: F,
    ) -> Result<(), FrameworkError>
    where
        F: Fn(&Config) -> Result<T, FrameworkError> + Send + Sync + 'static,
    {
        let mut module_dict = self
            .module_dict
            .write()
            .map_err(|_| FrameworkError::LockError)?;
        let classes = module_dict.entry(module_name.to_string()).or_default();
        if classes.contains_key(class_name) {
            return Err(FrameworkError::DuplicateRegistration(format!(
                "{} is already registered in {}",
                class_name, module_name
            )));
        }
        classes.insert(class_name.to_string(), Arc::new(constructor));
        Ok(())
    }

    /// Registers `C` under its own class name.
    pub fn register_module<C>(&self, module_name: &str) -> Result<(), FrameworkError>
    where
        C: FromConfig + IntoRegistered<T> + 'static,
    {
        self.register(module_name, C::TYPENAME, |cfg| {
            Ok(C::from_config(cfg)?.into_registered())
        })
    }

    /// Returns the registry record for `class_name` within `module_name`.
    pub fn get(&self, class_name: &str, module_name: &str) -> Result<Constructor<T>, FrameworkError> {
        let module_dict = self
            .module_dict
            .read()
            .map_err(|_| FrameworkError::LockError)?;
        let classes = module_dict.get(module_name).ok_or_else(|| {
            FrameworkError::NotFound(format!("{} is not in registry", module_name))
        })?;
        classes.get(class_name).cloned().ok_or_else(|| {
            FrameworkError::NotFound(format!(
                "{} is not registered in {}",
                class_name, module_name
            ))
        })
    }

    /// Membership test: lookup failure becomes `false` instead of an error.
    pub fn contains(&self, class_name: &str, module_name: &str) -> bool {
        self.get(class_name, module_name).is_ok()
    }

    /// Number of module categories currently tracked.
    pub fn len(&self) -> usize {
        self.module_dict.read().map(|dict| dict.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
