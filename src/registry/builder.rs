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

use crate::core::error::FrameworkError;
use crate::utilities::config::Config;

use super::{Constructor, Registry};

/// An explicit name-to-constructor mapping, for types that are not (or
/// cannot be) pre-registered in a registry.
pub type Module<T> = HashMap<String, Constructor<T>>;

/// Builds an instance from a configuration record, resolving the type named
/// by `typename` through `registry` under `module_name`.
///
/// The caller's `cfg` is never mutated. Keys from `default_args` fill gaps
/// only: values already present in `cfg` always win.
pub fn build_from_registry<T>(
    cfg: &Config,
    registry: &Registry<T>,
    module_name: &str,
    default_args: Option<&Config>,
) -> Result<T, FrameworkError> {
    let mut args = cfg.clone();
    let typename = args.take_typename()?;
    let constructor = registry.get(&typename, module_name)?;
    if let Some(defaults) = default_args {
        for (name, value) in defaults.iter() {
            args.set_default(name, value.clone());
        }
    }
    constructor(&args)
}

/// Same contract as [`build_from_registry`], except the type is resolved
/// against a caller-supplied name-to-constructor mapping.
pub fn build_from_module<T>(
    cfg: &Config,
    module: &Module<T>,
    default_args: Option<&Config>,
) -> Result<T, FrameworkError> {
    let mut args = cfg.clone();
    let typename = args.take_typename()?;
    let constructor = module
        .get(&typename)
        .cloned()
        .ok_or_else(|| FrameworkError::NotFound(format!("{} is not in module", typename)))?;
    if let Some(defaults) = default_args {
        for (name, value) in defaults.iter() {
            args.set_default(name, value.clone());
        }
    }
    constructor(&args)
}
