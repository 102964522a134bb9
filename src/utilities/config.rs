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

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::core::error::FrameworkError;

/// Field naming the type to construct from a configuration record.
pub const TYPENAME_KEY: &str = "typename";

/// A configuration record: a mapping from field names to values, describing
/// which type to construct plus its constructor arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    fields: Map<String, Value>,
}

impl Config {
    pub fn new() -> Self {
        Config { fields: Map::new() }
    }

    pub fn from_value(value: Value) -> Result<Self, FrameworkError> {
        match value {
            Value::Object(fields) => Ok(Config { fields }),
            other => Err(FrameworkError::InvalidArgumentType(format!(
                "config must be a mapping, but got {}",
                value_kind(&other)
            ))),
        }
    }

    pub fn insert(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    /// Inserts `value` under `key` only when the key is absent. Existing
    /// values always win over defaults.
    pub fn set_default(&mut self, key: &str, value: Value) {
        self.fields.entry(key.to_string()).or_insert(value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.fields.get(key).and_then(Value::as_u64)
    }

    /// Returns the record's type discriminator.
    pub fn typename(&self) -> Result<&str, FrameworkError> {
        match self.fields.get(TYPENAME_KEY) {
            None => Err(FrameworkError::MissingRequiredField(format!(
                "config must contain the key \"{}\"",
                TYPENAME_KEY
            ))),
            Some(Value::String(name)) => Ok(name),
            Some(other) => Err(FrameworkError::InvalidArgumentType(format!(
                "\"{}\" must be a string, but got {}",
                TYPENAME_KEY,
                value_kind(other)
            ))),
        }
    }

    /// Removes and returns the type discriminator, leaving only the
    /// constructor arguments behind.
    pub fn take_typename(&mut self) -> Result<String, FrameworkError> {
        let name = self.typename()?.to_string();
        self.fields.remove(TYPENAME_KEY);
        Ok(name)
    }
}

pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}

/// Top-level framework configuration loaded from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    // System configuration
    #[serde(default)]
    pub seed: Option<u64>,

    // Data pipeline configuration
    #[serde(default)]
    pub pipeline: Vec<Config>,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            seed: None,
            pipeline: Vec::new(),
        }
    }
}

impl Configuration {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FrameworkError> {
        let content =
            fs::read_to_string(path).map_err(|e| FrameworkError::IOError(e.to_string()))?;
        let config: Configuration = serde_yaml::from_str(&content)
            .map_err(|e| FrameworkError::SerializationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), FrameworkError> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| FrameworkError::SerializationError(e.to_string()))?;
        fs::write(path, content).map_err(|e| FrameworkError::IOError(e.to_string()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), FrameworkError> {
        for record in &self.pipeline {
            record.typename()?;
        }
        Ok(())
    }
}
