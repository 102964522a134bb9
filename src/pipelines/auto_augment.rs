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

use serde_json::Value;

use crate::core::{error::FrameworkError, random};
use crate::registry::FromConfig;
use crate::utilities::config::{value_kind, Config};

use super::{registry, Compose, Record, Transform, TransformRegistry};

/// Auto augmentation.
///
/// Holds a collection of augmentation policies, each an ordered list of
/// sub-transform records. Every call picks one policy uniformly at random and
/// routes the record through that policy's composed pipeline.
///
/// Proposed in `Learning Data Augmentation Strategies for Object Detection
/// <https://arxiv.org/pdf/1906.11172>`.
#[derive(Debug)]
pub struct AutoAugment {
    policies: Vec<Vec<Config>>,
    transforms: Vec<Compose>,
}

impl AutoAugment {
    /// Validates `policies`, copies them into internal storage, and
    /// pre-builds one composed pipeline per policy through `registry`.
    pub fn new(
        policies: &[Vec<Config>],
        registry: &TransformRegistry,
    ) -> Result<Self, FrameworkError> {
        if policies.is_empty() {
            return Err(FrameworkError::Validation(
                "policies must be a non-empty list".to_string(),
            ));
        }
        for policy in policies {
            if policy.is_empty() {
                return Err(FrameworkError::Validation(
                    "each policy in policies must be a non-empty list".to_string(),
                ));
            }
            for augment in policy {
                augment.typename().map_err(|_| {
                    FrameworkError::Validation(
                        "each specific augmentation must be a mapping with the key \"typename\""
                            .to_string(),
                    )
                })?;
            }
        }

        let policies = policies.to_vec();
        let mut transforms = Vec::with_capacity(policies.len());
        for policy in &policies {
            transforms.push(Compose::from_configs(policy, registry)?);
        }

        Ok(AutoAugment {
            policies,
            transforms,
        })
    }

    pub fn policies(&self) -> &[Vec<Config>] {
        &self.policies
    }
}

impl Transform for AutoAugment {
    fn apply(&self, record: Record) -> Result<Record, FrameworkError> {
        let index = random::uniform_index(self.transforms.len());
        self.transforms[index].apply(record)
    }

    fn name(&self) -> &str {
        "AutoAugment"
    }
}

impl FromConfig for AutoAugment {
    const TYPENAME: &'static str = "AutoAugment";

    fn from_config(cfg: &Config) -> Result<Self, FrameworkError> {
        let value = cfg.get("policies").ok_or_else(|| {
            FrameworkError::MissingRequiredField(
                "AutoAugment config must contain the key \"policies\"".to_string(),
            )
        })?;
        let policies = parse_policies(value)?;
        AutoAugment::new(&policies, registry())
    }
}

fn parse_policies(value: &Value) -> Result<Vec<Vec<Config>>, FrameworkError> {
    let outer = value.as_array().ok_or_else(|| {
        FrameworkError::InvalidArgumentType(format!(
            "policies must be an array, but got {}",
            value_kind(value)
        ))
    })?;
    let mut policies = Vec::with_capacity(outer.len());
    for policy in outer {
        let inner = policy.as_array().ok_or_else(|| {
            FrameworkError::InvalidArgumentType(format!(
                "each policy must be an array, but got {}",
                value_kind(policy)
            ))
        })?;
        let mut records = Vec::with_capacity(inner.len());
        for augment in inner {
            records.push(Config::from_value(augment.clone())?);
        }
        policies.push(records);
    }
    Ok(policies)
}
