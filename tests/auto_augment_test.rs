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
use std::error::Error;
use std::sync::Once;

use serde_json::json;

use temporal_action_detection_framework::core::error::FrameworkError;
use temporal_action_detection_framework::core::random;
use temporal_action_detection_framework::pipelines::{
    self, AutoAugment, Record, Transform, TransformRegistry,
};
use temporal_action_detection_framework::registry::{build_from_registry, FromConfig};
use temporal_action_detection_framework::utilities::config::Config;

struct Tag {
    key: String,
    level: u64,
}

impl FromConfig for Tag {
    const TYPENAME: &'static str = "Tag";

    fn from_config(cfg: &Config) -> Result<Self, FrameworkError> {
        let key = cfg.get_str("key").ok_or_else(|| {
            FrameworkError::MissingRequiredField("Tag config must contain the key \"key\"".into())
        })?;
        let level = cfg.get_u64("level").unwrap_or(0);
        Ok(Tag {
            key: key.to_string(),
            level,
        })
    }
}

impl Transform for Tag {
    fn apply(&self, mut record: Record) -> Result<Record, FrameworkError> {
        record.insert(self.key.clone(), json!(self.level));
        Ok(record)
    }

    fn name(&self) -> &str {
        "Tag"
    }
}

fn tag_registry() -> Result<TransformRegistry, FrameworkError> {
    let registry = TransformRegistry::new();
    registry.register_module::<Tag>("pipeline")?;
    Ok(registry)
}

fn tag_policy(key: &str) -> Vec<Config> {
    vec![Config::from_value(json!({"typename": "Tag", "key": key})).unwrap()]
}

static REGISTER_GLOBAL_TAG: Once = Once::new();

fn register_global_tag() {
    REGISTER_GLOBAL_TAG.call_once(|| {
        pipelines::registry()
            .register_module::<Tag>("pipeline")
            .unwrap();
    });
}

#[test]
fn test_empty_policies_rejected() -> Result<(), Box<dyn Error>> {
    let registry = tag_registry()?;

    let err = AutoAugment::new(&[], &registry).unwrap_err();
    assert!(matches!(err, FrameworkError::Validation(_)));

    Ok(())
}

#[test]
fn test_empty_policy_rejected() -> Result<(), Box<dyn Error>> {
    let registry = tag_registry()?;

    let err = AutoAugment::new(&[vec![]], &registry).unwrap_err();
    assert!(matches!(err, FrameworkError::Validation(_)));

    let err = AutoAugment::new(&[tag_policy("a"), vec![]], &registry).unwrap_err();
    assert!(matches!(err, FrameworkError::Validation(_)));

    Ok(())
}

#[test]
fn test_record_without_discriminator_rejected() -> Result<(), Box<dyn Error>> {
    let registry = tag_registry()?;

    let policy = vec![Config::from_value(json!({"key": "a"}))?];
    let err = AutoAugment::new(&[policy], &registry).unwrap_err();
    assert!(matches!(err, FrameworkError::Validation(_)));

    Ok(())
}

#[test]
fn test_minimal_policy_succeeds() -> Result<(), Box<dyn Error>> {
    let registry = tag_registry()?;

    let augment = AutoAugment::new(&[tag_policy("marker")], &registry)?;
    let result = augment.apply(Record::new())?;
    assert!(result.contains_key("marker"));

    Ok(())
}

#[test]
fn test_policy_applies_sub_transforms_in_order() -> Result<(), Box<dyn Error>> {
    let registry = tag_registry()?;

    // One policy with two sub-transforms on the same key: the later one
    // must win.
    let policy = vec![
        Config::from_value(json!({"typename": "Tag", "key": "k", "level": 1}))?,
        Config::from_value(json!({"typename": "Tag", "key": "k", "level": 2}))?,
    ];
    let augment = AutoAugment::new(&[policy], &registry)?;
    let result = augment.apply(Record::new())?;
    assert_eq!(result.get("k").and_then(|v| v.as_u64()), Some(2));

    Ok(())
}

#[test]
fn test_selection_coverage() -> Result<(), Box<dyn Error>> {
    let registry = tag_registry()?;

    let keys = ["p0", "p1", "p2", "p3"];
    let policies: Vec<Vec<Config>> = keys.iter().map(|key| tag_policy(key)).collect();
    let augment = AutoAugment::new(&policies, &registry)?;

    random::set_seed(42);
    let rounds = 10_000;
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for _ in 0..rounds {
        let result = augment.apply(Record::new())?;
        for key in &keys {
            if result.contains_key(*key) {
                *counts.entry(*key).or_insert(0) += 1;
            }
        }
    }

    // Uniform over 4 policies: expect ~2500 each; binomial deviation beyond
    // +-300 is vanishingly unlikely.
    for key in &keys {
        let count = counts.get(key).copied().unwrap_or(0);
        assert!(
            (2200..=2800).contains(&count),
            "policy {} selected {} times out of {}",
            key,
            count,
            rounds
        );
    }

    Ok(())
}

#[test]
fn test_policies_are_isolated_from_caller() -> Result<(), Box<dyn Error>> {
    let registry = tag_registry()?;

    let mut policies = vec![tag_policy("original")];
    let augment = AutoAugment::new(&policies, &registry)?;

    // Mutating the caller's list after construction must not leak into the
    // instance.
    policies[0][0].insert("key", json!("mutated"));

    assert_eq!(augment.policies()[0][0].get_str("key"), Some("original"));
    let result = augment.apply(Record::new())?;
    assert!(result.contains_key("original"));
    assert!(!result.contains_key("mutated"));

    Ok(())
}

#[test]
fn test_build_from_global_registry() -> Result<(), Box<dyn Error>> {
    register_global_tag();

    let cfg = Config::from_value(json!({
        "typename": "AutoAugment",
        "policies": [[{"typename": "Tag", "key": "a"}]]
    }))?;
    let transform = build_from_registry(&cfg, pipelines::registry(), "pipeline", None)?;
    let result = transform.apply(Record::new())?;
    assert!(result.contains_key("a"));

    Ok(())
}

#[test]
fn test_from_config_validates_policies() -> Result<(), Box<dyn Error>> {
    register_global_tag();

    let cfg = Config::from_value(json!({"typename": "AutoAugment", "policies": []}))?;
    let err = build_from_registry(&cfg, pipelines::registry(), "pipeline", None).unwrap_err();
    assert!(matches!(err, FrameworkError::Validation(_)));

    let cfg = Config::from_value(json!({"typename": "AutoAugment"}))?;
    let err = build_from_registry(&cfg, pipelines::registry(), "pipeline", None).unwrap_err();
    assert!(matches!(err, FrameworkError::MissingRequiredField(_)));

    let cfg = Config::from_value(json!({"typename": "AutoAugment", "policies": "nope"}))?;
    let err = build_from_registry(&cfg, pipelines::registry(), "pipeline", None).unwrap_err();
    assert!(matches!(err, FrameworkError::InvalidArgumentType(_)));

    Ok(())
}
