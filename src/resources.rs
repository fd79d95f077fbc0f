//! Named, typed configuration values shared by the menus and the emulator.
//!
//! The UI core only ever talks to the store through [`ResourceStore`]; the
//! in-memory [`Resources`] map is what the binary and the tests plug in.

use std::{collections::BTreeMap, fmt, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceValue {
    Int(i32),
    Str(String),
}

impl ResourceValue {
    fn kind(&self) -> &'static str {
        match self {
            ResourceValue::Int(_) => "an integer",
            ResourceValue::Str(_) => "a string",
        }
    }
}

impl fmt::Display for ResourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceValue::Int(v) => write!(f, "{v}"),
            ResourceValue::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum DefaultValue {
    Int(i32),
    Str(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct ResourceDefault {
    pub name: &'static str,
    pub value: DefaultValue,
}

impl ResourceDefault {
    pub const fn int(name: &'static str, value: i32) -> Self {
        Self {
            name,
            value: DefaultValue::Int(value),
        }
    }

    pub const fn string(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            value: DefaultValue::Str(value),
        }
    }
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("unknown resource '{0}'")]
    Unknown(String),
    #[error("resource '{name}' holds {holds}")]
    TypeMismatch { name: String, holds: &'static str },
    #[error("persisting resources failed: {0}")]
    Persist(String),
}

/// Typed key/value access as consumed by the menu core.
pub trait ResourceStore {
    fn get_value(&self, name: &str) -> Result<ResourceValue, ResourceError>;
    fn set_value(&mut self, name: &str, value: ResourceValue) -> Result<(), ResourceError>;
    fn set_defaults(&mut self);
    /// Writes every resource to `path`, or to the resolved config file.
    fn save(&self, path: Option<&Path>) -> Result<(), ResourceError>;
    /// Reads resources from `path`, or from the resolved config file.
    fn load(&mut self, path: Option<&Path>) -> Result<(), ResourceError>;

    fn get_int(&self, name: &str) -> Result<i32, ResourceError> {
        match self.get_value(name)? {
            ResourceValue::Int(v) => Ok(v),
            ResourceValue::Str(_) => Err(ResourceError::TypeMismatch {
                name: name.to_string(),
                holds: "a string",
            }),
        }
    }

    fn get_string(&self, name: &str) -> Result<String, ResourceError> {
        match self.get_value(name)? {
            ResourceValue::Str(s) => Ok(s),
            ResourceValue::Int(_) => Err(ResourceError::TypeMismatch {
                name: name.to_string(),
                holds: "an integer",
            }),
        }
    }

    fn set_int(&mut self, name: &str, value: i32) -> Result<(), ResourceError> {
        self.set_value(name, ResourceValue::Int(value))
    }

    fn set_string(&mut self, name: &str, value: &str) -> Result<(), ResourceError> {
        self.set_value(name, ResourceValue::Str(value.to_string()))
    }

    fn toggle(&mut self, name: &str) -> Result<(), ResourceError> {
        let current = self.get_int(name)?;
        self.set_int(name, i32::from(current == 0))
    }
}

#[derive(Debug, Clone)]
struct Entry {
    value: ResourceValue,
    default: ResourceValue,
}

#[derive(Debug, Clone, Default)]
pub struct Resources {
    entries: BTreeMap<String, Entry>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, default: ResourceValue) {
        self.entries.insert(
            name.to_string(),
            Entry {
                value: default.clone(),
                default,
            },
        );
    }

    pub fn register_all(&mut self, defaults: &[ResourceDefault]) {
        for d in defaults {
            let value = match d.value {
                DefaultValue::Int(v) => ResourceValue::Int(v),
                DefaultValue::Str(s) => ResourceValue::Str(s.to_string()),
            };
            self.register(d.name, value);
        }
    }

    pub fn values(&self) -> BTreeMap<String, ResourceValue> {
        self.entries
            .iter()
            .map(|(k, e)| (k.clone(), e.value.clone()))
            .collect()
    }

    /// Applies known keys from `values`; unknown or mistyped keys are skipped.
    pub fn apply(&mut self, values: &BTreeMap<String, ResourceValue>) {
        for (name, value) in values {
            if let Err(err) = self.set_value(name, value.clone()) {
                log::warn!("ignoring stored resource: {err}");
            }
        }
    }
}

impl ResourceStore for Resources {
    fn get_value(&self, name: &str) -> Result<ResourceValue, ResourceError> {
        self.entries
            .get(name)
            .map(|e| e.value.clone())
            .ok_or_else(|| ResourceError::Unknown(name.to_string()))
    }

    fn set_value(&mut self, name: &str, value: ResourceValue) -> Result<(), ResourceError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| ResourceError::Unknown(name.to_string()))?;
        if std::mem::discriminant(&entry.value) != std::mem::discriminant(&value) {
            return Err(ResourceError::TypeMismatch {
                name: name.to_string(),
                holds: entry.value.kind(),
            });
        }
        entry.value = value;
        Ok(())
    }

    fn set_defaults(&mut self) {
        for entry in self.entries.values_mut() {
            entry.value = entry.default.clone();
        }
    }

    fn save(&self, path: Option<&Path>) -> Result<(), ResourceError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => config::ensure_config_file_exists()
                .map_err(|e| ResourceError::Persist(format!("{e:#}")))?,
        };
        config::patch_resources(&path, &self.values())
            .map_err(|e| ResourceError::Persist(format!("{e:#}")))
    }

    fn load(&mut self, path: Option<&Path>) -> Result<(), ResourceError> {
        let cfg = match path {
            Some(p) => config::load_from(p).map(Some),
            None => config::load_optional(),
        }
        .map_err(|e| ResourceError::Persist(format!("{e:#}")))?;

        let Some(cfg) = cfg else {
            return Err(ResourceError::Persist("no configuration file found".to_string()));
        };
        self.apply(&cfg.resources);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Resources {
        let mut r = Resources::new();
        r.register_all(&[
            ResourceDefault::int("WarpMode", 0),
            ResourceDefault::int("Speed", 100),
            ResourceDefault::string("Language", "en"),
        ]);
        r
    }

    #[test]
    fn toggle_flips_between_zero_and_one() {
        let mut r = store();
        r.toggle("WarpMode").unwrap();
        assert_eq!(r.get_int("WarpMode").unwrap(), 1);
        r.toggle("WarpMode").unwrap();
        assert_eq!(r.get_int("WarpMode").unwrap(), 0);
    }

    #[test]
    fn toggle_treats_any_nonzero_as_on() {
        let mut r = store();
        r.set_int("Speed", 200).unwrap();
        r.toggle("Speed").unwrap();
        assert_eq!(r.get_int("Speed").unwrap(), 0);
    }

    #[test]
    fn unknown_and_mistyped_access_is_rejected() {
        let mut r = store();
        assert!(matches!(r.get_int("Nope"), Err(ResourceError::Unknown(_))));
        assert!(matches!(
            r.set_string("Speed", "fast"),
            Err(ResourceError::TypeMismatch { .. })
        ));
        assert!(matches!(
            r.get_int("Language"),
            Err(ResourceError::TypeMismatch { .. })
        ));
        assert_eq!(r.get_int("Speed").unwrap(), 100);
    }

    #[test]
    fn set_defaults_restores_registered_values() {
        let mut r = store();
        r.set_int("Speed", 10).unwrap();
        r.set_string("Language", "de").unwrap();
        r.set_defaults();
        assert_eq!(r.get_int("Speed").unwrap(), 100);
        assert_eq!(r.get_string("Language").unwrap(), "en");
    }

    #[test]
    fn save_and_load_through_a_file() {
        let dir = std::env::temp_dir().join("menusync_test_resources");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("resources.json");
        let _ = std::fs::remove_file(&path);

        let mut r = store();
        r.set_int("WarpMode", 1).unwrap();
        r.set_string("Language", "sv").unwrap();
        r.save(Some(&path)).unwrap();

        let mut fresh = store();
        fresh.load(Some(&path)).unwrap();
        assert_eq!(fresh.get_int("WarpMode").unwrap(), 1);
        assert_eq!(fresh.get_string("Language").unwrap(), "sv");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn apply_skips_unknown_keys() {
        let mut r = store();
        let mut values = BTreeMap::new();
        values.insert("Bogus".to_string(), ResourceValue::Int(3));
        values.insert("Speed".to_string(), ResourceValue::Int(50));
        r.apply(&values);
        assert_eq!(r.get_int("Speed").unwrap(), 50);
        assert!(r.get_value("Bogus").is_err());
    }
}
