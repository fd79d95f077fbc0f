use std::{collections::BTreeMap, env, fs, path::Path, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::machine::MachineClass;
use crate::resources::ResourceValue;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Machine profile the binary starts with when `--machine` is omitted.
    #[serde(default)]
    pub machine: Option<MachineClass>,

    #[serde(default)]
    pub resources: BTreeMap<String, ResourceValue>,
}

pub fn load_optional() -> Result<Option<Config>> {
    let Some(path) = resolve_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    load_from(&path).map(Some)
}

pub fn load_from(path: &Path) -> Result<Config> {
    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: Config =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}

pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(p) = env::var("MENUSYNC_CONFIG") {
        if !p.trim().is_empty() {
            return Some(PathBuf::from(p));
        }
    }

    let local = PathBuf::from("menusync.json");
    if local.exists() {
        return Some(local);
    }

    if let Some(appdata) = env::var_os("APPDATA") {
        return Some(PathBuf::from(appdata).join("menusync").join("config.json"));
    }

    if let Some(home) = env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config").join("menusync").join("config.json"));
    }

    None
}

pub fn ensure_config_file_exists() -> Result<PathBuf> {
    let Some(path) = resolve_config_path() else {
        return Err(anyhow!(
            "No config path available (set MENUSYNC_CONFIG or ensure APPDATA/HOME is present)"
        ));
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }

    if !path.exists() {
        let template = serde_json::json!({
            "resources": {}
        });
        let mut s = serde_json::to_string_pretty(&template).context("serialize config template")?;
        s.push('\n');
        fs::write(&path, s.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    }

    Ok(path)
}

/// Replaces the `resources` object of the config at `path`, keeping every
/// other key of the file as it was.
pub fn patch_resources(path: &Path, values: &BTreeMap<String, ResourceValue>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
    }

    let mut root = read_json_or_empty_object(path)?;
    let obj = root
        .as_object_mut()
        .ok_or_else(|| anyhow!("config root must be a JSON object"))?;

    let resources = serde_json::to_value(values).context("serialize resources")?;
    obj.insert("resources".to_string(), resources);

    let mut s = serde_json::to_string_pretty(&root).context("serialize config")?;
    s.push('\n');
    fs::write(path, s.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn read_json_or_empty_object(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Ok(Value::Object(Default::default()));
    }

    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let v: Value =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_keeps_foreign_keys() {
        let dir = std::env::temp_dir().join("menusync_test_config");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("patch.json");
        fs::write(&path, br#"{ "machine": "c128", "window": { "x": 4 } }"#).unwrap();

        let mut values = BTreeMap::new();
        values.insert("WarpMode".to_string(), ResourceValue::Int(1));
        patch_resources(&path, &values).unwrap();

        let root: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(root["window"]["x"], 4);
        assert_eq!(root["resources"]["WarpMode"], 1);

        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.machine, Some(MachineClass::C128));
        assert_eq!(cfg.resources.get("WarpMode"), Some(&ResourceValue::Int(1)));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn rejects_non_object_root() {
        let dir = std::env::temp_dir().join("menusync_test_config");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("array.json");
        fs::write(&path, b"[1, 2]").unwrap();
        assert!(patch_resources(&path, &BTreeMap::new()).is_err());
        fs::remove_file(&path).unwrap();
    }
}
