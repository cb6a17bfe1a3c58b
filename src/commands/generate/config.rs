//! Generation config: built-in defaults, optionally overridden by `guardgen.toml`.
use super::axes::{is_dotted_identifier, is_identifier, AttributeKind, AxisSet, BaseType, Family, ValueKind};
use super::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "guardgen.toml";
pub const DEFAULT_NAMESPACE: &str = "Mirror.Tests.Generated.Attributes";
pub const DEFAULT_ARTIFACT: &str = "AttributeTest";

/// On-disk shape. Every field is optional; missing ones take the defaults.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_kinds: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeEntry {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<Family>,
    #[serde(default)]
    pub silent: bool,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub namespace: String,
    pub artifact: String,
    pub imports: Vec<String>,
    pub axes: AxisSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            artifact: DEFAULT_ARTIFACT.to_string(),
            imports: default_imports(),
            axes: AxisSet::default(),
        }
    }
}

fn default_imports() -> Vec<String> {
    [
        "Mirror",
        "Mirror.Tests.Generators",
        "NUnit.Framework",
        "UnityEngine",
        "UnityEngine.TestTools",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    /// Explicit path, else `guardgen.toml` in the working directory, else defaults.
    pub fn load(path: Option<&Path>) -> GenResult<(Self, Option<std::path::PathBuf>)> {
        let candidate = match path {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let p = Path::new(DEFAULT_CONFIG_FILE);
                p.is_file().then(|| p.to_path_buf())
            }
        };
        let Some(config_path) = candidate else {
            let config = Config::default();
            config.validate()?;
            return Ok((config, None));
        };
        let toml_str = fs::read_to_string(&config_path).map_err(|source| GenError::Io {
            path: config_path.clone(),
            source,
        })?;
        let config = Config::from_toml_str(&toml_str)?;
        Ok((config, Some(config_path)))
    }

    pub fn from_toml_str(toml_str: &str) -> GenResult<Self> {
        let file: ConfigFile = toml::from_str(toml_str)?;
        Config::from_file(file)
    }

    pub fn from_file(file: ConfigFile) -> GenResult<Self> {
        let defaults = Config::default();

        let attributes = match file.attributes {
            Some(entries) => entries
                .into_iter()
                .map(|e| -> GenResult<AttributeKind> {
                    let family = e
                        .family
                        .ok_or_else(|| GenError::UnclassifiedAttribute(e.label.clone()))?;
                    Ok(AttributeKind {
                        label: e.label,
                        family,
                        silent: e.silent,
                    })
                })
                .collect::<GenResult<Vec<_>>>()?,
            None => defaults.axes.attributes,
        };
        let base_types = match file.base_types {
            Some(names) => names.iter().map(|n| BaseType::new(n.trim())).collect(),
            None => defaults.axes.base_types,
        };
        let value_kinds = match file.value_kinds {
            Some(names) => names
                .iter()
                .map(|n| n.parse::<ValueKind>())
                .collect::<GenResult<Vec<_>>>()?,
            None => defaults.axes.value_kinds,
        };

        let config = Config {
            namespace: file.namespace.unwrap_or(defaults.namespace),
            artifact: file.artifact.unwrap_or(defaults.artifact),
            imports: file.imports.unwrap_or(defaults.imports),
            axes: AxisSet {
                attributes,
                base_types,
                value_kinds,
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GenResult<()> {
        if !is_dotted_identifier(&self.namespace) {
            return Err(GenError::InvalidConfig(format!(
                "namespace '{}' is not a dotted identifier",
                self.namespace
            )));
        }
        if !is_identifier(&self.artifact) {
            return Err(GenError::InvalidConfig(format!(
                "artifact name '{}' is not an identifier",
                self.artifact
            )));
        }
        for import in &self.imports {
            if !is_dotted_identifier(import) {
                return Err(GenError::InvalidConfig(format!(
                    "import '{}' is not a dotted identifier",
                    import
                )));
            }
        }
        self.axes.validate()
    }

    /// Fully spelled out file form of this config.
    pub fn to_file(&self) -> ConfigFile {
        ConfigFile {
            namespace: Some(self.namespace.clone()),
            artifact: Some(self.artifact.clone()),
            imports: Some(self.imports.clone()),
            base_types: Some(self.axes.base_types.iter().map(|b| b.name.clone()).collect()),
            value_kinds: Some(
                self.axes
                    .value_kinds
                    .iter()
                    .map(|k| k.source_name().to_string())
                    .collect(),
            ),
            attributes: Some(
                self.axes
                    .attributes
                    .iter()
                    .map(|a| AttributeEntry {
                        label: a.label.clone(),
                        family: Some(a.family),
                        silent: a.silent,
                    })
                    .collect(),
            ),
        }
    }

    pub fn to_toml_string(&self) -> GenResult<String> {
        Ok(toml::to_string(&self.to_file())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn attributes_are_read_with_explicit_family() {
        let config = Config::from_toml_str(
            r#"
namespace = "Game.Tests"
base_types = ["NetworkBehaviour", "CustomBehaviour"]
value_kinds = ["int", "Vector3"]

[[attributes]]
label = "Server"
family = "server"

[[attributes]]
label = "ServerCallback"
family = "server"
silent = true
"#,
        )
        .unwrap();
        assert_eq!(config.namespace, "Game.Tests");
        assert_eq!(config.artifact, DEFAULT_ARTIFACT);
        assert_eq!(config.axes.value_kinds, vec![ValueKind::Int, ValueKind::Vector3]);
        assert_eq!(
            config.axes.attributes,
            vec![
                AttributeKind::new("Server", Family::Server, false),
                AttributeKind::new("ServerCallback", Family::Server, true),
            ]
        );
        assert_eq!(config.axes.cell_count(), 2 * 2 * 2 * 2);
    }

    #[test]
    fn attribute_without_family_is_a_config_error() {
        let err = Config::from_toml_str(
            r#"
[[attributes]]
label = "TargetRpc"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, GenError::UnclassifiedAttribute(ref l) if l == "TargetRpc"));
        assert_eq!(
            err.to_string(),
            "attribute 'TargetRpc' must declare a server or client family"
        );
    }

    #[test]
    fn unknown_value_kind_is_rejected() {
        let err = Config::from_toml_str(r#"value_kinds = ["int", "decimal"]"#).unwrap_err();
        assert!(matches!(err, GenError::UnknownValueKind(ref k) if k == "decimal"));
    }

    #[test]
    fn unknown_family_fails_to_parse() {
        let err = Config::from_toml_str(
            r#"
[[attributes]]
label = "Host"
family = "host"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, GenError::ConfigParse(_)));
    }

    #[test]
    fn bad_namespace_is_rejected() {
        let err = Config::from_toml_str(r#"namespace = "Mirror Tests""#).unwrap_err();
        assert!(matches!(err, GenError::InvalidConfig(_)));
    }

    #[test]
    fn serialized_defaults_load_back_unchanged() {
        let text = Config::default().to_toml_string().unwrap();
        assert!(text.contains("[[attributes]]"));
        assert_eq!(Config::from_toml_str(&text).unwrap(), Config::default());
    }
}
