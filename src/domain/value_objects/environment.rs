//! Optimizer execution environment setting
//!
//! Accepted TOML forms:
//!   environment = "auto"                      # probe node, then rhino
//!   environment = "node"
//!   environment = "rhino"
//!   environment = { command = ["sh"] }        # custom launcher prefix

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EnvironmentSetting {
    #[default]
    Auto,
    Node,
    Rhino,
    Custom { command: Vec<String> },
}

impl EnvironmentSetting {
    /// Parse a named environment (used for env var overrides).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "node" | "nodejs" => Some(Self::Node),
            "rhino" | "java" => Some(Self::Rhino),
            _ => None,
        }
    }
}

impl fmt::Display for EnvironmentSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Node => write!(f, "node"),
            Self::Rhino => write!(f, "rhino"),
            Self::Custom { command } => write!(f, "custom ({})", command.join(" ")),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EnvironmentDe {
    Name(String),
    Table { command: Vec<String> },
}

impl<'de> Deserialize<'de> for EnvironmentSetting {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match EnvironmentDe::deserialize(deserializer)? {
            EnvironmentDe::Name(name) => Self::from_name(&name).ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "unknown environment '{}', expected one of: auto, node, rhino",
                    name
                ))
            }),
            EnvironmentDe::Table { command } => Ok(Self::Custom { command }),
        }
    }
}

impl Serialize for EnvironmentSetting {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        match self {
            Self::Custom { command } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("command", command)?;
                map.end()
            }
            named => serializer.serialize_str(&named.to_string()),
        }
    }
}
