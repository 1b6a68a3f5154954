//! Build profile setting
//!
//! Accepted TOML forms:
//!   build_profile = "app.build.js"   # user profile, relative to the base URL
//!   build_profile = false            # skip the main optimizer run
//!   (absent, or `true`)              # bundled default profile

use serde::{Deserialize, Serialize};

/// Which profile the main optimizer run uses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BuildProfile {
    /// The profile shipped in the resources directory
    #[default]
    Bundled,
    /// The main optimizer run is skipped entirely
    Disabled,
    /// A user profile, resolved relative to the compile workspace base URL
    Path(String),
}

impl BuildProfile {
    pub fn is_disabled(&self) -> bool {
        matches!(self, BuildProfile::Disabled)
    }

    /// The user-supplied profile name, if any
    pub fn user_path(&self) -> Option<&str> {
        match self {
            BuildProfile::Path(p) => Some(p),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BuildProfileDe {
    Flag(bool),
    Path(String),
}

impl<'de> Deserialize<'de> for BuildProfile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match BuildProfileDe::deserialize(deserializer)? {
            BuildProfileDe::Flag(false) => Ok(Self::Disabled),
            BuildProfileDe::Flag(true) => Ok(Self::Bundled),
            BuildProfileDe::Path(p) => Ok(Self::Path(p)),
        }
    }
}

impl Serialize for BuildProfile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            BuildProfile::Bundled => serializer.serialize_bool(true),
            BuildProfile::Disabled => serializer.serialize_bool(false),
            BuildProfile::Path(p) => serializer.serialize_str(p),
        }
    }
}
