//! StandaloneModuleSpec entity - a module bundled together with the loader shim
//!
//! Standalone modules are compiled independently of the main build so a
//! page can include them without loading require.js first.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::module_url;

/// How a standalone module is tagged while in debug mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DevelTag {
    /// `<script src="require.js" data-main="entry.js">`
    #[default]
    DataAttr,
    /// `<script src="require.js">` followed by `<script src="entry.js">`
    SeparateTag,
}

impl DevelTag {
    /// Parse a configured style; anything unrecognised falls back to `DataAttr`.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("separate_tag") => Self::SeparateTag,
            _ => Self::DataAttr,
        }
    }

    /// Whether the configured value is one of the known styles.
    pub fn is_known(value: &str) -> bool {
        matches!(value.trim(), "data_attr" | "separate_tag")
    }
}

/// One entry of `[require.standalone_modules]`.
///
/// `out` is optional at parse time; its absence is reported when the
/// module is compiled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandaloneModuleSpec {
    /// Output path, relative to `relative_baseurl`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out: Option<String>,

    /// Build profile override, relative to `relative_baseurl`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_profile: Option<String>,

    /// Sub-directory of the base URL the module lives in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_baseurl: Option<String>,

    /// Entry file, relative to `relative_baseurl`; defaults to the module name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_file_name: Option<String>,

    /// Debug-mode tag style (`data_attr` or `separate_tag`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devel_tag: Option<String>,
}

impl StandaloneModuleSpec {
    /// Create a spec with only an output path
    pub fn with_out(out: impl Into<String>) -> Self {
        Self {
            out: Some(out.into()),
            ..Self::default()
        }
    }

    pub fn relative_baseurl(&self) -> &str {
        self.relative_baseurl.as_deref().unwrap_or("")
    }

    pub fn devel_tag(&self) -> DevelTag {
        DevelTag::from_setting(self.devel_tag.as_deref())
    }

    /// Entry point handed to the optimizer's `include` option.
    pub fn entry_point(&self, module: &str) -> String {
        match &self.entry_file_name {
            Some(entry) => module_url::join(self.relative_baseurl(), entry),
            None => module.to_string(),
        }
    }

    /// Entry script referenced in debug mode, relative to the base URL.
    pub fn debug_entry(&self, module: &str) -> String {
        let entry = self.entry_file_name.as_deref().unwrap_or(module);
        module_url::join(self.relative_baseurl(), entry)
    }

    /// Output path relative to the base URL, if configured.
    pub fn output_path(&self) -> Option<String> {
        self.out
            .as_deref()
            .map(|out| module_url::join(self.relative_baseurl(), out))
    }

    /// Build profile path relative to the base URL, if overridden.
    pub fn build_profile_path(&self) -> Option<String> {
        self.build_profile
            .as_deref()
            .map(|profile| module_url::join(self.relative_baseurl(), profile))
    }
}
