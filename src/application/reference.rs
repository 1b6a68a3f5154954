//! Module reference resolver
//!
//! Renders the script tag(s) a page uses to load a module: the compiled
//! standalone bundle in production, or require.js pointed at the entry
//! module otherwise.

use tracing::warn;

use crate::config::RequireConfig;
use crate::domain::entities::DevelTag;
use crate::domain::ports::AssetStorage;
use crate::domain::value_objects::{resolve_require_module, resolve_require_url};

pub struct ModuleReference<'a> {
    config: &'a RequireConfig,
    storage: &'a dyn AssetStorage,
    debug: bool,
}

impl<'a> ModuleReference<'a> {
    pub fn new(config: &'a RequireConfig, storage: &'a dyn AssetStorage) -> Self {
        Self {
            config,
            storage,
            debug: config.debug,
        }
    }

    /// Override the configured debug flag
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Markup that loads `module`
    pub fn render(&self, module: &str) -> String {
        let base = &self.config.base_url;

        let Some(spec) = self.config.standalone_modules.get(module) else {
            return self.loader_tag(Some(&resolve_require_module(base, module)));
        };

        if !self.debug {
            if let Some(out) = spec.output_path() {
                return script_tag(&self.url(&resolve_require_module(base, &out)));
            }
        }

        if let Some(style) = spec.devel_tag.as_deref().filter(|s| !DevelTag::is_known(s)) {
            warn!(module, devel_tag = style, "unrecognised devel_tag, using data_attr");
        }
        let entry = resolve_require_module(base, &spec.debug_entry(module));
        match spec.devel_tag() {
            DevelTag::DataAttr => self.loader_tag(Some(&entry)),
            DevelTag::SeparateTag => {
                format!("{}{}", self.loader_tag(None), script_tag(&self.url(&entry)))
            }
        }
    }

    fn url(&self, name: &str) -> String {
        self.storage.url(name)
    }

    fn loader_tag(&self, main: Option<&str>) -> String {
        let src = self.url(&resolve_require_url(&self.config.base_url, &self.config.require_js));
        match main {
            Some(main) => format!(
                r#"<script type="text/javascript" src="{}" data-main="{}"></script>"#,
                escape_attr(&src),
                escape_attr(&self.url(main))
            ),
            None => script_tag(&src),
        }
    }
}

fn script_tag(src: &str) -> String {
    format!(
        r#"<script type="text/javascript" src="{}"></script>"#,
        escape_attr(src)
    )
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}
