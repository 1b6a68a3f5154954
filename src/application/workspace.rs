//! Compile workspace
//!
//! Two private temporary directories scoped to one build: the compile tree
//! the optimizer reads (`appDir`) and the build tree it writes (`dir`).
//! Both are removed when the workspace is dropped, whichever stage the
//! build stopped in.

use std::path::{Path, PathBuf};

use tempfile::{Builder, TempDir};
use tracing::{debug, warn};

use crate::domain::value_objects::module_url::{self, resolve_require_url};
use crate::error::RequireResult;

#[derive(Debug)]
pub struct CompileWorkspace {
    compile_dir: TempDir,
    build_dir: TempDir,
    base_url: String,
}

impl CompileWorkspace {
    /// Create both directories with unique names
    pub fn open(base_url: &str) -> RequireResult<Self> {
        let compile_dir = Builder::new().prefix("requirekit-compile-").tempdir()?;
        let build_dir = Builder::new().prefix("requirekit-build-").tempdir()?;
        debug!(
            compile_dir = %compile_dir.path().display(),
            build_dir = %build_dir.path().display(),
            "opened compile workspace"
        );
        Ok(Self {
            compile_dir,
            build_dir,
            base_url: base_url.to_string(),
        })
    }

    pub fn compile_dir(&self) -> &Path {
        self.compile_dir.path()
    }

    pub fn build_dir(&self) -> &Path {
        self.build_dir.path()
    }

    /// `name` resolved against the base URL inside the compile tree.
    ///
    /// `None` when the resolved name climbs out of the tree.
    pub fn compile_dir_path(&self, name: &str) -> Option<PathBuf> {
        self.resolve_inside(self.compile_dir(), name)
    }

    /// `name` resolved against the base URL inside the build tree.
    ///
    /// `None` when the resolved name climbs out of the tree.
    pub fn build_dir_path(&self, name: &str) -> Option<PathBuf> {
        self.resolve_inside(self.build_dir(), name)
    }

    fn resolve_inside(&self, root: &Path, name: &str) -> Option<PathBuf> {
        let logical = resolve_require_url(&self.base_url, name);
        if module_url::escapes_root(&logical) {
            return None;
        }
        Some(module_url::logical_to_path(root, &logical))
    }

    /// Remove both directories now, logging (not failing on) removal errors
    pub fn close(self) {
        for dir in [self.compile_dir, self.build_dir] {
            let path = dir.path().to_path_buf();
            if let Err(e) = dir.close() {
                warn!(path = %path.display(), error = %e, "failed to remove workspace directory");
            }
        }
    }
}
