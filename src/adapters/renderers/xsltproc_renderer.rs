use std::path::{Path, PathBuf};
use std::process::Command;

use crate::adapters::process;
use crate::core::errors::{ReportError, Result};
use crate::core::traits::log_renderer::LogRenderer;

/// The stylesheet shipped in `assets/svn-log.xslt`, compiled into the binary.
pub const BUNDLED_STYLESHEET: &str = include_str!("../../../assets/svn-log.xslt");

/// File name used when the bundled stylesheet is written out for xsltproc.
const BUNDLED_FILE_NAME: &str = "commit-report_svn-log.xslt";

/// Where [`install_bundled_stylesheet`] puts the stylesheet inside `dir`.
pub fn bundled_stylesheet_path(dir: &Path) -> PathBuf {
    dir.join(BUNDLED_FILE_NAME)
}

/// Write the bundled stylesheet into `dir` and return its path.
///
/// The file is rewritten only when its content differs, so a stale copy
/// from an older build gets replaced.
pub fn install_bundled_stylesheet(dir: &Path) -> Result<PathBuf> {
    let path = bundled_stylesheet_path(dir);
    let current = std::fs::read_to_string(&path).ok();
    if current.as_deref() != Some(BUNDLED_STYLESHEET) {
        std::fs::create_dir_all(dir)?;
        std::fs::write(&path, BUNDLED_STYLESHEET)?;
    }
    Ok(path)
}

/// Renderer that pipes the raw log through `xsltproc <stylesheet> -`.
///
/// The bundled stylesheet emits the `(author: <name>)` annotations the
/// summary relies on; custom stylesheets must too.
#[derive(Debug, Clone)]
pub struct XsltprocRenderer {
    /// Path to the xsltproc binary (defaults to "xsltproc").
    xsltproc_path: PathBuf,
    stylesheet: PathBuf,
    title: Option<String>,
}

impl XsltprocRenderer {
    pub fn new(stylesheet: PathBuf) -> Self {
        Self {
            xsltproc_path: PathBuf::from("xsltproc"),
            stylesheet,
            title: None,
        }
    }

    /// Use a custom xsltproc binary.
    pub fn with_path(mut self, xsltproc_path: PathBuf) -> Self {
        self.xsltproc_path = xsltproc_path;
        self
    }

    /// Pass a `title` string parameter to the stylesheet.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Check if xsltproc is available on the system.
    pub fn is_available(&self) -> bool {
        Command::new(&self.xsltproc_path)
            .arg("--version")
            .output()
            .is_ok_and(|o| o.status.success())
    }

    pub fn stylesheet(&self) -> &Path {
        &self.stylesheet
    }

    /// Arguments for one xsltproc run reading the log from stdin.
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(title) = &self.title {
            args.extend(["--stringparam".to_string(), "title".to_string(), title.clone()]);
        }
        args.push(self.stylesheet.display().to_string());
        args.push("-".into());
        args
    }
}

impl LogRenderer for XsltprocRenderer {
    fn render(&self, raw_log: &[u8]) -> Result<String> {
        let out = process::run(&self.xsltproc_path, self.args(), Some(raw_log))
            .map_err(|reason| ReportError::RenderFailed { reason })?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    fn name(&self) -> &str {
        "xslt"
    }
}
