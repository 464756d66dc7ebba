pub mod native_renderer;
pub mod xsltproc_renderer;

use crate::core::errors::Result;
use crate::core::traits::log_renderer::LogRenderer;

use native_renderer::NativeRenderer;
use xsltproc_renderer::XsltprocRenderer;

/// Renderer chosen by `[renderer] backend` at startup.
#[derive(Debug, Clone)]
pub enum ConfiguredRenderer {
    Native(NativeRenderer),
    Xslt(XsltprocRenderer),
}

impl LogRenderer for ConfiguredRenderer {
    fn render(&self, raw_log: &[u8]) -> Result<String> {
        match self {
            Self::Native(r) => r.render(raw_log),
            Self::Xslt(r) => r.render(raw_log),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Native(r) => r.name(),
            Self::Xslt(r) => r.name(),
        }
    }
}
