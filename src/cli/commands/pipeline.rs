use crate::adapters::renderers::ConfiguredRenderer;
use crate::adapters::renderers::native_renderer::NativeRenderer;
use crate::adapters::renderers::xsltproc_renderer::{
    bundled_stylesheet_path, install_bundled_stylesheet, XsltprocRenderer,
};
use crate::adapters::snapshots::file_snapshot_store::FileSnapshotStore;
use crate::adapters::svn::svn_log_source::{SvnCredentials, SvnLogSource};
use crate::config::app_config::{AppConfig, RendererBackend};
use crate::core::services::report_service::ReportService;

/// The report pipeline wired to real collaborators.
pub type ConfiguredService = ReportService<SvnLogSource, ConfiguredRenderer, FileSnapshotStore>;

/// Build the pipeline described by `config`.
///
/// Nothing is spawned or read here; collaborators only act when a valid
/// request comes in.
pub fn build_service(config: &AppConfig) -> ConfiguredService {
    let repo = &config.repository;
    let source = SvnLogSource::new(
        repo.url.clone(),
        SvnCredentials {
            username: repo.username.clone(),
            password: repo.password.clone(),
        },
    )
    .with_path(repo.svn_path.clone());

    let snapshots = FileSnapshotStore::new(config.debug.snapshot_path.clone());
    tracing::debug!(url = %repo.url, snapshot = %snapshots.path().display(), "report pipeline configured");

    ReportService::new(source, build_renderer(config), snapshots)
}

fn build_renderer(config: &AppConfig) -> ConfiguredRenderer {
    let section = &config.renderer;
    match section.backend {
        RendererBackend::Native => {
            let mut renderer = NativeRenderer::new(section.title.clone());
            if let Some(needle) = &section.message_filter {
                renderer = renderer.with_message_filter(needle.clone());
            }
            ConfiguredRenderer::Native(renderer)
        }
        RendererBackend::Xslt => {
            if section.message_filter.is_some() {
                tracing::warn!("message_filter is ignored by the xslt renderer");
            }
            let stylesheet = match &section.stylesheet {
                Some(path) => path.clone(),
                None => bundled_stylesheet(&std::env::temp_dir()),
            };
            let renderer = XsltprocRenderer::new(stylesheet)
                .with_path(section.xsltproc_path.clone())
                .with_title(section.title.clone());
            tracing::debug!(stylesheet = %renderer.stylesheet().display(), "using xslt renderer");
            ConfiguredRenderer::Xslt(renderer)
        }
    }
}

/// Install the built-in stylesheet under `dir`.
///
/// A failed install is logged and the expected path is returned anyway;
/// xsltproc then fails at render time and the report degrades to empty.
fn bundled_stylesheet(dir: &std::path::Path) -> std::path::PathBuf {
    install_bundled_stylesheet(dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, dir = %dir.display(), "could not install bundled stylesheet");
        bundled_stylesheet_path(dir)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::renderers::xsltproc_renderer::BUNDLED_STYLESHEET;
    use crate::core::traits::log_renderer::LogRenderer;
    use std::path::Path;

    #[test]
    fn default_config_uses_native_renderer() {
        let service = build_service(&AppConfig::default());
        assert_eq!(service.fetcher.renderer.name(), "native");
    }

    #[test]
    fn xslt_backend_is_selected_from_config() {
        let config = AppConfig::from_toml(
            "[renderer]\nbackend = \"xslt\"\nstylesheet = \"assets/custom.xslt\"\n",
            Path::new("/srv"),
        )
        .unwrap();
        let service = build_service(&config);
        match &service.fetcher.renderer {
            ConfiguredRenderer::Xslt(r) => {
                assert_eq!(r.stylesheet(), Path::new("/srv/assets/custom.xslt"));
            }
            other => panic!("expected xslt renderer, got {other:?}"),
        }
    }

    #[test]
    fn xslt_without_stylesheet_uses_bundled_copy() {
        let config = AppConfig::from_toml("[renderer]\nbackend = \"xslt\"\n", Path::new("/srv")).unwrap();
        let service = build_service(&config);
        match &service.fetcher.renderer {
            ConfiguredRenderer::Xslt(r) => {
                assert_eq!(r.stylesheet(), bundled_stylesheet_path(&std::env::temp_dir()));
                let installed = std::fs::read_to_string(r.stylesheet()).unwrap();
                assert_eq!(installed, BUNDLED_STYLESHEET);
            }
            other => panic!("expected xslt renderer, got {other:?}"),
        }
    }

    #[test]
    fn failed_install_still_points_at_expected_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let path = bundled_stylesheet(&blocker);

        assert_eq!(path, bundled_stylesheet_path(&blocker));
        assert!(!path.exists());
    }

    #[test]
    fn snapshot_path_comes_from_config() {
        let config =
            AppConfig::from_toml("[debug]\nsnapshot_path = \"/tmp/x.xml\"\n", Path::new(".")).unwrap();
        let service = build_service(&config);
        assert_eq!(service.fetcher.snapshots.path(), Path::new("/tmp/x.xml"));
    }
}
