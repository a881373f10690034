use std::path::{Path, PathBuf};
use std::time::SystemTime;

use unigo_catalog::{Catalog, NerdFontIcon, SvgIcon};
use unigo_config::Config;

/// Context handed over by the host once it has started.
///
/// Kept for the lifetime of the process and never consulted by the
/// catalog calls themselves.
#[derive(Debug, Clone)]
pub struct HostContext {
    data_dir: PathBuf,
    started_at: SystemTime,
}

impl HostContext {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            started_at: SystemTime::now(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn started_at(&self) -> SystemTime {
        self.started_at
    }
}

#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub catalog: Catalog,
    context: Option<HostContext>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let catalog = Catalog::from(&config.catalog);
        Self {
            config,
            catalog,
            context: None,
        }
    }

    /// Called by the host when it starts.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn startup(&mut self, context: HostContext) {
        self.context = Some(context);
    }

    pub fn context(&self) -> Option<&HostContext> {
        self.context.as_ref()
    }

    /// Lists svg icons from the configured directory.
    pub fn list_svg_icons(&self) -> unigo_catalog::Result<Vec<SvgIcon>> {
        self.catalog.svg_icons()
    }

    /// Lists glyphs from the configured Nerd Font manifest.
    pub fn list_nerd_font_icons(&self) -> unigo_catalog::Result<Vec<NerdFontIcon>> {
        self.catalog.nerd_font_icons()
    }
}
