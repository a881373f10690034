use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use unigo_config::Config;

mod app;
pub mod icon;
pub mod ipc;

pub use app::{App, HostContext};

use crate::ipc::{request, IpcAction};

/// Runs the catalog without a window: dispatches every bound ipc action once
/// and writes the combined results to stdout as a single JSON object.
///
/// The frontend init script is only logged here; a webview host would
/// register it as the webview's initialization script instead.
pub fn run(data_dir: PathBuf) -> anyhow::Result<()> {
    let config = Config::load_with_fallback();

    let mut app = App::new(config);
    app.startup(HostContext::new(data_dir));

    tracing::trace!("frontend init script: {}", ipc::init_script(&app.config)?);

    let catalog = collect(&app)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &catalog).context("Failed to write catalog")?;
    writeln!(stdout)?;

    Ok(())
}

fn collect(app: &App) -> anyhow::Result<serde_json::Value> {
    let mut catalog = serde_json::Map::new();

    for (key, action) in [
        ("svgIcons", IpcAction::ListSvgIcons),
        ("nerdFontIcons", IpcAction::ListNerdFontIcons),
    ] {
        let response = app.ipc_event(request(action)?)?;
        let icons: serde_json::Value = serde_json::from_slice(response.body())?;
        tracing::info!(
            "{} returned {} icons",
            action.as_ref(),
            icons.as_array().map_or(0, Vec::len)
        );
        catalog.insert(key.to_owned(), icons);
    }

    Ok(serde_json::Value::Object(catalog))
}
