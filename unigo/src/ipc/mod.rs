use std::borrow::Cow;

use anyhow::Context;
use http::{Request, Response, StatusCode};
use serialize_to_javascript::Options as JsSerializeOptions;
use strum::{AsRefStr, EnumString, VariantNames};
use unigo_config::Config;

use crate::app::App;

pub mod response;

pub use self::response::ProtocolResult;

pub const PROTOCOL_NAME: &str = "ipc";

/// Calls the frontend can make, addressed by the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, VariantNames)]
pub enum IpcAction {
    ListSvgIcons,
    ListNerdFontIcons,
}

/// Builds the request the frontend sends for `action`.
pub fn request(action: IpcAction) -> anyhow::Result<Request<Vec<u8>>> {
    Request::builder()
        .uri(format!("{PROTOCOL_NAME}://localhost/{}", action.as_ref()))
        .body(Vec::new())
        .map_err(Into::into)
}

/// Script run before the frontend loads, exposing the config and
/// the bound ipc actions on `window.UNIGO`.
pub fn init_script(config: &Config) -> anyhow::Result<String> {
    let js_ser_opts = JsSerializeOptions::default();

    let config = serde_json::value::to_raw_value(config)?;
    let config_js = serialize_to_javascript::Serialized::new(&config, &js_ser_opts);

    let actions = serde_json::value::to_raw_value(IpcAction::VARIANTS)?;
    let actions_js = serialize_to_javascript::Serialized::new(&actions, &js_ser_opts);

    Ok(format!(
        r#"(function () {{
            window.UNIGO = {{}};
            window.UNIGO.config = {config_js};
            window.UNIGO.ipc = {{ protocol: "{PROTOCOL_NAME}", actions: {actions_js} }};
        }})()"#
    ))
}

impl App {
    pub fn ipc_event(&self, request: Request<Vec<u8>>) -> ProtocolResult {
        let path = request.uri().path().trim_start_matches('/');
        let action: IpcAction = path
            .parse()
            .with_context(|| format!("Unknown ipc action `{path}`"))?;

        let span = tracing::debug_span!("ipc_event", action = action.as_ref());
        let _enter = span.enter();

        match action {
            IpcAction::ListSvgIcons => response::json(&self.list_svg_icons()?),
            IpcAction::ListNerdFontIcons => response::json(&self.list_nerd_font_icons()?),
        }
    }

    /// Same as [`Self::ipc_event`] but reports failures to the frontend
    /// as a `500` response instead of an error.
    pub fn handle_ipc(&self, request: Request<Vec<u8>>) -> Response<Cow<'static, [u8]>> {
        self.ipc_event(request).unwrap_or_else(|e| {
            tracing::error!("Error while processing ipc request: {e}");
            response::error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })
    }
}
