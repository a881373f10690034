use std::borrow::Cow;
use std::path::Path;

use http::header::CONTENT_TYPE;
use http::{Request, Response, StatusCode};
use unigo_catalog::has_svg_extension;

use crate::app::App;
use crate::ipc::{response, ProtocolResult};

pub const PROTOCOL_NAME: &str = "unigoicon";

impl App {
    /// `unigoicon://` protocol, serves files from the configured svg directory.
    pub fn icon_protocol(&self, request: Request<Vec<u8>>) -> Response<Cow<'static, [u8]>> {
        let span = tracing::trace_span!("protocol::unigoicon", uri = %request.uri());
        let _enter = span.enter();

        serve_svg(self.catalog.svg_dir(), request.uri().path()).unwrap_or_else(|e| {
            tracing::warn!("Failed to serve icon: {e}");

            let not_found = e
                .downcast_ref::<std::io::Error>()
                .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound);
            let status = if not_found {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };

            response::error(status, e.to_string())
        })
    }
}

fn serve_svg(svg_dir: &Path, path: &str) -> ProtocolResult {
    let path = path.trim_start_matches('/');
    let file = percent_encoding::percent_decode_str(path).decode_utf8()?;

    if !has_svg_extension(file.as_bytes()) {
        anyhow::bail!("Only svg icons are supported, requested `{file}`");
    }

    let root = dunce::canonicalize(svg_dir)?;
    let path = dunce::canonicalize(root.join(&*file))?;
    if !path.starts_with(&root) {
        anyhow::bail!("`{file}` is outside of the svg directory");
    }

    response::base()
        .header(CONTENT_TYPE, "image/svg+xml")
        .status(StatusCode::OK)
        .body(std::fs::read(path)?.into())
        .map_err(Into::into)
}
