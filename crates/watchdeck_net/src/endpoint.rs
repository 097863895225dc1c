use url::Url;

use crate::EndpointError;

/// Fixed path of the live feed on the backend.
pub const FEED_PATH: &str = "/ws/status-updates";

/// Derives the live-feed URL from the dashboard's base URL. The socket
/// scheme mirrors the base scheme: `http` feeds over `ws`, `https` over
/// `wss`. Host and port are kept as-is.
pub fn feed_url(base: &Url) -> Result<Url, EndpointError> {
    let scheme = match base.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => return Err(EndpointError::UnsupportedScheme(other.to_string())),
    };

    let mut url = base.clone();
    url.set_scheme(scheme)
        .map_err(|()| EndpointError::UnsupportedScheme(base.scheme().to_string()))?;
    url.set_path(FEED_PATH);
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
