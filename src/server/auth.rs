//! Authentication middleware.
//!
//! Requests authenticate with the session cookie. The prompt endpoint also
//! accepts the script-access header when the server is configured for it; the
//! header then stands in for a session and the request runs as the configured
//! script identity.
//!
//! Both middlewares put the caller's [`ExecutionContext`] into the request
//! extensions for handlers to extract.

use axum::{
    extract::{Request, State},
    http::{header::COOKIE, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::context::ExecutionContext;
use crate::server::config::{AppConfig, SCRIPT_ACCESS_HEADER, SCRIPT_ACCESS_VALUE};
use crate::server::error::ServerError;
use crate::server::state::AppState;

/// Finds cookie `name` across every `Cookie` header.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// The script identity, when script access is enabled and the header is present.
fn script_context(config: &AppConfig, headers: &HeaderMap) -> Option<ExecutionContext> {
    let presented = headers
        .get(SCRIPT_ACCESS_HEADER)
        .and_then(|value| value.to_str().ok())
        == Some(SCRIPT_ACCESS_VALUE);
    if !presented {
        return None;
    }
    if !config.script_access {
        debug!("Script access header ignored: disabled");
        return None;
    }
    warn!(
        user = %config.script_identity.user_id,
        tenant = %config.script_identity.tenant_id,
        "Script access used"
    );
    Some(config.script_identity.clone())
}

async fn session_context(state: &AppState, headers: &HeaderMap) -> Result<ExecutionContext, ServerError> {
    let token = cookie_value(headers, &state.config.session_cookie)
        .ok_or_else(|| ServerError::Unauthorized("Unauthorized".to_string()))?;
    state.sessions.resolve(token).await.map_err(|e| {
        warn!(error = %e, "Session rejected");
        ServerError::from(e)
    })
}

/// Requires a valid session cookie.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let context = session_context(&state, request.headers()).await?;
    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}

/// Requires a valid session cookie, or script access when it is enabled.
pub async fn require_session_or_script(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let context = match script_context(&state.config, request.headers()) {
        Some(context) => context,
        None => session_context(&state, request.headers()).await?,
    };
    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_cookie_value_across_headers() {
        let map = headers(&[
            ("cookie", "theme=dark; next-auth.csrf-token=x"),
            ("cookie", "next-auth.session-token=abc-123"),
        ]);
        assert_eq!(
            cookie_value(&map, "next-auth.session-token"),
            Some("abc-123")
        );
        assert_eq!(cookie_value(&map, "missing"), None);
    }

    #[test]
    fn test_empty_cookie_is_absent() {
        let map = headers(&[("cookie", "next-auth.session-token=")]);
        assert_eq!(cookie_value(&map, "next-auth.session-token"), None);
    }

    #[test]
    fn test_script_access_requires_config() {
        let map = headers(&[(SCRIPT_ACCESS_HEADER, SCRIPT_ACCESS_VALUE)]);
        assert!(script_context(&AppConfig::default(), &map).is_none());

        let enabled = AppConfig::default().with_script_access(true);
        let context = script_context(&enabled, &map).unwrap();
        assert_eq!(context, enabled.script_identity);

        let wrong = headers(&[(SCRIPT_ACCESS_HEADER, "letmein")]);
        assert!(script_context(&enabled, &wrong).is_none());
    }
}
