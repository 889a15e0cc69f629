//! Request context extraction from HTTP headers.

use axum::http::{HeaderMap, HeaderName, header};
use std::net::IpAddr;

use crate::domain::entities::RequestContext;

static X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");
static X_REAL_IP: HeaderName = HeaderName::from_static("x-real-ip");

/// Builds the [`RequestContext`] for a redirect from its headers and peer
/// address.
///
/// The client identifier is the peer IP. When `behind_proxy` is set, the first
/// `X-Forwarded-For` entry wins, then `X-Real-IP`, then the peer IP. Proxy
/// headers are ignored otherwise, since clients can forge them.
///
/// Headers with non-UTF-8 values are treated as absent.
pub fn extract_request_context(
    headers: &HeaderMap,
    peer: Option<IpAddr>,
    behind_proxy: bool,
) -> RequestContext {
    let client_identifier = if behind_proxy {
        forwarded_client(headers).or_else(|| peer.map(|ip| ip.to_string()))
    } else {
        peer.map(|ip| ip.to_string())
    };

    RequestContext::new(
        header_str(headers, &header::USER_AGENT),
        header_str(headers, &header::REFERER),
        client_identifier,
    )
}

fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn forwarded_client(headers: &HeaderMap) -> Option<String> {
    let forwarded = header_str(headers, &X_FORWARDED_FOR)
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    forwarded
        .or_else(|| header_str(headers, &X_REAL_IP).map(str::trim))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}
