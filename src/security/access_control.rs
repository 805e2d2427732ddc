//! Access gate middleware.
//!
//! Every request passes through here before the renderer sees it. The gate
//! compares the visitor's address against a fixed allowlist and answers with a
//! 403 denial page on mismatch.
//!
//! # Design Decisions
//! - The allowlist is loaded once at startup into an immutable set; updating it
//!   means redeploying, which matches its fixed-at-deploy semantics.
//! - Membership is exact string equality. No CIDR matching, no IPv6
//!   canonicalization, no normalization beyond trimming the forwarded token.
//! - `X-Forwarded-For` is client-controllable unless a trusted proxy overwrites
//!   it, so trusting it is a config decision, not a default we hide.

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::warn;

use crate::gallery::render::denied_page;

/// Header carrying the original client address when behind a proxy.
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Address echoed on the denial page when the peer address is unknown.
const UNKNOWN_ADDRESS: &str = "unknown";

/// Immutable set of addresses permitted through the gate.
#[derive(Debug)]
pub struct Allowlist {
    addresses: BTreeSet<String>,
}

impl Allowlist {
    /// Build an allowlist from literal address strings.
    pub fn new<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            addresses: addresses.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact-match membership test.
    pub fn contains(&self, address: &str) -> bool {
        self.addresses.contains(address)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// State required by the gate middleware.
#[derive(Clone)]
pub struct GateState {
    pub allowlist: Arc<Allowlist>,
    pub trust_forwarded_header: bool,
}

/// Determine the candidate address for the allowlist check.
///
/// When the forwarded header is trusted and present, the candidate is its first
/// comma-separated token, trimmed. An empty first segment yields the empty
/// string, which then simply fails the membership test. Without a usable
/// header the candidate is the direct peer IP; `None` means neither source
/// produced an address.
pub fn candidate_address(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
    trust_forwarded_header: bool,
) -> Option<String> {
    if trust_forwarded_header {
        if let Some(forwarded) = headers.get(X_FORWARDED_FOR).and_then(|v| v.to_str().ok()) {
            let first = forwarded.split(',').next().unwrap_or("").trim();
            return Some(first.to_string());
        }
    }

    peer.map(|addr| addr.ip().to_string())
}

/// Gate middleware: allow the request through or answer 403 on the spot.
pub async fn access_gate(
    State(state): State<GateState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let candidate = candidate_address(req.headers(), peer, state.trust_forwarded_header);

    match candidate {
        Some(ref address) if state.allowlist.contains(address) => next.run(req).await,
        Some(address) => {
            warn!(address = %address, "access denied");
            (StatusCode::FORBIDDEN, Html(denied_page(&address))).into_response()
        }
        None => {
            // No peer address and no trusted forwarded header: deny.
            warn!("access denied: no client address in connection metadata");
            (StatusCode::FORBIDDEN, Html(denied_page(UNKNOWN_ADDRESS))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer(addr: &str) -> Option<SocketAddr> {
        Some(format!("{addr}:44321").parse().unwrap())
    }

    #[test]
    fn allowlist_is_exact_match() {
        let allowlist = Allowlist::new(["203.0.113.5", "198.51.100.7"]);
        assert!(allowlist.contains("203.0.113.5"));
        assert!(!allowlist.contains("203.0.113.50"));
        assert!(!allowlist.contains(" 203.0.113.5"));
        assert!(!allowlist.contains("9.9.9.9"));
    }

    #[test]
    fn empty_allowlist_admits_nobody() {
        let allowlist = Allowlist::new(Vec::<String>::new());
        assert!(allowlist.is_empty());
        assert!(!allowlist.contains("127.0.0.1"));
    }

    #[test]
    fn forwarded_header_takes_first_trimmed_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            X_FORWARDED_FOR,
            HeaderValue::from_static("203.0.113.5, 10.0.0.1"),
        );
        let candidate = candidate_address(&headers, peer("10.0.0.9"), true);
        assert_eq!(candidate.as_deref(), Some("203.0.113.5"));
    }

    #[test]
    fn forwarded_header_with_empty_first_segment_yields_empty_candidate() {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_FOR, HeaderValue::from_static(", 10.0.0.1"));
        let candidate = candidate_address(&headers, peer("10.0.0.9"), true);
        assert_eq!(candidate.as_deref(), Some(""));
    }

    #[test]
    fn no_forwarded_header_uses_peer_address() {
        let headers = HeaderMap::new();
        let candidate = candidate_address(&headers, peer("192.0.2.44"), true);
        assert_eq!(candidate.as_deref(), Some("192.0.2.44"));
    }

    #[test]
    fn untrusted_forwarded_header_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_FOR, HeaderValue::from_static("203.0.113.5"));
        let candidate = candidate_address(&headers, peer("192.0.2.44"), false);
        assert_eq!(candidate.as_deref(), Some("192.0.2.44"));
    }

    #[test]
    fn no_address_at_all_is_none() {
        let headers = HeaderMap::new();
        assert_eq!(candidate_address(&headers, None, true), None);
    }
}
