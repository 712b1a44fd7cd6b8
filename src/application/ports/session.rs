// src/application/ports/session.rs
use crate::domain::visits::SiteVisits;

/// Serializes the site visit counter into an opaque, tamper-evident token
/// that the client carries between requests.
pub trait VisitSessionCodec: Send + Sync {
    fn encode(&self, session: &SiteVisits) -> String;
    /// Returns `None` for malformed or forged tokens.
    fn decode(&self, token: &str) -> Option<SiteVisits>;
}
