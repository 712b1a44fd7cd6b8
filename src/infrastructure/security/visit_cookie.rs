// src/infrastructure/security/visit_cookie.rs
use crate::application::ports::session::VisitSessionCodec;
use crate::domain::visits::SiteVisits;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, SecondsFormat, Utc};
use hmac::{Hmac, Mac, digest::InvalidLength};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Encodes [`SiteVisits`] as `base64(payload).base64(hmac_sha256(payload))`.
#[derive(Clone)]
pub struct HmacVisitSessionCodec {
    mac: HmacSha256,
}

impl HmacVisitSessionCodec {
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, InvalidLength> {
        let mac = HmacSha256::new_from_slice(secret.as_ref())?;
        Ok(Self { mac })
    }

    fn tag(&self, payload: &[u8]) -> Vec<u8> {
        let mut mac = self.mac.clone();
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}

fn parse_payload(payload: &str) -> Option<SiteVisits> {
    let (visits, last_visit) = payload.split_once('|')?;
    let visits = visits.parse::<u32>().ok()?;
    let last_visit = DateTime::parse_from_rfc3339(last_visit)
        .ok()?
        .with_timezone(&Utc);
    Some(SiteVisits { visits, last_visit })
}

impl VisitSessionCodec for HmacVisitSessionCodec {
    fn encode(&self, session: &SiteVisits) -> String {
        let payload = format!(
            "{}|{}",
            session.visits,
            session
                .last_visit
                .to_rfc3339_opts(SecondsFormat::Micros, true)
        );
        let tag = self.tag(payload.as_bytes());
        format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(payload.as_bytes()),
            URL_SAFE_NO_PAD.encode(tag)
        )
    }

    fn decode(&self, token: &str) -> Option<SiteVisits> {
        let (payload_b64, tag_b64) = token.split_once('.')?;
        let payload = URL_SAFE_NO_PAD.decode(payload_b64).ok()?;
        let tag = URL_SAFE_NO_PAD.decode(tag_b64).ok()?;

        let mut mac = self.mac.clone();
        mac.update(&payload);
        mac.verify_slice(&tag).ok()?;

        parse_payload(std::str::from_utf8(&payload).ok()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn codec() -> HmacVisitSessionCodec {
        HmacVisitSessionCodec::new("0123456789abcdef0123456789abcdef").unwrap()
    }

    fn session() -> SiteVisits {
        SiteVisits {
            visits: 7,
            last_visit: Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 1).unwrap(),
        }
    }

    #[test]
    fn signed_token_is_accepted() {
        let codec = codec();
        let token = codec.encode(&session());
        assert_eq!(codec.decode(&token), Some(session()));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let codec = codec();
        let token = codec.encode(&session());
        let (_, tag) = token.split_once('.').unwrap();
        let forged_payload = URL_SAFE_NO_PAD.encode("999|2024-02-29T23:59:01.000000Z");
        assert_eq!(codec.decode(&format!("{forged_payload}.{tag}")), None);
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let other = HmacVisitSessionCodec::new("another-secret-another-secret-!!").unwrap();
        let token = other.encode(&session());
        assert_eq!(codec().decode(&token), None);
    }

    #[test]
    fn garbage_is_rejected() {
        let codec = codec();
        assert_eq!(codec.decode(""), None);
        assert_eq!(codec.decode("no-dot-here"), None);
        assert_eq!(codec.decode("!!!.???"), None);
    }
}
