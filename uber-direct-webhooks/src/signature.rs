//! HMAC-SHA256 webhook signatures.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;
use uber_direct_core::{ConfigurationError, Result};

type HmacSha256 = Hmac<Sha256>;

fn mac(secret: &str, payload: &str) -> Result<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| ConfigurationError::new(format!("Invalid webhook secret: {e}")))?;
    mac.update(payload.as_bytes());
    Ok(mac)
}

/// Lower-case hex HMAC-SHA256 of `payload` keyed with `secret`.
pub fn compute_signature(secret: &str, payload: &str) -> Result<String> {
    Ok(hex::encode(mac(secret, payload)?.finalize().into_bytes()))
}

/// Check `provided` against the signature of `payload`.
///
/// Comparison is constant time. A value that is not hex never verifies.
pub fn verify_signature(secret: &str, payload: &str, provided: &str) -> bool {
    let Ok(bytes) = hex::decode(provided.trim()) else {
        return false;
    };
    mac(secret, payload).is_ok_and(|mac| mac.verify_slice(&bytes).is_ok())
}

/// Signs and verifies payloads with a shared secret.
#[derive(Clone)]
pub struct SignatureVerifier {
    secret: String,
}

impl fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureVerifier")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl SignatureVerifier {
    /// Create a verifier for `secret`.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Signature of `payload`.
    pub fn compute(&self, payload: &str) -> Result<String> {
        compute_signature(&self.secret, payload)
    }

    /// Whether `provided` is the signature of `payload`.
    pub fn verify(&self, payload: &str, provided: &str) -> bool {
        verify_signature(&self.secret, payload, provided)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"kind":"event.courier_update","delivery_id":"del_1"}"#;

    #[test]
    fn test_known_vector() {
        // RFC 4231 test case 2
        assert_eq!(
            compute_signature("Jefe", "what do ya want for nothing?").unwrap(),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_deterministic_lowercase_hex() {
        let a = compute_signature("secret", BODY).unwrap();
        let b = compute_signature("secret", BODY).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_round_trip() {
        let verifier = SignatureVerifier::new("secret");
        let signature = verifier.compute(BODY).unwrap();
        assert!(verifier.verify(BODY, &signature));
        assert!(verifier.verify(BODY, &signature.to_uppercase()));
    }

    #[test]
    fn test_single_character_tamper() {
        let signature = compute_signature("secret", BODY).unwrap();
        let tampered = BODY.replace("del_1", "del_2");
        assert!(!verify_signature("secret", &tampered, &signature));
    }

    #[test]
    fn test_wrong_secret() {
        let signature = compute_signature("secret", BODY).unwrap();
        assert!(!verify_signature("other", BODY, &signature));
    }

    #[test]
    fn test_non_hex_never_verifies() {
        assert!(!verify_signature("secret", BODY, "fake_signature"));
        assert!(!verify_signature("secret", BODY, ""));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", SignatureVerifier::new("whsec_123"));
        assert!(!debug.contains("whsec_123"));
    }
}
