use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Creates and verifies signed, time-bound tokens (HS256).
///
/// The signing key is established once at startup and shared read-only across
/// requests. Expiry is checked against server wall-clock time with zero
/// leeway: clock skew is not compensated.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Create a codec from the server-held secret key.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // jsonwebtoken tolerates 60 seconds of clock skew by default
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a token for `subject`, valid for `ttl` from now.
    ///
    /// # Errors
    /// * `Signing` - Token serialization or signing failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_owned(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token's signature and expiry, recovering its claims.
    ///
    /// # Errors
    /// * `Malformed` - Structure cannot be decoded
    /// * `SignatureMismatch` - Tampered payload or wrong key
    /// * `Expired` - Past the expiry timestamp
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_issue_and_verify() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .issue("user@example.com", Duration::hours(24))
            .expect("Failed to issue token");
        assert!(!token.is_empty());

        let claims = codec.verify(&token).expect("Failed to verify token");
        assert_eq!(claims.sub, "user@example.com");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_verify_expired_token() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .issue("user@example.com", Duration::seconds(-60))
            .expect("Failed to issue token");

        let result = codec.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let codec = TokenCodec::new(SECRET);
        let other = TokenCodec::new(b"a_different_32_byte_minimum_secret!!");

        let token = codec
            .issue("user@example.com", Duration::hours(1))
            .expect("Failed to issue token");

        let result = other.verify(&token);
        assert!(matches!(result, Err(TokenError::SignatureMismatch)));
    }

    #[test]
    fn test_verify_tampered_payload() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .issue("user@example.com", Duration::hours(1))
            .expect("Failed to issue token");

        // Flip one character of the payload segment; the signature no longer
        // covers the message, so this must never yield a subject.
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let payload = parts[1].clone();
        let flipped = if payload.starts_with('A') { "B" } else { "A" };
        parts[1] = format!("{}{}", flipped, &payload[1..]);
        let tampered = parts.join(".");

        let result = codec.verify(&tampered);
        assert!(matches!(result, Err(TokenError::SignatureMismatch)));
    }

    #[test]
    fn test_verify_malformed_token() {
        let codec = TokenCodec::new(SECRET);

        assert!(matches!(
            codec.verify("not-a-token"),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(
            codec.verify("only.two"),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(codec.verify(""), Err(TokenError::Malformed(_))));
    }
}
