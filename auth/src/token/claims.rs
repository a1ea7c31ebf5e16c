use serde::Deserialize;
use serde::Serialize;

/// Payload sealed into every issued token.
///
/// Possession of a correctly signed, unexpired token carrying these claims is
/// the sole authentication evidence; nothing is kept server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the login identifier the token was issued for
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}
