//! Bearer token issuing and verification.
//!
//! Tokens are HS256 JWTs signed with a single shared key that is supplied
//! base64-encoded. The only application claim is `roles`, an array of role
//! strings. Verification is pinned to HS256: a token whose header names any
//! other algorithm is rejected before the signature is checked.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::types::Role;

/// The only accepted signing algorithm.
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims carried by a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Roles granted to the bearer. A token without this claim has none.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Token errors.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The configured key is not valid base64.
    #[error("invalid signing key: {0}")]
    InvalidKey(#[from] base64::DecodeError),

    /// The configured key decodes to zero bytes.
    #[error("signing key is empty")]
    EmptyKey,

    /// Malformed token, bad signature, wrong algorithm, or expired.
    #[error("invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
}

/// Role check over a bearer token.
///
/// The server holds this as a capability so tests can swap the verifier.
pub trait Authorizer: Send + Sync {
    /// Verify the token and report whether it carries `role`.
    ///
    /// `Err` means the token itself is unusable; `Ok(false)` means it is
    /// genuine but lacks the role.
    fn token_has_role(&self, token: &str, role: Role) -> Result<bool, TokenError>;
}

/// Issues and verifies HS256 tokens with a shared symmetric key.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Build from raw key bytes.
    pub fn new(key: &[u8]) -> Result<Self, TokenError> {
        if key.is_empty() {
            return Err(TokenError::EmptyKey);
        }

        let mut validation = Validation::new(SIGNING_ALGORITHM);
        // Tokens from the issuing utility carry no registered claims;
        // exp/nbf are still enforced when present.
        validation.required_spec_claims.clear();
        validation.validate_nbf = true;
        // No audience is configured, so `aud` is not checked.
        validation.validate_aud = false;

        Ok(Self {
            encoding: EncodingKey::from_secret(key),
            decoding: DecodingKey::from_secret(key),
            validation,
        })
    }

    /// Build from a standard-alphabet base64 key.
    pub fn from_base64(key: &str) -> Result<Self, TokenError> {
        let bytes = STANDARD.decode(key.trim())?;
        Self::new(&bytes)
    }

    /// Issue a token carrying `roles`.
    pub fn issue<S: AsRef<str>>(&self, roles: &[S]) -> Result<String, TokenError> {
        let claims = Claims {
            roles: roles.iter().map(|r| r.as_ref().to_string()).collect(),
        };
        Ok(encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding)?)
    }

    /// Verify a token and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }

    /// Verify a token and check it for an arbitrary role string.
    pub fn has_role(&self, token: &str, role: &str) -> Result<bool, TokenError> {
        let claims = self.verify(token)?;
        Ok(claims.roles.iter().any(|r| r == role))
    }
}

impl Authorizer for TokenService {
    fn token_has_role(&self, token: &str, role: Role) -> Result<bool, TokenError> {
        self.has_role(token, role.as_str())
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}
