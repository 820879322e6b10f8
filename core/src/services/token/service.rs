//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{AuthTokens, TokenPayload, TokenType};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Signing and verification keys for one token kind
struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl KeyPair {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// Issues and verifies HS256 tokens
///
/// Access and refresh tokens are signed with independent secrets. Holding the
/// access key never allows forging a refresh token.
pub struct TokenService {
    config: TokenServiceConfig,
    access_keys: KeyPair,
    refresh_keys: KeyPair,
    validation: Validation,
    /// Same as `validation` without the expiry check; used only to identify
    /// tokens signed by the other kind's key
    signature_only: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Secrets and lifetimes
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `DomainError::Configuration` when a secret is empty
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.access_secret.trim().is_empty() {
            return Err(DomainError::Configuration {
                message: "JWT_ACCESS_SECRET must be set".to_string(),
            });
        }
        if config.refresh_secret.trim().is_empty() {
            return Err(DomainError::Configuration {
                message: "JWT_REFRESH_SECRET must be set".to_string(),
            });
        }
        if config.access_secret == config.refresh_secret {
            tracing::warn!("Access and refresh tokens share the same signing secret");
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_aud = false;

        let mut signature_only = validation.clone();
        signature_only.validate_exp = false;

        Ok(Self {
            access_keys: KeyPair::from_secret(&config.access_secret),
            refresh_keys: KeyPair::from_secret(&config.refresh_secret),
            config,
            validation,
            signature_only,
        })
    }

    /// Generates an access token (`type: "access"`) for a user
    pub fn issue_access_token(&self, user: &User) -> DomainResult<String> {
        let claims = TokenPayload::new(user, TokenType::Access, self.config.access_ttl);
        self.encode_jwt(&claims)
    }

    /// Generates a refresh token (`type: "refresh"`) for a user
    pub fn issue_refresh_token(&self, user: &User) -> DomainResult<String> {
        let claims = TokenPayload::new(user, TokenType::Refresh, self.config.refresh_ttl);
        self.encode_jwt(&claims)
    }

    /// Generates both tokens at once, as done at login
    pub fn issue_tokens(&self, user: &User) -> DomainResult<AuthTokens> {
        Ok(AuthTokens {
            access_token: self.issue_access_token(user)?,
            refresh_token: self.issue_refresh_token(user)?,
        })
    }

    /// Verifies a token and returns its claims
    ///
    /// # Arguments
    ///
    /// * `token` - The compact JWT string
    /// * `expected` - The kind of token the caller requires
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPayload)` - Signature valid, not expired, type matches
    /// * `Err(TokenError::Expired)` - Correctly signed for `expected` but past `exp`
    /// * `Err(TokenError::WrongType)` - Signed by the other kind's key, or
    ///   carrying the other `type` claim
    /// * `Err(TokenError::InvalidSignature)` - Signed by neither key
    /// * `Err(TokenError::Malformed)` - Not a decodable JWT
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<TokenPayload, TokenError> {
        let (own, other) = match expected {
            TokenType::Access => (&self.access_keys, &self.refresh_keys),
            TokenType::Refresh => (&self.refresh_keys, &self.access_keys),
        };

        match decode::<TokenPayload>(token, &own.decoding, &self.validation) {
            Ok(data) if data.claims.token_type == expected => Ok(data.claims),
            Ok(_) => Err(TokenError::WrongType),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(TokenError::Expired),
                ErrorKind::InvalidSignature => {
                    if decode::<TokenPayload>(token, &other.decoding, &self.signature_only).is_ok()
                    {
                        Err(TokenError::WrongType)
                    } else {
                        Err(TokenError::InvalidSignature)
                    }
                }
                _ => Err(TokenError::Malformed),
            },
        }
    }

    /// Verification at the trust boundary: any failure means "no token"
    ///
    /// The cause is logged at debug level and dropped, so callers cannot treat
    /// an expired token differently from a forged one.
    pub fn verify_optional(&self, token: &str, expected: TokenType) -> Option<TokenPayload> {
        match self.verify(token, expected) {
            Ok(payload) => Some(payload),
            Err(e) => {
                tracing::debug!(expected = %expected, error = %e, "Token rejected");
                None
            }
        }
    }

    /// Encodes claims into a JWT with the key matching their type
    fn encode_jwt(&self, claims: &TokenPayload) -> DomainResult<String> {
        let keys = match claims.token_type {
            TokenType::Access => &self.access_keys,
            TokenType::Refresh => &self.refresh_keys,
        };
        encode(&Header::new(Algorithm::HS256), claims, &keys.encoding).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            DomainError::Token(TokenError::GenerationFailed)
        })
    }
}
