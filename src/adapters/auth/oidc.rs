//! OIDC session validation.
//!
//! Session tokens are RS256 JWTs signed by the configured issuer. Signing
//! keys come from the issuer's JWKS document and are cached for a fixed TTL.
//! An issuer that cannot be reached is reported as `ServiceUnavailable`, so
//! callers can tell an outage from a bad token.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::jwk::{JwkSet, KeyAlgorithm};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthError, Identity};
use crate::ports::SessionValidator;

const JWKS_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_JWKS_TTL: Duration = Duration::from_secs(60 * 60);

/// Issuer and audience the session tokens must carry.
#[derive(Debug, Clone)]
pub struct OidcConfig {
    pub issuer_url: String,
    pub audience: String,
    pub jwks_ttl: Duration,
}

impl OidcConfig {
    pub fn new(issuer_url: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            issuer_url: issuer_url.into(),
            audience: audience.into(),
            jwks_ttl: DEFAULT_JWKS_TTL,
        }
    }

    pub fn with_cache_duration(mut self, ttl: Duration) -> Self {
        self.jwks_ttl = ttl;
        self
    }

    fn jwks_url(&self) -> String {
        format!("{}/.well-known/jwks.json", self.issuer_url.trim_end_matches('/'))
    }
}

/// Profile claims copied onto the caller's identity. `iss`, `aud` and `exp`
/// are enforced by the decoder.
#[derive(Debug, Deserialize)]
struct ProfileClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    preferred_username: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

impl From<ProfileClaims> for Identity {
    fn from(claims: ProfileClaims) -> Self {
        Identity {
            subject: claims.sub,
            email: claims.email,
            name: claims.name.or(claims.preferred_username),
            image: claims.picture,
        }
    }
}

struct CachedKeys {
    keys: JwkSet,
    expires_at: Instant,
}

impl CachedKeys {
    fn new(keys: JwkSet, ttl: Duration) -> Self {
        Self {
            keys,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_fresh(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// `SessionValidator` backed by an OIDC issuer's published keys.
pub struct OidcSessionValidator {
    config: OidcConfig,
    validation: Validation,
    http_client: reqwest::Client,
    keys: Arc<RwLock<Option<CachedKeys>>>,
}

impl OidcSessionValidator {
    /// Builds the validator without contacting the issuer; keys load on first use.
    pub fn new(config: OidcConfig) -> Result<Self, AuthError> {
        let http_client = reqwest::Client::builder()
            .timeout(JWKS_FETCH_TIMEOUT)
            .build()
            .map_err(|e| AuthError::ServiceUnavailable(format!("HTTP client setup failed: {}", e)))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&config.issuer_url]);
        validation.set_audience(&[&config.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Ok(Self {
            config,
            validation,
            http_client,
            keys: Arc::new(RwLock::new(None)),
        })
    }

    async fn signing_keys(&self) -> Result<JwkSet, AuthError> {
        if let Some(cached) = self.keys.read().await.as_ref() {
            if cached.is_fresh() {
                return Ok(cached.keys.clone());
            }
        }

        let keys = self.download_keys().await?;
        *self.keys.write().await = Some(CachedKeys::new(keys.clone(), self.config.jwks_ttl));
        Ok(keys)
    }

    async fn download_keys(&self) -> Result<JwkSet, AuthError> {
        let url = self.config.jwks_url();
        let unavailable = |detail: String| {
            tracing::error!(%url, %detail, "Identity provider keys unavailable");
            AuthError::ServiceUnavailable(detail)
        };

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(unavailable(format!("JWKS request returned {}", response.status())));
        }

        let keys: JwkSet = response
            .json()
            .await
            .map_err(|e| unavailable(format!("JWKS body unreadable: {}", e)))?;

        tracing::debug!(keys = keys.keys.len(), "Loaded identity provider keys");
        Ok(keys)
    }

    fn decoding_key(kid: &str, keys: &JwkSet) -> Result<DecodingKey, AuthError> {
        let jwk = keys.find(kid).ok_or_else(|| {
            tracing::debug!(%kid, "Session token signed with unknown key");
            AuthError::InvalidToken
        })?;

        match jwk.common.key_algorithm {
            None | Some(KeyAlgorithm::RS256) => {}
            Some(other) => {
                tracing::debug!(algorithm = ?other, "Session key is not RS256");
                return Err(AuthError::InvalidToken);
            }
        }

        DecodingKey::from_jwk(jwk).map_err(|_| AuthError::InvalidToken)
    }
}

#[async_trait]
impl SessionValidator for OidcSessionValidator {
    async fn validate(&self, token: &str) -> Result<Identity, AuthError> {
        let kid = decode_header(token)
            .ok()
            .and_then(|header| header.kid)
            .ok_or(AuthError::InvalidToken)?;

        let keys = self.signing_keys().await?;
        let key = Self::decoding_key(&kid, &keys)?;

        let claims = decode::<ProfileClaims>(token, &key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => {
                    tracing::debug!(error = %e, "Session token rejected");
                    AuthError::InvalidToken
                }
            })?
            .claims;

        Ok(claims.into())
    }
}

impl std::fmt::Debug for OidcSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OidcSessionValidator")
            .field("issuer_url", &self.config.issuer_url)
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}
