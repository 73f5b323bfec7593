use super::error::AuthError;
use subtle::ConstantTimeEq;

const BEARER_SCHEME: &str = "bearer";

/// Token that passed the gate. Carried in request extensions, never interpreted.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

/// Validates `Authorization: Bearer <token>` headers against the configured API key
pub struct ApiKeyGate {
    api_key: String,
}

impl ApiKeyGate {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }

    /// Check the raw value of an `Authorization` header.
    ///
    /// Missing or schemeless credentials and non-bearer schemes are
    /// `Unauthenticated`; a bearer token that does not match is `Forbidden`.
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<BearerToken, AuthError> {
        let (scheme, token) = authorization
            .map(str::trim)
            .and_then(|value| value.split_once(char::is_whitespace))
            .map(|(scheme, token)| (scheme, token.trim()))
            .filter(|(scheme, token)| !scheme.is_empty() && !token.is_empty())
            .ok_or_else(|| {
                AuthError::Unauthenticated(
                    "Missing Authorization header with Bearer token".to_string(),
                )
            })?;

        if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
            return Err(AuthError::Unauthenticated(
                "Authorization header must use Bearer scheme".to_string(),
            ));
        }

        if !bool::from(token.as_bytes().ct_eq(self.api_key.as_bytes())) {
            return Err(AuthError::Forbidden(
                "Could not validate credentials".to_string(),
            ));
        }

        Ok(BearerToken(token.to_string()))
    }
}
