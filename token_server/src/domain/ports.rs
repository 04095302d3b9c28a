use crate::domain::entities::AccessClaims;
use crate::domain::errors::TokenError;

// Port for signing and decoding room access tokens.
// Implementations check the signature and issuer only; expiry is a use-case concern.
pub trait TokenCodec: Send + Sync {
    fn sign(&self, claims: &AccessClaims) -> Result<String, TokenError>;
    fn decode(&self, token: &str) -> Result<AccessClaims, TokenError>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_seconds(&self) -> u64;
}
