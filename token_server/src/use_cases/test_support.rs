use crate::domain::entities::{AccessClaims, VideoGrant};
use crate::domain::errors::TokenError;
use crate::domain::ports::{Clock, TokenCodec};
use crate::interface_adapters::jwt::JwtCodec;

pub(crate) const TEST_API_KEY: &str = "test-api-key";
pub(crate) const TEST_API_SECRET: &str = "test-api-secret-with-enough-entropy";
pub(crate) const TEST_SHARED_SECRET: &str = "test-shared-secret";

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) u64);

impl Clock for FixedClock {
    fn now_epoch_seconds(&self) -> u64 {
        self.0
    }
}

pub(crate) fn test_codec() -> JwtCodec {
    JwtCodec::new(TEST_API_KEY, TEST_API_SECRET)
}

pub(crate) fn test_claims(issued_at: u64, expires_at: u64) -> AccessClaims {
    AccessClaims {
        iss: TEST_API_KEY.to_string(),
        sub: Some("alice@example.com".to_string()),
        jti: Some("grant-1".to_string()),
        name: Some("Alice".to_string()),
        video: VideoGrant::full_access("voice_assistant_room_alice-example.com"),
        nbf: 0,
        iat: issued_at,
        exp: expires_at,
    }
}

// Codec whose signing path always fails, used to check error mapping.
pub(crate) struct FailingCodec;

impl TokenCodec for FailingCodec {
    fn sign(&self, _claims: &AccessClaims) -> Result<String, TokenError> {
        Err(TokenError::Signing("signing failed".to_string()))
    }

    fn decode(&self, _token: &str) -> Result<AccessClaims, TokenError> {
        Err(TokenError::Invalid("decode failed".to_string()))
    }
}
