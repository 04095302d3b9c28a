use constant_time_eq::constant_time_eq;
use uuid::Uuid;

use crate::domain::entities::{AccessClaims, VideoGrant};
use crate::domain::errors::TokenError;
use crate::domain::ports::{Clock, TokenCodec};

// Every interview room shares this prefix; the suffix is derived from the email.
pub const ROOM_NAME_PREFIX: &str = "voice_assistant_room_";

// Caller-supplied fields for a token grant.
pub struct IssueTokenRequest {
    pub authorization: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

// Connection details returned by the issue use case.
pub struct IssueTokenResponse {
    pub room_name: String,
    pub participant_token: String,
    pub expires_at: u64,
}

// Token grant use case with injected dependencies.
pub struct IssueTokenUseCase<'a, C, K: ?Sized> {
    pub clock: C,
    pub codec: &'a K,
    pub shared_secret: &'a str,
    pub ttl_seconds: u64,
    pub api_key: &'a str,
}

impl<C, K> IssueTokenUseCase<'_, C, K>
where
    C: Clock,
    K: TokenCodec + ?Sized,
{
    pub fn execute(&self, payload: IssueTokenRequest) -> Result<IssueTokenResponse, TokenError> {
        if !self.is_authorized(payload.authorization.as_deref()) {
            return Err(TokenError::Unauthorized);
        }

        let room_name = room_name_for(payload.email.as_deref());
        let identity = non_empty(payload.email);
        let participant_name = non_empty(payload.name);

        let issued_at = self.clock.now_epoch_seconds();
        let expires_at = issued_at
            .checked_add(self.ttl_seconds)
            .ok_or_else(|| TokenError::Signing("token expiry overflows".to_string()))?;

        let claims = AccessClaims {
            iss: self.api_key.to_string(),
            sub: identity,
            // Unique per grant so repeated grants in the same second still differ.
            jti: Some(Uuid::new_v4().to_string()),
            name: participant_name,
            video: VideoGrant::full_access(room_name.clone()),
            nbf: 0,
            iat: issued_at,
            exp: expires_at,
        };
        let participant_token = self.codec.sign(&claims)?;

        Ok(IssueTokenResponse {
            room_name,
            participant_token,
            expires_at,
        })
    }

    fn is_authorized(&self, authorization: Option<&str>) -> bool {
        match authorization {
            Some(value) => constant_time_eq(value.as_bytes(), self.shared_secret.as_bytes()),
            None => false,
        }
    }
}

// Room id keyed by the claimed email. A missing email keeps the literal
// "undefined" suffix so all anonymous callers land in one room.
pub fn room_name_for(email: Option<&str>) -> String {
    let suffix = match email {
        Some(email) => email.replace('@', "-"),
        None => "undefined".to_string(),
    };
    format!("{ROOM_NAME_PREFIX}{suffix}")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
