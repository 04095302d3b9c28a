use serde::{Deserialize, Serialize};

// Capability set granted for a single room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room: String,
    pub room_join: bool,
    pub can_publish: bool,
    pub can_publish_data: bool,
    pub can_subscribe: bool,
}

impl VideoGrant {
    // Full join/publish/subscribe access used for interview rooms.
    pub fn full_access(room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            room_join: true,
            can_publish: true,
            can_publish_data: true,
            can_subscribe: true,
        }
    }
}

// Claim set carried inside a signed room access token.
// Field names follow the media platform's JWT payload layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub iss: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub video: VideoGrant,
    #[serde(default)]
    pub nbf: u64,
    pub iat: u64,
    pub exp: u64,
}

impl AccessClaims {
    pub fn identity(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    pub fn is_expired_at(&self, now_epoch_seconds: u64) -> bool {
        self.exp <= now_epoch_seconds
    }
}
