use serde::Serialize;

use crate::domain::entities::{AccessClaims, VideoGrant};

// Query parameters for the grant endpoint.
#[derive(Debug, Default)]
pub struct GrantJwtQuery {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl GrantJwtQuery {
    // Keeps the first value of each key; repeated keys are not an error.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "email" => &mut query.email,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

// Response payload for the grant endpoint.
#[derive(Debug, Serialize)]
pub struct GrantJwtResponse {
    pub jwt: String,
}

// Decoded claim set returned by the verify endpoint.
#[derive(Debug, Serialize)]
pub struct VerifyJwtResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub video: VideoGrant,
    pub iss: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    pub nbf: u64,
    pub iat: u64,
    pub exp: u64,
}

impl From<AccessClaims> for VerifyJwtResponse {
    fn from(claims: AccessClaims) -> Self {
        Self {
            identity: claims.sub,
            name: claims.name,
            video: claims.video,
            iss: claims.iss,
            jti: claims.jti,
            nbf: claims.nbf,
            iat: claims.iat,
            exp: claims.exp,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn when_keys_repeat_then_first_value_wins() {
        let query = GrantJwtQuery::from_pairs(pairs(&[
            ("email", "a@b.com"),
            ("name", "Alice"),
            ("email", "c@d.com"),
            ("name", "Carol"),
        ]));

        assert_eq!(query.email.as_deref(), Some("a@b.com"));
        assert_eq!(query.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn when_keys_are_absent_or_unknown_then_fields_stay_none() {
        let query = GrantJwtQuery::from_pairs(pairs(&[("room", "lobby")]));

        assert_eq!(query.email, None);
        assert_eq!(query.name, None);
    }

    #[test]
    fn when_claims_lack_jti_then_verify_body_omits_it() {
        let claims = AccessClaims {
            iss: "key".to_string(),
            sub: None,
            jti: None,
            name: None,
            video: VideoGrant::full_access("voice_assistant_room_undefined"),
            nbf: 0,
            iat: 1,
            exp: 2,
        };

        let body = serde_json::to_value(VerifyJwtResponse::from(claims))
            .expect("expected response to serialize");

        assert!(body.get("jti").is_none());
        assert!(body.get("identity").is_none());
        assert_eq!(body["video"]["room"], "voice_assistant_room_undefined");
    }
}
