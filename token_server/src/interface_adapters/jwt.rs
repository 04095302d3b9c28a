use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::domain::entities::AccessClaims;
use crate::domain::errors::TokenError;
use crate::domain::ports::TokenCodec;

// HS256 codec keyed by the media platform's API key/secret pair.
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtCodec {
    pub fn new(api_key: &str, api_secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[api_key]);
        validation.set_required_spec_claims(&["exp", "iss"]);
        // Expiry is checked against the injected clock by the verify use case.
        validation.validate_exp = false;
        validation.validate_nbf = false;

        Self {
            encoding_key: EncodingKey::from_secret(api_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(api_secret.as_bytes()),
            validation,
        }
    }
}

impl TokenCodec for JwtCodec {
    fn sign(&self, claims: &AccessClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|err| TokenError::Signing(err.to_string()))
    }

    fn decode(&self, token: &str) -> Result<AccessClaims, TokenError> {
        decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| TokenError::Invalid(err.to_string()))
    }
}
