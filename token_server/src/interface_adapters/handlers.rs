use crate::domain::errors::TokenError;
use crate::interface_adapters::protocol::{
    ErrorResponse, GrantJwtQuery, GrantJwtResponse, HealthResponse, VerifyJwtResponse,
};
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::issue_token::{IssueTokenRequest, IssueTokenUseCase};
use crate::use_cases::verify_token::{VerifyTokenUseCase, bearer_token};
use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
};
use tracing::{debug, error, info, warn};

// Handler for minting a room access token.
#[tracing::instrument(name = "grant_jwt", skip_all)]
pub async fn grant_jwt(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<GrantJwtResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Parsed as raw pairs so no query string can preempt the secret check.
    let query = GrantJwtQuery::from_pairs(pairs);
    let use_case = IssueTokenUseCase {
        clock: SystemClock,
        codec: state.codec.as_ref(),
        shared_secret: &state.shared_secret,
        ttl_seconds: state.ttl_seconds,
        api_key: &state.api_key,
    };

    let result = use_case
        .execute(IssueTokenRequest {
            authorization: authorization_header(&headers).map(str::to_string),
            name: query.name,
            email: query.email,
        })
        .map_err(|err| map_token_error(err, TokenErrorContext::GrantJwt))?;

    info!(
        room = %result.room_name,
        expires_at = result.expires_at,
        "room token granted"
    );

    Ok(Json(GrantJwtResponse {
        jwt: result.participant_token,
    }))
}

// Handler for checking a bearer token and echoing its claims.
#[tracing::instrument(name = "verify_jwt", skip_all)]
pub async fn verify_jwt(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<VerifyJwtResponse>, (StatusCode, Json<ErrorResponse>)> {
    let authorization = authorization_header(&headers)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| map_token_error(TokenError::Unauthorized, TokenErrorContext::VerifyJwt))?;

    let use_case = VerifyTokenUseCase {
        clock: SystemClock,
        codec: state.codec.as_ref(),
    };

    let claims = use_case
        .execute(bearer_token(authorization))
        .map_err(|err| map_token_error(err, TokenErrorContext::VerifyJwt))?;

    Ok(Json(VerifyJwtResponse::from(claims)))
}

pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

#[derive(Debug)]
enum TokenErrorContext {
    GrantJwt,
    VerifyJwt,
}

// Every rejection reason collapses to the same 401 body; the detail only reaches the log.
fn map_token_error(
    err: TokenError,
    context: TokenErrorContext,
) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        TokenError::Unauthorized => {
            if matches!(context, TokenErrorContext::GrantJwt) {
                warn!(?context, "rejected token grant with bad shared secret");
            } else {
                debug!(?context, "missing authorization header");
            }
            error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
        }
        TokenError::Expired | TokenError::Invalid(_) => {
            debug!(?context, error = %err, "token verification failed");
            error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
        }
        TokenError::Signing(_) => {
            error!(?context, error = %err, "token signing failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}
