use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use candidate_service::{
	Caller, Error as ServiceError, FilterParameters, LookupRequest, Role, SearchEnvelope,
	parse_roles,
};

use crate::state::AppState;

/// Caller context headers, set by the verifying gateway in front of this
/// service.
pub const CALLER_IDENT_HEADER: &str = "x-caller-ident";
pub const CALLER_ROLES_HEADER: &str = "x-caller-roles";

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/internal/alive", get(alive))
		.route("/internal/ready", get(ready))
		.route("/api/me", get(me))
		.route("/api/cv", post(lookup_cv))
		.route("/api/summary", post(lookup_summary))
		.route("/api/search", post(search))
		.with_state(state)
}

async fn alive() -> &'static str {
	"alive"
}

async fn ready() -> &'static str {
	"ready"
}

async fn me(headers: HeaderMap) -> Result<Json<MeResponse>, ApiError> {
	let caller = caller_from_headers(&headers)?;
	let mut roles: Vec<&'static str> = caller.roles.iter().map(Role::label).collect();

	roles.sort_unstable();

	Ok(Json(MeResponse { ident: caller.ident, roles }))
}

async fn lookup_cv(
	State(state): State<AppState>,
	headers: HeaderMap,
	Json(payload): Json<LookupRequest>,
) -> Result<Json<SearchEnvelope>, ApiError> {
	let caller = caller_from_headers(&headers)?;
	let response = state.service.lookup_cv(payload, &caller).await?;

	Ok(Json(response))
}

async fn lookup_summary(
	State(state): State<AppState>,
	headers: HeaderMap,
	Json(payload): Json<LookupRequest>,
) -> Result<Json<SearchEnvelope>, ApiError> {
	let caller = caller_from_headers(&headers)?;
	let response = state.service.lookup_summary(payload, &caller).await?;

	Ok(Json(response))
}

async fn search(
	State(state): State<AppState>,
	headers: HeaderMap,
	Json(payload): Json<SearchRequestBody>,
) -> Result<Json<SearchEnvelope>, ApiError> {
	let caller = caller_from_headers(&headers)?;
	let params =
		FilterParameters::sanitized(payload.occupations.unwrap_or_default(), payload.location);
	let response = state.service.search(params, &caller).await?;

	Ok(Json(response))
}

fn caller_from_headers(headers: &HeaderMap) -> Result<Caller, ApiError> {
	let ident = headers
		.get(CALLER_IDENT_HEADER)
		.and_then(|value| value.to_str().ok())
		.map(str::trim)
		.filter(|value| !value.is_empty())
		.ok_or_else(|| {
			ApiError::new(
				StatusCode::UNAUTHORIZED,
				"missing_identity",
				"Caller identity header is missing.",
			)
		})?;
	let roles = headers
		.get(CALLER_ROLES_HEADER)
		.and_then(|value| value.to_str().ok())
		.map(|raw| parse_roles(raw.split(',')))
		.unwrap_or_default();

	Ok(Caller { ident: ident.to_string(), roles })
}

#[derive(Debug, Serialize)]
struct MeResponse {
	ident: String,
	roles: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
struct SearchRequestBody {
	occupations: Option<Vec<String>>,
	location: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::Forbidden { operation } => ApiError::new(
				StatusCode::FORBIDDEN,
				"forbidden",
				format!("Caller is not allowed to perform {operation}."),
			),
			ServiceError::Retrieval(inner) => {
				tracing::error!(error = %inner, "Candidate index retrieval failed.");

				ApiError::new(
					StatusCode::INTERNAL_SERVER_ERROR,
					"retrieval_failure",
					"Candidate index retrieval failed.",
				)
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
