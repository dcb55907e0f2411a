//! HTTP transport for a [`Caller`].
//!
//! - `GET /rpc` lists procedures with their input schemas.
//! - `GET /rpc/{path}?input=<json>` calls a query.
//! - `POST /rpc/{path}` with a JSON body calls a query or a mutation.
//!
//! Responses use the [`Envelope`] shape. Error statuses follow
//! [`ErrorCode::http_status`](crate::ErrorCode::http_status).

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tracing::debug;

use crate::error::{Envelope, Result, RpcError};
use crate::router::{Caller, ProcedureInfo, ProcedureKind};

/// Build the `/rpc` routes for a caller.
pub fn routes(caller: Caller) -> Router {
    Router::new()
        .route("/rpc", get(list_procedures))
        .route("/rpc/{path}", get(query).post(call))
        .with_state(caller)
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(Envelope::<Value>::failure(self))).into_response()
    }
}

async fn list_procedures(State(caller): State<Caller>) -> Json<Envelope<Vec<ProcedureInfo>>> {
    Json(Envelope::success(caller.procedures()))
}

async fn query(
    State(caller): State<Caller>,
    Path(path): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Envelope<Value>>> {
    debug!(path = %path, "GET call");

    if caller.kind(&path)? == ProcedureKind::Mutation {
        return Err(RpcError::method_not_supported(&path));
    }

    let input = match params.get("input") {
        Some(raw) => serde_json::from_str(raw).map_err(RpcError::parse)?,
        None => Value::Null,
    };

    let output = caller.call(&path, input).await?;
    Ok(Json(Envelope::success(output)))
}

async fn call(
    State(caller): State<Caller>,
    Path(path): Path<String>,
    body: Bytes,
) -> Result<Json<Envelope<Value>>> {
    debug!(path = %path, "POST call");

    let input = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&body).map_err(RpcError::parse)?
    };

    let output = caller.call(&path, input).await?;
    Ok(Json(Envelope::success(output)))
}
