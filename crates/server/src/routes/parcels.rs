use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use models::parcel::{status, Parcel};

use crate::{errors::JsonApiError, routes::AppState};

#[derive(Debug, Deserialize)]
pub struct ListQuery { pub client: i32 }

#[derive(Debug, Deserialize)]
pub struct CreateParcelInput {
    pub client: i32,
    pub address: String,
    /// Defaults to `registered`.
    #[serde(default)]
    pub status: Option<String>,
    /// RFC3339; stamped by the store when absent.
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetAddressInput { pub address: String }

#[derive(Debug, Deserialize)]
pub struct SetStatusInput { pub status: String }

pub async fn list(State(state): State<AppState>, Query(q): Query<ListQuery>) -> Result<Json<Vec<Parcel>>, JsonApiError> {
    let list = state.parcels.get_by_client(q.client).await?;
    info!(client = q.client, count = list.len(), "list parcels");
    Ok(Json(list))
}

pub async fn create(State(state): State<AppState>, Json(input): Json<CreateParcelInput>) -> Result<(StatusCode, Json<Parcel>), JsonApiError> {
    let parcel = Parcel {
        number: 0,
        client: input.client,
        status: input.status.unwrap_or_else(|| status::REGISTERED.to_string()),
        address: input.address,
        created_at: input.created_at.unwrap_or_default(),
    };
    let number = state.parcels.add(&parcel).await?;
    let stored = state.parcels.get(number).await?;
    info!(number, client = stored.client, "created parcel");
    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn get(State(state): State<AppState>, Path(number): Path<i32>) -> Result<Json<Parcel>, JsonApiError> {
    Ok(Json(state.parcels.get(number).await?))
}

pub async fn set_address(State(state): State<AppState>, Path(number): Path<i32>, Json(input): Json<SetAddressInput>) -> Result<StatusCode, JsonApiError> {
    state.parcels.set_address(number, &input.address).await?;
    info!(number, "updated parcel address");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_status(State(state): State<AppState>, Path(number): Path<i32>, Json(input): Json<SetStatusInput>) -> Result<StatusCode, JsonApiError> {
    state.parcels.set_status(number, &input.status).await?;
    info!(number, status = %input.status, "updated parcel status");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(State(state): State<AppState>, Path(number): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.parcels.delete(number).await?;
    info!(number, "deleted parcel");
    Ok(StatusCode::NO_CONTENT)
}
