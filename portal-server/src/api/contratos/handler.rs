//! Contrato API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::ValidJson;
use crate::core::ServerState;
use crate::db::models::ContratoId;
use crate::utils::AppResult;
use crate::utils::validation::validate_contrato;
use shared::models::{Contrato, ContratoCreated, ContratoPayload, StatusAck};

/// GET /api/contratos - list every contract
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Contrato>>> {
    let contratos = state.contratos().find_all().await?;
    Ok(Json(contratos))
}

/// POST /api/contratos - create a contract
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<ContratoPayload>,
) -> AppResult<Json<ContratoCreated>> {
    validate_contrato(&payload)?;

    let id = state.contratos().create(payload).await?;
    tracing::info!(id = %id, "Contrato created");

    Ok(Json(ContratoCreated {
        id: id.into_string(),
    }))
}

/// PUT /api/contratos/{id} - replace every field of a contract
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<ContratoPayload>,
) -> AppResult<Json<StatusAck>> {
    let id = ContratoId::parse(&id)?;
    validate_contrato(&payload)?;

    if state.contratos().replace(&id, payload).await? {
        tracing::info!(id = %id, "Contrato updated");
    } else {
        tracing::debug!(id = %id, "Update matched no contrato");
    }

    Ok(Json(StatusAck::updated()))
}

/// DELETE /api/contratos/{id} - remove a contract
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<StatusAck>> {
    let id = ContratoId::parse(&id)?;

    if state.contratos().delete(&id).await? {
        tracing::info!(id = %id, "Contrato deleted");
    } else {
        tracing::debug!(id = %id, "Delete matched no contrato");
    }

    Ok(Json(StatusAck::deleted()))
}
