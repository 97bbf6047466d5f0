//! Input validation helpers
//!
//! Type checking happens during deserialization; these checks cover what
//! the types alone cannot express. Lengths are counted in characters.

use shared::models::ContratoPayload;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Names: contract, branch, type, cost centre, supplier
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: tax id, status, dates, formatted amounts
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Circuit references and tags
pub const MAX_NOTE_LEN: usize = 500;

/// Free-text info
pub const MAX_INFO_LEN: usize = 2000;

// ── Generic helpers ─────────────────────────────────────────────────

/// Validate that a required string is non-blank and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    validate_length(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_length(v, field, max_len),
        None => Ok(()),
    }
}

fn validate_length(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

// ── Contract ────────────────────────────────────────────────────────

/// Validate a create/update payload before it reaches the store
pub fn validate_contrato(payload: &ContratoPayload) -> Result<(), AppError> {
    validate_required_text(&payload.nome_amigavel, "nomeAmigavel", MAX_NAME_LEN)?;
    validate_required_text(&payload.filial, "filial", MAX_NAME_LEN)?;
    validate_required_text(&payload.tipo, "tipo", MAX_NAME_LEN)?;
    validate_required_text(&payload.centro_custo, "centroCusto", MAX_NAME_LEN)?;
    validate_required_text(&payload.valor_mensal, "valorMensal", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.fornecedor1, "fornecedor1", MAX_NAME_LEN)?;
    validate_required_text(&payload.cnpj1, "cnpj1", MAX_SHORT_TEXT_LEN)?;

    validate_length(&payload.status, "status", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.data_inicio, "dataInicio", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.dia_vencimento, "diaVencimento", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.circ1, "circ1", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.tags, "tags", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.info, "info", MAX_INFO_LEN)?;

    if !payload.valor_total.is_finite() || payload.valor_total < 0.0 {
        return Err(AppError::validation(format!(
            "valorTotal must be a non-negative number, got {}",
            payload.valor_total
        ))
        .with_detail("field", "valorTotal"));
    }

    if payload.duracao < 0 {
        return Err(AppError::validation(format!(
            "duracao must not be negative, got {}",
            payload.duracao
        ))
        .with_detail("field", "duracao"));
    }

    Ok(())
}
