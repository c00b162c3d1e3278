//! Failures while turning caller input into an instant.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Data alvo é obrigatória")]
    MissingTargetDate,

    #[error("Data alvo inválida: '{0}' (formato esperado AAAA-MM-DD)")]
    InvalidTargetDate(String),

    #[error("Hora alvo inválida: '{0}' (formato esperado HH:MM)")]
    InvalidTargetTime(String),

    #[error("Data/hora local não representável no fuso configurado: {0}")]
    UnrepresentableLocalTime(NaiveDateTime),
}
