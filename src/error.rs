//! Errors that abort scoring of a curriculum.

use thiserror::Error;

/// Structural problems that make a meaningful score impossible.
///
/// Anything smaller (a missing section, an empty year, a malformed page
/// count) is absorbed as a zero contribution and never surfaces here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// Record root has no NUMERO-IDENTIFICADOR
    #[error("curriculum has no unique identifier (NUMERO-IDENTIFICADOR)")]
    MissingIdentifier,

    /// DADOS-GERAIS or its NOME-COMPLETO is absent
    #[error("curriculum has no owner full name (DADOS-GERAIS/NOME-COMPLETO)")]
    MissingFullName,

    /// Evaluation period starts after it ends
    #[error("invalid evaluation period: since {since} is after until {until}")]
    InvalidPeriod { since: i32, until: i32 },
}
