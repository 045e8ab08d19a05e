// junction/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JunctionError {
  /// Participant status counts could not be retrieved for a study.
  ///
  /// Callers must treat this as "unknown", never as an all-zero snapshot:
  /// a study with zero participants is a legitimate result and is reported
  /// as `Ok` with zero counts, not as this variant.
  #[error("Participant status unavailable for study '{study_id}'. Source: {source}")]
  StatusUnavailable {
    study_id: String,
    #[source]
    source: AnyhowError,
  },

  /// Mode flags could not be retrieved for a study.
  ///
  /// Visibility decisions downstream must fail closed on this variant.
  #[error("Mode flags unavailable for study '{study_id}'. Source: {source}")]
  ModesUnavailable {
    study_id: String,
    #[source]
    source: AnyhowError,
  },

  #[error("No evaluator registered for decision point '{point}'")]
  UnknownDecisionPoint { point: String },

  #[error("Internal junction error: {0}")]
  Internal(String),
}

pub type JunctionResult<T, E = JunctionError> = std::result::Result<T, E>;
