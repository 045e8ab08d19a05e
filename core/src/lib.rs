// src/lib.rs

//! Junction: adaptive flow-control decisions for multi-step study sessions.
//!
//! Junction decides, at each step of a participant's session, whether a
//! dynamically generated component should be inserted into the sequence,
//! and aggregates per-study participant status for administrative display:
//!  - Structured indexing of the session's recorded answer keys.
//!  - Pure, total jump-function evaluation ("skip" vs. "insert X with P"),
//!    gated so a decision point fires at most once per regime.
//!  - Counterbalance cluster assignment, optionally sticky per participant
//!    and decision point.
//!  - A pluggable, async status capability over storage backends, with
//!    catalog-wide concurrent aggregation.
//!  - Fail-closed visibility filtering of the study catalog.

// Declare modules according to the planned structure
pub mod counterbalance;
pub mod error;
pub mod history;
pub mod jump;
pub mod registry;
pub mod status;
pub mod visibility;

// --- Re-exports for the Public API ---

// History indexing
pub use crate::history::{AnswerHistoryIndex, HistoryRecord};

// The decision engine and its protocol types
pub use crate::jump::{
  AnswerMap, CustomParameters, DecisionPoint, GatePolicy, InsertParameters, JumpDecision,
  JumpFunctionEvaluator, JumpRequest, Regime, DEFAULT_BRUSH,
};

// Counterbalance assignment
pub use crate::counterbalance::{
  AssignmentSeat, Cluster, ClusterAssigner, SeatedAssigner, StickyAssigner, UniformAssigner,
};

// The status capability, its reference backend, and catalog aggregation
pub use crate::status::{
  catalog_status_stream, fetch_catalog_status, fetch_study_status, CollectionStatus,
  InMemoryStatusBackend, ModeFlags, ParticipantStatusSnapshot, StorageStatusPort,
  StudyStatusReport,
};

// Visibility filtering
pub use crate::visibility::{is_reserved_study, is_visible, visible_studies, RESERVED_STUDY_PREFIXES};

pub use crate::error::{JunctionError, JunctionResult};

// The registry for dispatching named decision points
pub use crate::registry::EvaluatorRegistry;
