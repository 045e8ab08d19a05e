// junction/src/status/port.rs

//! Defines `StorageStatusPort`, the abstract capability concrete storage
//! backends satisfy.

use crate::error::JunctionResult;
use crate::status::model::{ModeFlags, ParticipantStatusSnapshot};
use async_trait::async_trait;

/// Read-only status capability over a storage backend.
///
/// Both operations may suspend awaiting network or storage I/O and must be
/// safe to invoke concurrently for many studies; each call is independently
/// keyed by `study_id` and must not cross-contaminate results.
///
/// Failure contract: unavailability or lookup failure surfaces as
/// [`crate::JunctionError::StatusUnavailable`] /
/// [`crate::JunctionError::ModesUnavailable`]. Callers treat these as
/// "unknown" — an all-zero snapshot is a legitimate `Ok` result and must
/// never be conflated with failure.
///
/// Caching policy, if any, belongs to the backend; the engine never caches
/// snapshots itself.
#[async_trait]
pub trait StorageStatusPort: Send + Sync {
  /// Participant progress counts for one study.
  async fn participants_status_counts(
    &self,
    study_id: &str,
  ) -> JunctionResult<ParticipantStatusSnapshot>;

  /// Mode flags for one study.
  async fn modes(&self, study_id: &str) -> JunctionResult<ModeFlags>;
}
