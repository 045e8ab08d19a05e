// junction/src/status/aggregate.rs

//! Catalog-wide aggregation of per-study status queries.
//!
//! An administrative listing fans out one counts query and one modes query
//! per study. Queries for different studies are independent: no ordering is
//! guaranteed between them, per-study failure never poisons the rest of the
//! catalog, and dropping the aggregation future or stream cancels whatever
//! is still outstanding.

use crate::error::JunctionResult;
use crate::status::model::{CollectionStatus, ModeFlags, ParticipantStatusSnapshot};
use crate::status::port::StorageStatusPort;
use futures::future;
use futures::stream::{FuturesUnordered, Stream};
use tracing::{event, instrument, Level};

/// Everything the administrative view needs for one study.
///
/// Both halves keep their `Result` so a failed retrieval stays
/// distinguishable from legitimate zero/false values; nothing is flattened
/// into defaults on the way out.
#[derive(Debug)]
pub struct StudyStatusReport {
  pub study_id: String,
  pub snapshot: JunctionResult<ParticipantStatusSnapshot>,
  pub modes: JunctionResult<ModeFlags>,
}

impl StudyStatusReport {
  /// The derived collection label, treating failed retrievals as unknown.
  pub fn collection_status(&self) -> CollectionStatus {
    CollectionStatus::derive(self.modes.as_ref().ok(), self.snapshot.as_ref().ok())
  }
}

/// Fetches both status halves for one study. The two queries run
/// concurrently and fail independently.
#[instrument(name = "fetch_study_status", skip(port))]
pub async fn fetch_study_status(port: &dyn StorageStatusPort, study_id: &str) -> StudyStatusReport {
  let (snapshot, modes) = future::join(
    port.participants_status_counts(study_id),
    port.modes(study_id),
  )
  .await;

  if let Err(error) = &snapshot {
    event!(Level::WARN, %error, "Participant status retrieval failed.");
  }
  if let Err(error) = &modes {
    event!(Level::WARN, %error, "Mode flags retrieval failed.");
  }

  StudyStatusReport {
    study_id: study_id.to_string(),
    snapshot,
    modes,
  }
}

/// Fetches reports for a whole catalog concurrently. The returned vector
/// preserves the input order of `study_ids`.
pub async fn fetch_catalog_status(
  port: &dyn StorageStatusPort,
  study_ids: &[String],
) -> Vec<StudyStatusReport> {
  future::join_all(study_ids.iter().map(|id| fetch_study_status(port, id))).await
}

/// Completion-order variant of [`fetch_catalog_status`]: reports are yielded
/// as their queries resolve, so already-resolved studies can be displayed
/// before slower ones finish. Dropping the stream cancels outstanding
/// queries.
pub fn catalog_status_stream<'a>(
  port: &'a dyn StorageStatusPort,
  study_ids: &'a [String],
) -> impl Stream<Item = StudyStatusReport> + 'a {
  study_ids
    .iter()
    .map(|id| fetch_study_status(port, id))
    .collect::<FuturesUnordered<_>>()
}
