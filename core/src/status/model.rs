// junction/src/status/model.rs

//! Data model of the status-aggregation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Participant progress counts for one study, produced on demand by a
/// [`crate::status::StorageStatusPort`] backend.
///
/// An all-zero snapshot is a valid real result (a study nobody has started).
/// Backend failure is reported as a typed error by the port, never as a
/// zeroed snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantStatusSnapshot {
  pub completed: u64,
  pub rejected: u64,
  pub in_progress: u64,
  /// Earliest recorded participant activity, if any.
  pub min_time: Option<DateTime<Utc>>,
  /// Latest recorded participant activity, if any.
  pub max_time: Option<DateTime<Utc>>,
}

impl ParticipantStatusSnapshot {
  pub fn total(&self) -> u64 {
    self.completed + self.rejected + self.in_progress
  }

  /// True if any participant has started or finished the study.
  pub fn has_activity(&self) -> bool {
    self.in_progress > 0 || self.completed > 0
  }

  /// The activity window, present only when both bounds are recorded.
  pub fn activity_window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    Some((self.min_time?, self.max_time?))
  }
}

/// Per-study boolean configuration, mutated only by administrative action
/// outside this core. Read-only from the engine's perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModeFlags {
  /// Whether the study currently accepts new participant data.
  pub data_collection_enabled: bool,
  /// Whether the study's analytics are exposed to non-admin viewers.
  pub analytics_publicly_accessible: bool,
}

/// Derived per-study collection label for administrative display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStatus {
  /// Mode flags could not be retrieved.
  Unknown,
  DataCollectionDisabled,
  ReadyToCollect,
  Collecting,
}

impl CollectionStatus {
  /// Derives the label from whatever could be fetched. `None` inputs mean
  /// the corresponding retrieval failed, not that the values were zero or
  /// false.
  pub fn derive(modes: Option<&ModeFlags>, snapshot: Option<&ParticipantStatusSnapshot>) -> Self {
    let Some(modes) = modes else {
      return CollectionStatus::Unknown;
    };
    if !modes.data_collection_enabled {
      return CollectionStatus::DataCollectionDisabled;
    }
    match snapshot {
      Some(s) if s.has_activity() => CollectionStatus::Collecting,
      _ => CollectionStatus::ReadyToCollect,
    }
  }
}

impl std::fmt::Display for CollectionStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let label = match self {
      CollectionStatus::Unknown => "Unknown",
      CollectionStatus::DataCollectionDisabled => "Data Collection Disabled",
      CollectionStatus::ReadyToCollect => "Ready to Collect Data",
      CollectionStatus::Collecting => "Collecting Data",
    };
    f.write_str(label)
  }
}
