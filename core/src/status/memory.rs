// junction/src/status/memory.rs

//! An in-memory `StorageStatusPort` backend.
//!
//! The reference implementation of the capability: it backs the test suite
//! and documents the swap-in contract for hosted-database adapters, which
//! live outside this crate.

use crate::error::{JunctionError, JunctionResult};
use crate::status::model::{ModeFlags, ParticipantStatusSnapshot};
use crate::status::port::StorageStatusPort;
use anyhow::anyhow;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct StudyEntry {
  snapshot: ParticipantStatusSnapshot,
  modes: ModeFlags,
  reachable: bool,
}

/// Locked-map backend keyed by study id.
///
/// A study not present in the map reports as unavailable (a lookup
/// failure), distinct from a registered study with an all-zero snapshot.
/// Individual studies can be marked unreachable to exercise outage paths.
#[derive(Default)]
pub struct InMemoryStatusBackend {
  studies: RwLock<HashMap<String, StudyEntry>>,
}

impl InMemoryStatusBackend {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers or replaces a study's status data. Newly inserted studies
  /// are reachable.
  pub fn insert_study(
    &self,
    study_id: impl Into<String>,
    snapshot: ParticipantStatusSnapshot,
    modes: ModeFlags,
  ) {
    self.studies.write().insert(
      study_id.into(),
      StudyEntry {
        snapshot,
        modes,
        reachable: true,
      },
    );
  }

  /// Simulates a backend outage for one study. Lookups for unregistered
  /// studies are unaffected (they already report unavailable).
  pub fn set_reachable(&self, study_id: &str, reachable: bool) {
    if let Some(entry) = self.studies.write().get_mut(study_id) {
      entry.reachable = reachable;
    }
  }
}

// Lock guards are dropped before the implicit await points the async-trait
// wrapper introduces; data is cloned out under the read lock.
#[async_trait]
impl StorageStatusPort for InMemoryStatusBackend {
  async fn participants_status_counts(
    &self,
    study_id: &str,
  ) -> JunctionResult<ParticipantStatusSnapshot> {
    let snapshot = {
      let studies = self.studies.read();
      match studies.get(study_id) {
        Some(entry) if entry.reachable => Ok(entry.snapshot.clone()),
        Some(_) => Err(anyhow!("backend unreachable")),
        None => Err(anyhow!("study not present in backend")),
      }
    };
    snapshot.map_err(|source| JunctionError::StatusUnavailable {
      study_id: study_id.to_string(),
      source,
    })
  }

  async fn modes(&self, study_id: &str) -> JunctionResult<ModeFlags> {
    let modes = {
      let studies = self.studies.read();
      match studies.get(study_id) {
        Some(entry) if entry.reachable => Ok(entry.modes),
        Some(_) => Err(anyhow!("backend unreachable")),
        None => Err(anyhow!("study not present in backend")),
      }
    };
    modes.map_err(|source| JunctionError::ModesUnavailable {
      study_id: study_id.to_string(),
      source,
    })
  }
}
