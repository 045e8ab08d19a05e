// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use chrono::{DateTime, TimeZone, Utc};
use junction::{
  Cluster, ClusterAssigner, InMemoryStatusBackend, JunctionError, JunctionResult, ModeFlags,
  ParticipantStatusSnapshot, StorageStatusPort,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Answer-map fixtures ---

/// Builds an answer map from bare keys; the recorded values are irrelevant
/// to the engine and set to `true`.
pub fn answers_from(keys: &[&str]) -> junction::AnswerMap {
  keys
    .iter()
    .map(|k| (k.to_string(), serde_json::Value::Bool(true)))
    .collect()
}

// --- Deterministic assigners ---

/// Always returns the same cluster; keeps evaluator assertions exact.
pub struct FixedAssigner(pub Cluster);

impl FixedAssigner {
  pub fn cluster(value: u8) -> Self {
    FixedAssigner(Cluster::new(value).expect("fixture cluster in range"))
  }
}

impl ClusterAssigner for FixedAssigner {
  fn next(&self) -> Cluster {
    self.0
  }
}

/// Counts how often a sample is actually drawn; used to verify sticky
/// memoization.
pub struct CountingAssigner {
  samples: AtomicUsize,
  value: Cluster,
}

impl CountingAssigner {
  pub fn cluster(value: u8) -> Self {
    CountingAssigner {
      samples: AtomicUsize::new(0),
      value: Cluster::new(value).expect("fixture cluster in range"),
    }
  }

  pub fn sample_count(&self) -> usize {
    self.samples.load(Ordering::SeqCst)
  }
}

impl ClusterAssigner for CountingAssigner {
  fn next(&self) -> Cluster {
    self.samples.fetch_add(1, Ordering::SeqCst);
    self.value
  }
}

// --- Status fixtures ---

pub fn ts(secs: i64) -> DateTime<Utc> {
  Utc.timestamp_opt(secs, 0).single().expect("fixture timestamp")
}

pub fn snapshot(completed: u64, rejected: u64, in_progress: u64) -> ParticipantStatusSnapshot {
  ParticipantStatusSnapshot {
    completed,
    rejected,
    in_progress,
    min_time: Some(ts(1_700_000_000)),
    max_time: Some(ts(1_700_086_400)),
  }
}

pub fn modes(collecting: bool, public: bool) -> ModeFlags {
  ModeFlags {
    data_collection_enabled: collecting,
    analytics_publicly_accessible: public,
  }
}

/// A backend with one public active study, one private study, and one
/// registered-but-untouched study.
pub fn seeded_backend() -> InMemoryStatusBackend {
  let backend = InMemoryStatusBackend::new();
  backend.insert_study("pub-study", snapshot(12, 1, 3), modes(true, true));
  backend.insert_study("priv-study", snapshot(4, 0, 0), modes(true, false));
  backend.insert_study(
    "empty-study",
    ParticipantStatusSnapshot::default(),
    modes(false, false),
  );
  backend
}

// --- An alternative port implementation ---

/// A port whose counts succeed but whose modes always fail, exercising the
/// independently-failable halves of the status protocol (and the capability
/// seam itself: consumers only ever see `dyn StorageStatusPort`).
pub struct ModesDownPort {
  snapshots: HashMap<String, ParticipantStatusSnapshot>,
}

impl ModesDownPort {
  pub fn new(snapshots: HashMap<String, ParticipantStatusSnapshot>) -> Self {
    ModesDownPort { snapshots }
  }
}

#[async_trait::async_trait]
impl StorageStatusPort for ModesDownPort {
  async fn participants_status_counts(
    &self,
    study_id: &str,
  ) -> JunctionResult<ParticipantStatusSnapshot> {
    self.snapshots.get(study_id).cloned().ok_or_else(|| {
      JunctionError::StatusUnavailable {
        study_id: study_id.to_string(),
        source: anyhow::anyhow!("study not present in backend"),
      }
    })
  }

  async fn modes(&self, study_id: &str) -> JunctionResult<ModeFlags> {
    Err(JunctionError::ModesUnavailable {
      study_id: study_id.to_string(),
      source: anyhow::anyhow!("modes store offline"),
    })
  }
}
