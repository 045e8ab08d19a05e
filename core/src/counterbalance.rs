// junction/src/counterbalance.rs

//! Counterbalance cluster assignment.
//!
//! Participants are partitioned into a small number of experimental
//! conditions ("clusters"). The base [`UniformAssigner`] samples a fresh
//! cluster on every call; [`StickyAssigner`] decorates any assigner so that
//! the first sample for a `(participant, decision point)` seat is memoized
//! and reused on re-evaluation, keeping a participant's condition stable
//! across re-renders of the same logical step.

use parking_lot::RwLock;
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{event, Level};

/// A counterbalance cluster, guaranteed in `[Cluster::MIN, Cluster::MAX]`.
///
/// Serializes as a bare number, matching the decision protocol. There is no
/// `Deserialize`: a cluster only ever enters the system through [`Cluster::new`]
/// or an assigner, which uphold the range invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cluster(u8);

impl Cluster {
  pub const MIN: u8 = 1;
  pub const MAX: u8 = 5;

  /// Constructs a cluster, rejecting out-of-range values.
  pub fn new(value: u8) -> Option<Self> {
    (Self::MIN..=Self::MAX).contains(&value).then_some(Cluster(value))
  }

  pub fn get(self) -> u8 {
    self.0
  }
}

impl std::fmt::Display for Cluster {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// A source of counterbalance cluster assignments.
///
/// Implementations must be safe to share across evaluations; the trait is
/// object-safe so evaluators can hold `Arc<dyn ClusterAssigner>`.
pub trait ClusterAssigner: Send + Sync {
  /// Produces the next cluster assignment, in `[1, 5]` inclusive.
  ///
  /// The base contract is uniform and independent across calls. Decorators
  /// (e.g. [`SeatedAssigner`]) may strengthen this to a stable per-seat
  /// assignment.
  fn next(&self) -> Cluster;
}

/// Samples uniformly over the cluster range on every call.
///
/// Independent across calls: invoking the evaluator twice for the same
/// logical decision point can yield different clusters. Wrap in a
/// [`StickyAssigner`] where that matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformAssigner;

impl UniformAssigner {
  pub fn new() -> Self {
    UniformAssigner
  }
}

impl ClusterAssigner for UniformAssigner {
  fn next(&self) -> Cluster {
    Cluster(rand::thread_rng().gen_range(Cluster::MIN..=Cluster::MAX))
  }
}

/// Identifies one cluster assignment slot: a participant at a decision point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssignmentSeat {
  pub participant_id: String,
  pub decision_point: String,
}

impl AssignmentSeat {
  pub fn new(participant_id: impl Into<String>, decision_point: impl Into<String>) -> Self {
    AssignmentSeat {
      participant_id: participant_id.into(),
      decision_point: decision_point.into(),
    }
  }
}

/// Memoizes the first sampled cluster per seat and returns it thereafter.
///
/// The seat table is guarded by a `parking_lot::RwLock`; guards are never
/// held across a suspension point because assignment is fully synchronous.
pub struct StickyAssigner<A: ClusterAssigner> {
  inner: A,
  seats: RwLock<HashMap<AssignmentSeat, Cluster>>,
}

impl<A: ClusterAssigner> StickyAssigner<A> {
  pub fn new(inner: A) -> Self {
    StickyAssigner {
      inner,
      seats: RwLock::new(HashMap::new()),
    }
  }

  /// The wrapped sampling source.
  pub fn inner(&self) -> &A {
    &self.inner
  }

  /// Returns the cluster for `seat`, sampling from the inner assigner on
  /// first use and the memoized value on every later call.
  pub fn assign(&self, seat: &AssignmentSeat) -> Cluster {
    if let Some(cluster) = self.seats.read().get(seat) {
      return *cluster;
    }
    let mut seats = self.seats.write();
    // Re-check under the write lock: another caller may have seated this
    // participant between the read and the write.
    let cluster = *seats.entry(seat.clone()).or_insert_with(|| self.inner.next());
    event!(
      Level::DEBUG,
      participant_id = %seat.participant_id,
      decision_point = %seat.decision_point,
      cluster = %cluster,
      "Seated cluster assignment."
    );
    cluster
  }

  /// Binds this assigner to one seat, yielding a [`ClusterAssigner`] whose
  /// `next()` always resolves to that seat's stable cluster. This lets the
  /// evaluator stay agnostic of participants entirely.
  pub fn seat(
    self: &Arc<Self>,
    participant_id: impl Into<String>,
    decision_point: impl Into<String>,
  ) -> SeatedAssigner<A> {
    SeatedAssigner {
      assigner: Arc::clone(self),
      seat: AssignmentSeat::new(participant_id, decision_point),
    }
  }
}

/// A [`StickyAssigner`] pre-bound to one seat.
pub struct SeatedAssigner<A: ClusterAssigner> {
  assigner: Arc<StickyAssigner<A>>,
  seat: AssignmentSeat,
}

impl<A: ClusterAssigner> ClusterAssigner for SeatedAssigner<A> {
  fn next(&self) -> Cluster {
    self.assigner.assign(&self.seat)
  }
}
