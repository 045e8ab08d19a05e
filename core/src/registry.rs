// junction/src/registry.rs

//! Defines `EvaluatorRegistry`, a name-keyed registry of jump-function
//! evaluators.
//!
//! Study configurations reference their branching points by author-chosen
//! names. The surrounding runtime registers one evaluator per decision point
//! at startup and dispatches requests by name at each step transition.

use crate::error::{JunctionError, JunctionResult};
use crate::jump::decision::{JumpDecision, JumpRequest};
use crate::jump::evaluator::JumpFunctionEvaluator;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{event, Level};

/// Name-keyed dispatch of decision-point evaluators.
///
/// Registration happens once at startup; dispatch is read-mostly, so the map
/// sits behind a `parking_lot::RwLock`.
#[derive(Default)]
pub struct EvaluatorRegistry {
  evaluators: RwLock<HashMap<String, Arc<JumpFunctionEvaluator>>>,
}

impl EvaluatorRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers an evaluator under a decision-point name, replacing any
  /// previous registration for that name.
  pub fn register(&self, name: impl Into<String>, evaluator: Arc<JumpFunctionEvaluator>) {
    let name = name.into();
    event!(Level::DEBUG, decision_point = %name, "Registering evaluator.");
    self.evaluators.write().insert(name, evaluator);
  }

  pub fn get(&self, name: &str) -> Option<Arc<JumpFunctionEvaluator>> {
    self.evaluators.read().get(name).cloned()
  }

  /// Dispatches one decision request to the evaluator registered for
  /// `name`. An unknown name is a typed error, not a skip: the runtime must
  /// distinguish a misconfigured study from a deliberate no-insert decision.
  pub fn decide(&self, name: &str, request: &JumpRequest) -> JunctionResult<JumpDecision> {
    let evaluator = self.get(name).ok_or_else(|| {
      event!(Level::ERROR, decision_point = %name, "No evaluator registered.");
      JunctionError::UnknownDecisionPoint {
        point: name.to_string(),
      }
    })?;
    Ok(evaluator.decide(request))
  }
}
