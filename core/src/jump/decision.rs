// junction/src/jump/decision.rs

//! Wire-facing types of the decision protocol consumed by the session
//! runtime.

use crate::counterbalance::Cluster;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The flat answer namespace the runtime accumulates for a session: answer
/// key to arbitrary recorded value. The engine only inspects the keys.
pub type AnswerMap = HashMap<String, serde_json::Value>;

/// One evaluation request from the runtime: the accumulated answers plus the
/// opaque per-branching-point configuration map.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JumpRequest {
  #[serde(default)]
  pub answers: AnswerMap,
  #[serde(default)]
  pub custom_parameters: serde_json::Value,
}

/// Parameters carried by an inserted component.
///
/// `page` is an environment-specific destination URL supplied at evaluator
/// construction and passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertParameters {
  pub page: String,
  pub brush_type: String,
  /// Present only under the exclusive-regime policy; the dedup policy has
  /// no automation axis.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub allow_automations: Option<bool>,
  pub cluster: Cluster,
}

/// Outcome of one evaluation. Produced fresh per call, immutable once
/// returned.
///
/// `component: None` serializes as `"component": null` and means "do not
/// insert anything at this point".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JumpDecision {
  pub component: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parameters: Option<InsertParameters>,
}

impl JumpDecision {
  /// The "do not insert" outcome.
  pub fn skip() -> Self {
    JumpDecision {
      component: None,
      parameters: None,
    }
  }

  pub fn insert(component: impl Into<String>, parameters: InsertParameters) -> Self {
    JumpDecision {
      component: Some(component.into()),
      parameters: Some(parameters),
    }
  }

  pub fn inserts(&self) -> bool {
    self.component.is_some()
  }
}
