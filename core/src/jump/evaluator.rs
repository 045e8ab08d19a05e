// junction/src/jump/evaluator.rs

//! The jump-function evaluator: a pure, total decision function over the
//! answer history of a session.

use crate::counterbalance::ClusterAssigner;
use crate::history::AnswerHistoryIndex;
use crate::jump::decision::{AnswerMap, InsertParameters, JumpDecision, JumpRequest};
use crate::jump::params::CustomParameters;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{event, instrument, Level};

/// The branch under which a decision point's effect may already have fired.
///
/// Modeled as an enumeration rather than string concatenation at match
/// sites: the regime owns the mapping to its marker prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
  /// The manually authored path; active while automations are disabled.
  Static,
  /// The automated ("dynamic") path; active while automations are enabled.
  Automated,
}

/// A branching point, identified by its author-supplied brush identifier.
///
/// Knows how each regime marks its keys in the answer namespace, so policy
/// code never assembles prefixes inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionPoint {
  identifier: String,
}

impl DecisionPoint {
  pub fn new(identifier: impl Into<String>) -> Self {
    DecisionPoint {
      identifier: identifier.into(),
    }
  }

  pub fn identifier(&self) -> &str {
    &self.identifier
  }

  /// The block prefix a `regime`'s keys carry for this decision point.
  /// The automated path runs under a `-Dynamic`-suffixed block.
  pub fn marker_prefix(&self, regime: Regime) -> Cow<'_, str> {
    match regime {
      Regime::Static => Cow::Borrowed(self.identifier.as_str()),
      Regime::Automated => Cow::Owned(format!("{}-Dynamic", self.identifier)),
    }
  }

  /// The identifier with all whitespace removed, as matched against raw
  /// keys by the dedup policy.
  pub fn normalized_identifier(&self) -> String {
    self.identifier.chars().filter(|c| !c.is_whitespace()).collect()
  }
}

/// The gating policy family: insert unless an already-recorded key signals
/// that this decision point has produced its effect under the active regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePolicy {
  /// Insert exactly once, gated across the static/automated regime pair.
  ///
  /// Under the static regime a first-seen marker of either regime
  /// suppresses insertion: once the automated path has fired, the static
  /// path must not re-run. Under the automated regime only an automated
  /// marker suppresses; the static path alone does not satisfy an
  /// automation request.
  ExclusiveRegime,
  /// Degenerate single-regime case: skip iff any raw key contains the
  /// normalized identifier as a substring.
  Dedup,
}

/// Decides, per step transition, whether to insert a dynamically generated
/// component.
///
/// Synchronous and total over its domain: malformed history keys are
/// excluded by the index, absent configuration falls back to defaults, and
/// no input produces an error. The only side effect is drawing a cluster
/// from the configured [`ClusterAssigner`].
pub struct JumpFunctionEvaluator {
  /// Component type inserted on a positive decision; also the component
  /// type first-seen markers are matched against.
  component: String,
  /// Environment-specific destination URL, passed through verbatim.
  target_page: String,
  policy: GatePolicy,
  assigner: Arc<dyn ClusterAssigner>,
}

impl JumpFunctionEvaluator {
  pub fn new(
    component: impl Into<String>,
    target_page: impl Into<String>,
    policy: GatePolicy,
    assigner: Arc<dyn ClusterAssigner>,
  ) -> Self {
    JumpFunctionEvaluator {
      component: component.into(),
      target_page: target_page.into(),
      policy,
      assigner,
    }
  }

  pub fn component(&self) -> &str {
    &self.component
  }

  pub fn policy(&self) -> GatePolicy {
    self.policy
  }

  /// Entry point for the runtime's decision protocol: deserializes the
  /// opaque parameter map (falling back to defaults as a whole if
  /// malformed) and evaluates.
  pub fn decide(&self, request: &JumpRequest) -> JumpDecision {
    let params = CustomParameters::from_value(&request.custom_parameters);
    self.evaluate(&request.answers, &params)
  }

  /// Evaluates against an answer map. Only the keys are inspected.
  pub fn evaluate(&self, answers: &AnswerMap, params: &CustomParameters) -> JumpDecision {
    self.evaluate_keys(answers.keys(), params)
  }

  /// Evaluates against a bare set of answer keys.
  #[instrument(
    name = "JumpFunctionEvaluator::evaluate",
    skip_all,
    fields(component = %self.component, policy = ?self.policy)
  )]
  pub fn evaluate_keys<I, S>(&self, keys: I, params: &CustomParameters) -> JumpDecision
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let index = AnswerHistoryIndex::parse(keys);
    let point = DecisionPoint::new(params.brush_or_default());

    let decision = match self.policy {
      GatePolicy::ExclusiveRegime => self.evaluate_exclusive(&index, &point, params),
      GatePolicy::Dedup => self.evaluate_dedup(&index, &point, params),
    };

    event!(
      Level::DEBUG,
      decision_point = %point.identifier(),
      inserts = decision.inserts(),
      "Jump decision made."
    );
    decision
  }

  fn evaluate_exclusive(
    &self,
    index: &AnswerHistoryIndex,
    point: &DecisionPoint,
    params: &CustomParameters,
  ) -> JumpDecision {
    let static_seen = index.first_seen_under(&point.marker_prefix(Regime::Static), &self.component);
    let automated_seen =
      index.first_seen_under(&point.marker_prefix(Regime::Automated), &self.component);

    let suppressed = match params.active_regime() {
      Regime::Static => static_seen || automated_seen,
      Regime::Automated => automated_seen,
    };
    if suppressed {
      event!(
        Level::TRACE,
        static_seen,
        automated_seen,
        regime = ?params.active_regime(),
        "Decision point already fired under the active regime; skipping."
      );
      return JumpDecision::skip();
    }

    JumpDecision::insert(
      self.component.clone(),
      InsertParameters {
        page: self.target_page.clone(),
        brush_type: point.identifier().to_string(),
        allow_automations: Some(params.automations_enabled()),
        cluster: self.assigner.next(),
      },
    )
  }

  fn evaluate_dedup(
    &self,
    index: &AnswerHistoryIndex,
    point: &DecisionPoint,
    _params: &CustomParameters,
  ) -> JumpDecision {
    if index.contains_fragment(&point.normalized_identifier()) {
      event!(Level::TRACE, "Dynamic block already recorded; skipping.");
      return JumpDecision::skip();
    }

    JumpDecision::insert(
      self.component.clone(),
      InsertParameters {
        page: self.target_page.clone(),
        brush_type: point.identifier().to_string(),
        allow_automations: None,
        cluster: self.assigner.next(),
      },
    )
  }
}
