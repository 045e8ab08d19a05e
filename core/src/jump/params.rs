// junction/src/jump/params.rs

//! Author-supplied configuration for one branching point.

use crate::jump::evaluator::Regime;
use serde::Deserialize;

/// Brush identifier substituted when the study author supplies none.
pub const DEFAULT_BRUSH: &str = "Rectangle";

/// Custom parameters attached to a branching point in the study
/// configuration. Read-only input to the evaluator.
///
/// Both fields are optional; evaluation is total and falls back to
/// documented defaults ([`DEFAULT_BRUSH`], automations disabled) rather than
/// failing on absent or malformed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CustomParameters {
  /// Identifier of the decision point's brush / component family.
  pub brush: Option<String>,
  /// Whether the automated ("dynamic") regime is active for this point.
  pub automations: Option<bool>,
}

impl CustomParameters {
  /// Deserializes from the opaque map the runtime carries per branching
  /// point. A missing or malformed map degrades to the defaults as a whole;
  /// this keeps the decision protocol total.
  pub fn from_value(value: &serde_json::Value) -> Self {
    serde_json::from_value(value.clone()).unwrap_or_default()
  }

  pub fn brush_or_default(&self) -> &str {
    self.brush.as_deref().unwrap_or(DEFAULT_BRUSH)
  }

  pub fn automations_enabled(&self) -> bool {
    self.automations.unwrap_or(false)
  }

  /// The regime this evaluation runs under.
  pub fn active_regime(&self) -> Regime {
    if self.automations_enabled() {
      Regime::Automated
    } else {
      Regime::Static
    }
  }
}
