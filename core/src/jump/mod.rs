// junction/src/jump/mod.rs

//! The jump-function decision engine.
//!
//! Before rendering a step, the session runtime asks the engine whether a
//! dynamically generated component should be inserted into the sequence.
//! The engine indexes the participant's accumulated answers, applies a
//! gating policy for the decision point, and returns either "skip" or
//! "insert component X with parameters P".

pub mod decision;
pub mod evaluator;
pub mod params;

pub use decision::{AnswerMap, InsertParameters, JumpDecision, JumpRequest};
pub use evaluator::{DecisionPoint, GatePolicy, JumpFunctionEvaluator, Regime};
pub use params::{CustomParameters, DEFAULT_BRUSH};
