// junction/src/visibility.rs

//! Visibility filtering of the study catalog.
//!
//! Which studies a viewer may see depends on each study's mode flags and on
//! the viewer's privilege. The filter itself is pure and synchronous; the
//! per-study flag fetch is a separate phase, so the two compose as a
//! fetch-then-filter pipeline.

use crate::status::model::ModeFlags;
use crate::status::port::StorageStatusPort;
use futures::future;
use tracing::{event, Level};

/// Study-id prefixes reserved for bundled demo and tutorial content; these
/// are excluded from the administrative catalog listing outright.
pub const RESERVED_STUDY_PREFIXES: [&str; 5] = ["demo-", "tutorial", "example-", "test-", "library-"];

/// True for studies carrying a reserved bundled-content prefix.
pub fn is_reserved_study(study_id: &str) -> bool {
  RESERVED_STUDY_PREFIXES.iter().any(|prefix| study_id.starts_with(prefix))
}

/// The per-study visibility decision.
///
/// `modes: None` means the flags could not be retrieved; the decision is
/// then "not visible" regardless of privilege (fail-closed), so a backend
/// error can never leak an unpublished study. With known flags, a study is
/// visible to admins and to anyone when its analytics are publicly
/// accessible.
///
/// Evaluated independently per study; no cross-study state.
pub fn is_visible(modes: Option<&ModeFlags>, caller_is_admin: bool) -> bool {
  match modes {
    None => false,
    Some(modes) => caller_is_admin || modes.analytics_publicly_accessible,
  }
}

/// Two-phase catalog visibility: fetch every study's mode flags
/// concurrently, then apply [`is_visible`] per study.
///
/// A failed fetch closes visibility for that study only; the rest of the
/// catalog is unaffected. Input order is preserved among the visible
/// studies.
pub async fn visible_studies(
  port: &dyn StorageStatusPort,
  study_ids: &[String],
  caller_is_admin: bool,
) -> Vec<String> {
  let flags = future::join_all(study_ids.iter().map(|id| port.modes(id))).await;

  study_ids
    .iter()
    .zip(flags)
    .filter(|(study_id, flags)| {
      if let Err(error) = flags {
        event!(Level::WARN, %study_id, %error, "Mode flags unavailable; hiding study.");
      }
      is_visible(flags.as_ref().ok(), caller_is_admin)
    })
    .map(|(study_id, _)| study_id.clone())
    .collect()
}
