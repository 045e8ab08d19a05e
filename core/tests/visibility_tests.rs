// tests/visibility_tests.rs
mod common;

use common::*;
use junction::{is_reserved_study, is_visible, visible_studies, RESERVED_STUDY_PREFIXES};

#[test]
fn test_visibility_truth_table() {
  setup_tracing();
  let public = modes(true, true);
  let private = modes(true, false);

  assert!(is_visible(Some(&public), false));
  assert!(is_visible(Some(&public), true));
  assert!(!is_visible(Some(&private), false));
  assert!(is_visible(Some(&private), true));
}

// Fail-closed: unknown flags resolve to "not visible" regardless of
// privilege, so a backend error can never leak an unpublished study.
#[test]
fn test_unknown_flags_fail_closed() {
  assert!(!is_visible(None, false));
  assert!(!is_visible(None, true));
}

#[test]
fn test_reserved_prefixes() {
  for name in [
    "demo-cleveland",
    "tutorial",
    "tutorial-advanced",
    "example-brush",
    "test-pilot",
    "library-stims",
  ] {
    assert!(is_reserved_study(name), "expected reserved: {name}");
  }
  // The dash is part of the prefix: "demography-survey" is a real study.
  assert!(!is_reserved_study("my-study"));
  assert!(!is_reserved_study("demography-survey"));
  assert!(!is_reserved_study("testbed"));
  assert_eq!(RESERVED_STUDY_PREFIXES.len(), 5);
}

#[tokio::test]
async fn test_visible_studies_two_phase_pipeline() {
  let backend = seeded_backend();
  let ids: Vec<String> = ["pub-study", "priv-study", "empty-study", "no-such-study"]
    .iter()
    .map(|s| s.to_string())
    .collect();

  // Non-admin: only the publicly accessible study survives.
  let visible = visible_studies(&backend, &ids, false).await;
  assert_eq!(visible, vec!["pub-study"]);

  // Admin: sees registered studies, but a failed flag fetch still fails
  // closed for that study only.
  let visible = visible_studies(&backend, &ids, true).await;
  assert_eq!(visible, vec!["pub-study", "priv-study", "empty-study"]);
}

#[tokio::test]
async fn test_visible_studies_outage_hides_study_from_admin() {
  let backend = seeded_backend();
  backend.set_reachable("priv-study", false);
  let ids: Vec<String> = ["pub-study", "priv-study"].iter().map(|s| s.to_string()).collect();

  let visible = visible_studies(&backend, &ids, true).await;
  assert_eq!(visible, vec!["pub-study"]);
}
