// junction/src/history/index.rs

//! Defines `AnswerHistoryIndex`, the per-evaluation index over a session's
//! recorded answer keys.

use crate::history::record::HistoryRecord;

/// An index over the full set of a session's answer keys.
///
/// Built fresh for each evaluation from the flat key namespace. Keys matching
/// the structural pattern are parsed into [`HistoryRecord`]s; malformed keys
/// are retained only in raw form (the dedup policy matches raw keys) and are
/// never an error.
///
/// All queries are existential predicates over the whole set. The index
/// deliberately exposes no first-match-in-iteration-order operation, because
/// the underlying map carries no ordering.
#[derive(Debug, Clone, Default)]
pub struct AnswerHistoryIndex {
  records: Vec<HistoryRecord>,
  raw_keys: Vec<String>,
}

impl AnswerHistoryIndex {
  /// Indexes a set of answer keys. Total: never fails on any input set.
  pub fn parse<I, S>(keys: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut records = Vec::new();
    let mut raw_keys = Vec::new();
    for key in keys {
      let key = key.as_ref();
      if let Some(record) = HistoryRecord::parse(key) {
        records.push(record);
      }
      raw_keys.push(key.to_string());
    }
    AnswerHistoryIndex { records, raw_keys }
  }

  /// The parsed records, in no meaningful order.
  pub fn records(&self) -> &[HistoryRecord] {
    &self.records
  }

  /// Every key the index was built from, including unparseable ones.
  pub fn raw_keys(&self) -> &[String] {
    &self.raw_keys
  }

  /// True if any record marks the first occurrence of `component_type`
  /// under exactly `block_prefix`.
  ///
  /// This is the "first-seen marker" predicate: the evaluator uses it to
  /// detect that a decision point has already produced its effect.
  pub fn first_seen_under(&self, block_prefix: &str, component_type: &str) -> bool {
    self.records.iter().any(|r| {
      r.block_prefix == block_prefix && r.component_type == component_type && r.is_first_occurrence()
    })
  }

  /// True if any raw key contains `fragment` as a substring.
  pub fn contains_fragment(&self, fragment: &str) -> bool {
    self.raw_keys.iter().any(|k| k.contains(fragment))
  }
}
