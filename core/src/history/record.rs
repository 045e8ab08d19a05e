// junction/src/history/record.rs

//! Defines `HistoryRecord`, the structured view of one recorded answer key.

/// A structured, read-only view of one recorded answer key.
///
/// The session runtime names each answered step
/// `<blockPrefix>_<sequenceIndex>_<ComponentType>_<zeroPaddedRepetition>`,
/// anchored at the end of the string. The block prefix may itself contain
/// underscores, so parsing proceeds from the right.
///
/// Records are recomputed on each evaluation and never persisted. Ordering
/// of keys in the underlying answer map carries no meaning; only the encoded
/// sequence index does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
  /// Logical group / component family the step belongs to.
  pub block_prefix: String,
  /// Position of the step in its block.
  pub sequence_index: u32,
  /// Name of the component that produced the answer.
  pub component_type: String,
  /// Zero-based repetition counter, incremented when the same logical step
  /// recurs (e.g. across trials). `0` marks the first occurrence.
  pub repetition_index: u32,
}

impl HistoryRecord {
  /// Parses one answer key into a record.
  ///
  /// Returns `None` for keys that do not match the structural pattern.
  /// This is not an error: the answer namespace may contain unrelated keys
  /// from other blocks, and those are simply excluded from the index.
  pub fn parse(key: &str) -> Option<Self> {
    let mut fields = key.rsplitn(4, '_');
    let repetition = fields.next()?;
    let component = fields.next()?;
    let sequence = fields.next()?;
    let prefix = fields.next()?;

    if prefix.is_empty() {
      return None;
    }
    // Component type is a name, not a number; requiring a leading alphabetic
    // character keeps a key like `a_1_2_3` out of the index.
    if !component.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
      return None;
    }

    Some(HistoryRecord {
      block_prefix: prefix.to_string(),
      sequence_index: parse_digits(sequence)?,
      component_type: component.to_string(),
      repetition_index: parse_digits(repetition)?,
    })
  }

  /// True when this record marks the first occurrence of its step
  /// (the repetition counter is all zeros).
  pub fn is_first_occurrence(&self) -> bool {
    self.repetition_index == 0
  }
}

// Strict digit run: rejects signs, whitespace, and anything `str::parse`
// would otherwise tolerate. Overflowing runs are excluded, not an error.
fn parse_digits(field: &str) -> Option<u32> {
  if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  field.parse().ok()
}
