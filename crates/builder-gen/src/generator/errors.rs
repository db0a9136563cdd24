use thiserror::Error;

/// Failures raised while synthesizing a builder fragment.
///
/// Generation is all-or-nothing: any of these aborts the request and no
/// partial artifact is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum GenerateError {
  #[error("class `{class}` has a field with an empty name")]
  MissingFieldName { class: String },

  #[error("field `{field}` of class `{class}` has no declared type")]
  MissingFieldType { class: String, field: String },

  #[error("duplicate method signature `{signature}` derived from field `{field}`")]
  DuplicateSignature { field: String, signature: String },

  #[error("class `{class}` carries no source range; cannot compute an insertion offset")]
  MissingSourceRange { class: String },

  #[error("stale builder spans of `{class}` total {removed} bytes but its source range is only {available} bytes")]
  InconsistentRanges {
    class: String,
    removed: usize,
    available: usize,
  },
}

/// Failures applying a text edit to the target document.
///
/// The document is never mutated on failure, so the already-computed
/// artifact stays valid and the edit can be retried at a corrected offset.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum SpliceError {
  #[error("insertion offset {offset} exceeds document length {len}")]
  OutOfBounds { offset: usize, len: usize },

  #[error("offset {offset} does not fall on a character boundary")]
  NotCharBoundary { offset: usize },

  #[error("deletion range {start}..{end} exceeds document length {len}")]
  RangeOutOfBounds { start: usize, end: usize, len: usize },
}
