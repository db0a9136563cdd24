use crate::generator::{errors::SpliceError, model::SourceRange};

/// In-memory stand-in for the editor buffer the generated text is spliced
/// into. Each edit is validated first and applied atomically: a failed edit
/// leaves the contents untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Document {
  text: String,
}

impl Document {
  pub(crate) fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }

  pub(crate) fn contents(&self) -> &str {
    &self.text
  }

  /// Replaces the whole buffer, used by the formatting post-process.
  pub(crate) fn set_contents(&mut self, text: String) {
    self.text = text;
  }

  /// Inserts `fragment` at `offset`, shifting the tail of the buffer.
  pub(crate) fn insert(&mut self, offset: usize, fragment: &str) -> Result<(), SpliceError> {
    if offset > self.text.len() {
      return Err(SpliceError::OutOfBounds {
        offset,
        len: self.text.len(),
      });
    }
    if !self.text.is_char_boundary(offset) {
      return Err(SpliceError::NotCharBoundary { offset });
    }

    self.text.insert_str(offset, fragment);
    Ok(())
  }

  /// Deletes the span covered by `range`.
  pub(crate) fn delete(&mut self, range: SourceRange) -> Result<(), SpliceError> {
    let end = range.end();
    if end > self.text.len() {
      return Err(SpliceError::RangeOutOfBounds {
        start: range.offset,
        end,
        len: self.text.len(),
      });
    }
    if !self.text.is_char_boundary(range.offset) {
      return Err(SpliceError::NotCharBoundary { offset: range.offset });
    }
    if !self.text.is_char_boundary(end) {
      return Err(SpliceError::NotCharBoundary { offset: end });
    }

    self.text.replace_range(range.offset..end, "");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_insert_at_offset() {
    let mut doc = Document::new("class Person {}");
    doc.insert(14, " int age; ").unwrap();
    assert_eq!(doc.contents(), "class Person { int age; }");
  }

  #[test]
  fn test_insert_out_of_bounds_leaves_document_unchanged() {
    let mut doc = Document::new("class Person {}");
    let err = doc.insert(99, "x").unwrap_err();
    assert_eq!(err, SpliceError::OutOfBounds { offset: 99, len: 15 });
    assert_eq!(doc.contents(), "class Person {}");
  }

  #[test]
  fn test_insert_rejects_split_char() {
    let mut doc = Document::new("// å\nclass Person {}");
    let err = doc.insert(4, "x").unwrap_err();
    assert_eq!(err, SpliceError::NotCharBoundary { offset: 4 });
    assert_eq!(doc.contents(), "// å\nclass Person {}");
  }

  #[test]
  fn test_delete_range() {
    let mut doc = Document::new("class Person { int age; }");
    doc.delete(SourceRange::new(14, 10)).unwrap();
    assert_eq!(doc.contents(), "class Person {}");
  }

  #[test]
  fn test_delete_out_of_bounds() {
    let mut doc = Document::new("short");
    let err = doc.delete(SourceRange::new(2, 10)).unwrap_err();
    assert_eq!(
      err,
      SpliceError::RangeOutOfBounds {
        start: 2,
        end: 12,
        len: 5
      }
    );
    assert_eq!(doc.contents(), "short");
  }
}
