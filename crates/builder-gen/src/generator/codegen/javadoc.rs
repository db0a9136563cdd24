/// Minimal javadoc templating for emitted methods. Blocks are built up
/// fluently and rendered as raw source lines; indentation is left to the
/// formatting post-process.
#[derive(Debug, Clone, Default)]
pub(crate) struct Javadoc {
  summary: String,
  params: Vec<(String, String)>,
  returns: Option<String>,
  throws: Option<String>,
}

impl Javadoc {
  pub(crate) fn new(summary: impl Into<String>) -> Self {
    Self {
      summary: summary.into(),
      ..Self::default()
    }
  }

  pub(crate) fn param(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
    self.params.push((name.into(), description.into()));
    self
  }

  pub(crate) fn returns(mut self, description: impl Into<String>) -> Self {
    self.returns = Some(description.into());
    self
  }

  /// Names the invalid-argument failure condition of the generated method.
  pub(crate) fn throws_illegal_argument(mut self, condition: impl Into<String>) -> Self {
    self.throws = Some(condition.into());
    self
  }

  pub(crate) fn lines(&self) -> Vec<String> {
    let mut lines = vec!["/**".to_string(), format!(" * {}.", self.summary.trim_end_matches('.'))];

    if !self.params.is_empty() || self.returns.is_some() || self.throws.is_some() {
      lines.push(" *".to_string());
    }
    for (name, description) in &self.params {
      lines.push(format!(" * @param {name} {description}"));
    }
    if let Some(returns) = &self.returns {
      lines.push(format!(" * @return {returns}"));
    }
    if let Some(condition) = &self.throws {
      lines.push(format!(" * @throws IllegalArgumentException if {condition}"));
    }
    lines.push(" */".to_string());
    lines
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_summary_only() {
    let doc = Javadoc::new("Sets the firstname");
    assert_eq!(doc.lines(), vec!["/**", " * Sets the firstname.", " */"]);
  }

  #[test]
  fn test_full_block() {
    let doc = Javadoc::new("Sets the tags.")
      .param("tags", "the new tags")
      .returns("this builder for chaining")
      .throws_illegal_argument("tags is null or contains a null element");
    assert_eq!(
      doc.lines(),
      vec![
        "/**",
        " * Sets the tags.",
        " *",
        " * @param tags the new tags",
        " * @return this builder for chaining",
        " * @throws IllegalArgumentException if tags is null or contains a null element",
        " */",
      ]
    );
  }
}
