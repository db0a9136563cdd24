use indexmap::IndexSet;
use itertools::Itertools;

use crate::{
  generator::{errors::GenerateError, model::ClassModel, options::GenerationOptions},
  naming::identifiers::NamingConvention,
};

pub(crate) mod factory;
pub(crate) mod javadoc;
pub(crate) mod methods;

#[cfg(test)]
mod tests;

/// The nested builder type is always literally `Builder`, never qualified
/// by the origin type name.
pub(crate) const BUILDER_CLASS_NAME: &str = "Builder";
pub(crate) const BUILD_METHOD_NAME: &str = "build";
pub(crate) const FACTORY_METHOD_NAME: &str = "builder";

/// Ordered source lines ready to splice, with the marked insertion offset.
/// A pure function of `(fields, options, class name)` produced it, so the
/// same input always yields the same artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GeneratedArtifact {
  lines: Vec<String>,
  insertion_offset: usize,
  method_count: usize,
}

impl GeneratedArtifact {
  pub(crate) fn lines(&self) -> &[String] {
    &self.lines
  }

  pub(crate) fn insertion_offset(&self) -> usize {
    self.insertion_offset
  }

  pub(crate) fn method_count(&self) -> usize {
    self.method_count
  }

  /// Splice-ready text. Unindented: prettiness is the formatter's concern.
  pub(crate) fn text(&self) -> String {
    let mut text = String::from("\n");
    for line in &self.lines {
      text.push_str(line);
      text.push('\n');
    }
    text
  }
}

/// Line-oriented accumulator for emitted source, the moral equivalent of
/// the print writer the fragments are assembled through.
#[derive(Debug, Default)]
pub(crate) struct SourceWriter {
  lines: Vec<String>,
}

impl SourceWriter {
  pub(crate) fn line(&mut self, text: impl Into<String>) {
    self.lines.push(text.into());
  }

  pub(crate) fn blank(&mut self) {
    self.lines.push(String::new());
  }

  pub(crate) fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
    self.lines.extend(lines);
  }

  pub(crate) fn into_lines(self) -> Vec<String> {
    self.lines
  }
}

/// Order-preserving record of every member signature emitted into the
/// builder class. A second claim of the same signature aborts the whole
/// generation: duplicate members would not compile.
#[derive(Debug, Default)]
pub(crate) struct SignatureRegistry {
  seen: IndexSet<String>,
}

impl SignatureRegistry {
  pub(crate) fn claim(&mut self, field: &str, signature: String) -> Result<(), GenerateError> {
    if self.seen.insert(signature.clone()) {
      Ok(())
    } else {
      Err(GenerateError::DuplicateSignature {
        field: field.to_string(),
        signature,
      })
    }
  }

  pub(crate) fn len(&self) -> usize {
    self.seen.len()
  }
}

/// The core synthesis engine: maps an ordered field list plus options into
/// the builder-class source fragment described by the output grammar.
pub(crate) struct BuilderSynthesizer<'a> {
  options: &'a GenerationOptions,
  naming: &'a dyn NamingConvention,
}

impl<'a> BuilderSynthesizer<'a> {
  pub(crate) fn new(options: &'a GenerationOptions, naming: &'a dyn NamingConvention) -> Self {
    Self { options, naming }
  }

  pub(crate) fn synthesize(&self, class: &ClassModel) -> Result<GeneratedArtifact, GenerateError> {
    class.validate()?;

    let mut registry = SignatureRegistry::default();
    let mut w = SourceWriter::default();

    w.line(format!("public static class {BUILDER_CLASS_NAME} {{"));
    for field in &class.fields {
      w.line(format!("private {} {};", field.declared_type, field.name));
    }

    if self.options.copy_constructor_enabled() {
      self.emit_constructors(&mut w, &mut registry, class)?;
    }

    for field in &class.fields {
      methods::emit_method_group(&mut w, &mut registry, field, self.options, self.naming)?;
    }

    self.emit_build_method(&mut w, &mut registry, class)?;
    w.line("}");

    let origin_members = factory::emit_origin_members(&mut w, &class.name, self.options);

    // Before the origin class's closing brace. Stale-artifact removals must
    // already be reflected in the model's source range.
    let insertion_offset = class
      .source_range
      .map(|range| range.end().saturating_sub(1))
      .unwrap_or(0);

    Ok(GeneratedArtifact {
      insertion_offset,
      method_count: registry.len() + origin_members,
      lines: w.into_lines(),
    })
  }

  fn emit_constructors(
    &self,
    w: &mut SourceWriter,
    registry: &mut SignatureRegistry,
    class: &ClassModel,
  ) -> Result<(), GenerateError> {
    registry.claim(&class.name, format!("{BUILDER_CLASS_NAME}()"))?;
    w.blank();
    w.line(format!("public {BUILDER_CLASS_NAME}() {{"));
    w.line("}");

    registry.claim(&class.name, format!("{BUILDER_CLASS_NAME}({})", class.name))?;
    w.blank();
    w.line(format!("public {BUILDER_CLASS_NAME}({} bean) {{", class.name));
    for field in &class.fields {
      w.line(format!("this.{0} = bean.{0};", field.name));
    }
    w.line("}");
    Ok(())
  }

  /// Terminal `build()`: invokes the origin type's all-fields constructor
  /// with arguments in exactly the input field order. No reordering happens
  /// here; the field-list provider owns that contract.
  fn emit_build_method(
    &self,
    w: &mut SourceWriter,
    registry: &mut SignatureRegistry,
    class: &ClassModel,
  ) -> Result<(), GenerateError> {
    registry.claim(&class.name, format!("{BUILD_METHOD_NAME}()"))?;

    let arguments = class.fields.iter().map(|field| field.name.as_str()).join(", ");
    w.blank();
    w.line(format!("public {} {BUILD_METHOD_NAME}() {{", class.name));
    w.line(format!("return new {}({arguments});", class.name));
    w.line("}");
    Ok(())
  }
}
