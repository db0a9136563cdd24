use serde::{Deserialize, Serialize};

use crate::generator::errors::GenerateError;

/// A single field of the origin class, as resolved by the source-model
/// collaborator. Order is significant: it determines declaration order,
/// constructor-argument order, and method-emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct FieldDescriptor {
  pub name: String,
  #[serde(rename = "type")]
  pub declared_type: String,
}

impl FieldDescriptor {
  pub(crate) fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      declared_type: declared_type.into(),
    }
  }
}

/// Half-open byte span of a member inside the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SourceRange {
  pub offset: usize,
  pub length: usize,
}

impl SourceRange {
  pub(crate) fn new(offset: usize, length: usize) -> Self {
    Self { offset, length }
  }

  pub(crate) fn end(&self) -> usize {
    self.offset + self.length
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TypeKind {
  Class,
  Interface,
  Enum,
  Record,
}

/// An existing nested type of the origin class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct NestedTypeModel {
  pub name: String,
  pub kind: TypeKind,
  pub range: SourceRange,
}

/// An existing method or constructor of the origin class. Parameter types
/// are resolved simple names, not JVM signatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct MethodModel {
  pub name: String,
  #[serde(default)]
  pub constructor: bool,
  #[serde(default)]
  pub parameter_types: Vec<String>,
  pub range: SourceRange,
}

/// Everything the pipeline needs to know about the origin class. This is
/// the contract with the (out-of-scope) source-model provider; on the CLI
/// surface it arrives as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ClassModel {
  pub name: String,
  pub fields: Vec<FieldDescriptor>,
  #[serde(default)]
  pub nested_types: Vec<NestedTypeModel>,
  #[serde(default)]
  pub methods: Vec<MethodModel>,
  /// Span of the class declaration within the enclosing document. Absent
  /// in fragment-only requests.
  #[serde(default)]
  pub source_range: Option<SourceRange>,
}

impl ClassModel {
  pub(crate) fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
    Self {
      name: name.into(),
      fields,
      nested_types: Vec::new(),
      methods: Vec::new(),
      source_range: None,
    }
  }

  /// Rejects models the source-model provider failed to resolve fully.
  pub(crate) fn validate(&self) -> Result<(), GenerateError> {
    for field in &self.fields {
      if field.name.trim().is_empty() {
        return Err(GenerateError::MissingFieldName {
          class: self.name.clone(),
        });
      }
      if field.declared_type.trim().is_empty() {
        return Err(GenerateError::MissingFieldType {
          class: self.name.clone(),
          field: field.name.clone(),
        });
      }
    }
    Ok(())
  }
}

/// One generation request as read from the CLI input file: the class model
/// plus, optionally, the full source text to regenerate in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct GenerateRequest {
  pub class: ClassModel,
  #[serde(default)]
  pub source: Option<String>,
}
