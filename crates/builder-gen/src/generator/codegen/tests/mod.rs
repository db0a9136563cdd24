mod shell_tests;

use crate::{
  generator::{
    codegen::{BuilderSynthesizer, GeneratedArtifact},
    model::{ClassModel, FieldDescriptor},
    options::GenerationOptions,
  },
  naming::identifiers::JavaFieldNaming,
};

fn synthesize(class: &ClassModel, options: &GenerationOptions) -> GeneratedArtifact {
  BuilderSynthesizer::new(options, &JavaFieldNaming)
    .synthesize(class)
    .unwrap()
}

fn person() -> ClassModel {
  ClassModel::new(
    "Person",
    vec![
      FieldDescriptor::new("firstname", "String"),
      FieldDescriptor::new("lastname", "String"),
    ],
  )
}

fn tagged() -> ClassModel {
  ClassModel::new("Article", vec![FieldDescriptor::new("tags", "Set<String>")])
}
