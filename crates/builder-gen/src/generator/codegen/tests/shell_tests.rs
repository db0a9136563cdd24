use super::{person, synthesize};
use crate::generator::{
  errors::GenerateError,
  model::{ClassModel, FieldDescriptor, SourceRange},
  options::GenerationOptions,
};

#[test]
fn test_scenario_all_options_off() {
  let artifact = synthesize(&person(), &GenerationOptions::default());
  let text = artifact.text();

  assert!(text.contains("public static class Builder {"));
  assert!(text.contains("private String firstname;"));
  assert!(text.contains("private String lastname;"));
  assert!(text.contains("public Builder firstname(String firstname) {"));
  assert!(text.contains("this.firstname = firstname;"));
  assert!(text.contains("public Builder lastname(String lastname) {"));
  assert!(text.contains("return this;"));
  assert!(text.contains("public Person build() {"));
  assert!(text.contains("return new Person(firstname, lastname);"));
  assert!(text.contains("public static Builder builder() {"));
  assert!(text.contains("return new Builder();"));

  // No copy machinery and no bean factory without the flags.
  assert!(!text.contains("public Builder() {"));
  assert!(!text.contains("bean"));
  assert_eq!(artifact.method_count(), 4);
}

#[test]
fn test_scenario_with_prefix() {
  let options = GenerationOptions::builder().use_with_prefix(true).build();
  let text = synthesize(&person(), &options).text();

  assert!(text.contains("public Builder withFirstname(String firstname) {"));
  assert!(text.contains("public Builder withLastname(String lastname) {"));
  assert!(!text.contains("public Builder firstname(String"));
  assert!(!text.contains("public Builder lastname(String"));
  // The parameter keeps the bare base name; only the method is prefixed.
  assert!(text.contains("this.firstname = firstname;"));
}

#[test]
fn test_scenario_copy_constructor() {
  let options = GenerationOptions::builder().create_copy_constructor(true).build();
  let text = synthesize(&person(), &options).text();

  assert!(text.contains("public Builder() {"));
  assert!(text.contains("public Builder(Person bean) {"));
  assert!(text.contains("this.firstname = bean.firstname;"));
  assert!(text.contains("this.lastname = bean.lastname;"));
  assert!(text.contains("public static Builder builder() {"));
  assert!(text.contains("public static Builder builder(Person bean) {"));
  assert!(text.contains("return new Builder(bean);"));
}

#[test]
fn test_build_arguments_preserve_field_order() {
  let class = ClassModel::new(
    "Person",
    vec![
      FieldDescriptor::new("zipcode", "String"),
      FieldDescriptor::new("city", "String"),
      FieldDescriptor::new("firstname", "String"),
      FieldDescriptor::new("dependents", "Collection<Person>"),
    ],
  );
  let text = synthesize(&class, &GenerationOptions::default()).text();
  assert!(text.contains("return new Person(zipcode, city, firstname, dependents);"));
}

#[test]
fn test_base_name_derivation_flows_into_accessors() {
  let class = ClassModel::new(
    "Person",
    vec![
      FieldDescriptor::new("_firstName", "String"),
      FieldDescriptor::new("mLastName", "String"),
    ],
  );
  let text = synthesize(&class, &GenerationOptions::default()).text();

  // Field declarations and assignments keep the raw names; accessors and
  // parameters use the derived base names.
  assert!(text.contains("private String _firstName;"));
  assert!(text.contains("public Builder firstName(String firstName) {"));
  assert!(text.contains("this._firstName = firstName;"));
  assert!(text.contains("public Builder lastName(String lastName) {"));
  assert!(text.contains("this.mLastName = lastName;"));
  assert!(text.contains("return new Person(_firstName, mLastName);"));
}

#[test]
fn test_insertion_offset_marks_closing_brace() {
  let mut class = person();
  class.source_range = Some(SourceRange::new(10, 50));
  let artifact = synthesize(&class, &GenerationOptions::default());
  assert_eq!(artifact.insertion_offset(), 59);
}

#[test]
fn test_synthesis_is_deterministic() {
  let options = GenerationOptions::builder()
    .create_copy_constructor(true)
    .generate_added_removed_methods_for_collections(true)
    .generate_vararg_methods_for_collections(true)
    .build();
  let class = ClassModel::new(
    "Person",
    vec![
      FieldDescriptor::new("firstname", "String"),
      FieldDescriptor::new("tags", "Set<String>"),
    ],
  );
  assert_eq!(synthesize(&class, &options), synthesize(&class, &options));
}

#[test]
fn test_incomplete_model_aborts_generation() {
  let class = ClassModel::new("Person", vec![FieldDescriptor::new("firstname", "  ")]);
  let err = crate::generator::codegen::BuilderSynthesizer::new(
    &GenerationOptions::default(),
    &crate::naming::identifiers::JavaFieldNaming,
  )
  .synthesize(&class)
  .unwrap_err();
  assert_eq!(
    err,
    GenerateError::MissingFieldType {
      class: "Person".to_string(),
      field: "firstname".to_string(),
    }
  );
}
