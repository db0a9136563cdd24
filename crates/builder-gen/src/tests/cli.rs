use std::fs;

use crate::ui::{cli::GenerateCommand, commands};

fn command(input: &std::path::Path, output: &std::path::Path) -> GenerateCommand {
  GenerateCommand {
    input: input.to_path_buf(),
    output: output.to_path_buf(),
    copy_constructor: false,
    bean_factory: false,
    with_prefix: false,
    collection_add_remove: false,
    collection_varargs: false,
    format: false,
    quiet: true,
  }
}

#[test]
fn test_generate_fragment_from_model_file() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("person.json");
  let output = dir.path().join("Builder.java");
  fs::write(
    &input,
    r#"{
      "class": {
        "name": "Person",
        "fields": [
          { "name": "firstname", "type": "String" },
          { "name": "lastname", "type": "String" }
        ]
      }
    }"#,
  )
  .unwrap();

  commands::generate_code(&command(&input, &output)).unwrap();

  let generated = fs::read_to_string(&output).unwrap();
  assert!(generated.contains("public static class Builder {"));
  assert!(generated.contains("return new Person(firstname, lastname);"));
}

#[test]
fn test_generate_regenerates_embedded_source() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("person.json");
  let output = dir.path().join("Person.java");

  let source = "public class Person {\nprivate String firstname;\n}\n";
  let request = serde_json::json!({
    "class": {
      "name": "Person",
      "fields": [{ "name": "firstname", "type": "String" }],
      "source_range": { "offset": 0, "length": source.trim_end().len() }
    },
    "source": source,
  });
  fs::write(&input, serde_json::to_string_pretty(&request).unwrap()).unwrap();

  let mut cmd = command(&input, &output);
  cmd.format = true;
  commands::generate_code(&cmd).unwrap();

  let rewritten = fs::read_to_string(&output).unwrap();
  assert!(rewritten.starts_with("public class Person {"));
  assert!(rewritten.contains("    public static class Builder {"));
  assert!(rewritten.trim_end().ends_with('}'));
}

#[test]
fn test_generate_rejects_malformed_model() {
  let dir = tempfile::tempdir().unwrap();
  let input = dir.path().join("broken.json");
  let output = dir.path().join("out.java");
  fs::write(&input, "{ not json").unwrap();

  let err = commands::generate_code(&command(&input, &output)).unwrap_err();
  assert!(err.to_string().contains("parsing class model"));
  assert!(!output.exists());
}
