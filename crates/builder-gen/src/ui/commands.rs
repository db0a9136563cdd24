use std::{fs, path::Path};

use anyhow::Context;
use comfy_table::{Attribute, Cell, ContentArrangement, Row, Table};

use crate::{
  generator::{
    document::Document,
    model::GenerateRequest,
    options::GenerationOptions,
    orchestrator::{GenerationStats, Orchestrator},
    postprocess::formatter,
    shape::CollectionShape,
  },
  naming::identifiers::{self, JavaFieldNaming, NamingConvention},
  ui::cli::GenerateCommand,
};

fn read_request(input: &Path) -> anyhow::Result<GenerateRequest> {
  let raw = fs::read_to_string(input).with_context(|| format!("reading class model from {}", input.display()))?;
  serde_json::from_str(&raw).with_context(|| format!("parsing class model from {}", input.display()))
}

impl GenerateCommand {
  fn options(&self) -> GenerationOptions {
    GenerationOptions::builder()
      .create_copy_constructor(self.copy_constructor)
      .create_build_factory_method_on_bean(self.bean_factory)
      .use_with_prefix(self.with_prefix)
      .generate_added_removed_methods_for_collections(self.collection_add_remove)
      .generate_vararg_methods_for_collections(self.collection_varargs)
      .format_source(self.format)
      .build()
  }
}

/// `generate`: fragment mode when the model carries no source text, full
/// in-place regeneration when it does.
pub(crate) fn generate_code(command: &GenerateCommand) -> anyhow::Result<()> {
  let request = read_request(&command.input)?;
  let options = command.options();
  let orchestrator = Orchestrator::new(options);

  let (output_text, stats) = match request.source {
    Some(source) => {
      let mut document = Document::new(source);
      let stats = orchestrator.regenerate(&request.class, &mut document)?;
      (document.contents().to_string(), stats)
    }
    None => {
      let artifact = orchestrator.generate_fragment(&request.class)?;
      let mut stats = GenerationStats {
        fields_processed: request.class.fields.len(),
        methods_emitted: artifact.method_count(),
        ..GenerationStats::default()
      };
      let text = match (options.format_source, formatter::format_java(&artifact.text())) {
        (true, Some(pretty)) => {
          stats.formatted = true;
          pretty
        }
        (true, None) => {
          stats
            .warnings
            .push("formatter declined the generated fragment; keeping it unformatted".to_string());
          artifact.text()
        }
        (false, _) => artifact.text(),
      };
      (text, stats)
    }
  };

  fs::write(&command.output, output_text)
    .with_context(|| format!("writing generated source to {}", command.output.display()))?;

  if !command.quiet {
    println!(
      "Generated {} methods for {} fields of `{}` -> {}",
      stats.methods_emitted,
      stats.fields_processed,
      request.class.name,
      command.output.display()
    );
    if stats.removed_builder_class {
      println!("Removed stale nested Builder class");
    }
    if stats.removed_builder_constructor {
      println!("Removed stale builder-typed constructor");
    }
    for warning in &stats.warnings {
      eprintln!("warning: {warning}");
    }
  }

  Ok(())
}

/// `list fields`: show every field with its classification and the names
/// generation would derive for it.
pub(crate) fn list_fields(input: &Path) -> anyhow::Result<()> {
  let request = read_request(input)?;
  let naming = JavaFieldNaming;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic);

  let mut header = Row::new();
  for label in ["FIELD", "DECLARED TYPE", "SHAPE", "BASE NAME", "ACCESSOR"] {
    header.add_cell(Cell::new(label).add_attribute(Attribute::Bold));
  }
  table.set_header(header);

  for field in &request.class.fields {
    let shape = match CollectionShape::classify(&field.declared_type) {
      CollectionShape::Scalar => "scalar".to_string(),
      CollectionShape::Collection { kind, element_type } => format!("{kind}<{element_type}>"),
    };
    let base = naming.base_name(&field.name);
    let accessor = identifiers::accessor_name(&base, false);

    let mut row = Row::new();
    row.add_cell(Cell::new(&field.name));
    row.add_cell(Cell::new(&field.declared_type));
    row.add_cell(Cell::new(shape));
    row.add_cell(Cell::new(base));
    row.add_cell(Cell::new(accessor));
    table.add_row(row);
  }

  println!("Class: {}", request.class.name);
  println!("{table}");
  Ok(())
}
