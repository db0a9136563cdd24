//! Orchestration for one builder generation request.
//!
//! The pipeline is fully synchronous and runs to completion per request:
//! stale-artifact removal, synthesis, splice, optional formatting. No state
//! survives between requests; the only shared resource is the target
//! document, and it receives at most one splice per request.

use anyhow::Context;

use crate::{
  generator::{
    codegen::{BuilderSynthesizer, GeneratedArtifact},
    document::Document,
    errors::GenerateError,
    model::ClassModel,
    options::GenerationOptions,
    postprocess::formatter,
    remover,
  },
  naming::identifiers::JavaFieldNaming,
};

pub(crate) struct Orchestrator {
  options: GenerationOptions,
  naming: JavaFieldNaming,
}

/// What one generation run did, for CLI reporting. Formatter declines land
/// in `warnings`, never in an error.
#[derive(Debug, Default)]
pub(crate) struct GenerationStats {
  pub fields_processed: usize,
  pub methods_emitted: usize,
  pub removed_builder_class: bool,
  pub removed_builder_constructor: bool,
  pub formatted: bool,
  pub warnings: Vec<String>,
}

impl Orchestrator {
  pub(crate) fn new(options: GenerationOptions) -> Self {
    Self {
      options,
      naming: JavaFieldNaming,
    }
  }

  /// Synthesizes the builder fragment without touching any document.
  /// Side-effect-free and idempotent: the same model and options always
  /// produce the same artifact.
  pub(crate) fn generate_fragment(&self, class: &ClassModel) -> Result<GeneratedArtifact, GenerateError> {
    BuilderSynthesizer::new(&self.options, &self.naming).synthesize(class)
  }

  /// Full regeneration against a live document: purge stale artifacts,
  /// synthesize against the shrunk class span, splice, then format if asked.
  pub(crate) fn regenerate(&self, class: &ClassModel, document: &mut Document) -> anyhow::Result<GenerationStats> {
    let class_range = class.source_range.ok_or(GenerateError::MissingSourceRange {
      class: class.name.clone(),
    })?;

    let plan = remover::plan_removals(class);
    // Model ranges arrive from an external provider; a stale span larger
    // than the class span means the model is inconsistent. Checked before
    // any deletion so a bad model leaves the document untouched.
    let shrunk_length =
      class_range
        .length
        .checked_sub(plan.total_length())
        .ok_or_else(|| GenerateError::InconsistentRanges {
          class: class.name.clone(),
          removed: plan.total_length(),
          available: class_range.length,
        })?;

    for range in plan.ranges() {
      document
        .delete(range)
        .with_context(|| format!("removing stale builder artifact of `{}`", class.name))?;
    }

    // The class span shrank by exactly the deleted spans; the insertion
    // offset must be computed against the purged document.
    let mut working = class.clone();
    working.source_range = Some(crate::generator::model::SourceRange::new(
      class_range.offset,
      shrunk_length,
    ));

    let artifact = self
      .generate_fragment(&working)
      .with_context(|| format!("synthesizing builder for `{}`", class.name))?;

    let offset = artifact.insertion_offset();
    document
      .insert(offset, &artifact.text())
      .with_context(|| format!("splicing generated builder into `{}` at offset {offset}", class.name))?;

    let mut stats = GenerationStats {
      fields_processed: class.fields.len(),
      methods_emitted: artifact.method_count(),
      removed_builder_class: plan.stale_builder_class.is_some(),
      removed_builder_constructor: plan.stale_builder_constructor.is_some(),
      ..GenerationStats::default()
    };

    if self.options.format_source {
      match formatter::format_java(document.contents()) {
        Some(pretty) => {
          document.set_contents(pretty);
          stats.formatted = true;
        }
        None => stats
          .warnings
          .push("formatter declined the spliced source; keeping it unformatted".to_string()),
      }
    }

    Ok(stats)
  }
}
