/// Immutable per-request configuration. All six switches default to off;
/// the invoking environment (CLI flags, a UI form) decides how they are
/// collected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, bon::Builder)]
pub(crate) struct GenerationOptions {
  /// Emit a no-arg constructor plus a constructor copying an existing
  /// instance's field values, and the matching static factory overload.
  #[builder(default)]
  pub create_copy_constructor: bool,

  /// Emit, on the origin class itself, a `build()` convenience method
  /// returning a pre-populated builder.
  #[builder(default)]
  pub create_build_factory_method_on_bean: bool,

  /// Post-process the spliced result with the pretty-printer. Cosmetic
  /// only and strictly best-effort.
  #[builder(default)]
  pub format_source: bool,

  /// Name accessors `with<Base>` instead of the bare base name.
  #[builder(default)]
  pub use_with_prefix: bool,

  /// For collection fields, additionally emit incremental `Added`/`Removed`
  /// mutator pairs plus the lazy-init helper.
  #[builder(default)]
  pub generate_added_removed_methods_for_collections: bool,

  /// For collection fields, additionally emit variable-arity overloads
  /// mirroring each collection-accepting method.
  #[builder(default)]
  pub generate_vararg_methods_for_collections: bool,
}

impl GenerationOptions {
  /// The bean factory delegates to the copy-based `builder(bean)` factory,
  /// so requesting it forces the copy-constructor machinery on.
  pub(crate) fn copy_constructor_enabled(&self) -> bool {
    self.create_copy_constructor || self.create_build_factory_method_on_bean
  }
}
