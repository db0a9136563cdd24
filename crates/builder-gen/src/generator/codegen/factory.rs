use crate::generator::{
  codegen::{BUILD_METHOD_NAME, BUILDER_CLASS_NAME, FACTORY_METHOD_NAME, SourceWriter, javadoc::Javadoc},
  options::GenerationOptions,
};

/// Emits the members that land on the origin class, after the builder
/// shell's closing brace: the optional `build()` convenience factory, then
/// the static `builder()` factories. Returns how many methods were written.
///
/// These live on the origin type, not the builder, so their signatures are
/// in a different namespace than the builder's registry.
pub(crate) fn emit_origin_members(w: &mut SourceWriter, class_name: &str, options: &GenerationOptions) -> usize {
  let mut emitted = 0;

  if options.create_build_factory_method_on_bean {
    w.blank();
    w.extend(
      Javadoc::new("Returns a builder pre-populated with this instance's field values")
        .returns("a builder carrying this instance's field values")
        .lines(),
    );
    w.line(format!("public {BUILDER_CLASS_NAME} {BUILD_METHOD_NAME}() {{"));
    w.line(format!("return {FACTORY_METHOD_NAME}(this);"));
    w.line("}");
    emitted += 1;
  }

  w.blank();
  w.line(format!(
    "public static {BUILDER_CLASS_NAME} {FACTORY_METHOD_NAME}() {{"
  ));
  w.line(format!("return new {BUILDER_CLASS_NAME}();"));
  w.line("}");
  emitted += 1;

  if options.copy_constructor_enabled() {
    w.blank();
    w.line(format!(
      "public static {BUILDER_CLASS_NAME} {FACTORY_METHOD_NAME}({class_name} bean) {{"
    ));
    w.line(format!("return new {BUILDER_CLASS_NAME}(bean);"));
    w.line("}");
    emitted += 1;
  }

  emitted
}
