use crate::{
  generator::{
    codegen::{BUILDER_CLASS_NAME, SignatureRegistry, SourceWriter, javadoc::Javadoc},
    errors::GenerateError,
    model::FieldDescriptor,
    options::GenerationOptions,
    shape::{CollectionKind, CollectionShape},
  },
  naming::identifiers::{self, NamingConvention, capitalize},
};

/// Emits the full accessor group for one field, in declaration order.
///
/// Scalar fields get a single chaining setter. Collection fields get the
/// fixed branch set: setter, vararg setter, added, vararg added, removed,
/// vararg removed, init helper, copy helper, validator, vararg validator —
/// always in that order, with the optional members gated by the collection
/// flags. A stable order keeps regeneration byte-identical for identical
/// inputs.
pub(crate) fn emit_method_group(
  w: &mut SourceWriter,
  registry: &mut SignatureRegistry,
  field: &FieldDescriptor,
  options: &GenerationOptions,
  naming: &dyn NamingConvention,
) -> Result<(), GenerateError> {
  let base = naming.base_name(&field.name);
  let accessor = identifiers::accessor_name(&base, options.use_with_prefix);

  match CollectionShape::classify(&field.declared_type) {
    CollectionShape::Scalar => emit_scalar_setter(w, registry, field, &base, &accessor),
    CollectionShape::Collection { kind, element_type } => CollectionGroup {
      field,
      options,
      kind,
      element: element_type,
      cap: capitalize(&base),
      base,
      accessor,
    }
    .emit(w, registry),
  }
}

fn emit_scalar_setter(
  w: &mut SourceWriter,
  registry: &mut SignatureRegistry,
  field: &FieldDescriptor,
  base: &str,
  accessor: &str,
) -> Result<(), GenerateError> {
  registry.claim(&field.name, format!("{accessor}({})", field.declared_type))?;

  w.blank();
  w.extend(
    Javadoc::new(format!("Sets the {base}"))
      .param(base, format!("the new {base}"))
      .returns("this builder for chaining")
      .lines(),
  );
  w.line(format!(
    "public {BUILDER_CLASS_NAME} {accessor}({} {base}) {{",
    field.declared_type
  ));
  w.line(format!("this.{} = {base};", field.name));
  w.line("return this;");
  w.line("}");
  Ok(())
}

/// Everything needed to emit the collection branch set for one field.
struct CollectionGroup<'a> {
  field: &'a FieldDescriptor,
  options: &'a GenerationOptions,
  kind: CollectionKind,
  element: String,
  base: String,
  cap: String,
  accessor: String,
}

impl CollectionGroup<'_> {
  fn emit(&self, w: &mut SourceWriter, registry: &mut SignatureRegistry) -> Result<(), GenerateError> {
    let varargs = self.options.generate_vararg_methods_for_collections;
    let added_removed = self.options.generate_added_removed_methods_for_collections;

    self.emit_setter(w, registry)?;
    if varargs {
      self.emit_vararg_setter(w, registry)?;
    }
    if added_removed {
      self.emit_added(w, registry)?;
      if varargs {
        self.emit_vararg_added(w, registry)?;
      }
      self.emit_removed(w, registry)?;
      if varargs {
        self.emit_vararg_removed(w, registry)?;
      }
      self.emit_init_helper(w, registry)?;
    }
    self.emit_copy_helper(w, registry)?;
    self.emit_validator(w, registry)?;
    if varargs {
      self.emit_vararg_validator(w, registry)?;
    }
    Ok(())
  }

  fn null_condition(&self) -> String {
    format!("{} is null or contains a null element", self.base)
  }

  /// Collection expression handing validated vararg elements to the
  /// declared-typed overload. The wrappers tolerate null elements so a bad
  /// argument reaches the canonical validator instead of dying with an
  /// accidental NullPointerException.
  fn vararg_copy(&self, elements: &str) -> String {
    let element = &self.element;
    match self.kind {
      CollectionKind::Collection => format!("Arrays.asList({elements})"),
      CollectionKind::List => format!("new ArrayList<{element}>(Arrays.asList({elements}))"),
      CollectionKind::Set => format!("new LinkedHashSet<{element}>(Arrays.asList({elements}))"),
    }
  }

  fn emit_setter(&self, w: &mut SourceWriter, registry: &mut SignatureRegistry) -> Result<(), GenerateError> {
    let Self {
      field,
      base,
      cap,
      accessor,
      ..
    } = self;
    registry.claim(&field.name, format!("{accessor}({})", field.declared_type))?;

    w.blank();
    w.extend(
      Javadoc::new(format!("Sets the {base}, replacing any previously configured elements"))
        .param(base, format!("the new {base}"))
        .returns("this builder for chaining")
        .throws_illegal_argument(self.null_condition())
        .lines(),
    );
    w.line(format!(
      "public {BUILDER_CLASS_NAME} {accessor}({} {base}) {{",
      field.declared_type
    ));
    // Defensive copy into the normalized storage; never alias the caller's
    // collection.
    w.line(format!("this.{} = new{cap}(check{cap}({base}));", field.name));
    w.line("return this;");
    w.line("}");
    Ok(())
  }

  fn emit_vararg_setter(&self, w: &mut SourceWriter, registry: &mut SignatureRegistry) -> Result<(), GenerateError> {
    let Self {
      field,
      element,
      base,
      cap,
      accessor,
      ..
    } = self;
    registry.claim(&field.name, format!("{accessor}({element}...)"))?;

    let copy = self.vararg_copy(&format!("check{cap}({base})"));
    w.blank();
    w.extend(
      Javadoc::new(format!("Sets the {base} from the given elements"))
        .param(base, format!("the new {base}"))
        .returns("this builder for chaining")
        .throws_illegal_argument(self.null_condition())
        .lines(),
    );
    w.line(format!("public {BUILDER_CLASS_NAME} {accessor}({element}... {base}) {{"));
    w.line(format!("return {accessor}({copy});"));
    w.line("}");
    Ok(())
  }

  fn emit_added(&self, w: &mut SourceWriter, registry: &mut SignatureRegistry) -> Result<(), GenerateError> {
    let Self {
      field,
      base,
      cap,
      accessor,
      ..
    } = self;
    registry.claim(&field.name, format!("{accessor}Added({})", field.declared_type))?;

    w.blank();
    w.extend(
      Javadoc::new(format!("Adds the given elements to the {base}"))
        .param(base, "the elements to add")
        .returns("this builder for chaining")
        .throws_illegal_argument(self.null_condition())
        .lines(),
    );
    w.line(format!(
      "public {BUILDER_CLASS_NAME} {accessor}Added({} {base}) {{",
      field.declared_type
    ));
    w.line(format!("init{cap}();"));
    w.line(format!("this.{}.addAll(check{cap}({base}));", field.name));
    w.line("return this;");
    w.line("}");
    Ok(())
  }

  fn emit_vararg_added(&self, w: &mut SourceWriter, registry: &mut SignatureRegistry) -> Result<(), GenerateError> {
    let Self {
      field,
      element,
      base,
      cap,
      accessor,
      ..
    } = self;
    registry.claim(&field.name, format!("{accessor}Added({element}...)"))?;

    let copy = self.vararg_copy(&format!("check{cap}({base})"));
    w.blank();
    w.extend(
      Javadoc::new(format!("Adds the given elements to the {base}"))
        .param(base, "the elements to add")
        .returns("this builder for chaining")
        .throws_illegal_argument(self.null_condition())
        .lines(),
    );
    w.line(format!("public {BUILDER_CLASS_NAME} {accessor}Added({element}... {base}) {{"));
    w.line(format!("return {accessor}Added({copy});"));
    w.line("}");
    Ok(())
  }

  fn emit_removed(&self, w: &mut SourceWriter, registry: &mut SignatureRegistry) -> Result<(), GenerateError> {
    let Self {
      field,
      base,
      cap,
      accessor,
      ..
    } = self;
    registry.claim(&field.name, format!("{accessor}Removed({})", field.declared_type))?;

    w.blank();
    w.extend(
      Javadoc::new(format!("Removes the given elements from the {base}"))
        .param(base, "the elements to remove")
        .returns("this builder for chaining")
        .throws_illegal_argument(self.null_condition())
        .lines(),
    );
    w.line(format!(
      "public {BUILDER_CLASS_NAME} {accessor}Removed({} {base}) {{",
      field.declared_type
    ));
    w.line(format!("init{cap}();"));
    w.line(format!("this.{}.removeAll(check{cap}({base}));", field.name));
    w.line("return this;");
    w.line("}");
    Ok(())
  }

  fn emit_vararg_removed(&self, w: &mut SourceWriter, registry: &mut SignatureRegistry) -> Result<(), GenerateError> {
    let Self {
      field,
      element,
      base,
      cap,
      accessor,
      ..
    } = self;
    registry.claim(&field.name, format!("{accessor}Removed({element}...)"))?;

    let copy = self.vararg_copy(&format!("check{cap}({base})"));
    w.blank();
    w.extend(
      Javadoc::new(format!("Removes the given elements from the {base}"))
        .param(base, "the elements to remove")
        .returns("this builder for chaining")
        .throws_illegal_argument(self.null_condition())
        .lines(),
    );
    w.line(format!("public {BUILDER_CLASS_NAME} {accessor}Removed({element}... {base}) {{"));
    w.line(format!("return {accessor}Removed({copy});"));
    w.line("}");
    Ok(())
  }

  /// Lazy storage init backing the `Added`/`Removed` mutators. No-op when
  /// storage is already present.
  fn emit_init_helper(&self, w: &mut SourceWriter, registry: &mut SignatureRegistry) -> Result<(), GenerateError> {
    let Self { field, element, cap, .. } = self;
    registry.claim(&field.name, format!("init{cap}()"))?;

    w.blank();
    w.line(format!("private void init{cap}() {{"));
    w.line(format!("if (this.{} == null) {{", field.name));
    w.line(format!("this.{} = new TreeSet<{element}>();", field.name));
    w.line("}");
    w.line("}");
    Ok(())
  }

  /// Canonical storage is a comparison-ordered, deduplicated set; caller
  /// insertion order is not preserved.
  fn emit_copy_helper(&self, w: &mut SourceWriter, registry: &mut SignatureRegistry) -> Result<(), GenerateError> {
    let Self {
      field,
      element,
      base,
      cap,
      ..
    } = self;
    registry.claim(&field.name, format!("new{cap}(Collection<{element}>)"))?;

    w.blank();
    w.line(format!(
      "private {} new{cap}(Collection<{element}> {base}) {{",
      field.declared_type
    ));
    w.line(format!("return new TreeSet<{element}>({base});"));
    w.line("}");
    Ok(())
  }

  fn emit_validator(&self, w: &mut SourceWriter, registry: &mut SignatureRegistry) -> Result<(), GenerateError> {
    let Self {
      field,
      element,
      base,
      cap,
      ..
    } = self;
    registry.claim(&field.name, format!("check{cap}({})", field.declared_type))?;

    w.blank();
    w.line(format!("private {0} check{cap}({0} {base}) {{", field.declared_type));
    w.line(format!("if ({base} == null) {{"));
    w.line(format!("throw new IllegalArgumentException(\"{base} must not be null\");"));
    w.line("}");
    w.line(format!("for ({element} element : {base}) {{"));
    w.line("if (element == null) {");
    w.line(format!(
      "throw new IllegalArgumentException(\"{base} must not contain null elements\");"
    ));
    w.line("}");
    w.line("}");
    w.line(format!("return {base};"));
    w.line("}");
    Ok(())
  }

  /// Rejects a null array, then delegates element validation to the
  /// canonical validator.
  fn emit_vararg_validator(&self, w: &mut SourceWriter, registry: &mut SignatureRegistry) -> Result<(), GenerateError> {
    let Self {
      field,
      element,
      base,
      cap,
      ..
    } = self;
    registry.claim(&field.name, format!("check{cap}({element}...)"))?;

    let copy = self.vararg_copy(base);
    w.blank();
    w.line(format!("private {element}[] check{cap}({element}... {base}) {{"));
    w.line(format!("if ({base} == null) {{"));
    w.line(format!("throw new IllegalArgumentException(\"{base} must not be null\");"));
    w.line("}");
    w.line(format!("check{cap}({copy});"));
    w.line(format!("return {base};"));
    w.line("}");
    Ok(())
  }
}
