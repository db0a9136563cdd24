/// Derives the canonical base name for a raw field identifier.
///
/// The environment that owns the field metadata decides the naming
/// convention; the synthesizer only ever calls this trait.
pub(crate) trait NamingConvention {
  fn base_name(&self, field_name: &str) -> String;
}

/// Default Java instance-field convention.
///
/// # Rules:
/// 1. Leading and trailing underscores are stripped (`_firstName` -> `firstName`).
/// 2. A single Hungarian-style `m` or `s` prefix is stripped when followed
///    by an uppercase letter (`mFirstName` -> `FirstName`).
/// 3. The first character is lowercased (`FirstName` -> `firstName`).
/// 4. If stripping would leave nothing, the raw name is kept as-is.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct JavaFieldNaming;

impl NamingConvention for JavaFieldNaming {
  fn base_name(&self, field_name: &str) -> String {
    let stripped = field_name.trim_matches('_');
    if stripped.is_empty() {
      return field_name.to_string();
    }

    let mut chars = stripped.chars();
    let stripped = match (chars.next(), chars.clone().next()) {
      (Some('m' | 's'), Some(second)) if second.is_ascii_uppercase() => chars.as_str(),
      _ => stripped,
    };

    decapitalize(stripped)
  }
}

/// Uppercases only the first character, leaving the rest untouched.
pub(crate) fn capitalize(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
  }
}

fn decapitalize(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
  }
}

/// Accessor name for a derived base name: `with<Base>` when the prefix
/// option is set, the bare base name otherwise.
pub(crate) fn accessor_name(base_name: &str, use_with_prefix: bool) -> String {
  if use_with_prefix {
    format!("with{}", capitalize(base_name))
  } else {
    base_name.to_string()
  }
}
