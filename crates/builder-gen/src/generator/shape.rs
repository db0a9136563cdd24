use std::sync::LazyLock;

use regex::Regex;

// Accepts an optional dotted qualifier (`java.util.List<...>`) and captures
// the outer collection name plus the full element-type text, so nested
// generics survive intact.
static COLLECTION_TYPE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^(?:[A-Za-z_$][A-Za-z0-9_$]*\.)*(Collection|List|Set)<(.+)>$").unwrap());

/// Outer spelling of a recognized collection type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub(crate) enum CollectionKind {
  Collection,
  List,
  Set,
}

/// Classification of a declared type, recomputed per field per generation.
/// Total and deterministic: anything the pattern does not match is scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CollectionShape {
  Scalar,
  Collection {
    kind: CollectionKind,
    element_type: String,
  },
}

impl CollectionShape {
  pub(crate) fn classify(declared_type: &str) -> Self {
    let Some(caps) = COLLECTION_TYPE_RE.captures(declared_type.trim()) else {
      return Self::Scalar;
    };

    let kind = match &caps[1] {
      "Collection" => CollectionKind::Collection,
      "List" => CollectionKind::List,
      "Set" => CollectionKind::Set,
      _ => unreachable!("regex alternation is exhaustive"),
    };

    Self::Collection {
      kind,
      element_type: caps[2].to_string(),
    }
  }
}
