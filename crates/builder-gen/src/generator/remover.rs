use crate::generator::{
  codegen::BUILDER_CLASS_NAME,
  model::{ClassModel, SourceRange, TypeKind},
};

/// Deletion requests for artifacts left over from an earlier generation
/// run: at most one nested `Builder` class and at most one builder-typed
/// single-argument constructor. Finding neither is not an error; the class
/// may be in its first generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RemovalPlan {
  pub stale_builder_class: Option<SourceRange>,
  pub stale_builder_constructor: Option<SourceRange>,
}

impl RemovalPlan {
  /// Spans to delete, highest offset first so earlier deletions never
  /// shift later ones.
  pub(crate) fn ranges(&self) -> Vec<SourceRange> {
    let mut ranges: Vec<SourceRange> = self
      .stale_builder_class
      .into_iter()
      .chain(self.stale_builder_constructor)
      .collect();
    ranges.sort_by(|a, b| b.offset.cmp(&a.offset));
    ranges
  }

  pub(crate) fn total_length(&self) -> usize {
    self.ranges().iter().map(|range| range.length).sum()
  }
}

/// Two independent single-shot scans, each terminal after its first match:
/// a nested class literally named `Builder` (interfaces and the like do not
/// count), and a constructor taking exactly one `Builder` parameter.
pub(crate) fn plan_removals(class: &ClassModel) -> RemovalPlan {
  let stale_builder_class = class
    .nested_types
    .iter()
    .find(|nested| nested.name == BUILDER_CLASS_NAME && nested.kind == TypeKind::Class)
    .map(|nested| nested.range);

  let stale_builder_constructor = class
    .methods
    .iter()
    .find(|method| {
      method.constructor && method.parameter_types.len() == 1 && method.parameter_types[0] == BUILDER_CLASS_NAME
    })
    .map(|method| method.range);

  RemovalPlan {
    stale_builder_class,
    stale_builder_constructor,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::model::{FieldDescriptor, MethodModel, NestedTypeModel};

  fn class_with_members(nested: Vec<NestedTypeModel>, methods: Vec<MethodModel>) -> ClassModel {
    let mut class = ClassModel::new("Person", vec![FieldDescriptor::new("firstname", "String")]);
    class.nested_types = nested;
    class.methods = methods;
    class
  }

  #[test]
  fn test_first_generation_finds_nothing() {
    let plan = plan_removals(&class_with_members(vec![], vec![]));
    assert_eq!(plan, RemovalPlan::default());
    assert!(plan.ranges().is_empty());
  }

  #[test]
  fn test_finds_stale_builder_class_but_not_interface() {
    let nested = vec![
      NestedTypeModel {
        name: "Builder".to_string(),
        kind: TypeKind::Interface,
        range: SourceRange::new(10, 5),
      },
      NestedTypeModel {
        name: "Builder".to_string(),
        kind: TypeKind::Class,
        range: SourceRange::new(40, 100),
      },
      NestedTypeModel {
        name: "Builder".to_string(),
        kind: TypeKind::Class,
        range: SourceRange::new(200, 50),
      },
    ];
    let plan = plan_removals(&class_with_members(nested, vec![]));
    // First class match only; the scan stops there.
    assert_eq!(plan.stale_builder_class, Some(SourceRange::new(40, 100)));
    assert_eq!(plan.stale_builder_constructor, None);
  }

  #[test]
  fn test_finds_stale_builder_constructor() {
    let methods = vec![
      MethodModel {
        name: "Person".to_string(),
        constructor: true,
        parameter_types: vec!["String".to_string(), "String".to_string()],
        range: SourceRange::new(20, 30),
      },
      MethodModel {
        name: "Person".to_string(),
        constructor: true,
        parameter_types: vec!["Builder".to_string()],
        range: SourceRange::new(60, 25),
      },
      MethodModel {
        name: "of".to_string(),
        constructor: false,
        parameter_types: vec!["Builder".to_string()],
        range: SourceRange::new(90, 25),
      },
    ];
    let plan = plan_removals(&class_with_members(vec![], methods));
    assert_eq!(plan.stale_builder_constructor, Some(SourceRange::new(60, 25)));
    assert_eq!(plan.stale_builder_class, None);
  }

  #[test]
  fn test_ranges_ordered_highest_offset_first() {
    let plan = RemovalPlan {
      stale_builder_class: Some(SourceRange::new(40, 100)),
      stale_builder_constructor: Some(SourceRange::new(160, 25)),
    };
    assert_eq!(
      plan.ranges(),
      vec![SourceRange::new(160, 25), SourceRange::new(40, 100)]
    );
    assert_eq!(plan.total_length(), 125);
  }
}
