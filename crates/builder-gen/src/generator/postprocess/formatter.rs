const INDENT: &str = "    ";

/// Best-effort brace-driven reindentation of Java source.
///
/// Returns `None` to decline when the brace structure does not balance;
/// the caller keeps the unformatted text in that case. Formatting never
/// changes anything but leading whitespace.
pub(crate) fn format_java(source: &str) -> Option<String> {
  let mut depth: i32 = 0;
  let mut out = String::with_capacity(source.len());

  for raw in source.lines() {
    let line = raw.trim();
    if line.is_empty() {
      out.push('\n');
      continue;
    }

    let opens = line.matches('{').count() as i32;
    let closes = line.matches('}').count() as i32;

    let mut current = depth;
    if line.starts_with('}') {
      current -= 1;
    }
    if current < 0 {
      return None;
    }

    for _ in 0..current {
      out.push_str(INDENT);
    }
    // Javadoc continuation lines align one space past the opening `/**`.
    if line.starts_with('*') {
      out.push(' ');
    }
    out.push_str(line);
    out.push('\n');

    depth += opens - closes;
    if depth < 0 {
      return None;
    }
  }

  (depth == 0).then_some(out)
}
