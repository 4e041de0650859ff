/// Convert raw completion text into an ordered list of candidate strings.
///
/// Strict decoding first: if the text is a JSON array, its elements (string
/// form, trimmed, empties discarded) are taken in order and truncated to
/// `expected`. Otherwise line-oriented heuristics strip numbered and
/// bulleted markers. When extraction still comes up short, the trimmed raw
/// text itself is appended once as a last candidate so the human can pick
/// it up unchanged. Malformed input never errors.
pub fn parse_options(raw: &str, expected: usize) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut options = match json_array_items(trimmed) {
        Some(items) => items,
        None => line_items(trimmed),
    };
    options.truncate(expected);

    if options.len() < expected && !options.iter().any(|o| o == trimmed) {
        options.push(trimmed.to_string());
    }
    options
}

fn json_array_items(text: &str) -> Option<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s.trim().to_string(),
                other => other.to_string().trim().to_string(),
            })
            .filter(|s| !s.is_empty())
            .collect(),
    )
}

fn line_items(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let line = strip_numeric_marker(line);
        let line = if line.starts_with('-') {
            line.trim_start_matches(|c: char| c == '-' || c == ' ')
        } else {
            line
        };
        if !line.is_empty() {
            out.push(line.to_string());
        }
    }
    out
}

// A marker counts as numeric when the line opens with a digit and a "." or
// ")" occurs within the first three characters ("1. x", "10) x", "1.x").
fn strip_numeric_marker(line: &str) -> &str {
    let opens_with_digit = line.chars().next().is_some_and(|c| c.is_ascii_digit());
    if !opens_with_digit {
        return line;
    }
    let head: String = line.chars().take(3).collect();
    if !head.contains('.') && !head.contains(')') {
        return line;
    }
    match line.split_once(' ') {
        Some((_, rest)) if !rest.trim().is_empty() => rest.trim(),
        _ => line.trim_start_matches(|c: char| {
            c.is_ascii_digit() || c == '.' || c == ')' || c == ' '
        }),
    }
}
