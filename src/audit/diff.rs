//! Field-level change summaries for audit entries

use serde_json::Value;

const MAX_STRING_CHARS: usize = 40;

/// Describe what changed between two JSON snapshots
///
/// Nested objects are walked with dotted paths (`config.start_day`); arrays
/// are compared by length only. `None` when nothing differs.
pub fn summarize_changes(before: &Value, after: &Value) -> Option<String> {
    let mut changes = Vec::new();
    collect_changes(before, after, "", &mut changes);

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn collect_changes(before: &Value, after: &Value, path: &str, out: &mut Vec<String>) {
    if before == after {
        return;
    }

    match (before, after) {
        (Value::Object(old), Value::Object(new)) => {
            for (key, old_val) in old {
                let field = join_path(path, key);
                match new.get(key) {
                    Some(new_val) => collect_changes(old_val, new_val, &field, out),
                    None => out.push(format!("{}: {} -> (removed)", field, render(old_val))),
                }
            }
            for (key, new_val) in new {
                if !old.contains_key(key) {
                    out.push(format!("{}: (added) -> {}", join_path(path, key), render(new_val)));
                }
            }
        }
        _ => {
            let label = if path.is_empty() { "value" } else { path };
            out.push(format!("{}: {} -> {}", label, render(before), render(after)));
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > MAX_STRING_CHARS => {
            let head: String = s.chars().take(MAX_STRING_CHARS - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
        other => other.to_string(),
    }
}
