use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable value in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Objects become a key/value table, except that every array-of-objects
/// field (a page's list) gets its own table underneath.
fn render_table(value: &Value) -> String {
    let width = table::terminal_width();
    match value {
        Value::Array(items) => table::render_rows(items, width),
        Value::Object(map) => {
            let mut sections = Vec::new();
            let mut scalars = Vec::new();
            for (key, field) in map {
                match field {
                    Value::Array(items) if items.iter().any(Value::is_object) => {
                        sections.push(format!("{key}:\n{}", table::render_rows(items, width)));
                    }
                    other => scalars.push(vec![key.clone(), table::cell(other)]),
                }
            }
            let mut out = Vec::with_capacity(sections.len() + 1);
            if !scalars.is_empty() {
                out.push(table::render(&["key", "value"], &scalars, width));
            }
            out.extend(sections);
            out.join("\n\n")
        }
        scalar => table::render(&["value"], &[vec![table::cell(scalar)]], width),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::{render, render_table};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        likes_count: u32,
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Example { id: "x", likes_count: 7 }, OutputFormat::Raw)
            .expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["likes_count"], 7);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn json_render_is_pretty() {
        let out = render(&Example { id: "x", likes_count: 7 }, OutputFormat::Json)
            .expect("json render should work");
        assert!(out.contains("\n  \"id\": \"x\""));
    }

    #[test]
    fn page_lists_get_their_own_table() {
        let view = json!({
            "total": 2,
            "posts": [
                { "id": "pst-1", "title": "Yellow leaves" },
                { "id": "pst-2", "title": "Seed prices" },
            ],
        });
        let out = render_table(&view);
        assert!(out.starts_with("key"));
        assert!(out.contains("posts:\n"));
        assert!(out.contains("Seed prices"));
        assert!(!out.lines().any(|line| line.starts_with("posts ")));
    }

    #[test]
    fn empty_list_is_marked() {
        assert_eq!(render_table(&json!([])), "(no rows)");
    }
}
