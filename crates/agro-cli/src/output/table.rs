use serde_json::Value;

const MIN_COLUMN: usize = 6;

/// `COLUMNS` if set to something usable.
pub fn terminal_width() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40)
}

/// One line of text for a JSON value.
pub fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Table of an array: objects become rows keyed by the union of their
/// fields (first-seen order), anything else a single `value` column.
pub fn render_rows(items: &[Value], max_width: Option<usize>) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|v| vec![cell(v)]).collect::<Vec<_>>();
        return render(&["value"], &rows, max_width);
    }

    let mut headers: Vec<&str> = Vec::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|h| map.get(*h).map_or_else(|| String::from("-"), cell))
                .collect()
        })
        .collect::<Vec<Vec<String>>>();
    render(&headers, &rows, max_width)
}

/// Aligned plain-text table. Columns shrink (widest first) to fit
/// `max_width`; numbers are right-aligned.
pub fn render(headers: &[&str], rows: &[Vec<String>], max_width: Option<usize>) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN)
        })
        .collect::<Vec<_>>();
    if let Some(max_width) = max_width {
        shrink(&mut widths, max_width);
    }

    let line = |cells: &mut dyn Iterator<Item = String>| {
        cells
            .zip(&widths)
            .map(|(c, w)| pad(&clip(&c, *w), *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header = line(&mut headers.iter().map(|h| (*h).to_string()));
    let divider = "-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1));
    let mut out = vec![header, divider];
    for row in rows {
        out.push(line(&mut (0..widths.len()).map(|i| {
            row.get(i).cloned().unwrap_or_else(|| String::from("-"))
        })));
    }
    out.join("\n")
}

fn shrink(widths: &mut [usize], max_width: usize) {
    let gaps = 2 * widths.len().saturating_sub(1);
    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|w| **w > MIN_COLUMN)
            .max_by_key(|w| **w)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    let numeric = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-'));
    if numeric {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}
