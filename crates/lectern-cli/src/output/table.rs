const MIN_VALUE_WIDTH: usize = 8;

/// Terminal width from `COLUMNS`, ignored when implausibly small.
pub fn terminal_width() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40)
}

/// Render `key  value` rows under a header, truncating values to fit
/// `max_width` when given.
#[must_use]
pub fn render_key_value_table(rows: &[(String, String)], max_width: Option<usize>) -> String {
    if rows.is_empty() {
        return String::from("(empty)");
    }

    let key_width = rows
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0)
        .max("key".len());
    let value_width = max_width.map(|max| max.saturating_sub(key_width + 2).max(MIN_VALUE_WIDTH));

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("{:<key_width$}  value", "key"));
    lines.push("-".repeat(key_width + 2 + "value".len()));
    for (key, value) in rows {
        let value = match value_width {
            Some(width) => truncate_text(value, width),
            None => value.clone(),
        };
        lines.push(format!("{key:<key_width$}  {value}"));
    }
    lines.join("\n")
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<(String, String)> {
        vec![
            ("id".to_string(), "u1".to_string()),
            ("display_name".to_string(), "a much longer display name".to_string()),
        ]
    }

    #[test]
    fn keys_are_aligned() {
        let table = render_key_value_table(&rows(), None);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].find("u1"), lines[3].find("a much"));
    }

    #[test]
    fn long_values_are_truncated() {
        let table = render_key_value_table(&rows(), Some(30));
        let last = table.lines().last().unwrap();
        assert!(last.ends_with('…'));
        assert!(last.chars().count() <= 30);
    }

    #[test]
    fn empty_rows() {
        assert_eq!(render_key_value_table(&[], None), "(empty)");
    }
}
