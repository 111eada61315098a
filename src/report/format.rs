//! Text helpers shared by the report renderers.

use colored::{Color, Colorize};

/// Display name for a service, e.g. `circle_ci` -> `Circle ci`.
pub fn service_title(name: &str) -> String {
    let mut words = name.split('_');
    let first = words.next().map(capitalize).unwrap_or_default();

    std::iter::once(first)
        .chain(words.map(String::from))
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title-cases every word, treating `_` as a word separator.
pub fn title_case(s: &str) -> String {
    s.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Color for a component or incident status, keyed on its first word.
pub fn status_color(status: &str) -> Color {
    let lower = status.to_lowercase();
    let first = lower.split([' ', '_']).next().unwrap_or_default();

    match first {
        "operational" | "resolved" | "completed" => Color::Green,
        "degraded" | "under" | "investigating" | "identified" | "monitoring" => Color::Yellow,
        "outage" | "critical" | "major" | "partial" => Color::Red,
        _ => Color::White,
    }
}

/// A table cell, optionally painted.
pub struct Cell {
    text: String,
    color: Option<Color>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn painted(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// Left-aligned columns separated by two spaces.
///
/// Widths are measured on the unpainted text so escape codes never skew them.
pub fn table(headers: &[&str], rows: &[Vec<Cell>], colorize: bool) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.text.chars().count());
            }
        }
    }

    let mut output = String::new();

    let header = join_padded(headers.iter().map(|h| (h.to_string(), None)), &widths, false);
    if colorize {
        output.push_str(&header.black().on_green().to_string());
    } else {
        output.push_str(&header);
    }
    output.push('\n');

    for row in rows {
        let cells = row.iter().map(|c| (c.text.clone(), c.color));
        output.push_str(&join_padded(cells, &widths, colorize));
        output.push('\n');
    }

    output
}

fn join_padded(
    cells: impl Iterator<Item = (String, Option<Color>)>,
    widths: &[usize],
    colorize: bool,
) -> String {
    let cells: Vec<_> = cells.collect();
    let last = cells.len().saturating_sub(1);
    let mut line = String::new();

    for (i, (text, color)) in cells.into_iter().enumerate() {
        let pad = widths
            .get(i)
            .copied()
            .unwrap_or_default()
            .saturating_sub(text.chars().count());

        match color {
            Some(color) if colorize => line.push_str(&text.color(color).to_string()),
            _ => line.push_str(&text),
        }
        if i != last {
            line.push_str(&" ".repeat(pad + 2));
        }
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_title_capitalizes_first_word_only() {
        assert_eq!(service_title("github"), "Github");
        assert_eq!(service_title("circle_ci"), "Circle ci");
        assert_eq!(service_title("status_page"), "Status page");
        assert_eq!(service_title(""), "");
    }

    #[test]
    fn title_case_splits_underscores() {
        assert_eq!(title_case("degraded_performance"), "Degraded Performance");
        assert_eq!(title_case("under_maintenance"), "Under Maintenance");
        assert_eq!(title_case("resolved"), "Resolved");
    }

    #[test]
    fn status_colors() {
        assert_eq!(status_color("Operational"), Color::Green);
        assert_eq!(status_color("Degraded Performance"), Color::Yellow);
        assert_eq!(status_color("under_maintenance"), Color::Yellow);
        assert_eq!(status_color("Major Outage"), Color::Red);
        assert_eq!(status_color("Postmortem"), Color::White);
    }

    #[test]
    fn table_aligns_columns_on_plain_text() {
        let rows = vec![
            vec![Cell::plain("Git Operations"), Cell::painted("Operational", Color::Green)],
            vec![Cell::plain("API"), Cell::painted("Major Outage", Color::Red)],
        ];
        let output = table(&["COMPONENT NAME", "STATUS"], &rows, false);

        assert_eq!(
            output,
            "COMPONENT NAME  STATUS\n\
             Git Operations  Operational\n\
             API             Major Outage\n"
        );
    }
}
