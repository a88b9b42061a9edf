use scan_core::Decision;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

impl TableOptions {
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            max_width: None,
            color: false,
        }
    }
}

/// Minimum column width before truncation kicks in.
const MIN_COLUMN: usize = 6;

/// Render an aligned table with an optional title line.
#[must_use]
pub fn render_table(
    title: Option<&str>,
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_COLUMN)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 3);
    if let Some(title) = title {
        lines.push(title.to_string());
    }
    lines.push(header_line);
    lines.push(divider);

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                let text = truncate(cell, *width);
                let numeric = looks_numeric(&text);
                let padded = pad(&text, *width, numeric);
                if options.color {
                    colorize(&text, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Render ordered `field: value` pairs as a two-column table.
#[must_use]
pub fn render_fields(title: Option<&str>, fields: &[(&str, String)], options: TableOptions) -> String {
    let rows = fields
        .iter()
        .map(|(field, value)| vec![(*field).to_string(), value.clone()])
        .collect::<Vec<_>>();
    render_table(title, &["field", "value"], &rows, options)
}

fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        // Narrow the widest column that is still above its floor.
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Wrap a cell naming a decision in that decision's ANSI color.
fn colorize(text: &str, padded: String) -> String {
    let decision = Decision::ALL.into_iter().find(|decision| {
        text.eq_ignore_ascii_case(decision.as_str()) || text == decision.label()
    });
    let code = match decision {
        Some(Decision::Healthy) => "32",
        Some(Decision::Sick) => "31",
        None => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["1".into(), "healthy".into(), "Sarah Johnson".into()],
            vec!["2".into(), "sick".into(), "Michael Chen".into()],
        ]
    }

    #[test]
    fn header_and_divider_align() {
        let table = render_table(None, &["scan", "decision", "patient"], &rows(), TableOptions::plain());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("scan"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }

    #[test]
    fn title_is_first_line() {
        let table = render_table(Some("Progress"), &["metric"], &[], TableOptions::plain());
        assert_eq!(table.lines().next(), Some("Progress"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let options = TableOptions {
            max_width: Some(30),
            color: false,
        };
        let table = render_table(None, &["scan", "decision", "patient"], &rows(), options);
        assert!(table.lines().all(|line| line.chars().count() <= 30));
        assert!(table.contains('…'));
    }

    #[test]
    fn decisions_are_colored_when_enabled() {
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_table(None, &["scan", "decision", "patient"], &rows(), options);
        assert!(table.contains("\u{1b}[32mhealthy"));
        assert!(table.contains("\u{1b}[31msick"));
    }

    #[test]
    fn decision_labels_are_colored() {
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let rows = vec![
            vec!["Emma Davis".into(), "Healthy".into()],
            vec!["Michael Chen".into(), "Sick".into()],
            vec!["Robert Wilson".into(), "pending".into()],
        ];
        let table = render_table(None, &["patient", "decision"], &rows, options);
        assert!(table.contains("\u{1b}[32mHealthy"));
        assert!(table.contains("\u{1b}[31mSick"));
        assert!(!table.contains("\u{1b}[33m"));
    }

    #[test]
    fn fields_keep_given_order() {
        let table = render_fields(
            None,
            &[("Patient", "Emma Davis".into()), ("Age", "38".into())],
            TableOptions::plain(),
        );
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].starts_with("Patient"));
        assert!(lines[3].starts_with("Age"));
    }
}
