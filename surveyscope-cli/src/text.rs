//! Plain-text table formatting for the non-interactive commands.
//!
//! Column widths are computed with `unicode-width` so CJK survey titles
//! and option labels line up in fixed-width output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Maximum rendered width for any single cell.
const MAX_CELL_WIDTH: usize = 48;

/// Truncate a cell to `MAX_CELL_WIDTH` display columns, appending an
/// ellipsis when something was cut.
fn clip(cell: &str) -> String {
    if cell.width() <= MAX_CELL_WIDTH {
        return cell.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in cell.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > MAX_CELL_WIDTH - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Pad a cell to `width` display columns.
fn pad(cell: &str, width: usize) -> String {
    let current = cell.width();
    let mut out = cell.to_string();
    for _ in current..width {
        out.push(' ');
    }
    out
}

/// Render a header row plus data rows as an aligned plain-text table.
///
/// Empty input renders only the header and separator so callers can
/// append their own "no data" line.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    let clipped: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().take(columns).map(|c| clip(c)).collect())
        .collect();
    for row in &clipped {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i]))
        .collect();
    out.push_str(&header_line.join("  "));
    out.push('\n');
    let total_width: usize = widths.iter().sum::<usize>() + 2 * (columns.saturating_sub(1));
    out.push_str(&"-".repeat(total_width));
    out.push('\n');
    for row in &clipped {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths[i]))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Format an optional timestamp for table cells.
pub fn format_time(time: Option<chrono::NaiveDateTime>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_table_aligns_columns() {
        let out = format_table(
            &["ID", "TITLE"],
            &[
                vec!["1".into(), "Course feedback".into()],
                vec!["23".into(), "Dorms".into()],
            ],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID  TITLE");
        assert_eq!(lines[2], "1   Course feedback");
        assert_eq!(lines[3], "23  Dorms");
    }

    #[test]
    fn test_format_table_empty_rows() {
        let out = format_table(&["A", "B"], &[]);
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_clip_long_cells() {
        let long = "x".repeat(100);
        let clipped = clip(&long);
        assert!(clipped.width() <= MAX_CELL_WIDTH);
        assert!(clipped.ends_with('…'));
    }

    #[test]
    fn test_wide_characters_align() {
        // Double-width characters must count as two columns.
        let out = format_table(
            &["TITLE", "N"],
            &[
                vec!["问卷".into(), "1".into()],
                vec!["long title".into(), "2".into()],
            ],
        );
        let lines: Vec<&str> = out.lines().collect();
        // "问卷" display width = 4, padded to "long title" width = 10.
        assert_eq!(lines[2], "问卷        1");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(None), "-");
        let t = chrono::NaiveDateTime::parse_from_str("2026-03-05T14:00:00", "%Y-%m-%dT%H:%M:%S")
            .unwrap();
        assert_eq!(format_time(Some(t)), "2026-03-05 14:00");
    }
}
