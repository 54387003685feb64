/// Plain-text table output for the CLI
use unicode_width::UnicodeWidthStr;

use crate::render::{TableBody, TableRow, COLUMN_HEADERS};

/// Spacing between columns
const COLUMN_SPACING: usize = 2;

/// Columns shown in text output; the flag column is an image URL and is left out
const TEXT_COLUMNS: [usize; 6] = [0, 2, 3, 4, 5, 6];

/// Line-drawing characters for headers and separators
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
        }
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `box_chars` - Characters to draw the underline with
pub fn format_header(text: &str, double_line: bool, box_chars: &BoxChars) -> String {
    let separator_char = if double_line {
        &box_chars.double_horizontal
    } else {
        &box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Table body that lays rows out as aligned plain text
#[derive(Debug, Clone)]
pub struct TextTableBody {
    rows: Vec<TableRow>,
    box_chars: BoxChars,
}

impl TextTableBody {
    pub fn new(box_chars: BoxChars) -> Self {
        Self {
            rows: Vec::new(),
            box_chars,
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Render the header, a separator and every row
    pub fn to_text(&self) -> String {
        let cells: Vec<[String; 7]> = self.rows.iter().map(TableRow::cells).collect();

        let widths: Vec<usize> = TEXT_COLUMNS
            .iter()
            .map(|&col| {
                cells
                    .iter()
                    .map(|row| row[col].width())
                    .chain(std::iter::once(COLUMN_HEADERS[col].width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut output = String::new();
        let headers: Vec<&str> = TEXT_COLUMNS.iter().map(|&col| COLUMN_HEADERS[col]).collect();
        output.push_str(&format_line(&headers, &widths));

        let total_width = widths.iter().sum::<usize>() + COLUMN_SPACING * (widths.len() - 1);
        output.push_str(&self.box_chars.horizontal.repeat(total_width));
        output.push('\n');

        for row in &cells {
            let values: Vec<&str> = TEXT_COLUMNS.iter().map(|&col| row[col].as_str()).collect();
            output.push_str(&format_line(&values, &widths));
        }

        output
    }
}

impl TableBody for TextTableBody {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn push_row(&mut self, row: &TableRow) {
        self.rows.push(row.clone());
    }
}

/// Pad each value to its column width by display width, so accented and
/// wide characters stay aligned; the index column is right-aligned
fn format_line(values: &[&str], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, (value, width)) in values.iter().zip(widths).enumerate() {
        let padding = " ".repeat(width.saturating_sub(value.width()));
        if i == 0 {
            line.push_str(&padding);
            line.push_str(value);
        } else {
            line.push_str(&" ".repeat(COLUMN_SPACING));
            line.push_str(value);
            if i + 1 < values.len() {
                line.push_str(&padding);
            }
        }
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_test_country;
    use crate::render::render;

    #[test]
    fn test_format_header_unicode() {
        let result = format_header("Countries", true, &BoxChars::unicode());
        assert_eq!(result, "Countries\n═════════\n");
    }

    #[test]
    fn test_format_header_ascii() {
        let result = format_header("Countries", false, &BoxChars::ascii());
        assert_eq!(result, "Countries\n---------\n");
    }

    #[test]
    fn test_text_table_layout() {
        let records = vec![
            create_test_country("Chile", "CL", "Santiago", "Chilean peso", Some("$"), "Spanish"),
            create_test_country("Iceland", "IS", "Reykjavík", "Icelandic króna", Some("kr"), "Icelandic"),
        ];
        let mut body = TextTableBody::new(BoxChars::ascii());
        render(Some(&mut body), &records, 20).unwrap();

        let expected = "\
#  Name     Code  Capital    Currency              Language
------------------------------------------------------------
1  Chile    CL    Santiago   Chilean peso ($)      Spanish
2  Iceland  IS    Reykjavík  Icelandic króna (kr)  Icelandic
";
        assert_eq!(body.to_text(), expected);
    }

    #[test]
    fn test_clear_drops_rows() {
        let records = vec![create_test_country("Chile", "CL", "Santiago", "Chilean peso", Some("$"), "Spanish")];
        let mut body = TextTableBody::new(BoxChars::unicode());
        render(Some(&mut body), &records, 20).unwrap();
        body.clear();
        assert!(body.rows().is_empty());
    }
}
