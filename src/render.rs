/// Table rendering
///
/// The renderer turns the visible prefix of the loaded records into
/// `TableRow`s and pushes them into a `TableBody`. Bodies decide how a row is
/// materialised: HTML markup for the `countryTableBody` element, a plain-text
/// table for the CLI, or widget rows for the terminal UI.
use tracing::{debug, error};

use crate::error::RenderError;
use crate::types::Country;

/// Id of the element rows are rendered into
pub const TABLE_BODY_ID: &str = "countryTableBody";

/// Default rendered width of flag images, in pixels
pub const DEFAULT_FLAG_WIDTH: u32 = 50;

/// Column headers, in row order
pub const COLUMN_HEADERS: [&str; 7] = ["#", "Flag", "Name", "Code", "Capital", "Currency", "Language"];

/// One rendered row of the country table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// 1-based position in the table
    pub index: usize,
    pub flag: String,
    pub name: String,
    pub code: String,
    pub capital: String,
    pub currency: String,
    pub language: String,
}

impl TableRow {
    pub fn from_country(index: usize, country: &Country) -> Self {
        Self {
            index,
            flag: country.flag.clone(),
            name: country.name.clone(),
            code: country.code.clone(),
            capital: country.capital.clone(),
            currency: country.currency.label(),
            language: country.language.name.clone(),
        }
    }

    /// Text cells in `COLUMN_HEADERS` order
    pub fn cells(&self) -> [String; 7] {
        [
            self.index.to_string(),
            self.flag.clone(),
            self.name.clone(),
            self.code.clone(),
            self.capital.clone(),
            self.currency.clone(),
            self.language.clone(),
        ]
    }
}

/// A render target that rows can be written into
pub trait TableBody {
    /// Remove every row currently shown
    fn clear(&mut self);

    /// Append one row after the existing ones
    fn push_row(&mut self, row: &TableRow);
}

/// Number of rows a render pass emits for the given state
pub fn visible_len(records: &[Country], display_count: usize) -> usize {
    display_count.min(records.len())
}

/// Replace the content of `target` with the first `display_count` records
///
/// A missing target or an empty record set is logged and leaves the target
/// untouched. Returns the number of rows written.
pub fn render<B: TableBody + ?Sized>(
    target: Option<&mut B>,
    records: &[Country],
    display_count: usize,
) -> Result<usize, RenderError> {
    let Some(target) = target else {
        error!("RENDER: table body '{}' not found", TABLE_BODY_ID);
        return Err(RenderError::MissingTarget(TABLE_BODY_ID));
    };
    if records.is_empty() {
        error!("RENDER: no country records to render");
        return Err(RenderError::NoRecords);
    }

    target.clear();
    let visible = visible_len(records, display_count);
    for (i, country) in records[..visible].iter().enumerate() {
        target.push_row(&TableRow::from_country(i + 1, country));
    }

    debug!("RENDER: {} of {} records (display_count={})", visible, records.len(), display_count);
    Ok(visible)
}

/// `<tbody>` content rendered as HTML markup
///
/// Every value is escaped before it is spliced into the markup, so record
/// content can never inject elements or attributes.
#[derive(Debug, Clone)]
pub struct HtmlTableBody {
    html: String,
    rows: usize,
    flag_width: u32,
}

impl Default for HtmlTableBody {
    fn default() -> Self {
        Self::new(DEFAULT_FLAG_WIDTH)
    }
}

impl HtmlTableBody {
    pub fn new(flag_width: u32) -> Self {
        Self {
            html: String::new(),
            rows: 0,
            flag_width,
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Wrap the rows in a complete `<tbody>` element
    pub fn to_element(&self) -> String {
        format!("<tbody id=\"{}\">\n{}</tbody>\n", TABLE_BODY_ID, self.html)
    }
}

impl TableBody for HtmlTableBody {
    fn clear(&mut self) {
        self.html.clear();
        self.rows = 0;
    }

    fn push_row(&mut self, row: &TableRow) {
        self.html.push_str(&format!(
            concat!(
                "<tr>",
                "<td>{}</td>",
                "<td><img src=\"{}\" width=\"{}\"></td>",
                "<td>{}</td>",
                "<td>{}</td>",
                "<td>{}</td>",
                "<td>{}</td>",
                "<td>{}</td>",
                "</tr>\n"
            ),
            row.index,
            html_escape(&row.flag),
            self.flag_width,
            html_escape(&row.name),
            html_escape(&row.code),
            html_escape(&row.capital),
            html_escape(&row.currency),
            html_escape(&row.language),
        ));
        self.rows += 1;
    }
}

/// Escape text for use in HTML content and double-quoted attributes
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
