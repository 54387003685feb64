/// Terminal layout: filter inputs on top, the country table, a status line
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::state::AppState;
use super::table_body::TuiTableBody;
use crate::browser::CountryBrowser;
use crate::config::Config;
use crate::query::FilterField;
use crate::render::COLUMN_HEADERS;

/// Height of the filter input row, borders included
const FILTER_BAR_HEIGHT: u16 = 3;

/// Key help shown at the end of the status line
const KEY_HELP: &str = "Tab: next field  PgDn: load more  PgUp: show less  Esc: quit";

const NO_MATCHES: &str = "No countries match the filters";

/// Columns of `TableRow::cells` shown in the terminal (the flag URL is skipped)
const TUI_COLUMNS: [usize; 6] = [0, 2, 3, 4, 5, 6];

pub fn draw(frame: &mut Frame, state: &AppState, browser: &CountryBrowser<TuiTableBody>, config: &Config) {
    let [filters_area, table_area, status_area] = Layout::vertical([
        Constraint::Length(FILTER_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_filters(frame, filters_area, state, config);
    draw_table(frame, table_area, state, browser, config);
    frame.render_widget(Paragraph::new(status_line(browser, config)), status_area);
}

fn draw_filters(frame: &mut Frame, area: Rect, state: &AppState, config: &Config) {
    let fields = FilterField::all();
    let areas = Layout::horizontal(fields.iter().map(|_| Constraint::Ratio(1, fields.len() as u32)))
        .split(area);

    for (field, field_area) in fields.iter().zip(areas.iter()) {
        let focused = *field == state.focused;
        let border_style = if focused {
            Style::default().fg(config.theme.selection_fg)
        } else {
            Style::default()
        };
        let block = Block::bordered()
            .title(format!(" {} ", field.label()))
            .border_style(border_style);
        let value = state.inputs.get(*field);
        frame.render_widget(Paragraph::new(value).block(block), *field_area);

        if focused && field_area.width > 2 {
            frame.set_cursor_position(Position::new(cursor_x(*field_area, value), field_area.y + 1));
        }
    }
}

/// Cursor column after `value` inside a bordered input, kept on the last inner column
fn cursor_x(area: Rect, value: &str) -> u16 {
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    let offset = u16::try_from(value.width()).unwrap_or(u16::MAX);
    area.x.saturating_add(1).saturating_add(offset).min(max_x)
}

fn draw_table(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    browser: &CountryBrowser<TuiTableBody>,
    config: &Config,
) {
    let body_rows = browser.table_body().map(|body| body.rows()).unwrap_or(&[]);

    let header = Row::new(TUI_COLUMNS.iter().map(|&col| Cell::from(COLUMN_HEADERS[col])))
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = body_rows.iter().map(|row| {
        let cells = row.cells();
        Row::new(TUI_COLUMNS.iter().map(|&col| Cell::from(cells[col].clone())))
    });

    let widths = [
        Constraint::Length(4),
        Constraint::Fill(3),
        Constraint::Length(4),
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Fill(2),
    ];

    // Keyboard focus stays in the filter bar, so the table selection is unfocused
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::bordered().title(" Countries "))
        .row_highlight_style(
            Style::default()
                .fg(config.theme.unfocused_selection_fg())
                .add_modifier(Modifier::BOLD),
        );

    let selected = if body_rows.is_empty() {
        None
    } else {
        Some(state.selected.min(body_rows.len() - 1))
    };
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Row counts, last update time and key help
///
/// After a search with no matches the table keeps its previous rows, so the
/// counts are replaced by a note.
pub fn status_line(browser: &CountryBrowser<TuiTableBody>, config: &Config) -> Line<'static> {
    let state = browser.state();
    let shown = browser.table_body().map(|body| body.len()).unwrap_or(0);
    let counts = match state.last_update {
        Some(_) if state.records.is_empty() => NO_MATCHES.to_string(),
        _ => format!("Showing {} of {} loaded", shown, state.records.len()),
    };
    let updated = state
        .last_update
        .map(|t| format!("Updated {}", t.format(&config.time_format)))
        .unwrap_or_else(|| "Not loaded".to_string());

    Line::from(format!(" {} | {} | {}", counts, updated, KEY_HELP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::BrowserSettings;
    use crate::dev::mock_client::MockClient;
    use crate::tui::testing::buffer_lines;
    use ratatui::{backend::TestBackend, style::Color, Terminal};
    use std::sync::Arc;

    async fn loaded_browser() -> CountryBrowser<TuiTableBody> {
        let mut browser = CountryBrowser::new(
            Arc::new(MockClient::new()),
            BrowserSettings::default(),
            Some(TuiTableBody::default()),
        );
        browser.fetch_initial().await;
        browser
    }

    fn render_terminal(state: &AppState, browser: &CountryBrowser<TuiTableBody>) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal
            .draw(|frame| draw(frame, state, browser, &Config::default()))
            .unwrap();
        terminal
    }

    fn render_to_lines(state: &AppState, browser: &CountryBrowser<TuiTableBody>) -> Vec<String> {
        buffer_lines(render_terminal(state, browser).backend().buffer())
    }

    #[tokio::test]
    async fn test_draw_shows_filters_and_rows() {
        let browser = loaded_browser().await;
        let mut state = AppState::default();
        state.inputs.set(FilterField::Name, "af");

        let lines = render_to_lines(&state, &browser);

        assert!(lines[0].contains(" Name "));
        assert!(lines[0].contains(" Language "));
        assert!(lines[1].contains("af"));
        assert!(lines.iter().any(|l| l.contains("Afghanistan") && l.contains("Kabul")));
        assert!(lines.iter().any(|l| l.contains("Currency") && l.contains("Capital")));
    }

    #[tokio::test]
    async fn test_status_line_counts() {
        let mut browser = loaded_browser().await;
        browser.show_less();

        let line = status_line(&browser, &Config::default()).to_string();
        assert!(line.starts_with(" Showing 10 of 20 loaded | Updated "));
        assert!(line.ends_with(KEY_HELP));
    }

    #[test]
    fn test_status_line_before_load() {
        let browser: CountryBrowser<TuiTableBody> = CountryBrowser::new(
            Arc::new(MockClient::new()),
            BrowserSettings::default(),
            Some(TuiTableBody::default()),
        );
        let line = status_line(&browser, &Config::default()).to_string();
        assert!(line.contains("Showing 0 of 0 loaded | Not loaded"));
    }

    #[tokio::test]
    async fn test_selected_row_uses_unfocused_color() {
        let browser = loaded_browser().await;
        let state = AppState::default();

        let terminal = render_terminal(&state, &browser);
        let buffer = terminal.backend().buffer();

        // Filter bar takes rows 0-2, the table border row 3 and its header row 4
        let selected = &buffer[(1, 5)];
        let unselected = &buffer[(1, 6)];
        assert_eq!(selected.fg, Config::default().theme.unfocused_selection_fg());
        assert_eq!(selected.fg, Color::Rgb(127, 82, 0));
        assert_eq!(unselected.fg, Color::Reset);
    }

    #[tokio::test]
    async fn test_status_line_after_search_without_matches() {
        let mut browser = loaded_browser().await;
        let mut inputs = crate::query::FilterInputs::new();
        inputs.set(FilterField::Name, "zzz");
        browser.search(&inputs).await;

        let line = status_line(&browser, &Config::default()).to_string();
        assert!(line.starts_with(" No countries match the filters | Updated "));
        assert!(!line.contains("Showing"));
    }

    #[test]
    fn test_cursor_follows_value() {
        let area = Rect::new(10, 0, 20, 3);
        assert_eq!(cursor_x(area, ""), 11);
        assert_eq!(cursor_x(area, "ab"), 13);
        assert_eq!(cursor_x(area, "Reykjavík"), 20);
    }

    #[test]
    fn test_cursor_clamps_long_values() {
        let area = Rect::new(10, 0, 20, 3);
        assert_eq!(cursor_x(area, &"x".repeat(70_000)), 28);

        let far_right = Rect::new(u16::MAX - 5, 0, 5, 3);
        assert_eq!(cursor_x(far_right, &"x".repeat(100)), u16::MAX - 2);
    }
}
