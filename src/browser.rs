/// Country browser controller
///
/// `CountryBrowser` owns the loaded records, the display window and the
/// table body it renders into. Every handler takes `&mut self` and runs to
/// completion before the next one starts, so a response can never be applied
/// on top of a newer one.
use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::{debug, error};

use crate::config::Config;
use crate::data_provider::CountryDataProvider;
use crate::error::{ApiResult, RenderError};
use crate::query::{FilterInputs, Filters, ListQuery};
use crate::render::{self, TableBody};
use crate::types::Country;

/// Rows shown after an initial fetch or a search
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Rows added or removed by load-more / show-less
pub const DEFAULT_STEP: usize = 10;

/// Limit used by searches, large enough to return every match
pub const DEFAULT_SEARCH_LIMIT: usize = 1080;

/// Window sizes used by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserSettings {
    pub page_size: usize,
    pub step: usize,
    pub search_limit: usize,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            step: DEFAULT_STEP,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl From<&Config> for BrowserSettings {
    fn from(config: &Config) -> Self {
        Self {
            page_size: config.page_size,
            step: config.step,
            search_limit: config.search_limit,
        }
    }
}

/// Loaded records and the size of the display window
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowserState {
    pub records: Vec<Country>,
    /// Rows requested for display; rendering clips to `records.len()`
    pub display_count: usize,
    /// Filters of the last successful search, reused by load-more
    pub active_filters: Filters,
    pub last_update: Option<DateTime<Local>>,
}

impl BrowserState {
    pub fn visible_len(&self) -> usize {
        render::visible_len(&self.records, self.display_count)
    }
}

/// Buttons that page through the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    LoadMore,
    ShowLess,
}

impl Control {
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::LoadMore => "load-more",
            Self::ShowLess => "show-less",
        }
    }

    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "load-more" => Some(Self::LoadMore),
            "show-less" => Some(Self::ShowLess),
            _ => None,
        }
    }
}

/// User and lifecycle events the browser reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    /// The page is ready; load the first page
    Ready,
    /// A filter input changed; carries every filter input's current value
    Input(FilterInputs),
    Click(Control),
}

pub struct CountryBrowser<B: TableBody> {
    provider: Arc<dyn CountryDataProvider>,
    settings: BrowserSettings,
    state: BrowserState,
    table_body: Option<B>,
}

impl<B: TableBody> CountryBrowser<B> {
    pub fn new(
        provider: Arc<dyn CountryDataProvider>,
        settings: BrowserSettings,
        table_body: Option<B>,
    ) -> Self {
        let state = BrowserState {
            display_count: settings.page_size,
            ..Default::default()
        };
        Self {
            provider,
            settings,
            state,
            table_body,
        }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn settings(&self) -> &BrowserSettings {
        &self.settings
    }

    pub fn table_body(&self) -> Option<&B> {
        self.table_body.as_ref()
    }

    pub fn table_body_mut(&mut self) -> Option<&mut B> {
        self.table_body.as_mut()
    }

    /// Route an event to its handler
    pub async fn dispatch(&mut self, event: BrowserEvent) {
        debug!("BROWSER: dispatching {:?}", event);
        match event {
            BrowserEvent::Ready => self.fetch_initial().await,
            BrowserEvent::Input(inputs) => self.search(&inputs).await,
            BrowserEvent::Click(Control::LoadMore) => self.load_more().await,
            BrowserEvent::Click(Control::ShowLess) => self.show_less(),
        }
    }

    /// Load the first unfiltered page and show it
    ///
    /// On failure the error is logged and nothing changes.
    pub async fn fetch_initial(&mut self) {
        let query = ListQuery::page(0, self.settings.page_size);
        match self.request(&query).await {
            Ok(countries) => {
                self.state.records = countries;
                self.state.display_count = self.settings.page_size;
                self.state.active_filters = Filters::default();
                self.state.last_update = Some(Local::now());
                self.redraw();
            }
            Err(e) => error!("BROWSER: error fetching countries: {}", e),
        }
    }

    /// Fetch one page at `offset` and append it to the loaded records
    ///
    /// Returns how many records were appended, or `None` when the request
    /// failed; the failure is logged and appends nothing.
    pub async fn fetch_more(&mut self, offset: usize, filters: Filters) -> Option<usize> {
        let query = ListQuery::new(filters, offset, self.settings.page_size);
        match self.request(&query).await {
            Ok(countries) => {
                let appended = countries.len();
                self.state.records.extend(countries);
                self.state.last_update = Some(Local::now());
                Some(appended)
            }
            Err(e) => {
                error!("BROWSER: error fetching more countries: {}", e);
                None
            }
        }
    }

    /// Replace the records with every country matching the filter inputs
    pub async fn search(&mut self, inputs: &FilterInputs) {
        let filters = inputs.to_filters();
        let query = ListQuery::new(filters.clone(), 0, self.settings.search_limit);
        match self.request(&query).await {
            Ok(countries) => {
                debug!("BROWSER: search matched {} countries", countries.len());
                self.state.records = countries;
                self.state.display_count = self.settings.page_size;
                self.state.active_filters = filters;
                self.state.last_update = Some(Local::now());
                self.redraw();
            }
            Err(e) => error!("BROWSER: error searching countries: {}", e),
        }
    }

    /// Grow the display window, fetching the next page when it runs past the loaded records
    ///
    /// A short page means the server has nothing more, so the window is
    /// capped at the loaded records. A failed fetch leaves the window as is.
    pub async fn load_more(&mut self) {
        self.state.display_count += self.settings.step;
        if self.state.display_count > self.state.records.len() {
            let offset = self.state.records.len();
            let filters = self.state.active_filters.clone();
            if let Some(appended) = self.fetch_more(offset, filters).await {
                if appended < self.settings.page_size {
                    debug!("BROWSER: no more countries after {}", self.state.records.len());
                    self.state.display_count = self.state.display_count.min(self.state.records.len());
                }
            }
        }
        self.redraw();
    }

    /// Shrink the display window; never touches the network
    pub fn show_less(&mut self) {
        self.state.display_count = self.state.display_count.saturating_sub(self.settings.step);
        self.redraw();
    }

    /// Render the current window into the table body
    ///
    /// Failures are logged by the renderer and leave the body untouched.
    pub fn render(&mut self) -> Result<usize, RenderError> {
        render::render(
            self.table_body.as_mut(),
            &self.state.records,
            self.state.display_count,
        )
    }

    /// Render from a handler; the renderer has already logged any failure
    fn redraw(&mut self) {
        if let Err(e) = self.render() {
            debug!("BROWSER: table left unchanged ({})", e);
        }
    }

    async fn request(&self, query: &ListQuery) -> ApiResult<Vec<Country>> {
        debug!("BROWSER: requesting {}", query.to_query_string());
        self.provider.list_countries(query).await
    }
}
