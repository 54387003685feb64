/// Query building for the country listing endpoint
///
/// Every request carries the same sort order plus an offset/limit window.
/// Searches add one substring filter per non-empty filter field.
use tracing::debug;

/// Class shared by every filter input on the page
pub const FILTER_INPUT_CLASS: &str = "form-control";

/// Filter input ids are the field name followed by this suffix (`nameInput`)
pub const FILTER_INPUT_SUFFIX: &str = "Input";

/// Records are always sorted on this field
pub const SORT_FIELD: &str = "name";

/// Records are always sorted in this order
pub const SORT_ORDER: &str = "asc";

/// The fixed set of text fields a user can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterField {
    Name,
    Code,
    Capital,
    Currency,
    Language,
}

impl FilterField {
    pub fn all() -> [Self; 5] {
        [
            Self::Name,
            Self::Code,
            Self::Capital,
            Self::Currency,
            Self::Language,
        ]
    }

    /// Field name as it appears in input ids
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Code => "code",
            Self::Capital => "capital",
            Self::Currency => "currency",
            Self::Language => "language",
        }
    }

    /// Human-readable label for input boxes and headers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Code => "Code",
            Self::Capital => "Capital",
            Self::Currency => "Currency",
            Self::Language => "Language",
        }
    }

    /// Query parameter used to filter on this field
    ///
    /// Currency only ever filters on the currency name. Matching on the
    /// symbol as well would need a second request or an OR-capable backend.
    pub fn query_key(&self) -> &'static str {
        match self {
            Self::Name => "name_like",
            Self::Code => "code_like",
            Self::Capital => "capital_like",
            Self::Currency => "currency.name_like",
            Self::Language => "language.name_like",
        }
    }

    /// Id of the input element bound to this field
    pub fn element_id(&self) -> String {
        format!("{}{}", self.name(), FILTER_INPUT_SUFFIX)
    }

    /// Resolve an input element id (`capitalInput`) to its field
    pub fn from_element_id(id: &str) -> Option<Self> {
        let name = id.strip_suffix(FILTER_INPUT_SUFFIX).unwrap_or(id);
        Self::all().into_iter().find(|field| field.name() == name)
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Code,
            Self::Code => Self::Capital,
            Self::Capital => Self::Currency,
            Self::Currency => Self::Language,
            Self::Language => Self::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Name => Self::Language,
            Self::Code => Self::Name,
            Self::Capital => Self::Code,
            Self::Currency => Self::Capital,
            Self::Language => Self::Currency,
        }
    }
}

/// Raw values of the filter inputs, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    values: [String; 5],
}

impl FilterInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect input values from `(element id, value)` pairs
    ///
    /// Ids that do not name a filter field are skipped.
    pub fn from_elements<'a, I>(elements: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut inputs = Self::new();
        for (id, value) in elements {
            match FilterField::from_element_id(id) {
                Some(field) => inputs.set(field, value),
                None => debug!("QUERY: ignoring unknown filter input '{}'", id),
            }
        }
        inputs
    }

    pub fn get(&self, field: FilterField) -> &str {
        &self.values[field as usize]
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        self.values[field as usize] = value.into();
    }

    pub fn push_char(&mut self, field: FilterField, c: char) {
        self.values[field as usize].push(c);
    }

    /// Remove the last character, returning whether anything changed
    pub fn pop_char(&mut self, field: FilterField) -> bool {
        self.values[field as usize].pop().is_some()
    }

    /// Normalise the raw values into the filter set sent to the server
    pub fn to_filters(&self) -> Filters {
        let mut filters = Filters::default();
        for field in FilterField::all() {
            let term = self.get(field).trim().to_lowercase();
            if !term.is_empty() {
                filters.terms.push((field, term));
            }
        }
        filters
    }
}

/// Normalised substring filters, at most one per field, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    terms: Vec<(FilterField, String)>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn term(&self, field: FilterField) -> Option<&str> {
        self.terms
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, term)| term.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterField, &str)> {
        self.terms.iter().map(|(field, term)| (*field, term.as_str()))
    }
}

/// One request against the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: Filters,
    pub start: usize,
    pub limit: usize,
}

impl ListQuery {
    pub fn new(filters: Filters, start: usize, limit: usize) -> Self {
        Self {
            filters,
            start,
            limit,
        }
    }

    /// Unfiltered page starting at `start`
    pub fn page(start: usize, limit: usize) -> Self {
        Self::new(Filters::default(), start, limit)
    }

    /// Query parameters in request order: filters, then sort, then window
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = self
            .filters
            .iter()
            .map(|(field, term)| (field.query_key(), term.to_string()))
            .collect();
        pairs.push(("_sort", SORT_FIELD.to_string()));
        pairs.push(("_order", SORT_ORDER.to_string()));
        pairs.push(("_start", self.start.to_string()));
        pairs.push(("_limit", self.limit.to_string()));
        pairs
    }

    /// Human-readable query string, used for logging and request recording
    ///
    /// Values are not percent-encoded; the HTTP client encodes them when the
    /// request is built.
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&")
    }
}
