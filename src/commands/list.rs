use anyhow::{Context, Result};

use crate::config::Config;
use crate::data_provider::CountryDataProvider;
use crate::formatting::{format_header, BoxChars, TextTableBody};
use crate::query::{FilterInputs, ListQuery};
use crate::render::{render, HtmlTableBody, TableBody};

/// Output format for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
}

/// Options for one `list` invocation
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub inputs: FilterInputs,
    pub start: usize,
    /// Defaults to the page size without filters and the search limit with filters
    pub limit: Option<usize>,
    pub format: OutputFormat,
}

/// Build the request a `list` invocation sends
pub fn build_query(options: &ListOptions, config: &Config) -> ListQuery {
    let filters = options.inputs.to_filters();
    let limit = options.limit.unwrap_or(if filters.is_empty() {
        config.page_size
    } else {
        config.search_limit
    });
    ListQuery::new(filters, options.start, limit)
}

/// Fetch one window of countries and format it for stdout
pub async fn format_list(
    client: &dyn CountryDataProvider,
    options: &ListOptions,
    config: &Config,
) -> Result<String> {
    let query = build_query(options, config);
    let countries = client
        .list_countries(&query)
        .await
        .with_context(|| format!("Failed to list countries ({})", query.to_query_string()))?;

    if countries.is_empty() {
        return Ok("No countries found.\n".to_string());
    }

    let output = match options.format {
        OutputFormat::Text => {
            let mut body = TextTableBody::new(BoxChars::unicode());
            let rows = fill(&mut body, &countries)?;
            let title = format!("Countries {}-{}", query.start + 1, query.start + rows);
            format!("{}\n{}", format_header(&title, true, &BoxChars::unicode()), body.to_text())
        }
        OutputFormat::Html => {
            let mut body = HtmlTableBody::new(config.flag_width);
            fill(&mut body, &countries)?;
            body.to_element()
        }
    };
    Ok(output)
}

pub async fn run(client: &dyn CountryDataProvider, options: ListOptions, config: &Config) -> Result<()> {
    let output = format_list(client, &options, config).await?;
    print!("{}", output);
    Ok(())
}

/// Render every fetched record; the window was already applied by the server
fn fill<B: TableBody>(body: &mut B, countries: &[crate::types::Country]) -> Result<usize> {
    render(Some(body), countries, countries.len()).context("Failed to render countries")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::MockClient;
    use crate::query::FilterField;

    fn options(format: OutputFormat) -> ListOptions {
        ListOptions {
            inputs: FilterInputs::new(),
            start: 0,
            limit: None,
            format,
        }
    }

    #[test]
    fn test_limit_defaults() {
        let config = Config::default();
        let mut opts = options(OutputFormat::Text);
        assert_eq!(build_query(&opts, &config).limit, 20);

        opts.inputs.set(FilterField::Currency, "euro");
        assert_eq!(build_query(&opts, &config).limit, 1080);

        opts.limit = Some(5);
        assert_eq!(build_query(&opts, &config).limit, 5);
    }

    #[tokio::test]
    async fn test_text_output() {
        let client = MockClient::new();
        let mut opts = options(OutputFormat::Text);
        opts.inputs.set(FilterField::Name, "fra");

        let output = format_list(&client, &opts, &Config::default()).await.unwrap();

        assert!(output.starts_with("Countries 1-3\n═════════════\n"));
        assert!(output.contains("French Polynesia"));
        assert_eq!(output.lines().filter(|l| l.contains("Euro (€)")).count(), 2);
    }

    #[tokio::test]
    async fn test_html_output() {
        let client = MockClient::new();
        let mut opts = options(OutputFormat::Html);
        opts.start = 40;

        let output = format_list(&client, &opts, &Config::default()).await.unwrap();

        assert!(output.starts_with("<tbody id=\"countryTableBody\">"));
        assert_eq!(output.matches("<tr>").count(), 20);
        assert!(output.contains("width=\"50\""));
    }

    #[tokio::test]
    async fn test_empty_result() {
        let client = MockClient::new();
        let mut opts = options(OutputFormat::Text);
        opts.inputs.set(FilterField::Capital, "atlantis");

        let output = format_list(&client, &opts, &Config::default()).await.unwrap();
        assert_eq!(output, "No countries found.\n");
    }

    #[tokio::test]
    async fn test_request_failure_has_context() {
        let client = MockClient::new();
        client.fail_next(1);

        let err = format_list(&client, &options(OutputFormat::Text), &Config::default())
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).starts_with("Failed to list countries"));
    }
}
