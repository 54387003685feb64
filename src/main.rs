use clap::{Parser, Subcommand, ValueEnum};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use countries::client::Client;
use countries::commands::list::{self, ListOptions, OutputFormat};
use countries::config::{self, Config};
use countries::data_provider::CountryDataProvider;
use countries::query::{FilterField, FilterInputs};
use countries::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "countries")]
#[command(about = "Browse and filter country records", long_about = "Browse and filter country records from a REST listing endpoint\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Country listing endpoint (overrides the config file)
    #[arg(short = 'e', long, global = true)]
    endpoint: Option<String>,

    /// Serve fixture data instead of calling the endpoint
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Aligned plain-text table
    Text,
    /// HTML table body
    Html,
}

impl Format {
    fn to_output_format(self) -> OutputFormat {
        match self {
            Format::Text => OutputFormat::Text,
            Format::Html => OutputFormat::Html,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List countries, optionally filtered by substring
    List {
        /// Filter on country name
        #[arg(long)]
        name: Option<String>,

        /// Filter on country code
        #[arg(long)]
        code: Option<String>,

        /// Filter on capital
        #[arg(long)]
        capital: Option<String>,

        /// Filter on currency name
        #[arg(long)]
        currency: Option<String>,

        /// Filter on language name
        #[arg(long)]
        language: Option<String>,

        /// Offset of the first record
        #[arg(short, long, default_value_t = 0)]
        start: usize,

        /// Number of records (default: page size, or search limit when filtering)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },
    /// Display current configuration
    Config,
}

fn create_provider(cli: &Cli, config: &Config) -> Arc<dyn CountryDataProvider> {
    #[cfg(feature = "development")]
    if cli.mock {
        return Arc::new(countries::dev::mock_client::MockClient::new());
    }

    let endpoint = cli.endpoint.as_deref().unwrap_or(&config.endpoint);
    match Client::new(endpoint) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            let error_msg = format!("Failed to create country client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("endpoint: {}", cfg.endpoint);
    println!("page_size: {}", cfg.page_size);
    println!("step: {}", cfg.step);
    println!("search_limit: {}", cfg.search_limit);
    println!("flag_width: {}", cfg.flag_width);
    println!("time_format: {}", cfg.time_format);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.theme.unfocused_selection_fg(),
        if cfg.theme.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

#[allow(clippy::too_many_arguments)]
fn list_options(
    name: Option<String>,
    code: Option<String>,
    capital: Option<String>,
    currency: Option<String>,
    language: Option<String>,
    start: usize,
    limit: Option<usize>,
    format: Format,
) -> ListOptions {
    let mut inputs = FilterInputs::new();
    let values = [
        (FilterField::Name, name),
        (FilterField::Code, code),
        (FilterField::Capital, capital),
        (FilterField::Currency, currency),
        (FilterField::Language, language),
    ];
    for (field, value) in values {
        if let Some(value) = value {
            inputs.set(field, value);
        }
    }

    ListOptions {
        inputs,
        start,
        limit,
        format: format.to_output_format(),
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Handle Config command separately (doesn't need a client)
    if let Some(Commands::Config) = cli.command {
        handle_config_command(&config);
        return;
    }

    let provider = create_provider(&cli, &config);

    // If no subcommand, run TUI
    let Some(command) = cli.command else {
        if let Err(e) = tui::run(provider, config).await {
            eprintln!("Error: {}", e);
            tracing::error!("TUI failed: {}", e);
            std::process::exit(1);
        }
        return;
    };

    let result = match command {
        Commands::Config => unreachable!("Config command should be handled before creating a client"),
        Commands::List { name, code, capital, currency, language, start, limit, format } => {
            let options = list_options(name, code, capital, currency, language, start, limit, format);
            list::run(provider.as_ref(), options, &config).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
