//! cardfold - Entry Point

use cardfold::config::CliOverrides;
use cardfold::model::{InputError, Page};
use cardfold::pack::{chunk_lines, pack_document};
use cardfold::state::NavSession;
use cardfold::view::ColorConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// cardfold - size-bounded pagination with a TUI pager
#[derive(Parser, Debug)]
#[command(name = "cardfold")]
#[command(version)]
#[command(about = "Packs structured content into size-bounded pages and navigates them")]
pub struct Args {
    /// Path to a JSON document file (reads from stdin if not provided)
    pub document: Option<PathBuf>,

    /// Treat input as plain text lines and chunk them into pages
    #[arg(long)]
    pub chunk: bool,

    /// Maximum number of fields per page
    #[arg(long)]
    pub max_fields: Option<usize>,

    /// Maximum width of one field value, in characters
    #[arg(long)]
    pub field_limit: Option<usize>,

    /// Maximum width of one page, in characters
    #[arg(long)]
    pub page_limit: Option<usize>,

    /// Maximum width of one chunked page, in characters
    #[arg(long)]
    pub chunk_limit: Option<usize>,

    /// Seconds of inactivity before navigation expires
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            max_fields_per_page: self.max_fields,
            field_limit: self.field_limit,
            page_limit: self.page_limit,
            chunk_limit: self.chunk_limit,
            timeout_secs: self.timeout_secs,
        }
    }

    /// Title shown on every chunked page: the file name, or "stdin".
    fn source_title(&self) -> String {
        self.document
            .as_deref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| "stdin".to_string())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let color = ColorConfig::from_env_and_args(args.no_color);

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        // 1. Load config file (or None if missing)
        let config_file = cardfold::config::load_config_with_precedence(args.config.clone())?;

        // 2. Merge with defaults
        let merged = cardfold::config::merge_config(config_file);

        // 3. Apply environment variable overrides
        let with_env = cardfold::config::apply_env_overrides(merged);

        // 4. Apply CLI argument overrides
        cardfold::config::apply_cli_overrides(with_env, args.overrides())
    };

    // Initialize tracing with the configured log file path
    cardfold::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let pages = if args.chunk {
        let lines = cardfold::source::read_lines(args.document.as_deref())?;
        let title = args.source_title();
        chunk_lines(lines, config.chunk_limit)
            .into_iter()
            .map(|body| Page::text_page(title.clone(), body))
            .collect()
    } else {
        let document = cardfold::source::read_document(args.document.as_deref())?;
        let limits = config.pack_limits()?;
        pack_document(&document, &limits)?
    };

    info!(page_count = pages.len(), chunked = args.chunk, "Input paginated");

    let session = NavSession::new(pages).ok_or(InputError::EmptyInput)?;
    cardfold::view::run_with_session(session, config.session_timeout(), color)?;

    Ok(())
}
