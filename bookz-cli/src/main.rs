//! Bookz CLI - Browse a book catalog from the terminal

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate a page size or page number (must be at least 1)
fn parse_positive(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("value must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "bookz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse one page of a catalog
    Browse {
        /// Catalog JSON file or http(s) URL
        source: String,

        /// Search text matched against title and author
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only show books in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Page to show
        #[arg(short, long, default_value = "1", value_parser = parse_positive)]
        page: usize,

        /// Books per page
        #[arg(long, default_value = "6", value_parser = parse_positive)]
        page_size: usize,

        /// Skip the warm-up progress bar
        #[arg(long)]
        no_warmup: bool,

        /// Read navigation commands from stdin after the first page
        #[arg(short, long)]
        interactive: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a single book
    Show {
        /// Catalog JSON file or http(s) URL
        source: String,

        /// Book identifier
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the category groups
    Categories {
        /// JSON file with the category list (defaults to the built-in list)
        #[arg(long)]
        file: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a catalog file
    Validate {
        /// Catalog JSON file or http(s) URL
        source: String,

        /// Category list the books must belong to
        #[arg(long)]
        categories: Option<String>,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Print the quiz application URL
    QuizUrl {
        /// Use the production base path
        #[arg(long)]
        production: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookz_cli=debug,bookz_core=debug"
    } else {
        "bookz_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Browse {
            source,
            query,
            category,
            page,
            page_size,
            no_warmup,
            interactive,
            json,
        } => {
            let options = commands::BrowseOptions {
                query,
                category,
                page,
                page_size,
                warmup: !no_warmup,
                interactive,
                json,
            };
            commands::browse(&source, options).await
        }

        Commands::Show { source, id, json } => commands::show(&source, &id, json).await,

        Commands::Categories { file, json } => commands::categories(file.as_deref(), json),

        Commands::Validate {
            source,
            categories,
            strict,
        } => commands::validate(&source, categories.as_deref(), strict).await,

        Commands::QuizUrl { production } => commands::quiz_url(production),
    }
}
