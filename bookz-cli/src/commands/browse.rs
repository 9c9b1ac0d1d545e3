//! Browse command implementation

use super::FETCH_TIMEOUT;
use anyhow::{bail, Context, Result};
use bookz_core::load::PROGRESS_COMPLETE;
use bookz_core::{source_for, CatalogConfig, CatalogSession, CatalogView, ProgressSimulator};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Options for a browse run
pub struct BrowseOptions {
    pub query: String,
    pub category: Option<String>,
    pub page: usize,
    pub page_size: usize,
    pub warmup: bool,
    pub interactive: bool,
    pub json: bool,
}

/// A navigation command typed in interactive mode
#[derive(Debug, PartialEq, Eq)]
enum Nav {
    Next,
    Previous,
    Goto(usize),
    Query(String),
    Category(Option<String>),
    Quit,
}

fn parse_nav(line: &str) -> Option<Nav> {
    let line = line.trim();
    let (cmd, arg) = match line.split_once(' ') {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    };

    match cmd {
        "n" | "next" => Some(Nav::Next),
        "p" | "prev" => Some(Nav::Previous),
        "g" | "goto" => arg.parse().ok().map(Nav::Goto),
        "q" | "query" => Some(Nav::Query(arg.to_string())),
        "c" | "category" if arg.is_empty() => Some(Nav::Category(None)),
        "c" | "category" => Some(Nav::Category(Some(arg.to_string()))),
        "exit" | "quit" => Some(Nav::Quit),
        _ => None,
    }
}

/// Fetch a catalog and print one page of it
pub async fn browse(location: &str, options: BrowseOptions) -> Result<()> {
    let config = CatalogConfig::from_env().with_page_size(options.page_size);
    let mut session = CatalogSession::new(&config);

    let source = source_for(location, FETCH_TIMEOUT);
    let fetched = session.catalog_mut().fetch_from(source.as_ref()).await;
    if let Err(e) = fetched {
        if let Some(message) = session.error_message() {
            eprintln!("{}", message);
        }
        return Err(e).with_context(|| format!("Failed to load books from {}", location));
    }

    if options.warmup {
        warm_up(&mut session, config.simulator()).await?;
    } else {
        session.set_progress(PROGRESS_COMPLETE)?;
    }

    session.set_query(options.query);
    session.set_category(options.category);
    let landed = session.go_to_page(options.page);
    if landed != options.page {
        tracing::warn!("Page {} is out of range, showing page {}", options.page, landed);
    }

    print_view(session.view(), options.json)?;

    if options.interactive {
        run_interactive(&mut session, options.json).await?;
    }

    Ok(())
}

/// Drive the warm-up progress with a progress bar
async fn warm_up(session: &mut CatalogSession, simulator: ProgressSimulator) -> Result<()> {
    let pb = ProgressBar::new(u64::from(PROGRESS_COMPLETE));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos:>3}% {msg}")?
            .progress_chars("##-"),
    );
    pb.set_message("Loading covers");

    let mut handle = simulator.spawn();
    while let Some(progress) = handle.next().await {
        session.set_progress(progress)?;
        pb.set_position(u64::from(progress));
    }
    pb.finish_and_clear();

    if !session.load().is_complete() {
        bail!("Warm-up stopped at {}%", session.load().progress());
    }
    Ok(())
}

async fn run_interactive(session: &mut CatalogSession, json: bool) -> Result<()> {
    eprintln!("Commands: n, p, g <page>, q <text>, c [category], quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let nav = match parse_nav(&line) {
            Some(nav) => nav,
            None => {
                eprintln!("Unknown command: {}", line.trim());
                continue;
            }
        };

        let changed = match nav {
            Nav::Quit => break,
            Nav::Next => session.next_page(),
            Nav::Previous => session.previous_page(),
            Nav::Goto(page) => {
                let before = session.state().page();
                session.go_to_page(page) != before
            }
            Nav::Query(query) => session.set_query(query),
            Nav::Category(category) => session.set_category(category),
        };

        if changed {
            print_view(session.view(), json)?;
        } else {
            eprintln!("Nothing to do");
        }
    }

    Ok(())
}

fn print_view(view: &CatalogView, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    if let Some(message) = view.message {
        println!("{}", message);
        return Ok(());
    }

    println!(
        "Page {} / {} ({} books)",
        view.page, view.total_pages, view.total_matches
    );
    for book in &view.items {
        println!("  [{}] {} by {} ({})", book.id, book.title, book.author, book.category);
    }
    if view.show_pagination {
        let prev = if view.has_previous { "p: previous" } else { "" };
        let next = if view.has_next { "n: next" } else { "" };
        println!("{:<12}{}", prev, next);
    }

    Ok(())
}
