use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use movie_search::error::AppError;
use movie_search::utils::{single_line, truncate_string};
use movie_search::{load_config, MovieRecord, MovieSearchClient, SearchError};

const POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Parser)]
#[command(name = "movie-search", about = "Search the iTunes movie catalogue")]
struct Cli {
    /// Also download artwork for every result and report its size
    #[arg(long)]
    artwork: bool,

    /// Keywords to search for; reads one search per line from stdin when empty
    #[arg(value_name = "KEYWORD")]
    keywords: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let running = Arc::new(AtomicBool::new(true));
    let searching = Arc::new(AtomicBool::new(false));
    let r = running.clone();
    let s = searching.clone();

    ctrlc::set_handler(move || {
        println!("Shutting down...");
        if exit_immediately(&r, &s) {
            std::process::exit(130);
        }
    })?;

    let config = load_config()?;
    log::debug!("config: {:?}", config);
    let client = MovieSearchClient::new(config)?;

    if !cli.keywords.is_empty() {
        searching.store(true, Ordering::SeqCst);
        run_search(&client, &cli.keywords.join(" "), cli.artwork, &running)?;
        return Ok(());
    }

    println!("Enter a movie keyword per line (Ctrl-C or Ctrl-D to quit):");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !running.load(Ordering::SeqCst) {
            break;
        }
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        searching.store(true, Ordering::SeqCst);
        let result = run_search(&client, &line, cli.artwork, &running);
        searching.store(false, Ordering::SeqCst);
        if let Err(e) = result {
            eprintln!("Search failed: {}", e);
        }
        io::stdout().flush()?;
    }

    Ok(())
}

/// Records the interrupt and reports whether the process must exit right away.
/// With no search in flight the main thread may be blocked reading stdin and
/// would never see the flag.
fn exit_immediately(running: &AtomicBool, searching: &AtomicBool) -> bool {
    running.store(false, Ordering::SeqCst);
    !searching.load(Ordering::SeqCst)
}

fn run_search(
    client: &MovieSearchClient,
    keyword: &str,
    with_artwork: bool,
    running: &AtomicBool,
) -> Result<(), SearchError> {
    let mut pending = client.search(keyword);

    let outcome = loop {
        pending = match pending.wait_timeout(POLL_INTERVAL) {
            Ok(outcome) => break outcome,
            Err(pending) => pending,
        };
        if !running.load(Ordering::SeqCst) {
            return Ok(());
        }
    };
    let records = outcome?;

    println!("{} result(s) for {:?}", records.len(), keyword);

    let artwork: Vec<_> = if with_artwork {
        records
            .iter()
            .map(|record| Some(client.fetch_artwork(&record.artwork_url)))
            .collect()
    } else {
        records.iter().map(|_| None).collect()
    };

    for (record, artwork) in records.iter().zip(artwork) {
        print_record(record);
        if let Some(pending) = artwork {
            match pending.wait().bytes() {
                Some(bytes) => println!("    artwork: {} bytes", bytes.len()),
                None => println!("    artwork: unavailable"),
            }
        }
        if !running.load(Ordering::SeqCst) {
            break;
        }
    }

    Ok(())
}

fn print_record(record: &MovieRecord) {
    println!(
        "  [{}] {} - {}",
        record.track_id,
        truncate_string(&record.track_name),
        truncate_string(&record.artist_name)
    );
    if let Some(collection_id) = record.collection_id {
        println!("    collection: {}", collection_id);
    }
    if let Some(description) = &record.long_description {
        println!("    {}", truncate_string(&single_line(description)));
    }
}
