//! Example demonstrating anagram puzzle editing from the command line.
//!
//! This example shows how to:
//! - Create a puzzle in an `AnagramApp` backed by a memory or JSON file store
//! - Set the pool, length, and locked letters
//! - Shuffle the remaining letters and print the slots
//!
//! # Usage
//!
//! ```sh
//! cargo run --example shuffle_pool -- --pool acgeh --lock 0=C --length 5
//! cargo run --example shuffle_pool -- --pool listen --lock 5=N
//! ```
//!
//! Reproduce a run with the seed printed by a previous one:
//!
//! ```sh
//! cargo run --example shuffle_pool -- --pool acgeh --seed <HEX> --shuffles 3
//! ```
//!
//! Keep puzzles between runs and reopen one by name:
//!
//! ```sh
//! cargo run --example shuffle_pool -- --data-dir ./anagrams --pool listen --name Daily
//! cargo run --example shuffle_pool -- --data-dir ./anagrams --name Daily
//! ```

use std::{path::PathBuf, process};

use anagram_app::{
    Action, ActionRequestQueue, AnagramApp, EditorSettings, JsonFileStore, MemoryStore,
    QueryParamSync, RecordStore, SelectionSync, Settings,
};
use anagram_shuffle::{ShuffleSeed, Shuffler};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Letters available for the answer. Non-letters are ignored.
    #[arg(short, long)]
    pool: Option<String>,

    /// Known letter as INDEX=LETTER (zero-based). Repeatable.
    #[arg(short, long = "lock", value_name = "INDEX=LETTER", value_parser = parse_lock)]
    locks: Vec<(usize, char)>,

    /// Answer length.
    #[arg(short = 'n', long)]
    length: Option<usize>,

    /// Puzzle name. Reopens an existing puzzle with this name.
    #[arg(long)]
    name: Option<String>,

    /// Hex seed for the shuffler.
    #[arg(long)]
    seed: Option<ShuffleSeed>,

    /// Number of shuffles to print.
    #[arg(long, default_value_t = 1)]
    shuffles: usize,

    /// Largest allowed answer length.
    #[arg(long, default_value_t = 15)]
    max_length: u8,

    /// Directory holding the puzzle records. Records are kept in memory if omitted.
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn parse_lock(s: &str) -> Result<(usize, char), String> {
    let (index, letter) = s
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=LETTER, got {s:?}"))?;
    let index = index
        .trim()
        .parse()
        .map_err(|e| format!("invalid index {index:?}: {e}"))?;
    let mut chars = letter.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok((index, c)),
        _ => Err(format!("expected a single letter, got {letter:?}")),
    }
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match &args.data_dir {
        Some(dir) => run(&args, JsonFileStore::in_dir(dir)),
        None => run(&args, MemoryStore::new()),
    }
}

fn run<S: RecordStore>(args: &Args, store: S) {
    let settings = Settings {
        editor: EditorSettings {
            max_length: args.max_length,
            ..EditorSettings::default()
        },
    };

    let seed = args.seed.unwrap_or_else(ShuffleSeed::random);
    let mut sync = QueryParamSync::parse("anagram:///").unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        process::exit(1);
    });
    sync.publish(args.name.as_deref());

    let mut app = AnagramApp::with_shuffler(store, sync, settings, Shuffler::with_seed(seed));
    let mut queue = ActionRequestQueue::default();
    if app.selected().is_none() {
        queue.request(Action::CreatePuzzle);
        if let Some(name) = &args.name {
            queue.request(Action::Rename(name.clone()));
        }
    }
    if let Some(length) = args.length {
        queue.request(Action::SetLength(length));
    }
    // The pool edit may grow the length, so it goes before the locks.
    if let Some(pool) = &args.pool {
        queue.request(Action::EditPool(pool.clone()));
    }
    app.update(&mut queue);

    for &(index, input) in &args.locks {
        app.dispatch(Action::Lock { index, input });
        if let Some(err) = app.last_edit_error() {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }

    let Some(puzzle) = app.selected_puzzle() else {
        eprintln!("Error: no puzzle selected");
        process::exit(1);
    };
    println!("Puzzle: {} ({})", puzzle.name(), puzzle.summary());
    println!("Pool:   {}", puzzle.pool());
    println!("Seed:   {seed}");

    for _ in 0..args.shuffles {
        app.dispatch(Action::Shuffle);
        if let Some(violation) = app.pool_error() {
            eprintln!("Error: {violation}");
            process::exit(1);
        }
        let slots = app.slots().iter().map(ToString::to_string).collect::<Vec<_>>();
        println!("{}", slots.join(" "));
    }

    if app.puzzles().len() > 1 {
        println!();
        for puzzle in app.puzzles().iter() {
            println!("- {} ({})", puzzle.name(), puzzle.summary());
        }
    }
}
