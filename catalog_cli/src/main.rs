use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;
use catalog_core::{
    data::{RecordStore, UserId},
    Catalog, FilterEvent,
};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod command;
mod render;

use command::Command;

const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Catalog command line arguments.
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Browse a product catalog by owner and product name")]
struct Args {
    /// Directory holding users.json, categories.json and products.json
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "CATALOG_DATA_DIR",
        default_value = DEFAULT_DATA_DIR
    )]
    data_dir: PathBuf,

    /// Only show products whose category is owned by this user
    #[arg(short, long, value_name = "ID", allow_negative_numbers = true)]
    owner: Option<i64>,

    /// Only show products whose name contains this text, ignoring case
    #[arg(short, long, value_name = "TEXT")]
    search: Option<String>,

    /// Keep reading filter commands from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Verbose logging (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let store = RecordStore::load_dir(&args.data_dir)
        .with_context(|| format!("failed to load records from {}", args.data_dir.display()))?;
    let mut catalog = Catalog::new(store);

    if let Some(owner) = args.owner {
        catalog.dispatch(FilterEvent::SelectOwner(UserId(owner)));
    }
    if let Some(text) = args.search {
        catalog.dispatch(FilterEvent::SetSearchText(text));
    }

    let mut out = io::stdout().lock();
    render::page(&mut out, &mut catalog)?;

    if args.interactive {
        info!("reading filter commands from stdin");
        run_interactive(&mut catalog, io::stdin().lock(), &mut out)?;
    }

    Ok(())
}

// RUST_LOG wins over the verbosity flag when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Turns each input line into a filter event and re-renders the page, until
/// `quit` or end of input.
fn run_interactive(
    catalog: &mut Catalog,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    prompt(out)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(out)?;
            continue;
        }
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Filter(event)) => {
                catalog.dispatch(event);
                render::page(out, catalog)?;
            }
            Err(err) => writeln!(out, "{err}\n{}", command::USAGE)?,
        }
        prompt(out)?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

#[cfg(test)]
mod test {
    use super::*;

    fn store() -> RecordStore {
        RecordStore::from_json(
            r#"[{"id": 1, "name": "Roma", "sex": "m"}]"#,
            r#"[{"id": 10, "title": "Drinks", "icon": "🍹", "ownerId": 1}]"#,
            r#"[{"id": 100, "name": "Cola", "categoryId": 10}, {"id": 101, "name": "Fanta", "categoryId": 99}]"#,
        )
        .unwrap()
    }

    fn session(input: &str) -> (Catalog, String) {
        let mut catalog = Catalog::new(store());
        let mut out = Vec::new();
        run_interactive(&mut catalog, input.as_bytes(), &mut out).unwrap();
        (catalog, String::from_utf8(out).unwrap())
    }

    #[test]
    fn commands_update_filter_state() {
        let (catalog, _) = session("owner 1\nsearch co\n");
        assert!(catalog.filter().is_owner_selected(UserId(1)));
        assert_eq!(catalog.filter().search_text(), "co");

        let (catalog, _) = session("owner 1\nsearch co\nreset\n");
        assert!(catalog.filter().is_neutral());
    }

    #[test]
    fn quit_stops_reading() {
        let (catalog, _) = session("search fan\nquit\nsearch cola\n");
        assert_eq!(catalog.filter().search_text(), "fan");
    }

    #[test]
    fn bad_command_prints_usage() {
        let (catalog, out) = session("owner roma\n");
        assert!(catalog.filter().is_neutral());
        assert!(out.contains(command::USAGE));
    }

    #[test]
    fn each_event_rerenders() {
        let (_, out) = session("search tea\nclear\n");
        assert!(out.contains(render::NO_MATCHES));
        assert!(out.contains("Fanta"));
    }

    #[test]
    fn args_parse_filters() {
        let args = Args::parse_from([
            "catalog",
            "--data-dir",
            "data",
            "-o",
            "2",
            "-s",
            " mac",
            "-vv",
        ]);
        assert_eq!(args.data_dir, PathBuf::from("data"));
        assert_eq!(args.owner, Some(2));
        assert_eq!(args.search.as_deref(), Some(" mac"));
        assert_eq!(args.verbose, 2);
        assert!(!args.interactive);
    }

    #[test]
    fn owner_accepts_negative_ids() {
        let args = Args::parse_from(["catalog", "--owner", "-1"]);
        assert_eq!(args.owner, Some(-1));

        let (catalog, _) = session("owner -1\n");
        assert!(catalog.filter().is_owner_selected(UserId(-1)));
    }

    #[test]
    fn default_data_dir_loads_from_any_working_directory() {
        let args = Args::parse_from(["catalog"]);
        assert!(args.data_dir.is_absolute());
        let store = RecordStore::load_dir(&args.data_dir).unwrap();
        assert!(!store.products().is_empty());
    }
}
