use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use ore_core::core_api::{DecodeOptions, Engine};
use ore_render::{
    FieldSelection, render_json_full, render_json_selected, render_selected_pairs,
    render_summary_with_options,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "SAVE.sav")]
    path: PathBuf,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    money: bool,
    #[arg(long)]
    map: bool,
    #[arg(long)]
    versions: bool,
    #[arg(long)]
    transactions: bool,
    #[arg(long)]
    totals: bool,
    #[arg(long)]
    report: bool,
    /// Bytes after the `TransactionsHistory` marker searched for entries.
    #[arg(long = "transaction-window", value_name = "BYTES", value_parser = parse_window)]
    transaction_window: Option<usize>,
    /// `-v` logs decode fallbacks and adds tables to the summary, `-vv` traces discarded entries.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn fields(&self) -> FieldSelection {
        FieldSelection {
            money: self.money,
            map: self.map,
            versions: self.versions,
            transactions: self.transactions,
            totals: self.totals,
            report: self.report,
        }
    }

    fn decode_options(&self) -> DecodeOptions {
        let mut options = DecodeOptions::default();
        if let Some(window) = self.transaction_window {
            options.transaction_window = window;
        }
        options
    }
}

fn parse_window(value: &str) -> Result<usize, String> {
    let window: usize = value
        .parse()
        .map_err(|_| format!("invalid byte count: {value}"))?;
    if window == 0 {
        return Err("transaction window must be at least one byte".to_string());
    }
    Ok(window)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let fields = cli.fields();

    let engine = Engine::with_options(cli.decode_options());
    let save = engine.decode(&cli.path).unwrap_or_else(|e| {
        eprintln!("Error decoding save file: {}", cli.path.display());
        eprintln!("  {e}");
        process::exit(1);
    });

    if cli.json {
        let json = if fields.is_any_selected() {
            render_json_selected(&save, &fields)
        } else {
            render_json_full(&save)
        };
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if fields.is_any_selected() {
        for (key, value) in render_selected_pairs(&save, &fields) {
            println!("{key}={value}");
        }
        return;
    }

    print!("{}", render_summary_with_options(&save, cli.verbose > 0));
}
