//! tscan: The typoscan identifier typo scanner CLI.
//!
//! Usage:
//!   tscan [options] FILE
//!
//! Analyzes one JS/TS source file for likely identifier misspellings,
//! prints a summary (JSON by default), and writes an annotated HTML report
//! next to the analyzed file.

use clap::Parser as ClapParser;
use std::path::{Path, PathBuf};
use std::process;

use typoscan_analyzer::Analysis;
use typoscan_speller::{CachedOracle, DictionaryOracle, Whitelist};

#[derive(ClapParser, Debug)]
#[command(name = "tscan", about = "typoscan - An identifier typo scanner for JS/TS sources", disable_version_flag = true)]
struct Cli {
    /// Source file to analyze.
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Report destination (default: <FILE stem>.report.html next to FILE).
    #[arg(short = 'o', long = "out")]
    out: Option<String>,

    /// Skip writing the HTML report.
    #[arg(long = "no-report")]
    no_report: bool,

    /// Print a human-readable summary instead of JSON.
    #[arg(long)]
    pretty: bool,

    /// Maximum number of suggestions per word.
    #[arg(short = 'n', long = "max-suggestions", default_value_t = 5)]
    max_suggestions: usize,

    /// Print the scanner version.
    #[arg(short = 'v', long)]
    version: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("tscan Version 0.1.0");
        return;
    }

    let exit_code = run_analyze(&cli);
    process::exit(exit_code);
}

fn run_analyze(cli: &Cli) -> i32 {
    let Some(ref file) = cli.file else {
        print_error("No input file to analyze.");
        return 1;
    };

    let source = match std::fs::read_to_string(file) {
        Ok(source) => source,
        Err(e) => {
            print_error(&format!("Failed to read '{}': {}", file, e));
            return 1;
        }
    };

    let oracle = CachedOracle::new(
        DictionaryOracle::builtin().with_max_suggestions(cli.max_suggestions),
    );
    let analysis = typoscan_analyzer::analyze_source(&source, Whitelist::builtin(), &oracle);

    // Summary first: it must reach the caller even if rendering fails.
    if cli.pretty {
        print_pretty(&analysis);
    } else {
        match serde_json::to_string_pretty(&analysis.entries) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                print_error(&format!("Failed to serialize summary: {}", e));
                return 1;
            }
        }
    }

    if !cli.no_report {
        let document = typoscan_report::annotate(&analysis.entries, &analysis.source_lines);
        let html = typoscan_report::render_html(file, &document);
        let report_path = resolve_report_path(cli, file);
        if let Err(e) = typoscan_report::write_report(&report_path, &html) {
            print_error(&e.to_string());
            return 1;
        }
        if atty_is_terminal() {
            eprintln!(
                "{}HTML report generated: {}{}",
                GRAY,
                report_path.display(),
                RESET
            );
        } else {
            eprintln!("HTML report generated: {}", report_path.display());
        }
    }

    0
}

/// Default report destination: `<stem>.report.html` next to the input.
fn resolve_report_path(cli: &Cli, file: &str) -> PathBuf {
    if let Some(ref out) = cli.out {
        return PathBuf::from(out);
    }
    let path = Path::new(file);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    path.with_file_name(format!("{stem}.report.html"))
}

/// The console analysis: one block per misspelled word with its
/// occurrence sites.
fn print_pretty(analysis: &Analysis<'_>) {
    let use_color = atty_is_terminal();

    if analysis.is_clean() {
        println!("No likely misspellings found.");
        return;
    }

    println!("Console-based Analysis:");
    for entry in &analysis.entries {
        if use_color {
            println!("Word: {}{}{}{}", BOLD, RED, entry.word, RESET);
        } else {
            println!("Word: {}", entry.word);
        }
        println!("Occurrences: {}", entry.count);
        println!("Suggestions: {}", entry.suggestions.join(", "));
        for site in &entry.occurrences {
            if use_color {
                println!(
                    "-> At line {}{}{}, column {}{}{}",
                    CYAN, site.line, RESET, CYAN, site.column, RESET
                );
            } else {
                println!("-> At line {}, column {}", site.line, site.column);
            }
            println!("   {}", site.snippet);
        }
        println!("-----");
    }

    let total = analysis.occurrence_count();
    println!(
        "Found {} misspelled identifier{} across {} word{}.",
        total,
        if total == 1 { "" } else { "s" },
        analysis.entries.len(),
        if analysis.entries.len() == 1 { "" } else { "s" }
    );
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // Simple check - on Unix, check if stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true // Assume terminal on other platforms
    }
}
