//! Bloch vector inspector
//!
//! Prints the reduced state of every qubit of a state vector.
//!
//! Usage:
//! - `bloch_inspect "[0.7071+0j, 0+0j, 0+0j, 0.7071+0j]"`
//! - `bloch_inspect --preset ghz`
//! - `bloch_inspect --scan "$(cat notebook_output.txt)"`
//! - `bloch_inspect --list`
//!
//! Set `RUST_LOG=debug` to see the per-qubit computation.

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::*;
use qubit_bloch::presets::{Preset, PRESETS};
use qubit_bloch::{AnalyzerConfig, BitOrder, PurityLabel, StateAnalyzer, StateReport};

#[derive(Parser)]
#[command(name = "bloch_inspect")]
#[command(version)]
#[command(about = "Per-qubit Bloch vectors of a multi-qubit state vector", long_about = None)]
struct Cli {
    /// Amplitude list such as "[0.7071+0j, 0.7071+0j]", or free text with --scan
    #[arg(value_name = "STATE")]
    state: Option<String>,

    /// Analyze a named example state instead of STATE
    #[arg(short, long, value_name = "NAME", conflicts_with = "state")]
    preset: Option<String>,

    /// Search STATE for the first bracketed amplitude list
    #[arg(short, long)]
    scan: bool,

    /// Qubit 0 is the most significant bit of the basis index
    #[arg(short, long)]
    big_endian: bool,

    /// Print the report as JSON
    #[arg(short, long)]
    json: bool,

    /// List the example states and exit
    #[arg(short, long)]
    list: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.list {
        list_presets();
        return Ok(());
    }

    let bit_order = if cli.big_endian {
        BitOrder::BigEndian
    } else {
        BitOrder::LittleEndian
    };
    let analyzer = StateAnalyzer::new(AnalyzerConfig::default().with_bit_order(bit_order));

    let report = match (&cli.preset, &cli.state) {
        (Some(name), _) => {
            let preset = Preset::find(name)
                .with_context(|| format!("unknown preset '{name}' (try --list)"))?;
            analyzer.analyze(preset.literal)?
        }
        (None, Some(text)) if cli.scan => analyzer.analyze_text(text)?,
        (None, Some(state)) => analyzer.analyze(state)?,
        (None, None) => bail!("no state vector given (pass STATE or --preset NAME)"),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &StateReport) {
    if report.has_defaulted_tokens() {
        println!(
            "{} amplitudes {:?} were not numbers and count as 0",
            "warning:".yellow().bold(),
            report.defaulted_tokens
        );
    }

    println!("{} qubit(s)", report.num_qubits.to_string().bold());
    for q in &report.qubits {
        let label = match q.label {
            PurityLabel::Pure => q.label.name().green(),
            PurityLabel::Mixed => q.label.name().yellow(),
            PurityLabel::MaximallyMixed => q.label.name().magenta(),
        };
        println!(
            "  Qubit {}  r = {}  |r| = {:.4}  {}  ({})",
            q.qubit,
            q.bloch,
            q.purity(),
            label,
            q.label.hint().dimmed()
        );
    }
}

fn list_presets() {
    for preset in PRESETS {
        println!("{:<16} {}", preset.name.cyan(), preset.description);
        println!("{:<16} {}", "", preset.literal.dimmed());
    }
}
