//! Page replacement simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Single run:** Parse one input file and report all four policies (FIFO, RAND, LRU, MIN) per sequence.
//! 2. **Batch run:** Process every `.txt` file in an input directory, writing one `<name>_saida.txt` per input.
//! 3. **JSON output:** Emit the per-sequence results as JSON for machine consumption.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use paging_core::report::{self, SequenceRun};
use paging_core::sim::{loader, simulator};
use paging_core::{SimulationResult, SimulatorError, SystemConfig};

#[derive(Parser, Debug)]
#[command(
    name = "paging-sim",
    version,
    about = "Virtual-memory page replacement simulator",
    long_about = "Simulate FIFO, RAND, LRU, and MIN page replacement over reference sequences.\n\nInput files carry the memory geometry (physical size, virtual size, architecture, page count) followed by one or more page reference sequences.\n\nExamples:\n  paging-sim run -f input/caso1.txt\n  paging-sim run -f input/caso1.txt -o output/caso1_saida.txt\n  paging-sim run -f input/caso1.txt --json\n  paging-sim batch --input-dir input --output-dir output"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single input file and print or save the report.
    Run {
        /// Input file to simulate.
        #[arg(short, long)]
        file: PathBuf,

        /// Write the report here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit results as JSON instead of the text report.
        #[arg(long)]
        json: bool,
    },

    /// Process every .txt file in a directory, one output file per input.
    Batch {
        /// Directory holding the input files.
        #[arg(long, default_value = "input")]
        input_dir: PathBuf,

        /// Directory to write the output files into.
        #[arg(long, default_value = "output")]
        output_dir: PathBuf,
    },
}

/// JSON shape for `run --json`: geometry plus per-sequence results.
#[derive(Serialize, Debug)]
struct JsonReport {
    page_size: u64,
    number_of_frames: u32,
    swap_size: u64,
    sequences: Vec<JsonSequence>,
}

/// One sequence with its per-policy results, for JSON output.
#[derive(Serialize, Debug)]
struct JsonSequence {
    requests: Vec<u32>,
    results: Vec<SimulationResult>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { file, output, json }) => {
            if let Err(e) = cmd_run(&file, output.as_deref(), json) {
                eprintln!("error: {} ({})", e, file.display());
                process::exit(1);
            }
        }
        Some(Commands::Batch {
            input_dir,
            output_dir,
        }) => cmd_batch(&input_dir, &output_dir),
        None => {
            eprintln!("Page replacement simulator — pass a subcommand");
            eprintln!();
            eprintln!("  paging-sim run -f <input.txt>        Simulate one file to stdout");
            eprintln!("  paging-sim run -f <in> -o <out>      Simulate one file to a report file");
            eprintln!("  paging-sim batch                     Process input/ into output/");
            eprintln!();
            eprintln!("  paging-sim --help  for full options");
            process::exit(1);
        }
    }
}

/// Simulates every sequence of one input file with all four policies.
fn simulate_file(path: &Path) -> Result<(SystemConfig, Vec<SequenceRun>), SimulatorError> {
    let (config, sequences) = loader::load_input(path)?;
    let frames = config.number_of_frames() as usize;

    let mut runs = Vec::with_capacity(sequences.len());
    for sequence in sequences {
        let results = simulator::run_all(&sequence, frames)?;
        runs.push((sequence, results));
    }
    Ok((config, runs))
}

/// Runs one input file and writes the report to stdout or a file.
fn cmd_run(file: &Path, output: Option<&Path>, json: bool) -> Result<(), SimulatorError> {
    let (config, runs) = simulate_file(file)?;

    let text = if json {
        let report = JsonReport {
            page_size: config.page_size(),
            number_of_frames: config.number_of_frames(),
            swap_size: config.swap_size(),
            sequences: runs
                .into_iter()
                .map(|(sequence, results)| JsonSequence {
                    requests: sequence.requests().to_vec(),
                    results,
                })
                .collect(),
        };
        serde_json::to_string_pretty(&report).map_err(io::Error::other)?
    } else {
        report::render_report(&config, &runs)
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let mut out = File::create(path)?;
            out.write_all(text.as_bytes())?;
        }
        None => {
            print!("{text}");
            if json {
                println!();
            }
        }
    }
    Ok(())
}

/// Processes every `.txt` file in `input_dir`, writing `<stem>_saida.txt`
/// reports into `output_dir`. Per-file failures are reported and skipped.
fn cmd_batch(input_dir: &Path, output_dir: &Path) {
    let entries = match fs::read_dir(input_dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("error: cannot read input directory '{}': {e}", input_dir.display());
            eprintln!("create the directory and add .txt input files");
            process::exit(1);
        }
    };

    if let Err(e) = fs::create_dir_all(output_dir) {
        eprintln!("error: cannot create output directory '{}': {e}", output_dir.display());
        process::exit(1);
    }

    let mut inputs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    inputs.sort();

    if inputs.is_empty() {
        eprintln!("error: no .txt files found in '{}'", input_dir.display());
        process::exit(1);
    }

    for input in inputs {
        let stem = input
            .file_stem()
            .map_or_else(String::new, |s| s.to_string_lossy().into_owned());
        let output = output_dir.join(format!("{stem}_saida.txt"));

        match cmd_run(&input, Some(&output), false) {
            Ok(()) => println!("{} -> {}", input.display(), output.display()),
            Err(e) => eprintln!("error: {} ({})", e, input.display()),
        }
    }
}
