use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use tilecal_bench::report;
use tilecal_bench::runner::{Runner, RunnerConfig};
use tilecal_config::defaults::REFERENCE_CONFIG_RON;

fn print_usage() {
    eprintln!("Usage: tilecal-run [OPTIONS]");
    eprintln!("  --config <ron>        Digitization config (default: reference values)");
    eprintln!("  --input <jsonl>       Step stream to replay (default: synthetic pencil beam)");
    eprintln!("  --output-dir <dir>    Directory for run output (default: .)");
    eprintln!("  --run <n>             Run number (default: 0)");
    eprintln!("  --threads <n>         Worker threads (default: available cores)");
    eprintln!("  --seed <n>            Override the config seed");
    eprintln!("  --calibration         Noise-free digitization (ignored with --config)");
    eprintln!("  --print-config        Print the reference config as RON and exit");
    eprintln!("  --events <n>          Synthetic events (default: 100)");
    eprintln!("  --energy <MeV>        Synthetic beam energy (default: 20000)");
    eprintln!("  --pdg <code>          Synthetic beam particle (default: -211)");
}

/// Value following a flag, parsed, or exit with a message.
fn value<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let Some(raw) = args.get(i) else {
        eprintln!("Missing value for {flag}");
        process::exit(1);
    };
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Invalid {flag} value: {raw}");
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let mut settings = RunnerConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                settings.config_path = Some(value::<PathBuf>(&args, i, "--config"));
            }
            "--input" => {
                i += 1;
                settings.input = Some(value::<PathBuf>(&args, i, "--input"));
            }
            "--output-dir" => {
                i += 1;
                settings.output_dir = value(&args, i, "--output-dir");
            }
            "--run" => {
                i += 1;
                settings.run = value(&args, i, "--run");
            }
            "--threads" => {
                i += 1;
                settings.threads = value(&args, i, "--threads");
            }
            "--seed" => {
                i += 1;
                settings.seed = Some(value(&args, i, "--seed"));
            }
            "--calibration" => {
                settings.calibration = true;
            }
            "--print-config" => {
                println!("{REFERENCE_CONFIG_RON}");
                process::exit(0);
            }
            "--events" => {
                i += 1;
                settings.beam.events = value(&args, i, "--events");
            }
            "--energy" => {
                i += 1;
                settings.beam.energy = value(&args, i, "--energy");
            }
            "--pdg" => {
                i += 1;
                settings.beam.pdg = value(&args, i, "--pdg");
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }
    if let Some(seed) = settings.seed {
        settings.beam.seed = seed;
    }

    let runner = match Runner::new(settings) {
        Ok(runner) => runner,
        Err(err) => {
            eprintln!("ERROR: {err}");
            process::exit(1);
        }
    };

    match runner.run() {
        Ok(summary) => {
            println!("\n## TileCal test-beam run {}\n", summary.run);
            println!("{}", report::format_markdown(&summary));
            log::info!("Run complete.");
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            process::exit(1);
        }
    }
}
