//! SmartCalc command line front end.
//!
//! Evaluates expressions, computes loan repayments and samples expressions
//! for plotting. With no subcommand it reads one expression per line from
//! standard input.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use smartcalc::application::{Calculator, CreditKind, Settings};
use smartcalc::infrastructure::SettingsRepository;
use smartcalc::presentation::{format_result, render_credit, render_plot};

#[derive(Parser, Debug)]
#[command(name = "smartcalc")]
#[command(about = "Scientific calculator with credit and plotting tools", long_about = None)]
#[command(version)]
struct Args {
    /// Read settings from FILE
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Show results in scientific notation
    #[arg(short = 's', long = "scientific", global = true)]
    scientific: bool,

    /// Quiet operation, suppress warnings
    #[arg(short = 'q', conflicts_with = "verbose", global = true)]
    quiet: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate an expression
    Eval {
        expression: String,

        /// Value substituted for x
        #[arg(short = 'x', long = "x", value_name = "VALUE", allow_hyphen_values = true)]
        x: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute loan repayments (annuity or differentiated)
    Credit {
        kind: CreditKind,
        sum: f64,
        months: f64,
        /// Annual interest rate in percent
        rate: f64,

        #[arg(long)]
        json: bool,
    },

    /// Sample an expression in x over a range
    Plot {
        expression: String,

        #[arg(long = "from", value_name = "X", allow_hyphen_values = true)]
        from: Option<f64>,

        #[arg(long = "to", value_name = "X", allow_hyphen_values = true)]
        to: Option<f64>,

        #[arg(long)]
        samples: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Print the effective settings, optionally saving them to FILE
    Settings {
        #[arg(long = "save", value_name = "FILE")]
        save: Option<PathBuf>,
    },
}

impl Args {
    fn get_verbosity(&self) -> u8 {
        if self.quiet { 0 } else { 1 + self.verbose.min(3) }
    }
}

fn init_logging(verbosity: u8) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new().filter_level(level).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.get_verbosity());

    let mut settings = SettingsRepository::load_or_default(args.config.as_deref())
        .context("Failed to load settings")?;
    if args.scientific {
        settings.scientific = true;
    }

    let calc = Calculator::new(settings);
    let scientific = calc.settings().scientific;

    match args.command {
        None => run_interactive(&calc)?,
        Some(Command::Eval { expression, x, json }) => {
            let value = match x {
                Some(x) => calc.evaluate_with_x(&expression, &x),
                None => calc.evaluate(&expression),
            }
            .with_context(|| format!("Failed to evaluate {:?}", expression))?;

            if json {
                println!("{}", serde_json::json!({ "expression": expression, "result": value }));
            } else {
                println!("{}", format_result(value, scientific));
            }
        }
        Some(Command::Credit { kind, sum, months, rate, json }) => {
            let report = calc
                .credit(kind, sum, months, rate)
                .context("Failed to compute credit")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render_credit(&report));
            }
        }
        Some(Command::Plot { expression, from, to, samples, json }) => {
            let defaults = &calc.settings().plot;
            let points = calc
                .plot(
                    &expression,
                    from.unwrap_or(defaults.x_min),
                    to.unwrap_or(defaults.x_max),
                    samples.unwrap_or(defaults.samples),
                )
                .with_context(|| format!("Failed to plot {:?}", expression))?;

            if json {
                println!("{}", serde_json::to_string(&points)?);
            } else if !points.is_empty() {
                println!("{}", render_plot(&points, scientific));
            }
        }
        Some(Command::Settings { save }) => {
            let settings: &Settings = calc.settings();
            if let Some(path) = save {
                SettingsRepository::save_settings(settings, &path)
                    .with_context(|| format!("Failed to save settings to {}", path.display()))?;
            }
            println!("{}", serde_json::to_string_pretty(settings)?);
        }
    }

    Ok(())
}

/// Evaluates each non-empty line of standard input until EOF.
fn run_interactive(calc: &Calculator) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let scientific = calc.settings().scientific;

    for line in stdin.lock().lines() {
        let line = line?;
        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }
        match calc.evaluate(expression) {
            Ok(value) => writeln!(stdout, "{}", format_result(value, scientific))?,
            Err(err) => writeln!(stdout, "error: {}", err)?,
        }
        stdout.flush()?;
    }

    Ok(())
}
