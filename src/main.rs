// First-Order Logic to CNF
//
// Converts first-order formulas written in LaTeX notation into conjunctive
// normal form and classifies the resulting clauses as Horn or non-Horn.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use fol_cnf::{derivation, Config, Stage};
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Formula to convert; starts an interactive session when omitted
    formula: Option<String>,

    #[arg(long)]
    /// Print the stages as JSON
    json: bool,

    #[arg(long)]
    /// JSON file with pipeline settings
    config: Option<PathBuf>,

    #[arg(long)]
    /// Prefix for Skolem function symbols
    function_prefix: Option<String>,

    #[arg(long)]
    /// Prefix for Skolem constants
    constant_prefix: Option<String>,

    #[arg(long)]
    /// Only print the formula of each stage
    no_trace: bool,
}

impl Args {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("could not read {}", path.display()))?;
                Config::from_json(&text)
                    .with_context(|| format!("invalid config in {}", path.display()))?
            }
            None => Config::default(),
        };
        if let Some(prefix) = &self.function_prefix {
            config.skolem_function_prefix = prefix.clone();
        }
        if let Some(prefix) = &self.constant_prefix {
            config.skolem_constant_prefix = prefix.clone();
        }
        if self.no_trace {
            config.include_trace = false;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.load_config()?;

    match &args.formula {
        Some(formula) => {
            let stages = derivation(formula, &config);
            print_stages(&stages, args.json)?;
            if stages.iter().any(Stage::is_error) {
                process::exit(1);
            }
            Ok(())
        }
        None => repl(&config, args.json),
    }
}

fn repl(config: &Config, json: bool) -> anyhow::Result<()> {
    println!("fol-cnf v{}", env!("CARGO_PKG_VERSION"));
    println!("Type a formula per line, or Ctrl-D to exit");
    println!();

    let mut infile: Box<dyn io::BufRead> = Box::new(io::stdin().lock());

    loop {
        print!("fnc> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match infile.read_line(&mut line) {
            Ok(0) => {
                println!();
                return Ok(());
            }
            Err(e) => {
                println!("Error reading input: {}", e);
                return Ok(());
            }
            Ok(_) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                print_stages(&derivation(trimmed, config), json)?;
            }
        }
    }
}

fn print_stages(stages: &[Stage], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stages)?);
        return Ok(());
    }

    for (i, stage) in stages.iter().enumerate() {
        match &stage.notation {
            Some(notation) => println!("{}. {}: {}", i + 1, stage.title, notation),
            None => println!("{}", stage.title),
        }
        for entry in &stage.trace {
            println!("    {}", entry);
        }
    }
    Ok(())
}
