use std::{collections::HashMap, path::PathBuf};

use clap::{Parser, Subcommand};
use formulary::{
    Options,
    ast::Associativity,
    evaluate_with,
    formula::{FormulaBook, store::FileStore},
    interpreter::variables::{free_variables, is_identifier},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// formulary evaluates arithmetic formulas with named variables and keeps a
/// book of saved formulas.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory where saved formulas are kept.
    #[arg(long, env = "FORMULARY_STORE", default_value = ".formulary", global = true)]
    store: PathBuf,

    /// Group chains of `^` from the right, so `2^3^2` is 512 instead of 64.
    #[arg(long, global = true)]
    right_assoc_power: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates an expression and prints the result.
    Eval {
        /// The expression, such as `(a + b) * 2`.
        expression: String,

        /// A variable value, as `NAME=VALUE`. May be repeated.
        #[arg(short = 'v', long = "var", value_parser = parse_binding)]
        vars: Vec<(String, f64)>,
    },
    /// Prints the free variables of an expression, one per line.
    Vars {
        /// The expression to scan.
        expression: String,
    },
    /// Manages saved formulas.
    #[command(subcommand)]
    Formula(FormulaCommand),
}

#[derive(Subcommand, Debug)]
enum FormulaCommand {
    /// Saves a new formula.
    Add {
        /// Display name of the formula.
        name:       String,
        /// The expression, such as `(price - cost) / price * 100`.
        expression: String,
    },
    /// Lists saved formulas as `ID<TAB>NAME<TAB>EXPRESSION`.
    List,
    /// Deletes a saved formula.
    Remove {
        /// Id of the formula, as printed by `formula list`.
        id: String,
    },
    /// Evaluates a saved formula.
    Run {
        /// Id of the formula, as printed by `formula list`.
        id: String,

        /// A variable value, as `NAME=VALUE`. May be repeated.
        #[arg(short = 'v', long = "var", value_parser = parse_binding)]
        vars: Vec<(String, f64)>,
    },
}

/// Parses a `NAME=VALUE` binding.
fn parse_binding(text: &str) -> Result<(String, f64), String> {
    let (name, value) =
        text.split_once('=').ok_or_else(|| format!("expected NAME=VALUE, found '{text}'"))?;
    let name = name.trim();
    if !is_identifier(name) {
        return Err(format!("'{name}' is not a valid variable name"));
    }
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.to_string(), value))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(false)
                             .init();
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let options = if args.right_assoc_power {
        Options::new().with_power_associativity(Associativity::Right)
    } else {
        Options::new()
    };
    debug!(?options, store = %args.store.display(), "starting");

    match args.command {
        Command::Eval { expression, vars } => {
            let vars: HashMap<String, f64> = vars.into_iter().collect();
            println!("{}", evaluate_with(&expression, &vars, &options)?);
        },
        Command::Vars { expression } => {
            for name in free_variables(&expression) {
                println!("{name}");
            }
        },
        Command::Formula(command) => {
            let mut book = FormulaBook::load(FileStore::new(args.store))?;
            match command {
                FormulaCommand::Add { name, expression } => {
                    let formula = book.add(&name, &expression)?;
                    println!("{}", formula.id);
                },
                FormulaCommand::List => {
                    for formula in book.formulas() {
                        println!("{}\t{}\t{}", formula.id, formula.name, formula.expression);
                    }
                },
                FormulaCommand::Remove { id } => {
                    let formula = book.remove(&id)?;
                    println!("Removed '{}'.", formula.name);
                },
                FormulaCommand::Run { id, vars } => {
                    let vars: HashMap<String, f64> = vars.into_iter().collect();
                    println!("{}", book.evaluate_with(&id, &vars, &options)?);
                },
            }
        },
    }

    Ok(())
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
