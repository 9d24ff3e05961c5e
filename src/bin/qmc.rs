//! Command-line front end: minimize a function given by its minterms.
//!
//! Run with: `cargo run --features cli --bin qmc -- 0 1 2 5 6 7`
//! Without terms, they are read interactively from stdin.

use std::io::{self, BufRead, Write};

use clap::Parser;
use color_eyre::Result;
use qmc_rs::cube::Cube;
use qmc_rs::input::parse_terms;
use qmc_rs::minimize::{Minimizer, MinimizerConfig};

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(author, version, about = "Minimum sum-of-products by Quine-McCluskey and branch-and-bound")]
struct Args {
    /// Minterms (space- or comma-separated). Read from stdin if omitted.
    terms: Vec<String>,

    /// Don't-care terms (treated as required minterms)
    #[arg(short, long, value_name = "TERMS")]
    dont_cares: Option<String>,

    /// Number of variables (derived from the largest term by default)
    #[arg(short, long, value_name = "INT")]
    width: Option<usize>,

    /// Disable dominance reduction during the search
    #[arg(long)]
    no_reduce: bool,

    /// Disable lower-bound pruning during the search
    #[arg(long)]
    no_prune: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Prompts until the user enters a valid term list. End of input yields an empty list.
fn read_terms(prompt: &str) -> Result<Vec<u64>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(Vec::new());
        };
        match parse_terms(&line?) {
            Ok(terms) => return Ok(terms),
            Err(e) => println!("Invalid input: {}. Please enter only non-negative integers.", e),
        }
    }
}

fn print_cubes(title: &str, cubes: &[Cube]) {
    println!("{}:", title);
    for c in cubes {
        println!("  {} -> {}", c, c.to_term());
    }
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items.into_iter().map(|x| x.to_string()).collect::<Vec<_>>().join(" ")
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let minterms = if args.terms.is_empty() {
        read_terms("Enter the minterms (space-separated): ")?
    } else {
        parse_terms(&args.terms.join(" "))?
    };
    let dont_cares = match &args.dont_cares {
        Some(s) => parse_terms(s)?,
        None => Vec::new(),
    };

    let config = MinimizerConfig {
        width: args.width,
        reduce: !args.no_reduce,
        prune: !args.no_prune,
    };
    let minimizer = Minimizer::new(config);
    let options = minimizer.config();
    let result = minimizer.minimize(&minterms, &dont_cares)?;

    println!("Minterms and their binary representations:");
    for (n, c) in &result.encodings {
        println!("  {} -> {}", n, c);
    }

    println!("Groups by number of ones:");
    for (ones, cubes) in result.groups.iter() {
        println!("  {} ({} elements): {}", ones, cubes.len(), join(cubes));
    }

    println!("Prime implicants:");
    for p in &result.primes {
        println!("  {} -> {} covers {}", p, p.to_term(), join(p.minterms()));
    }

    println!("Prime implicant chart:");
    for line in result.chart.to_string().lines() {
        println!("  {}", line);
    }
    println!("Minterms by implicant:");
    for (imp, minterms) in result.chart.flip() {
        println!("  {} | {}", imp, join(minterms));
    }

    print_cubes("Essential prime implicants", &result.essentials);
    print_cubes("Minimum cover", &result.cover);

    println!(
        "Search (reduce = {}, prune = {}): {} nodes, {} pruned, {} dead ends",
        options.reduce, options.prune, result.stats.nodes, result.stats.pruned, result.stats.dead_ends
    );
    println!("Essential part = {}", result.essential_expression());
    println!("F = {}", result.expression());

    Ok(())
}
