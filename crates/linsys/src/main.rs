use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use linsys::{linalg::approx::EPSILON, LinearSystem};
use log::LevelFilter;

/// Solve a system of linear equations.
///
/// Each line of the input holds one equation: its coefficients separated by whitespace or
/// commas, followed by `=` and the constant term (for example `1, 2, -1 = 4`). Blank lines are
/// ignored and `#` starts a comment.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// File to read the equations from (standard input if omitted)
    input: Option<PathBuf>,
    /// Coefficients with an absolute value below this are treated as zero
    #[arg(long, default_value_t = EPSILON)]
    epsilon: f64,
    /// Also print the triangular form and the reduced row echelon form
    #[arg(long)]
    show_steps: bool,
    /// Log pivots and classification (twice: every row operation)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    linsys::init_logger!(match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });

    let input = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read standard input")?;
            input
        }
    };

    let system = input
        .parse::<LinearSystem>()
        .context("failed to parse linear system")?
        .with_epsilon(cli.epsilon);
    println!("{system}");

    if cli.show_steps {
        let triangular = system.compute_triangular_form()?;
        println!("\nTriangular form:\n{triangular}");
        let rref = system.compute_rref()?;
        println!("\nReduced row echelon form:\n{rref}");
    }

    let solutions = system.find_solutions()?;
    println!("\n{solutions}");

    Ok(())
}
