//! Slidr CLI application entry point
//!
//! Reads a tagged photo collection, arranges the photos into a slideshow that
//! maximizes the transition interest between consecutive slides, and writes
//! the result in the standard slideshow format.
//!
//! # Usage
//!
//! ```bash
//! # Compose a show, writing photos.sol next to the input
//! slidr photos.txt
//!
//! # Explicit output path and a 30 second solver budget
//! slidr photos.txt -o show.txt --time-limit 30
//!
//! # Refuse collections that would generate more than 2000 candidate slides
//! slidr photos.txt --max-candidates 2000
//!
//! # Quiet mode (only errors are printed)
//! slidr -q photos.txt
//! ```
//!
//! # Configuration
//!
//! Defaults for the candidate bound and time limit can be placed in the user
//! config directory (`~/.config/slidr/config.toml` on Linux); command-line
//! flags take precedence.

use colored::Colorize;
use slidr::{
    SlidrError, Solution,
    cli::Cli,
    config::Settings,
    input, output,
    solver::{Backend, ChainSearch},
};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SlidrError> {
    let mut settings = Settings::load()?;
    settings.apply_cli(cli);
    let quiet = settings.quiet;

    let photos = input::load_photos(&cli.input)?;
    if !quiet {
        println!("Loaded {} photos from {}", photos.len(), cli.input.display());
    }

    let backend = ChainSearch;
    if !quiet && !backend.exact() {
        println!(
            "{} backend '{}' is a heuristic; the sequence may be suboptimal",
            "note:".yellow(),
            backend.name()
        );
    }

    let solution = slidr::compose(&photos, &settings, &backend)?;

    let out_path = cli.output_path();
    output::write_show(&out_path, &solution)?;
    if !quiet {
        print_summary(&solution, &out_path);
    }

    Ok(())
}

fn print_summary(solution: &Solution, out_path: &Path) {
    if solution.infeasible {
        println!("{} no feasible slideshow; wrote an empty show", "⚠".yellow());
    } else {
        println!(
            "{} {} slides, total transition score {}",
            "✓".green(),
            solution.slides.len(),
            solution.score
        );
        if solution.chain_breaks > 0 {
            println!(
                "{} sequence contains {} chain break(s)",
                "⚠".yellow(),
                solution.chain_breaks
            );
        }
    }
    println!("Wrote {}", out_path.display());
}
