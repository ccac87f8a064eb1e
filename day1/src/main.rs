use std::time::Instant;

use anyhow::Result;
use day1::opts::{Opts, USAGE};
use day1::{load_input, parse_input, solve_puzzle_part1, solve_puzzle_part2};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse(std::env::args_os().skip(1))?;
    if opts.help {
        println!("{USAGE}");
        return Ok(());
    }

    let puzzle = load_input(&opts.path)?;
    let (columns, report) = parse_input(&puzzle, opts.policy)?;
    if !report.is_clean() {
        tracing::warn!(
            short_lines = report.short_lines,
            invalid_fields = report.invalid_fields,
            "input was not fully well-formed"
        );
    }

    let start = Instant::now();
    let part1 = solve_puzzle_part1(columns.left(), columns.right());
    let elapsed = start.elapsed();
    println!("Part 1: {part1}  | Time elapsed: {elapsed:?}");

    let start = Instant::now();
    let part2 = solve_puzzle_part2(columns.left(), columns.right());
    let elapsed = start.elapsed();
    println!("Part 2: {part2} | Time elapsed: {elapsed:?}");

    Ok(())
}
