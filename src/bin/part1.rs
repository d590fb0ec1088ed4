use anyhow::{Context, Result};
use clap::Parser;
use guard_patrol::{logging, CLIArgs, PathView};
use tracing::trace;

fn main() -> Result<()> {
    logging::init();
    let args = CLIArgs::parse();
    let lab = guard_patrol::read_lab(&args.input_path).with_context(|| {
        format!(
            "Failed to read laboratory from given file({}).",
            args.input_path.display()
        )
    })?;

    let outcome = lab.patrol();
    trace!("Patrol path:\n{}", PathView::new(&lab, &outcome));
    println!(
        "The guard will visit {} position(s) before leaving given laboratory.",
        outcome.distinct_position_n()
    );

    Ok(())
}
