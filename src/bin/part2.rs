use anyhow::{Context, Result};
use clap::Parser;
use guard_patrol::{logging, sweep, CLIArgs};
use tracing::debug;

fn main() -> Result<()> {
    logging::init();
    let args = CLIArgs::parse();
    let mut lab = guard_patrol::read_lab(&args.input_path).with_context(|| {
        format!(
            "Failed to read laboratory from given file({}).",
            args.input_path.display()
        )
    })?;

    let loop_positions = if args.sequential {
        sweep::loop_obstructions(&mut lab)
            .context("Failed to probe obstacles in given laboratory.")?
    } else {
        sweep::par_loop_obstructions(&lab)
    };
    for pos in &loop_positions {
        debug!("Obstacle at {} traps the guard", pos);
    }

    println!(
        "There is(are) {} location(s) which can make guard loops in given laboratory.",
        loop_positions.len()
    );

    Ok(())
}
