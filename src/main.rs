use anyhow::{Context, Result};
use clap::Parser;
use guard_patrol::{logging, sweep, CLIArgs, PathView};
use tracing::{info, trace};

fn main() -> Result<()> {
    logging::init();
    let args = CLIArgs::parse();
    let mut lab = guard_patrol::read_lab(&args.input_path).with_context(|| {
        format!(
            "Failed to read laboratory from given file({}).",
            args.input_path.display()
        )
    })?;
    info!(
        row_n = lab.row_n(),
        col_n = lab.col_n(),
        guard = %lab.guard(),
        "Loaded laboratory"
    );

    let outcome = lab.patrol();
    trace!("Patrol path:\n{}", PathView::new(&lab, &outcome));

    let loop_positions = if args.sequential {
        sweep::loop_obstructions(&mut lab)
            .context("Failed to probe obstacles in given laboratory.")?
    } else {
        sweep::par_loop_obstructions(&lab)
    };

    println!("{}", outcome.distinct_position_n());
    println!("{}", loop_positions.len());

    Ok(())
}
