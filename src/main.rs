use anyhow::Context;
use gridwalk::config::{Config, OutputFormat};
use gridwalk::logging::setup_logging;
use gridwalk::report;
use tracing::{info, info_span};

fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = Config::load().context("failed to load configuration")?;
    let layout = config.layout().context("invalid canvas layout")?;
    let start = layout
        .vertex_at_pixel(config.start_pixel())
        .with_context(|| format!("start pixel {} is not on the canvas", config.start_pixel()))?;

    let _span = info_span!("walk", kind = %config.traversal, side = layout.side(), start).entered();

    let adjacency = layout.grid().adjacency().context("failed to build grid adjacency")?;
    let sets = config.traversal.levels(start, &adjacency)?;
    info!(
        levels = sets.level_count(),
        reached = sets.vertex_count(),
        "Computed level sets"
    );

    match config.format {
        OutputFormat::Text => {
            print!("{}", report::format_levels(&sets));
            println!();
            print!("{}", report::format_level_map(&sets, &layout.grid()));
        }
        OutputFormat::Json => println!("{}", report::to_json(&sets)?),
    }

    Ok(())
}
