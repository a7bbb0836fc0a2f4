//! xtask presets: list built-in display geometries.

use anyhow::Result;
use colored::Colorize;
use coverage_specs::PRESETS;

pub fn run(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(PRESETS)?);
        return Ok(());
    }

    println!("{}", "Display presets".cyan().bold());
    for preset in PRESETS {
        let g = preset.geometry;
        println!(
            "  {:<20} {:>4}×{:<4} {:<11} {:>7} px  {}",
            preset.name.green(),
            g.width,
            g.height,
            g.shape.as_str(),
            g.total_area(),
            preset.description.dimmed()
        );
    }
    Ok(())
}
