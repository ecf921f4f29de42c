// File: crates/plot-demo/src/main.rs
// Summary: Headless demo: pick a preset function (or pass a custom
// expression), parse the x/y ranges, render the plot to a PNG.

use anyhow::{Context, Result};
use plot_core::{parse_range, theme, Axis, Chart, RenderOptions};
use std::path::PathBuf;

/// The enumerated function choices plus the `custom` sentinel.
const PRESETS: &[(&str, &str)] = &[
    ("sin", "sin(x)"),
    ("cos", "cos(x)"),
    ("tan", "tan(x)"),
    ("parabola", "x^2"),
    ("cubic", "x^3"),
    ("inverse", "1/x"),
];

fn main() -> Result<()> {
    // Args: [choice] [custom-expr] [x-range] [y-range] [out.png] [theme]
    let mut args = std::env::args().skip(1);
    let choice = args.next().unwrap_or_else(|| "sin".to_string());
    let custom = args.next().unwrap_or_default();
    let x_text = args.next().unwrap_or_else(|| "-6.28,6.28".to_string());
    let y_text = args.next().unwrap_or_else(|| "-1,1".to_string());
    let out = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/out/plot.png"));
    let theme_name = args.next().unwrap_or_else(|| "light".to_string());

    let source = resolve_function(&choice, &custom)?;

    println!("Selected function: {source}");
    println!("X range: {x_text}");
    println!("Y range: {y_text}");

    let (x0, x1) = parse_range(&x_text).context("x range")?;
    let (y0, y1) = parse_range(&y_text).context("y range")?;

    let mut chart = Chart::new();
    chart.x_axis = Axis::new("x", x0, x1);
    chart.y_axis = Axis::new("y", y0, y1);

    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&theme_name);

    if let Err(e) = chart.plot_expression(&source) {
        // keep the axes-only chart on disk, then surface the failure
        eprintln!("Error in function: {e}");
        chart
            .render_to_png(&opts, &out)
            .with_context(|| format!("writing {}", out.display()))?;
        anyhow::bail!("invalid function: please enter a valid expression of x");
    }

    chart
        .render_to_png(&opts, &out)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Map a preset name to its expression, or take the custom text verbatim.
fn resolve_function(choice: &str, custom: &str) -> Result<String> {
    if choice == "custom" {
        if custom.is_empty() {
            anyhow::bail!("choice 'custom' needs an expression as the second argument");
        }
        return Ok(custom.to_string());
    }
    for (name, source) in PRESETS {
        if *name == choice {
            return Ok((*source).to_string());
        }
    }
    let names: Vec<&str> = PRESETS.iter().map(|(n, _)| *n).collect();
    anyhow::bail!(
        "unknown function choice '{choice}'; expected one of {} or 'custom'",
        names.join(", ")
    )
}
