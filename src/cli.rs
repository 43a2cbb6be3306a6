use crate::config::load_config;
use crate::layout::compute_layout;
use crate::parser::parse;
use crate::render::{render_drawio, write_output};
use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "q2d", version, about = "Convert Mermaid quadrant charts to draw.io XML")]
pub struct Args {
    /// Input quadrant chart file (.mmd)
    pub input: PathBuf,

    /// Output file path
    #[arg(short = 'o', long = "output", default_value = "chart.drawio")]
    pub output: PathBuf,

    /// Config JSON file (layout sizes, page metadata, colors)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let input = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let model = parse(&input);
    println!("Found {} data points.", model.points.len());

    let layout = compute_layout(&model, &config.layout, &config.theme);
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let xml = render_drawio(&layout, &config.page, &timestamp);

    write_output(&xml, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("Chart saved to {}", args.output.display());
    Ok(())
}
