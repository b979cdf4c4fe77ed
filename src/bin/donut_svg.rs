//! Renders a donut chart fixture to SVG on stdout.
//!
//! Usage: `donut_svg <fixture.json> [--at-ms <time>]`
//!
//! Without `--at-ms` the reveal is run to completion.

use std::fs;
use std::path::PathBuf;

use donut_rs::core::DataPoint;
use donut_rs::render::SvgRenderer;
use donut_rs::{ChartError, ChartResult, DonutChart, DonutChartConfig};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct Fixture {
    config: DonutChartConfig,
    points: Vec<DataPoint>,
}

#[derive(Debug)]
struct Args {
    fixture_path: PathBuf,
    at_ms: Option<f64>,
}

fn main() {
    let _ = donut_rs::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("donut_svg: {err}");
        std::process::exit(1);
    }
}

fn run() -> ChartResult<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let raw = fs::read_to_string(&args.fixture_path).map_err(|e| {
        ChartError::InvalidData(format!(
            "failed to read {}: {e}",
            args.fixture_path.display()
        ))
    })?;
    let fixture: Fixture = serde_json::from_str(&raw)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse fixture: {e}")))?;

    let mut chart = DonutChart::new(SvgRenderer::new(), fixture.config)?;
    chart.set_data(fixture.points)?;
    chart.tick(0.0)?;
    match args.at_ms {
        Some(at_ms) => {
            chart.tick(at_ms)?;
        }
        None => {
            let config = chart.config();
            let last_delay = config.stagger_ms * chart.segments().len() as f64;
            chart.tick(last_delay + config.duration_ms)?;
        }
    }
    chart.render()?;
    info!(
        segments = chart.segments().len(),
        settled = chart.is_settled(),
        "rendered fixture"
    );

    print!("{}", chart.renderer().last_document());
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> ChartResult<Args> {
    let usage = || {
        ChartError::InvalidInput("usage: donut_svg <fixture.json> [--at-ms <time>]".to_owned())
    };
    let fixture_path = PathBuf::from(args.next().ok_or_else(usage)?);
    let mut at_ms = None;
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--at-ms" => {
                let value = args.next().ok_or_else(usage)?;
                let parsed = value.parse::<f64>().map_err(|e| {
                    ChartError::InvalidInput(format!("invalid --at-ms value `{value}`: {e}"))
                })?;
                at_ms = Some(parsed);
            }
            _ => return Err(usage()),
        }
    }
    Ok(Args {
        fixture_path,
        at_ms,
    })
}
