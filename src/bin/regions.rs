use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use qecviz::{load_case_model_graph, Position};

#[derive(Debug, Parser)]
#[command(name = "regions", about = "Number the connected regions of a case's decoding graph")]
struct Args {
    /// Case data JSON (as written by the simulator's visualizer output)
    #[arg(long)]
    case: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Log level for stderr diagnostics (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", value_parser = clap::value_parser!(LevelFilter))]
    log_level: LevelFilter,
}

#[derive(Serialize)]
struct VertexOut {
    position: Position,
    region: usize,
}

#[derive(Serialize)]
struct RegionsOut {
    region_count: usize,
    vertices: Vec<VertexOut>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let graph = load_case_model_graph(&args.case)
        .map_err(|e| format!("Case load error: {e}"))?;

    let out = match graph {
        Some(graph) => {
            let (height, vertical, horizontal) = graph.shape();
            info!(height, vertical, horizontal, "[regions] loaded model graph");
            let regions = graph.regions().map_err(|e| format!("Region build error: {e}"))?;
            info!(
                vertices = regions.positions().len(),
                regions = regions.region_count(),
                "[regions] partition complete"
            );
            RegionsOut {
                region_count: regions.region_count(),
                vertices: regions
                    .iter()
                    .map(|(position, region)| VertexOut { position, region })
                    .collect(),
            }
        }
        None => {
            info!("[regions] case has no model graph");
            RegionsOut { region_count: 0, vertices: Vec::new() }
        }
    };

    let text = if args.pretty {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    };
    println!("{text}");
    Ok(())
}
