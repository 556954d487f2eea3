use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use constellate::{
    PointerInput, Simulation, build_topology, default_catalog, frame_primitives,
};

/// Headless exerciser for the technology-graph animator.
#[derive(Parser)]
#[command(name = "constellate")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Fixed normalized pointer X position (0..1)
    #[arg(long, default_value_t = 0.5)]
    pointer_x: f32,

    /// Fixed normalized pointer Y position (0..1)
    #[arg(long, default_value_t = 0.5)]
    pointer_y: f32,

    /// Emit the final frame's render primitives as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let topology = build_topology(default_catalog());
    let mut sim = Simulation::from_topology(&topology);
    info!(
        nodes = topology.node_count(),
        edges = topology.edge_count(),
        frames = cli.frames,
        "running simulation"
    );

    let pointer = PointerInput::new(cli.pointer_x, cli.pointer_y);
    for frame in 0..cli.frames {
        sim.step(pointer, frame);
    }

    let frame = frame_primitives(&sim, &topology);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&frame)?);
    } else {
        let mut max_radius = 0.0_f32;
        let mut speed_sum = 0.0_f32;
        for node in sim.nodes() {
            let radius = node
                .position
                .iter()
                .map(|c| c * c)
                .sum::<f32>()
                .sqrt();
            max_radius = max_radius.max(radius);
            speed_sum += node
                .velocity
                .iter()
                .map(|c| c * c)
                .sum::<f32>()
                .sqrt();
        }
        let mean_speed = if sim.is_empty() {
            0.0
        } else {
            speed_sum / sim.node_count() as f32
        };

        println!(
            "{} nodes, {} edges after {} frames",
            frame.points.len(),
            frame.lines.len(),
            cli.frames
        );
        println!("max radius {max_radius:.2}, mean speed {mean_speed:.5}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_with_defaults() {
        let cli = Cli::try_parse_from(["constellate"]).unwrap();
        assert_eq!(cli.frames, 600);
        assert_eq!(cli.pointer_x, 0.5);
        assert_eq!(cli.pointer_y, 0.5);
        assert!(!cli.json);
    }

    #[test]
    fn cli_parses_pointer_and_json() {
        let cli = Cli::try_parse_from([
            "constellate",
            "--frames",
            "120",
            "--pointer-x",
            "0.9",
            "--pointer-y",
            "0.1",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.frames, 120);
        assert_eq!(cli.pointer_x, 0.9);
        assert_eq!(cli.pointer_y, 0.1);
        assert!(cli.json);
    }
}
