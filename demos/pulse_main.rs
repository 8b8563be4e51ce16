use pulsim::core::execution::{CycleAnalyzer, PressSimulator, SimulationConfig};
use pulsim::{build_graph, AnalysisError};
use std::fs;

const PRESSES: u64 = 1000;
const SINK: &str = "rx";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "input.txt".to_string());
    println!("Solving: {}", path);

    let text = fs::read_to_string(&path)?;
    let graph = build_graph(text.lines())?;

    let mut sim = PressSimulator::new(&graph, SimulationConfig::default());
    let counts = sim.run(PRESSES);
    println!(
        "{} presses: {} low, {} high, product {}",
        PRESSES,
        counts.low,
        counts.high,
        counts.product()
    );

    match CycleAnalyzer::new(&graph, SINK, SimulationConfig::default()).and_then(|a| a.run()) {
        Ok(report) => {
            for (module, press) in &report.cycles {
                println!("  {} first high on press {}", module, press);
            }
            println!("'{}' receives low on press {}", SINK, report.convergence_press);
        }
        Err(AnalysisError::MissingSink { sink }) => {
            println!("No '{}' convergence: network has no gate in front of it", sink);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
