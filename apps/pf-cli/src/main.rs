use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use pf_solver::{RunContext, SimulationRequest, SimulationResponse, Solver, SolverConfig};

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "Physioflow CLI - dose-response simulation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every simulation in a scenario file
    Run {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Output CSV file path (optional, defaults to a table on stdout)
        #[arg(short, long)]
        csv: Option<PathBuf>,
    },
}

/// Scenario file: optional solver settings plus the requests to run.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Scenario {
    #[serde(default)]
    solver: SolverConfig,
    #[serde(default)]
    requests: Vec<SimulationRequest>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { scenario_path, csv } => cmd_run(&scenario_path, csv.as_deref()),
    }
}

fn cmd_run(scenario_path: &Path, csv: Option<&Path>) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(scenario_path)
        .with_context(|| format!("failed to read scenario file {}", scenario_path.display()))?;
    let scenario: Scenario = serde_yaml::from_str(&raw)
        .with_context(|| format!("failed to parse scenario file {}", scenario_path.display()))?;

    if scenario.requests.is_empty() {
        println!("No requests in scenario");
        return Ok(());
    }

    let solver = Solver::new(scenario.solver);
    let responses = solver.run_batch(&RunContext::new(), &scenario.requests)?;

    if let Some(path) = csv {
        write_csv(path, &responses)?;
        let points: usize = responses.iter().map(|r| r.data_points.len()).sum();
        println!("✓ Exported {} data points to {}", points, path.display());
    } else {
        print_tables(&scenario.requests, &responses);
    }

    Ok(())
}

fn print_tables(requests: &[SimulationRequest], responses: &[SimulationResponse]) {
    for (idx, (request, response)) in requests.iter().zip(responses).enumerate() {
        println!(
            "Request {} ({} days, {} compounds):",
            idx,
            request.duration_days,
            request.compounds.len()
        );
        println!(
            "  {:>4}  {:>14}  {:>10}  {:>10}",
            "day", "concentration", "anabolic", "toxicity"
        );
        for point in &response.data_points {
            println!(
                "  {:>4}  {:>14.4}  {:>10.4}  {:>10.4}",
                point.day, point.serum_concentration, point.anabolic_score, point.toxicity_score
            );
        }
    }
}

fn write_csv(path: &Path, responses: &[SimulationResponse]) -> anyhow::Result<()> {
    let mut csv = String::from("request,day,serum_concentration,anabolic_score,toxicity_score\n");
    for (idx, response) in responses.iter().enumerate() {
        for point in &response.data_points {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                idx,
                point.day,
                point.serum_concentration,
                point.anabolic_score,
                point.toxicity_score
            ));
        }
    }
    std::fs::write(path, csv)
        .with_context(|| format!("failed to write CSV to {}", path.display()))?;
    Ok(())
}
