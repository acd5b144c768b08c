use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tc_project::{ProjectResult, load, run_cycle};
use tc_report::{
    Diagram, DiagramKind, ExportFormat, ExportScope, cycle_summary, efficiency_line, records,
    render, write_report,
};
use tracing::warn;

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(about = "thermocycle CLI - Thermodynamic cycle analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a cycle definition file
    Validate {
        /// Path to the cycle YAML or JSON file
        cycle_path: PathBuf,
    },
    /// Solve a cycle and print its states and efficiency
    Run {
        /// Path to the cycle YAML or JSON file
        cycle_path: PathBuf,
        /// Also print the Carnot bound
        #[arg(long)]
        carnot: bool,
    },
    /// Export state records
    Export {
        /// Path to the cycle YAML or JSON file
        cycle_path: PathBuf,
        /// Include interior states
        #[arg(long)]
        all: bool,
        /// Output format: csv or json
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write P-v or T-s diagram series as JSON
    Diagram {
        /// Path to the cycle YAML or JSON file
        cycle_path: PathBuf,
        /// Diagram kind: pv or ts
        #[arg(long)]
        kind: DiagramKind,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ProjectResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { cycle_path } => cmd_validate(&cycle_path),
        Commands::Run { cycle_path, carnot } => cmd_run(&cycle_path, carnot),
        Commands::Export {
            cycle_path,
            all,
            format,
            output,
        } => {
            let scope = if all {
                ExportScope::All
            } else {
                ExportScope::Principal
            };
            cmd_export(&cycle_path, scope, format, output.as_deref())
        }
        Commands::Diagram {
            cycle_path,
            kind,
            output,
        } => cmd_diagram(&cycle_path, kind, output.as_deref()),
    }
}

fn cmd_validate(cycle_path: &Path) -> ProjectResult<()> {
    println!("Validating cycle: {}", cycle_path.display());
    let def = load(cycle_path)?;
    println!(
        "✓ Cycle '{}' is valid ({} states, {} samples per edge)",
        def.name,
        def.states.len(),
        def.samples
    );
    Ok(())
}

fn cmd_run(cycle_path: &Path, carnot: bool) -> ProjectResult<()> {
    let def = load(cycle_path)?;
    println!("Running cycle: {}", def.name);
    let cycle = run_cycle(&def)?;
    println!("{}", cycle_summary(&cycle));

    let numeric = cycle.numeric_efficiency()?;
    println!("{}", efficiency_line("numeric", &numeric));
    match cycle.analytic_efficiency() {
        Ok(analytic) => println!("{}", efficiency_line("analytic", &analytic)),
        Err(e) => warn!("analytic efficiency unavailable: {e}"),
    }
    if carnot {
        println!("Carnot efficiency: {:.4}", cycle.carnot_efficiency()?);
    }
    Ok(())
}

fn emit(contents: &str, output: Option<&Path>) -> ProjectResult<()> {
    match output {
        Some(path) => {
            write_report(path, contents)?;
            println!("✓ Written to {}", path.display());
        }
        None => print!("{contents}"),
    }
    Ok(())
}

fn cmd_export(
    cycle_path: &Path,
    scope: ExportScope,
    format: ExportFormat,
    output: Option<&Path>,
) -> ProjectResult<()> {
    let cycle = run_cycle(&load(cycle_path)?)?;
    let text = render(&records(&cycle, scope), format)?;
    emit(&text, output)
}

fn cmd_diagram(cycle_path: &Path, kind: DiagramKind, output: Option<&Path>) -> ProjectResult<()> {
    let cycle = run_cycle(&load(cycle_path)?)?;
    let mut json = Diagram::of_cycle(&cycle, kind)?.to_json()?;
    json.push('\n');
    emit(&json, output)
}
