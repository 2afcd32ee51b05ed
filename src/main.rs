use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::error;

use los_reporter::config::ExportFormat;
use los_reporter::logging;
use los_reporter::pipeline::Pipeline;
use los_reporter::report;

#[derive(Parser)]
#[command(name = "los_reporter")]
#[command(about = "End-of-day report generator for List of Sessions exports")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FormatArgs {
    /// Export format description (TOML); CLI flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Expected column count of the export
    #[arg(long)]
    columns: Option<usize>,
    /// Zero-based index of the recording-name column
    #[arg(long)]
    name_column: Option<usize>,
}

impl FormatArgs {
    fn resolve(&self) -> anyhow::Result<ExportFormat> {
        let mut format = match &self.config {
            Some(path) => ExportFormat::load(path)?,
            None => ExportFormat::default(),
        };
        if let Some(columns) = self.columns {
            format.columns = columns;
        }
        if let Some(name_column) = self.name_column {
            format.name_column = name_column;
        }
        format.validate()?;
        Ok(format)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the end-of-day report from an export file
    Report {
        /// Path to the List of Sessions CSV export
        file: PathBuf,
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Parse and repair an export without reporting, printing row diagnostics
    Check {
        /// Path to the List of Sessions CSV export
        file: PathBuf,
        #[command(flatten)]
        format: FormatArgs,
    },
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { file, format } => {
            let pipeline = Pipeline::new(format.resolve()?)?;
            match pipeline.run(&file) {
                Ok(run) => {
                    print!("{}", report::render(&run.sessions));
                }
                Err(e) => {
                    error!("report generation failed: {}", e);
                    println!("❌ Report generation failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Check { file, format } => {
            let pipeline = Pipeline::new(format.resolve()?)?;
            match pipeline.run(&file) {
                Ok(run) => {
                    println!("✅ Export is well-formed after repair");
                    println!("   Data rows: {}", run.total_rows);
                    println!("   Repaired rows: {}", run.repaired_rows);
                    println!("   Sessions classified: {}", run.sessions.len());
                }
                Err(e) => {
                    error!("check failed: {}", e);
                    println!("❌ Export check failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
