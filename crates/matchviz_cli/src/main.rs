//! Match Viz CLI
//!
//! Streams a match dataset through ball reconstruction and running stats,
//! printing text frames or an end-of-match summary.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "matchviz")]
#[command(about = "Replay a football event log as text frames and stats", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Play the whole dataset and print final score and leaderboards
    Summary {
        /// The filename of the json dataset
        #[arg(long)]
        dataset: PathBuf,

        /// Optional YAML config
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print one text line per frame
    Frames {
        /// The filename of the json dataset
        #[arg(long)]
        dataset: PathBuf,

        /// Optional YAML config
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print every N-th frame only
        #[arg(long, default_value = "1")]
        every: usize,
    },

    /// Print the JSON schema of the dataset format
    Schema,
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("matchviz=info,matchviz_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { dataset, config, json } => {
            let (data, config) = matchviz_cli::load_inputs(&dataset, config.as_deref())?;
            let roster = matchviz_core::dataset::Roster::from_teams(&data.teams, &config.referee_name);
            let mut sink = matchviz_cli::NullSink::default();
            let outcome = matchviz_core::Playback::new(&data, config)
                .run(&mut sink)
                .context("Playback failed")?;

            if json {
                let value = matchviz_cli::summary_json(&data, &outcome);
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print!("{}", matchviz_cli::render_summary(&data, &outcome, &roster));
            }
        }

        Commands::Frames { dataset, config, every } => {
            let (data, config) = matchviz_cli::load_inputs(&dataset, config.as_deref())?;
            tracing::info!("Playing {} events from {}", data.event_count(), dataset.display());
            let stdout = std::io::stdout();
            let mut sink = matchviz_cli::TextSink::new(stdout.lock(), every, &data);
            let outcome = matchviz_core::Playback::new(&data, config)
                .run(&mut sink)
                .context("Playback failed")?;
            tracing::info!(
                "Printed {} frames ({} with ball)",
                outcome.summary.frames,
                outcome.summary.frames_with_ball
            );
        }

        Commands::Schema => {
            println!("{}", matchviz_core::dataset::dataset_schema_json()?);
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("matchviz CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
