use calm_quest::{run_server, GeminiConfig, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calm-quest")]
#[command(about = "Anxiety-relief game backend powered by the Gemini API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the game API server
    Serve {
        #[arg(short, long, default_value = "5000")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = GeminiConfig::from_env()?;
            run_server(config, port).await?;
        }
    }

    Ok(())
}
