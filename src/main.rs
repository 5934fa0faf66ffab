use anyhow::Result;
use clap::{Parser, Subcommand};
use portfolio_contact::ContactForm;

mod cli;

/// portfolio - personal website
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Personal portfolio website with a contact form", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,

        /// Log contact emails instead of sending them
        #[arg(long)]
        dry_run: bool,
    },
    /// Send a message through the contact form of a running server
    Submit {
        /// Base URL of the server
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        url: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = portfolio::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    portfolio::observability::init_observability("portfolio", &config.observability)?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            dry_run,
        } => cli::server::serve(config, host, port, dry_run).await,
        Commands::Submit {
            url,
            name,
            email,
            subject,
            message,
        } => {
            cli::submit::submit(
                &url,
                ContactForm {
                    name,
                    email,
                    subject,
                    message,
                },
            )
            .await
        }
    }
}
