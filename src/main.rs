use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrine=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path, title }) => {
            vitrine::cli::init::run(path, title).await?;
        }
        Some(Commands::Migrate) => {
            vitrine::cli::migrate::run(&cli.config).await?;
        }
        Some(Commands::Serve { host, port }) => {
            vitrine::cli::serve::run(&cli.config, host, port).await?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
