use admin_assist::cli::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_assist=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Slugify { text, style }) => {
            admin_assist::cli::slugify::run(&cli.config, &text, style).await?;
        }
        Some(Commands::Suggest { slug }) => {
            admin_assist::cli::suggest::run(&cli.config, &slug).await?;
        }
        Some(Commands::Theme {
            system_dark,
            command,
        }) => {
            admin_assist::cli::theme::run(&cli.config, system_dark, command).await?;
        }
        Some(Commands::Scroll { offset }) => {
            admin_assist::cli::scroll::run(&cli.config, offset).await?;
        }
        Some(Commands::Config) => {
            admin_assist::cli::config::run(&cli.config).await?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
