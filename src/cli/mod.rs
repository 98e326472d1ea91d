pub mod config;
pub mod scroll;
pub mod slugify;
pub mod suggest;
pub mod theme;

use crate::models::ColorScheme;
use crate::services::slug::SlugStyle;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "admin-assist")]
#[command(version)]
#[command(about = "Helpers behind the CMS admin forms", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "admin-assist.toml", env = "ADMIN_ASSIST_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the slug for a title
    Slugify {
        #[arg(required = true)]
        text: Vec<String>,
        #[arg(short, long)]
        style: Option<SlugStyle>,
    },
    /// Read title edits from stdin and print slug suggestions as they settle.
    /// Lines starting with `slug:` edit the slug field instead.
    Suggest {
        #[arg(long, default_value = "")]
        slug: String,
    },
    Theme {
        /// Report the system preference as dark
        #[arg(long, global = true)]
        system_dark: bool,
        #[command(subcommand)]
        command: ThemeCommand,
    },
    /// Report whether the back-to-top button shows at a scroll offset
    Scroll { offset: u32 },
    /// Print the effective configuration
    Config,
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    Get,
    Set { scheme: ColorScheme },
    Clear,
}
