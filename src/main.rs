//! CLI entry point for mdposts

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdposts")]
#[command(version)]
#[command(about = "Build a posts.json index from Markdown front matter", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new content directory
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Path for the new post (relative to the content directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Build the JSON index
    #[command(alias = "b")]
    Build {
        /// Watch for file changes and rebuild
        #[arg(short, long)]
        watch: bool,
    },

    /// Remove the generated index
    Clean,

    /// List indexed content
    List {
        /// Type of content to list (post, tag, category)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdposts=debug,info"
    } else {
        "mdposts=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing content directory in {:?}", target_dir);
            mdposts::commands::init::init_site(&target_dir)?;
            println!("Initialized empty mdposts site in {:?}", target_dir);
        }

        Commands::New { title, path } => {
            let site = mdposts::Site::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            mdposts::commands::new::create_post(&site, &title, path.as_deref())?;
        }

        Commands::Build { watch } => {
            let site = mdposts::Site::new(&base_dir)?;
            tracing::info!("Building index...");

            mdposts::commands::build::run(&site)?;
            println!("Generated successfully!");

            if watch {
                tracing::info!("Watching for file changes...");
                mdposts::commands::build::watch(&site)?;
            }
        }

        Commands::Clean => {
            let site = mdposts::Site::new(&base_dir)?;
            tracing::info!("Cleaning generated index...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = mdposts::Site::new(&base_dir)?;
            mdposts::commands::list::run(&site, &r#type)?;
        }

        Commands::Version => {
            println!("mdposts version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
