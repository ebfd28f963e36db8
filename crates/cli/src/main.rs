mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "omnyo-site")]
#[command(version, about = "Static build tooling for the Omnyo bilingual marketing site", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Create site.toml in a project directory
    Init {
        /// Path to the project directory
        path: PathBuf,

        /// Site name
        #[arg(long)]
        name: Option<String>,

        /// Canonical site URL (fallback origin)
        #[arg(long)]
        url: Option<String>,
    },

    /// Validate catalogues, route table, SEO table and URL configuration
    Validate {
        /// Path to the project directory
        path: PathBuf,
    },

    /// Preview the built site locally with live reload
    Preview {
        /// Path to the project directory
        path: PathBuf,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Build page shells, sitemap.xml and robots.txt
    Build {
        /// Path to the project directory
        path: PathBuf,

        /// Output directory (defaults to build.output from site.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the prerender route list as JSON
    Routes,

    /// Show how a URL resolves, and where switching language leads
    Route {
        /// URL path, optionally with query and fragment (`/el/contact?x=1#form`)
        url: String,

        /// Target language code (en, gr or el)
        #[arg(long)]
        to: Option<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env from the working directory, if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init { path, name, url } => commands::init::run(path, name, url).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Preview { path, port } => commands::preview::run(path, port).await,
        Command::Build { path, output } => commands::build::run(path, output).await,
        Command::Routes => commands::routes::run(),
        Command::Route { url, to } => commands::route::run(&url, to.as_deref()),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "omnyo-site", &mut io::stdout());
            Ok(())
        }
    }
}
