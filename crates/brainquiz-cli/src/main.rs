//! brainquiz CLI: the terminal quiz player.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use brainquiz_sources::{QuizAction, QuizListKind};

mod commands;

#[derive(Parser)]
#[command(name = "brainquiz", version, about = "Terminal quiz player")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the dashboard actions.
#[derive(Args)]
struct ActionArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a quiz and play it interactively
    Play {
        /// Quiz id to request from the backend
        #[arg(long)]
        id: Option<String>,

        /// Local quiz JSON file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Fixed shuffle seed, for reproducible playthroughs
        #[arg(long)]
        seed: Option<u64>,

        /// Finish without confirming unanswered questions
        #[arg(long)]
        force: bool,

        /// Also write an HTML report next to the JSON record
        #[arg(long)]
        html: bool,

        /// Submit the result to the backend
        #[arg(long)]
        submit: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate quiz JSON files
    Validate {
        /// Path to a quiz file or a directory of them
        #[arg(long)]
        file: PathBuf,
    },

    /// List quizzes from the dashboard, falling back to the local cache
    List {
        /// Listing: active, archived or deleted
        #[arg(long, default_value = "active")]
        kind: QuizListKind,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check the configured token against the backend
    Whoami {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Archive an active quiz
    Archive {
        /// Quiz id
        id: String,
        #[command(flatten)]
        args: ActionArgs,
    },

    /// Move a quiz to the trash
    Delete {
        /// Quiz id
        id: String,
        #[command(flatten)]
        args: ActionArgs,
    },

    /// Restore an archived quiz
    Restore {
        /// Quiz id
        id: String,
        #[command(flatten)]
        args: ActionArgs,
    },

    /// Permanently delete a quiz
    Purge {
        /// Quiz id
        id: String,
        #[command(flatten)]
        args: ActionArgs,
    },

    /// Permanently delete every quiz in the trash
    EmptyTrash {
        #[command(flatten)]
        args: ActionArgs,
    },

    /// Render a saved session record as HTML
    Report {
        /// Session record JSON
        #[arg(long)]
        input: PathBuf,

        /// Output HTML path (default: next to the input)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Create starter config and example quiz
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("brainquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            id,
            file,
            seed,
            force,
            html,
            submit,
            config,
        } => {
            let options = commands::play::PlayOptions {
                id,
                file,
                seed,
                force,
                html,
                submit,
                config,
            };
            commands::play::execute(options).await
        }
        Commands::Validate { file } => commands::validate::execute(file),
        Commands::List { kind, config } => commands::list::execute(kind, config).await,
        Commands::Whoami { config } => commands::whoami::execute(config).await,
        Commands::Archive { id, args } => manage(QuizAction::Archive(id), args).await,
        Commands::Delete { id, args } => manage(QuizAction::Delete(id), args).await,
        Commands::Restore { id, args } => manage(QuizAction::Restore(id), args).await,
        Commands::Purge { id, args } => manage(QuizAction::Purge(id), args).await,
        Commands::EmptyTrash { args } => manage(QuizAction::EmptyTrash, args).await,
        Commands::Report { input, output } => commands::report::execute(input, output),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn manage(action: QuizAction, args: ActionArgs) -> anyhow::Result<()> {
    commands::manage::execute(action, args.yes, args.config).await
}
