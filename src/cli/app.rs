//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, Context};
use qna::output::OutputMode;

/// qna - Questions, answers, and soft deletes
#[derive(Parser, Debug)]
#[command(
    name = "qna",
    version,
    about = "Questions, answers, and soft deletes",
    long_about = "Ask and answer questions from the command line.\n\n\
                  Deleting a question or answer only marks it as deleted;\n\
                  every delete is recorded in the delete history."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Act as this user (handle)
    #[arg(long = "as", value_name = "USER_ID", global = true)]
    pub acting_user: Option<String>,

    /// Data file to use instead of the configured one
    #[arg(long, value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Ask, show, list, and delete questions
    Question {
        #[command(subcommand)]
        action: QuestionAction,
    },

    /// Add, list, and delete answers
    Answer {
        #[command(subcommand)]
        action: AnswerAction,
    },

    /// Show the delete history
    History,

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Register a user
    Add {
        /// Unique handle
        user_id: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: Option<String>,
    },

    /// List registered users
    List,
}

#[derive(Subcommand, Debug)]
pub enum QuestionAction {
    /// Ask a question (requires --as)
    Ask {
        /// Question title
        #[arg(short, long)]
        title: String,

        /// Question body
        #[arg(short, long, default_value = "")]
        contents: String,
    },

    /// List active questions
    List,

    /// Show an active question with its active answers
    Show {
        /// Question ID
        id: String,
    },

    /// Delete a question and its answers (requires --as)
    Delete {
        /// Question ID
        id: String,
    },

    /// Detach an answer and remove its record (maintenance)
    #[command(hide = true)]
    RemoveAnswer {
        /// Question ID
        question_id: String,

        /// Answer ID
        answer_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AnswerAction {
    /// Answer a question (requires --as)
    Add {
        /// Question ID
        question_id: String,

        /// Answer body
        contents: String,
    },

    /// List active answers of a question
    List {
        /// Question ID
        question_id: String,
    },

    /// Delete an answer (requires --as)
    Delete {
        /// Answer ID
        id: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(command) = cli.command else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "hint": "Use --help for usage"
                })
            );
        } else {
            println!("qna v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'qna --help' for usage");
        }
        return Ok(());
    };

    if let Command::Version = command {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION")
                })
            );
        } else {
            println!("qna v{}", env!("CARGO_PKG_VERSION"));
        }
        return Ok(());
    }

    let ctx = Context::open(cli.data.as_deref(), cli.acting_user, output_mode)?;
    match command {
        Command::User { action } => commands::user_cmd(&ctx, action),
        Command::Question { action } => commands::question_cmd(&ctx, action),
        Command::Answer { action } => commands::answer_cmd(&ctx, action),
        Command::History => commands::history(&ctx),
        Command::Version => Ok(()),
    }
}
