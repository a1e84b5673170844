// EmoBuddy command line entry point
// Runs the conversational core over messages from the command line or stdin.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use emobuddy_core::brain::{respond_or_fallback, ChatMessage, MessageAnalysis, Responder, RuleBook};
use emobuddy_core::config::{CoreConfig, LogFormat};
use emobuddy_core::telemetry;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "emobuddy")]
#[command(about = "Rule-based emotional support responder")]
#[command(version)]
struct Cli {
    /// JSON rulebook replacing the built-in tables
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Seed for reproducible reply selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log output format (pretty, json, bunyan)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a reply for one message
    Respond { message: String },
    /// Detect the emotion of one message
    Classify { message: String },
    /// Check one message for crisis language
    Crisis { message: String },
    /// Read messages from stdin, one per line, and answer each
    Chat,
    /// Print the active rulebook as JSON
    Rules,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CrisisOutput {
    is_crisis: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CoreConfig::load().context("Failed to read configuration")?;
    if let Some(path) = cli.rules {
        config.rules_path = Some(path);
    }
    if let Some(seed) = cli.seed {
        config.rng_seed = Some(seed);
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    telemetry::init_tracing(config.log_format)?;
    info!("EmoBuddy core starting");

    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.command {
        Commands::Respond { message } => {
            let responder = Responder::from_config(&config)?;
            print_json(&responder.respond_with(&message, &mut rng))?;
        }
        Commands::Classify { message } => {
            let responder = Responder::from_config(&config)?;
            print_json(&responder.classify(&message))?;
        }
        Commands::Crisis { message } => {
            let responder = Responder::from_config(&config)?;
            print_json(&CrisisOutput {
                is_crisis: responder.is_crisis(&message),
            })?;
        }
        Commands::Chat => run_chat(&config, &mut rng)?,
        Commands::Rules => {
            let rulebook = match &config.rules_path {
                Some(path) => RuleBook::from_json_file(path)?,
                None => RuleBook::default(),
            };
            println!("{}", rulebook.to_json_pretty()?);
        }
    }

    Ok(())
}

/// Answers stdin line by line. A core that fails to build degrades to the fallback reply.
fn run_chat(config: &CoreConfig, rng: &mut StdRng) -> Result<()> {
    let responder = match Responder::from_config(config) {
        Ok(responder) => Some(responder),
        Err(e) => {
            error!("Responder unavailable, answering with fallback replies: {}", e);
            None
        }
    };

    let mut history: Vec<ChatMessage> = Vec::new();
    if let Some(responder) = &responder {
        let welcome = responder.welcome();
        history.push(ChatMessage::assistant(&welcome));
        print_json(&welcome)?;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match &responder {
            Some(responder) => {
                let analysis: MessageAnalysis = responder.analyze(&line, &history, rng);
                if analysis.is_crisis() {
                    warn!("Crisis language detected, surface crisis resources to the user");
                }
                history.push(ChatMessage::user(line));
                history.push(ChatMessage::assistant(&analysis.reply));
                print_json(&analysis)?;
            }
            None => print_json(&respond_or_fallback(None, &line, rng))?,
        }
    }

    info!("Chat ended after {} messages", history.len());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
