use std::io::{self, Read};
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use serde::Serialize;

use azspell::config::Config;
use azspell::corrector::spellfix;
use azspell::engine::Engine;
use azspell::tokenizer::Tokenize;

mod server;

#[derive(Debug, Parser)]
#[command(
    name = "azspell",
    version,
    about = "Dictionary-based spelling correction service"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve POST /spellfix over HTTP
    Serve(ServeArgs),
    /// Correct the provided text and print the result
    Fix(FixArgs),
    /// Print input in segmented form
    Tokenize(TokenizeArgs),
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "AZGRAMMA_LISTEN", default_value = "127.0.0.1:8000")]
    listen: SocketAddr,
}

#[derive(Debug, Args)]
struct FixArgs {
    /// Output in JSON format
    #[arg(long = "json")]
    use_json: bool,

    /// Text to be corrected (read from stdin when omitted)
    inputs: Vec<String>,
}

#[derive(Debug, Args)]
struct TokenizeArgs {
    /// Show words only
    #[arg(short = 'w', long = "words")]
    is_words_only: bool,

    /// Text to be tokenized (read from stdin when omitted)
    inputs: Vec<String>,
}

#[derive(Serialize)]
struct FixOutput<'a> {
    text: &'a str,
    corrected: &'a str,
}

fn read_inputs(inputs: Vec<String>) -> anyhow::Result<String> {
    if !inputs.is_empty() {
        return Ok(inputs.join(" "));
    }

    eprintln!("Reading from stdin...");
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    Ok(buffer)
}

fn init_engine() -> anyhow::Result<(Config, Option<Engine>)> {
    let config = Config::from_env();
    let engine = Engine::init(&config).context("could not initialize the correction engine")?;
    Ok((config, engine))
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let (config, engine) = init_engine()?;
    let app = server::router(Arc::new(server::AppState { config, engine }));

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("binding {}", args.listen))?;
    log::info!("listening on http://{}", args.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("failed to listen for shutdown signal: {}", e);
            }
            log::info!("shutting down");
        })
        .await
        .context("server error")
}

fn fix(args: FixArgs) -> anyhow::Result<()> {
    let (config, engine) = init_engine()?;
    let text = read_inputs(args.inputs)?;
    let corrected = spellfix(&config, engine.as_ref(), &text)?;

    if args.use_json {
        let output = FixOutput {
            text: &text,
            corrected: &corrected,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", corrected);
    }

    Ok(())
}

fn tokenize(args: TokenizeArgs) -> anyhow::Result<()> {
    let inputs = read_inputs(args.inputs)?;

    if args.is_words_only {
        for segment in inputs.words() {
            println!("{:>4}: {:?}", segment.offset, segment.value);
        }
    } else {
        for segment in inputs.segments() {
            println!("{:>4}: {:?}", segment.offset, segment.value);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Fix(args) => fix(args),
        Command::Tokenize(args) => tokenize(args),
    }
}
