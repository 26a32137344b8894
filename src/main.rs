//! Domain Scout - tool server over newline-delimited JSON
//!
//! Reads one request per line on stdin and writes one response per line on
//! stdout. Logs go to stderr.

use anyhow::{Context, Result};
use domain_scout::{tools, DomainScout, ScoutConfig};
use std::env;
use std::io;
use std::process;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.iter().skip(1).any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }
    if args.iter().skip(1).any(|a| a == "--version" || a == "-V") {
        println!("domain-scout {}", domain_scout::VERSION);
        return Ok(());
    }

    domain_scout::init()?;

    // stdout carries responses only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let scout = match ScoutConfig::from_env().and_then(|config| DomainScout::from_config(&config)) {
        Ok(scout) => scout,
        Err(e) => {
            error!(error = %e, "Startup failed");
            eprintln!("domain-scout: {}", e.user_message());
            process::exit(1);
        }
    };

    info!(version = %domain_scout::VERSION, tlds = %scout.catalog().len(), "Domain Scout ready");
    serve(&scout).await
}

async fn serve(scout: &DomainScout) -> Result<()> {
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut writer = BufWriter::new(tokio::io::stdout());
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .await
            .context("Failed to read from stdin")?;
        if bytes_read == 0 {
            info!("stdin closed, shutting down");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        debug!(request = %trimmed, "Received request");

        let Some(response) = tools::handle_line(scout, trimmed).await else {
            continue;
        };

        let encoded = serde_json::to_string(&response)?;
        writer.write_all(encoded.as_bytes()).await.context("Failed to write to stdout")?;
        writer.write_all(b"\n").await?;
        writer.flush().await.context("Failed to flush stdout")?;
    }

    Ok(())
}

/// Print help information
fn print_help() {
    println!("Domain Scout - domain name suggestions with availability checks");
    println!();
    println!("USAGE:");
    println!("    domain-scout            # serve tool requests on stdin/stdout");
    println!();
    println!("REQUESTS (one JSON object per line):");
    println!("    {{\"id\":1,\"method\":\"tools/list\"}}");
    println!("    {{\"id\":2,\"method\":\"tools/call\",\"params\":{{\"name\":\"suggest\",\"arguments\":{{\"description\":\"artisanal pickle factory\"}}}}}}");
    println!();
    println!("TOOLS:");
    println!("    suggest             Generate, score and check domain suggestions");
    println!("    checkAvailability   Check one domain or up to 20 domains");
    println!("    exploreDeep         Sweep every TLD in randomized batches");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    AVAILABILITY_PROVIDER   namecom or domainr (default: domainr)");
    println!("    NAMECOM_USERNAME        Name.com username");
    println!("    NAMECOM_TOKEN           Name.com API token");
    println!("    DOMAINR_API_KEY         RapidAPI key for Domainr");
    println!();
    println!("    OPENAI_API_KEY          OpenAI API key (OPENAI_BASE_URL, OPENAI_MODEL)");
    println!("    ANTHROPIC_API_KEY       Anthropic API key (ANTHROPIC_MODEL)");
    println!("    GEMINI_API_KEY          Google Gemini API key (GEMINI_MODEL)");
    println!("    OLLAMA_MODEL            Local Ollama model (OLLAMA_BASE_URL)");
    println!();
    println!("    TLD_LIST_PATH           Custom TLD list, one per line");
    println!("    SCOUT_BATCH_DELAY_MS    Pause between batches (default: 1000)");
    println!("    SCOUT_RNG_SEED          Fixed seed for reproducible shuffling");
    println!("    RUST_LOG                Log filter for stderr (default: info)");
}
