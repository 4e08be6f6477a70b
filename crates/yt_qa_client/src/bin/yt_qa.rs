//! yt-qa: terminal chat client for the video Q&A backend.
//! Shows backend health and stats, then answers questions given on the command
//! line or read interactively from stdin.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yt_qa_client::controller::SubmitOutcome;
use yt_qa_client::{config, render, ChatController, Client, Config, RenderedEntry, Role};
use yt_qa_client::{StatsPanel, StatusIndicator, View};

#[derive(Parser, Debug)]
#[command(name = "yt-qa", version, about = "Ask questions about indexed videos")]
struct Cli {
    /// Config file (defaults to ~/.yt-qa/config.yaml)
    #[arg(long, env = "YT_QA_CONFIG")]
    config: Option<PathBuf>,

    /// Backend address, overrides api.base_url from the config file
    #[arg(long)]
    base_url: Option<String>,

    /// Write the transcript as an HTML page to this path on exit
    #[arg(long)]
    html: Option<PathBuf>,

    /// Ask this question once and exit instead of starting a chat session
    question: Option<String>,
}

/// Prints transcript entries, status and stats to stdout.
#[derive(Debug, Default)]
struct TerminalView {
    busy: bool,
}

impl View for TerminalView {
    fn set_input_enabled(&mut self, _enabled: bool) {}

    fn set_busy(&mut self, busy: bool) {
        if busy && !self.busy {
            eprintln!("Thinking...");
        }
        self.busy = busy;
    }

    fn clear_input(&mut self) {}

    fn focus_input(&mut self) {}

    fn append_entry(&mut self, entry: &RenderedEntry) {
        let message = &entry.message;
        let mut out = io::stdout().lock();
        let label = match message.role() {
            Role::User => "You",
            Role::Bot => "Bot",
        };
        let _ = writeln!(out, "{}: {}", label, message.content());
        if !message.citations().is_empty() {
            let _ = writeln!(out, "Sources:");
            for citation in message.citations() {
                let _ = writeln!(out, "  - {} ({})", citation.title, citation.url);
            }
        }
    }

    fn scroll_to_latest(&mut self) {
        let _ = io::stdout().flush();
    }

    fn set_status(&mut self, indicator: &StatusIndicator) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "Status: {} {}", indicator.glyph, indicator.caption);
    }

    fn set_stats(&mut self, panel: &StatsPanel) {
        let mut out = io::stdout().lock();
        match panel {
            StatsPanel::Loaded(stats) => {
                let _ = writeln!(
                    out,
                    "Indexed: {} chunks from {} videos",
                    stats.total_chunks, stats.total_videos
                );
                for video in &stats.sample_videos {
                    let _ = writeln!(out, "  - {}", video.title);
                }
            }
            other => {
                if let Some(caption) = other.caption() {
                    let _ = writeln!(out, "{}", caption);
                }
            }
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yt_qa_client=warn,yt_qa=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut cfg = match &cli.config {
        Some(path) => config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => match config::default_config_path() {
            Some(path) => config::load_or_default(&path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => Config::default(),
        },
    };
    if let Some(url) = &cli.base_url {
        cfg.api.base_url = Some(url.clone());
    }
    Ok(cfg)
}

/// Read one question. A line ending in `\` continues on the next line.
/// Returns `None` at end of input.
async fn read_question<R>(lines: &mut tokio::io::Lines<R>) -> Result<Option<String>>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    let mut question = String::new();
    loop {
        let Some(line) = lines.next_line().await? else {
            return Ok((!question.is_empty()).then_some(question));
        };
        match line.strip_suffix('\\') {
            Some(head) => {
                question.push_str(head);
                question.push('\n');
            }
            None => {
                question.push_str(&line);
                return Ok(Some(question));
            }
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let cfg = resolve_config(&cli)?;
    let client = Client::new(cfg.base_url());
    tracing::debug!(base_url = client.base_url(), "starting session");

    let mut controller =
        ChatController::new(client, TerminalView::default()).with_n_results(cfg.n_results());
    controller.start().await;

    let mut code = ExitCode::SUCCESS;
    if let Some(question) = &cli.question {
        if controller.submit(question).await == SubmitOutcome::Failed {
            code = ExitCode::FAILURE;
        }
    } else {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(question) = read_question(&mut lines).await? {
            if question.trim() == "/quit" {
                break;
            }
            controller.submit(&question).await;
        }
    }

    if let Some(path) = &cli.html {
        std::fs::write(path, render::render_document(controller.transcript()))
            .with_context(|| format!("failed to write transcript to {}", path.display()))?;
    }
    Ok(code)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(run(cli)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
