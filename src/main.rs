use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use job_portal::render::render_view;
use job_portal::{ActiveView, ClientConfig, HttpPortalClient, ViewStateController};

#[derive(Parser)]
#[command(name = "jobdeck")]
#[command(about = "Terminal client for the AI job portal")]
struct Cli {
    /// Base URL of the portal API, overrides PORTAL_API_URL
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::from_default_env()
                .add_directive("info".parse().expect("Invalid log directive")),
        )
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::load().with_api_url(cli.api_url);
    info!("Portal API: {}", config.api_base_url);

    let api = Arc::new(HttpPortalClient::new(
        config.api_base_url,
        config.timeout_seconds,
    )?);
    let mut controller = ViewStateController::new(api);
    controller.start().await;

    print_help();
    print!("{}", render_view(controller.state(), controller.recommendations()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = line
            .split_once(' ')
            .map(|(command, rest)| (command, rest.trim()))
            .unwrap_or((line, ""));

        match command {
            "jobs" => controller.select_view(ActiveView::Listings),
            "upload" => controller.select_view(ActiveView::Upload),
            "recs" => controller.select_view(ActiveView::Recommendations),
            "term" => controller.set_search_term(rest),
            "loc" => controller.set_location_filter(rest),
            "search" => controller.run_search().await,
            "send" => {
                if rest.is_empty() {
                    println!("Usage: send <path-to-pdf>");
                } else {
                    controller.upload_resume(&PathBuf::from(rest)).await;
                }
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            "" => {}
            other => println!("Unknown command: {other} (try 'help')"),
        }

        print!("{}", render_view(controller.state(), controller.recommendations()));
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  jobs | upload | recs   switch view");
    println!("  term <text>            set the search term");
    println!("  loc <text>             set the location filter");
    println!("  search                 fetch listings with the current filters");
    println!("  send <path>            upload a PDF resume");
    println!("  quit                   exit");
}
