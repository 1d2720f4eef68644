// ABOUTME: CLI for inspecting web pages using the unfurl-iris extractor.
// ABOUTME: Fetches one or more URLs and prints their page metadata as JSON.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use serde_json::json;
use unfurl_iris::Inspector;

/// Inspect one or more web pages and output their metadata as JSON.
#[derive(Parser, Debug)]
#[command(name = "unfurl")]
#[command(about = "Fetch web pages and print their metadata as JSON", long_about = None)]
struct Args {
    /// Page URL(s) to inspect. Scheme-less URLs default to http.
    #[arg(required = true)]
    urls: Vec<String>,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// User-Agent header to send with each request.
    #[arg(long)]
    user_agent: Option<String>,

    /// Accept TLS certificates that fail verification.
    #[arg(long, default_value_t = false)]
    insecure: bool,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

async fn inspect(url: &str, args: &Args) -> anyhow::Result<serde_json::Value> {
    let mut builder = Inspector::builder(url)
        .timeout(Duration::from_secs(args.timeout_secs))
        .accept_invalid_certs(args.insecure);
    if let Some(agent) = &args.user_agent {
        builder = builder.user_agent(agent.clone());
    }

    let mut inspector = builder.build()?;
    let meta = inspector.fetch().await?;
    Ok(serde_json::to_value(&meta)?)
}

fn render(output: &serde_json::Value, compact: bool) -> String {
    if compact {
        serde_json::to_string(output).unwrap()
    } else {
        serde_json::to_string_pretty(output).unwrap()
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut pages = Vec::new();
    let mut failed = 0usize;

    for url in &args.urls {
        match inspect(url, &args).await {
            Ok(meta) => pages.push(json!({
                "url": url,
                "ok": true,
                "meta": meta,
                "error": null
            })),
            Err(err) => {
                eprintln!("error inspecting {}: {}", url, err);
                failed += 1;
                pages.push(json!({
                    "url": url,
                    "ok": false,
                    "meta": null,
                    "error": err.to_string()
                }));
            }
        }
    }

    let output = json!({
        "pages": pages,
        "total_pages": args.urls.len(),
        "inspected": args.urls.len() - failed,
        "failed": failed
    });

    println!("{}", render(&output, args.compact));

    if failed > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
