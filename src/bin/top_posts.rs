use anyhow::{Context, Result};
use dotenv::dotenv;
use hn_top::state::AppConfig;
use std::env;
use topstories::TopPostsOutcome;

const USAGE: &str = "Usage: top_posts --posts <n>   (0 <= n <= 100)";

fn parse_args(args: &[String]) -> Result<usize> {
    match args {
        [flag, value] if flag == "--posts" || flag == "-p" => hn_core::parse_post_count(value),
        _ => anyhow::bail!("Missing --posts argument"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    hn_top::init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let n = match parse_args(&args) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let config = AppConfig::from_env();
    let client = hn_top::build_http_client(&config)?;

    let outcome = match topstories::get_top_posts(&client, n).await {
        Ok(outcome) => outcome,
        Err(e) => {
            if let Some(id) = e.item_id() {
                tracing::debug!("Aborted at item id={}", id);
            }
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if outcome == TopPostsOutcome::NoPostsFound {
        println!("Unable to find any posts.");
    } else {
        let json =
            hn_core::render_posts_json(outcome.posts()).context("Failed to serialize posts")?;
        println!("{}", json);
    }

    Ok(())
}
