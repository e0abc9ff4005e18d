use std::env;
use std::process;
use std::time::Duration;

use url_validity::page::{excerpt, fetch_page_text};
use url_validity::scoring::{check_citations, check_facts, rate_validity, MLHandle};
use url_validity::settings::settings;
use url_validity::utils::{
    log_assessment, log_citations, log_dimmed, log_fact_check, log_fetch_error, log_fetch_start,
    log_fetch_success, log_final_result, log_generic_error, log_header, log_ml_step, log_newline,
    log_score_breakdown,
};

fn print_usage() {
    eprintln!("Usage: rate-url <query> <url> [--json]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <query>    The question the page is being judged against");
    eprintln!("  <url>      Page to fetch and score");
    eprintln!("  --json     Print the record as JSON instead of the breakdown");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().collect();
    let json_output = args.iter().any(|a| a == "--json");

    let positional: Vec<&String> = args
        .iter()
        .skip(1)
        .filter(|a| *a != "--json")
        .collect();

    let [query, url] = positional.as_slice() else {
        print_usage();
        process::exit(1);
    };
    let (query, url) = (query.as_str(), url.as_str());

    let settings = settings();
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.http.timeout_secs))
        .user_agent(&settings.http.user_agent)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            log_generic_error("[ERROR]", &format!("Failed to build HTTP client: {e}"));
            process::exit(1);
        }
    };

    log_fetch_start(url);
    let page_text = match fetch_page_text(&client, url).await {
        Ok(text) => text,
        Err(e) => {
            log_fetch_error(&format!("{e:#}"));
            process::exit(1);
        }
    };
    log_fetch_success(page_text.chars().count());
    let page_excerpt = excerpt(&page_text, settings.scoring.excerpt_chars);

    log_newline();
    log_ml_step("Loading models...");
    log_dimmed("This may take a while on first run");
    let ml_handle = match MLHandle::spawn() {
        Ok(handle) => handle,
        Err(e) => {
            log_generic_error("[ERROR]", &format!("Failed to start ML worker: {e}"));
            process::exit(1);
        }
    };

    let assessment = match ml_handle
        .assess(query.to_string(), page_excerpt.to_string())
        .await
    {
        Ok(assessment) => assessment,
        Err(e) => {
            log_generic_error("[ERROR]", &format!("Relevance scoring failed: {e:#}"));
            process::exit(1);
        }
    };
    log_assessment(&assessment);

    // Independent lookups, run in sequence on purpose: one URL, one shot.
    log_newline();
    let fact_check = check_facts(&client, page_excerpt, settings).await;
    log_fact_check(&fact_check);

    let citations = check_citations(&client, url, settings).await;
    log_citations(&citations);

    let breakdown = rate_validity(
        settings.scoring.domain_trust,
        assessment.relevance_score,
        fact_check.score(),
        assessment.bias_score,
        citations.score(),
        &settings.scoring.weights,
    );

    log_newline();
    if json_output {
        match serde_json::to_string_pretty(&breakdown) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log_generic_error("[ERROR]", &format!("Failed to serialize record: {e}"));
                process::exit(1);
            }
        }
    } else {
        log_header("Validity breakdown");
        log_score_breakdown(&breakdown);
        log_newline();
        log_final_result(&breakdown);
    }
}
