use console::{measure_text_width, Style};

use crate::scoring::{CitationOutcome, FactCheckOutcome, PageAssessment, ValidityBreakdown};

pub const TREE_BRANCH: char = '\u{251C}';
pub const TREE_END: char = '\u{2514}';
pub const TREE_HORIZ: char = '\u{2500}';

const VALUE_COLUMN: usize = 25;

fn tree_branch() -> String {
    dim()
        .apply_to(format!("{}{}{} ", TREE_BRANCH, TREE_HORIZ, TREE_HORIZ))
        .to_string()
}

fn tree_end() -> String {
    dim()
        .apply_to(format!("{}{}{} ", TREE_END, TREE_HORIZ, TREE_HORIZ))
        .to_string()
}

pub fn dim() -> Style {
    Style::new().dim()
}

fn cyan() -> Style {
    Style::new().cyan()
}

fn green() -> Style {
    Style::new().green()
}

fn red() -> Style {
    Style::new().red()
}

fn yellow() -> Style {
    Style::new().yellow()
}

fn bold() -> Style {
    Style::new().bold()
}

fn fetch_prefix() -> String {
    cyan().apply_to("[FETCH]").to_string()
}

fn ml_prefix() -> String {
    yellow().apply_to("[ML]").to_string()
}

fn check_prefix() -> String {
    cyan().apply_to("[CHECK]").to_string()
}

pub fn pad_label(label: &str) -> String {
    let current_width = measure_text_width(label);
    if current_width < VALUE_COLUMN {
        format!("{}{}", label, " ".repeat(VALUE_COLUMN - current_width))
    } else {
        format!("{} ", label)
    }
}

pub fn log_newline() {
    println!();
}

pub fn log_header(title: &str) {
    println!("{}", bold().apply_to(title));
}

pub fn log_dimmed(message: &str) {
    println!("{}", dim().apply_to(message));
}

pub fn log_generic_error(prefix: &str, message: &str) {
    eprintln!("{} {}", red().apply_to(prefix), message);
}

pub fn log_fetch_start(url: &str) {
    println!("{} fetching {}...", fetch_prefix(), dim().apply_to(url));
}

pub fn log_fetch_success(chars: usize) {
    println!(
        "{} extracted {} characters of visible text",
        fetch_prefix(),
        bold().apply_to(chars)
    );
}

pub fn log_fetch_error(error: &str) {
    eprintln!("{} {} {}", fetch_prefix(), red().apply_to("failed:"), error);
}

pub fn log_ml_step(message: &str) {
    println!("{} {}", ml_prefix(), message);
}

pub fn log_ml_model_loaded(name: &str, seconds: f32) {
    println!(
        "{} {} loaded in {}",
        ml_prefix(),
        name,
        dim().apply_to(format!("{seconds:.1}s"))
    );
}

pub fn log_ml_ready() {
    println!("{} models ready!", ml_prefix());
}

pub fn log_ml_error(message: &str) {
    eprintln!("{} {} {}", ml_prefix(), red().apply_to("error:"), message);
}

pub fn log_signal_unavailable(check: &str, reason: &str) {
    println!(
        "{} {} {} {}",
        check_prefix(),
        check,
        yellow().apply_to("unavailable:"),
        dim().apply_to(reason)
    );
}

pub fn log_fact_check(outcome: &FactCheckOutcome) {
    match outcome {
        FactCheckOutcome::ClaimsFound(count) => println!(
            "{} fact check found {} matching claim(s)",
            check_prefix(),
            bold().apply_to(count)
        ),
        FactCheckOutcome::NoClaims => {
            println!("{} fact check found no matching claims", check_prefix())
        }
        FactCheckOutcome::Unavailable(reason) => log_signal_unavailable("fact check", reason),
    }
}

pub fn log_citations(outcome: &CitationOutcome) {
    match outcome {
        CitationOutcome::Counted(count) => println!(
            "{} scholar search counted {} citation(s)",
            check_prefix(),
            bold().apply_to(count)
        ),
        CitationOutcome::Unavailable(reason) => log_signal_unavailable("citation check", reason),
    }
}

pub fn log_assessment(assessment: &PageAssessment) {
    println!(
        "{} relevance {} {}",
        ml_prefix(),
        bold().apply_to(format!("{:.2}", assessment.relevance_score)),
        dim().apply_to("(cosine similarity x 100)")
    );
    println!(
        "{} sentiment {} {}",
        ml_prefix(),
        bold().apply_to(&assessment.bias_label),
        dim().apply_to(format!(
            "(confidence {:.2})",
            assessment.bias_label_confidence
        ))
    );
}

pub fn log_score_breakdown(breakdown: &ValidityBreakdown) {
    let row = |branch: String, label: &str, value: f32| {
        println!(
            "{}{}{}",
            branch,
            pad_label(label),
            bold().apply_to(format!("{value:.2}"))
        );
    };

    row(tree_branch(), "domain trust", breakdown.domain_trust);
    row(tree_branch(), "content relevance", breakdown.relevance);
    row(tree_branch(), "fact-check score", breakdown.fact_check);
    row(tree_branch(), "bias score", breakdown.bias);
    row(tree_branch(), "citation score", breakdown.citation);
    row(tree_end(), "final validity", breakdown.final_score);
}

pub fn log_final_result(breakdown: &ValidityBreakdown) {
    let style = if breakdown.final_score >= 70.0 {
        green()
    } else if breakdown.final_score >= 50.0 {
        yellow()
    } else {
        red()
    };
    println!(
        "{} {}",
        bold().apply_to("final validity score:"),
        style.apply_to(format!("{:.2}", breakdown.final_score))
    );
}
