use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagewise::config::Config;
use pagewise::pagination::{coerce_number, try_calculate, PaginationRequest, PaginationResult};

use crate::utils::{self, format};

#[derive(Args, Debug)]
pub struct PaginateArgs {
    /// Total number of records
    #[arg(short, long, allow_hyphen_values = true)]
    pub records: String,

    /// Requested page (1-based); bad values fall back to the first page
    #[arg(short, long, allow_hyphen_values = true)]
    pub page: Option<String>,

    /// Items per page; defaults to pagination.default_page_size
    #[arg(short, long, allow_hyphen_values = true)]
    pub limit: Option<String>,

    /// Include the list of page numbers (skipped above 10000 pages)
    #[arg(long)]
    pub page_list: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Largest page list printed; past this `--page-list` is dropped with a warning
pub const MAX_LISTED_PAGES: u64 = 10_000;

/// Coerce the raw arguments into a request
pub fn build_request(config: &Config, args: &PaginateArgs) -> PaginationRequest {
    let pagination = &config.pagination;
    let page_size = match &args.limit {
        Some(raw) => coerce_number(raw),
        None => Some(i64::from(pagination.default_page_size)),
    };
    let page = args.page.as_deref().map_or(Some(1), coerce_number);

    PaginationRequest::from_parts(coerce_number(&args.records), page_size, page)
        .with_limits(pagination.limits())
        .with_page_list(args.page_list || pagination.include_page_list)
        .with_limits_echo(pagination.echo_limits)
}

/// Calculate, materializing the page list only when it stays small
pub fn paginate(request: &PaginationRequest) -> pagewise::error::Result<PaginationResult> {
    let counted = try_calculate(&request.clone().with_page_list(false))?;
    if !request.include_page_list {
        return Ok(counted);
    }

    if counted.total_pages > MAX_LISTED_PAGES {
        utils::warning(&format!(
            "Not listing {} pages (limit {})",
            counted.total_pages, MAX_LISTED_PAGES
        ));
        return Ok(counted);
    }

    try_calculate(request)
}

pub fn execute(config: &Config, args: PaginateArgs) -> Result<()> {
    let request = build_request(config, &args);
    let result = paginate(&request)
        .with_context(|| format!("Cannot paginate '{}' records", args.records))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&result);
    }

    Ok(())
}

fn print_summary(result: &PaginationResult) {
    utils::section(&format!(
        "Page {} of {}",
        result.current_page, result.total_pages
    ));
    println!(
        "  {} {} records, {} per page",
        "→".blue(),
        result.total_records,
        result.normalized_page_size
    );
    println!("  {} {}", "→".blue(), format::index_span(result));
    println!(
        "  {} previous: {}   next: {}",
        "→".blue(),
        format::optional_page(result.previous_page),
        format::optional_page(result.next_page)
    );

    if let Some(pages) = &result.page_list {
        println!("  {} {}", "→".blue(), format::page_strip(pages, result.current_page));
    }

    if result.is_last_page {
        utils::info("This is the last page");
    }
}
