use pagewise::pagination::PaginationResult;

/// Render a page number, or a dash when there is none
pub fn optional_page(page: Option<u64>) -> String {
    page.map_or_else(|| "-".to_string(), |page| page.to_string())
}

/// Describe which records a page covers
pub fn index_span(result: &PaginationResult) -> String {
    if result.item_count == 0 {
        "no items on this page".to_string()
    } else {
        format!(
            "items {}..={} ({} shown)",
            result.first_index, result.last_index, result.item_count
        )
    }
}

/// Page numbers on one line with the current page bracketed
pub fn page_strip(pages: &[u64], current: u64) -> String {
    pages
        .iter()
        .map(|&page| {
            if page == current {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Similarity score with trailing zeros trimmed
pub fn score(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("(score {text})")
}
