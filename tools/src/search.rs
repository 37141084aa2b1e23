use prefix_finder_core::utils::is_blank;
use prefix_finder_core::{parse_suffix_list, Config, Page, ResultShaper, SortOrder};

/// One lookup as a caller phrases it: raw strings, everything optional.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub prefix: String,
    pub sort: Option<String>,
    /// Comma-separated preferred suffixes.
    pub suffixes: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
    /// Treat `prefix` as a word and search by its last character instead.
    pub last_letter: bool,
}

/// Resolve a request against the shaper and cut out the requested page.
pub fn run(shaper: &ResultShaper, config: &Config, req: &SearchRequest) -> Page {
    if is_blank(&req.prefix) {
        return Page::empty();
    }

    let sort = req
        .sort
        .as_deref()
        .map(SortOrder::from_param)
        .unwrap_or_else(|| config.sort_order());
    let suffixes = req
        .suffixes
        .as_deref()
        .map(parse_suffix_list)
        .unwrap_or_default();

    let words = if req.last_letter {
        shaper.last_letter_words(&req.prefix, sort, &suffixes)
    } else {
        shaper.query(&req.prefix, sort, &suffixes)
    };

    let per_page = config.clamp_per_page(req.per_page);
    Page::from_words(&words, req.page.unwrap_or(1), per_page)
}
