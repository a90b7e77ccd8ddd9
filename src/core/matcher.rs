use crate::domain::model::{CategoryCatalog, ComponentRecord};
use regex::Regex;
use std::sync::OnceLock;

/// Acceptance threshold for fuzzy component matching, on the 0-100 partial
/// ratio scale. Unified across all matching paths.
pub const MATCH_THRESHOLD: u32 = 75;

static GHZ_RE: OnceLock<Regex> = OnceLock::new();
static STOPWORD_RE: OnceLock<Regex> = OnceLock::new();
static NON_ALNUM_RE: OnceLock<Regex> = OnceLock::new();

/// Normalize a noisy component description for similarity scoring: lowercase,
/// drop clock-speed tokens ("2.9 GHz"), drop brand/category stopwords, keep
/// only alphanumerics and whitespace, trim. Idempotent.
pub fn normalize(raw: &str) -> String {
    let ghz = GHZ_RE.get_or_init(|| Regex::new(r"\d+\.\d+\s*ghz").unwrap());
    let stopwords = STOPWORD_RE
        .get_or_init(|| Regex::new(r"intel|amd|nvidia|gpu|cpu|apu|geforce|radeon").unwrap());
    let non_alnum = NON_ALNUM_RE.get_or_init(|| Regex::new(r"[^a-z0-9\s]").unwrap());

    let mut text = raw.to_lowercase();
    text = ghz.replace_all(&text, "").into_owned();
    text = non_alnum.replace_all(&text, "").into_owned();
    // Stripping a stopword can expose another ("intintelel"), and punctuation
    // removal above can splice one together ("int!el"); running the stopword
    // pass to fixpoint after the character filter keeps normalize idempotent.
    loop {
        let stripped = stopwords.replace_all(&text, "").into_owned();
        if stripped == text {
            break;
        }
        text = stripped;
    }
    text.trim().to_string()
}

/// Substring-tolerant similarity on a 0-100 scale: the shorter string is slid
/// across the longer one and the best windowed Levenshtein similarity wins, so
/// a query fully contained in a catalog name scores 100.
pub fn partial_ratio(a: &str, b: &str) -> u32 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let needle: String = shorter.iter().collect();
    let mut best = 0u32;
    for start in 0..=(longer.len() - shorter.len()) {
        let window: String = longer[start..start + shorter.len()].iter().collect();
        let score = (strsim::normalized_levenshtein(&needle, &window) * 100.0).round() as u32;
        if score > best {
            best = score;
            if best == 100 {
                break;
            }
        }
    }
    best
}

/// Best catalog row for a free-text query, or None when the best similarity
/// falls below `threshold`. Normalized catalog names are cached per snapshot.
pub fn fuzzy_best_match<'a>(
    query: &str,
    catalog: &'a CategoryCatalog,
    threshold: u32,
) -> Option<&'a ComponentRecord> {
    if catalog.is_empty() {
        return None;
    }

    let normalized_query = normalize(query);
    let names = catalog.normalized_names(normalize);

    let mut best: Option<(usize, u32)> = None;
    for (idx, name) in names.iter().enumerate() {
        let score = partial_ratio(&normalized_query, name);
        if best.map(|(_, s)| score > s).unwrap_or(true) {
            best = Some((idx, score));
        }
    }

    match best {
        Some((idx, score)) if score >= threshold => {
            let record = &catalog.records()[idx];
            tracing::debug!(query, matched = %record.name, score, "fuzzy match accepted");
            Some(record)
        }
        Some((_, score)) => {
            tracing::debug!(query, score, threshold, "fuzzy match below threshold");
            None
        }
        None => None,
    }
}
