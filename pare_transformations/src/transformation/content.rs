use crate::transformation::stats::ReduceStats;
use aho_corasick::AhoCorasick;
use lazy_static::lazy_static;
use log::{debug, info};
use pare::page::Page;
use pare::utils::log;
use phf::phf_set;
use regex::{Captures, Regex};

lazy_static! {
    static ref SCRIPT_BLOCKS: Regex = Regex::new(r"<script[^>]*>[\s\S]*?</script>").expect("valid regex pattern");
    static ref STYLE_BLOCKS: Regex = Regex::new(r"<style[^>]*>[\s\S]*?</style>").expect("valid regex pattern");
    static ref COMMENT_BLOCKS: Regex = Regex::new(r"<!--[\s\S]*?-->").expect("valid regex pattern");
    static ref IFRAME_BLOCKS: Regex = Regex::new(r"<iframe[^>]*>[\s\S]*?</iframe>").expect("valid regex pattern");
    static ref NOSCRIPT_BLOCKS: Regex = Regex::new(r"<noscript[^>]*>[\s\S]*?</noscript>").expect("valid regex pattern");
    static ref META_TAGS: Regex = Regex::new(r"<meta[^>]*>").expect("valid regex pattern");
    static ref LINK_TAGS: Regex = Regex::new(r"<link[^>]*>").expect("valid regex pattern");
    static ref JS_EVENT_ATTRS: Regex = Regex::new(r#" on\w+="[^"]*""#).expect("valid regex pattern");
    static ref DATA_ATTRS: Regex = Regex::new(r#" data-\w+="[^"]*""#).expect("valid regex pattern");
    static ref CLASS_ATTRS: Regex = Regex::new(r#" class="[^"]*""#).expect("valid regex pattern");
    static ref ID_ATTRS: Regex = Regex::new(r#" id="[^"]*""#).expect("valid regex pattern");
    static ref STYLE_ATTRS: Regex = Regex::new(r#" style="[^"]*""#).expect("valid regex pattern");
    static ref ANY_TAG: Regex = Regex::new(r"<[^>]*>").expect("valid regex pattern");
    static ref TAG_NAME: Regex = Regex::new(r"^</?([A-Za-z][A-Za-z0-9]*)").expect("valid regex pattern");
    static ref PARAGRAPH_BLOCKS: Regex = Regex::new(r"<p[^>]*>([\s\S]*?)</p>").expect("valid regex pattern");
    // one pattern per heading level so each level pairs with its own closing tag
    static ref HEADING_BLOCKS: [Regex; 6] = std::array::from_fn(|i| {
        Regex::new(&format!(r"<h{0}[^>]*>([\s\S]*?)</h{0}>", i + 1)).expect("valid regex pattern")
    });
    static ref LIST_ITEM_BLOCKS: Regex = Regex::new(r"<li[^>]*>([\s\S]*?)</li>").expect("valid regex pattern");
    // t[dh] on both ends: a mismatched <td>...</th> pair still extracts
    static ref TABLE_CELL_BLOCKS: Regex = Regex::new(r"<t[dh][^>]*>([\s\S]*?)</t[dh]>").expect("valid regex pattern");
    static ref DIV_BLOCKS: Regex = Regex::new(r"<div[^>]*>([\s\S]*?)</div>").expect("valid regex pattern");
    static ref EMPTY_LINE_RUNS: Regex = Regex::new(r"\n\s*\n").expect("valid regex pattern");
    static ref EXCESSIVE_SPACES: Regex = Regex::new(r" {2,}").expect("valid regex pattern");
    static ref ENTITIES: AhoCorasick =
        AhoCorasick::new(["&nbsp;", "&lt;", "&gt;", "&amp;", "&quot;"]).expect("valid entity table");
}

/// Replacements for the fixed entity table, decoded in a single
/// left-to-right pass. Doubly-encoded entities survive one level.
static ENTITY_SWAPS: [&str; 5] = [" ", "<", ">", "&", "\""];

/// Tags kept in the output of the content preserving branch.
static PRESERVED_TAGS: phf::Set<&'static str> = phf_set! {
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "table", "tr",
    "td", "th", "a", "strong", "em", "b", "i", "div", "span",
};

/// The reduction mode for the remaining markup once the noise stages ran.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReduceMode {
    #[default]
    /// Extract only the text within the preserved set of content tags.
    PreserveContent,
    /// Strip every tag, keeping only the inter-tag text.
    StripAllTags,
}

impl ReduceMode {
    /// Convert the mode from string match
    pub fn from_str(s: &str) -> ReduceMode {
        match s {
            "strip" | "Strip" | "STRIP" | "strip-all-tags" | "strip_all_tags"
            | "STRIP_ALL_TAGS" => ReduceMode::StripAllTags,
            _ => ReduceMode::PreserveContent,
        }
    }
}

/// Remove every match of the pattern, returning the rewritten text and
/// the count of matches removed.
fn strip_counted(html: String, pattern: &Regex) -> (String, usize) {
    let count = pattern.find_iter(&html).count();

    if count == 0 {
        (html, 0)
    } else {
        (pattern.replace_all(&html, "").into_owned(), count)
    }
}

/// Determine if the tag belongs to the preserved set. Case sensitive:
/// the preserved set is lowercase.
fn preserved_tag(tag: &str) -> bool {
    match TAG_NAME.captures(tag) {
        Some(caps) => match caps.get(1) {
            Some(name) => PRESERVED_TAGS.contains(name.as_str()),
            _ => false,
        },
        _ => false,
    }
}

/// Extract the inner text of the preserved containers in fixed extraction
/// order: paragraphs, headings by level, list items, table cells, divs.
/// Fragments join with a blank line; leftover tags outside the preserved
/// set are dropped. `None` when no container matched at all.
fn extract_preserved(html: &str) -> Option<String> {
    let mut preserved: Vec<&str> = Vec::new();

    for caps in PARAGRAPH_BLOCKS.captures_iter(html) {
        if let Some(m) = caps.get(1) {
            preserved.push(m.as_str());
        }
    }

    for pattern in HEADING_BLOCKS.iter() {
        for caps in pattern.captures_iter(html) {
            if let Some(m) = caps.get(1) {
                preserved.push(m.as_str());
            }
        }
    }

    for caps in LIST_ITEM_BLOCKS.captures_iter(html) {
        if let Some(m) = caps.get(1) {
            preserved.push(m.as_str());
        }
    }

    for caps in TABLE_CELL_BLOCKS.captures_iter(html) {
        if let Some(m) = caps.get(1) {
            preserved.push(m.as_str());
        }
    }

    for caps in DIV_BLOCKS.captures_iter(html) {
        if let Some(m) = caps.get(1) {
            preserved.push(m.as_str());
        }
    }

    if preserved.is_empty() {
        None
    } else {
        let joined = preserved.join("\n\n");

        Some(
            ANY_TAG
                .replace_all(&joined, |caps: &Captures| {
                    let tag = caps.get(0).map(|m| m.as_str()).unwrap_or_default();

                    if preserved_tag(tag) {
                        tag.to_string()
                    } else {
                        String::new()
                    }
                })
                .into_owned(),
        )
    }
}

/// Reduce raw markup through the ordered rewrite stages, counting each
/// removed construct and accounting byte sizes before and after.
///
/// Empty input short-circuits to an empty output and a zeroed stats
/// record. Later stages operate on the output of earlier stages, so
/// decorative attributes are gone before any content extraction runs.
pub fn reduce_html(raw: &str, mode: ReduceMode) -> (String, ReduceStats) {
    if raw.is_empty() {
        return (String::new(), ReduceStats::default());
    }

    let mut stats = ReduceStats::new(raw.len());
    let mut html = raw.to_owned();

    (html, stats.script_tags) = strip_counted(html, &SCRIPT_BLOCKS);
    (html, stats.style_tags) = strip_counted(html, &STYLE_BLOCKS);
    (html, stats.comments) = strip_counted(html, &COMMENT_BLOCKS);
    (html, stats.iframe_tags) = strip_counted(html, &IFRAME_BLOCKS);
    (html, stats.noscript_tags) = strip_counted(html, &NOSCRIPT_BLOCKS);
    (html, stats.meta_tags) = strip_counted(html, &META_TAGS);
    (html, stats.link_tags) = strip_counted(html, &LINK_TAGS);
    (html, stats.js_events) = strip_counted(html, &JS_EVENT_ATTRS);
    (html, stats.data_attrs) = strip_counted(html, &DATA_ATTRS);

    // decorative attributes, unconditional and uncounted
    html = CLASS_ATTRS.replace_all(&html, "").into_owned();
    html = ID_ATTRS.replace_all(&html, "").into_owned();
    html = STYLE_ATTRS.replace_all(&html, "").into_owned();

    html = match mode {
        ReduceMode::StripAllTags => {
            let before_strip = html.len();
            let text = ANY_TAG.replace_all(&html, " ").into_owned();

            stats.removed_tags = before_strip - text.len();
            debug!("stripped all tags - {} bytes removed", stats.removed_tags);

            text
        }
        ReduceMode::PreserveContent => match extract_preserved(&html) {
            Some(extracted) => {
                debug!(
                    "preserved content containers - {} of {} bytes kept",
                    extracted.len(),
                    html.len()
                );

                extracted
            }
            _ => {
                debug!("no content containers found, markup left unmodified");

                html
            }
        },
    };

    stats.empty_lines = EMPTY_LINE_RUNS.find_iter(&html).count();
    html = EMPTY_LINE_RUNS.replace_all(&html, "\n").into_owned();
    html = EXCESSIVE_SPACES.replace_all(&html, " ").into_owned();
    html = ENTITIES.replace_all(&html, &ENTITY_SWAPS[..]);

    stats.finalize(html.len());

    debug!(
        "removed {} script, {} style, {} comment, {} iframe, {} noscript, {} meta, {} link - {} event attributes, {} data attributes, {} blank runs",
        stats.script_tags,
        stats.style_tags,
        stats.comments,
        stats.iframe_tags,
        stats.noscript_tags,
        stats.meta_tags,
        stats.link_tags,
        stats.js_events,
        stats.data_attrs,
        stats.empty_lines
    );
    info!(
        "markup reduced - original: {} bytes, cleaned: {} bytes, reduction: {}%",
        stats.original_size, stats.cleaned_size, stats.reduction_percentage
    );

    (html, stats)
}

/// Reduce the raw markup held by a fetched page.
pub fn reduce_content(page: &Page, mode: ReduceMode) -> (String, ReduceStats) {
    log("reducing markup", page.get_url());

    reduce_html(page.get_html(), mode)
}
