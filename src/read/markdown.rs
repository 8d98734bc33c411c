//! Markdown sectioning via memchr line scan — no markdown parser needed.
//! Finds ATX headings outside fenced code blocks, assigns each a
//! GitHub-style slug, and treats every heading as the start of a section.

use std::collections::HashMap;

use crate::types::{RawHeading, Section};

/// Split `buf` into sections, one per heading, in document order.
/// Content before the first heading belongs to no section.
pub fn sections(buf: &[u8]) -> Vec<Section> {
    let mut slugger = Slugger::default();
    let mut out = Vec::new();
    let mut pos = 0;
    let mut line_num = 0u32;
    let mut fence: Option<Fence> = None;

    while pos < buf.len() {
        line_num += 1;

        let line_end = memchr::memchr(b'\n', &buf[pos..]).map_or(buf.len(), |i| pos + i);
        let mut line = &buf[pos..line_end];
        if line.last() == Some(&b'\r') {
            line = &line[..line.len() - 1];
        }
        pos = line_end + 1;

        match fence {
            Some(open) => {
                if open.closed_by(line) {
                    fence = None;
                }
                continue;
            }
            None => {
                if let Some(opened) = Fence::open(line) {
                    fence = Some(opened);
                    continue;
                }
            }
        }

        if let Some((depth, text)) = atx_heading(line) {
            let slug = slugger.slug(&text);
            out.push(Section {
                heading: RawHeading { depth, slug, text },
                line: line_num,
            });
        }
    }

    out
}

/// An open code fence: its marker byte and run length.
#[derive(Clone, Copy)]
struct Fence {
    marker: u8,
    len: usize,
}

impl Fence {
    /// Three or more backticks or tildes. A backtick fence's info string
    /// may not itself contain a backtick.
    fn open(line: &[u8]) -> Option<Self> {
        let marker = *line.first()?;
        if marker != b'`' && marker != b'~' {
            return None;
        }
        let len = line.iter().take_while(|&&b| b == marker).count();
        if len < 3 || (marker == b'`' && memchr::memchr(b'`', &line[len..]).is_some()) {
            return None;
        }
        Some(Self { marker, len })
    }

    /// Same marker, a run at least as long, and nothing but whitespace after.
    fn closed_by(self, line: &[u8]) -> bool {
        let run = line.iter().take_while(|&&b| b == self.marker).count();
        run >= self.len && line[run..].iter().all(u8::is_ascii_whitespace)
    }
}

/// Parse `## Title ##` into `(2, "Title")`. The `#` run must be followed by
/// a space or end of line, so `#hashtag` is not a heading.
fn atx_heading(line: &[u8]) -> Option<(u8, String)> {
    let level = line.iter().take_while(|&&b| b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    match line.get(level) {
        None | Some(b' ' | b'\t') => {}
        Some(_) => return None,
    }
    let raw = std::str::from_utf8(&line[level..]).ok()?.trim();

    // Closing sequence: trailing #s preceded by whitespace, or nothing but #s.
    let stripped = raw.trim_end_matches('#');
    let raw = if stripped.is_empty() {
        stripped
    } else if stripped.ends_with([' ', '\t']) {
        stripped.trim_end()
    } else {
        raw
    };

    Some((level as u8, plain_text(raw)))
}

/// Strip inline markup so the label matches what the rendered heading
/// displays: paired code spans, paired `*`/`_` emphasis, and `[label](url)`
/// links. Unpaired brackets, stars and ticks are literal text.
fn plain_text(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '`' => {
                let n = run_len(&chars, i, c);
                if let Some(close) = find_run(&chars, i + n, c, n) {
                    let inner: String = chars[i + n..close].iter().collect();
                    out.push_str(trim_code_padding(&inner));
                    i = close + n;
                } else {
                    out.extend(&chars[i..i + n]);
                    i += n;
                }
            }
            '[' => {
                if let Some((label_end, link_end)) = link_at(&chars, i) {
                    let label: String = chars[i + 1..label_end].iter().collect();
                    out.push_str(&plain_text(&label));
                    i = link_end + 1;
                } else {
                    out.push(c);
                    i += 1;
                }
            }
            '*' | '_' => {
                let n = run_len(&chars, i, c);
                if let Some(close) = emphasis_close(&chars, i, n) {
                    let inner: String = chars[i + n..close].iter().collect();
                    out.push_str(&plain_text(&inner));
                    i = close + n;
                } else {
                    out.extend(&chars[i..i + n]);
                    i += n;
                }
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

fn run_len(chars: &[char], at: usize, c: char) -> usize {
    chars[at..].iter().take_while(|&&x| x == c).count()
}

/// Start of the next run of exactly `n` copies of `c` at or after `from`.
fn find_run(chars: &[char], from: usize, c: char, n: usize) -> Option<usize> {
    let mut j = from;
    while j < chars.len() {
        if chars[j] == c {
            let m = run_len(chars, j, c);
            if m == n {
                return Some(j);
            }
            j += m;
        } else {
            j += 1;
        }
    }
    None
}

/// `[label](url)` starting at `open`: index of `]` and of the closing `)`.
fn link_at(chars: &[char], open: usize) -> Option<(usize, usize)> {
    let label_end = open + chars[open..].iter().position(|&c| c == ']')?;
    if chars.get(label_end + 1) != Some(&'(') {
        return None;
    }
    let link_end = label_end + 1 + chars[label_end + 1..].iter().position(|&c| c == ')')?;
    Some((label_end, link_end))
}

/// Matching close for an emphasis run of `n` delimiters at `open`. The
/// opener must touch non-whitespace on its right and the closer on its
/// left. Underscores do not open or close inside a word.
fn emphasis_close(chars: &[char], open: usize, n: usize) -> Option<usize> {
    let c = chars[open];
    let after = open + n;
    if n > 3 || chars.get(after).map_or(true, |x| x.is_whitespace()) {
        return None;
    }
    if c == '_' && open > 0 && chars[open - 1].is_alphanumeric() {
        return None;
    }

    let mut j = after;
    while j < chars.len() {
        if chars[j] != c {
            j += 1;
            continue;
        }
        let m = run_len(chars, j, c);
        let flanked = !chars[j - 1].is_whitespace();
        let word_end = c == '*' || chars.get(j + m).map_or(true, |x| !x.is_alphanumeric());
        if m == n && flanked && word_end {
            return Some(j);
        }
        j += m;
    }
    None
}

/// `` ` a ` `` renders as `a`: one padding space is dropped from each side.
fn trim_code_padding(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with(' ') && s.ends_with(' ') && !s.trim().is_empty() {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// GitHub-style slug generator. Repeated slugs get `-1`, `-2`, ... suffixes
/// in the order they are requested, so one `Slugger` per document.
#[derive(Default)]
pub struct Slugger {
    occurrences: HashMap<String, usize>,
}

impl Slugger {
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut result = base.clone();
        while self.occurrences.contains_key(&result) {
            let n = self.occurrences.entry(base.clone()).or_insert(0);
            *n += 1;
            result = format!("{base}-{n}");
        }
        self.occurrences.insert(result.clone(), 0);
        result
    }
}

/// Lowercase; keep alphanumerics, `-` and `_`; spaces become `-`; drop the rest.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            out.push(c);
        } else if c == ' ' {
            out.push('-');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headings(buf: &[u8]) -> Vec<RawHeading> {
        sections(buf).into_iter().map(|s| s.heading).collect()
    }

    #[test]
    fn finds_headings_with_lines() {
        let md = b"intro text\n# Title\n\nbody\n## Setup\n### Install\n";
        let s = sections(md);
        assert_eq!(s.len(), 3);
        assert_eq!(s[0].line, 2);
        assert_eq!(s[1].heading.depth, 2);
        assert_eq!(s[1].heading.slug, "setup");
        assert_eq!(s[2].line, 6);
        assert_eq!(s[2].heading.text, "Install");
    }

    #[test]
    fn skips_fenced_code() {
        let md = b"## Real\n```sh\n# not a heading\n~~~\n# still code\n```\n## After\n";
        let h = headings(md);
        let slugs: Vec<&str> = h.iter().map(|h| h.slug.as_str()).collect();
        assert_eq!(slugs, vec!["real", "after"]);
    }

    #[test]
    fn tilde_fence() {
        let md = b"~~~\n# hidden\n~~~\n# shown\n";
        assert_eq!(headings(md).len(), 1);
    }

    #[test]
    fn longer_fence_holds_shorter_fences() {
        let md = b"## Real\n````md\n```sh\n# inside code\n```\n````\n## After\n";
        let slugs: Vec<String> = headings(md).into_iter().map(|h| h.slug).collect();
        assert_eq!(slugs, vec!["real", "after"]);
    }

    #[test]
    fn fence_closes_only_on_bare_run() {
        // "``` text" is not a closer; the fence stays open until a bare run.
        let md = b"```\n``` text\n# hidden\n```  \n# shown\n";
        let h = headings(md);
        assert_eq!(h.len(), 1);
        assert_eq!(h[0].text, "shown");
    }

    #[test]
    fn backtick_info_string_with_tick_is_not_fence() {
        let h = headings(b"```not`fence\n# visible\n");
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn hashtag_is_not_heading() {
        assert!(headings(b"#hashtag\n####### seven\n").is_empty());
    }

    #[test]
    fn closing_hashes_stripped() {
        let h = headings(b"## Title ##\n## C#\n");
        assert_eq!(h[0].text, "Title");
        assert_eq!(h[1].text, "C#");
    }

    #[test]
    fn crlf_lines() {
        let h = headings(b"## One\r\n## Two\r\n");
        assert_eq!(h[0].text, "One");
        assert_eq!(h[1].slug, "two");
    }

    #[test]
    fn inline_markup_removed() {
        let h = headings(b"## Using `cargo` with [docs](https://docs.rs) **now**\n");
        assert_eq!(h[0].text, "Using cargo with docs now");
        assert_eq!(h[0].slug, "using-cargo-with-docs-now");
    }

    #[test]
    fn unpaired_markup_kept_literal() {
        let h = headings(b"## Indexing Vec[u8] with a*b\n## Tick ` alone\n## [ref] notes\n");
        assert_eq!(h[0].text, "Indexing Vec[u8] with a*b");
        assert_eq!(h[1].text, "Tick ` alone");
        assert_eq!(h[2].text, "[ref] notes");
    }

    #[test]
    fn paired_emphasis_and_code_stripped() {
        let h = headings(b"## *one* __two__ _three_ ``a ` b``\n## snake_case_name and 2 * 3\n");
        assert_eq!(h[0].text, "one two three a ` b");
        assert_eq!(h[1].text, "snake_case_name and 2 * 3");
    }

    #[test]
    fn link_label_markup_stripped() {
        let h = headings(b"## See [**the** guide](https://x.dev/a)\n");
        assert_eq!(h[0].text, "See the guide");
    }

    #[test]
    fn slugify_drops_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("What's new in v2.0?"), "whats-new-in-v20");
        assert_eq!(slugify("snake_case-and-kebab"), "snake_case-and-kebab");
        assert_eq!(slugify("Ünïcode Tëxt"), "ünïcode-tëxt");
    }

    #[test]
    fn duplicate_slugs_suffixed() {
        let mut s = Slugger::default();
        assert_eq!(s.slug("Example"), "example");
        assert_eq!(s.slug("Example"), "example-1");
        assert_eq!(s.slug("Example"), "example-2");
        assert_eq!(s.slug("Example 1"), "example-1-1");
    }

    #[test]
    fn empty_input() {
        assert!(sections(b"").is_empty());
    }
}
