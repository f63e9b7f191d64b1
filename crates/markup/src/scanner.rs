//! Scanner for `[style]content[/]` regions.
//!
//! Finds flat, non-nested regions from left to right. A region is an opener
//! `[` + body + `]` where the body is non-empty and contains no `]`, followed
//! by non-empty content containing no `[`, followed by the closer `[/]`.
//! Anything else is left alone as literal text.

use std::ops::Range;

const OPEN: u8 = b'[';
const CLOSE: u8 = b']';
const CLOSER: &str = "[/]";

/// A region found in the source string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region<'a> {
    /// The full matched text, opener through closer.
    pub matched: &'a str,
    /// Text between the opener's brackets.
    pub style_body: &'a str,
    /// Text between the opener and the closer.
    pub content: &'a str,
    /// Byte range of `matched` in the source.
    pub range: Range<usize>,
}

/// Iterator over the regions of a string.
///
/// # Examples
///
/// ```
/// use markup::Scanner;
///
/// let regions: Vec<_> = Scanner::new("[red]Hello[/] [blue bold]World[/]").collect();
/// assert_eq!(regions.len(), 2);
/// assert_eq!(regions[0].style_body, "red");
/// assert_eq!(regions[1].content, "World");
/// ```
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    // Last `]` and `[` found; reused while still at or after the next lookup
    next_close: Option<usize>,
    next_open: Option<usize>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            next_close: None,
            next_open: None,
        }
    }

    /// Try to match a region whose opener is at `start`.
    ///
    /// Neither the body nor the content can contain the byte that ends it,
    /// so the first `]` and the next `[` after it fully decide the match.
    /// Openers are tried left to right, so lookups only move forward and each
    /// byte is searched at most once per bracket kind.
    fn match_at(&mut self, start: usize) -> Option<Region<'a>> {
        let input = self.input;
        let bytes = input.as_bytes();

        let body_start = start + 1;
        let Some(body_end) = find_from(bytes, CLOSE, body_start, &mut self.next_close) else {
            // No `]` left: no later opener can be closed either
            self.pos = input.len();
            return None;
        };
        if body_end == body_start {
            return None;
        }

        let content_start = body_end + 1;
        let Some(content_end) = find_from(bytes, OPEN, content_start, &mut self.next_open) else {
            // Every later opener shares this `]`, so none can reach a closer
            self.pos = input.len();
            return None;
        };
        if content_end == content_start {
            return None;
        }

        if !input[content_end..].starts_with(CLOSER) {
            return None;
        }

        let end = content_end + CLOSER.len();
        Some(Region {
            matched: &input[start..end],
            style_body: &input[body_start..body_end],
            content: &input[content_start..content_end],
            range: start..end,
        })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Region<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.input.len() {
            let start = self.pos + find_byte(&self.input.as_bytes()[self.pos..], OPEN)?;

            match self.match_at(start) {
                Some(region) => {
                    self.pos = region.range.end;
                    return Some(region);
                }
                None => self.pos = self.pos.max(start + 1),
            }
        }

        None
    }
}

/// First `needle` at or after `from`, reusing `cached` when it still lies ahead.
fn find_from(bytes: &[u8], needle: u8, from: usize, cached: &mut Option<usize>) -> Option<usize> {
    if let Some(at) = cached.filter(|&at| at >= from) {
        return Some(at);
    }

    let found = find_byte(&bytes[from..], needle).map(|at| from + at);
    *cached = found;
    found
}

fn find_byte(haystack: &[u8], needle: u8) -> Option<usize> {
    haystack.iter().position(|&b| b == needle)
}

/// Collect every region of `input`, in order.
pub fn scan(input: &str) -> Vec<Region<'_>> {
    Scanner::new(input).collect()
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    fn bodies(input: &str) -> Vec<(&str, &str)> {
        Scanner::new(input).map(|r| (r.style_body, r.content)).collect()
    }

    #[test]
    fn scan_plain_text() {
        assert!(scan("Hello World").is_empty());
        assert!(scan("").is_empty());
    }

    #[test]
    fn scan_single_region() {
        let regions = scan("[red on blue]Hello[/]");
        assert_eq!(
            regions,
            vec![Region {
                matched: "[red on blue]Hello[/]",
                style_body: "red on blue",
                content: "Hello",
                range: 0..21,
            }]
        );
    }

    #[test]
    fn scan_regions_in_order() {
        assert_eq!(
            bodies("a [red]b[/] c [green]d[/] e"),
            vec![("red", "b"), ("green", "d")]
        );
    }

    #[test]
    fn scan_unterminated_opener() {
        assert!(scan("[red]Hello").is_empty());
        assert!(scan("[red Hello[/]").is_empty());
        assert!(scan("[red]Hello[/").is_empty());
    }

    #[test]
    fn scan_rejects_empty_body_and_content() {
        assert!(scan("[]Hello[/]").is_empty());
        assert!(scan("[red][/]").is_empty());
    }

    #[test]
    fn scan_nearest_closer() {
        assert_eq!(bodies("[red]a[/]b[/]"), vec![("red", "a")]);
    }

    #[test]
    fn scan_retries_after_failed_opener() {
        // "[a]" has empty content, so the scan resumes and finds "[b]c[/]"
        assert_eq!(bodies("[a][b]c[/]"), vec![("b", "c")]);
    }

    #[test]
    fn scan_nested_opener_is_not_nesting() {
        // The outer opener's content would contain '[', so only the inner matches
        assert_eq!(bodies("[bold][red]x[/][/]"), vec![("red", "x")]);
    }

    #[test]
    fn scan_body_may_contain_open_bracket() {
        assert_eq!(bodies("[[red]x[/]"), vec![("[red", "x")]);
    }

    #[test]
    fn scan_content_may_contain_close_bracket_and_newlines() {
        assert_eq!(bodies("[red]a]\nb[/]"), vec![("red", "a]\nb")]);
    }

    #[test]
    fn scan_unicode() {
        let regions = scan("→ [cyan]日本語[/] ←");
        assert_eq!(regions[0].content, "日本語");
        assert_eq!(&"→ [cyan]日本語[/] ←"[regions[0].range.clone()], "[cyan]日本語[/]");
    }

    #[test]
    fn scan_many_unclosed_openers_is_linear() {
        let n = 100_000;
        let started = Instant::now();

        let brackets = "[".repeat(n);
        assert!(scan(&brackets).is_empty());

        let mut unclosed = "[x".repeat(n);
        unclosed.push(']');
        assert!(scan(&unclosed).is_empty());

        let mut empty_contents = "[a]".repeat(n);
        empty_contents.push_str("[b]c[/]");
        assert_eq!(bodies(&empty_contents), vec![("b", "c")]);

        let mut no_closer = "[a]b".repeat(n);
        no_closer.push_str("[c]d[/]");
        assert_eq!(bodies(&no_closer), vec![("c", "d")]);

        assert!(
            started.elapsed() < Duration::from_secs(2),
            "scan took {:?}",
            started.elapsed()
        );
    }

    #[test]
    fn cached_brackets_do_not_change_matches() {
        assert_eq!(
            bodies("[a [b]c[/] [[d]e[/] [f]]g[/] [h"),
            vec![("a [b", "c"), ("[d", "e"), ("f", "]g")]
        );
    }
}
