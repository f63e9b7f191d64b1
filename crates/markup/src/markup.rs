//! Rendering markup strings to escape-coded text.

use crate::attribute::AttributeRegistry;
use crate::scanner::{Region, Scanner};
use crate::sgr;
use crate::style::Style;

/// How rendered regions are put back into the source string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Substitution {
    /// Replace the first occurrence of each region's matched text, in scan
    /// order. When the same literal text appears more than once, every
    /// replacement lands on the earliest remaining occurrence.
    #[default]
    FirstOccurrence,
    /// Splice each rendered region at the byte range it was scanned from.
    InPlace,
}

/// Markup compiler.
///
/// Holds the attribute registry and substitution mode. Rendering borrows the
/// renderer immutably, so one instance can be shared freely.
///
/// # Examples
///
/// ```
/// use markup::Renderer;
///
/// let renderer = Renderer::new().with_attribute("underline", 4);
/// assert_eq!(
///     renderer.render("[red underline]Hi[/]"),
///     "\x1b[31;4mHi\x1b[0m"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    registry: AttributeRegistry,
    substitution: Substitution,
}

impl Renderer {
    /// Renderer with the default registry (`bold`) and first-occurrence
    /// substitution.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, registry: AttributeRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Recognize one more attribute name.
    pub fn with_attribute(mut self, name: impl Into<String>, code: u8) -> Self {
        self.registry.register(name, code);
        self
    }

    pub fn with_substitution(mut self, substitution: Substitution) -> Self {
        self.substitution = substitution;
        self
    }

    pub fn registry(&self) -> &AttributeRegistry {
        &self.registry
    }

    pub fn substitution(&self) -> Substitution {
        self.substitution
    }

    /// Style for one scanned region.
    pub fn style_of(&self, region: &Region<'_>) -> Style {
        Style::parse_with(region.style_body, &self.registry)
    }

    /// Escape-coded replacement for one region.
    pub fn render_region(&self, region: &Region<'_>) -> String {
        let style = self.style_of(region);
        log::trace!(
            "render_region: body={:?} fg={} bg={:?} attributes={}",
            region.style_body,
            style.fg,
            style.bg.as_ref().map(ToString::to_string),
            style.attributes.len()
        );
        sgr::paint(&style, region.content)
    }

    /// Render every region of `text`. Text outside regions is unchanged.
    pub fn render(&self, text: &str) -> String {
        let regions: Vec<Region<'_>> = Scanner::new(text).collect();
        log::debug!(
            "render: {} region(s) in {} byte(s), substitution={:?}",
            regions.len(),
            text.len(),
            self.substitution
        );

        if regions.is_empty() {
            return text.to_string();
        }

        match self.substitution {
            Substitution::FirstOccurrence => self.replace_first_occurrences(text, &regions),
            Substitution::InPlace => self.splice(text, &regions),
        }
    }

    fn replace_first_occurrences(&self, text: &str, regions: &[Region<'_>]) -> String {
        let mut out = text.to_string();
        for region in regions {
            let rendered = self.render_region(region);
            out = out.replacen(region.matched, &rendered, 1);
        }
        out
    }

    fn splice(&self, text: &str, regions: &[Region<'_>]) -> String {
        let mut out = String::with_capacity(text.len() * 2);
        let mut last = 0;
        for region in regions {
            out.push_str(&text[last..region.range.start]);
            out.push_str(&self.render_region(region));
            last = region.range.end;
        }
        out.push_str(&text[last..]);
        out
    }
}

/// Render `text` with the default renderer.
///
/// ```
/// assert_eq!(
///     markup::render("[red on blue]Hello[/]"),
///     "\x1b[31;44mHello\x1b[0m"
/// );
/// assert_eq!(markup::render("no tags here"), "no tags here");
/// ```
pub fn render(text: &str) -> String {
    Renderer::new().render(text)
}
