//! Writing rendered markup to output streams.

use std::io::{self, Stderr, Stdout, Write};

use markup::Renderer;

use crate::error::Result;

/// Replace every escape byte with the literal text `\x1b`, so rendered output
/// can be inspected on a terminal without being interpreted.
///
/// ```
/// use richprint::print::visible_ansi;
///
/// assert_eq!(visible_ansi("\x1b[31mhi\x1b[0m"), r"\x1b[31mhi\x1b[0m");
/// ```
pub fn visible_ansi(text: &str) -> String {
    text.replace('\x1b', r"\x1b")
}

/// Renders markup and writes it to a primary stream.
///
/// With debug enabled, the raw input and a visible form of the rendered
/// output are written to the diagnostic stream first.
pub struct Printer<W: Write, D: Write> {
    out: W,
    diag: D,
    debug: bool,
    renderer: Renderer,
}

impl Printer<Stdout, Stderr> {
    /// Printer over stdout, with diagnostics on stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, D: Write> Printer<W, D> {
    pub fn new(out: W, diag: D) -> Self {
        Self {
            out,
            diag,
            debug: false,
            renderer: Renderer::new(),
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Render `text` and write it, followed by a newline.
    pub fn print(&mut self, text: &str) -> Result<()> {
        let rendered = self.renderer.render(text);

        if self.debug {
            writeln!(self.diag, "Original text: {}", text)?;
            writeln!(
                self.diag,
                "Final text with visible ANSI: {}",
                visible_ansi(&rendered)
            )?;
            self.diag.flush()?;
        }

        writeln!(self.out, "{}", rendered)?;
        self.out.flush()?;
        Ok(())
    }

    /// Give back the underlying streams.
    pub fn into_inner(self) -> (W, D) {
        (self.out, self.diag)
    }
}

/// Render `text` to stdout, echoing debug lines to stderr when `debug` is set.
pub fn rich_print(text: &str, debug: bool) -> Result<()> {
    Printer::stdio().with_debug(debug).print(text)
}
