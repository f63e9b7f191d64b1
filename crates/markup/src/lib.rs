//! Inline markup to ANSI escape sequence compiler.
//!
//! Turns strings like `[red on blue bold]Hello[/]` into terminal escape
//! sequences, leaving every other character untouched.
//!
//! # Markup
//!
//! - `[red]text[/]` - named foreground color
//! - `[#ff8800]text[/]` or `[#f80]text[/]` - 24-bit foreground color
//! - `[white on blue]text[/]` - background color after `on`
//! - `[red bold]text[/]` - attributes after the colors
//!
//! Regions are flat: the closer is always the nearest `[/]`, and a region's
//! content cannot contain `[`. Unterminated tags are left as literal text.
//!
//! Rendering is total. Unknown color names become white, unknown attributes
//! are dropped, and malformed hex digits decode to 0.
//!
//! # Usage
//!
//! ```
//! use markup::{Renderer, Substitution, render};
//!
//! assert_eq!(
//!     render("[red on blue bold]Hello[/] [green]World[/]"),
//!     "\x1b[31;44;1mHello\x1b[0m \x1b[32mWorld\x1b[0m"
//! );
//!
//! let renderer = Renderer::new()
//!     .with_attribute("underline", 4)
//!     .with_substitution(Substitution::InPlace);
//! assert_eq!(renderer.render("[cyan underline]x[/]"), "\x1b[36;4mx\x1b[0m");
//! ```

pub mod attribute;
pub mod color;
pub mod markup;
pub mod scanner;
pub mod sgr;
pub mod style;

pub use attribute::{Attribute, AttributeRegistry};
pub use color::{Color, NamedColor, Rgb};
pub use markup::{Renderer, Substitution, render};
pub use scanner::{Region, Scanner, scan};
pub use style::Style;
