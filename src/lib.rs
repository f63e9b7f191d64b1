//! Print inline `[style]text[/]` markup as ANSI-styled terminal text.
//!
//! The markup compiler lives in the [`markup`] crate and is re-exported here.
//! This crate adds the collaborators around it: a [`Printer`](print::Printer)
//! with an optional debug channel, relative time phrases, logging setup and
//! the [`cli`] behind the `richprint` binary.
//!
//! ```
//! use richprint::{render, time_ago};
//!
//! assert_eq!(render("[red on blue]Hello[/]"), "\x1b[31;44mHello\x1b[0m");
//! assert_eq!(time_ago(0, 90), "1 minute ago");
//! ```

pub mod cli;
pub mod error;
pub mod log_init;
pub mod print;
pub mod timeago;

pub use error::{Result, RichPrintError};
pub use print::{Printer, rich_print, visible_ansi};
pub use timeago::{time_ago, time_ago_from_now};

// Re-export the compiler so callers only need one dependency
pub use markup;
pub use markup::{AttributeRegistry, Renderer, Substitution, render};
