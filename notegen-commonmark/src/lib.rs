//! # notegen-commonmark
//!
//! CommonMark rendering for notegen. Wraps comrak with the pieces a static
//! site generator needs on top of plain HTML conversion: an ordered heading
//! list with stable anchor ids, title extraction, and syntax-highlighted
//! code blocks.
//!
//! ## Quick Start
//!
//! ```rust
//! use notegen_commonmark::{MarkdownOptions, MarkdownProcessor};
//!
//! let processor = MarkdownProcessor::new(MarkdownOptions::default());
//! let result = processor.render("# Hello World\n\nThis is **bold** text.");
//!
//! assert!(result.html.contains("<strong>bold</strong>"));
//! assert_eq!(result.headers[0].id, "hello-world");
//! assert_eq!(result.title.as_deref(), Some("Hello World"));
//! ```
//!
//! All rendering state is local to each [`MarkdownProcessor::render`] call,
//! so a single processor can be shared or cloned across documents freely.

mod processor;
mod types;
pub mod utils;

pub use crate::{
  processor::{
    MarkdownOptions,
    MarkdownOptionsBuilder,
    MarkdownProcessor,
    collect_markdown_files,
    process_with_recovery,
  },
  types::{Header, MarkdownResult},
};
