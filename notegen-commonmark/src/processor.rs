//! Core Markdown processing pipeline.
//!
//! The processor renders CommonMark to HTML through comrak, extracts an
//! ordered heading list from the AST, and injects a stable anchor id into
//! every rendered heading tag. Heading ids are derived from the heading text
//! via [`crate::utils::slugify`]; an explicit trailing `{#id}` marker in the
//! heading overrides the derived id. Duplicate derived ids within one
//! document are disambiguated with a numeric suffix so every anchor stays
//! addressable.
use std::{
  collections::HashMap,
  path::{Path, PathBuf},
  sync::{Arc, LazyLock},
};

use comrak::{
  Arena,
  Plugins,
  nodes::{AstNode, NodeHeading, NodeValue},
  options::Options,
  parse_document,
  plugins::syntect::SyntectAdapter,
};
use log::{error, trace};
use regex::Regex;
use walkdir::WalkDir;

use crate::{
  types::{Header, MarkdownResult},
  utils,
};

/// Theme used for code highlighting when none is configured.
const DEFAULT_HIGHLIGHT_THEME: &str = "InspiredGitHub";

/// Options for configuring the Markdown processor.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
  /// Enable GitHub Flavored Markdown extensions (tables, strikethrough,
  /// task lists, footnotes, autolinking of bare URLs).
  pub gfm: bool,

  /// Enable syntax highlighting for fenced code blocks.
  pub highlight_code: bool,

  /// Optional: syntax highlighting theme name.
  pub highlight_theme: Option<String>,
}

impl Default for MarkdownOptions {
  fn default() -> Self {
    Self {
      gfm:             true,
      highlight_code:  true,
      highlight_theme: None,
    }
  }
}

/// Builder for constructing [`MarkdownOptions`] with method chaining.
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptionsBuilder {
  options: MarkdownOptions,
}

impl MarkdownOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Enable or disable GitHub Flavored Markdown.
  #[must_use]
  pub const fn gfm(mut self, enabled: bool) -> Self {
    self.options.gfm = enabled;
    self
  }

  /// Enable or disable syntax highlighting.
  #[must_use]
  pub const fn highlight_code(mut self, enabled: bool) -> Self {
    self.options.highlight_code = enabled;
    self
  }

  /// Set the syntax highlighting theme.
  #[must_use]
  pub fn highlight_theme<S: Into<String>>(mut self, theme: Option<S>) -> Self {
    self.options.highlight_theme = theme.map(Into::into);
    self
  }

  /// Build the final [`MarkdownOptions`].
  #[must_use]
  pub fn build(self) -> MarkdownOptions {
    self.options
  }
}

/// Main Markdown processor.
///
/// Can be cheaply cloned since the syntax adapter is shared through an `Arc`.
/// `render` takes `&self` and keeps all per-document state local to the
/// call, so one processor instance may be reused across documents.
#[derive(Clone)]
pub struct MarkdownProcessor {
  options:        MarkdownOptions,
  syntax_adapter: Option<Arc<SyntectAdapter>>,
}

impl MarkdownProcessor {
  /// Create a new `MarkdownProcessor` with the given options.
  #[must_use]
  pub fn new(options: MarkdownOptions) -> Self {
    let syntax_adapter = if options.highlight_code {
      let theme = options
        .highlight_theme
        .as_deref()
        .unwrap_or(DEFAULT_HIGHLIGHT_THEME);
      Some(Arc::new(SyntectAdapter::new(Some(theme))))
    } else {
      None
    };

    Self {
      options,
      syntax_adapter,
    }
  }

  /// Access processor options.
  #[must_use]
  pub const fn options(&self) -> &MarkdownOptions {
    &self.options
  }

  /// Render Markdown to HTML, extracting headings and title.
  #[must_use]
  pub fn render(&self, markdown: &str) -> MarkdownResult {
    let (headers, title) = self.extract_headers(markdown);
    let html = self.convert_to_html(markdown);
    let html = apply_header_anchors(&html, &headers);

    MarkdownResult {
      html,
      headers,
      title,
    }
  }

  /// Extract headings and title from the markdown content.
  ///
  /// Heading ids are assigned in document order: an explicit trailing
  /// `{#id}` wins, otherwise the slugified heading text is used, suffixed
  /// with `-N` when the same slug was already taken in this document.
  #[must_use]
  pub fn extract_headers(
    &self,
    content: &str,
  ) -> (Vec<Header>, Option<String>) {
    let arena = Arena::new();
    let options = self.comrak_options();
    let root = parse_document(&arena, content, &options);

    let mut headers = Vec::new();
    let mut found_title = None;
    let mut seen_ids: HashMap<String, usize> = HashMap::new();

    for node in root.descendants() {
      if let NodeValue::Heading(NodeHeading { level, .. }) =
        &node.data.borrow().value
      {
        let text = extract_inline_text(node);

        let (final_text, id) =
          if let Some((body, anchor)) = split_trailing_anchor(&text) {
            // Explicit anchors are used verbatim, but still recorded so a
            // later derived id cannot silently shadow them.
            *seen_ids.entry(anchor.to_string()).or_insert(0) += 1;
            (body.to_string(), anchor.to_string())
          } else {
            let base = utils::slugify(&text);
            let count = seen_ids.entry(base.clone()).or_insert(0);
            let id = if *count == 0 {
              base.clone()
            } else {
              format!("{base}-{count}")
            };
            *count += 1;
            (text.trim().to_string(), id)
          };

        if *level == 1 && found_title.is_none() {
          found_title = Some(final_text.clone());
        }
        headers.push(Header {
          text: final_text,
          level: *level,
          id,
        });
      }
    }

    (headers, found_title)
  }

  /// Convert markdown to HTML using comrak and the configured options.
  fn convert_to_html(&self, content: &str) -> String {
    let arena = Arena::new();
    let options = self.comrak_options();
    let root = parse_document(&arena, content, &options);

    let mut html_output = String::new();
    if let Some(adapter) = self.syntax_adapter.as_deref() {
      let mut plugins = Plugins::default();
      plugins.render.codefence_syntax_highlighter = Some(adapter);
      comrak::format_html_with_plugins(
        root,
        &options,
        &mut html_output,
        &plugins,
      )
      .unwrap_or_default();
    } else {
      comrak::format_html(root, &options, &mut html_output)
        .unwrap_or_default();
    }
    html_output
  }

  /// Build comrak options from [`MarkdownOptions`].
  fn comrak_options(&self) -> Options<'_> {
    let mut options = Options::default();
    if self.options.gfm {
      options.extension.table = true;
      options.extension.footnotes = true;
      options.extension.strikethrough = true;
      options.extension.tasklist = true;
      options.extension.autolink = true;
    }
    // Inline HTML passes through untouched
    options.render.r#unsafe = true;
    // Anchors are assigned by our own pipeline, not comrak's
    options.extension.header_ids = None;
    options
  }
}

/// Split a trailing `{#id}` marker off heading text, if present and valid.
fn split_trailing_anchor(text: &str) -> Option<(&str, &str)> {
  let trimmed = text.trim_end();
  let rest = trimmed.strip_suffix('}')?;
  let start = rest.rfind("{#")?;
  let id = &rest[start + 2..];
  if id.is_empty()
    || !id
      .chars()
      .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
  {
    return None;
  }
  Some((trimmed[..start].trim_end(), id))
}

/// Inject anchor ids into rendered heading tags, in document order.
///
/// The extracted heading list and the rendered HTML come from the same
/// parse, so the Nth rendered heading corresponds to the Nth extracted
/// heading. Residual `{#id}` markers are stripped from the visible text.
fn apply_header_anchors(html: &str, headers: &[Header]) -> String {
  static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^<h([1-6])>(.*?)</h[1-6]>$").unwrap_or_else(|e| {
      error!("Failed to compile HEADING_RE regex: {e}");
      utils::never_matching_regex()
    })
  });

  let mut idx = 0;
  HEADING_RE
    .replace_all(html, |caps: &regex::Captures| {
      let level = &caps[1];
      let body = utils::clean_anchor_patterns(&caps[2]);
      let replaced = match headers.get(idx) {
        Some(header) => {
          format!("<h{level} id=\"{}\">{body}</h{level}>", header.id)
        },
        None => caps[0].to_string(),
      };
      idx += 1;
      replaced
    })
    .to_string()
}

/// Extract all inline text from a heading node.
fn extract_inline_text<'a>(node: &'a AstNode<'a>) -> String {
  let mut text = String::new();
  for child in node.children() {
    match &child.data.borrow().value {
      NodeValue::Text(t) => text.push_str(t),
      NodeValue::Code(t) => text.push_str(&t.literal),
      NodeValue::Link(..)
      | NodeValue::Emph
      | NodeValue::Strong
      | NodeValue::Strikethrough
      | NodeValue::FootnoteReference(..) => {
        text.push_str(&extract_inline_text(child));
      },
      NodeValue::HtmlInline(_) | NodeValue::Image(..) => {},
      _ => {},
    }
  }
  text
}

/// Collect all markdown files under the input directory, sorted for
/// deterministic processing order.
pub fn collect_markdown_files(input_dir: &Path) -> Vec<PathBuf> {
  let mut files = Vec::with_capacity(100);

  for entry in WalkDir::new(input_dir)
    .follow_links(true)
    .into_iter()
    .filter_map(Result::ok)
  {
    let path = entry.path();
    if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
      files.push(path.to_owned());
    }
  }

  files.sort();
  trace!("Found {} markdown files to process", files.len());
  files
}

/// Process markdown content with error recovery.
///
/// Attempts to process the markdown content and falls back to a safe
/// placeholder if rendering panics on malformed input.
#[must_use]
pub fn process_with_recovery(
  processor: &MarkdownProcessor,
  content: &str,
) -> MarkdownResult {
  match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
    processor.render(content)
  })) {
    Ok(result) => result,
    Err(panic_err) => {
      error!("Panic during markdown processing: {panic_err:?}");
      MarkdownResult {
        html: "<div class=\"error\">Critical error processing markdown \
               content</div>"
          .to_string(),

        headers: Vec::new(),
        title:   None,
      }
    },
  }
}
