//! Small text utilities shared by the processor and its consumers.
use std::sync::OnceLock;

use comrak::{
  Arena,
  nodes::NodeValue,
  options::Options,
  parse_document,
};
use regex::Regex;

/// Slugify a string for use as an anchor ID.
/// Converts to lowercase, replaces non-alphanumeric characters with dashes,
/// and trims leading/trailing dashes.
#[must_use]
pub fn slugify(text: &str) -> String {
  text
    .to_lowercase()
    .replace(|c: char| !c.is_alphanumeric() && c != '-' && c != '_', "-")
    .trim_matches('-')
    .to_string()
}

/// Extract the first heading from markdown content as the page title.
/// Returns None if no heading is found.
#[must_use]
pub fn extract_markdown_title(content: &str) -> Option<String> {
  let arena = Arena::new();
  let mut options = Options::default();
  options.extension.table = true;
  options.extension.strikethrough = true;
  options.extension.tasklist = true;
  options.render.r#unsafe = true;

  let root = parse_document(&arena, content, &options);

  for node in root.descendants() {
    if let NodeValue::Heading(_) = &node.data.borrow().value {
      let mut text = String::new();
      for child in node.children() {
        if let NodeValue::Text(t) = &child.data.borrow().value {
          text.push_str(t);
        }
        if let NodeValue::Code(t) = &child.data.borrow().value {
          text.push_str(&t.literal);
        }
      }
      let clean = clean_anchor_patterns(&text);
      if !clean.is_empty() {
        return Some(clean);
      }
    }
  }
  None
}

/// Clean anchor patterns from text (removes trailing {#anchor-id} markers).
/// Useful for cleaning titles and navigation labels.
#[must_use]
pub fn clean_anchor_patterns(text: &str) -> String {
  static ANCHOR_PATTERN: OnceLock<Regex> = OnceLock::new();
  let anchor_pattern = ANCHOR_PATTERN.get_or_init(|| {
    Regex::new(r"\s*\{#[a-zA-Z0-9_-]+\}\s*$")
      .unwrap_or_else(|_| never_matching_regex())
  });
  anchor_pattern.replace_all(text.trim(), "").to_string()
}

/// Create a regex that never matches anything.
///
/// This is used as a fallback pattern when a regex fails to compile. It will
/// never match any input, which is safer than a trivial pattern like `^$`
/// which would match empty strings.
///
/// # Panics
///
/// Panics if the fallback regex pattern `r"^\b$"` fails to compile, which
/// should never happen.
#[must_use]
pub fn never_matching_regex() -> Regex {
  // This pattern asserts something impossible and is guaranteed to be valid
  Regex::new(r"[^\s\S]").unwrap_or_else(|_| {
    #[allow(clippy::unwrap_used, reason = "Pattern is a valid literal")]
    Regex::new(r"^\b$").unwrap()
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn slugify_lowercases_and_dashes() {
    assert_eq!(slugify("Getting Started"), "getting-started");
    assert_eq!(slugify("FAQ & Tips!"), "faq---tips");
    assert_eq!(slugify("  spaced  "), "spaced");
  }

  #[test]
  fn slugify_preserves_underscores() {
    assert_eq!(slugify("snake_case heading"), "snake_case-heading");
  }

  #[test]
  fn slugify_trims_dashes() {
    assert_eq!(slugify("!leading and trailing?"), "leading-and-trailing");
  }

  #[test]
  fn title_from_first_heading() {
    let md = "intro text\n\n## Second level first\n\n# Top";
    assert_eq!(
      extract_markdown_title(md).as_deref(),
      Some("Second level first")
    );
  }

  #[test]
  fn title_absent_without_headings() {
    assert_eq!(extract_markdown_title("just a paragraph"), None);
  }

  #[test]
  fn clean_anchor_strips_trailing_marker() {
    assert_eq!(clean_anchor_patterns("Setup {#custom-id}"), "Setup");
    assert_eq!(clean_anchor_patterns("No marker here"), "No marker here");
  }
}
