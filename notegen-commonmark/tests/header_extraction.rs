use notegen_commonmark::{Header, MarkdownOptions, MarkdownProcessor};

/// Extract headers from markdown using the actual processing pipeline.
fn extract_headers_from_markdown(md: &str) -> Vec<Header> {
  let processor = MarkdownProcessor::new(MarkdownOptions {
    highlight_code: false,
    ..Default::default()
  });
  let (headers, _title) = processor.extract_headers(md);
  headers
}

#[test]
fn test_plain_text_header() {
  let md = "# Simple Header";
  let headers = extract_headers_from_markdown(md);
  assert_eq!(headers.len(), 1);
  assert_eq!(headers[0].text, "Simple Header");
  assert_eq!(headers[0].level, 1);
  assert_eq!(headers[0].id, "simple-header");
}

#[test]
fn test_header_with_inline_code() {
  let md = "# Install with `cargo`";
  let headers = extract_headers_from_markdown(md);
  assert_eq!(headers.len(), 1);
  assert_eq!(headers[0].text, "Install with cargo");
}

#[test]
fn test_header_with_link() {
  let md = "# See [the docs](https://example.com)";
  let headers = extract_headers_from_markdown(md);
  assert_eq!(headers.len(), 1);
  assert_eq!(headers[0].text, "See the docs");
}

#[test]
fn test_header_with_emphasis_and_strong() {
  let md = "# This is *important* and **bold**";
  let headers = extract_headers_from_markdown(md);
  assert_eq!(headers.len(), 1);
  assert_eq!(headers[0].text, "This is important and bold");
}

#[test]
fn test_multiple_headers_various_levels() {
  let md = r"
# First *header*
## Second with [link](#)
### Third with `code`
";
  let headers = extract_headers_from_markdown(md);
  assert_eq!(headers.len(), 3);
  assert_eq!(headers[0].text, "First header");
  assert_eq!(headers[1].text, "Second with link");
  assert_eq!(headers[2].text, "Third with code");
  assert_eq!(headers[1].level, 2);
}

#[test]
fn test_slug_is_deterministic() {
  let first = extract_headers_from_markdown("## Getting Started");
  let second = extract_headers_from_markdown("## Getting Started");
  assert_eq!(first[0].id, "getting-started");
  assert_eq!(first[0].id, second[0].id);
}

#[test]
fn test_duplicate_headers_disambiguated() {
  let md = "## Usage\n\ntext\n\n## Usage";
  let headers = extract_headers_from_markdown(md);
  assert_eq!(headers[0].id, "usage");
  assert_eq!(headers[1].id, "usage-1");
}

#[test]
fn test_explicit_anchor_wins() {
  let md = "## Advanced Setup {#advanced}";
  let headers = extract_headers_from_markdown(md);
  assert_eq!(headers[0].id, "advanced");
  assert_eq!(headers[0].text, "Advanced Setup");
}

#[test]
fn test_derived_id_does_not_shadow_explicit() {
  let md = "## Intro {#overview}\n\n## Overview";
  let headers = extract_headers_from_markdown(md);
  assert_eq!(headers[0].id, "overview");
  assert_eq!(headers[1].id, "overview-1");
}

#[test]
fn test_title_is_first_h1() {
  let processor = MarkdownProcessor::new(MarkdownOptions {
    highlight_code: false,
    ..Default::default()
  });
  let (_, title) = processor.extract_headers("## sub\n\n# Real Title\n\n# Later");
  assert_eq!(title.as_deref(), Some("Real Title"));
}
