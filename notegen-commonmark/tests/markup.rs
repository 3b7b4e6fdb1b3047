use notegen_commonmark::{MarkdownOptions, MarkdownOptionsBuilder, MarkdownProcessor};

fn render(md: &str) -> String {
  let processor = MarkdownProcessor::new(MarkdownOptions {
    highlight_code: false,
    ..Default::default()
  });
  processor.render(md).html
}

#[test]
fn test_basic_paragraph() {
  let html = render("Just a paragraph.");
  assert!(html.contains("<p>Just a paragraph.</p>"));
}

#[test]
fn test_heading_carries_anchor_id() {
  let html = render("# Getting Started\n\nbody text");
  assert!(html.contains("<h1 id=\"getting-started\">Getting Started</h1>"));
}

#[test]
fn test_every_heading_level_gets_an_id() {
  let md = "# one\n## two\n### three\n#### four\n##### five\n###### six";
  let html = render(md);
  for (level, id) in [
    (1, "one"),
    (2, "two"),
    (3, "three"),
    (4, "four"),
    (5, "five"),
    (6, "six"),
  ] {
    assert!(
      html.contains(&format!("<h{level} id=\"{id}\">")),
      "missing anchor for level {level}: {html}"
    );
  }
}

#[test]
fn test_gfm_table() {
  let md = "| a | b |\n|---|---|\n| 1 | 2 |";
  let html = render(md);
  assert!(html.contains("<table>"));
  assert!(html.contains("<td>1</td>"));
}

#[test]
fn test_gfm_strikethrough() {
  let html = render("~~gone~~");
  assert!(html.contains("<del>gone</del>"));
}

#[test]
fn test_gfm_disabled_leaves_table_as_text() {
  let processor =
    MarkdownProcessor::new(MarkdownOptionsBuilder::new().gfm(false).highlight_code(false).build());
  let html = processor.render("| a | b |\n|---|---|\n| 1 | 2 |").html;
  assert!(!html.contains("<table>"));
}

#[test]
fn test_bare_url_autolinked() {
  let html = render("visit https://example.com today");
  assert!(html.contains(r#"<a href="https://example.com">https://example.com</a>"#));
}

#[test]
fn test_inline_html_preserved() {
  let html = render("press <kbd>Enter</kbd> to continue");
  assert!(html.contains("<kbd>Enter</kbd>"));
}

#[test]
fn test_fenced_code_without_highlighting() {
  let html = render("```\nlet x = 1;\n```");
  assert!(html.contains("<pre><code>"));
  assert!(html.contains("let x = 1;"));
}

#[test]
fn test_fenced_code_with_highlighting() {
  let processor = MarkdownProcessor::new(MarkdownOptions::default());
  let html = processor.render("```rust\nfn main() {}\n```").html;
  // Syntect inlines color styles into the highlighted block
  assert!(html.contains("style="), "expected highlighted output: {html}");
  assert!(html.contains("main"));
}

#[test]
fn test_render_is_idempotent_across_calls() {
  let processor = MarkdownProcessor::new(MarkdownOptions {
    highlight_code: false,
    ..Default::default()
  });
  let md = "# Title\n\n## Usage\n\n## Usage\n\nbody";
  let first = processor.render(md);
  let second = processor.render(md);
  assert_eq!(first.html, second.html);
  assert_eq!(first.headers, second.headers);
}
