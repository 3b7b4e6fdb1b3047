use std::path::{Path, PathBuf};

use notegen::{
  config::Config,
  html::template,
  structure::{DirEntry, SiteStructure},
};
use notegen_commonmark::Header;

fn test_config() -> Config {
  Config {
    input_dir: PathBuf::from("does-not-matter"),
    static_dir: None,
    highlight_code: false,
    ..Default::default()
  }
}

fn header(level: u8, text: &str, id: &str) -> Header {
  Header {
    text: text.to_string(),
    level,
    id: id.to_string(),
  }
}

#[test]
fn toc_links_headings_in_document_order() {
  let headers = vec![
    header(1, "Intro", "intro"),
    header(2, "Getting Started", "getting-started"),
    header(2, "Usage", "usage"),
  ];
  let toc = template::generate_toc(&headers);

  let intro = toc.find("#intro").unwrap();
  let started = toc.find("#getting-started").unwrap();
  let usage = toc.find("#usage").unwrap();
  assert!(intro < started && started < usage);
  assert!(toc.contains(r##"<a href="#getting-started">Getting Started</a>"##));
}

#[test]
fn toc_escapes_heading_text() {
  let toc = template::generate_toc(&[header(2, "a < b & c", "a-b-c")]);
  assert!(toc.contains("a &lt; b &amp; c"));
  assert!(!toc.contains("a < b & c"));
}

#[test]
fn toc_is_empty_without_headings() {
  assert_eq!(template::generate_toc(&[]), "");
}

#[test]
fn page_gets_depth_relative_asset_paths() {
  let config = test_config();
  let headers = vec![header(1, "Getting Started", "getting-started")];
  let html = template::render_page(
    &config,
    "<p>body</p>",
    "AI/aider",
    &headers,
    Path::new("AI/aider.html"),
  )
  .unwrap();

  assert!(html.contains("../assets/style.css"));
  assert!(html.contains("../assets/main.js"));
  // Parent index is always a sibling of the page itself
  assert!(html.contains(r#"<a href="index.html" class="back-btn">"#));
  assert!(html.contains(r##"<a href="#getting-started">Getting Started</a>"##));
  assert!(html.contains("<p>body</p>"));
}

#[test]
fn root_level_page_uses_bare_asset_paths() {
  let config = test_config();
  let html = template::render_page(
    &config,
    "<p>x</p>",
    "root",
    &[],
    Path::new("root.html"),
  )
  .unwrap();

  assert!(html.contains(r#"href="assets/style.css""#));
}

#[test]
fn root_index_links_top_level_dirs() {
  let config = test_config();
  let structure =
    SiteStructure::from_relative_paths(["AI/aider.md", "Rust/ownership.md"]);
  let html = template::render_root_index(&config, &structure).unwrap();

  assert!(html.contains(r#"<a href="AI/index.html">AI</a>"#));
  assert!(html.contains(r#"<a href="Rust/index.html">Rust</a>"#));
  assert!(html.contains(r#"href="assets/style.css""#));
}

#[test]
fn sub_index_lists_dirs_then_files_with_back_link() {
  let config = test_config();
  let mut entry = DirEntry::default();
  entry.files.push("aider.md".to_string());
  entry.subdirs.insert("MCP".to_string());

  let html = template::render_sub_index(&config, "AI", &entry).unwrap();

  assert!(html.contains("Index of AI"));
  assert!(html.contains(r#"<a href="MCP/">MCP/</a>"#));
  assert!(html.contains(r#"<a href="aider.html">aider</a>"#));
  assert!(html.contains(r#"<a href="../index.html" class="back-btn">"#));

  let dirs_at = html.find("Subdirectories").unwrap();
  let files_at = html.find("Files").unwrap();
  assert!(dirs_at < files_at);
}

#[test]
fn sub_index_back_link_matches_depth() {
  let config = test_config();
  let entry = DirEntry {
    files: vec!["deep.md".to_string()],
    ..Default::default()
  };

  let html =
    template::render_sub_index(&config, "one/two/three", &entry).unwrap();
  assert!(html.contains(r#"href="../../../index.html""#));
  assert!(html.contains(r#"href="../../../assets/style.css""#));
}

#[test]
fn sub_index_skips_non_markdown_files() {
  let config = test_config();
  let entry = DirEntry {
    files: vec!["doc.md".to_string(), "raw.txt".to_string()],
    ..Default::default()
  };

  let html = template::render_sub_index(&config, "misc", &entry).unwrap();
  assert!(html.contains("doc.html"));
  assert!(!html.contains("raw"));
}
