//! Page and index rendering through Tera templates.
//!
//! Templates are compiled in as fallbacks and can be overridden per file by
//! placing a same-named file into the configured template directory.
use std::{fs, path::Path};

use log::debug;
use notegen_commonmark::Header;
use tera::Tera;

use crate::{
  config::Config,
  error::SiteError,
  html::utils,
  structure::{DirEntry, SiteStructure},
  utils::markdown::extract_page_title,
};

// Template constants - these serve as fallbacks
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/default.html");
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const SUBINDEX_TEMPLATE: &str = include_str!("../../templates/subindex.html");

/// Render a document page.
pub fn render_page(
  config: &Config,
  content: &str,
  title: &str,
  headers: &[Header],
  rel_path: &Path,
) -> Result<String, SiteError> {
  let mut tera = Tera::default();
  let template_content =
    get_template_content(config, "default.html", DEFAULT_TEMPLATE)?;
  tera.add_raw_template("default", &template_content)?;

  // Sidebar of contents from the collected headings
  let toc = generate_toc(headers);

  // Asset and navigation paths depend on the file's depth
  let asset_paths = utils::generate_asset_paths(rel_path);

  let mut context = tera::Context::new();
  context.insert("content", content);
  context.insert("title", &html_escape::encode_text(title).to_string());
  context.insert(
    "site_title",
    &html_escape::encode_text(&config.title).to_string(),
  );
  context.insert(
    "footer_text",
    &html_escape::encode_text(&config.footer_text).to_string(),
  );
  context.insert("toc", &toc);
  insert_asset_paths(&mut context, &asset_paths);

  Ok(tera.render("default", &context)?)
}

/// Build the flat sidebar fragment: one link per heading, document order.
#[must_use]
pub fn generate_toc(headers: &[Header]) -> String {
  if headers.is_empty() {
    return String::new();
  }

  let mut toc = String::from("<ul class=\"sidebar-headings\">\n");
  for header in headers {
    toc.push_str(&format!(
      "  <li class=\"toc-level-{}\"><a href=\"#{}\">{}</a></li>\n",
      header.level,
      header.id,
      html_escape::encode_text(&header.text)
    ));
  }
  toc.push_str("</ul>");
  toc
}

/// Write the root index page and one index page per directory entry.
///
/// Index pages are written last and overwrite anything already at their
/// path, including a page rendered from a literal `index.md`.
pub fn write_index_pages(
  config: &Config,
  structure: &SiteStructure,
) -> Result<(), SiteError> {
  let root_index_path = config.output_dir.join("index.html");
  let root_html = render_root_index(config, structure)?;
  fs::write(&root_index_path, root_html).map_err(|e| {
    SiteError::Index(format!(
      "failed to write {}: {e}",
      root_index_path.display()
    ))
  })?;
  debug!("Generated root index: {}", root_index_path.display());

  for (dir_path, entry) in structure.entries() {
    let html = render_sub_index(config, dir_path, entry)?;
    let index_path = config.output_dir.join(dir_path).join("index.html");
    if let Some(parent) = index_path.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(&index_path, html).map_err(|e| {
      SiteError::Index(format!(
        "failed to write {}: {e}",
        index_path.display()
      ))
    })?;
    debug!("Generated sub-index: {}", index_path.display());
  }

  Ok(())
}

/// Render the root index page: all top-level directories plus any documents
/// sitting directly at the input root.
pub fn render_root_index(
  config: &Config,
  structure: &SiteStructure,
) -> Result<String, SiteError> {
  let mut tera = Tera::default();
  let template_content =
    get_template_content(config, "index.html", INDEX_TEMPLATE)?;
  tera.add_raw_template("index", &template_content)?;

  let mut dir_list = String::new();
  for dir in structure.top_level_dirs() {
    let escaped = html_escape::encode_text(dir);
    dir_list.push_str(&format!(
      "<div class=\"topic-box\"><a href=\"{escaped}/index.html\">{escaped}</a></div>\n"
    ));
  }

  let mut file_list = String::new();
  for file_name in structure.root_files() {
    if let Some(stem) = file_name.strip_suffix(".md") {
      let source = config.input_dir.join(file_name);
      let html_name = format!("{stem}.html");
      let label = extract_page_title(&source, Path::new(&html_name));
      file_list.push_str(&format!(
        "<li><a href=\"{html_name}\">{}</a></li>\n",
        html_escape::encode_text(&label)
      ));
    }
  }

  let mut context = tera::Context::new();
  context.insert(
    "site_title",
    &html_escape::encode_text(&config.title).to_string(),
  );
  context.insert(
    "footer_text",
    &html_escape::encode_text(&config.footer_text).to_string(),
  );
  context.insert("dir_list", &dir_list);
  context.insert("file_list", &file_list);
  context.insert("stylesheet_path", "assets/style.css");
  context.insert("main_js_path", "assets/main.js");

  Ok(tera.render("index", &context)?)
}

/// Render one per-directory index page.
pub fn render_sub_index(
  config: &Config,
  dir_path: &str,
  entry: &DirEntry,
) -> Result<String, SiteError> {
  let mut tera = Tera::default();
  let template_content =
    get_template_content(config, "subindex.html", SUBINDEX_TEMPLATE)?;
  tera.add_raw_template("subindex", &template_content)?;

  let asset_paths =
    utils::generate_asset_paths(&Path::new(dir_path).join("index.html"));

  let mut dir_list = String::new();
  for subdir in &entry.subdirs {
    let escaped = html_escape::encode_text(subdir);
    dir_list.push_str(&format!(
      "<li class=\"dir\"><a href=\"{escaped}/\">{escaped}/</a></li>\n"
    ));
  }

  let mut file_list = String::new();
  for file_name in &entry.files {
    if let Some(stem) = file_name.strip_suffix(".md") {
      file_list.push_str(&format!(
        "<li><a href=\"{stem}.html\">{}</a></li>\n",
        html_escape::encode_text(stem)
      ));
    }
  }

  let mut context = tera::Context::new();
  context.insert(
    "dir_path",
    &html_escape::encode_text(dir_path).to_string(),
  );
  context.insert(
    "site_title",
    &html_escape::encode_text(&config.title).to_string(),
  );
  context.insert(
    "footer_text",
    &html_escape::encode_text(&config.footer_text).to_string(),
  );
  context.insert("dir_list", &dir_list);
  context.insert("file_list", &file_list);
  insert_asset_paths(&mut context, &asset_paths);

  Ok(tera.render("subindex", &context)?)
}

/// Read a template override from the template directory, falling back to the
/// compiled-in default.
fn get_template_content(
  config: &Config,
  filename: &str,
  fallback: &str,
) -> Result<String, SiteError> {
  if let Some(path) = config.get_template_file(filename) {
    if path.exists() {
      return fs::read_to_string(&path).map_err(|e| {
        SiteError::Template(format!(
          "failed to read template {}: {e}",
          path.display()
        ))
      });
    }
  }
  Ok(fallback.to_string())
}

/// Insert the shared asset/navigation path variables into a Tera context.
fn insert_asset_paths(
  context: &mut tera::Context,
  asset_paths: &std::collections::HashMap<&'static str, String>,
) {
  context.insert(
    "stylesheet_path",
    asset_paths
      .get("stylesheet_path")
      .map_or("assets/style.css", String::as_str),
  );
  context.insert(
    "main_js_path",
    asset_paths
      .get("main_js_path")
      .map_or("assets/main.js", String::as_str),
  );
  context.insert(
    "index_path",
    asset_paths
      .get("index_path")
      .map_or("index.html", String::as_str),
  );
  context.insert(
    "parent_index_path",
    asset_paths
      .get("parent_index_path")
      .map_or("index.html", String::as_str),
  );
}
