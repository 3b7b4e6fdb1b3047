//! Per-document rendering and emission.
use std::{
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result};
use log::{debug, error, info, warn};
use notegen_commonmark::{MarkdownOptionsBuilder, MarkdownProcessor};

use crate::{config::Config, html::template};

/// Outcome of one generation run: documents emitted and documents that
/// failed, with their diagnostics. Per-document failures never abort the
/// batch and never affect the process exit code.
#[derive(Debug, Default)]
pub struct RunSummary {
  /// Number of documents successfully written.
  pub rendered: usize,

  /// Source path and diagnostic for every document that failed.
  pub failed: Vec<(PathBuf, String)>,
}

impl RunSummary {
  /// Whether every document was emitted.
  #[must_use]
  pub fn is_clean(&self) -> bool {
    self.failed.is_empty()
  }

  /// Report the run outcome to the operator log.
  pub fn log(&self) {
    info!("Rendered {} documents", self.rendered);
    for (path, diagnostic) in &self.failed {
      warn!("Skipped {}: {diagnostic}", path.display());
    }
  }
}

/// Creates a markdown processor from the notegen configuration.
#[must_use]
pub fn create_processor(config: &Config) -> MarkdownProcessor {
  MarkdownProcessor::new(
    MarkdownOptionsBuilder::new()
      .gfm(true)
      .highlight_code(config.highlight_code)
      .highlight_theme(config.highlight_theme.as_deref())
      .build(),
  )
}

/// Renders all markdown files and writes the HTML output tree.
///
/// A failure reading, rendering, or writing one document is logged and
/// recorded in the returned [`RunSummary`]; remaining documents continue.
#[must_use]
pub fn process_markdown_files(
  config: &Config,
  files: &[PathBuf],
) -> RunSummary {
  let processor = create_processor(config);
  let mut summary = RunSummary::default();

  for file_path in files {
    match process_file(config, &processor, file_path) {
      Ok(()) => summary.rendered += 1,
      Err(err) => {
        error!("Error processing file {}: {err:#}", file_path.display());
        summary
          .failed
          .push((file_path.clone(), format!("{err:#}")));
      },
    }
  }

  summary
}

/// Render one document and write it to its mirrored output location.
fn process_file(
  config: &Config,
  processor: &MarkdownProcessor,
  file_path: &Path,
) -> Result<()> {
  let content = fs::read_to_string(file_path).wrap_err_with(|| {
    format!("Failed to read markdown file: {}", file_path.display())
  })?;

  let result = processor.render(&content);

  let rel_path =
    file_path.strip_prefix(&config.input_dir).wrap_err_with(|| {
      format!(
        "Failed to determine relative path for {}",
        file_path.display()
      )
    })?;

  let mut output_rel = rel_path.to_path_buf();
  output_rel.set_extension("html");

  // Page title is the relative path with the extension stripped
  let mut title_path = rel_path.to_path_buf();
  title_path.set_extension("");
  let title = title_path.to_string_lossy().replace('\\', "/");

  let html = template::render_page(
    config,
    &result.html,
    &title,
    &result.headers,
    &output_rel,
  )?;

  let output_path = config.output_dir.join(&output_rel);
  if let Some(parent) = output_path.parent() {
    fs::create_dir_all(parent).wrap_err_with(|| {
      format!("Failed to create output directory: {}", parent.display())
    })?;
  }

  fs::write(&output_path, html).wrap_err_with(|| {
    format!("Failed to write output HTML: {}", output_path.display())
  })?;

  debug!(
    "Processed: {} -> {}",
    file_path.display(),
    output_path.display()
  );
  Ok(())
}

/// Extracts the page title from a markdown file.
///
/// This attempts to extract the first heading as the title, falling back to
/// the file name if no heading is found or the file cannot be read.
#[must_use]
pub fn extract_page_title(file_path: &Path, html_path: &Path) -> String {
  let default_title = html_path
    .file_stem()
    .unwrap_or_default()
    .to_string_lossy()
    .to_string();

  match fs::read_to_string(file_path) {
    Ok(content) => {
      notegen_commonmark::utils::extract_markdown_title(&content)
        .unwrap_or(default_title)
    },
    Err(_) => default_title,
  }
}
