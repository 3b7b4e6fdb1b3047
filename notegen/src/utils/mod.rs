pub mod assets;
pub mod markdown;

use std::fs;

use color_eyre::eyre::Result;
use log::info;
use notegen_commonmark::collect_markdown_files;

pub use crate::utils::{
  assets::{copy_asset_only_dirs, copy_assets},
  markdown::{RunSummary, process_markdown_files},
};
use crate::{
  config::Config,
  error::SiteError,
  html::template,
  structure::SiteStructure,
};

/// Run the full site generation pipeline.
///
/// Fatal failures (output root creation, asset copies, index pages) abort
/// with an error; per-document failures are collected into the returned
/// [`RunSummary`].
pub fn generate_site(config: &Config) -> Result<RunSummary> {
  info!("Starting site generation...");
  info!("Input directory: {}", config.input_dir.display());

  fs::create_dir_all(&config.output_dir).map_err(|e| {
    SiteError::Setup(format!(
      "failed to create output directory {}: {e}",
      config.output_dir.display()
    ))
  })?;
  info!("Output directory: {}", config.output_dir.display());

  // Shared assets first so a served site is complete even mid-run
  assets::copy_assets(config)?;
  assets::copy_asset_only_dirs(config)?;

  let files = collect_markdown_files(&config.input_dir);
  info!("Found {} markdown files", files.len());

  let summary = markdown::process_markdown_files(config, &files);

  // Index pages are derived purely from the set of relative document paths
  let rel_paths: Vec<String> = files
    .iter()
    .filter_map(|file| file.strip_prefix(&config.input_dir).ok())
    .map(|rel| rel.to_string_lossy().to_string())
    .collect();
  let structure = SiteStructure::from_relative_paths(rel_paths);
  template::write_index_pages(config, &structure)?;

  info!(
    "Site generated successfully in {}",
    config.output_dir.display()
  );
  Ok(summary)
}
