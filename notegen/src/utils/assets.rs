//! Shared asset emission and verbatim copying of static content.
use std::{ffi::OsStr, fs, io, path::Path};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::{config::Config, error::SiteError};

/// Template constants for default assets
const DEFAULT_CSS: &str = include_str!("../../templates/default.css");
const MAIN_JS: &str = include_str!("../../templates/main.js");

/// Extensions recognized as image files when classifying asset-only
/// directories.
const IMAGE_EXTENSIONS: &[&str] =
  &["png", "jpg", "jpeg", "gif", "svg", "webp", "bmp"];

/// Whether a path names an image file, by extension, case-insensitive.
#[must_use]
pub fn is_image_file(path: &Path) -> bool {
  path
    .extension()
    .and_then(OsStr::to_str)
    .is_some_and(|ext| {
      IMAGE_EXTENSIONS
        .iter()
        .any(|image_ext| ext.eq_ignore_ascii_case(image_ext))
    })
}

/// Whether a directory contains only image files, recursively.
///
/// An empty directory is never asset-only. The check short-circuits on the
/// first disqualifying entry.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn is_asset_only_dir(dir: &Path) -> io::Result<bool> {
  let mut has_entries = false;

  for entry in fs::read_dir(dir)? {
    let entry = entry?;
    has_entries = true;

    let file_type = entry.file_type()?;
    if file_type.is_dir() {
      if !is_asset_only_dir(&entry.path())? {
        return Ok(false);
      }
    } else if !is_image_file(&entry.path()) {
      return Ok(false);
    }
  }

  Ok(has_entries)
}

/// Copy every asset-only directory under the input root into the mirrored
/// output location.
///
/// Once a directory qualifies, its subtree is copied in one shot and not
/// re-examined.
///
/// # Errors
///
/// Returns an error if classification or copying fails.
pub fn copy_asset_only_dirs(config: &Config) -> Result<(), SiteError> {
  let mut walker = WalkDir::new(&config.input_dir).min_depth(1).into_iter();

  loop {
    let entry = match walker.next() {
      None => break,
      Some(Err(e)) => return Err(SiteError::Copy(e.to_string())),
      Some(Ok(entry)) => entry,
    };

    if !entry.file_type().is_dir() {
      continue;
    }

    let dir = entry.path();
    if is_asset_only_dir(dir)? {
      let rel = dir.strip_prefix(&config.input_dir).map_err(|e| {
        SiteError::Copy(format!(
          "asset directory {} escapes input root: {e}",
          dir.display()
        ))
      })?;
      let dest_parent = rel.parent().map_or_else(
        || config.output_dir.clone(),
        |parent| config.output_dir.join(parent),
      );

      fs::create_dir_all(&dest_parent)?;
      let options = fs_extra::dir::CopyOptions::new().overwrite(true);
      fs_extra::dir::copy(dir, &dest_parent, &options)?;
      debug!(
        "Copied asset-only directory {} -> {}",
        dir.display(),
        dest_parent.display()
      );

      walker.skip_current_dir();
    }
  }

  Ok(())
}

/// Copies all shared assets (CSS, JS, static directory) to the output
/// directory.
///
/// This includes:
/// - The generated stylesheet (default or template/custom)
/// - main.js for the default templates
/// - The configured static directory, copied verbatim; a missing static
///   directory is a warning, not an error
///
/// # Errors
///
/// Returns an error if any asset cannot be read, generated, or written.
pub fn copy_assets(config: &Config) -> Result<(), SiteError> {
  let assets_dir = config.output_dir.join("assets");
  fs::create_dir_all(&assets_dir)?;

  let css = generate_css(config)?;
  fs::write(assets_dir.join("style.css"), css)?;

  copy_template_asset(config, &assets_dir, "main.js", MAIN_JS)?;
  copy_static_dir(config)?;

  Ok(())
}

/// Copies a template asset to the assets directory, allowing user override
/// if present.
fn copy_template_asset(
  config: &Config,
  assets_dir: &Path,
  filename: &str,
  fallback_content: &str,
) -> Result<(), SiteError> {
  let content = if let Some(path) = config.get_template_file(filename) {
    if path.exists() {
      fs::read_to_string(&path)?
    } else {
      fallback_content.to_string()
    }
  } else {
    fallback_content.to_string()
  };

  fs::write(assets_dir.join(filename), content)?;
  Ok(())
}

/// Copies the configured static directory verbatim into the output root.
fn copy_static_dir(config: &Config) -> Result<(), SiteError> {
  if let Some(static_dir) = &config.static_dir {
    if !static_dir.exists() {
      warn!(
        "Static directory not found at {}, skipping copy",
        static_dir.display()
      );
      return Ok(());
    }

    debug!("Copying static files from {}", static_dir.display());
    let options = fs_extra::dir::CopyOptions::new().overwrite(true);
    fs_extra::dir::copy(static_dir, &config.output_dir, &options)?;
  }
  Ok(())
}

/// Generates the combined CSS for the site output.
///
/// This includes the default or template CSS plus any custom stylesheets
/// from the configuration, with SCSS compiled on the fly.
fn generate_css(config: &Config) -> Result<String, SiteError> {
  let mut combined_css = if let Some(path) =
    config.get_template_file("default.css")
  {
    if path.exists() {
      fs::read_to_string(&path)?
    } else {
      String::from(DEFAULT_CSS)
    }
  } else {
    String::from(DEFAULT_CSS)
  };

  for (index, stylesheet_path) in config.stylesheet_paths.iter().enumerate() {
    if !stylesheet_path.exists() {
      warn!(
        "Stylesheet not found, skipping: {}",
        stylesheet_path.display()
      );
      continue;
    }

    let content = fs::read_to_string(stylesheet_path)?;
    let processed_content =
      if stylesheet_path.extension().is_some_and(|ext| ext == "scss") {
        grass::from_string(content, &grass::Options::default()).map_err(
          |e| {
            SiteError::Template(format!(
              "failed to compile SCSS stylesheet {}: {e}",
              stylesheet_path.display()
            ))
          },
        )?
      } else {
        content
      };

    combined_css.push_str("\n\n/* Custom Stylesheet ");
    combined_css.push_str(&(index + 1).to_string());
    combined_css.push_str(": ");
    combined_css.push_str(&stylesheet_path.display().to_string());
    combined_css.push_str(" */\n");
    combined_css.push_str(&processed_content);
  }

  Ok(combined_css)
}
