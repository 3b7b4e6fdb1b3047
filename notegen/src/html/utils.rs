use std::{collections::HashMap, path::Path};

/// Calculate the relative path prefix needed to reach the output root from a
/// given file path. For example: "docs/subdir/file.html" returns "../",
/// "docs/subdir/nested/file.html" returns "../../".
#[must_use]
pub fn calculate_root_relative_path(file_rel_path: &Path) -> String {
  let depth = file_rel_path.components().count();
  if depth <= 1 {
    String::new() // file is at root level
  } else {
    "../".repeat(depth - 1)
  }
}

/// Generate asset and navigation paths for templates based on file location.
///
/// The parent index is always a sibling of the file itself: each directory
/// of documents carries its own `index.html`, so a plain relative link
/// resolves correctly at any depth.
#[must_use]
pub fn generate_asset_paths(
  file_rel_path: &Path,
) -> HashMap<&'static str, String> {
  let root_prefix = calculate_root_relative_path(file_rel_path);

  let mut paths = HashMap::new();
  paths.insert("stylesheet_path", format!("{root_prefix}assets/style.css"));
  paths.insert("main_js_path", format!("{root_prefix}assets/main.js"));

  // Navigation paths
  paths.insert("index_path", format!("{root_prefix}index.html"));
  paths.insert("parent_index_path", "index.html".to_string());

  paths
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn root_level_file_has_empty_prefix() {
    assert_eq!(calculate_root_relative_path(Path::new("page.html")), "");
  }

  #[test]
  fn prefix_grows_with_depth() {
    assert_eq!(
      calculate_root_relative_path(Path::new("AI/aider.html")),
      "../"
    );
    assert_eq!(
      calculate_root_relative_path(Path::new("a/b/c.html")),
      "../../"
    );
  }

  #[test]
  fn asset_paths_follow_prefix() {
    let paths = generate_asset_paths(Path::new("AI/aider.html"));
    assert_eq!(paths["stylesheet_path"], "../assets/style.css");
    assert_eq!(paths["index_path"], "../index.html");
    assert_eq!(paths["parent_index_path"], "index.html");
  }
}
