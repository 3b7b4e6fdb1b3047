//! Directory-structure indexing for index-page generation.
//!
//! Builds a map from every ancestor directory of every document to the
//! files directly inside it and its direct subdirectory names. The map is
//! rebuilt from scratch on every run and drives the per-directory index
//! pages: one page per key, plus the root index listing top-level
//! directories.
use std::collections::{BTreeMap, BTreeSet};

/// Direct contents of one directory in the input tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirEntry {
  /// Document filenames directly inside this directory, sorted.
  pub files: Vec<String>,

  /// Names of direct child directories.
  pub subdirs: BTreeSet<String>,
}

/// Map from relative directory path to its direct contents.
///
/// Keys use `/` as the separator regardless of platform; incoming paths are
/// canonicalized before insertion since paths assembled from raw filesystem
/// traversal may mix separators. Every ancestor of every inserted document
/// path gets exactly one entry, and each ancestor's parent lists it in
/// `subdirs`, transitively up to the top level.
#[derive(Debug, Default, Clone)]
pub struct SiteStructure {
  entries:    BTreeMap<String, DirEntry>,
  root_files: Vec<String>,
}

impl SiteStructure {
  /// Build the structure map from document paths relative to the input
  /// root.
  pub fn from_relative_paths<I, S>(paths: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut structure = Self::default();
    for path in paths {
      structure.insert(path.as_ref());
    }
    for entry in structure.entries.values_mut() {
      entry.files.sort();
    }
    structure.root_files.sort();
    structure
  }

  /// Register one document path, creating entries for all its ancestors.
  fn insert(&mut self, rel_path: &str) {
    let mut parts: Vec<&str> = rel_path
      .split(['/', '\\'])
      .filter(|segment| !segment.is_empty())
      .collect();

    let Some(file_name) = parts.pop() else {
      return;
    };

    // Walk the ancestor chain left to right, linking each level to its
    // parent as we go.
    let mut current = String::new();
    for part in &parts {
      let parent = current.clone();
      if current.is_empty() {
        current.push_str(part);
      } else {
        current.push('/');
        current.push_str(part);
      }

      self.entries.entry(current.clone()).or_default();

      if !parent.is_empty() {
        self
          .entries
          .entry(parent)
          .or_default()
          .subdirs
          .insert((*part).to_string());
      }
    }

    if parts.is_empty() {
      // Document sits at the input root; it belongs to no directory entry
      if !self.root_files.iter().any(|f| f == file_name) {
        self.root_files.push(file_name.to_string());
      }
    } else {
      let dir_path = parts.join("/");
      let entry = self.entries.entry(dir_path).or_default();
      if !entry.files.iter().any(|f| f == file_name) {
        entry.files.push(file_name.to_string());
      }
    }
  }

  /// All directory entries, keyed by canonical relative path, in sorted
  /// key order.
  pub fn entries(&self) -> impl Iterator<Item = (&str, &DirEntry)> {
    self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
  }

  /// Look up the entry for one directory path.
  #[must_use]
  pub fn get(&self, dir_path: &str) -> Option<&DirEntry> {
    self.entries.get(dir_path)
  }

  /// Directories with no parent: keys containing no separator.
  pub fn top_level_dirs(&self) -> impl Iterator<Item = &str> {
    self
      .entries
      .keys()
      .map(String::as_str)
      .filter(|key| !key.contains('/'))
  }

  /// Documents that sit directly at the input root, sorted.
  #[must_use]
  pub fn root_files(&self) -> &[String] {
    &self.root_files
  }

  /// Number of directory entries in the map.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the map holds no directory entries.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
