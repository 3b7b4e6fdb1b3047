use std::{
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, Commands};

// Defaults are functions rather than literals so that non-const values such
// as PathBuf can be used both by serde and by the manual Default impl.
fn default_input_dir() -> PathBuf {
  PathBuf::from("notes")
}

fn default_output_dir() -> PathBuf {
  PathBuf::from("dist")
}

fn default_static_dir() -> Option<PathBuf> {
  Some(PathBuf::from("static"))
}

fn default_title() -> String {
  "notegen site".to_string()
}

fn default_footer_text() -> String {
  "Generated with notegen".to_string()
}

const fn default_true() -> bool {
  true
}

const fn default_port() -> u16 {
  8080
}

/// Configuration options for notegen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  /// Input directory containing markdown notes
  #[serde(default = "default_input_dir")]
  pub input_dir: PathBuf,

  /// Output directory for the generated site
  #[serde(default = "default_output_dir")]
  pub output_dir: PathBuf,

  /// Directory of static files copied verbatim into the output. A missing
  /// directory is skipped with a warning.
  #[serde(default = "default_static_dir")]
  pub static_dir: Option<PathBuf>,

  /// Path to a directory containing template overrides
  #[serde(default)]
  pub template_dir: Option<PathBuf>,

  /// Paths to custom stylesheets appended to the generated style.css
  #[serde(default)]
  pub stylesheet_paths: Vec<PathBuf>,

  /// Title of the site
  #[serde(default = "default_title")]
  pub title: String,

  /// Text to be inserted in the footer
  #[serde(default = "default_footer_text")]
  pub footer_text: String,

  /// Whether to enable syntax highlighting for code blocks
  #[serde(default = "default_true")]
  pub highlight_code: bool,

  /// Syntax highlighting theme name
  #[serde(default)]
  pub highlight_theme: Option<String>,

  /// Serve the generated site after a build (requires the `serve` feature)
  #[serde(default)]
  pub serve: bool,

  /// Port for the local HTTP listener
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      input_dir:        default_input_dir(),
      output_dir:       default_output_dir(),
      static_dir:       default_static_dir(),
      template_dir:     None,
      stylesheet_paths: Vec::new(),
      title:            default_title(),
      footer_text:      default_footer_text(),
      highlight_code:   true,
      highlight_theme:  None,
      serve:            false,
      port:             default_port(),
    }
  }
}

impl Config {
  /// Create a new configuration from a file.
  /// Only TOML and JSON are supported for the time being.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).with_context(|| {
      format!("Failed to read config file: {}", path.display())
    })?;

    path.extension().map_or_else(
      || {
        Err(eyre!(
          "Config file has no extension: {}",
          path.display()
        ))
      },
      |ext| {
        match ext.to_str().unwrap_or("").to_lowercase().as_str() {
          "json" => {
            serde_json::from_str(&content).with_context(|| {
              format!("Failed to parse JSON config from {}", path.display())
            })
          },
          "toml" => {
            toml::from_str(&content).with_context(|| {
              format!("Failed to parse TOML config from {}", path.display())
            })
          },
          _ => {
            Err(eyre!(
              "Unsupported config file format: {}",
              path.display()
            ))
          },
        }
      },
    )
  }

  /// Load config from file and CLI arguments.
  ///
  /// CLI values take precedence over config file values, which take
  /// precedence over built-in defaults.
  pub fn load(cli: &Cli) -> Result<Self> {
    let mut config = if let Some(config_path) = &cli.config_file {
      Self::from_file(config_path).with_context(|| {
        format!("Failed to load config from {}", config_path.display())
      })?
    } else if let Some(discovered_config) = Self::find_config_file() {
      log::info!(
        "Using discovered config file: {}",
        discovered_config.display()
      );
      Self::from_file(&discovered_config).with_context(|| {
        format!(
          "Failed to load discovered config from {}",
          discovered_config.display()
        )
      })?
    } else {
      Self::default()
    };

    config.merge_with_cli(cli);

    // Validate input_dir before any filesystem work happens
    if !config.input_dir.exists() {
      return Err(eyre!(
        "Input directory does not exist: {}",
        config.input_dir.display()
      ));
    }

    Ok(config)
  }

  /// Look for a config file in the standard locations.
  fn find_config_file() -> Option<PathBuf> {
    ["notegen.toml", ".notegen.toml", "notegen.json"]
      .iter()
      .map(PathBuf::from)
      .find(|candidate| candidate.exists())
  }

  /// Merge CLI arguments into this config, prioritizing CLI values when
  /// present.
  pub fn merge_with_cli(&mut self, cli: &Cli) {
    if let Some(Commands::Build {
      input_dir,
      output_dir,
      static_dir,
      template_dir,
      stylesheet,
      title,
      footer,
      highlight_code,
      highlight_theme,
      ..
    }) = &cli.command
    {
      if let Some(dir) = input_dir {
        self.input_dir.clone_from(dir);
      }
      if let Some(dir) = output_dir {
        self.output_dir.clone_from(dir);
      }
      if let Some(dir) = static_dir {
        self.static_dir = Some(dir.clone());
      }
      if let Some(dir) = template_dir {
        self.template_dir = Some(dir.clone());
      }
      if !stylesheet.is_empty() {
        self.stylesheet_paths.clone_from(stylesheet);
      }
      if let Some(title) = title {
        self.title.clone_from(title);
      }
      if let Some(footer) = footer {
        self.footer_text.clone_from(footer);
      }
      if *highlight_code {
        self.highlight_code = true;
      }
      if let Some(theme) = highlight_theme {
        self.highlight_theme = Some(theme.clone());
      }
    }

    #[cfg(feature = "serve")]
    if let Some(Commands::Build { serve, port, .. }) = &cli.command {
      if *serve {
        self.serve = true;
      }
      if let Some(port) = port {
        self.port = *port;
      }
    }
  }

  /// Resolve a template file from the configured template directory, if any.
  #[must_use]
  pub fn get_template_file(&self, filename: &str) -> Option<PathBuf> {
    self.template_dir.as_ref().map(|dir| dir.join(filename))
  }

  /// Generate a default configuration file in the requested format.
  pub fn generate_default_config(format: &str, output: &Path) -> Result<()> {
    let config = Self::default();

    let content = match format {
      "json" => {
        serde_json::to_string_pretty(&config)
          .context("Failed to serialize default config to JSON")?
      },
      _ => {
        toml::to_string_pretty(&config)
          .context("Failed to serialize default config to TOML")?
      },
    };

    fs::write(output, content).with_context(|| {
      format!("Failed to write config file: {}", output.display())
    })?;

    Ok(())
  }
}
