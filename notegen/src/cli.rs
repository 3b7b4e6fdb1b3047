use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};

/// Command line interface for notegen
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "notegen: turn a tree of Markdown notes into a browsable static \
           site"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Option<Commands>,

  #[command(flatten)]
  pub verbosity: Verbosity<InfoLevel>,

  /// Path to configuration file (TOML or JSON). When omitted, a
  /// `notegen.toml` in the working directory is used if present.
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,
}

/// All supported subcommands for the notegen CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new notegen configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "notegen.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Generate the static site from a notes directory.
  Build {
    /// Path to the directory containing markdown notes.
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Output directory for the generated site.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Directory of static files copied verbatim into the output.
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Path to a directory containing template overrides (default.html,
    /// index.html, subindex.html, default.css, main.js)
    #[arg(long = "template-dir")]
    template_dir: Option<PathBuf>,

    /// Path to custom stylesheet (can be specified multiple times;
    /// `.scss` files are compiled)
    #[arg(short, long, action = clap::ArgAction::Append)]
    stylesheet: Vec<PathBuf>,

    /// Title of the site, used in page headers and index pages.
    #[arg(short = 'T', long)]
    title: Option<String>,

    /// Footer text for generated pages.
    #[arg(short = 'f', long)]
    footer: Option<String>,

    /// Whether to enable syntax highlighting for code blocks.
    #[arg(long = "highlight-code", action = clap::ArgAction::SetTrue)]
    highlight_code: bool,

    /// Syntax highlighting theme name.
    #[arg(long = "highlight-theme")]
    highlight_theme: Option<String>,

    /// Serve the generated site over a local HTTP listener afterwards.
    #[cfg(feature = "serve")]
    #[arg(long, action = clap::ArgAction::SetTrue)]
    serve: bool,

    /// Port for the local HTTP listener.
    #[cfg(feature = "serve")]
    #[arg(short, long)]
    port: Option<u16>,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
