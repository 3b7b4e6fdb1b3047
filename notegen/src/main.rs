use std::fs;

use color_eyre::eyre::{Context, Result, bail};
use log::info;

mod cli;
mod config;
mod error;
mod html;
#[cfg(feature = "serve")]
mod serve;
mod structure;
mod utils;

use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(cli.verbosity.log_level_filter())
    .write_style(env_logger::WriteStyle::Always)
    .init();

  if let Some(Commands::Init {
    output,
    format,
    force,
  }) = &cli.command
  {
    if output.exists() && !force {
      bail!(
        "Configuration file already exists: {}. Use --force to overwrite.",
        output.display()
      );
    }

    if let Some(parent) = output.parent() {
      if !parent.exists() {
        fs::create_dir_all(parent).wrap_err_with(|| {
          format!("Failed to create directory: {}", parent.display())
        })?;
      }
    }

    Config::generate_default_config(format, output).wrap_err_with(|| {
      format!(
        "Failed to generate configuration file: {}",
        output.display()
      )
    })?;

    info!(
      "Configuration file created: {}. Edit it to customize your site.",
      output.display()
    );
    return Ok(());
  }

  let config = Config::load(&cli)?;

  let summary = utils::generate_site(&config)?;
  summary.log();

  #[cfg(feature = "serve")]
  if config.serve {
    serve::serve_site(&config.output_dir, config.port)?;
  }

  Ok(())
}
