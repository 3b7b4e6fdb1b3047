//! Local preview server for the generated site.
use std::path::Path;

use axum::Router;
use color_eyre::eyre::{Context, Result};
use log::info;
use tower_http::services::ServeDir;

/// Serve the output directory over a local HTTP listener.
///
/// Blocks until the process is interrupted.
///
/// # Errors
///
/// Returns an error if the runtime cannot start or the address cannot be
/// bound.
pub fn serve_site(output_dir: &Path, port: u16) -> Result<()> {
  let runtime = tokio::runtime::Builder::new_multi_thread()
    .enable_all()
    .build()
    .wrap_err("Failed to start async runtime")?;

  runtime.block_on(async {
    let app = Router::new().fallback_service(ServeDir::new(output_dir));

    let addr = format!("127.0.0.1:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
      .await
      .wrap_err_with(|| format!("Failed to bind {addr}"))?;

    info!(
      "Serving {} at http://{addr}",
      output_dir.display()
    );
    axum::serve(listener, app).await.wrap_err("Server error")
  })
}
