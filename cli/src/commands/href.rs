//! URL building command

use anyhow::Result;
use tracing::info;
use waypoint_core::Router;

/// Print the URL of each logical path under the configured mode and base
pub fn href_command(router: &Router, paths: &[String]) -> Result<()> {
    let config = router.config();
    info!(mode = %config.history_mode, base = %config.base, "Building URLs");

    if config.history_mode.requires_server_fallback() {
        info!("Native history mode: deep links need a server fallback to the entry point");
    }

    for path in paths {
        println!("{} -> {}", path, router.href(path));
    }

    Ok(())
}
