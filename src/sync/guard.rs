//! Idempotency guard for unattended installs
//!
//! Automated triggers (dependency post-install hooks) must not re-run
//! the install against a workspace that already received content. The
//! guard inspects two marker subdirectories whose presence signals a
//! prior install. It is advisory only: explicit install requests bypass
//! it and rely on the per-file skip policy instead.

use std::path::Path;

/// Marker subdirectories checked beneath the workspace config root
const MARKER_DIRS: [&str; 2] = ["agents", "skills"];

/// True only when no marker subdirectory exists under `config_root`
pub fn should_auto_install(config_root: &Path) -> bool {
    MARKER_DIRS
        .iter()
        .all(|marker| !config_root.join(marker).exists())
}
