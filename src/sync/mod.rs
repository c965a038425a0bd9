//! Directory synchronization core
//!
//! This module handles:
//! - Conflict policy decisions per destination file
//! - Recursive source-to-destination tree mirroring
//! - The idempotency guard for unattended installs

pub mod engine;
pub mod guard;
pub mod policy;

pub use engine::{SyncReport, synchronize};
pub use guard::should_auto_install;
pub use policy::OnConflict;
