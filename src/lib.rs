// Core modules
pub mod common;
pub mod hook;

// Re-export commonly used types
pub use common::{Config, HookEnv, HookError, Result};
pub use hook::{CommandRunner, HookReport, InstallHook, MaintenanceStep, StepOutcome, SystemRunner};

// Short paths for the shared modules
pub mod config {
    pub use crate::common::config::*;
}
pub mod env {
    pub use crate::common::env::*;
}
pub mod error {
    pub use crate::common::error::*;
}
pub mod paths {
    pub use crate::common::paths::*;
}
