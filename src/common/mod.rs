pub mod config;
pub mod env;
pub mod error;
pub mod paths;

pub use config::{Config, StepConfig};
pub use env::{HookEnv, PREFIX_VAR, SEARCH_PATH_VAR, STAGED_VAR};
pub use error::{HookError, Result};
pub use paths::{data_dir, APPLICATIONS_SUBDIR, DEFAULT_PREFIX, ICON_THEME_SUBDIR};
