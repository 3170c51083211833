use serde::{Deserialize, Serialize};
use std::path::{Component, Path};
use crate::error::{HookError, Result};
use crate::hook::MaintenanceStep;

/// Step list loaded from a TOML file, replacing the built-in steps.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StepConfig {
    #[serde(default)]
    pub description: Option<String>,
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Directory relative to the data directory, appended as the last argument.
    pub target: String,
}

impl Config {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HookError::Config(format!(
                "Config file not found: {}", path.display()
            )));
        }

        tracing::debug!("Loading step config from: {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| HookError::Config(format!("Config parse error: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(HookError::Config(
                "Config must define at least one [[steps]] entry".into()
            ));
        }

        for step in &self.steps {
            if step.command.trim().is_empty() {
                return Err(HookError::InvalidStep {
                    command: step.command.clone(),
                    reason: "command must not be empty".into(),
                });
            }

            let target = Path::new(&step.target);
            if step.target.is_empty() || target.is_absolute() {
                return Err(HookError::InvalidStep {
                    command: step.command.clone(),
                    reason: format!("target must be a relative path, got '{}'", step.target),
                });
            }
            if target.components().any(|c| matches!(c, Component::ParentDir)) {
                return Err(HookError::InvalidStep {
                    command: step.command.clone(),
                    reason: format!("target must stay inside the data directory, got '{}'", step.target),
                });
            }
        }

        Ok(())
    }

    pub fn into_steps(self) -> Vec<MaintenanceStep> {
        self.steps
            .into_iter()
            .map(|step| {
                let description = step
                    .description
                    .unwrap_or_else(|| format!("Running {}...", step.command));
                MaintenanceStep::new(description, step.command, step.args, step.target)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_STEPS: &str = r#"
[[steps]]
description = "Updating icon cache..."
command = "gtk-update-icon-cache"
args = ["-qtf"]
target = "icons/hicolor"

[[steps]]
command = "glib-compile-schemas"
target = "glib-2.0/schemas"
"#;

    #[test]
    fn parses_steps_in_order() {
        let steps = Config::from_toml(TWO_STEPS).unwrap().into_steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].command(), "gtk-update-icon-cache");
        assert_eq!(steps[0].description(), "Updating icon cache...");
        assert_eq!(steps[1].command(), "glib-compile-schemas");
        assert_eq!(steps[1].description(), "Running glib-compile-schemas...");
        assert!(steps[1].flags().is_empty());
    }

    #[test]
    fn rejects_empty_step_list() {
        let err = Config::from_toml("").unwrap_err();
        assert!(matches!(err, HookError::Config(_)));
    }

    #[test]
    fn rejects_blank_command() {
        let err = Config::from_toml("[[steps]]\ncommand = \"  \"\ntarget = \"x\"\n").unwrap_err();
        assert!(matches!(err, HookError::InvalidStep { .. }));
    }

    #[test]
    fn rejects_targets_outside_data_dir() {
        for target in ["/etc", "../lib", "icons/../../x", ""] {
            let toml = format!("[[steps]]\ncommand = \"true\"\ntarget = \"{}\"\n", target);
            let err = Config::from_toml(&toml).unwrap_err();
            assert!(matches!(err, HookError::InvalidStep { .. }), "target {:?}", target);
        }
    }

    #[test]
    fn reports_parse_errors() {
        let err = Config::from_toml("[[steps]]\ntarget = 3\n").unwrap_err();
        assert!(err.to_string().starts_with("Config error: Config parse error"));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from_path(&dir.path().join("steps.toml")).unwrap_err();
        assert!(matches!(err, HookError::Config(_)));
    }
}
