use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Report keys missing from the configuration file and validate the timezone.
    pub fn check(path: &Path, cfg: &Config) -> AppResult<()> {
        if !path.exists() {
            info(format!(
                "No configuration file at {}: defaults are in use.",
                path.display()
            ));
        } else {
            let content = fs::read_to_string(path).map_err(|e| AppError::Config(e.to_string()))?;
            let missing = Config::missing_keys(&content)?;

            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!(
                    "Missing keys (defaults applied): {}",
                    missing.join(", ")
                ));
            }
        }

        let tz = cfg.tz()?;
        success(format!("Reporting timezone: UTC{}", tz));
        Ok(())
    }

    /// Open the configuration file in an editor, falling back to the
    /// platform default when the requested one cannot run.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        let status = Command::new(&default_editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;

        if !status.success() {
            return Err(AppError::Config(format!(
                "Failed to edit configuration file using '{}'",
                default_editor
            )));
        }

        success(format!(
            "Configuration file edited successfully using fallback '{}'",
            default_editor
        ));
        Ok(())
    }
}
