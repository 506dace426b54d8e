//! Configuration for quizrun.
//!
//! Config files are markdown with YAML frontmatter. A global file under the
//! user config directory is merged with a project file (`quizrun.md` in the
//! working directory, or the path given with `--config`).

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::console::OutputMode;
use crate::paths::PROJECT_CONFIG;
use crate::question::{Question, QuestionDef};
use crate::ui;

pub mod defaults;

pub use defaults::*;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Extra levels by name; these shadow built-in levels of the same name
    #[serde(default)]
    pub levels: BTreeMap<String, Vec<QuestionDef>>,
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Global config (<config dir>/quizrun/config.md)
    /// 2. Project config (./quizrun.md), or `explicit` when given
    ///
    /// Missing files are skipped, except an explicit path which must exist.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let project = match explicit {
            Some(raw) => {
                let path = PathBuf::from(shellexpand::tilde(raw).into_owned());
                if !path.exists() {
                    return Err(anyhow!("Config file {} does not exist", path.display()));
                }
                path
            }
            None => PathBuf::from(PROJECT_CONFIG),
        };

        Self::load_merged_from(global_config_path().as_deref(), &project)
    }

    pub fn parse(content: &str) -> Result<Self> {
        PartialConfig::parse(content).map(|partial| PartialConfig::default().merge_with(partial))
    }

    /// Load merged configuration from specified global and project config paths.
    ///
    /// An unreadable global config is reported as a warning and skipped; a
    /// broken project config is an error.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = match global_path.filter(|p| p.exists()) {
            Some(path) => PartialConfig::load_from(path).unwrap_or_else(|e| {
                ui::warn(&format!("Ignoring global config {}: {:#}", path.display(), e));
                PartialConfig::default()
            }),
            None => PartialConfig::default(),
        };

        let project_config = if project_path.exists() {
            PartialConfig::load_from(project_path)?
        } else {
            PartialConfig::default()
        };

        Ok(global_config.merge_with(project_config))
    }

    /// The configured output mode.
    pub fn output_mode(&self) -> Result<OutputMode> {
        OutputMode::parse(&self.defaults.output).ok_or_else(|| {
            anyhow!(
                "Invalid output mode '{}' in config. Use 'human' or 'json'.",
                self.defaults.output
            )
        })
    }

    /// Questions for a level, custom levels first, then built-ins.
    pub fn questions_for(&self, level: &str) -> crate::error::Result<Vec<Question>> {
        crate::level::resolve_questions(level, &self.levels)
    }
}

/// Returns the path to the global config file at <config dir>/quizrun/config.md
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quizrun").join("config.md"))
}

/// Split `---` delimited YAML frontmatter from the markdown body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("\n---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 4..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}

/// Config with every field optional, for merging
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub defaults: Option<PartialDefaultsConfig>,
    pub levels: Option<BTreeMap<String, Vec<QuestionDef>>>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialDefaultsConfig {
    pub name: Option<String>,
    pub class: Option<String>,
    pub level: Option<String>,
    pub output: Option<String>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        // An empty frontmatter block deserializes as unit, not a map
        if frontmatter.trim().is_empty() {
            return Ok(Self::default());
        }

        let partial: PartialConfig =
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?;
        partial.check_level_names()?;
        Ok(partial)
    }

    /// Level names match case-insensitively, so two names that differ only
    /// by case would be ambiguous.
    fn check_level_names(&self) -> Result<()> {
        let names: Vec<&str> = self
            .levels
            .iter()
            .flat_map(|levels| levels.keys())
            .map(String::as_str)
            .collect();
        for (i, name) in names.iter().enumerate() {
            if let Some(other) = names[i + 1..].iter().find(|o| o.eq_ignore_ascii_case(name)) {
                return Err(anyhow!(
                    "Levels '{}' and '{}' differ only by case",
                    name,
                    other
                ));
            }
        }
        Ok(())
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_defaults = self.defaults.unwrap_or_default();
        let project_defaults = project.defaults.unwrap_or_default();

        // Levels merge by name, project entries replacing global ones
        let project_levels = project.levels.unwrap_or_default();
        let mut levels = self.levels.unwrap_or_default();
        levels.retain(|name, _| {
            !project_levels
                .keys()
                .any(|other| other.eq_ignore_ascii_case(name.as_str()))
        });
        levels.extend(project_levels);

        Config {
            defaults: DefaultsConfig {
                name: project_defaults.name.or(global_defaults.name),
                class: project_defaults.class.or(global_defaults.class),
                level: project_defaults.level.or(global_defaults.level),
                // Project value > global value > default
                output: project_defaults
                    .output
                    .or(global_defaults.output)
                    .unwrap_or_else(defaults::default_output),
            },
            levels,
        }
    }
}
