//! Waypoint configuration.
//!
//! Loaded from `~/.waypoint/config.toml`. Every field has a default, so
//! a missing file is simply the default configuration.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Deserialize;

use crate::model::ViewMode;

/// Waypoint configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Skip the timed step-transition animation and commit immediately.
    pub reduce_motion: bool,

    /// Which planning view mode the tour preview opens in.
    pub planning_view: PlanningView,

    /// Log filter directive (overridden by `WAYPOINT_LOG`), e.g. `debug`
    /// or `waypoint=trace`.
    pub log_filter: Option<String>,
}

/// Config-facing planning view mode, mapped to the domain `ViewMode`.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PlanningView {
    #[default]
    Board,
    Timeline,
}

impl PlanningView {
    pub fn to_domain(self) -> ViewMode {
        match self {
            PlanningView::Board => ViewMode::Board,
            PlanningView::Timeline => ViewMode::Timeline,
        }
    }
}

impl Config {
    /// Load config from `~/.waypoint/config.toml`, defaulting when the
    /// file doesn't exist.
    pub fn load() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.waypoint/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".waypoint").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_quiet() {
        let config = Config::default();
        assert!(!config.reduce_motion);
        assert_eq!(config.planning_view, PlanningView::Board);
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn parses_partial_files() {
        let config: Config = toml::from_str("reduce-motion = true").unwrap();
        assert!(config.reduce_motion);
        assert_eq!(config.planning_view, PlanningView::Board);
    }

    #[test]
    fn parses_planning_view() {
        let config: Config = toml::from_str("planning-view = \"timeline\"").unwrap();
        assert_eq!(config.planning_view.to_domain(), ViewMode::Timeline);
    }
}
