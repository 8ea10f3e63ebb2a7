// Command-line arguments
//
// Runtime overrides for the compile-time defaults in app::config.

use crate::app::{AppState, ViewMode, VisualSettings};
use crate::theme::Accent;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "atlas", version, about = "Digital Divide Atlas: energy vs. connectivity TUI")]
pub struct CliArgs {
    /// View shown at startup
    #[arg(long, value_enum, default_value_t = ViewMode::Report)]
    pub view: ViewMode,

    /// Highlight color
    #[arg(long, value_enum, default_value_t = Accent::Cyan)]
    pub accent: Accent,

    /// Start with axis captions and legends hidden
    #[arg(long)]
    pub no_labels: bool,

    /// Start with quadrant annotations and guides hidden
    #[arg(long)]
    pub no_grid: bool,

    /// Print the projection report and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless report as JSON
    #[arg(long)]
    pub json: bool,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl CliArgs {
    pub fn visual_settings(&self) -> VisualSettings {
        VisualSettings {
            show_labels: !self.no_labels,
            show_grid: !self.no_grid,
            accent: self.accent,
        }
    }

    /// Apply the startup overrides to a fresh state
    pub fn apply(&self, app: &mut AppState) {
        app.settings = self.visual_settings();
        app.set_view_mode(self.view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["atlas"]);
        assert_eq!(args.view, ViewMode::Report);
        assert_eq!(args.visual_settings(), VisualSettings::default());
        assert!(!args.headless && !args.json && !args.debug);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = CliArgs::parse_from([
            "atlas",
            "--view",
            "gravity",
            "--accent",
            "magenta",
            "--no-grid",
            "--log-file",
            "/tmp/atlas.log",
        ]);
        let mut app = AppState::new();
        args.apply(&mut app);
        assert_eq!(app.view_mode, ViewMode::Gravity);
        assert_eq!(app.settings.accent, Accent::Magenta);
        assert!(app.settings.show_labels);
        assert!(!app.settings.show_grid);
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/atlas.log")));
    }

    #[test]
    fn test_unknown_view_rejected() {
        assert!(CliArgs::try_parse_from(["atlas", "--view", "pie"]).is_err());
    }
}
