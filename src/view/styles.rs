//! Card and control styling configuration.
//!
//! Colors honor the `--no-color` flag and the `NO_COLOR` environment
//! variable; with colors off, structural modifiers still distinguish
//! enabled controls from disabled ones.

use ratatui::style::{Color, Modifier, Style};

use crate::model::NavAction;

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== CardStyles =====

/// Styling for the parts of a rendered card.
pub struct CardStyles {
    title: Style,
    description: Style,
    field_name: Style,
    field_value: Style,
}

impl CardStyles {
    /// Card styles honoring the process environment.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Card styles for an explicit color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title: Style::default().add_modifier(Modifier::BOLD),
                description: Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
                field_name: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                field_value: Style::default(),
            }
        } else {
            Self {
                title: Style::default().add_modifier(Modifier::BOLD),
                description: Style::default().add_modifier(Modifier::ITALIC),
                field_name: Style::default().add_modifier(Modifier::BOLD),
                field_value: Style::default(),
            }
        }
    }

    /// Style for the card title.
    pub fn title(&self) -> Style {
        self.title
    }

    /// Style for the description block.
    pub fn description(&self) -> Style {
        self.description
    }

    /// Style for field name lines.
    pub fn field_name(&self) -> Style {
        self.field_name
    }

    /// Style for field value lines.
    pub fn field_value(&self) -> Style {
        self.field_value
    }
}

impl Default for CardStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== ControlStyles =====

/// Styling for the controls bar under the card.
pub struct ControlStyles {
    jump_enabled: Style,
    step_enabled: Style,
    disabled: Style,
    indicator: Style,
    notice: Style,
}

impl ControlStyles {
    /// Control styles honoring the process environment.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Control styles for an explicit color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                jump_enabled: Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                step_enabled: Style::default().fg(Color::Green),
                disabled: Style::default().fg(Color::DarkGray),
                indicator: Style::default().add_modifier(Modifier::BOLD),
                notice: Style::default().fg(Color::Yellow),
            }
        } else {
            // Disabled buttons keep DIM so the state survives NO_COLOR.
            Self {
                jump_enabled: Style::default().add_modifier(Modifier::BOLD),
                step_enabled: Style::default(),
                disabled: Style::default().add_modifier(Modifier::DIM),
                indicator: Style::default().add_modifier(Modifier::BOLD),
                notice: Style::default(),
            }
        }
    }

    /// Style for a control button in its current state.
    ///
    /// Jump buttons (first, last) read heavier than step buttons when
    /// enabled; every disabled button looks the same.
    pub fn for_action(&self, action: NavAction, enabled: bool) -> Style {
        if !enabled {
            return self.disabled;
        }
        match action {
            NavAction::First | NavAction::Last => self.jump_enabled,
            NavAction::Prev | NavAction::Next => self.step_enabled,
        }
    }

    /// Style for the `Page i/N` indicator.
    pub fn indicator(&self) -> Style {
        self.indicator
    }

    /// Style for the expiry notice.
    pub fn notice(&self) -> Style {
        self.notice
    }
}

impl Default for ControlStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====
