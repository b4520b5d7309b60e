//! Keybindings configuration for the TUI.

#![allow(clippy::enum_glob_use, clippy::unused_self)]

use anyhow::{Context, Result, anyhow, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

macro_rules! vec_of_strings {
    ($($s:expr),* $(,)?) => {
        vec![$($s.to_string()),*]
    };
}

/// Top-level configuration for folio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// TUI configuration.
    pub tui: TuiConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Keybindings configuration.
    pub keybindings: KeyBindingsConfig,
}

/// Keybindings configuration for all TUI views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyBindingsConfig {
    /// Keybindings for the project list.
    pub project_list: ProjectListKeyBindings,
    /// Keybindings for the project detail modal.
    pub project_modal: ProjectModalKeyBindings,
    /// Keybindings for the profile viewer.
    pub profile_viewer: ViewerKeyBindings,
}

/// Keybindings for the project list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListKeyBindings {
    /// Quit the application.
    pub quit: Vec<String>,
    /// Move down in the list.
    pub down: Vec<String>,
    /// Move up in the list.
    pub up: Vec<String>,
    /// Open the detail modal for the highlighted project.
    pub open_detail: Vec<String>,
    /// Copy the highlighted project ID.
    pub copy_project_id: Vec<String>,
    /// Open the profile viewer.
    pub open_profile: Vec<String>,
}

/// Keybindings for the project detail modal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectModalKeyBindings {
    /// Close the modal.
    pub close: Vec<String>,
    /// Show the next image.
    pub next_image: Vec<String>,
    /// Show the previous image.
    pub previous_image: Vec<String>,
    /// Scroll details down.
    pub scroll_down: Vec<String>,
    /// Scroll details up.
    pub scroll_up: Vec<String>,
    /// Copy the live demo URL.
    pub copy_live_demo: Vec<String>,
    /// Copy the source repository URL.
    pub copy_github: Vec<String>,
}

/// Keybindings for scrollable viewers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerKeyBindings {
    /// Close viewer.
    pub close: Vec<String>,
    /// Scroll down.
    pub scroll_down: Vec<String>,
    /// Scroll up.
    pub scroll_up: Vec<String>,
    /// Scroll down fast (half page).
    pub scroll_down_fast: Vec<String>,
    /// Scroll up fast (half page).
    pub scroll_up_fast: Vec<String>,
}

impl Default for ProjectListKeyBindings {
    fn default() -> Self {
        Self {
            quit: vec_of_strings!["q", "Q", "Esc"],
            down: vec_of_strings!["j", "J", "Down"],
            up: vec_of_strings!["k", "K", "Up"],
            open_detail: vec_of_strings!["Enter", "l"],
            copy_project_id: vec_of_strings!["y", "Y"],
            open_profile: vec_of_strings!["p", "P"],
        }
    }
}

impl Default for ProjectModalKeyBindings {
    fn default() -> Self {
        Self {
            close: vec_of_strings!["q", "Q"],
            next_image: vec_of_strings!["l", "L", "Right"],
            previous_image: vec_of_strings!["h", "H", "Left"],
            scroll_down: vec_of_strings!["j", "J", "Down"],
            scroll_up: vec_of_strings!["k", "K", "Up"],
            copy_live_demo: vec_of_strings!["d", "D"],
            copy_github: vec_of_strings!["g", "G"],
        }
    }
}

impl Default for ViewerKeyBindings {
    fn default() -> Self {
        Self {
            close: vec_of_strings!["q", "Q", "Esc"],
            scroll_down: vec_of_strings!["j", "J", "Down"],
            scroll_up: vec_of_strings!["k", "K", "Up"],
            scroll_down_fast: vec_of_strings!["Ctrl+d"],
            scroll_up_fast: vec_of_strings!["Ctrl+u"],
        }
    }
}

/// Returns the default configuration file path.
///
/// On Linux/macOS: `~/.config/folio/config.toml`
/// On Windows: `%APPDATA%\folio\config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}

/// Generate default configuration as TOML string.
pub fn generate_default_config_toml() -> Result<String> {
    let config = Config::default();
    let toml_str =
        toml::to_string_pretty(&config).context("failed to serialize default configuration")?;

    let header = r#"# folio Configuration
#
# [tui.keybindings]
# Each action can have multiple key bindings.
#
# Supported key formats:
# - Single characters: "j", "k", "a", "1"
# - Special keys: "Enter", "Esc", "Tab", "Backspace", "Delete"
# - Arrow keys: "Up", "Down", "Left", "Right"
# - Navigation keys: "Home", "End", "PageUp", "PageDown"
# - Modified keys: "Ctrl+d", "Alt+k", "Shift+Up"
#
# Esc always closes the project modal, and digits 1-9 jump to an image.
# When this file exists, ALL default keybindings are replaced.

"#;

    Ok(format!("{header}{toml_str}"))
}

/// Load configuration from a TOML file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => return Ok(None),
        },
    };

    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    Ok(Some(config))
}

/// Parse a key string into a `KeyEvent`.
///
/// # Examples
/// - "j" -> `KeyCode::Char('j')`
/// - "Enter" -> `KeyCode::Enter`
/// - "Ctrl+d" -> `KeyCode::Char('d')` with CONTROL modifier
pub fn parse_key(s: &str) -> Result<KeyEvent> {
    let parts: Vec<&str> = s.split('+').collect();
    let Some((key_part, modifier_parts)) = parts.split_last() else {
        bail!("Empty key string");
    };

    let mut modifiers = KeyModifiers::NONE;
    for &modifier in modifier_parts {
        match modifier {
            "Ctrl" | "Control" => modifiers |= KeyModifiers::CONTROL,
            "Alt" => modifiers |= KeyModifiers::ALT,
            "Shift" => modifiers |= KeyModifiers::SHIFT,
            other => bail!("Unknown modifier: {other}"),
        }
    }

    let code = parse_key_code(key_part)?;
    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(s: &str) -> Result<KeyCode> {
    match s {
        "Enter" => Ok(KeyCode::Enter),
        "Esc" => Ok(KeyCode::Esc),
        "Backspace" => Ok(KeyCode::Backspace),
        "Left" => Ok(KeyCode::Left),
        "Right" => Ok(KeyCode::Right),
        "Up" => Ok(KeyCode::Up),
        "Down" => Ok(KeyCode::Down),
        "Home" => Ok(KeyCode::Home),
        "End" => Ok(KeyCode::End),
        "PageUp" => Ok(KeyCode::PageUp),
        "PageDown" => Ok(KeyCode::PageDown),
        "Tab" => Ok(KeyCode::Tab),
        "Delete" => Ok(KeyCode::Delete),
        "Insert" => Ok(KeyCode::Insert),
        s if s.chars().count() == 1 => {
            let ch = s.chars().next().ok_or_else(|| anyhow!("Empty char"))?;
            Ok(KeyCode::Char(ch))
        }
        "" => bail!("Empty key string"),
        other => bail!("Unknown key: {other}"),
    }
}

/// Validate the TUI configuration.
///
/// Checks for:
/// - Empty key bindings
/// - Invalid key expressions
/// - Key conflicts within each view
pub fn validate_tui_config(config: &TuiConfig) -> Result<()> {
    validate_keybindings_config(&config.keybindings)
}

/// Validate the keybindings configuration.
pub fn validate_keybindings_config(config: &KeyBindingsConfig) -> Result<()> {
    let views = collect_view_bindings(config);
    for (view_name, bindings) in &views {
        validate_non_empty_bindings(view_name, bindings)?;
        validate_key_expressions(view_name, bindings)?;
    }
    for (view_name, bindings) in &views {
        validate_view_keybindings(view_name, bindings)?;
    }
    Ok(())
}

type ViewBindings<'a> = Vec<(&'static str, &'a [String])>;

fn collect_view_bindings(config: &KeyBindingsConfig) -> Vec<(&'static str, ViewBindings<'_>)> {
    let list = &config.project_list;
    let modal = &config.project_modal;
    let viewer = &config.profile_viewer;
    vec![
        (
            "project_list",
            vec![
                ("quit", list.quit.as_slice()),
                ("down", &list.down),
                ("up", &list.up),
                ("open_detail", &list.open_detail),
                ("copy_project_id", &list.copy_project_id),
                ("open_profile", &list.open_profile),
            ],
        ),
        (
            "project_modal",
            vec![
                ("close", modal.close.as_slice()),
                ("next_image", &modal.next_image),
                ("previous_image", &modal.previous_image),
                ("scroll_down", &modal.scroll_down),
                ("scroll_up", &modal.scroll_up),
                ("copy_live_demo", &modal.copy_live_demo),
                ("copy_github", &modal.copy_github),
            ],
        ),
        (
            "profile_viewer",
            vec![
                ("close", viewer.close.as_slice()),
                ("scroll_down", &viewer.scroll_down),
                ("scroll_up", &viewer.scroll_up),
                ("scroll_down_fast", &viewer.scroll_down_fast),
                ("scroll_up_fast", &viewer.scroll_up_fast),
            ],
        ),
    ]
}

fn validate_non_empty_bindings(view_name: &str, bindings: &ViewBindings<'_>) -> Result<()> {
    for (action, keys) in bindings {
        if keys.is_empty() {
            bail!("{view_name}.{action} must have at least one key binding");
        }
    }
    Ok(())
}

fn validate_key_expressions(view_name: &str, bindings: &ViewBindings<'_>) -> Result<()> {
    for (action, keys) in bindings {
        for key in *keys {
            parse_key(key).with_context(|| format!("Invalid key '{key}' in {view_name}.{action}"))?;
        }
    }
    Ok(())
}

fn validate_view_keybindings(view_name: &str, bindings: &ViewBindings<'_>) -> Result<()> {
    let mut key_to_actions: HashMap<&str, Vec<&str>> = HashMap::new();

    for (action, keys) in bindings {
        for key in *keys {
            key_to_actions.entry(key.as_str()).or_default().push(action);
        }
    }

    let mut conflicts: Vec<_> = key_to_actions
        .into_iter()
        .filter(|(_, actions)| actions.len() > 1)
        .collect();
    conflicts.sort_unstable();
    if let Some((key, actions)) = conflicts.first() {
        bail!("Key '{key}' is bound to multiple actions in {view_name}: {actions:?}");
    }

    Ok(())
}

/// View type for keybinding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    /// Project list.
    ProjectList,
    /// Project detail modal.
    ProjectModal,
    /// Profile viewer.
    ProfileViewer,
}

/// Action that can be performed in a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Common actions
    /// Quit the application.
    Quit,
    /// Move down.
    Down,
    /// Move up.
    Up,
    /// Close (for popups).
    Close,

    // ProjectList specific
    /// Open the detail modal.
    OpenDetail,
    /// Copy the project ID.
    CopyProjectId,
    /// Open the profile viewer.
    OpenProfile,

    // ProjectModal specific
    /// Next carousel image.
    NextImage,
    /// Previous carousel image.
    PreviousImage,
    /// Copy the live demo URL.
    CopyLiveDemo,
    /// Copy the source URL.
    CopyGithub,

    // Scrolling
    /// Scroll down.
    ScrollDown,
    /// Scroll up.
    ScrollUp,
    /// Scroll down fast.
    ScrollDownFast,
    /// Scroll up fast.
    ScrollUpFast,
}

impl KeyBindingsConfig {
    /// Generate help text for a specific view.
    pub fn generate_help_text(&self, view: ViewType) -> String {
        match view {
            ViewType::ProjectList => format!(
                "{}:move {}:details {}:profile {}:copy id {}:quit",
                self.format_key_pair(&self.project_list.down, &self.project_list.up),
                self.format_first_key(&self.project_list.open_detail),
                self.format_first_key(&self.project_list.open_profile),
                self.format_first_key(&self.project_list.copy_project_id),
                self.format_first_key(&self.project_list.quit),
            ),
            ViewType::ProjectModal => format!(
                "{}:images 1-9:jump {}:scroll {}:copy demo {}:copy source {}/Esc/click outside:close",
                self.format_key_pair(
                    &self.project_modal.previous_image,
                    &self.project_modal.next_image
                ),
                self.format_key_pair(&self.project_modal.scroll_down, &self.project_modal.scroll_up),
                self.format_first_key(&self.project_modal.copy_live_demo),
                self.format_first_key(&self.project_modal.copy_github),
                self.format_first_key(&self.project_modal.close),
            ),
            ViewType::ProfileViewer => format!(
                "{}:scroll {}/{}:half page {}:close",
                self.format_key_pair(
                    &self.profile_viewer.scroll_down,
                    &self.profile_viewer.scroll_up
                ),
                self.format_first_key(&self.profile_viewer.scroll_down_fast),
                self.format_first_key(&self.profile_viewer.scroll_up_fast),
                self.format_first_key(&self.profile_viewer.close),
            ),
        }
    }

    fn format_first_key(&self, keys: &[String]) -> String {
        keys.first()
            .map_or_else(|| "?".to_string(), |k| self.format_key_display(k))
    }

    fn format_key_pair(&self, first: &[String], second: &[String]) -> String {
        format!(
            "{}/{}",
            self.format_first_key(first),
            self.format_first_key(second)
        )
    }

    fn format_key_display(&self, key: &str) -> String {
        match key {
            "Enter" => "↵".to_string(),
            "Backspace" => "BS".to_string(),
            "Delete" => "Del".to_string(),
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "PageUp" => "PgUp".to_string(),
            "PageDown" => "PgDn".to_string(),
            other if other.starts_with("Ctrl+") || other.starts_with("Alt+") => {
                other.replace('+', "-")
            }
            other => other.to_string(),
        }
    }

    /// Check if a key event matches a configured action in a view.
    pub fn matches(&self, view: ViewType, action: Action, key: &KeyEvent) -> bool {
        self.get_keys(view, action).iter().any(|key_str| {
            parse_key(key_str).is_ok_and(|expected| {
                expected.code == key.code && expected.modifiers == key.modifiers
            })
        })
    }

    fn get_keys(&self, view: ViewType, action: Action) -> &[String] {
        use Action::*;
        use ViewType::*;

        match (view, action) {
            (ProjectList, Quit) => &self.project_list.quit,
            (ProjectList, Down) => &self.project_list.down,
            (ProjectList, Up) => &self.project_list.up,
            (ProjectList, OpenDetail) => &self.project_list.open_detail,
            (ProjectList, CopyProjectId) => &self.project_list.copy_project_id,
            (ProjectList, OpenProfile) => &self.project_list.open_profile,

            (ProjectModal, Close) => &self.project_modal.close,
            (ProjectModal, NextImage) => &self.project_modal.next_image,
            (ProjectModal, PreviousImage) => &self.project_modal.previous_image,
            (ProjectModal, ScrollDown) => &self.project_modal.scroll_down,
            (ProjectModal, ScrollUp) => &self.project_modal.scroll_up,
            (ProjectModal, CopyLiveDemo) => &self.project_modal.copy_live_demo,
            (ProjectModal, CopyGithub) => &self.project_modal.copy_github,

            (ProfileViewer, Close) => &self.profile_viewer.close,
            (ProfileViewer, ScrollDown) => &self.profile_viewer.scroll_down,
            (ProfileViewer, ScrollUp) => &self.profile_viewer.scroll_up,
            (ProfileViewer, ScrollDownFast) => &self.profile_viewer.scroll_down_fast,
            (ProfileViewer, ScrollUpFast) => &self.profile_viewer.scroll_up_fast,

            _ => &[],
        }
    }
}
