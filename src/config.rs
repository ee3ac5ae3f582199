//! Suite configuration.
//!
//! Every timing, attempt count, and scene/control name the suite uses was
//! calibrated empirically against one build's menu animation timing. They are
//! exposed here as configuration with those calibrated values as defaults, so
//! other builds can tune them without editing the helpers.

use std::time::Duration;

/// How menu navigation finds and retries its way into gameplay.
#[derive(Debug, Clone)]
pub struct NavigationConfig {
    /// Scene to load for the front-end menu.
    pub front_end_scene: String,
    /// Bound on waiting for a requested scene to become active.
    pub scene_load_timeout: Duration,
    /// Bound on locating a named menu control before clicking it.
    pub control_timeout: Duration,
    /// Name of the control that opens the play menu.
    pub start_control: String,
    /// Name of the control that hosts a session.
    pub host_control: String,
    /// Bound on waiting for the menu to settle after clicking the start
    /// control.
    pub start_settle: Duration,
    /// Bound on waiting for the experience tiles to appear after clicking the
    /// host control.
    pub host_settle: Duration,
    /// Interval between probes while waiting for a control to settle in.
    pub settle_poll_interval: Duration,
    /// Name prefix shared by the generated experience tile widgets.
    pub tile_prefix: String,
    /// Name fragment identifying a tile's title text element.
    pub title_marker: String,
    /// Label of the experience to select, matched case-insensitively.
    pub experience_label: String,
    /// Fragment the gameplay scene's name must contain.
    pub gameplay_scene_fragment: String,
    /// How many full find-click-poll cycles to attempt.
    pub attempts: u32,
    /// Interval between scene-name probes inside one attempt.
    pub scene_poll_interval: Duration,
    /// Total scene-name polling window per attempt.
    pub scene_poll_window: Duration,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            front_end_scene: "L_LyraFrontEnd".into(),
            scene_load_timeout: Duration::from_secs(10),
            control_timeout: Duration::from_secs(5),
            start_control: "StartGameButton".into(),
            host_control: "HostSessionButton".into(),
            start_settle: Duration::from_millis(3000),
            host_settle: Duration::from_millis(2000),
            settle_poll_interval: Duration::from_millis(250),
            tile_prefix: "W_ExperienceTile".into(),
            title_marker: "Title".into(),
            experience_label: "Elimination".into(),
            gameplay_scene_fragment: "Expanse".into(),
            attempts: 3,
            scene_poll_interval: Duration::from_millis(2500),
            scene_poll_window: Duration::from_secs(10),
        }
    }
}

/// How the aim helper finds the player and applies a view rotation.
#[derive(Debug, Clone)]
pub struct AimConfig {
    /// Primary name of the player pawn.
    pub player_name: String,
    /// Fallback pawn name for builds that rename the hero blueprint.
    pub player_fallback: String,
    /// Offset added to the player's up component to approximate eye height,
    /// in world units.
    pub eye_height: f32,
    /// Name of the remotely callable hook that applies a view rotation from
    /// a `"pitch,yaw"` string.
    pub aim_method: String,
    /// Fixed delay after the hook call to let the remote side apply it.
    pub aim_settle: Duration,
}

impl Default for AimConfig {
    fn default() -> Self {
        Self {
            player_name: "B_Hero_ShooterMannequin".into(),
            player_fallback: "BP_LyraCharacter".into(),
            eye_height: 64.0,
            aim_method: "SetViewRotationFromString".into(),
            aim_settle: Duration::from_millis(500),
        }
    }
}

/// Configuration for the full smoke sequence.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Navigation timings and names.
    pub navigation: NavigationConfig,
    /// Aim helper settings.
    pub aim: AimConfig,
    /// Fragment the front-end scene's reported name must contain.
    pub front_end_fragment: String,
    /// Main-menu controls whose presence the suite verifies.
    pub menu_widgets: Vec<String>,
    /// Bound on waiting for each menu widget.
    pub widget_timeout: Duration,
    /// Name fragments tried in priority order when locating the player pawn.
    pub player_patterns: Vec<String>,
    /// Bound on the direct fallback wait for the player pawn.
    pub player_wait_timeout: Duration,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationConfig::default(),
            aim: AimConfig::default(),
            front_end_fragment: "LyraFrontEnd".into(),
            menu_widgets: vec![
                "StartGameButton".into(),
                "OptionsButton".into(),
                "QuitGameButton".into(),
            ],
            widget_timeout: Duration::from_secs(5),
            player_patterns: vec![
                "Hero_ShooterMannequin".into(),
                "B_Hero".into(),
                "LyraCharacter".into(),
            ],
            player_wait_timeout: Duration::from_secs(10),
        }
    }
}
