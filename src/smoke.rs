//! The ordered smoke sequence.
//!
//! Five checks over one long-lived session, run strictly in order because
//! each step depends on game state the previous one produced; re-running the
//! whole journey per check would cost a full game restart each time. A step
//! that fails stops the run; there is no suite-level retry.

use log::info;
use thiserror::Error;

use crate::config::SuiteConfig;
use crate::driver::{DriverError, GameDriver, ObjectHandle, Selector};
use crate::navigation::{navigate_to_experience, NavigationError};

/// A failed smoke check.
#[derive(Debug, Error)]
pub enum SmokeFailure {
    /// The driver answered but reported no active scene.
    #[error("driver reported an empty scene name; no build appears to be running")]
    NoActiveScene,
    /// The current scene is not the one the step requires.
    #[error("expected a scene containing `{expected}` but the current scene is `{actual}`")]
    WrongScene {
        /// Fragment the scene name was required to contain.
        expected: String,
        /// Scene name the driver actually reported.
        actual: String,
    },
    /// A required main-menu widget never appeared.
    #[error("menu widget `{name}` was not found: {source}")]
    MissingWidget {
        /// Name of the missing widget.
        name: String,
        /// The underlying wait failure.
        source: DriverError,
    },
    /// Menu navigation gave up.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    /// No player pawn matched any pattern, and the direct wait timed out.
    #[error("player pawn not found; tried patterns {patterns:?}, then waited for `{waited_for}`")]
    PlayerMissing {
        /// Name fragments tried in priority order.
        patterns: Vec<String>,
        /// Exact name the fallback wait was bound to.
        waited_for: String,
    },
    /// The session failed underneath a step.
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Runs the five smoke checks in order, stopping at the first failure.
pub fn run(driver: &mut dyn GameDriver, cfg: &SuiteConfig) -> Result<(), SmokeFailure> {
    check_connection(driver)?;
    load_front_end(driver, cfg)?;
    verify_menu_widgets(driver, cfg)?;
    reach_gameplay(driver, cfg)?;
    find_player_pawn(driver, cfg)?;
    info!("smoke sequence passed");
    Ok(())
}

/// Step 1: the session is attached to a running build.
pub fn check_connection(driver: &mut dyn GameDriver) -> Result<(), SmokeFailure> {
    let scene = driver.current_scene()?;
    if scene.is_empty() {
        return Err(SmokeFailure::NoActiveScene);
    }
    info!("connected; current scene `{scene}`");
    Ok(())
}

/// Step 2: the front-end scene loads and reports the expected name.
pub fn load_front_end(driver: &mut dyn GameDriver, cfg: &SuiteConfig) -> Result<(), SmokeFailure> {
    driver.load_scene(&cfg.navigation.front_end_scene)?;
    driver.wait_for_scene(
        &cfg.navigation.front_end_scene,
        cfg.navigation.scene_load_timeout,
    )?;
    let actual = driver.current_scene()?;
    if !actual.contains(&cfg.front_end_fragment) {
        return Err(SmokeFailure::WrongScene {
            expected: cfg.front_end_fragment.clone(),
            actual,
        });
    }
    info!("front-end active: `{actual}`");
    Ok(())
}

/// Step 3: each required main-menu widget exists within its bound.
pub fn verify_menu_widgets(
    driver: &mut dyn GameDriver,
    cfg: &SuiteConfig,
) -> Result<(), SmokeFailure> {
    for name in &cfg.menu_widgets {
        let widget = driver
            .wait_for_object(&Selector::Name(name.clone()), cfg.widget_timeout)
            .map_err(|source| SmokeFailure::MissingWidget {
                name: name.clone(),
                source,
            })?;
        info!("menu widget present: `{}`", widget.name);
    }
    Ok(())
}

/// Step 4: full menu navigation lands in the gameplay scene.
pub fn reach_gameplay(driver: &mut dyn GameDriver, cfg: &SuiteConfig) -> Result<(), SmokeFailure> {
    navigate_to_experience(driver, &cfg.navigation)?;
    let actual = driver.current_scene()?;
    if !actual.contains(&cfg.navigation.gameplay_scene_fragment) {
        return Err(SmokeFailure::WrongScene {
            expected: cfg.navigation.gameplay_scene_fragment.clone(),
            actual,
        });
    }
    info!("gameplay scene active: `{actual}`");
    Ok(())
}

/// Step 5: a player pawn has spawned.
///
/// Tries each configured name fragment in priority order, then falls back to
/// a direct bounded wait on the primary pawn name.
pub fn find_player_pawn(
    driver: &mut dyn GameDriver,
    cfg: &SuiteConfig,
) -> Result<ObjectHandle, SmokeFailure> {
    for pattern in &cfg.player_patterns {
        if let Some(pawn) = driver.find_object(&Selector::NameContains(pattern.clone()))? {
            info!("player pawn `{}` matched pattern `{pattern}`", pawn.name);
            return Ok(pawn);
        }
    }
    let waited_for = cfg.aim.player_name.clone();
    match driver.wait_for_object(&Selector::Name(waited_for.clone()), cfg.player_wait_timeout) {
        Ok(pawn) => {
            info!("player pawn `{}` appeared within the wait bound", pawn.name);
            Ok(pawn)
        }
        Err(DriverError::Timeout { .. }) => Err(SmokeFailure::PlayerMissing {
            patterns: cfg.player_patterns.clone(),
            waited_for,
        }),
        Err(err) => Err(err.into()),
    }
}
