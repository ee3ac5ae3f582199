//! Deterministic view orientation via the in-game hook.
//!
//! Simulated mouse input cannot orient the camera reproducibly, so the build
//! under test carries a remotely callable hook on the player pawn that parses
//! a `"pitch,yaw"` string and applies it to the active controller's view
//! rotation with zero roll. This module resolves both actors' positions,
//! computes the look-at rotation from eye height, and invokes that hook.

use std::thread;

use glam::Vec3;
use log::{debug, error};
use thiserror::Error;

use crate::config::AimConfig;
use crate::driver::{DriverError, GameDriver, ObjectHandle, Selector};
use crate::position::{resolve_position, PositionError};
use crate::rotation::{look_at, LookRotation};

/// Failures surfaced by the aim procedure.
#[derive(Debug, Error)]
pub enum AimError {
    /// Neither the primary nor the fallback pawn name matched anything.
    #[error("player pawn not found (tried `{primary}`, then `{fallback}`)")]
    PlayerNotFound {
        /// Primary pawn name that was tried first.
        primary: String,
        /// Fallback pawn name tried second.
        fallback: String,
    },
    /// A world position could not be resolved for the player or target.
    #[error(transparent)]
    Position(#[from] PositionError),
    /// The session failed, including a rejected hook invocation.
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Orients the player's view towards `target` and returns the rotation sent.
///
/// Resolves the player pawn by its primary name with a fallback, reads both
/// world positions, raises the player's up component by the configured eye
/// height, and invokes the view-rotation hook with the rendered
/// `"pitch,yaw"` argument. Success means the hook call returned without
/// error; there is no readback of the applied rotation.
pub fn aim_at(
    driver: &mut dyn GameDriver,
    target: &ObjectHandle,
    cfg: &AimConfig,
) -> Result<LookRotation, AimError> {
    let player = resolve_player(driver, cfg)?;
    let player_position = resolve_position(driver, &player)?;
    let target_position = resolve_position(driver, target)?;

    let eye = player_position + Vec3::new(0.0, 0.0, cfg.eye_height);
    let rotation = look_at(eye, target_position);
    let args = rotation.to_string();
    debug!("aiming `{}` at `{}` with `{args}`", player.name, target.name);

    if let Err(err) = driver.call_method(&player, &cfg.aim_method, &args) {
        error!("view rotation hook `{}` failed: {err}", cfg.aim_method);
        return Err(err.into());
    }

    // The hook applies the rotation on the game thread; no query exposes the
    // result, so allow it a fixed beat before the caller proceeds.
    thread::sleep(cfg.aim_settle);
    Ok(rotation)
}

/// Finds the player pawn by primary name, then by the fallback name.
fn resolve_player(
    driver: &mut dyn GameDriver,
    cfg: &AimConfig,
) -> Result<ObjectHandle, AimError> {
    if let Some(player) = driver.find_object(&Selector::Name(cfg.player_name.clone()))? {
        return Ok(player);
    }
    if let Some(player) = driver.find_object(&Selector::Name(cfg.player_fallback.clone()))? {
        debug!("primary pawn name missed; using `{}`", cfg.player_fallback);
        return Ok(player);
    }
    Err(AimError::PlayerNotFound {
        primary: cfg.player_name.clone(),
        fallback: cfg.player_fallback.clone(),
    })
}
