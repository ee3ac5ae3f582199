//! Menu navigation with bounded retry.
//!
//! Drives the front-end menu from scene load to a running gameplay
//! experience. The experience tiles are generated widgets that may not exist
//! immediately after the parent menu animates in, so the whole
//! find-click-poll cycle retries a bounded number of times; retrying only the
//! find would not absorb a click landing on a stale handle.

use log::{debug, info, warn};
use thiserror::Error;

use crate::config::NavigationConfig;
use crate::diagnostics;
use crate::driver::{DriverError, DriverResult, GameDriver, ObjectHandle, Selector};
use crate::poll::poll_until;

/// Failures surfaced by menu navigation.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// Every retry attempt exhausted its polling window without the gameplay
    /// scene becoming current.
    #[error(
        "experience `{label}` did not load after {attempts} attempts; \
         last observed scene was `{last_scene}`"
    )]
    ExperienceNotLoaded {
        /// Label of the experience tile that was being selected.
        label: String,
        /// How many full find-click-poll cycles ran.
        attempts: u32,
        /// Scene name reported by the final poll.
        last_scene: String,
    },
    /// The session failed underneath the navigation.
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Navigates from a fresh front-end into the configured gameplay experience.
///
/// Loads the front-end scene, clicks through the start and host controls
/// (waiting for each readiness condition within its settle bound rather than
/// sleeping blind), then runs up to [`NavigationConfig::attempts`] cycles of
/// tile resolution, click, and scene polling. Returns as soon as the current
/// scene name contains the gameplay fragment.
pub fn navigate_to_experience(
    driver: &mut dyn GameDriver,
    cfg: &NavigationConfig,
) -> Result<(), NavigationError> {
    info!("loading front-end scene `{}`", cfg.front_end_scene);
    driver.load_scene(&cfg.front_end_scene)?;
    driver.wait_for_scene(&cfg.front_end_scene, cfg.scene_load_timeout)?;

    let start_selector = Selector::Name(cfg.start_control.clone());
    let start = driver.wait_for_object(&start_selector, cfg.control_timeout)?;
    driver.click(&start)?;

    // The menu animates between panels; wait for the host control to exist
    // instead of sleeping a fixed interval.
    let host_selector = Selector::Name(cfg.host_control.clone());
    let host = poll_until(cfg.start_settle, cfg.settle_poll_interval, || {
        driver.find_object(&host_selector)
    })?
    .ok_or_else(|| DriverError::Timeout {
        waited: cfg.start_settle,
        awaited: host_selector.to_string(),
    })?;
    driver.click(&host)?;

    // Tiles are generated lazily; give them one settle window to appear but
    // let the retry loop cope if they are still missing.
    let tile_selector = Selector::NameContains(cfg.tile_prefix.clone());
    let tiles_ready = poll_until(cfg.host_settle, cfg.settle_poll_interval, || {
        let tiles = driver.find_objects(&tile_selector)?;
        Ok::<_, DriverError>(if tiles.is_empty() { None } else { Some(()) })
    })?;
    if tiles_ready.is_none() {
        debug!(
            "no `{}` widgets within {:?}; relying on retry loop",
            cfg.tile_prefix, cfg.host_settle
        );
    }

    let mut last_scene = String::new();
    for attempt in 1..=cfg.attempts {
        debug!("experience selection attempt {attempt}/{}", cfg.attempts);
        match find_experience_tile(driver, cfg)? {
            Some(tile) => {
                debug!("clicking experience tile `{}`", tile.name);
                if let Err(err) = driver.click(&tile) {
                    // Stale handle after a menu refresh; the next attempt
                    // re-resolves from scratch.
                    warn!("tile click failed: {err}");
                }
            }
            None => debug!(
                "no tile matched `{}` on attempt {attempt}",
                cfg.experience_label
            ),
        }

        let reached = poll_until(cfg.scene_poll_window, cfg.scene_poll_interval, || {
            let scene = driver.current_scene()?;
            if scene.contains(&cfg.gameplay_scene_fragment) {
                Ok::<_, DriverError>(Some(scene))
            } else {
                last_scene = scene;
                Ok(None)
            }
        })?;
        if let Some(scene) = reached {
            info!("experience `{}` loaded: `{scene}`", cfg.experience_label);
            return Ok(());
        }
    }

    match diagnostics::element_dump(driver) {
        Ok(dump) => debug!("element dump after failed navigation:\n{dump}"),
        Err(err) => debug!("element dump unavailable: {err}"),
    }
    Err(NavigationError::ExperienceNotLoaded {
        label: cfg.experience_label.clone(),
        attempts: cfg.attempts,
        last_scene,
    })
}

/// Resolves the experience tile for the configured label, best effort.
///
/// First enumerates generated tile widgets by name prefix and descends into
/// each one's title elements, matching their rendered text against the label
/// case-insensitively; the ANCESTOR tile is the click target, never the title
/// element itself. Failing that, falls back to any element whose rendered
/// text equals the label. `Ok(None)` is an expected outcome the caller
/// tolerates by retrying.
pub fn find_experience_tile(
    driver: &mut dyn GameDriver,
    cfg: &NavigationConfig,
) -> DriverResult<Option<ObjectHandle>> {
    let tiles = driver.find_objects(&Selector::NameContains(cfg.tile_prefix.clone()))?;
    let wanted = cfg.experience_label.to_lowercase();
    let title_selector = Selector::NameContains(cfg.title_marker.clone());
    for tile in tiles {
        let titles = driver.find_descendants(&tile, &title_selector)?;
        for title in titles {
            // Title widgets can despawn mid-scan; skip the candidate and
            // keep scanning.
            match driver.object_text(&title) {
                Ok(text) if text.to_lowercase().contains(&wanted) => {
                    debug!("tile `{}` matched via title `{}`", tile.name, title.name);
                    return Ok(Some(tile));
                }
                Ok(_) => {}
                Err(err) => debug!("skipping title `{}`: {err}", title.name),
            }
        }
    }
    driver.find_object(&Selector::Text(cfg.experience_label.clone()))
}
