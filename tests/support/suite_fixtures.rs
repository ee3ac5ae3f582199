//! Configuration fixtures with test-friendly timings.
//!
//! The production defaults poll for tens of seconds; these keep every bound
//! in the low hundreds of milliseconds so the retry-loop timing assertions
//! run quickly and deterministically.

use std::time::Duration;

use lyra_smoke::config::{AimConfig, NavigationConfig, SuiteConfig};

/// Navigation config with millisecond-scale bounds and default names.
pub fn fast_navigation_config() -> NavigationConfig {
    NavigationConfig {
        scene_load_timeout: Duration::from_millis(100),
        control_timeout: Duration::from_millis(100),
        start_settle: Duration::from_millis(100),
        host_settle: Duration::from_millis(100),
        settle_poll_interval: Duration::from_millis(5),
        scene_poll_interval: Duration::from_millis(25),
        scene_poll_window: Duration::from_millis(100),
        ..NavigationConfig::default()
    }
}

/// Aim config without the post-hook settle delay.
pub fn fast_aim_config() -> AimConfig {
    AimConfig {
        aim_settle: Duration::ZERO,
        ..AimConfig::default()
    }
}

/// Suite config built from the fast navigation and aim fixtures.
pub fn fast_suite_config() -> SuiteConfig {
    SuiteConfig {
        navigation: fast_navigation_config(),
        aim: fast_aim_config(),
        widget_timeout: Duration::from_millis(50),
        player_wait_timeout: Duration::from_millis(50),
        ..SuiteConfig::default()
    }
}
