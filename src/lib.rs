//! End-to-end smoke checks for a Lyra game build, driven over a remote
//! automation session.
//!
//! The game runs in its own process and is reached exclusively through the
//! [`driver::GameDriver`] trait: load a scene, find an object, click it, read
//! its text, call a remote method. This crate contributes the journey on top
//! of that boundary (connect, front-end, main menu, gameplay navigation,
//! player spawn), plus a deterministic aim helper that orients the player's
//! view through a custom in-game hook instead of simulated input.
//!
//! Concrete transport clients implement [`driver::GameDriver`] outside this
//! crate; the integration tests exercise everything against scripted drivers.

pub mod aim;
pub mod config;
pub mod diagnostics;
pub mod driver;
pub mod logging;
pub mod navigation;
pub mod numeric;
pub mod poll;
pub mod position;
pub mod rotation;
pub mod smoke;

pub use aim::{aim_at, AimError};
pub use config::{AimConfig, NavigationConfig, SuiteConfig};
pub use driver::{DriverError, DriverResult, GameDriver, ObjectHandle, Selector};
pub use logging::init as init_logging;
pub use navigation::{find_experience_tile, navigate_to_experience, NavigationError};
pub use poll::poll_until;
pub use position::{resolve_position, PositionError};
pub use rotation::{look_at, LookRotation};
pub use smoke::SmokeFailure;
