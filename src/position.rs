//! World position resolution.
//!
//! Different SDK versions expose an actor's location in different shapes: a
//! bundled position attribute with nested components, upper- or lower-cased,
//! or flat coordinate attributes directly on the handle. Rather than
//! inspecting the handle's shape reflectively, resolution tries a closed set
//! of known shapes in order and takes the first that yields all three
//! components.

use glam::Vec3;
use log::debug;
use thiserror::Error;

use crate::driver::{DriverError, GameDriver, ObjectHandle};
use crate::numeric::expect_f32;

/// Failure to obtain a world position for a handle.
#[derive(Debug, Error)]
pub enum PositionError {
    /// Every known handle shape was tried and none yielded a full triple.
    #[error("could not resolve a world position for `{name}`: no known attribute shape matched")]
    Unresolved {
        /// Best-known name of the actor whose position was requested.
        name: String,
    },
    /// The session itself failed mid-lookup.
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// The known attribute layouts a handle may expose its location under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HandleShape {
    /// Bundled `position` attribute with lowercase component fields.
    NestedLower,
    /// Bundled `Position` property with uppercase components.
    NestedUpper,
    /// Flat lowercase `x`/`y`/`z` attributes on the handle itself.
    FlatLower,
    /// Flat uppercase `X`/`Y`/`Z` properties on the handle itself.
    FlatUpper,
}

impl HandleShape {
    /// Resolution order; first shape to yield all three components wins.
    const ATTEMPT_ORDER: [Self; 4] = [
        Self::NestedLower,
        Self::NestedUpper,
        Self::FlatLower,
        Self::FlatUpper,
    ];

    /// Attribute paths for the forward, right, and up components.
    const fn component_paths(self) -> [&'static str; 3] {
        match self {
            Self::NestedLower => ["position.x", "position.y", "position.z"],
            Self::NestedUpper => ["Position.X", "Position.Y", "Position.Z"],
            Self::FlatLower => ["x", "y", "z"],
            Self::FlatUpper => ["X", "Y", "Z"],
        }
    }
}

/// Resolves the world position of `handle`, trying each known shape in order.
///
/// A shape only matches if all three of its component attributes exist;
/// partial matches fall through to the next shape. Exhausting every shape is
/// a [`PositionError::Unresolved`] naming the actor. Session failures
/// propagate immediately.
pub fn resolve_position(
    driver: &mut dyn GameDriver,
    handle: &ObjectHandle,
) -> Result<Vec3, PositionError> {
    for shape in HandleShape::ATTEMPT_ORDER {
        if let Some(position) = read_shape(driver, handle, shape)? {
            debug!(
                "resolved position of `{}` via {shape:?}: {position}",
                handle.name
            );
            return Ok(position);
        }
    }
    Err(PositionError::Unresolved {
        name: handle.name.clone(),
    })
}

/// Reads one candidate shape; `None` when any component is absent.
fn read_shape(
    driver: &mut dyn GameDriver,
    handle: &ObjectHandle,
    shape: HandleShape,
) -> Result<Option<Vec3>, DriverError> {
    let [forward_path, right_path, up_path] = shape.component_paths();
    let Some(forward) = driver.float_property(handle, forward_path)? else {
        return Ok(None);
    };
    let Some(right) = driver.float_property(handle, right_path)? else {
        return Ok(None);
    };
    let Some(up) = driver.float_property(handle, up_path)? else {
        return Ok(None);
    };
    Ok(Some(Vec3::new(
        expect_f32(forward),
        expect_f32(right),
        expect_f32(up),
    )))
}
