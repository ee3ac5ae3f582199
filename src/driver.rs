//! The remote automation session boundary.
//!
//! The game under test runs in its own process; everything this crate does
//! goes through one live session exposed here as the [`GameDriver`] trait.
//! Concrete transport clients (connection handshake, wire serialisation)
//! live outside this crate and implement the trait; tests drive the suite
//! with scripted or mocked implementations instead.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// Result alias for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// Failures surfaced by the automation session.
///
/// "Object not found" is deliberately absent: queries that may legitimately
/// miss return `Option`/empty collections instead, so scanning loops stay
/// structural rather than exception-driven.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The session to the game process is unusable.
    #[error("automation session lost: {0}")]
    Connection(String),
    /// A bounded wait elapsed before its condition held.
    #[error("timed out after {waited:?} waiting for {awaited}")]
    Timeout {
        /// How long the driver waited.
        waited: Duration,
        /// Description of what was awaited (scene or selector).
        awaited: String,
    },
    /// A remote method invocation was rejected or threw on the game side.
    #[error("remote call `{method}` failed: {detail}")]
    Invocation {
        /// Name of the remotely invoked method.
        method: String,
        /// Message reported by the remote side.
        detail: String,
    },
    /// The driver returned something the protocol contract does not allow.
    #[error("protocol violation: {0}")]
    Protocol(String),
}

/// A query describing how to locate objects in the running game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match an object by its exact name.
    Name(String),
    /// Match objects whose name contains the given fragment.
    NameContains(String),
    /// Match an object by its rendered text content.
    Text(String),
    /// A structural path expression, e.g. `//*[contains(@name,"Tile")]`.
    Path(String),
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "name={name}"),
            Self::NameContains(fragment) => write!(f, "name~={fragment}"),
            Self::Text(text) => write!(f, "text={text}"),
            Self::Path(path) => write!(f, "path={path}"),
        }
    }
}

/// Opaque reference to a found scene, UI, or world object.
///
/// Handles are only meaningful within the scene that produced them; after a
/// scene change they may go stale, which surfaces as a failed click or an
/// empty re-query rather than anything this type can detect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectHandle {
    /// The object's display name as reported by the driver.
    pub name: String,
    /// Driver-internal position identifier; opaque to this crate.
    pub position_id: u64,
}

impl ObjectHandle {
    /// Creates a handle from a name and the driver's position identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, position_id: u64) -> Self {
        Self {
            name: name.into(),
            position_id,
        }
    }
}

/// One live automation session with a running game build.
///
/// All operations are synchronous and blocking; the suite serialises on a
/// single session for its whole lifetime. Connect/disconnect belong to the
/// concrete client and happen before/after the trait object is handed over.
pub trait GameDriver {
    /// Returns the name of the currently active scene.
    fn current_scene(&mut self) -> DriverResult<String>;

    /// Requests that the game load the named scene. Returns once the request
    /// is accepted, not once the scene is active; pair with
    /// [`GameDriver::wait_for_scene`].
    fn load_scene(&mut self, name: &str) -> DriverResult<()>;

    /// Blocks until the named scene is active or the timeout elapses.
    fn wait_for_scene(&mut self, name: &str, timeout: Duration) -> DriverResult<()>;

    /// Finds a single object; `None` when nothing matches.
    fn find_object(&mut self, selector: &Selector) -> DriverResult<Option<ObjectHandle>>;

    /// Finds every object matching the selector; empty when nothing matches.
    fn find_objects(&mut self, selector: &Selector) -> DriverResult<Vec<ObjectHandle>>;

    /// Finds objects matching the selector within the descendants of
    /// `ancestor`; empty when nothing matches.
    fn find_descendants(
        &mut self,
        ancestor: &ObjectHandle,
        selector: &Selector,
    ) -> DriverResult<Vec<ObjectHandle>>;

    /// Blocks until an object matching the selector exists, or fails with
    /// [`DriverError::Timeout`].
    fn wait_for_object(
        &mut self,
        selector: &Selector,
        timeout: Duration,
    ) -> DriverResult<ObjectHandle>;

    /// Clicks the object. Fails if the handle has gone stale.
    fn click(&mut self, handle: &ObjectHandle) -> DriverResult<()>;

    /// Returns the object's rendered text.
    fn object_text(&mut self, handle: &ObjectHandle) -> DriverResult<String>;

    /// Invokes a remotely callable method on the object, passing a single
    /// pre-rendered string argument.
    fn call_method(&mut self, handle: &ObjectHandle, method: &str, args: &str)
        -> DriverResult<()>;

    /// Enumerates every element the driver can see, with name and position
    /// identifier. Diagnostic use only.
    fn all_elements(&mut self) -> DriverResult<Vec<ObjectHandle>>;

    /// Reads a floating-point attribute from the object by dotted path
    /// (e.g. `position.x` or `X`). `None` when the attribute does not exist
    /// on this handle's shape.
    fn float_property(&mut self, handle: &ObjectHandle, path: &str) -> DriverResult<Option<f64>>;
}
