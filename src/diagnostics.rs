//! Diagnostic artefacts.
//!
//! Emitted on failure paths only; nothing here feeds back into the suite's
//! decisions.

use crate::driver::{DriverError, DriverResult, GameDriver};

/// Renders every element the driver can currently see as pretty-printed
/// JSON, one entry per handle with its name and position identifier.
pub fn element_dump(driver: &mut dyn GameDriver) -> DriverResult<String> {
    let elements = driver.all_elements()?;
    serde_json::to_string_pretty(&elements)
        .map_err(|err| DriverError::Protocol(format!("element dump serialisation: {err}")))
}
