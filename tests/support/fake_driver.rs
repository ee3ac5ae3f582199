//! Scripted in-memory [`GameDriver`] used by the integration tests.
//!
//! The fake holds a flat element table plus a few behaviour knobs the tests
//! flip: which scene a load lands in, and after how many tile clicks the
//! gameplay scene becomes current. Waits never sleep; they either see the
//! scripted state or fail immediately, which keeps the tests' timing
//! assertions about the polling loops honest.

use std::collections::HashMap;
use std::time::Duration;

use lyra_smoke::driver::{DriverError, DriverResult, GameDriver, ObjectHandle, Selector};

/// One scripted element in the fake scene.
#[derive(Debug, Clone)]
pub struct FakeElement {
    /// Handle returned to the code under test.
    pub handle: ObjectHandle,
    /// Rendered text, if the element has any.
    pub text: Option<String>,
    /// Name of the parent element, for descendant queries.
    pub parent: Option<String>,
    /// Attribute table consulted by `float_property`.
    pub floats: Vec<(String, f64)>,
}

impl FakeElement {
    /// Creates an element with the given name and position id.
    pub fn new(name: &str, position_id: u64) -> Self {
        Self {
            handle: ObjectHandle::new(name, position_id),
            text: None,
            parent: None,
            floats: Vec::new(),
        }
    }

    /// Sets the element's rendered text.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Parents the element under the named element.
    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Adds a float attribute reachable via `float_property`.
    pub fn with_float(mut self, path: &str, value: f64) -> Self {
        self.floats.push((path.into(), value));
        self
    }
}

/// Populates `driver` with the standard front-end scripting: the three main
/// menu widgets, the host control, and one Elimination experience tile whose
/// title element carries the rendered label.
pub fn script_front_end(driver: &mut FakeDriver) {
    driver.push(FakeElement::new("StartGameButton", 1));
    driver.push(FakeElement::new("OptionsButton", 2));
    driver.push(FakeElement::new("QuitGameButton", 3));
    driver.push(FakeElement::new("HostSessionButton", 4));
    driver.push(FakeElement::new("W_ExperienceTile_0", 10));
    driver.push(
        FakeElement::new("TileTitleText_0", 11)
            .with_text("ELIMINATION")
            .with_parent("W_ExperienceTile_0"),
    );
}

/// Scripted driver state.
#[derive(Debug, Default)]
pub struct FakeDriver {
    /// Currently reported scene name.
    pub scene: String,
    /// Scene installed by `load_scene` per requested name; absent entries
    /// install the requested name itself.
    pub load_overrides: HashMap<String, String>,
    /// Every element the driver can see.
    pub elements: Vec<FakeElement>,
    /// Clicking an element whose name contains this fragment counts towards
    /// the gameplay transition.
    pub tile_click_fragment: Option<String>,
    /// Number of counted tile clicks after which the gameplay scene becomes
    /// current; zero disables the transition.
    pub gameplay_after_clicks: u32,
    /// Scene installed once the click threshold is reached.
    pub gameplay_scene: String,
    /// Element names whose click fails as if the handle had gone stale.
    pub failing_clicks: Vec<String>,
    /// Method names whose remote invocation is rejected.
    pub failing_methods: Vec<String>,
    /// Names of every clicked element, in order.
    pub clicks: Vec<String>,
    /// Every remote method invocation: (handle name, method, args).
    pub calls: Vec<(String, String, String)>,
    /// How many counted tile clicks have happened.
    pub tile_clicks: u32,
    /// How many times `current_scene` was queried.
    pub scene_queries: u32,
    /// How many rendered-text fallback lookups ran.
    pub text_queries: u32,
}

impl FakeDriver {
    /// Creates a driver reporting the given scene, with no elements.
    pub fn with_scene(scene: &str) -> Self {
        Self {
            scene: scene.into(),
            ..Self::default()
        }
    }

    /// Adds a scripted element.
    pub fn push(&mut self, element: FakeElement) {
        self.elements.push(element);
    }

    fn matches(element: &FakeElement, selector: &Selector) -> bool {
        match selector {
            Selector::Name(name) => element.handle.name == *name,
            Selector::NameContains(fragment) => element.handle.name.contains(fragment),
            Selector::Text(text) => element.text.as_deref() == Some(text.as_str()),
            Selector::Path(path) => element.handle.name.contains(path),
        }
    }

    fn element_by_name(&self, name: &str) -> Option<&FakeElement> {
        self.elements.iter().find(|e| e.handle.name == name)
    }
}

impl GameDriver for FakeDriver {
    fn current_scene(&mut self) -> DriverResult<String> {
        self.scene_queries += 1;
        Ok(self.scene.clone())
    }

    fn load_scene(&mut self, name: &str) -> DriverResult<()> {
        self.scene = self
            .load_overrides
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.into());
        Ok(())
    }

    fn wait_for_scene(&mut self, _name: &str, _timeout: Duration) -> DriverResult<()> {
        // Scenes flip synchronously in the fake; the wait is always satisfied.
        Ok(())
    }

    fn find_object(&mut self, selector: &Selector) -> DriverResult<Option<ObjectHandle>> {
        if matches!(selector, Selector::Text(_)) {
            self.text_queries += 1;
        }
        Ok(self
            .elements
            .iter()
            .find(|e| Self::matches(e, selector))
            .map(|e| e.handle.clone()))
    }

    fn find_objects(&mut self, selector: &Selector) -> DriverResult<Vec<ObjectHandle>> {
        Ok(self
            .elements
            .iter()
            .filter(|e| Self::matches(e, selector))
            .map(|e| e.handle.clone())
            .collect())
    }

    fn find_descendants(
        &mut self,
        ancestor: &ObjectHandle,
        selector: &Selector,
    ) -> DriverResult<Vec<ObjectHandle>> {
        Ok(self
            .elements
            .iter()
            .filter(|e| e.parent.as_deref() == Some(ancestor.name.as_str()))
            .filter(|e| Self::matches(e, selector))
            .map(|e| e.handle.clone())
            .collect())
    }

    fn wait_for_object(
        &mut self,
        selector: &Selector,
        timeout: Duration,
    ) -> DriverResult<ObjectHandle> {
        self.find_object(selector)?.ok_or(DriverError::Timeout {
            waited: timeout,
            awaited: selector.to_string(),
        })
    }

    fn click(&mut self, handle: &ObjectHandle) -> DriverResult<()> {
        self.clicks.push(handle.name.clone());
        if self.failing_clicks.contains(&handle.name) {
            return Err(DriverError::Protocol(format!(
                "handle `{}` is stale",
                handle.name
            )));
        }
        let counted = self
            .tile_click_fragment
            .as_deref()
            .is_some_and(|fragment| handle.name.contains(fragment));
        if counted {
            self.tile_clicks += 1;
            if self.gameplay_after_clicks > 0 && self.tile_clicks >= self.gameplay_after_clicks {
                self.scene = self.gameplay_scene.clone();
            }
        }
        Ok(())
    }

    fn object_text(&mut self, handle: &ObjectHandle) -> DriverResult<String> {
        self.element_by_name(&handle.name)
            .and_then(|e| e.text.clone())
            .ok_or_else(|| DriverError::Protocol(format!("`{}` has no text", handle.name)))
    }

    fn call_method(
        &mut self,
        handle: &ObjectHandle,
        method: &str,
        args: &str,
    ) -> DriverResult<()> {
        self.calls
            .push((handle.name.clone(), method.into(), args.into()));
        if self.failing_methods.iter().any(|m| m == method) {
            return Err(DriverError::Invocation {
                method: method.into(),
                detail: "rejected by scripted driver".into(),
            });
        }
        Ok(())
    }

    fn all_elements(&mut self) -> DriverResult<Vec<ObjectHandle>> {
        Ok(self.elements.iter().map(|e| e.handle.clone()).collect())
    }

    fn float_property(&mut self, handle: &ObjectHandle, path: &str) -> DriverResult<Option<f64>> {
        Ok(self.element_by_name(&handle.name).and_then(|e| {
            e.floats
                .iter()
                .find(|(name, _)| name == path)
                .map(|&(_, value)| value)
        }))
    }
}
