//! Keyboard input: logical key bindings and their pressed state.
//!
//! Games refer to keys by logical name (`"up"`, `"jump"`), and bind each name
//! to a browser key identifier (`"ArrowUp"`, `" "`). [`InputMap`] holds both
//! mappings and keeps their key sets identical: binding a name always creates
//! its pressed entry. [`Input`] is a cheap, cloneable handle onto one shared
//! map, written by the key listeners and read by objects during a frame.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Whether a key went down or came up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Down,
    Up,
}

/// A keyboard event as delivered by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    /// The browser key name (`KeyboardEvent.key`), e.g. `"ArrowUp"`.
    pub key: String,
}

impl KeyEvent {
    #[must_use]
    pub fn down(key: impl Into<String>) -> Self {
        Self { kind: KeyEventKind::Down, key: key.into() }
    }

    #[must_use]
    pub fn up(key: impl Into<String>) -> Self {
        Self { kind: KeyEventKind::Up, key: key.into() }
    }
}

/// Logical name → physical key, and logical name → pressed.
#[derive(Debug, Clone, Default)]
pub struct InputMap {
    pressed: HashMap<String, bool>,
    bindings: HashMap<String, String>,
}

impl InputMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `key`, replacing any earlier binding, and reset it to not pressed.
    pub fn bind(&mut self, name: &str, key: &str) {
        self.bindings.insert(name.to_owned(), key.to_owned());
        self.pressed.insert(name.to_owned(), false);
    }

    /// Apply a key event to every name bound to its key.
    ///
    /// Several names may share a key; all of them change together.
    /// Returns `true` if at least one binding matched.
    pub fn apply(&mut self, event: &KeyEvent) -> bool {
        let down = event.kind == KeyEventKind::Down;
        let mut matched = false;
        for (name, key) in &self.bindings {
            if *key == event.key {
                self.pressed.insert(name.clone(), down);
                matched = true;
            }
        }
        matched
    }

    /// Whether `name` is currently held. Unbound names are never pressed.
    #[must_use]
    pub fn is_pressed(&self, name: &str) -> bool {
        self.pressed.get(name).copied().unwrap_or(false)
    }

    /// The key bound to `name`, if any.
    #[must_use]
    pub fn binding(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }

    /// All bound logical names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Shared handle onto a game's [`InputMap`].
///
/// Clones observe the same state. Hand one to any object that needs to read
/// input during `update`.
#[derive(Debug, Clone, Default)]
pub struct Input(Rc<RefCell<InputMap>>);

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_pressed(&self, name: &str) -> bool {
        self.0.borrow().is_pressed(name)
    }

    #[must_use]
    pub fn binding(&self, name: &str) -> Option<String> {
        self.0.borrow().binding(name).map(str::to_owned)
    }

    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.0.borrow().names().map(str::to_owned).collect()
    }

    pub(crate) fn bind(&self, name: &str, key: &str) {
        self.0.borrow_mut().bind(name, key);
    }

    pub(crate) fn apply(&self, event: &KeyEvent) -> bool {
        self.0.borrow_mut().apply(event)
    }

    /// A snapshot of the current map.
    #[must_use]
    pub fn snapshot(&self) -> InputMap {
        self.0.borrow().clone()
    }
}
