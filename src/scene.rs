//! Passive grouping of objects.
//!
//! A `Scene` only holds members. It never draws and never sees input; to put
//! its members on screen, move them into a game with [`crate::game::Game::extend`].

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::fmt;

use crate::object::Renderable;

#[derive(Default)]
pub struct Scene {
    objects: Vec<Box<dyn Renderable>>,
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene").field("objects", &self.objects.len()).finish()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `obj` to the scene.
    pub fn add(&mut self, obj: impl Renderable + 'static) {
        self.objects.push(Box::new(obj));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Members in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Renderable>> {
        self.objects.iter_mut()
    }
}

impl IntoIterator for Scene {
    type Item = Box<dyn Renderable>;
    type IntoIter = std::vec::IntoIter<Box<dyn Renderable>>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}
