//! Image carousel navigation for the project detail page.
//!
//! Navigation wraps in both directions; there is no disabled state at
//! either end. Galleries of zero or one image never move.

use crate::error::CoreError;

/// Current position within a project's ordered image list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryNavigator {
    index: usize,
    len: usize,
}

impl GalleryNavigator {
    /// Start at the first image.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Resume at `index`, rejecting positions outside the gallery.
    pub fn at(len: usize, index: usize) -> Result<Self, CoreError> {
        let mut nav = Self::new(len);
        nav.jump_to(index)?;
        Ok(nav)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> usize {
        if self.len > 1 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn previous(&mut self) -> usize {
        if self.len > 1 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Move to `index`. Out-of-range positions are a caller bug and are
    /// refused without changing the current position.
    pub fn jump_to(&mut self, index: usize) -> Result<usize, CoreError> {
        if index >= self.len {
            return Err(CoreError::Validation(format!(
                "Image index {index} is out of range for a gallery of {} images",
                self.len
            )));
        }
        self.index = index;
        Ok(self.index)
    }

    /// Pick the current item out of `items` (normally the project's image URLs).
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}
