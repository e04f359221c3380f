//! Slide selection with wraparound.

use crate::prelude::*;

/// Index of the visible slide over a list of `len` images.
///
/// On an empty list every navigation is a no-op and the index stays 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlideSelector {
    index: usize,
    len: usize,
}

impl SlideSelector {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adopt a freshly fetched list and go back to its first slide.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.index = 0;
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.index = if self.index + 1 >= self.len {
            0
        } else {
            self.index + 1
        };
    }

    /// Up to `count` slide indices, nearest to the current one first.
    /// At equal distance the next slide comes before the previous one,
    /// both wrapping around the ends of the list.
    pub fn nearby(&self, count: usize) -> Vec<usize> {
        let count = count.min(self.len);
        let mut order = Vec::with_capacity(count);
        if count == 0 {
            return order;
        }
        order.push(self.index);
        let mut step = 1;
        while order.len() < count {
            let forward = (self.index + step) % self.len;
            if !order.contains(&forward) {
                order.push(forward);
            }
            let backward = (self.index + self.len - step % self.len) % self.len;
            if order.len() < count && !order.contains(&backward) {
                order.push(backward);
            }
            step += 1;
        }
        order
    }

    /// Jump straight to `index`. Out of range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            warn!("Ignoring selection of slide {} of {}", index, self.len);
            return false;
        }
        self.index = index;
        true
    }
}
