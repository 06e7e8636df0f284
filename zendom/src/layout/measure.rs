use std::collections::HashMap;

use super::LayoutResult;
use crate::types::Vec2;

/// Measured content sizes carried from one layout pass to the next.
/// Like focus state, this is user-managed and persists across frames.
#[derive(Debug, Default, Clone)]
pub struct MeasureState {
    content_sizes: HashMap<String, Vec2>,
}

impl MeasureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last measured content size of `id`, zero before the first pass.
    pub fn get(&self, id: &str) -> Vec2 {
        self.content_sizes.get(id).copied().unwrap_or_default()
    }

    /// Record a size. Returns true if it differs from the cached one.
    pub fn set(&mut self, id: &str, size: Vec2) -> bool {
        if self.content_sizes.get(id) == Some(&size) {
            return false;
        }
        self.content_sizes.insert(id.to_string(), size);
        true
    }

    /// Pull every content size out of a finished pass.
    /// Returns the ids whose size changed, sorted.
    pub fn sync(&mut self, layout: &LayoutResult) -> Vec<String> {
        let mut changed: Vec<String> = layout
            .content_sizes()
            .filter(|&(id, size)| self.set(id, size))
            .map(|(id, _)| id.to_string())
            .collect();
        changed.sort();

        for id in &changed {
            log::debug!("[measure] content size of {} is now {:?}", id, self.get(id));
        }

        changed
    }
}
