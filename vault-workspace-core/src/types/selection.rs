//! Multi-selection over the filtered resource list

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Resource;

/// Ordered set of selected resources, unique by id.
///
/// Transitions are pure: each method maps the current selection and its
/// input to the next selection, nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    resources: Vec<Resource>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected resources, in selection order.
    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    #[must_use]
    pub fn contains(&self, resource_id: &str) -> bool {
        self.resources.iter().any(|r| r.id == resource_id)
    }

    /// The selected resource, when exactly one is selected.
    #[must_use]
    pub fn sole(&self) -> Option<&Resource> {
        match self.resources.as_slice() {
            [resource] => Some(resource),
            _ => None,
        }
    }

    /// Single-click rule: re-selecting the sole selected resource clears
    /// the selection, anything else replaces it.
    pub fn select(&mut self, resource: Resource) {
        let toggling_off = self.len() == 1 && self.contains(&resource.id);
        self.resources.clear();
        if !toggling_off {
            self.resources.push(resource);
        }
    }

    /// Ctrl-click rule: toggles membership, keeping selection order.
    pub fn select_multiple(&mut self, resource: Resource) {
        if let Some(position) = self.resources.iter().position(|r| r.id == resource.id) {
            self.resources.remove(position);
        } else {
            self.resources.push(resource);
        }
    }

    /// Shift-click rule: selects the contiguous slice of `filtered`
    /// between the anchor (first selected resource) and the given one,
    /// both included. The slice is reversed when the target precedes the
    /// anchor, so the last-clicked end stays last. Falls back to a single
    /// select when nothing is selected yet, or when either end is absent
    /// from the filtered list.
    pub fn select_range(&mut self, resource: Resource, filtered: &[Resource]) {
        let Some(anchor) = self.resources.first() else {
            self.select(resource);
            return;
        };
        let anchor_index = filtered.iter().position(|r| r.id == anchor.id);
        let target_index = filtered.iter().position(|r| r.id == resource.id);
        let (Some(anchor_index), Some(target_index)) = (anchor_index, target_index) else {
            self.select(resource);
            return;
        };

        self.resources = if anchor_index <= target_index {
            filtered[anchor_index..=target_index].to_vec()
        } else {
            let mut backwards = filtered[target_index..=anchor_index].to_vec();
            backwards.reverse();
            backwards
        };
    }

    /// Selects the whole filtered list.
    pub fn select_all(&mut self, filtered: &[Resource]) {
        self.resources = filtered.to_vec();
    }

    /// Replaces the selection with exactly the given resource.
    pub fn replace(&mut self, resource: Resource) {
        self.resources.clear();
        self.resources.push(resource);
    }

    pub fn clear(&mut self) {
        self.resources.clear();
    }

    /// Intersects the selection with a freshly filtered list, dropping
    /// resources no longer visible.
    pub fn retain_in(&mut self, filtered: &[Resource]) {
        let visible: HashSet<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        self.resources.retain(|r| visible.contains(r.id.as_str()));
    }
}
