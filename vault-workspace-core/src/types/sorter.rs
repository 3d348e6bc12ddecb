//! Resource list sort order

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::Resource;

/// Resource property the list can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortProperty {
    Name,
    Username,
    Uri,
    Description,
    Created,
    Modified,
}

/// Sort order over the filtered resource list.
///
/// Timestamp properties compare chronologically; string properties use
/// case-sensitive lexicographic order, with absent values sorting as the
/// empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSorter {
    /// Property the list is ordered by
    pub property: SortProperty,
    /// Direction; `false` reverses the comparison
    pub ascending: bool,
}

impl Default for ResourceSorter {
    /// Most recently modified first.
    fn default() -> Self {
        Self {
            property: SortProperty::Modified,
            ascending: false,
        }
    }
}

impl ResourceSorter {
    /// Applies the toggle rule: picking a new property starts ascending,
    /// re-picking the current property flips the direction.
    pub fn toggle(&mut self, property: SortProperty) {
        if self.property == property {
            self.ascending = !self.ascending;
        } else {
            self.property = property;
            self.ascending = true;
        }
    }

    /// Sorts the given resources in place.
    pub fn sort(&self, resources: &mut [Resource]) {
        resources.sort_by(|a, b| self.compare(a, b));
    }

    fn compare(&self, a: &Resource, b: &Resource) -> Ordering {
        let ordering = match self.property {
            SortProperty::Name => a.name.cmp(&b.name),
            SortProperty::Username => cmp_optional(a.username.as_deref(), b.username.as_deref()),
            SortProperty::Uri => cmp_optional(a.uri.as_deref(), b.uri.as_deref()),
            SortProperty::Description => {
                cmp_optional(a.description.as_deref(), b.description.as_deref())
            }
            SortProperty::Created => a.created.cmp(&b.created),
            SortProperty::Modified => a.modified.cmp(&b.modified),
        };
        if self.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

fn cmp_optional(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.unwrap_or_default().cmp(b.unwrap_or_default())
}
