//! Resource search filters

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::{Folder, Resource, Tag, PERMISSION_OWNER};

/// Resource search filter. Exactly one filter is active at a time.
///
/// `None` is only valid before the first route resolution; every route
/// change resolves it to a concrete filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum ResourceFilter {
    /// Initial filter at page load
    #[default]
    None,
    /// All resources
    All,
    /// Resources outside any folder
    RootFolder,
    /// Resources belonging to a given folder
    Folder(Folder),
    /// Resources carrying a given tag
    Tag(Tag),
    /// Free-text search over names, logins, URIs, descriptions and tag slugs
    Text(String),
    /// Resources the current user owns
    ItemsIOwn,
    /// Resources marked as favorites
    Favorite,
    /// Resources shared with the current user by someone else
    SharedWithMe,
    /// All resources, most recently modified first
    RecentlyModified,
}

impl ResourceFilter {
    /// Filter kind name, for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::All => "ALL",
            Self::RootFolder => "ROOT-FOLDER",
            Self::Folder(_) => "FOLDER",
            Self::Tag(_) => "TAG",
            Self::Text(_) => "TEXT",
            Self::ItemsIOwn => "ITEMS-I-OWN",
            Self::Favorite => "FAVORITE",
            Self::SharedWithMe => "SHARED-WITH-ME",
            Self::RecentlyModified => "RECENTLY-MODIFIED",
        }
    }

    /// Runs the filter over a cached resource list.
    ///
    /// Returns `None` for [`ResourceFilter::None`], which leaves the
    /// current view untouched. Every other kind returns the matching
    /// resources; [`ResourceFilter::RecentlyModified`] additionally
    /// orders them by modification time, newest first.
    #[must_use]
    pub fn apply(&self, resources: &[Resource]) -> Option<Vec<Resource>> {
        match self {
            Self::None => None,
            Self::All => Some(resources.to_vec()),
            Self::RootFolder => Some(
                resources
                    .iter()
                    .filter(|r| r.folder_parent_id.is_none())
                    .cloned()
                    .collect(),
            ),
            Self::Folder(folder) => Some(
                resources
                    .iter()
                    .filter(|r| r.folder_parent_id.as_deref() == Some(folder.id.as_str()))
                    .cloned()
                    .collect(),
            ),
            Self::Tag(tag) => Some(
                resources
                    .iter()
                    .filter(|r| r.tags.iter().any(|t| t.id == tag.id))
                    .cloned()
                    .collect(),
            ),
            Self::Text(text) => Some(search_text(resources, text)),
            Self::ItemsIOwn => Some(
                resources
                    .iter()
                    .filter(|r| r.permission.is_owner())
                    .cloned()
                    .collect(),
            ),
            Self::Favorite => Some(
                resources
                    .iter()
                    .filter(|r| r.favorite.is_some())
                    .cloned()
                    .collect(),
            ),
            Self::SharedWithMe => Some(
                resources
                    .iter()
                    .filter(|r| r.permission.permission_type < PERMISSION_OWNER)
                    .cloned()
                    .collect(),
            ),
            Self::RecentlyModified => {
                let mut recent = resources.to_vec();
                recent.sort_by(|a, b| b.modified.cmp(&a.modified));
                Some(recent)
            }
        }
    }
}

/// Free-text search: a resource matches when ANY of the whitespace-split
/// words matches (case-insensitive substring) any of its text fields or
/// tag slugs. An empty or all-whitespace needle matches everything.
fn search_text(resources: &[Resource], text: &str) -> Vec<Resource> {
    let patterns = word_patterns(text);
    if patterns.is_empty() {
        return resources.to_vec();
    }
    resources
        .iter()
        .filter(|r| matches_any_word(r, &patterns))
        .cloned()
        .collect()
}

fn word_patterns(text: &str) -> Vec<Regex> {
    text.split_whitespace()
        .filter_map(|word| {
            // Escaped literals always compile.
            RegexBuilder::new(&regex::escape(word))
                .case_insensitive(true)
                .build()
                .ok()
        })
        .collect()
}

fn matches_any_word(resource: &Resource, patterns: &[Regex]) -> bool {
    patterns.iter().any(|re| {
        re.is_match(&resource.name)
            || resource
                .username
                .as_deref()
                .is_some_and(|v| re.is_match(v))
            || resource.uri.as_deref().is_some_and(|v| re.is_match(v))
            || resource
                .description
                .as_deref()
                .is_some_and(|v| re.is_match(v))
            || resource.tags.iter().any(|t| re.is_match(&t.slug))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_folder, test_resource, test_tag};

    fn ids(resources: &[Resource]) -> Vec<&str> {
        resources.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn all_returns_every_resource() {
        let resources = vec![test_resource("alpha"), test_resource("beta")];
        let filtered = ResourceFilter::All.apply(&resources).unwrap();
        assert_eq!(ids(&filtered), ids(&resources));
    }

    #[test]
    fn none_leaves_the_view_untouched() {
        let resources = vec![test_resource("alpha")];
        assert!(ResourceFilter::None.apply(&resources).is_none());
    }

    #[test]
    fn folder_filter_matches_parent_id_only() {
        let folder = test_folder("accounting");
        let mut inside = test_resource("inside");
        inside.folder_parent_id = Some(folder.id.clone());
        let mut elsewhere = test_resource("elsewhere");
        elsewhere.folder_parent_id = Some("other-folder".to_string());
        let root = test_resource("root");

        let resources = vec![inside.clone(), elsewhere, root];
        let filtered = ResourceFilter::Folder(folder).apply(&resources).unwrap();
        assert_eq!(ids(&filtered), vec![inside.id.as_str()]);
    }

    #[test]
    fn root_folder_filter_keeps_unfiled_resources() {
        let mut filed = test_resource("filed");
        filed.folder_parent_id = Some("f-1".to_string());
        let root = test_resource("root");

        let filtered = ResourceFilter::RootFolder
            .apply(&[filed, root.clone()])
            .unwrap();
        assert_eq!(ids(&filtered), vec![root.id.as_str()]);
    }

    #[test]
    fn tag_filter_matches_by_tag_id() {
        let tag = test_tag("banking");
        let mut tagged = test_resource("tagged");
        tagged.tags = vec![tag.clone()];
        let untagged = test_resource("untagged");

        let filtered = ResourceFilter::Tag(tag)
            .apply(&[tagged.clone(), untagged])
            .unwrap();
        assert_eq!(ids(&filtered), vec![tagged.id.as_str()]);
    }

    #[test]
    fn text_filter_is_case_insensitive() {
        let ada = test_resource("ada");
        let other = test_resource("grace");
        let filtered = ResourceFilter::Text("ADA".to_string())
            .apply(&[ada.clone(), other])
            .unwrap();
        assert_eq!(ids(&filtered), vec![ada.id.as_str()]);
    }

    #[test]
    fn empty_text_matches_everything() {
        let resources = vec![test_resource("alpha"), test_resource("beta")];
        let filtered = ResourceFilter::Text(String::new())
            .apply(&resources)
            .unwrap();
        assert_eq!(filtered.len(), 2);

        let filtered = ResourceFilter::Text("   ".to_string())
            .apply(&resources)
            .unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn text_filter_matches_any_word_across_fields() {
        let mut by_username = test_resource("first");
        by_username.username = Some("ada@example.com".to_string());
        let mut by_tag = test_resource("second");
        by_tag.tags = vec![test_tag("lovelace")];
        let neither = test_resource("third");

        let filtered = ResourceFilter::Text("ada lovelace".to_string())
            .apply(&[by_username.clone(), by_tag.clone(), neither])
            .unwrap();
        assert_eq!(
            ids(&filtered),
            vec![by_username.id.as_str(), by_tag.id.as_str()]
        );
    }

    #[test]
    fn text_filter_escapes_regex_metacharacters() {
        let mut dotted = test_resource("a.b");
        dotted.uri = Some("https://a.b".to_string());
        let plain = test_resource("axb");

        let filtered = ResourceFilter::Text("a.b".to_string())
            .apply(&[dotted.clone(), plain])
            .unwrap();
        assert_eq!(ids(&filtered), vec![dotted.id.as_str()]);
    }

    #[test]
    fn ownership_filters_split_on_permission_type() {
        let owned = test_resource("mine");
        let mut shared = test_resource("theirs");
        shared.permission.permission_type = 7;

        let resources = vec![owned.clone(), shared.clone()];
        let own = ResourceFilter::ItemsIOwn.apply(&resources).unwrap();
        assert_eq!(ids(&own), vec![owned.id.as_str()]);

        let shared_with_me = ResourceFilter::SharedWithMe.apply(&resources).unwrap();
        assert_eq!(ids(&shared_with_me), vec![shared.id.as_str()]);
    }

    #[test]
    fn favorite_filter_keeps_marked_resources() {
        let mut starred = test_resource("starred");
        starred.favorite = Some(crate::types::Favorite {
            id: "fav-1".to_string(),
        });
        let plain = test_resource("plain");

        let filtered = ResourceFilter::Favorite
            .apply(&[starred.clone(), plain])
            .unwrap();
        assert_eq!(ids(&filtered), vec![starred.id.as_str()]);
    }

    #[test]
    fn recently_modified_orders_newest_first() {
        let mut old = test_resource("old");
        old.modified = "2021-01-01T00:00:00Z".parse().unwrap();
        let mut new = test_resource("new");
        new.modified = "2021-02-01T00:00:00Z".parse().unwrap();

        let filtered = ResourceFilter::RecentlyModified
            .apply(&[old.clone(), new.clone()])
            .unwrap();
        assert_eq!(ids(&filtered), vec![new.id.as_str(), old.id.as_str()]);
    }

    #[test]
    fn filter_round_trips_through_navigation_state() {
        let filter = ResourceFilter::Text("bank".to_string());
        let json = serde_json::to_string(&filter).unwrap();
        let back: ResourceFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filter);
    }
}
