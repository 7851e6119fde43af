//! Tag classification.
//!
//! A [`TagClassifier`] maps tag names to the set of [`Role`]s that drive
//! layout. A tag may carry several roles at once (for example `h1` both opens
//! a scene and opens a shot). Tags absent from the table have no role and are
//! treated as plain containers. Untagged text nodes are implicitly plain text
//! and never consult the table.
//!
//! The table deserializes from a map of tag name to role list, which is how
//! it appears in configuration files:
//!
//! ```
//! # use shotlist_core::classify::{Role, TagClassifier};
//! let classifier: TagClassifier = toml::from_str(
//!     r#"
//!     section = ["scene", "shot"]
//!     li = ["shot"]
//!     nav = ["skip"]
//!     "#,
//! )
//! .unwrap();
//!
//! let roles = classifier.roles("section");
//! assert!(roles.contains(Role::SceneBoundary));
//! assert!(roles.contains(Role::ShotBoundary));
//! assert!(classifier.roles("div").is_empty());
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

/// A layout role a tag can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Role {
    /// The element and its subtree are ignored entirely.
    #[serde(rename = "skip")]
    Skip,
    /// The element closes the pending scene and opens a new one.
    #[serde(rename = "scene", alias = "scene-boundary")]
    SceneBoundary,
    /// The element closes the pending shot and opens a new one.
    #[serde(rename = "shot", alias = "shot-boundary")]
    ShotBoundary,
    /// The element is a hyperlink leaf; its text and `href` form one fragment.
    #[serde(rename = "link")]
    Link,
}

impl Role {
    /// All roles, in dispatch order.
    pub const ALL: [Role; 4] = [
        Role::Skip,
        Role::SceneBoundary,
        Role::ShotBoundary,
        Role::Link,
    ];

    fn bit(self) -> u8 {
        match self {
            Self::Skip => 1 << 0,
            Self::SceneBoundary => 1 << 1,
            Self::ShotBoundary => 1 << 2,
            Self::Link => 1 << 3,
        }
    }

    /// Configuration name of the role.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::SceneBoundary => "scene",
            Self::ShotBoundary => "shot",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`Role`]s.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoleSet(u8);

impl RoleSet {
    /// The empty set.
    pub const EMPTY: RoleSet = RoleSet(0);

    /// Returns `true` if `role` is in the set.
    pub fn contains(&self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    /// Add `role` to the set.
    pub fn insert(&mut self, role: Role) {
        self.0 |= role.bit();
    }

    /// Returns a copy of the set with `role` added.
    pub fn with(mut self, role: Role) -> Self {
        self.insert(role);
        self
    }

    /// Returns `true` if the set holds no roles.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Roles in the set, in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(|role| self.contains(*role))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Mapping from tag name to the roles it carries.
///
/// Tag names are stored lowercased; lookups are exact, so callers building
/// trees by hand should use lowercase tag names as the markup parser does.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "IndexMap<String, Vec<Role>>")]
pub struct TagClassifier {
    table: IndexMap<String, RoleSet>,
}

impl TagClassifier {
    /// Create a classifier with no entries; every element is a container.
    pub fn empty() -> Self {
        Self {
            table: IndexMap::new(),
        }
    }

    /// The grammar for HTML documents.
    ///
    /// - `title`: skip
    /// - `h1`: scene and shot boundary
    /// - `dl`: scene boundary
    /// - `p`, `dt`, `dd`: shot boundary
    /// - `a`: link
    pub fn html() -> Self {
        Self::empty()
            .with_role("title", Role::Skip)
            .with_role("h1", Role::SceneBoundary)
            .with_role("dl", Role::SceneBoundary)
            .with_role("p", Role::ShotBoundary)
            .with_role("dt", Role::ShotBoundary)
            .with_role("dd", Role::ShotBoundary)
            .with_role("h1", Role::ShotBoundary)
            .with_role("a", Role::Link)
    }

    /// Add `role` to the roles of `tag`.
    pub fn with_role(mut self, tag: &str, role: Role) -> Self {
        self.insert(tag, role);
        self
    }

    /// Add `role` to the roles of `tag` in place.
    pub fn insert(&mut self, tag: &str, role: Role) {
        self.table
            .entry(tag.to_ascii_lowercase())
            .or_default()
            .insert(role);
    }

    /// Roles carried by `tag`; empty for unknown tags.
    pub fn roles(&self, tag: &str) -> RoleSet {
        self.table.get(tag).copied().unwrap_or_default()
    }

    /// Number of tags with at least one entry.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, RoleSet)> {
        self.table.iter().map(|(tag, roles)| (tag.as_str(), *roles))
    }
}

impl Default for TagClassifier {
    fn default() -> Self {
        Self::html()
    }
}

impl From<IndexMap<String, Vec<Role>>> for TagClassifier {
    fn from(table: IndexMap<String, Vec<Role>>) -> Self {
        table
            .into_iter()
            .flat_map(|(tag, roles)| roles.into_iter().map(move |role| (tag.clone(), role)))
            .fold(Self::empty(), |classifier, (tag, role)| {
                classifier.with_role(&tag, role)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_grammar() {
        let classifier = TagClassifier::html();

        assert!(classifier.roles("title").contains(Role::Skip));
        assert!(classifier.roles("dl").contains(Role::SceneBoundary));
        assert!(!classifier.roles("dl").contains(Role::ShotBoundary));
        assert!(classifier.roles("dt").contains(Role::ShotBoundary));
        assert!(classifier.roles("a").contains(Role::Link));
        assert!(classifier.roles("body").is_empty());
    }

    #[test]
    fn test_dual_role_tag() {
        let roles = TagClassifier::html().roles("h1");
        assert_eq!(
            roles.iter().collect::<Vec<_>>(),
            vec![Role::SceneBoundary, Role::ShotBoundary]
        );
    }

    #[test]
    fn test_tags_are_lowercased_on_insert() {
        let classifier = TagClassifier::empty().with_role("SECTION", Role::SceneBoundary);
        assert!(classifier.roles("section").contains(Role::SceneBoundary));
        assert!(classifier.roles("SECTION").is_empty());
    }

    #[test]
    fn test_role_set_debug() {
        let roles: RoleSet = [Role::Link, Role::Skip].into_iter().collect();
        assert_eq!(format!("{roles:?}"), "{Skip, Link}");
    }

    #[test]
    fn test_deserialize_with_aliases() {
        let classifier: TagClassifier = toml::from_str(
            r#"
            article = ["scene-boundary", "shot-boundary"]
            a = ["link"]
            "#,
        )
        .unwrap();

        assert_eq!(classifier.len(), 2);
        assert!(classifier.roles("article").contains(Role::ShotBoundary));
        assert_eq!(
            classifier.iter().map(|(tag, _)| tag).collect::<Vec<_>>(),
            vec!["article", "a"]
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_role() {
        let result: Result<TagClassifier, _> = toml::from_str(r#"p = ["paragraph"]"#);
        assert!(result.is_err());
    }
}
