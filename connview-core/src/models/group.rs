//! Group hierarchy supplied by the profile store.
//!
//! The hierarchy is an arena of folder nodes addressed by index, with child
//! lists held as index sequences. The catalog treats a hierarchy as
//! immutable input for the duration of one rebuild cycle.

/// Index of a node within a [`GroupHierarchy`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(usize);

/// A folder node in the supplied hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNode {
    /// Leaf name of the folder
    pub name: String,
    /// Slash-separated path from the root to this folder
    pub full_path: String,
    /// Ordered child folders
    children: Vec<GroupId>,
}

impl GroupNode {
    /// Returns the ordered child ids of this folder
    #[must_use]
    pub fn children(&self) -> &[GroupId] {
        &self.children
    }
}

/// Arena-backed tree of folder nodes
///
/// Index 0 is a synthetic, unnamed root that never appears as a catalog
/// row; profiles whose group matches no folder attach there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupHierarchy {
    nodes: Vec<GroupNode>,
}

impl GroupHierarchy {
    /// Id of the synthetic root node
    pub const ROOT: GroupId = GroupId(0);

    /// Creates an empty hierarchy containing only the root
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![GroupNode {
                name: String::new(),
                full_path: String::new(),
                children: Vec::new(),
            }],
        }
    }

    /// Appends a folder under `parent` and returns its id
    ///
    /// The full path is derived from the parent's path; children keep
    /// insertion order.
    pub fn add_child(&mut self, parent: GroupId, name: impl Into<String>) -> GroupId {
        let name = name.into();
        let full_path = {
            let parent_path = &self.nodes[parent.0].full_path;
            if parent_path.is_empty() {
                name.clone()
            } else {
                format!("{parent_path}/{name}")
            }
        };
        let id = GroupId(self.nodes.len());
        self.nodes.push(GroupNode {
            name,
            full_path,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Builds a hierarchy from slash-separated folder paths
    ///
    /// Intermediate folders are created on demand; repeated paths are
    /// deduplicated. Useful for stores that persist groups as path strings.
    #[must_use]
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hierarchy = Self::new();
        for path in paths {
            let mut current = Self::ROOT;
            for segment in path.as_ref().split('/').filter(|s| !s.is_empty()) {
                current = hierarchy
                    .node(current)
                    .children
                    .iter()
                    .copied()
                    .find(|&c| hierarchy.node(c).name == segment)
                    .unwrap_or_else(|| hierarchy.add_child(current, segment));
            }
        }
        hierarchy
    }

    /// Returns the node for the given id
    #[must_use]
    pub fn node(&self, id: GroupId) -> &GroupNode {
        &self.nodes[id.0]
    }

    /// Returns the number of folders, excluding the synthetic root
    #[must_use]
    pub fn folder_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Returns true if the hierarchy holds no folders
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Visits every folder in pre-order, excluding the synthetic root
    #[must_use]
    pub fn preorder(&self) -> Vec<GroupId> {
        let mut out = Vec::with_capacity(self.folder_count());
        self.preorder_into(Self::ROOT, &mut out);
        out
    }

    fn preorder_into(&self, id: GroupId, out: &mut Vec<GroupId>) {
        for &child in self.node(id).children() {
            out.push(child);
            self.preorder_into(child, out);
        }
    }

    /// Finds the first folder in pre-order whose leaf name equals `name`
    ///
    /// Matching is on the folder name string only, never the full path, so
    /// two same-named folders at different depths are indistinguishable:
    /// the first one visited wins.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<GroupId> {
        self.preorder()
            .into_iter()
            .find(|&id| self.node(id).name == name)
    }
}

impl Default for GroupHierarchy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hierarchy_is_empty() {
        let h = GroupHierarchy::new();
        assert!(h.is_empty());
        assert_eq!(h.folder_count(), 0);
        assert!(h.preorder().is_empty());
    }

    #[test]
    fn test_add_child_builds_full_path() {
        let mut h = GroupHierarchy::new();
        let work = h.add_child(GroupHierarchy::ROOT, "Work");
        let eu = h.add_child(work, "EU");
        assert_eq!(h.node(work).full_path, "Work");
        assert_eq!(h.node(eu).full_path, "Work/EU");
    }

    #[test]
    fn test_preorder_visits_parents_before_children() {
        let mut h = GroupHierarchy::new();
        let work = h.add_child(GroupHierarchy::ROOT, "Work");
        let eu = h.add_child(work, "EU");
        let home = h.add_child(GroupHierarchy::ROOT, "Home");
        assert_eq!(h.preorder(), vec![work, eu, home]);
    }

    #[test]
    fn test_find_by_name_prefers_first_in_preorder() {
        let mut h = GroupHierarchy::new();
        let work = h.add_child(GroupHierarchy::ROOT, "Work");
        let nested_team = h.add_child(work, "Team");
        let top_team = h.add_child(GroupHierarchy::ROOT, "Team");
        // The nested folder sits earlier in pre-order than the top-level one.
        assert_eq!(h.find_by_name("Team"), Some(nested_team));
        assert_ne!(h.find_by_name("Team"), Some(top_team));
    }

    #[test]
    fn test_find_by_name_misses_unknown_group() {
        let mut h = GroupHierarchy::new();
        h.add_child(GroupHierarchy::ROOT, "Work");
        assert_eq!(h.find_by_name("Archive"), None);
    }

    #[test]
    fn test_from_paths_creates_intermediate_folders() {
        let h = GroupHierarchy::from_paths(["Work/EU/Berlin", "Work/US", "Home"]);
        assert_eq!(h.folder_count(), 5);
        let berlin = h.find_by_name("Berlin").unwrap();
        assert_eq!(h.node(berlin).full_path, "Work/EU/Berlin");
    }

    #[test]
    fn test_from_paths_deduplicates() {
        let h = GroupHierarchy::from_paths(["Work", "Work", "Work/EU", "Work/EU"]);
        assert_eq!(h.folder_count(), 2);
    }
}
