//! Group attachment for tree layout.
//!
//! Attachment matches each profile's group field against folder names with
//! a pre-order search, falling back to the hierarchy root. O(n·m) over
//! profiles and folders, which is fine at interactive scale.

use crate::models::{GroupHierarchy, GroupId, ProfileRecord};

/// Computes the attachment point for every profile
///
/// Each profile attaches under the first folder anywhere in the hierarchy
/// whose leaf name equals the profile's group field; profiles with no
/// matching folder attach at the root. The returned vector is parallel to
/// `profiles`.
///
/// Matching compares folder names only, never full paths, so a profile
/// aimed at a nested folder can land on an unrelated same-named folder
/// that comes first in pre-order. That placement is part of the observable
/// behavior and is kept as is.
#[must_use]
pub fn attach(hierarchy: &GroupHierarchy, profiles: &[ProfileRecord]) -> Vec<GroupId> {
    profiles
        .iter()
        .map(|profile| {
            hierarchy
                .find_by_name(&profile.group)
                .unwrap_or(GroupHierarchy::ROOT)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(filename: &str, group: &str) -> ProfileRecord {
        ProfileRecord::new(filename, filename).with_group(group)
    }

    #[test]
    fn test_attach_by_group_name() {
        let mut h = GroupHierarchy::new();
        let work = h.add_child(GroupHierarchy::ROOT, "Work");
        let home = h.add_child(GroupHierarchy::ROOT, "Home");

        let profiles = vec![profile("a.cvp", "Home"), profile("b.cvp", "Work")];
        assert_eq!(attach(&h, &profiles), vec![home, work]);
    }

    #[test]
    fn test_unmatched_group_falls_back_to_root() {
        let mut h = GroupHierarchy::new();
        h.add_child(GroupHierarchy::ROOT, "Work");

        let profiles = vec![profile("a.cvp", "Archive"), profile("b.cvp", "")];
        assert_eq!(
            attach(&h, &profiles),
            vec![GroupHierarchy::ROOT, GroupHierarchy::ROOT]
        );
    }

    #[test]
    fn test_duplicate_names_resolve_to_first_in_preorder() {
        let mut h = GroupHierarchy::new();
        let work = h.add_child(GroupHierarchy::ROOT, "Work");
        let nested_team = h.add_child(work, "Team");
        let _top_team = h.add_child(GroupHierarchy::ROOT, "Team");

        // Both profiles land on the nested folder: it is visited first,
        // regardless of which folder the user meant.
        let profiles = vec![profile("a.cvp", "Team"), profile("b.cvp", "Team")];
        assert_eq!(attach(&h, &profiles), vec![nested_team, nested_team]);
    }
}
