//! Property-based tests for view-state reconciliation across rebuilds

use proptest::prelude::*;
use std::collections::HashSet;

use connview_core::models::{GroupHierarchy, Layout, ProfileRecord};
use connview_core::sort::{SortColumn, SortDirection};
use connview_core::{Catalog, CatalogModel, CatalogSettings, MemoryProfileStore, ViewState};

// ========== Strategies ==========

fn arb_group() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Work".to_string()),
        Just("Home".to_string()),
        Just("Lab".to_string()),
    ]
}

fn arb_profiles() -> impl Strategy<Value = Vec<ProfileRecord>> {
    prop::collection::vec(("[a-zA-Z]{1,8}", arb_group()), 1..10).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (name, group))| {
                ProfileRecord::new(format!("p{i}.cvp"), name).with_group(group)
            })
            .collect()
    })
}

fn hierarchy() -> GroupHierarchy {
    GroupHierarchy::from_paths(["Work", "Home", "Lab"])
}

fn tree_catalog(profiles: &[ProfileRecord]) -> Catalog<MemoryProfileStore> {
    let mut store = MemoryProfileStore::new();
    for path in ["Work", "Home", "Lab"] {
        store.add_group_path(path);
    }
    for profile in profiles {
        store.insert(profile.clone());
    }
    let settings = CatalogSettings {
        layout: Layout::Tree,
        ..CatalogSettings::default()
    };
    let mut catalog = Catalog::new(store, settings);
    catalog.reload();
    catalog
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Restoring against a rebuilt but unchanged profile set reproduces
    /// the captured selection and expansion.
    #[test]
    fn prop_round_trip_preserves_state(
        profiles in arb_profiles(),
        selected_index in 0usize..10,
    ) {
        let mut catalog = tree_catalog(&profiles);
        let identity = profiles
            .get(selected_index % profiles.len())
            .map(|p| p.filename.clone())
            .unwrap();
        catalog.select(Some(identity.as_str()));
        catalog.set_expanded("Work", true);
        catalog.set_expanded("Lab", true);

        let before_selected = catalog.selected_identity().map(str::to_string);
        let before_expanded = catalog.expanded_paths().clone();
        let before_rows: Vec<String> = catalog
            .visible_rows()
            .iter()
            .map(|r| r.display_name().to_string())
            .collect();

        catalog.reload();

        let after_rows: Vec<String> = catalog
            .visible_rows()
            .iter()
            .map(|r| r.display_name().to_string())
            .collect();
        prop_assert_eq!(catalog.selected_identity().map(str::to_string), before_selected);
        prop_assert_eq!(catalog.expanded_paths(), &before_expanded);
        prop_assert_eq!(after_rows, before_rows);
    }

    /// Restore never invents a selection that was not captured.
    #[test]
    fn prop_restore_never_invents_selection(profiles in arb_profiles()) {
        let model = CatalogModel::build(Layout::Tree, &hierarchy(), &profiles);
        let state = ViewState::capture(
            SortColumn::Name,
            SortDirection::Ascending,
            HashSet::new(),
            Some("missing.cvp".to_string()),
            String::new(),
        );
        let rows = model.visible_rows("", SortColumn::Name, SortDirection::Ascending);
        let outcome = state.restore(&rows);
        prop_assert_eq!(outcome.selected, None);
    }

    /// Applied expansion is always the intersection of the captured paths
    /// and the folder paths present in the new sequence.
    #[test]
    fn prop_expansion_is_intersection(
        profiles in arb_profiles(),
        captured in prop::collection::hash_set(
            prop_oneof![
                Just("Work".to_string()),
                Just("Home".to_string()),
                Just("Gone".to_string()),
            ],
            0..3,
        ),
    ) {
        let model = CatalogModel::build(Layout::Tree, &hierarchy(), &profiles);
        let state = ViewState::capture(
            SortColumn::Name,
            SortDirection::Ascending,
            captured.clone(),
            None,
            String::new(),
        );
        let rows = model.visible_rows("", SortColumn::Name, SortDirection::Ascending);
        let outcome = state.restore(&rows);

        let folder_paths: HashSet<String> = rows
            .iter()
            .filter(|r| r.is_folder())
            .filter_map(|r| match r {
                connview_core::CatalogRow::Folder(f) => Some(f.full_path.clone()),
                connview_core::CatalogRow::Profile(_) => None,
            })
            .collect();
        let expected: HashSet<String> =
            captured.intersection(&folder_paths).cloned().collect();
        prop_assert_eq!(outcome.expanded, expected);
    }
}
