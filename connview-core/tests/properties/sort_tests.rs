//! Property-based tests for the sort layer

use proptest::prelude::*;
use std::cmp::Ordering;

use connview_core::models::{CatalogRow, GroupHierarchy, Layout, ProfileRecord, ProfileRow};
use connview_core::sort::{self, SortColumn, SortDirection};
use connview_core::CatalogModel;

// ========== Strategies ==========

fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,10}"
}

fn arb_column() -> impl Strategy<Value = SortColumn> {
    prop_oneof![
        Just(SortColumn::Name),
        Just(SortColumn::Group),
        Just(SortColumn::Server),
        Just(SortColumn::Protocol),
        Just(SortColumn::LastUsed),
    ]
}

fn arb_profiles() -> impl Strategy<Value = Vec<ProfileRecord>> {
    prop::collection::vec((arb_name(), arb_name()), 1..12).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (name, server))| {
                ProfileRecord::new(format!("p{i}.cvp"), name).with_server(server)
            })
            .collect()
    })
}

fn profile_row(name: &str) -> CatalogRow {
    CatalogRow::Profile(ProfileRow {
        record: ProfileRecord::new(format!("{name}.cvp"), name),
        depth: 0,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Flipping the direction reverses every non-equal comparison.
    #[test]
    fn prop_direction_flip_reverses_ordering(
        a in arb_name(),
        b in arb_name(),
        column in arb_column(),
    ) {
        let ra = profile_row(&a);
        let rb = profile_row(&b);
        let asc = sort::compare(&ra, &rb, column, SortDirection::Ascending);
        let desc = sort::compare(&ra, &rb, column, SortDirection::Descending);
        prop_assert_eq!(asc, desc.reverse());
    }

    /// The visible sequence of a flat model is ordered under the active
    /// column.
    #[test]
    fn prop_visible_rows_are_ordered(profiles in arb_profiles(), column in arb_column()) {
        let model = CatalogModel::build(Layout::List, &GroupHierarchy::new(), &profiles);
        let rows = model.visible_rows("", column, SortDirection::Ascending);
        for pair in rows.windows(2) {
            prop_assert_ne!(
                sort::compare(pair[0], pair[1], column, SortDirection::Ascending),
                Ordering::Greater
            );
        }
    }

    /// Sorting is stable: profiles with equal keys keep enumeration order.
    #[test]
    fn prop_equal_keys_keep_enumeration_order(count in 2usize..8) {
        let profiles: Vec<ProfileRecord> = (0..count)
            .map(|i| ProfileRecord::new(format!("p{i}.cvp"), "same"))
            .collect();
        let model = CatalogModel::build(Layout::List, &GroupHierarchy::new(), &profiles);
        let rows = model.visible_rows("", SortColumn::Name, SortDirection::Ascending);
        let identities: Vec<_> = rows.iter().filter_map(|r| r.identity()).collect();
        let expected: Vec<String> = (0..count).map(|i| format!("p{i}.cvp")).collect();
        prop_assert_eq!(identities, expected);
    }
}
