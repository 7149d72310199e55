//! Ordered row model over attached profiles.
//!
//! The model is an arena of entries (row plus child-id list) rebuilt from
//! scratch on every reload; there is no incremental diffing. The filtered
//! and sorted view is computed on demand from the raw arena, so a query
//! change never requires a rebuild.

use std::collections::HashMap;

use crate::filter::row_visible;
use crate::models::{CatalogRow, FolderRow, GroupHierarchy, GroupId, Layout, ProfileRecord, ProfileRow};
use crate::sort::{self, SortColumn, SortDirection};

use super::attach::attach;

/// One node of the row arena
#[derive(Debug, Clone)]
struct Entry {
    row: CatalogRow,
    children: Vec<usize>,
}

/// Ordered sequence of catalog rows, flat or tree shaped
#[derive(Debug, Clone)]
pub struct CatalogModel {
    entries: Vec<Entry>,
    roots: Vec<usize>,
    layout: Layout,
}

impl CatalogModel {
    /// Builds an empty model in the given layout
    #[must_use]
    pub fn empty(layout: Layout) -> Self {
        Self {
            entries: Vec::new(),
            roots: Vec::new(),
            layout,
        }
    }

    /// Builds the row model for one rebuild cycle
    ///
    /// List layout produces one profile row per record in enumeration
    /// order. Tree layout produces one folder row per group node in
    /// pre-order, then appends each profile row under its attachment
    /// point; sibling order is folders first, profiles after, both in
    /// their source order.
    #[must_use]
    pub fn build(layout: Layout, hierarchy: &GroupHierarchy, profiles: &[ProfileRecord]) -> Self {
        let mut model = Self::empty(layout);
        match layout {
            Layout::List => {
                for record in profiles {
                    let id = model.push(CatalogRow::Profile(ProfileRow {
                        record: record.clone(),
                        depth: 0,
                    }));
                    model.roots.push(id);
                }
            }
            Layout::Tree => {
                let mut folder_entries: HashMap<GroupId, usize> = HashMap::new();
                model.build_folders(
                    hierarchy,
                    GroupHierarchy::ROOT,
                    0,
                    None,
                    &mut folder_entries,
                );

                for (record, group) in profiles.iter().zip(attach(hierarchy, profiles)) {
                    let parent = folder_entries.get(&group).copied();
                    let depth = parent.map_or(0, |p| model.entries[p].row.depth() + 1);
                    let id = model.push(CatalogRow::Profile(ProfileRow {
                        record: record.clone(),
                        depth,
                    }));
                    match parent {
                        Some(p) => model.entries[p].children.push(id),
                        None => model.roots.push(id),
                    }
                }
            }
        }
        model
    }

    fn build_folders(
        &mut self,
        hierarchy: &GroupHierarchy,
        group: GroupId,
        depth: usize,
        parent_entry: Option<usize>,
        folder_entries: &mut HashMap<GroupId, usize>,
    ) {
        for &child in hierarchy.node(group).children() {
            let node = hierarchy.node(child);
            let id = self.push(CatalogRow::Folder(FolderRow {
                name: node.name.clone(),
                full_path: node.full_path.clone(),
                depth,
            }));
            match parent_entry {
                Some(p) => self.entries[p].children.push(id),
                None => self.roots.push(id),
            }
            folder_entries.insert(child, id);
            self.build_folders(hierarchy, child, depth + 1, Some(id), folder_entries);
        }
    }

    fn push(&mut self, row: CatalogRow) -> usize {
        let id = self.entries.len();
        self.entries.push(Entry {
            row,
            children: Vec::new(),
        });
        id
    }

    /// Returns the layout this model was built for
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the number of profile rows in the model
    #[must_use]
    pub fn profile_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !e.row.is_folder())
            .count()
    }

    /// Returns every row in pre-order, unfiltered and unsorted
    #[must_use]
    pub fn rows(&self) -> Vec<&CatalogRow> {
        let mut out = Vec::with_capacity(self.entries.len());
        self.collect_raw(&self.roots, &mut out);
        out
    }

    fn collect_raw<'a>(&'a self, level: &[usize], out: &mut Vec<&'a CatalogRow>) {
        for &id in level {
            out.push(&self.entries[id].row);
            self.collect_raw(&self.entries[id].children, out);
        }
    }

    /// Returns the filtered, sorted row sequence
    ///
    /// Filtering and sorting are applied per sibling level so a profile
    /// never sorts out from under its folder; folder rows stay visible
    /// under any query. The sort is stable, so equal keys keep their build
    /// order, which is also how folder and profile rows interleave on
    /// columns folders carry no value for.
    #[must_use]
    pub fn visible_rows(
        &self,
        query: &str,
        column: SortColumn,
        direction: SortDirection,
    ) -> Vec<&CatalogRow> {
        let mut out = Vec::new();
        self.collect_visible(&self.roots, query, column, direction, &mut out);
        out
    }

    fn collect_visible<'a>(
        &'a self,
        level: &[usize],
        query: &str,
        column: SortColumn,
        direction: SortDirection,
        out: &mut Vec<&'a CatalogRow>,
    ) {
        let mut visible: Vec<usize> = level
            .iter()
            .copied()
            .filter(|&id| row_visible(&self.entries[id].row, query))
            .collect();
        visible.sort_by(|&a, &b| {
            sort::compare(&self.entries[a].row, &self.entries[b].row, column, direction)
        });
        for id in visible {
            out.push(&self.entries[id].row);
            self.collect_visible(&self.entries[id].children, query, column, direction, out);
        }
    }
}
