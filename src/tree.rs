use std::collections::{HashMap, HashSet};

use crate::types::{CategoryId, CategoryRecord, HierarchyError};

/// Read-only view over the flat category list supplied by the server.
///
/// Construction validates the parent relation once; every traversal after
/// that is pure and infallible. List order is preserved everywhere.
///
/// # Example
///
/// ```
/// use shopadmin::{CategoryId, CategoryRecord, CategoryTree};
///
/// let tree = CategoryTree::from_records(vec![
///     CategoryRecord::root(1_i64, "Electronics"),
///     CategoryRecord::child(2_i64, "Phones", 1_i64),
///     CategoryRecord::child(3_i64, "Cases", 2_i64),
/// ])
/// .unwrap();
///
/// let phones = CategoryId::from(2_i64);
/// let eligible = tree.eligible_parents(Some(&phones));
/// assert_eq!(eligible.len(), 1);
/// assert_eq!(eligible[0].name, "Electronics");
/// ```
#[derive(Debug, Clone)]
pub struct CategoryTree {
    records: Vec<CategoryRecord>,
    children: HashMap<CategoryId, Vec<CategoryId>>,
}

impl CategoryTree {
    /// Build a tree from the server-supplied record list.
    ///
    /// A `parent_id` referencing no record in the list is not an error; the
    /// edge simply never matches.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::DuplicateId`] if two records share an id and
    /// [`HierarchyError::Cycle`] if the parent relation loops.
    pub fn from_records(records: Vec<CategoryRecord>) -> Result<Self, HierarchyError> {
        check_duplicates(&records)?;
        check_acyclic(&records)?;
        let children = index_children(&records);
        Ok(Self { records, children })
    }

    /// Every category transitively reachable by following `parent_id == id`
    /// edges. An id absent from the list yields the empty set.
    #[must_use]
    pub fn descendants_of(&self, id: &CategoryId) -> HashSet<CategoryId> {
        let mut out = HashSet::new();
        let mut stack: Vec<&CategoryId> = match self.children.get(id) {
            Some(kids) => kids.iter().collect(),
            None => Vec::new(),
        };
        while let Some(next) = stack.pop() {
            if out.insert(next.clone()) {
                if let Some(kids) = self.children.get(next) {
                    stack.extend(kids.iter());
                }
            }
        }
        out
    }

    /// The categories a given category may be reassigned under: everything
    /// except the category itself and its descendants, in original list
    /// order. `None` is the new-category case and returns the full list.
    #[must_use]
    pub fn eligible_parents(&self, exclude: Option<&CategoryId>) -> Vec<&CategoryRecord> {
        match exclude {
            None => self.records.iter().collect(),
            Some(id) => {
                let blocked = self.descendants_of(id);
                self.records
                    .iter()
                    .filter(|record| record.id != *id && !blocked.contains(&record.id))
                    .collect()
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: &CategoryId) -> Option<&CategoryRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    #[must_use]
    pub fn records(&self) -> &[CategoryRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn check_duplicates(records: &[CategoryRecord]) -> Result<(), HierarchyError> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(&record.id) {
            return Err(HierarchyError::DuplicateId {
                id: record.id.clone(),
            });
        }
    }
    Ok(())
}

fn index_children(records: &[CategoryRecord]) -> HashMap<CategoryId, Vec<CategoryId>> {
    let mut children: HashMap<CategoryId, Vec<CategoryId>> = HashMap::new();
    for record in records {
        if let Some(parent) = &record.parent_id {
            children
                .entry(parent.clone())
                .or_default()
                .push(record.id.clone());
        }
    }
    children
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Unvisited,
    InStack,
    Done,
}

/// Walk every parent chain once, three-color style. Each record has at most
/// one parent edge, so a cycle shows up as a chain re-entering itself.
fn check_acyclic(records: &[CategoryRecord]) -> Result<(), HierarchyError> {
    let ids: HashSet<&CategoryId> = records.iter().map(|r| &r.id).collect();
    let parents: HashMap<&CategoryId, &CategoryId> = records
        .iter()
        .filter_map(|r| r.parent_id.as_ref().map(|p| (&r.id, p)))
        .collect();
    let mut state: HashMap<&CategoryId, WalkState> =
        records.iter().map(|r| (&r.id, WalkState::Unvisited)).collect();

    for record in records {
        if state[&record.id] != WalkState::Unvisited {
            continue;
        }
        let mut path: Vec<&CategoryId> = Vec::new();
        let mut current = &record.id;
        loop {
            state.insert(current, WalkState::InStack);
            path.push(current);
            let Some(&next) = parents.get(current) else {
                break;
            };
            if !ids.contains(next) {
                // dangling parent reference, chain ends here
                break;
            }
            match state[next] {
                WalkState::InStack => {
                    let pos = path
                        .iter()
                        .position(|&id| id == next)
                        .unwrap_or_default();
                    let mut cycle: Vec<CategoryId> =
                        path[pos..].iter().map(|&id| id.clone()).collect();
                    cycle.push(next.clone());
                    return Err(HierarchyError::Cycle { path: cycle });
                }
                WalkState::Done => break,
                WalkState::Unvisited => current = next,
            }
        }
        for id in path {
            state.insert(id, WalkState::Done);
        }
    }
    Ok(())
}
