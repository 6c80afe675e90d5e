//! Selection set over account identifiers

use std::collections::HashSet;

use shared::AccountId;

/// Identifiers of the marked rows in the current result set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<AccountId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`; returns whether it is now selected
    pub fn toggle(&mut self, id: AccountId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: AccountId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Replace the selection with exactly `ids`
    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = AccountId>,
    {
        self.ids = ids.into_iter().collect();
    }

    pub fn iter(&self) -> impl Iterator<Item = &AccountId> {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> AccountId {
        AccountId::new(n)
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut selection = Selection::new();
        assert!(selection.toggle(id(1)));
        assert!(selection.contains(id(1)));
        assert!(!selection.toggle(id(1)));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_replaces_contents() {
        let mut selection = Selection::new();
        selection.toggle(id(9));
        selection.select_all([id(1), id(2), id(3)]);

        assert_eq!(selection.len(), 3);
        assert!(!selection.contains(id(9)));
    }
}
