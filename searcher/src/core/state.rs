//! Controller-owned search state and its synchronous edit operations

use std::collections::HashSet;

use shared::{Account, AccountId, LookupFailure};

use crate::core::selection::Selection;
use crate::types::SearchPhase;

/// Everything the view is rendered from
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Raw text as typed
    pub query: String,
    /// Last value that made it through the debouncer
    pub debounced_query: String,
    pub accounts: Vec<Account>,
    pub selection: Selection,
    pub loading: bool,
    pub error: Option<LookupFailure>,
    pub edit_mode: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SearchPhase {
        if self.loading {
            return SearchPhase::Loading;
        }
        match &self.error {
            Some(LookupFailure::RateLimited) => SearchPhase::RateLimited,
            Some(_) => SearchPhase::Failed,
            None if self.debounced_query.is_empty() => SearchPhase::Idle,
            None => SearchPhase::Populated,
        }
    }

    /// Back to the zero state: no results, no selection, nothing pending
    pub fn reset_to_idle(&mut self) {
        self.debounced_query.clear();
        self.accounts.clear();
        self.selection.clear();
        self.loading = false;
        self.error = None;
    }

    pub fn begin_loading(&mut self, query: &str) {
        self.debounced_query = query.to_string();
        self.loading = true;
        self.error = None;
    }

    pub fn apply_results(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
        self.selection.clear();
        self.loading = false;
        self.error = None;
    }

    /// The error replaces whatever was displayed before
    pub fn apply_failure(&mut self, failure: LookupFailure) {
        self.accounts.clear();
        self.selection.clear();
        self.loading = false;
        self.error = Some(failure);
    }

    /// Flip selection of `id`; ids not in the result set are ignored
    pub fn toggle_select(&mut self, id: AccountId) -> bool {
        if !self.accounts.iter().any(|account| account.id == id) {
            return false;
        }
        self.selection.toggle(id);
        true
    }

    pub fn toggle_all(&mut self) {
        if self.selection.len() == self.accounts.len() {
            self.selection.clear();
        } else {
            self.selection.select_all(self.accounts.iter().map(|account| account.id));
        }
    }

    pub fn all_selected(&self) -> bool {
        !self.accounts.is_empty() && self.selection.len() == self.accounts.len()
    }

    /// Remove every selected account; returns how many were removed
    pub fn delete_selected(&mut self) -> usize {
        let before = self.accounts.len();
        let selection = &self.selection;
        self.accounts.retain(|account| !selection.contains(account.id));
        self.selection.clear();
        before - self.accounts.len()
    }

    /// Insert a copy right after each selected account
    ///
    /// Copies get identifiers not used by any existing account and stay
    /// unselected. Returns the new identifiers in list order.
    pub fn duplicate_selected(&mut self) -> Vec<AccountId> {
        if self.selection.is_empty() {
            return Vec::new();
        }

        let mut taken: HashSet<AccountId> = self.accounts.iter().map(|account| account.id).collect();
        let mut candidate = taken
            .iter()
            .max()
            .map(AccountId::next)
            .unwrap_or_else(|| AccountId::new(1));

        let mut created = Vec::new();
        let mut duplicated = Vec::with_capacity(self.accounts.len() + self.selection.len());

        for account in self.accounts.drain(..) {
            let selected = self.selection.contains(account.id);
            duplicated.push(account);

            if selected {
                while taken.contains(&candidate) {
                    candidate = candidate.next();
                }
                taken.insert(candidate);

                let copy = duplicated[duplicated.len() - 1].with_id(candidate);
                created.push(copy.id);
                duplicated.push(copy);
            }
        }

        self.accounts = duplicated;
        created
    }

    pub fn toggle_edit_mode(&mut self) -> bool {
        self.edit_mode = !self.edit_mode;
        self.edit_mode
    }

    /// Selection holds only identifiers present in the result set
    pub fn selection_is_consistent(&self) -> bool {
        let present: HashSet<AccountId> = self.accounts.iter().map(|account| account.id).collect();
        self.selection.iter().all(|id| present.contains(id))
    }
}
