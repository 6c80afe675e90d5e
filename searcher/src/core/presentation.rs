//! Result list presentation
//!
//! Turns controller state into a view model and renders it as plain text
//! lines. Loading, error, empty and list bodies are mutually exclusive.

use shared::{AccountId, LookupFailure};

use crate::core::state::SearchState;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const RATE_LIMIT_MESSAGE: &str = "GitHub API rate limit exceeded. Please wait.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Try again.";
pub const EMPTY_MESSAGE: &str = "No results. Try a different search.";

/// One rendered account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: AccountId,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    /// Checkbox state; `None` outside edit mode
    pub checkbox: Option<bool>,
}

/// Body of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchView {
    Loading,
    Error(String),
    Empty,
    List(Vec<RowView>),
}

/// Select-all checkbox state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    None,
    Partial,
    All,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarView {
    pub edit_mode: bool,
    pub select_all: SelectAllState,
    pub selected_count: usize,
    pub total_count: usize,
    /// Duplicate / delete are only enabled with a non-empty selection
    pub actions_enabled: bool,
}

pub fn error_message(failure: &LookupFailure) -> &'static str {
    if failure.is_rate_limited() {
        RATE_LIMIT_MESSAGE
    } else {
        FAILURE_MESSAGE
    }
}

pub fn build_view(state: &SearchState) -> SearchView {
    if state.loading {
        return SearchView::Loading;
    }
    if let Some(failure) = &state.error {
        return SearchView::Error(error_message(failure).to_string());
    }
    if state.accounts.is_empty() {
        return SearchView::Empty;
    }

    let rows = state
        .accounts
        .iter()
        .map(|account| RowView {
            id: account.id,
            login: account.login.clone(),
            avatar_url: account.avatar_url.clone(),
            html_url: account.html_url.clone(),
            checkbox: state
                .edit_mode
                .then(|| state.selection.contains(account.id)),
        })
        .collect();

    SearchView::List(rows)
}

pub fn build_toolbar(state: &SearchState) -> ToolbarView {
    let selected_count = state.selection.len();
    let total_count = state.accounts.len();

    let select_all = if total_count == 0 {
        SelectAllState::Disabled
    } else if selected_count == 0 {
        SelectAllState::None
    } else if selected_count < total_count {
        SelectAllState::Partial
    } else {
        SelectAllState::All
    };

    ToolbarView {
        edit_mode: state.edit_mode,
        select_all,
        selected_count,
        total_count,
        actions_enabled: selected_count > 0,
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

pub fn selected_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} element{plural} selected")
}

pub fn render_toolbar(toolbar: &ToolbarView) -> Vec<String> {
    let mut lines = Vec::new();

    if toolbar.edit_mode {
        lines.push("[Exit Edit Mode]".to_string());

        let select_all = match toolbar.select_all {
            SelectAllState::None | SelectAllState::Disabled => "[ ]",
            SelectAllState::Partial => "[-]",
            SelectAllState::All => "[x]",
        };
        let actions = if toolbar.actions_enabled {
            "  :dup  :del"
        } else {
            ""
        };
        lines.push(format!(
            "{select_all} {}{actions}",
            selected_label(toolbar.selected_count)
        ));
    } else {
        lines.push("[Enter Edit Mode]".to_string());
    }

    lines
}

pub fn render_row(row: &RowView) -> String {
    let prefix = row
        .checkbox
        .map(|checked| format!("{} ", checkbox(checked)))
        .unwrap_or_default();
    format!("{prefix}ID: {}  {}  {}", row.id, row.login, row.html_url)
}

pub fn render_view(view: &SearchView) -> Vec<String> {
    match view {
        SearchView::Loading => vec![LOADING_MESSAGE.to_string()],
        SearchView::Error(message) => vec![message.clone()],
        SearchView::Empty => vec![EMPTY_MESSAGE.to_string()],
        SearchView::List(rows) => rows.iter().map(render_row).collect(),
    }
}

/// Full text frame: toolbar followed by the body
pub fn render(state: &SearchState) -> String {
    let mut lines = render_toolbar(&build_toolbar(state));
    lines.extend(render_view(&build_view(state)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Account;

    fn account(id: u64, login: &str) -> Account {
        Account {
            id: AccountId::new(id),
            login: login.to_string(),
            avatar_url: format!("https://avatars.example/{id}"),
            html_url: format!("https://github.com/{login}"),
        }
    }

    fn state_with(accounts: Vec<Account>) -> SearchState {
        let mut state = SearchState::new();
        state.begin_loading("q");
        state.apply_results(accounts);
        state
    }

    #[test]
    fn test_empty_results_render_zero_state() {
        let state = state_with(vec![]);
        assert_eq!(build_view(&state), SearchView::Empty);
        assert_eq!(render_view(&build_view(&state)), vec![EMPTY_MESSAGE.to_string()]);

        assert_eq!(build_view(&SearchState::new()), SearchView::Empty);
    }

    #[test]
    fn test_loading_hides_list() {
        let mut state = state_with(vec![account(1, "octocat")]);
        state.begin_loading("octo");
        assert_eq!(build_view(&state), SearchView::Loading);
    }

    #[test]
    fn test_error_messages() {
        let mut state = SearchState::new();
        state.apply_failure(LookupFailure::RateLimited);
        assert_eq!(build_view(&state), SearchView::Error(RATE_LIMIT_MESSAGE.to_string()));

        state.apply_failure(LookupFailure::Decode("eof".to_string()));
        assert_eq!(build_view(&state), SearchView::Error(FAILURE_MESSAGE.to_string()));
    }

    #[test]
    fn test_checkboxes_only_in_edit_mode() {
        let mut state = state_with(vec![account(1, "octocat"), account(2, "hubot")]);
        state.toggle_select(AccountId::new(2));

        let SearchView::List(rows) = build_view(&state) else {
            panic!("expected list view");
        };
        assert!(rows.iter().all(|row| row.checkbox.is_none()));
        assert_eq!(render_row(&rows[0]), "ID: 1  octocat  https://github.com/octocat");

        state.toggle_edit_mode();
        let SearchView::List(rows) = build_view(&state) else {
            panic!("expected list view");
        };
        assert_eq!(rows[0].checkbox, Some(false));
        assert_eq!(rows[1].checkbox, Some(true));
        assert_eq!(render_row(&rows[1]), "[x] ID: 2  hubot  https://github.com/hubot");
    }

    #[test]
    fn test_toolbar_select_all_states() {
        let mut state = SearchState::new();
        assert_eq!(build_toolbar(&state).select_all, SelectAllState::Disabled);

        state = state_with(vec![account(1, "a"), account(2, "b")]);
        assert_eq!(build_toolbar(&state).select_all, SelectAllState::None);
        assert!(!build_toolbar(&state).actions_enabled);

        state.toggle_select(AccountId::new(1));
        assert_eq!(build_toolbar(&state).select_all, SelectAllState::Partial);
        assert!(build_toolbar(&state).actions_enabled);

        state.toggle_all();
        assert_eq!(build_toolbar(&state).select_all, SelectAllState::All);
    }

    #[test]
    fn test_selected_label_pluralisation() {
        assert_eq!(selected_label(0), "0 elements selected");
        assert_eq!(selected_label(1), "1 element selected");
        assert_eq!(selected_label(3), "3 elements selected");
    }

    #[test]
    fn test_render_frame() {
        let mut state = state_with(vec![account(1, "octocat")]);
        assert_eq!(
            render(&state),
            "[Enter Edit Mode]\nID: 1  octocat  https://github.com/octocat"
        );

        state.toggle_edit_mode();
        state.toggle_all();
        assert_eq!(
            render(&state),
            "[Exit Edit Mode]\n[x] 1 element selected  :dup  :del\n[x] ID: 1  octocat  https://github.com/octocat"
        );
    }
}
