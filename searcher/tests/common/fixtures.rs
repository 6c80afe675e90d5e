//! Account fixtures

use shared::{Account, AccountId};

pub const DEBOUNCE_MS: u64 = 350;

pub fn account(id: u64, login: &str) -> Account {
    Account {
        id: AccountId::new(id),
        login: login.to_string(),
        avatar_url: format!("https://avatars.githubusercontent.com/u/{id}"),
        html_url: format!("https://github.com/{login}"),
    }
}

pub fn octocat() -> Account {
    account(1, "octocat")
}

pub fn octo_family() -> Vec<Account> {
    vec![
        account(10, "octocat"),
        account(20, "octo-org"),
        account(30, "octavia"),
    ]
}
