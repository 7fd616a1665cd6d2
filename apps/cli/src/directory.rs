use anyhow::Context;
use tracing::info;
use userdir_config::DirectoryConfig;
use userdir_users::{User, UserStore};

/// Build the in-memory directory from the configured seed accounts.
pub fn build_store(config: &DirectoryConfig) -> anyhow::Result<UserStore> {
    let users = config.seed_users.iter().map(|seed| {
        User::new(
            seed.username.as_str(),
            seed.password.as_str(),
            seed.email.clone(),
        )
    });

    let store =
        UserStore::new(users).context("seed users in configuration are inconsistent")?;

    info!(count = store.count(), "seeded user directory");
    Ok(store)
}

/// Accounts sorted by username, for output that does not depend on map order.
pub fn sorted_accounts(mut users: Vec<User>) -> Vec<User> {
    users.sort_by(|a, b| a.username().cmp(b.username()));
    users
}
