//! Composite keys for the history store

/// Separator between key components
pub const KEY_SEPARATOR: &str = "/";

/// Build the history key for a branch: `hosting/owner/repo/branch`
///
/// Components are joined as-is. A `/` inside any component makes the key
/// ambiguous (`a/b` + `c` vs `a` + `b/c`); nothing is escaped.
#[must_use]
pub fn derive_key(hosting: &str, owner: &str, repo: &str, branch: &str) -> String {
    [hosting, owner, repo, branch].join(KEY_SEPARATOR)
}
