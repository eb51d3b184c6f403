use std::collections::HashSet;

use lantern_types::account::Account;

/// Name at position `index` of the sequence `base, "base 2", "base 3", …`.
pub fn derive_name(base: &str, index: usize) -> String {
    if index == 0 {
        base.to_string()
    } else {
        format!("{} {}", base, index + 1)
    }
}

/// First name of the sequence that no existing account uses.
pub fn next_account_name(base: &str, accounts: &[Account]) -> String {
    let taken: HashSet<&str> = accounts.iter().map(|a| a.name.as_str()).collect();
    let mut index = 0;
    loop {
        let candidate = derive_name(base, index);
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        index += 1;
    }
}
