use lantern_accounts::repository::AccountsRepository;

use crate::cli::Context;
use crate::error::WalletError;
use crate::format::{format_pubkey, network_label, style_bold, style_dim, truncate_hex};

pub fn run(ctx: &Context, json: bool) -> Result<(), WalletError> {
    let accounts = ctx.store.accounts()?;

    if json {
        let listed: Vec<serde_json::Value> = accounts
            .iter()
            .map(|account| {
                serde_json::json!({
                    "id": account.id,
                    "name": account.name,
                    "public_key": format_pubkey(&account.public_key),
                    "network": network_label(account.testnet),
                    "cosigner_of": account.cosigner_of,
                    "requires_password": account.requires_password,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }

    if accounts.is_empty() {
        println!("  No accounts found.");
        println!(
            "  {}",
            style_dim().apply_to("Create one with: lantern account create")
        );
        return Ok(());
    }

    println!();
    println!("  {}", style_bold().apply_to("Accounts"));
    println!(
        "  {}",
        style_dim().apply_to("────────────────────────────────────────────────────")
    );
    for account in &accounts {
        let lock = if account.requires_password { "" } else { " (unprotected)" };
        println!(
            "  {:<22} {:<8} {} {}{}",
            style_bold().apply_to(&account.name),
            network_label(account.testnet),
            truncate_hex(&format_pubkey(&account.public_key), 8),
            style_dim().apply_to(&account.id),
            style_dim().apply_to(lock)
        );
    }
    println!();

    Ok(())
}
