use std::sync::Arc;

use lantern_accounts::hardware::NoHardwareBridge;
use lantern_accounts::{AccountCreationController, AccountCreationOptions, FormEdit};
use lantern_crypto::keys::parse_public_key;

use crate::cli::Context;
use crate::commands::{fill_password, validate_and_submit};
use crate::error::WalletError;
use crate::format::{format_pubkey, network_label, print_success, style_bold};

pub async fn run(
    ctx: &Context,
    name: Option<String>,
    testnet: bool,
    no_password: bool,
    cosigner_of: Option<String>,
) -> Result<(), WalletError> {
    if let Some(key) = cosigner_of.as_deref() {
        parse_public_key(key).map_err(|e| WalletError::InvalidPublicKey(e.to_string()))?;
    }

    let options = AccountCreationOptions {
        cosigner: cosigner_of.is_some(),
        import: false,
        testnet,
    };
    let mut controller = AccountCreationController::new(
        options,
        ctx.store.clone(),
        Arc::new(NoHardwareBridge),
        &ctx.catalog,
    )?;
    if let Some(name) = name {
        controller.apply(FormEdit::SetName(name));
    }
    controller.apply(FormEdit::SetCosignerOf(cosigner_of));
    fill_password(&mut controller, no_password)?;

    let account = validate_and_submit(ctx, &mut controller).await?;

    println!();
    println!(
        "  {} {}",
        style_bold().apply_to("Account created:"),
        style_bold().apply_to(&account.name)
    );
    println!("  ID:         {}", account.id);
    println!("  Network:    {}", network_label(account.testnet));
    println!("  Public key: {}", format_pubkey(&account.public_key));
    if let Some(target) = &account.cosigner_of {
        println!("  Co-signs:   {}", target);
    }
    if account.requires_password {
        print_success("Account saved and encrypted.");
    } else {
        print_success("Account saved without password protection.");
    }
    Ok(())
}
