use std::sync::Arc;

use lantern_accounts::hardware::NoHardwareBridge;
use lantern_accounts::{AccountCreationController, AccountCreationOptions, FormEdit};

use crate::cli::Context;
use crate::commands::{fill_password, validate_and_submit};
use crate::error::WalletError;
use crate::format::{format_pubkey, network_label, print_success, style_bold};
use crate::prompt::prompt_password;

pub async fn run(
    ctx: &Context,
    secret_key: Option<String>,
    hardware: Option<String>,
    name: Option<String>,
    testnet: bool,
    no_password: bool,
) -> Result<(), WalletError> {
    // Secret-key and hardware imports are exclusive; `import` selects the former.
    let options = AccountCreationOptions {
        cosigner: false,
        import: hardware.is_none(),
        testnet,
    };
    // No device transport is linked into the CLI; hardware imports report it.
    let mut controller = AccountCreationController::new(
        options,
        ctx.store.clone(),
        Arc::new(NoHardwareBridge),
        &ctx.catalog,
    )?;
    if let Some(name) = name {
        controller.apply(FormEdit::SetName(name));
    }

    match hardware {
        Some(wallet_id) => {
            // Hardware keys never leave the device, so there is nothing to encrypt.
            controller.apply(FormEdit::SetImportHardware(true));
            controller.apply(FormEdit::SetWalletId(Some(wallet_id)));
            controller.apply(FormEdit::SetRequiresPassword(false));
        }
        None => {
            let secret = match secret_key {
                Some(secret) => secret,
                None => prompt_password("Enter secret key")?,
            };
            controller.apply(FormEdit::SetSecretKey(Some(secret)));
            fill_password(&mut controller, no_password)?;
        }
    }

    let account = validate_and_submit(ctx, &mut controller).await?;

    println!();
    println!(
        "  {} {}",
        style_bold().apply_to("Account imported:"),
        style_bold().apply_to(&account.name)
    );
    println!("  ID:         {}", account.id);
    println!("  Network:    {}", network_label(account.testnet));
    println!("  Public key: {}", format_pubkey(&account.public_key));
    print_success("Account saved.");
    Ok(())
}
