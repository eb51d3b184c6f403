use crate::cli::Context;
use crate::error::WalletError;
use crate::format::{print_warn, style_bold};
use crate::prompt::prompt_password;

pub fn run(ctx: &Context, id: &str) -> Result<(), WalletError> {
    let record = ctx.store.record(id)?;
    let password = if record.requires_password {
        Some(prompt_password("Enter password")?)
    } else {
        None
    };
    let keypair = record.keypair(password.as_deref())?;

    print_warn("Anyone with this secret key controls the account.");
    println!(
        "  {} {}",
        style_bold().apply_to("Secret key:"),
        keypair.secret()
    );
    Ok(())
}
