pub mod create;
pub mod export;
pub mod import;
pub mod list;

use lantern_accounts::messages::render_errors;
use lantern_accounts::{AccountCreationController, FormEdit};
use lantern_types::account::Account;

use crate::cli::Context;
use crate::error::WalletError;
use crate::format::print_field_errors;
use crate::prompt::prompt_password;

/// Fill the password fields, or switch protection off.
///
/// Both entries go through the form so a mismatch is reported by validation.
pub(crate) fn fill_password(
    controller: &mut AccountCreationController,
    no_password: bool,
) -> Result<(), WalletError> {
    if no_password {
        controller.apply(FormEdit::SetRequiresPassword(false));
        return Ok(());
    }
    controller.apply(FormEdit::SetPassword(prompt_password("Enter password")?));
    controller.apply(FormEdit::SetRepeatedPassword(prompt_password(
        "Confirm password",
    )?));
    Ok(())
}

/// Validate the draft and submit it, printing field errors on failure.
pub(crate) async fn validate_and_submit(
    ctx: &Context,
    controller: &mut AccountCreationController,
) -> Result<Account, WalletError> {
    if !controller.validate()? {
        let rendered = render_errors(controller.errors(), &ctx.catalog);
        print_field_errors(&rendered);
        return Err(WalletError::ValidationFailed(rendered.len()));
    }
    Ok(controller.submit().await?)
}
