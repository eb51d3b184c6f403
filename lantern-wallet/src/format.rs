use std::collections::BTreeMap;

use console::Style;
use lantern_accounts::Field;
use lantern_types::primitives::PublicKey;

// ── Styles ──────────────────────────────────────────────────────────────────

pub fn style_success() -> Style {
    Style::new().green()
}

pub fn style_error() -> Style {
    Style::new().red()
}

pub fn style_warn() -> Style {
    Style::new().yellow()
}

pub fn style_bold() -> Style {
    Style::new().bold()
}

pub fn style_dim() -> Style {
    Style::new().dim()
}

// ── Values ──────────────────────────────────────────────────────────────────

/// Full hex public key.
pub fn format_pubkey(pubkey: &PublicKey) -> String {
    hex::encode(pubkey)
}

/// Shorten a hex string to `prefix…suffix` with `keep` chars on each side.
pub fn truncate_hex(s: &str, keep: usize) -> String {
    if s.len() <= keep * 2 {
        s.to_string()
    } else {
        format!("{}…{}", &s[..keep], &s[s.len() - keep..])
    }
}

pub fn network_label(testnet: bool) -> &'static str {
    if testnet {
        "testnet"
    } else {
        "mainnet"
    }
}

/// Label shown in front of a field's validation message.
pub fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name",
        Field::Password => "Password",
        Field::SecretKey => "Secret key",
        Field::WalletId => "Wallet",
    }
}

// ── Output ──────────────────────────────────────────────────────────────────

pub fn print_success(msg: &str) {
    println!("  {} {}", style_success().apply_to("✓"), msg);
}

pub fn print_warn(msg: &str) {
    println!("  {} {}", style_warn().apply_to("!"), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("  {} {}", style_error().apply_to("✗"), msg);
}

/// Print rendered validation messages, one per field.
pub fn print_field_errors(rendered: &BTreeMap<Field, String>) {
    for (field, message) in rendered {
        eprintln!(
            "  {} {:<11} {}",
            style_error().apply_to("✗"),
            style_bold().apply_to(field_label(*field)),
            message
        );
    }
}
