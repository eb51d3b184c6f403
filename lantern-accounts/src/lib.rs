//! Account creation and import flow.
//!
//! An [`controller::AccountCreationController`] owns the draft form of one
//! creation flow. The UI feeds it [`form::FormEdit`]s, asks it to validate,
//! renders the resulting [`validation::ErrorKind`]s through a
//! [`messages::Localizer`], and finally submits. Persistence and hardware
//! devices are reached through the [`repository::AccountsRepository`] and
//! [`hardware::HardwareBridge`] traits.

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod hardware;
pub mod messages;
pub mod naming;
pub mod options;
pub mod repository;
pub mod validation;

pub use controller::AccountCreationController;
pub use error::CreationError;
pub use form::{AccountCreationForm, FormEdit};
pub use options::AccountCreationOptions;
pub use validation::{validate, AccountCreationErrors, ErrorKind, Field, ValidationOutcome};
