//! # domcart-common
//!
//! Domain models and boundaries shared by every crate in the workspace.
//!
//! * **[`domain`]**: the validated [`domain::Domain`] value and its suffix allow-list.
//! * **[`status`]**: availability results and the per-domain check state.
//! * **[`error`]**: the error taxonomy surfaced to the user.
//! * **[`notice`]**: categorised, fire-and-forget notifications.
//! * **[`ports`]**: traits implemented by the outside world (checker, clipboard).
//! * **[`config`]**: runtime knobs for a session.

pub mod config;
pub mod domain;
pub mod error;
pub mod notice;
pub mod ports;
pub mod status;
