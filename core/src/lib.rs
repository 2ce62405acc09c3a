//! # domcart-core
//!
//! The stateful half of the domain cart.
//!
//! * **[`cart`]**: the [`cart::Cart`] state manager. Pure and synchronous.
//! * **[`checker`]**: a randomised stand-in for a registry lookup.
//! * **[`session`]**: owns a cart, dispatches availability checks as
//!   independent tasks and folds their results back in.

pub mod cart;
pub mod checker;
pub mod session;
