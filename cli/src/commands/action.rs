//! # Prompt Actions
//!
//! Every line typed at the prompt becomes an [`Action`]. Known words are parsed
//! with clap in multicall mode; anything else is taken as a domain to add,
//! which makes pressing Enter after typing a domain the same as `add`.

use clap::{CommandFactory, Parser, Subcommand};

use domcart_common::error::CartError;
use domcart_common::notice::Notice;
use domcart_common::status::Availability;
use domcart_core::cart::Resolution;
use domcart_core::session::Session;

#[derive(Parser, Debug)]
#[command(multicall = true)]
struct PromptLine {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add a domain to the cart
    #[command(alias = "a")]
    Add { domain: String },
    /// Remove a domain from the cart
    #[command(alias = "rm")]
    Remove { domain: String },
    /// Remove every domain from the cart
    Clear,
    /// Drop every domain not confirmed available
    #[command(alias = "remove-unavailable")]
    Prune,
    /// Copy the cart to the clipboard
    #[command(alias = "cp")]
    Copy,
    /// Keep only the best scoring domains
    #[command(alias = "keep-best")]
    Best,
    /// Purchase the domains in the cart
    #[command(alias = "purchase")]
    Buy,
    /// Show the cart
    #[command(alias = "ls")]
    List,
    /// Leave the shop
    #[command(aliases = ["q", "exit"])]
    Quit,
}

fn is_action_word(word: &str) -> bool {
    word == "help"
        || PromptLine::command()
            .get_subcommands()
            .any(|cmd| cmd.get_name() == word || cmd.get_all_aliases().any(|alias| alias == word))
}

/// Turns a prompt line into an action.
///
/// `Err` carries clap's rendered message, which includes `help` output.
pub fn parse_line(line: &str) -> Result<Action, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.first() {
        Some(first) if is_action_word(first) => {
            PromptLine::try_parse_from(words).map(|prompt| prompt.action)
        }
        _ => Ok(Action::Add {
            domain: line.trim().to_string(),
        }),
    }
}

impl Action {
    /// Whether the cart should be redrawn after this action.
    pub fn redraws(&self) -> bool {
        !matches!(self, Action::Quit)
    }

    /// Runs the action against `session` and describes what happened.
    ///
    /// Returns `None` for actions that only display state.
    pub fn apply(&self, session: &mut Session) -> Option<Notice> {
        let outcome: Result<Notice, CartError> = match self {
            Action::Add { domain } => session
                .add(domain)
                .map(|d| Notice::success(format!("Added {d} to your cart"))),
            Action::Remove { domain } => session
                .remove(domain)
                .map(|d| Notice::info(format!("Removed {d} from your cart"))),
            Action::Clear => {
                session.clear();
                Ok(Notice::info("All domains have been removed from your cart"))
            }
            Action::Prune => session
                .remove_unavailable()
                .map(|n| Notice::success(format!("Removed {n} unavailable domain(s)"))),
            Action::Copy => session
                .copy_all()
                .map(|n| Notice::success(format!("{n} domains copied to clipboard"))),
            Action::Best => session.keep_best().map(|_| {
                Notice::success(format!(
                    "Kept the {} best domains based on prioritization",
                    session.cart().target()
                ))
            }),
            Action::Buy => session
                .purchase()
                .map(|n| Notice::success(format!("Purchase process started for {n} domains"))),
            Action::List | Action::Quit => return None,
        };

        Some(outcome.unwrap_or_else(|err| Notice::from(&err)))
    }
}

/// Describes a finished availability check, if it still matters.
pub fn resolution_notice(resolution: &Resolution) -> Option<Notice> {
    match resolution {
        Resolution::Applied {
            failure: Some(err), ..
        } => Some(Notice::from(&CartError::CheckFailed(err.clone()))),
        Resolution::Applied {
            domain,
            availability: Availability::Available,
            ..
        } => Some(Notice::success(format!("{domain} is available"))),
        Resolution::Applied {
            domain,
            availability: Availability::Unavailable,
            ..
        } => Some(Notice::info(format!("{domain} is unavailable"))),
        Resolution::Stale { .. } => None,
    }
}
