use colored::*;
use unicode_width::UnicodeWidthStr;

use domcart_common::domain::Domain;
use domcart_common::status::Status;
use domcart_core::cart::Cart;

use crate::terminal::{colors, print};

pub fn status_badge(status: Status) -> ColoredString {
    match status {
        Status::Pending => status.label().color(colors::PENDING).italic(),
        Status::Available => status.label().color(colors::AVAILABLE).bold(),
        Status::Unavailable => status.label().color(colors::UNAVAILABLE).bold(),
    }
}

fn key_width<'a>(domains: impl Iterator<Item = &'a Domain>) -> usize {
    domains
        .map(|d| UnicodeWidthStr::width(d.as_str()))
        .max()
        .unwrap_or(0)
}

/// Draws the cart header and one row per domain with its badge.
pub fn cart(cart: &Cart, q_level: u8) {
    print::header(
        &format!("domain cart ({}/{})", cart.len(), cart.target()),
        q_level,
    );

    if cart.is_empty() {
        print::print_status("Your cart is empty. Add some domains!");
        return;
    }

    let width = key_width(cart.domains().iter());
    for (idx, (domain, status)) in cart.entries().enumerate() {
        print::indexed_line(idx, domain.as_str(), width, status_badge(status));
    }
}
