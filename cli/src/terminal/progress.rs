use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use domcart_core::cart::progress::{Fill, Progress};

use crate::terminal::print;

fn bar_color(fill: Fill) -> &'static str {
    match fill {
        Fill::Under => "blue",
        Fill::Complete => "green",
        Fill::Over => "red",
    }
}

fn hint(progress: &Progress) -> ColoredString {
    match progress.fill {
        Fill::Over => progress.hint().red(),
        _ => progress.hint().green(),
    }
}

/// Leaves a static bar on screen showing how full the cart is.
///
/// Falls back to a plain line when stdout is not a terminal.
pub fn draw(progress: &Progress) {
    let template = format!(
        "{{prefix}} [{{bar:40.{}}}] {{msg}}",
        bar_color(progress.fill)
    );
    let style = ProgressStyle::with_template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓░");

    let pb = ProgressBar::with_draw_target(
        Some(progress.target as u64),
        ProgressDrawTarget::stdout(),
    );

    if pb.is_hidden() {
        print::print_status(format!(
            "{:.0}% {}",
            progress.percent,
            hint(progress)
        ));
        return;
    }

    pb.set_style(style);
    pb.set_prefix(format!("{:>4.0}%", progress.percent));
    pb.set_position(progress.len.min(progress.target) as u64);
    pb.set_message(hint(progress).to_string());
    pb.abandon();
}
