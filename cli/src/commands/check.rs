use std::time::Instant;

use colored::*;

use domcart_common::config::Config;

use crate::commands::action::{self, Action};
use crate::commands::shop;
use crate::terminal::print;

/// Adds every domain, waits for all checks and prints the cart once.
pub async fn check(domains: Vec<String>, cfg: &Config) -> anyhow::Result<()> {
    let mut session = shop::open_session(cfg);
    let start_time: Instant = Instant::now();

    for domain in domains {
        if let Some(notice) = (Action::Add { domain }).apply(&mut session) {
            print::notify(&notice);
        }
    }

    for resolution in session.drain().await {
        if let Some(notice) = action::resolution_notice(&resolution) {
            print::notify(&notice);
        }
    }

    shop::render(&session, cfg);

    let checked: ColoredString = format!("{} domains", session.cart().len()).bold().green();
    let total_time: ColoredString =
        format!("{:.2}s", start_time.elapsed().as_secs_f64()).bold().yellow();
    print::fat_separator();
    print::centerln(&format!("Check Complete: {checked} checked in {total_time}"));
    Ok(())
}
