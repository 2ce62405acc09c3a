use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use domcart_common::config::Config;
use domcart_core::checker::MockChecker;
use domcart_core::session::Session;

use crate::clipboard;
use crate::mprint;
use crate::commands::action::{self, Action};
use crate::terminal::{format, print, progress};

pub fn open_session(cfg: &Config) -> Session {
    let checker = Arc::new(MockChecker::from_config(cfg));
    Session::new(cfg.target, checker, clipboard::from_config(cfg))
}

pub fn render(session: &Session, cfg: &Config) {
    format::cart(session.cart(), cfg.quiet);
    progress::draw(&session.progress());
}

fn usage(cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    print::print_status("Type a domain and press Enter to add it. Type `help` for actions.");
    print::print_status("Valid formats: example.com, my-site.app, cool-domain.xyz");
}

/// Runs the interactive prompt until `quit` or end of input.
///
/// Availability results are applied as soon as they arrive, even while the
/// prompt is waiting for a line.
pub async fn shop(cfg: &Config) -> anyhow::Result<()> {
    let mut session = open_session(cfg);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    usage(cfg);
    render(&session, cfg);

    loop {
        print::prompt();
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let action = match action::parse_line(&line) {
                    Ok(action) => action,
                    Err(err) => {
                        print::print(err.to_string().trim_end());
                        continue;
                    }
                };
                if action == Action::Quit {
                    break;
                }
                if let Some(notice) = action.apply(&mut session) {
                    print::notify(&notice);
                }
                if action.redraws() {
                    render(&session, cfg);
                }
            }
            Some(resolution) = session.settle(), if session.pending() > 0 => {
                mprint!();
                if let Some(notice) = action::resolution_notice(&resolution) {
                    print::notify(&notice);
                    render(&session, cfg);
                }
            }
        }
    }

    if session.pending() > 0 {
        debug!("leaving with {} availability checks in flight", session.pending());
    }
    mprint!();
    print::end_of_program();
    Ok(())
}
