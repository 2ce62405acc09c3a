use std::io::{self, Write};

use colored::*;
use tracing::{error, info, warn};
use unicode_width::UnicodeWidthStr;

use domcart_common::notice::{Notice, NoticeLevel};

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: "domcart::print", raw_msg = msg);
}

const BANNER: &str = r#"
         _                              _
      __| | ___  _ __ ___   ___ __ _ _ __| |_
     / _` |/ _ \| '_ ` _ \ / __/ _` | '__| __|
    | (_| | (_) | | | | | | (_| (_| | |  | |_
     \__,_|\___/|_| |_| |_|\___\__,_|_|   \__|
"#;

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ DOMCART v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();

    print(&format!("{}", BANNER.bright_green()));
    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

/// One indexed row: `[idx] key ....: value`, dots pad `key` to `key_width`.
pub fn indexed_line(idx: usize, key: &str, key_width: usize, value: ColoredString) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    let dots: String = ".".repeat((key_width + 1).saturating_sub(UnicodeWidthStr::width(key)));
    let output: String = format!(
        "{} {}{}{} {}",
        idx_str.color(colors::SEPARATOR),
        key.color(colors::DOMAIN),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    );
    print(&output);
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

pub fn notify(notice: &Notice) {
    match notice.level {
        NoticeLevel::Success => info!(target: "domcart::success", "{}", notice.message),
        NoticeLevel::Info => info!("{}", notice.message),
        NoticeLevel::Warning => warn!("{}", notice.message),
        NoticeLevel::Error => error!("{}", notice.message),
    }
}

/// Writes the input prompt without a trailing newline.
pub fn prompt() {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "{} ", "›".color(colors::ACCENT).bold());
    let _ = stdout.flush();
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
