// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the match-string-trie CLI.
//!
//! Respects `NO_COLOR`, and falls back to plain text on non-TTY output (piping into
//! `jq`, redirecting to a file) using `std::io::IsTerminal` rather than a TTY-detection
//! crate.

use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[38;2;97;175;239m";
const GREEN: &str = "\x1b[38;2;152;195;121m";
const GRAY: &str = "\x1b[38;2;92;99;112m";

pub const BOX_WIDTH: usize = 72;

fn use_colors() -> bool {
    std::env::var("NO_COLOR").is_err() && std::io::stdout().is_terminal()
}

pub fn styled(style: &str, text: &str) -> String {
    if use_colors() {
        format!("{style}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Print a section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let colored_label = styled(&format!("{BOLD}{CYAN}"), label);
    let label_part = format!("─ {colored_label} ");
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}┌{label_part}{}┐{RESET}", styled(GRAY, ""), "─".repeat(remaining));
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("│{content}{}│", " ".repeat(pad));
}

pub fn section_bot() {
    println!("└{}┘", "─".repeat(BOX_WIDTH));
}

fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// One line per matched title, highlighted when there's exactly one (a resolved hit).
pub fn print_matches(titles: &[String]) {
    if titles.is_empty() {
        println!("{}", styled(GRAY, "(no match)"));
        return;
    }
    for title in titles {
        if titles.len() == 1 {
            println!("{}", styled(&format!("{BOLD}{GREEN}"), title));
        } else {
            println!("  {title}");
        }
    }
}
