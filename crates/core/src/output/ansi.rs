//! ANSI colored output formatter
//!
//! Renders a trail as a single colored line for terminal display. The last
//! crumb is the current page and is highlighted; linked crumbs show their
//! url dimmed after the title.

use crate::models::{Crumb, Trail};

// ANSI escape codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const CYAN: &str = "\x1b[36m";
const BRIGHT_WHITE: &str = "\x1b[97m";

/// Format a trail as ANSI colored text
pub fn format_ansi(trail: &Trail) -> String {
    let mut output = String::new();
    let last = trail.len().saturating_sub(1);

    for (idx, crumb) in trail.iter().enumerate() {
        if idx > 0 {
            output.push_str(&format!(" {}>{} ", DIM, RESET));
        }
        output.push_str(&format_crumb_ansi(crumb, idx == last));
    }

    output
}

/// Format one crumb, highlighting the current page
fn format_crumb_ansi(crumb: &Crumb, is_current: bool) -> String {
    let title = crumb.display();

    let mut out = if is_current {
        format!("{}{}{}{}", BOLD, BRIGHT_WHITE, title, RESET)
    } else {
        format!("{}{}{}", CYAN, title, RESET)
    };

    if let Some(url) = &crumb.url {
        out.push_str(&format!(" {}({}){}", DIM, url, RESET));
    }

    out
}
