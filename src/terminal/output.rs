//! Terminal output utilities.
//!
//! Box drawing, the strength bar, ANSI helpers.

use std::io::{self, Write};

use crate::pass::{Label, Strength};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Print lines in raw mode, where `\n` does not return the cursor.
pub fn print_raw_lines(lines: &[String]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        let _ = write!(out, "\r{line}\x1b[K\r\n");
    }
    let _ = out.flush();
}

// ============================================================================
// Box Drawing (60 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 60;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line: │ content                                        │
pub fn box_line(content: &str) -> String {
    let display_len = console_width(content);

    if display_len <= INNER_WIDTH {
        let padding = INNER_WIDTH - display_len;
        format!("│ {}{} │", content, " ".repeat(padding))
    } else {
        format!("│ {} │", content)
    }
}

/// Centered box content line: │          content          │
pub fn box_line_center(content: &str) -> String {
    let display_len = console_width(content);

    if display_len <= INNER_WIDTH {
        let total_padding = INNER_WIDTH - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        )
    } else {
        format!("│ {} │", content)
    }
}

/// Box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Help option with flag and description, wrapped to the box width.
pub fn box_opt(flag: &str, desc: &str) -> Vec<String> {
    let flag_col = 26;
    let desc_col = INNER_WIDTH - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let mut wrapped: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            wrapped.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        wrapped.push(current_line);
    }

    let mut lines = Vec::with_capacity(wrapped.len().max(1));
    let first = wrapped.first().map(String::as_str).unwrap_or("");
    lines.push(format!(
        "│ {}{}{} │",
        flag_padded,
        first,
        " ".repeat(desc_col.saturating_sub(first.len()))
    ));

    let indent = " ".repeat(flag_col);
    for line in wrapped.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        lines.push(format!("│ {}{}{} │", indent, line, " ".repeat(padding)));
    }
    lines
}

/// Display width, skipping ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Bar
// ============================================================================

pub fn label_color(label: Label) -> &'static str {
    match label {
        Label::Weak => RED,
        Label::Medium => YELLOW,
        Label::Strong => GREEN,
    }
}

/// Number of filled cells for a score out of 100.
pub fn bar_fill(score: u8, width: usize) -> usize {
    (score.min(100) as usize * width) / 100
}

/// Render the strength meter. `None` draws an empty bar with no label.
pub fn strength_bar(strength: Option<Strength>, width: usize) -> String {
    match strength {
        Some(s) => {
            let filled = bar_fill(s.score, width);
            format!(
                "{}{}{}{DIM}{}{RESET} {:>3}% {}{}{RESET}",
                label_color(s.label),
                "█".repeat(filled),
                RESET,
                "░".repeat(width - filled),
                s.score,
                label_color(s.label),
                s.label,
            )
        }
        None => format!("{DIM}{}{RESET}", "░".repeat(width)),
    }
}
