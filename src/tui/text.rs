use crate::pass::{self, Category};
use crate::settings::Settings;
use crate::terminal::{
    BOLD, BOX_WIDTH, DIM, RESET, YELLOW, box_bottom, box_line, box_line_center, box_opt, box_top,
    strength_bar,
};

use super::options::App;

const FIELD_WIDTH: usize = BOX_WIDTH - 4;
const METER_WIDTH: usize = 30;
const SLIDER_WIDTH: usize = 30;

pub fn print_help() {
    for line in help_lines() {
        println!("{line}");
    }
    println!();
}

pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        box_top("Passgauge"),
        box_line_center("Password generator with a strength meter"),
        box_line(""),
        box_line("MODES:"),
        box_line("  1) Interactive: run without arguments. Toggle"),
        box_line("     character types, slide the length, generate,"),
        box_line("     edit and copy."),
        box_line("  2) Client: pass flags (e.g. -l 20 -n 5) to print"),
        box_line("     passwords without the interface."),
        box_line(""),
        box_line("USAGE:"),
        box_line("  passgauge [OPTIONS]"),
        box_line(""),
        box_line("OPTIONS:"),
        box_line(" Password:"),
    ];
    let opts: &[(&str, &str)] = &[
        ("  -l, --length <N>", "Characters per password (default: 16)"),
        ("  -n, --number <N>", "How many passwords to generate"),
        ("      --only <LIST>", "Use exactly these types, e.g. lowercase,numbers"),
        ("      --no-uppercase", "Leave out A-Z"),
        ("      --no-lowercase", "Leave out a-z"),
        ("      --no-numbers", "Leave out 0-9"),
        ("      --no-symbols", "Leave out symbols"),
        ("      --strict", "Fail when the length is shorter than the number of selected types"),
        ("      --seed <N>", "Reproducible output from a fixed seed"),
    ];
    for (flag, desc) in opts {
        lines.extend(box_opt(flag, desc));
    }
    lines.push(box_line(""));
    lines.push(box_line(" Output:"));
    lines.extend(box_opt("  -b, --board", "Copy to clipboard instead of printing"));
    lines.extend(box_opt("  -S, --strength", "Print score, label and entropy for each password"));
    lines.extend(box_opt("  -c, --check <PASS>", "Score a password and exit; - reads stdin"));
    lines.extend(box_opt("  -q, --quiet", "Suppress confirmations and warnings"));
    lines.push(box_line(""));
    lines.push(box_line(" Settings:"));
    lines.extend(box_opt("  -s, --saved", "Start from saved settings"));
    lines.extend(box_opt("      --save", "Save the resulting settings"));
    lines.push(box_line(""));
    lines.push(box_line(" Info:"));
    lines.extend(box_opt("  -h, --help", "Display this help message"));
    lines.extend(box_opt("  -v, --version", "Display version"));
    lines.push(box_line(""));
    lines.push(box_line("EXAMPLES:"));
    lines.push(box_line("  passgauge                 Interactive mode"));
    lines.push(box_line("  passgauge -l 24 -S        Password plus its strength"));
    lines.push(box_line("  passgauge --only numbers  Digits only"));
    lines.push(box_line("  passgauge -c -            Score a password from stdin"));
    lines.push(box_line(""));
    lines.push(box_bottom());
    lines
}

/// Whole screen for the current state.
pub fn render(app: &App) -> Vec<String> {
    let settings = &app.settings;
    let mut lines = vec![box_top("Passgauge")];

    let field = match app.editor() {
        Some(editor) => editor.render(),
        None if app.password().is_empty() => format!("{DIM}(empty){RESET}"),
        None => format!("{BOLD}{}{RESET}", app.password()),
    };
    lines.push(box_line("Password:"));
    for chunk in wrap_field(&field) {
        lines.push(box_line(&format!("  {chunk}")));
    }
    lines.push(box_line(""));
    lines.push(box_line(&format!(
        "Strength  {}",
        strength_bar(app.strength(), METER_WIDTH)
    )));
    lines.push(box_line(&format!(
        "{DIM}Entropy   {:.1} bits at length {} from {} chars{RESET}",
        pass::entropy_bits(settings.pass_length, settings.categories.pool_size()),
        settings.pass_length,
        settings.categories.pool_size()
    )));
    lines.push(box_line(""));
    lines.push(box_line(&format!(
        "Length    {} {:>2}",
        slider(settings.pass_length),
        settings.pass_length
    )));
    lines.push(box_line(""));
    for (i, category) in Category::ALL.into_iter().enumerate() {
        let mark = if settings.categories.contains(category) {
            "x"
        } else {
            " "
        };
        lines.push(box_line(&format!(
            "[{mark}] {}) {}",
            i + 1,
            category_title(category)
        )));
    }
    lines.push(box_bottom());

    if app.editor().is_some() {
        lines.push(format!("{DIM}Editing: type to rescore, [Enter]/[Esc] done{RESET}"));
    } else {
        lines.push(format!(
            "{DIM}[Enter] generate  [1-4] types  [←/→] length  [c] copy{RESET}"
        ));
        lines.push(format!("{DIM}[e] edit  [w] save settings  [q] quit{RESET}"));
    }
    lines.push(match app.message() {
        Some(text) => format!("{YELLOW}{text}{RESET}"),
        None => String::new(),
    });
    lines
}

fn category_title(category: Category) -> String {
    let name = match category {
        Category::Uppercase => "Uppercase (A-Z)",
        Category::Lowercase => "Lowercase (a-z)",
        Category::Numbers => "Numbers (0-9)",
        Category::Symbols => "Symbols (!@#$...)",
    };
    name.to_string()
}

/// Slider track with the knob at the current length.
fn slider(length: usize) -> String {
    let min = Settings::MIN_SLIDER_LENGTH;
    let max = Settings::MAX_SLIDER_LENGTH;
    let pos = (length.clamp(min, max) - min) * (SLIDER_WIDTH - 1) / (max - min);
    format!(
        "{}●{}",
        "━".repeat(pos),
        "─".repeat(SLIDER_WIDTH - 1 - pos)
    )
}

/// Split a field into rows that fit the box, keeping ANSI codes intact.
fn wrap_field(field: &str) -> Vec<String> {
    let width = FIELD_WIDTH - 2;
    let mut rows = vec![String::new()];
    let mut visible = 0;
    let mut in_escape = false;
    for c in field.chars() {
        if c == '\x1b' {
            in_escape = true;
        }
        if !in_escape {
            if visible == width {
                rows.push(String::new());
                visible = 0;
            }
            visible += 1;
        }
        if let Some(row) = rows.last_mut() {
            row.push(c);
        }
        if in_escape && c == 'm' {
            in_escape = false;
        }
    }
    rows
}
