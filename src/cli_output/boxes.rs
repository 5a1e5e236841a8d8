//! Simple line-based CLI output utilities.

use crate::models::{Show, StatEntry};

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Widest bar drawn by [`format_stat_bar`].
const BAR_WIDTH: usize = 30;

/// Print the main header.
///
/// ```text
/// TV DASHBOARD
/// ════════════════════════════════════════════════════════════
/// ```
pub fn print_header(title: &str) {
    println!();
    println!("{}", title);
    println!("{}", "═".repeat(LINE_WIDTH));
    println!();
}

/// Print the start of a section.
///
/// ```text
/// HIGH RATED (12)
/// ────────────────────────────────────────────────────────────
/// ```
pub fn print_section_start(title: &str) {
    println!("{}", title);
    println!("{}", "─".repeat(LINE_WIDTH));
}

/// Print a line within a section.
///
/// ```text
///   ✓ 1000 shows loaded
/// ```
pub fn print_step_line(icon: &str, message: &str) {
    println!("  {} {}", icon, message);
}

/// Print the end of a section (just a blank line).
pub fn print_section_end() {
    println!();
}

/// Print troubleshooting lines.
pub fn print_troubleshoot(lines: &[&str]) {
    println!();
    for line in lines {
        println!("    {}", line);
    }
}

/// One show as a single line: rating, year, title.
///
/// ```text
///  9.1  2020  Severance
/// ```
pub fn format_show_line(show: &Show) -> String {
    let year = if show.year > 0 {
        show.year.to_string()
    } else {
        "----".to_string()
    };
    format!("{:>4}  {}  {}", show.rate.to_string(), year, show.title)
}

/// A titled list of shows, at most `limit` lines.
pub fn print_show_list(title: &str, shows: &[Show], limit: usize) {
    print_section_start(&format!("{} ({})", title, shows.len()));
    if shows.is_empty() {
        print_step_line(icons::WARNING, "No shows");
    }
    for show in shows.iter().take(limit) {
        println!("  {}", format_show_line(show));
    }
    if shows.len() > limit {
        println!("  ... {} more", shows.len() - limit);
    }
    print_section_end();
}

/// One statistic bucket with a bar scaled against `max`.
///
/// ```text
///   8-9         ██████████████               212
/// ```
pub fn format_stat_bar(entry: &StatEntry, max: f64) -> String {
    let filled = if max > 0.0 && entry.value > 0.0 {
        ((entry.value / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    format!(
        "{:<10}  {:<width$}  {}",
        entry.name,
        "█".repeat(filled.min(BAR_WIDTH)),
        entry.value,
        width = BAR_WIDTH
    )
}

/// A titled distribution, one bar per bucket.
pub fn print_stats(title: &str, entries: &[StatEntry]) {
    print_section_start(title);
    if entries.is_empty() {
        print_step_line(icons::WARNING, "No data");
    }
    let max = entries.iter().map(|e| e.value).fold(0.0, f64::max);
    for entry in entries {
        println!("  {}", format_stat_bar(entry, max));
    }
    print_section_end();
}

/// Full detail of one show.
pub fn print_show_detail(show: &Show, cover_url: &str) {
    print_section_start(&show.title);
    println!("  Rating:     {}", show.rate);
    println!("  Year:       {}", show.year);
    if !show.category.is_empty() {
        println!("  Categories: {}", show.category.join(", "));
    }
    if let Some(ref area) = show.area {
        println!("  Area:       {}", area);
    }
    if !show.directors.is_empty() {
        println!("  Directors:  {}", show.directors.join(", "));
    }
    if !show.actors.is_empty() {
        println!("  Actors:     {}", show.actors.join(", "));
    }
    println!("  URL:        {}", show.url);
    if !show.cover.is_empty() {
        println!("  Cover:      {}", cover_url);
    }
    if let Some(date) = show.updated_on() {
        println!("  Updated:    {}", date.format("%Y-%m-%d"));
    }
    if !show.description.is_empty() {
        println!();
        println!("  {}", show.description);
    }
    print_section_end();
}

/// Print the closing separator with a status line.
///
/// ```text
/// ════════════════════════════════════════════════════════════
/// ✓ LOADED (revision 1)
/// ════════════════════════════════════════════════════════════
/// ```
pub fn print_footer(icon: &str, message: &str) {
    println!("{}", "═".repeat(LINE_WIDTH));
    println!("{} {}", icon, message);
    println!("{}", "═".repeat(LINE_WIDTH));
}

/// Status icons
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
    pub const WARNING: &str = "⚠";
}
