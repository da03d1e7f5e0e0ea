//! Console report.

use chrono::NaiveDate;
use colored::Colorize;
use pipeline::MenuReport;
use std::io::{self, Write};

/// Console-only presentation settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOptions {
    /// Cap on bullets per day; the rest collapse into "+N more"
    pub max_items: Option<usize>,
    /// Print the excluded section after the menu
    pub show_excluded: bool,
}

/// "Monday, Mar 4, 2024"
pub fn day_header(date: NaiveDate) -> String {
    date.format("%A, %b %-d, %Y").to_string()
}

/// Capitalize the first letter of every word, lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.trim().chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Write the titled per-day menu.
pub fn render_report(
    out: &mut impl Write,
    meal: &str,
    report: &MenuReport,
    options: ConsoleOptions,
) -> io::Result<()> {
    let title = format!("======= {} Menu =======", title_case(meal));
    writeln!(out, "\n{}\n", title.bold())?;

    for day in &report.days {
        writeln!(out, "{}", day_header(day.date).bold())?;
        if day.kept.is_empty() {
            writeln!(out, "  {}", "(no items found)".dimmed())?;
        } else {
            let shown = options.max_items.unwrap_or(day.kept.len());
            for name in day.kept.iter().take(shown) {
                writeln!(out, "  - {}", name)?;
            }
            let more = day.kept.len().saturating_sub(shown);
            if more > 0 {
                writeln!(out, "  {}", format!("+{} more", more).dimmed())?;
            }
        }
        writeln!(out)?;
    }

    if options.show_excluded {
        render_excluded(out, report)?;
    }
    Ok(())
}

fn render_excluded(out: &mut impl Write, report: &MenuReport) -> io::Result<()> {
    writeln!(out, "{}\n", "======= Excluded (encountered & skipped) =======".bold())?;
    let mut any = false;
    for day in &report.days {
        let names = day.excluded_sorted();
        if names.is_empty() {
            continue;
        }
        any = true;
        writeln!(out, "{}", day_header(day.date).bold())?;
        for name in names {
            writeln!(out, "  - {}", name.yellow())?;
        }
        writeln!(out)?;
    }
    if !any {
        writeln!(out, "(None encountered from the exclusion list)\n")?;
    }
    Ok(())
}

/// Hint printed to stderr when the whole range came back empty.
pub fn empty_menu_hint(raw_dump: &str, meal: &str) -> String {
    format!(
        "No items printed. Check {raw_dump} to confirm ServingSession labels and your \
         --meal='{meal}'. If your district uses a different term, try --meal Breakfast/Dinner."
    )
}
