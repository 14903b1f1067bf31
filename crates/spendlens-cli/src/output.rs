//! Terminal output formatting.

use colored::Colorize;
use spendlens_core::analysis::model::{AnalysisResult, Category};
use unicode_width::UnicodeWidthStr;

/// Print an analysis breakdown with per-category percentage bars.
pub fn print_analysis(result: &AnalysisResult) {
    println!();
    println!("  {}  {}", "Total Spent".bold(), result.total.cyan().bold());
    println!();

    let name_width = result
        .categories
        .iter()
        .map(|c| UnicodeWidthStr::width(c.name.as_str()))
        .max()
        .unwrap_or(0);

    for category in &result.categories {
        print_category(category, name_width);
    }
    println!();
}

fn print_category(category: &Category, name_width: usize) {
    let bar = percentage_bar(category.percentage);
    println!(
        "  {}  {:>7}  {:>3}%  {}",
        pad_right(&category.name, name_width).bold(),
        category.amount,
        category.percentage,
        bar.green(),
    );
}

/// Render a bar scaled so 100% fills the bar budget.
fn percentage_bar(percentage: u8) -> String {
    let budget = bar_width();
    let filled = (percentage as usize * budget) / 100;
    "█".repeat(filled.max(1))
}

/// Bar budget derived from the terminal width, defaulting to 80 columns.
fn bar_width() -> usize {
    let term_w = terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80);
    term_w.saturating_sub(30).clamp(10, 50)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("abc", 5), "abc  ");
        assert_eq!(pad_right("abcdef", 5), "abcdef");
    }

    #[test]
    fn test_percentage_bar_bounds() {
        assert_eq!(percentage_bar(0).chars().count(), 1);
        assert!(percentage_bar(100).chars().count() <= bar_width());
    }
}
