//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Error, Result, analysis::HoldThresholds};

/// Create a spinner for simulation tasks
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .map_err(|e| Error::ProgressBarTemplate {
                message: e.to_string(),
            })?,
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a warning line
pub fn print_warning(message: &str) {
    println!("\nWarning: {message}");
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Format a probability as a percentage
pub fn format_percent(p: f64) -> String {
    format!("{:.2}%", p * 100.0)
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the hold-threshold grid: one row per banked score `i`, one column
/// per opponent score `j`.
pub fn print_threshold_grid(thresholds: &HoldThresholds) {
    let t = thresholds.target();
    let width = t.to_string().len().max(2);

    print!("{:>5} |", "i\\j");
    for j in 0..t {
        print!(" {j:>width$}");
    }
    println!();
    println!("{}", "-".repeat(7 + (width + 1) * t as usize));

    for (i, row) in thresholds.rows().iter().enumerate() {
        print!("{i:>5} |");
        for hold_at in row {
            print!(" {hold_at:>width$}");
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(505_000), "505,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn formats_percent() {
        assert_eq!(format_percent(0.53062), "53.06%");
    }
}
