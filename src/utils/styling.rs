//! Terminal styling utilities for the converter output

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");

/// Print the conversion header with input and output locations.
pub fn print_header(input: &Path, output: &Path) {
    println!();
    println!(
        " {} {}",
        style("◆").cyan().bold(),
        style("Converting images to WebP").white().bold()
    );
    println!("   {}Input:  {}", FOLDER, style(input.display()).dim());
    println!("   {}Output: {}", SAVE, style(output.display()).dim());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!(" {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!(" {} {}", style("ℹ").cyan(), message);
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize) {
    println!(
        "   Found {} {}",
        style(count).yellow().bold(),
        description
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        " {} {}",
        ROCKET,
        style("Conversion complete!").green().bold()
    );
    println!();
}
