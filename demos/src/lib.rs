//! Gausskit Demo Suite
//!
//! This crate provides demonstrations of Gausskit's state-preparation
//! pipeline:
//!
//! - **Gaussian preparation**: Synthesize the recursive rotation circuit for
//!   a discretized Gaussian wavefunction and execute it on the dense
//!   statevector simulator
//!
//! The binaries print their results with the shared helpers below so every
//! demo reads the same way on a terminal.

use console::style;

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Render a probability as a fixed-width horizontal bar.
pub fn probability_bar(probability: f64, width: usize) -> String {
    let filled = ((probability.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), " ".repeat(width - filled))
}
