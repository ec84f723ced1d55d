//! Batch conversion summary report

use std::path::{Path, PathBuf};
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::convert::Tool;

/// Tally of one batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub native: usize,
    pub ffmpeg: usize,
    pub skipped: Vec<(PathBuf, String)>,
    pub failed: Vec<(PathBuf, String)>,
    pub elapsed: Duration,
}

impl BatchSummary {
    pub fn converted(&self) -> usize {
        self.native + self.ffmpeg
    }

    pub fn total(&self) -> usize {
        self.converted() + self.skipped.len() + self.failed.len()
    }

    pub fn record_converted(&mut self, tool: Tool) {
        match tool {
            Tool::Native => self.native += 1,
            Tool::Ffmpeg => self.ffmpeg += 1,
        }
    }

    pub fn record_skipped(&mut self, src: &Path, reason: &str) {
        self.skipped.push((src.to_path_buf(), reason.to_string()));
    }

    pub fn record_failed(&mut self, src: &Path, reason: &str) {
        self.failed.push((src.to_path_buf(), reason.to_string()));
    }

    pub fn display(&self) {
        println!();
        println!(
            " {} {}",
            style("📋").cyan(),
            style("CONVERSION SUMMARY").white().bold()
        );
        println!(" {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Files processed"),
            Cell::new(self.total()),
        ]);

        table.add_row(vec![
            Cell::new("✅ Converted"),
            Cell::new(self.converted())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        if self.ffmpeg > 0 {
            table.add_row(vec![
                Cell::new("   of which via ffmpeg"),
                Cell::new(self.ffmpeg),
            ]);
        }

        table.add_row(vec![
            Cell::new("⏭  Skipped"),
            Cell::new(self.skipped.len()).fg(if self.skipped.is_empty() {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("🗑  Failed"),
            Cell::new(self.failed.len()).fg(if self.failed.is_empty() {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("⏱  Elapsed"),
            Cell::new(format!("{:.2}s", self.elapsed.as_secs_f64())),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!(" {}", line);
        }

        if !self.failed.is_empty() {
            println!();
            println!(
                "   {} {}:",
                style("Failed files").red(),
                style(format!("({})", self.failed.len())).dim()
            );
            for (path, reason) in &self.failed {
                println!(
                    "     {} {} {}",
                    style("•").dim(),
                    path.display(),
                    style(format!("({})", reason)).dim()
                );
            }
        }

        if !self.skipped.is_empty() {
            println!();
            println!(
                "   {} {}:",
                style("Skipped files").yellow(),
                style(format!("({})", self.skipped.len())).dim()
            );
            for (path, reason) in &self.skipped {
                println!(
                    "     {} {} {}",
                    style("•").dim(),
                    path.display(),
                    style(format!("({})", reason)).dim()
                );
            }
        }
    }
}
