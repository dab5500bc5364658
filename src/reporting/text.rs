//! Console rendering: issue lists, the risk bar, and the verdict box

use crate::scoring::{ScanResult, Verdict};
use unicode_width::UnicodeWidthStr;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

const BOX_WIDTH: usize = 40;
const INNER_WIDTH: usize = BOX_WIDTH - 2;
const BAR_CELLS: usize = 10;

fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

fn top_border() -> String {
    format!("╔{}╗", "═".repeat(INNER_WIDTH))
}

fn bottom_border() -> String {
    format!("╚{}╝", "═".repeat(INNER_WIDTH))
}

/// Centered box line (emoji-safe padding).
fn box_line_centered(content: &str) -> String {
    let safe_content = format!(" {} ", content);
    let width = visual_width(&safe_content);

    if width >= INNER_WIDTH {
        return format!("║{safe_content}║");
    }

    let remaining = INNER_WIDTH - width;
    let left = remaining / 2;
    let right = remaining - left;
    format!("║{}{}{}║", " ".repeat(left), safe_content, " ".repeat(right))
}

pub fn verdict_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Safe => GREEN,
        Verdict::Suspicious => YELLOW,
        Verdict::Phishing => RED,
    }
}

/// Ten-cell risk bar, one filled cell per 10 points of risk.
pub fn risk_bar(total_risk: u8) -> String {
    let filled = (total_risk as usize / 10).min(BAR_CELLS);
    format!(
        "[{GREEN}{}{RED}{}{RESET}]",
        "■".repeat(filled),
        "□".repeat(BAR_CELLS - filled)
    )
}

pub fn print_scan_header(url: &str) {
    println!("{CYAN}{BOLD}🔎 Scanning: {url}{RESET}");
}

pub fn print_result(result: &ScanResult) {
    println!("{YELLOW}Issues:{RESET}");
    for note in &result.notes {
        println!("  - {note}");
    }

    println!(
        "\n{GREEN}{BOLD}Risk: {}/100{RESET} {}",
        result.total_risk,
        risk_bar(result.total_risk)
    );

    let color = verdict_color(result.verdict);
    println!("{color}{}", top_border());
    println!("{}", box_line_centered(&result.verdict.to_string()));
    println!("{}{RESET}", bottom_border());
}

pub fn print_history(history: &[ScanResult]) {
    if history.is_empty() {
        println!("{YELLOW}No scans yet{RESET}");
        return;
    }
    println!("{CYAN}{BOLD}📋 Scan History:{RESET}");
    for result in history {
        let color = verdict_color(result.verdict);
        println!(
            " - {} → Risk: {} ({color}{}{RESET})",
            result.url,
            result.total_risk,
            result.verdict.label()
        );
    }
}
