use crate::types::{Segment, TranscriptResult};

/// Format seconds as `[MM:SS]`, or `[HH:MM:SS]` once the offset reaches an hour.
///
/// Fractional seconds are truncated. Callers must pass a non-negative offset.
pub fn format_timestamp(seconds: f64) -> String {
    debug_assert!(seconds >= 0.0, "negative timestamp: {seconds}");
    let total = seconds as u64;
    let hours = total / 3600;
    let mins = (total / 60) % 60;
    let secs = total % 60;
    if hours > 0 {
        format!("[{:02}:{:02}:{:02}]", hours, mins, secs)
    } else {
        format!("[{:02}:{:02}]", mins, secs)
    }
}

/// Format transcript segments with timestamps, one segment per line
pub fn format_timed_view(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|seg| format!("{} {}", format_timestamp(seg.start), seg.text))
        .collect::<Vec<_>>()
        .join("\n")
}

const SECTION_RULE_WIDTH: usize = 40;
const FOOTER_RULE_WIDTH: usize = 28;

/// Format a transcript result as a human-readable report
pub fn format_report_readable(result: &TranscriptResult) -> String {
    let separator = format!("\n{}\n", "=".repeat(SECTION_RULE_WIDTH));
    let footer = "━".repeat(FOOTER_RULE_WIDTH);
    let mut output = String::new();

    output.push_str("🎥 VIDEO TRANSCRIPT & SUMMARY\n");
    output.push_str(&format!("🔗 ID: {}\n", result.video_id));

    let sections = [
        ("📢 SECTION 1: TIMESTAMPS (For Navigation)", &result.timed_view),
        ("📄 SECTION 2: CLEAN READING (No Timestamps)", &result.plain_view),
        ("🧠 SECTION 3: SMART SUMMARY (Auto-Generated)", &result.summary),
    ];
    for (i, (title, body)) in sections.iter().enumerate() {
        output.push_str(&separator);
        output.push_str(title);
        output.push('\n');
        output.push_str(&separator);
        output.push_str(body);
        if i + 1 < sections.len() {
            output.push('\n');
        }
    }

    output.push_str(&format!("\n\n{}\n", footer));
    output.push_str(&format!("⚡ Generated by skimmer {}\n", env!("CARGO_PKG_VERSION")));
    output.push_str(&footer);

    output
}
