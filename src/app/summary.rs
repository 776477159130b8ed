use crate::metrics::{LatencySummary, RunReport, format_bytes, format_duration, format_timestamp};

const NOT_AVAILABLE: &str = "N/A";

pub(crate) fn print_summary(report: &RunReport) {
    for line in summary_lines(report) {
        println!("{}", line);
    }
}

/// The report as printed, one entry per output line.
pub(crate) fn summary_lines(report: &RunReport) -> Vec<String> {
    let started = report
        .started
        .as_ref()
        .map_or_else(|| NOT_AVAILABLE.to_owned(), format_timestamp);
    let ended = report
        .ended
        .as_ref()
        .map_or_else(|| NOT_AVAILABLE.to_owned(), format_timestamp);

    let mut lines = vec![
        "Timing:".to_owned(),
        format!(" # Started:                     {}", started),
        format!(" # Ended:                       {}", ended),
        format!(
            " # Duration:                    {}",
            format_duration(report.duration)
        ),
        String::new(),
        "Responses:".to_owned(),
        format!(" # Total Requests:              {}", report.total_requests),
        format!(
            " # Successful Requests (2xx):   {}",
            report.successful_requests
        ),
        format!(
            " # Further Action Needed (3xx): {}",
            report.further_action_responses
        ),
        format!(" # User Errors (4xx):           {}", report.user_errors),
        format!(" # Server Errors (5xx):         {}", report.server_errors),
        format!(" # Unhandled Exceptions:        {}", report.exceptions),
        String::new(),
        "Response Times:".to_owned(),
    ];

    let latency = report.latency.as_ref();
    lines.extend([
        format!(" # Average:                     {}", latency_ms(latency, |l| l.average_ms)),
        format!(" # Min:                         {}", latency_ms(latency, |l| l.min_ms)),
        format!(" # Max:                         {}", latency_ms(latency, |l| l.max_ms)),
        format!(" # P50:                         {}", latency_ms(latency, |l| l.p50_ms)),
        format!(" # P90:                         {}", latency_ms(latency, |l| l.p90_ms)),
        format!(" # P99:                         {}", latency_ms(latency, |l| l.p99_ms)),
    ]);

    lines.push(String::new());
    lines.push("Request/Response Sizes:".to_owned());
    lines.push(format!(
        " # Total Bytes Sent:            {} ({})",
        report.bytes_sent,
        format_bytes(report.bytes_sent)
    ));
    lines.push(format!(
        " # Total Bytes Received:        {} ({})",
        report.bytes_received,
        format_bytes(report.bytes_received)
    ));
    lines
}

fn latency_ms(latency: Option<&LatencySummary>, field: impl Fn(&LatencySummary) -> u64) -> String {
    latency.map_or_else(
        || NOT_AVAILABLE.to_owned(),
        |summary| format!("{} ms", field(summary)),
    )
}
