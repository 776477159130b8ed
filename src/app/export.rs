use tokio::io::{AsyncWriteExt, BufWriter};

use crate::metrics::{RunReport, format_bytes};

pub(crate) fn report_json(report: &RunReport) -> serde_json::Value {
    let latency = report.latency.map(|latency| {
        serde_json::json!({
            "average_ms": latency.average_ms,
            "min_ms": latency.min_ms,
            "max_ms": latency.max_ms,
            "p50_ms": latency.p50_ms,
            "p90_ms": latency.p90_ms,
            "p99_ms": latency.p99_ms
        })
    });

    serde_json::json!({
        "timing": {
            "started": report.started.map(|started| started.to_rfc3339()),
            "ended": report.ended.map(|ended| ended.to_rfc3339()),
            "duration_ms": report.duration.as_millis()
        },
        "responses": {
            "total_requests": report.total_requests,
            "successful_requests": report.successful_requests,
            "further_action_responses": report.further_action_responses,
            "user_errors": report.user_errors,
            "server_errors": report.server_errors,
            "exceptions": report.exceptions
        },
        "response_times": latency,
        "sizes": {
            "bytes_sent": report.bytes_sent,
            "bytes_sent_formatted": format_bytes(report.bytes_sent),
            "bytes_received": report.bytes_received,
            "bytes_received_formatted": format_bytes(report.bytes_received)
        }
    })
}

pub(crate) async fn export_json(path: &str, report: &RunReport) -> Result<(), std::io::Error> {
    let payload = report_json(report);
    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    let json = serde_json::to_vec_pretty(&payload).map_err(std::io::Error::other)?;
    writer.write_all(&json).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
