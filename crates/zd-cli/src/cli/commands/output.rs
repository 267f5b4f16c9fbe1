//! Plain-text rendering of API results.

use std::fmt::Write as _;
use zd_core::model::{JobStatus, Ticket};

pub(super) fn job_summary(job: &JobStatus) -> String {
    let mut out = String::new();
    let status = job
        .status
        .as_ref()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());
    let _ = writeln!(out, "{:<10} {}", "ID", if job.id.is_empty() { "-" } else { job.id.as_str() });
    let _ = writeln!(out, "{:<10} {}", "STATUS", status);
    let _ = writeln!(out, "{:<10} {}/{}", "PROGRESS", job.progress, job.total);
    if !job.message.is_empty() {
        let _ = writeln!(out, "{:<10} {}", "MESSAGE", job.message);
    }
    if !job.results.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:<6} {:<12} {:<10} {:<8} {}",
            "INDEX", "ID", "ACTION", "OK", "STATUS"
        );
        for r in &job.results {
            let _ = writeln!(
                out,
                "{:<6} {:<12} {:<10} {:<8} {}",
                r.index,
                r.id,
                if r.action.is_empty() { "-" } else { r.action.as_str() },
                if r.success { "yes" } else { "no" },
                r.status
            );
        }
    }
    out
}

pub(super) fn ticket_summary(ticket: &Ticket) -> String {
    format!(
        "Imported ticket {} ({}): {}",
        ticket.id,
        if ticket.status.is_empty() { "-" } else { ticket.status.as_str() },
        ticket.subject
    )
}
