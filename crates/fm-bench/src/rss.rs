//! Resident set size probe.

use std::fs;

const STATUS_PATH: &str = "/proc/self/status";

/// Resident memory of this process in bytes, or `None` where the platform
/// does not expose it.
pub fn current_rss_bytes() -> Option<u64> {
    let status = fs::read_to_string(STATUS_PATH).ok()?;
    parse_vm_rss(&status)
}

/// Extracts `VmRSS` from a `/proc/<pid>/status` listing.
fn parse_vm_rss(status: &str) -> Option<u64> {
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let mut fields = line["VmRSS:".len()..].split_whitespace();
    let value: u64 = fields.next()?.parse().ok()?;
    let scale = match fields.next() {
        Some("kB") | None => 1024,
        Some("mB") => 1024 * 1024,
        Some(_) => return None,
    };
    Some(value * scale)
}
