//! Human-readable formatting helpers

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;
const TIB: u64 = GIB * 1024;

/// Format a size in bytes using 1024-based units, rounded.
pub fn format_size(bytes: u64) -> String {
    let (divisor, suffix) = if bytes >= TIB {
        (TIB, "TiB")
    } else if bytes >= GIB {
        (GIB, "GiB")
    } else if bytes >= MIB {
        (MIB, "MiB")
    } else if bytes >= KIB {
        (KIB, "KiB")
    } else {
        (1, "bytes")
    };

    let value = (bytes as f64 / divisor as f64).round() as u64;
    format!("{} {}", value, suffix)
}

/// Format a planner row estimate using 1000-based "k" units, rounded.
pub fn format_row_estimate(rows: i64) -> String {
    const K: u64 = 1000;
    let rows = rows.max(0) as u64;

    let (divisor, prefix) = if rows >= K * K * K {
        (K * K * K, "kkk")
    } else if rows >= K * K {
        (K * K, "kk")
    } else if rows >= K {
        (K, "k")
    } else {
        (1, "")
    };

    let value = (rows as f64 / divisor as f64).round() as u64;
    format!("{}{} rows", value, prefix)
}
