//! Size formatting utilities — human-readable byte counts.
//!
//! All internal sizes are `u64` bytes. Floating point is only used
//! at the display-formatting boundary.

/// Format a byte count into a human-readable string.
///
/// Uses binary units (1024-based) with two-decimal precision and the
/// `o`/`Ko`/`Mo`/`Go` unit suffixes the report format expects.
pub fn format_size(bytes: u64) -> String {
    const KO: f64 = 1024.0;
    const MO: f64 = KO * 1024.0;
    const GO: f64 = MO * 1024.0;

    let b = bytes as f64;
    if b < KO {
        format!("{bytes} o")
    } else if b < MO {
        format!("{:.2} Ko", b / KO)
    } else if b < GO {
        format!("{:.2} Mo", b / MO)
    } else {
        format!("{:.2} Go", b / GO)
    }
}

/// Format an entry count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 o");
        assert_eq!(format_size(512), "512 o");
        assert_eq!(format_size(1023), "1023 o");
    }

    #[test]
    fn test_format_size_ko() {
        assert_eq!(format_size(1024), "1.00 Ko");
        assert_eq!(format_size(1536), "1.50 Ko");
    }

    #[test]
    fn test_format_size_mo() {
        assert_eq!(format_size(1_048_576), "1.00 Mo");
        assert_eq!(format_size(12_939_427), "12.34 Mo");
    }

    #[test]
    fn test_format_size_go() {
        assert_eq!(format_size(1_073_741_824), "1.00 Go");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
