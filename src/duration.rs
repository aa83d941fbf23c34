//! Duration display formatting

/// Placeholder shown when no usable duration is available
pub const PLACEHOLDER: &str = "\u{2014}";

/// Format a duration in seconds as `m:ss` with zero-padded seconds
/// (65 -> "1:05", 3600 -> "60:00"). `None`, negative, or NaN input
/// renders the placeholder dash.
pub fn format_duration(seconds: Option<f64>) -> String {
    match seconds {
        Some(s) if !s.is_nan() && s >= 0.0 => {
            let minutes = (s / 60.0).floor() as i64;
            let secs = (s % 60.0).floor() as i64;
            format!("{}:{:02}", minutes, secs)
        }
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_duration(Some(0.0)), "0:00");
        assert_eq!(format_duration(Some(5.0)), "0:05");
        assert_eq!(format_duration(Some(65.0)), "1:05");
        assert_eq!(format_duration(Some(600.0)), "10:00");
        assert_eq!(format_duration(Some(3600.0)), "60:00");
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(format_duration(Some(65.9)), "1:05");
        assert_eq!(format_duration(Some(119.4)), "1:59");
    }

    #[test]
    fn invalid_input_renders_placeholder() {
        assert_eq!(format_duration(None), PLACEHOLDER);
        assert_eq!(format_duration(Some(-1.0)), PLACEHOLDER);
        assert_eq!(format_duration(Some(f64::NAN)), PLACEHOLDER);
    }
}
