#[cfg(test)]
mod common_tests {
    use std::time::Duration;
    use crate::common::common::{current_time_millis, duration_to_millis, millis_to_datetime, parse_log_level};
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_parse_log_level_known_values() {
        assert_eq!(parse_log_level("info").unwrap(), log::LevelFilter::Info);
        assert_eq!(parse_log_level("off").unwrap(), log::LevelFilter::Off);
        assert_eq!(parse_log_level("trace").unwrap(), log::LevelFilter::Trace);
    }

    #[test]
    fn test_parse_log_level_unknown_value() {
        let error = parse_log_level("verbose").unwrap_err();
        assert!(error.to_string().contains("verbose"));
    }

    #[test]
    fn test_duration_to_millis_saturates() {
        assert_eq!(duration_to_millis(Duration::from_secs(3)), 3000);
        assert_eq!(duration_to_millis(Duration::MAX), i64::MAX);
    }

    #[test]
    fn test_millis_to_datetime_roundtrips_now() {
        let now = current_time_millis();
        assert_eq!(millis_to_datetime(now).timestamp_millis(), now);
    }

    #[test]
    fn test_millis_to_datetime_clamps_out_of_range() {
        assert_eq!(millis_to_datetime(i64::MAX), chrono::DateTime::<chrono::Utc>::MAX_UTC);
        assert_eq!(millis_to_datetime(i64::MIN), chrono::DateTime::<chrono::Utc>::MIN_UTC);
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("boot failed");
        assert_eq!(format!("{}", error), "boot failed");
        assert_eq!(error.message(), "boot failed");
    }
}
