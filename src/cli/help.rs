//! Verbosity helpers

/// Get the log filter based on verbosity
pub fn get_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        assert_eq!(get_log_level(0), "info");
        assert_eq!(get_log_level(1), "debug");
        assert_eq!(get_log_level(5), "trace");
    }

    #[test]
    fn test_every_extra_flag_is_trace() {
        for verbose in 2..=u8::MAX {
            assert_eq!(get_log_level(verbose), "trace");
        }
    }
}
