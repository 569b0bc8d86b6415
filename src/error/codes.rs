/// Error code registry for proposal-recap
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Input errors (reading the proposal document)
/// - 3000-3999: Decode errors (document shape)
/// - 4000-4999: Render errors (writing summaries)
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_YAML: u16 = 1002;
    pub const CONFIG_INVALID_TOML: u16 = 1003;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;
    pub const CONFIG_UNSUPPORTED_FORMAT: u16 = 1006;

    // Input errors (2000-2999)
    pub const INPUT_GENERIC: u16 = 2000;
    pub const INPUT_NOT_FOUND: u16 = 2001;
    pub const INPUT_READ_FAILED: u16 = 2002;
    pub const INPUT_INVALID_TIMESTAMP: u16 = 2003;
    pub const INPUT_UNKNOWN_STAGE: u16 = 2004;

    // Decode errors (3000-3999)
    pub const DECODE_GENERIC: u16 = 3000;
    pub const DECODE_INVALID_JSON: u16 = 3001;
    pub const DECODE_NOT_A_LIST: u16 = 3002;

    // Render errors (4000-4999)
    pub const RENDER_GENERIC: u16 = 4000;
    pub const RENDER_JSON: u16 = 4001;
    pub const RENDER_CSV: u16 = 4002;
    pub const RENDER_IO: u16 = 4003;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_GENERIC => "Generic configuration error",
        ErrorCode::CONFIG_NOT_FOUND => "Configuration file not found",
        ErrorCode::CONFIG_INVALID_YAML => "Invalid YAML syntax in configuration",
        ErrorCode::CONFIG_INVALID_TOML => "Invalid TOML syntax in configuration",
        ErrorCode::CONFIG_INVALID_VALUE => "Invalid configuration value",
        ErrorCode::CONFIG_UNSUPPORTED_FORMAT => "Unsupported configuration file extension",

        ErrorCode::INPUT_GENERIC => "Generic input error",
        ErrorCode::INPUT_NOT_FOUND => "Input document not found",
        ErrorCode::INPUT_READ_FAILED => "Failed to read input document",
        ErrorCode::INPUT_INVALID_TIMESTAMP => "Invalid evaluation timestamp",
        ErrorCode::INPUT_UNKNOWN_STAGE => "Unknown proposal stage",

        ErrorCode::DECODE_GENERIC => "Generic decode error",
        ErrorCode::DECODE_INVALID_JSON => "Input is not valid JSON",
        ErrorCode::DECODE_NOT_A_LIST => "Input is not a list of proposals",

        ErrorCode::RENDER_GENERIC => "Generic render error",
        ErrorCode::RENDER_JSON => "Failed to serialize summaries as JSON",
        ErrorCode::RENDER_CSV => "Failed to serialize summaries as CSV",
        ErrorCode::RENDER_IO => "Failed to write rendered output",

        _ => "Unknown error code",
    }
}
