//! Startbook error codes
//!
//! Error codes follow the pattern: SB-{CATEGORY}-{3-digit number}
//!
//! Categories (1-3 uppercase letters):
//! - PRS: Parse errors (malformed command lines)
//! - CMD: Command execution errors (applying a parsed command to a book)
//! - IO: Book loading errors
//!
//! Each error code is stable and should not be reused.

/// Malformed or missing index / unparseable preamble
pub const SB_PRS_001_INVALID_FORMAT: &str = "SB-PRS-001";

/// Valid index but no field to edit
pub const SB_PRS_002_NOT_EDITED: &str = "SB-PRS-002";

/// Field value breaks its format rule
pub const SB_PRS_003_FIELD_CONSTRAINT: &str = "SB-PRS-003";

/// Single-valued field given more than once
pub const SB_PRS_004_DUPLICATE_PREFIX: &str = "SB-PRS-004";

/// Index outside the displayed list
pub const SB_CMD_001_INVALID_INDEX: &str = "SB-CMD-001";

/// Edit would make two records describe the same startup
pub const SB_CMD_002_DUPLICATE_STARTUP: &str = "SB-CMD-002";

/// Book file unreadable or malformed
pub const SB_IO_001_BOOK_UNREADABLE: &str = "SB-IO-001";

/// Error code documentation
///
/// # Parse Errors (SB-PRS-*)
///
/// | Code | Description | Remediation |
/// |------|-------------|-------------|
/// | SB-PRS-001 | Invalid command format | Start with a positive index; see `startbook --help` |
/// | SB-PRS-002 | Nothing to edit | Give at least one field, e.g. `p/91234567` |
/// | SB-PRS-003 | Field constraint violated | Fix the value named in the message |
/// | SB-PRS-004 | Duplicate prefix | Give each single-valued field once (`t/` may repeat) |
///
/// # Command Errors (SB-CMD-*)
///
/// | Code | Description | Remediation |
/// |------|-------------|-------------|
/// | SB-CMD-001 | Invalid index | Use an index shown in the current list |
/// | SB-CMD-002 | Duplicate startup | Choose a name not used by another record |
///
/// # I/O Errors (SB-IO-*)
///
/// | Code | Description | Remediation |
/// |------|-------------|-------------|
/// | SB-IO-001 | Book unreadable | Check the `--book` path and its JSON contents |
pub const ERROR_CODE_DOCUMENTATION: &str = "Error code documentation available in source";

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CODES: [&str; 7] = [
        SB_PRS_001_INVALID_FORMAT,
        SB_PRS_002_NOT_EDITED,
        SB_PRS_003_FIELD_CONSTRAINT,
        SB_PRS_004_DUPLICATE_PREFIX,
        SB_CMD_001_INVALID_INDEX,
        SB_CMD_002_DUPLICATE_STARTUP,
        SB_IO_001_BOOK_UNREADABLE,
    ];

    #[test]
    fn test_error_codes_are_unique() {
        let mut unique = std::collections::HashSet::new();
        for code in ALL_CODES {
            assert!(unique.insert(code), "Duplicate error code detected: {}", code);
        }
    }

    #[test]
    fn test_error_code_format() {
        for code in ALL_CODES {
            // Format: SB-{CATEGORY}-{3-digit number}
            let parts: Vec<&str> = code.split('-').collect();
            assert_eq!(parts.len(), 3, "Error code must have 3 parts: {}", code);
            assert_eq!(parts[0], "SB", "Error code must start with 'SB-': {}", code);

            assert!(
                (1..=3).contains(&parts[1].len()),
                "Category must be 1-3 chars: {}",
                code
            );
            assert!(parts[1].chars().all(|c| c.is_ascii_uppercase()));

            assert_eq!(parts[2].len(), 3, "Number must be 3 digits: {}", code);
            assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
        }
    }
}
