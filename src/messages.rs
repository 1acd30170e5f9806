//! User-facing message text shared across commands.

use crate::parser::syntax::Prefix;

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";
pub const MESSAGE_INVALID_STARTUP_DISPLAYED_INDEX: &str = "The startup index provided is invalid";

/// Usage error wrapping a command's usage text.
pub fn invalid_command_format(usage: &str) -> String {
    format!("{}{}", MESSAGE_INVALID_COMMAND_FORMAT, usage)
}

/// Error text naming each repeated single-valued prefix once.
///
/// Prefixes are listed in the order given; callers pass them canonically
/// sorted.
pub fn duplicate_prefixes(prefixes: &[Prefix]) -> String {
    let names: Vec<&str> = prefixes.iter().map(Prefix::as_str).collect();
    format!("{}{}", MESSAGE_DUPLICATE_FIELDS, names.join(" "))
}
