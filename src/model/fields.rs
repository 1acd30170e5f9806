//! Field value types for a tracked startup.
//!
//! Every field owns its format rule, its canonical form and the message shown
//! when a value breaks the rule. Values can only be built through
//! [`parse`](Name::parse) (or deserialization, which goes through the same
//! check), so holding a `Name` means holding a valid name.
//!
//! Canonicalization is the same for every field: surrounding whitespace is
//! trimmed before the rule is applied. [`FundingStage`] additionally folds
//! case.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// A value that does not satisfy its field's format rule.
///
/// The display form is the field's constraint message, which is what the
/// user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ConstraintViolation {
    /// Field name (e.g. "phone")
    pub field: &'static str,
    /// The field's constraint message
    pub message: &'static str,
}

impl ConstraintViolation {
    fn new(field: &'static str, message: &'static str) -> Self {
        ConstraintViolation { field, message }
    }
}

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("static regex must compile"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,}$").expect("static regex must compile"));
static EMAIL_LOCAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*$").expect("static regex must compile")
});
static EMAIL_DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*\.)*[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*$")
        .expect("static regex must compile")
});
static INDUSTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 &\-]*$").expect("static regex must compile")
});
static VALUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]{1,2})?$").expect("static regex must compile"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("static regex must compile"));

/// Shared plumbing for fields stored as a validated string.
///
/// Each type supplies `is_valid`, `FIELD` and `MESSAGE_CONSTRAINTS`; this
/// fills in parsing, display and the serde bridge.
macro_rules! string_field {
    ($ty:ident) => {
        impl $ty {
            /// Trim `raw` and validate it.
            pub fn parse(raw: &str) -> Result<Self, ConstraintViolation> {
                let trimmed = raw.trim();
                if Self::is_valid(trimmed) {
                    Ok($ty(trimmed.to_string()))
                } else {
                    Err(ConstraintViolation::new(Self::FIELD, Self::MESSAGE_CONSTRAINTS))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $ty {
            type Err = ConstraintViolation;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ConstraintViolation;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.0
            }
        }
    };
}

/// Name of a startup. Also its identity within a book.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const FIELD: &'static str = "name";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn is_valid(value: &str) -> bool {
        NAME_RE.is_match(value)
    }
}

string_field!(Name);

/// Contact phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const FIELD: &'static str = "phone";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn is_valid(value: &str) -> bool {
        PHONE_RE.is_match(value)
    }
}

string_field!(Phone);

/// Contact email address, `local-part@domain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const FIELD: &'static str = "email";
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
separated by periods.\n\
The domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    pub fn is_valid(value: &str) -> bool {
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        if !EMAIL_LOCAL_RE.is_match(local) || !EMAIL_DOMAIN_RE.is_match(domain) {
            return false;
        }
        // The domain regex already guarantees a non-empty final label.
        let last_label = domain.rsplit('.').next().unwrap_or_default();
        last_label.len() >= 2
    }
}

string_field!(Email);

/// Postal address. Free text, but never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub const FIELD: &'static str = "address";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    pub fn is_valid(value: &str) -> bool {
        value.chars().next().is_some_and(|c| !c.is_whitespace())
    }
}

string_field!(Address);

/// Industry the startup operates in (e.g. "Fintech", "Food & Beverage").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Industry(String);

impl Industry {
    pub const FIELD: &'static str = "industry";
    pub const MESSAGE_CONSTRAINTS: &'static str = "Industries should only contain alphanumeric \
characters, spaces, '&' or '-', and it should not be blank";

    pub fn is_valid(value: &str) -> bool {
        INDUSTRY_RE.is_match(value)
    }
}

string_field!(Industry);

/// Latest valuation, a non-negative amount with at most two decimals.
///
/// Kept in its textual form so `"1500000.50"` round-trips exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Valuation(String);

impl Valuation {
    pub const FIELD: &'static str = "valuation";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Valuations should be a non-negative number with at most 2 decimal places";

    pub fn is_valid(value: &str) -> bool {
        VALUATION_RE.is_match(value)
    }
}

string_field!(Valuation);

/// A free-form label attached to a startup.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub const FIELD: &'static str = "tag";
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn is_valid(value: &str) -> bool {
        TAG_RE.is_match(value)
    }
}

string_field!(Tag);

/// Funding round a startup has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FundingStage {
    PreSeed,
    Seed,
    SeriesA,
    SeriesB,
    SeriesC,
}

impl FundingStage {
    pub const FIELD: &'static str = "funding stage";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Funding stage should be one of PS (pre-seed), S (seed), A, B or C (series)";

    const ALL: [FundingStage; 5] = [
        FundingStage::PreSeed,
        FundingStage::Seed,
        FundingStage::SeriesA,
        FundingStage::SeriesB,
        FundingStage::SeriesC,
    ];

    /// Canonical short code, as typed on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            FundingStage::PreSeed => "PS",
            FundingStage::Seed => "S",
            FundingStage::SeriesA => "A",
            FundingStage::SeriesB => "B",
            FundingStage::SeriesC => "C",
        }
    }

    pub fn is_valid(value: &str) -> bool {
        Self::from_code(value).is_some()
    }

    fn from_code(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.code().eq_ignore_ascii_case(value))
    }

    /// Trim `raw` and match it against the stage codes, ignoring case.
    pub fn parse(raw: &str) -> Result<Self, ConstraintViolation> {
        Self::from_code(raw.trim())
            .ok_or_else(|| ConstraintViolation::new(Self::FIELD, Self::MESSAGE_CONSTRAINTS))
    }
}

impl fmt::Display for FundingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FundingStage {
    type Err = ConstraintViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FundingStage {
    type Error = ConstraintViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FundingStage> for String {
    fn from(value: FundingStage) -> String {
        value.code().to_string()
    }
}
