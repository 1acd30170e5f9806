//! The tracked startup record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::fields::{Address, Email, FundingStage, Industry, Name, Phone, Tag, Valuation};

/// A startup and everything the book knows about it.
///
/// Records are replaced wholesale on edit; nothing mutates a `Startup` in
/// place once it is in a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Startup {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub industry: Industry,
    pub funding_stage: FundingStage,
    pub valuation: Valuation,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Startup {
    /// Weaker notion of equality used to detect duplicates in a book.
    ///
    /// Two records describe the same startup when their names match, even if
    /// every other field differs.
    pub fn is_same_startup(&self, other: &Startup) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Startup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Industry: {}; Funding Stage: {}; Valuation: {}; Tags: ",
            self.name,
            self.phone,
            self.email,
            self.address,
            self.industry,
            self.funding_stage,
            self.valuation
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}
