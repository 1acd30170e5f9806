//! The `edit` command: change some fields of one startup.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::command::{CommandError, CommandResult};
use crate::index::Index;
use crate::model::{
    Address, Email, FundingStage, Industry, Name, Phone, Startup, StartupBook, Tag, Valuation,
};

/// Sparse set of field changes.
///
/// `None` means "leave unchanged". For tags, `Some(empty set)` clears every
/// tag while `None` keeps them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditStartupDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    industry: Option<Industry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    funding_stage: Option<FundingStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valuation: Option<Valuation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeSet<Tag>>,
}

impl EditStartupDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_phone(mut self, phone: Phone) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_industry(mut self, industry: Industry) -> Self {
        self.industry = Some(industry);
        self
    }

    pub fn with_funding_stage(mut self, funding_stage: FundingStage) -> Self {
        self.funding_stage = Some(funding_stage);
        self
    }

    pub fn with_valuation(mut self, valuation: Valuation) -> Self {
        self.valuation = Some(valuation);
        self
    }

    /// Replace tags with exactly `tags`. An empty iterator clears them.
    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn industry(&self) -> Option<&Industry> {
        self.industry.as_ref()
    }

    pub fn funding_stage(&self) -> Option<FundingStage> {
        self.funding_stage
    }

    pub fn valuation(&self) -> Option<&Valuation> {
        self.valuation.as_ref()
    }

    pub fn tags(&self) -> Option<&BTreeSet<Tag>> {
        self.tags.as_ref()
    }

    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.industry.is_some()
            || self.funding_stage.is_some()
            || self.valuation.is_some()
            || self.tags.is_some()
    }

    /// Build the edited copy of `original`.
    pub fn apply_to(&self, original: &Startup) -> Startup {
        Startup {
            name: self.name.clone().unwrap_or_else(|| original.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| original.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| original.email.clone()),
            address: self.address.clone().unwrap_or_else(|| original.address.clone()),
            industry: self.industry.clone().unwrap_or_else(|| original.industry.clone()),
            funding_stage: self.funding_stage.unwrap_or(original.funding_stage),
            valuation: self.valuation.clone().unwrap_or_else(|| original.valuation.clone()),
            tags: self.tags.clone().unwrap_or_else(|| original.tags.clone()),
        }
    }
}

/// Edit the startup at `index` using `descriptor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditCommand {
    index: Index,
    #[serde(rename = "changes")]
    descriptor: EditStartupDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";

    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the startup identified \
by the index number used in the displayed startup list. Existing values will be overwritten by \
the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] \
[i/INDUSTRY] [f/FUNDING_STAGE] [v/VALUATION] [t/TAG]...\n\
Example: edit 1 p/91234567 e/hello@acme.io";

    pub const MESSAGE_NOT_EDITED: &'static str = "At least one field to edit must be provided.";
    pub const MESSAGE_DUPLICATE_STARTUP: &'static str =
        "This startup already exists in the address book.";

    pub fn new(index: Index, descriptor: EditStartupDescriptor) -> Self {
        EditCommand { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditStartupDescriptor {
        &self.descriptor
    }

    /// Apply the edit to `book`.
    ///
    /// The book is left untouched when the index is out of range or the
    /// edited record would duplicate another one.
    pub fn execute(&self, book: &mut StartupBook) -> Result<CommandResult, CommandError> {
        let target = self.index.zero_based();
        let Some(original) = book.get(target) else {
            tracing::warn!(index = self.index.one_based(), size = book.len(), "edit index out of range");
            return Err(CommandError::InvalidIndex);
        };

        let edited = self.descriptor.apply_to(original);
        if !original.is_same_startup(&edited) && book.has_startup(&edited) {
            tracing::warn!(name = %edited.name, "edit would duplicate an existing startup");
            return Err(CommandError::DuplicateStartup);
        }

        book.set_startup(target, edited.clone());
        tracing::info!(index = self.index.one_based(), name = %edited.name, "edited startup");

        Ok(CommandResult::new(
            format!("Edited Startup: {}", edited),
            Some(edited),
        ))
    }
}
