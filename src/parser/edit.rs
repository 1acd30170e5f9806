//! Parser for the arguments of the `edit` command.
//!
//! Grammar: `INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [i/INDUSTRY]
//! [f/FUNDING_STAGE] [v/VALUATION] [t/TAG]...`
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. the preamble must be exactly one positive index,
//! 2. no single-valued prefix may repeat,
//! 3. values are validated left to right,
//! 4. at least one field must be present.

use std::collections::BTreeSet;

use crate::command::{EditCommand, EditStartupDescriptor};
use crate::model::{Address, Email, FundingStage, Industry, Name, Phone, Tag, Valuation};
use crate::parser::syntax::Prefix;
use crate::parser::tokenizer::tokenize;
use crate::parser::util::parse_index;
use crate::parser::ParseError;

/// Parses `edit` arguments into an [`EditCommand`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EditCommandParser;

impl EditCommandParser {
    pub fn new() -> Self {
        EditCommandParser
    }

    /// Parse the text following the `edit` command word.
    pub fn parse(&self, args: &str) -> Result<EditCommand, ParseError> {
        let map = tokenize(args, &Prefix::ALL);
        tracing::debug!(preamble = map.preamble(), fields = map.entries().count(), "tokenized edit arguments");

        let index = parse_index(map.preamble()).map_err(|cause| ParseError::InvalidFormat {
            usage: EditCommand::MESSAGE_USAGE,
            cause: Some(cause),
        })?;

        map.verify_no_duplicate_prefixes_for(&Prefix::SINGLE_VALUED)?;

        // A lone empty `t/` clears tags; anywhere else an empty tag is invalid.
        let resets_tags = map.all_values(Prefix::Tag) == [""];

        let mut descriptor = EditStartupDescriptor::new();
        let mut tags: Option<BTreeSet<Tag>> = None;

        for (prefix, value) in map.entries() {
            descriptor = match prefix {
                Prefix::Name => descriptor.with_name(Name::parse(value)?),
                Prefix::Phone => descriptor.with_phone(Phone::parse(value)?),
                Prefix::Email => descriptor.with_email(Email::parse(value)?),
                Prefix::Address => descriptor.with_address(Address::parse(value)?),
                Prefix::Industry => descriptor.with_industry(Industry::parse(value)?),
                Prefix::Funding => descriptor.with_funding_stage(FundingStage::parse(value)?),
                Prefix::Valuation => descriptor.with_valuation(Valuation::parse(value)?),
                Prefix::Tag => {
                    let set = tags.get_or_insert_with(BTreeSet::new);
                    if !resets_tags {
                        set.insert(Tag::parse(value)?);
                    }
                    descriptor
                }
            };
        }

        if let Some(tags) = tags {
            descriptor = descriptor.with_tags(tags);
        }

        if !descriptor.is_any_field_edited() {
            return Err(ParseError::NotEdited);
        }

        tracing::debug!(index = index.one_based(), "parsed edit command");
        Ok(EditCommand::new(index, descriptor))
    }
}
