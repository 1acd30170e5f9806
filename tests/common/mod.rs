//! Shared fixtures for integration tests.
//!
//! `*_DESC_*` constants are ready-to-append argument fragments, each with
//! the leading space a real command line has between fields.

#![allow(dead_code)]

use startbook::{
    Address, EditCommand, EditCommandParser, EditStartupDescriptor, Email, FundingStage, Index,
    Industry, Name, Phone, Startup, StartupBook, Tag, Valuation,
};

pub const VALID_NAME_A: &str = "Amy Bee";
pub const VALID_NAME_B: &str = "Bob Choo";
pub const VALID_PHONE_A: &str = "11111111";
pub const VALID_PHONE_B: &str = "22222222";
pub const VALID_EMAIL_A: &str = "amy@example.com";
pub const VALID_EMAIL_B: &str = "bob@example.com";
pub const VALID_ADDRESS_A: &str = "Block 312, Amy Street 1";
pub const VALID_ADDRESS_B: &str = "Block 123, Bobby Street 3";
pub const VALID_INDUSTRY_A: &str = "Fintech";
pub const VALID_INDUSTRY_B: &str = "Food & Beverage";
pub const VALID_FUNDING_A: &str = "S";
pub const VALID_FUNDING_B: &str = "A";
pub const VALID_VALUATION_A: &str = "1500000";
pub const VALID_VALUATION_B: &str = "820000.50";
pub const VALID_TAG_POTENTIAL: &str = "potential";
pub const VALID_TAG_NEW: &str = "new";

pub const NAME_DESC_A: &str = " n/Amy Bee";
pub const NAME_DESC_B: &str = " n/Bob Choo";
pub const PHONE_DESC_A: &str = " p/11111111";
pub const PHONE_DESC_B: &str = " p/22222222";
pub const EMAIL_DESC_A: &str = " e/amy@example.com";
pub const EMAIL_DESC_B: &str = " e/bob@example.com";
pub const ADDRESS_DESC_A: &str = " a/Block 312, Amy Street 1";
pub const ADDRESS_DESC_B: &str = " a/Block 123, Bobby Street 3";
pub const INDUSTRY_DESC_A: &str = " i/Fintech";
pub const FUNDING_DESC_A: &str = " f/S";
pub const VALUATION_DESC_A: &str = " v/1500000";
pub const TAG_DESC_POTENTIAL: &str = " t/potential";
pub const TAG_DESC_NEW: &str = " t/new";
pub const TAG_EMPTY: &str = " t/";

pub const INVALID_NAME_DESC: &str = " n/James&";
pub const INVALID_PHONE_DESC: &str = " p/911a";
pub const INVALID_EMAIL_DESC: &str = " e/bob!yahoo";
pub const INVALID_ADDRESS_DESC: &str = " a/";
pub const INVALID_INDUSTRY_DESC: &str = " i/&&";
pub const INVALID_FUNDING_DESC: &str = " f/Z";
pub const INVALID_VALUATION_DESC: &str = " v/-100";
pub const INVALID_TAG_DESC: &str = " t/hubby*";

pub fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).expect("fixture index must be positive")
}

pub fn tag(name: &str) -> Tag {
    Tag::parse(name).unwrap()
}

/// Descriptor builder taking raw strings, for terse expectations.
#[derive(Default)]
pub struct DescriptorBuilder {
    descriptor: EditStartupDescriptor,
}

impl DescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, v: &str) -> Self {
        self.descriptor = self.descriptor.with_name(Name::parse(v).unwrap());
        self
    }

    pub fn phone(mut self, v: &str) -> Self {
        self.descriptor = self.descriptor.with_phone(Phone::parse(v).unwrap());
        self
    }

    pub fn email(mut self, v: &str) -> Self {
        self.descriptor = self.descriptor.with_email(Email::parse(v).unwrap());
        self
    }

    pub fn address(mut self, v: &str) -> Self {
        self.descriptor = self.descriptor.with_address(Address::parse(v).unwrap());
        self
    }

    pub fn industry(mut self, v: &str) -> Self {
        self.descriptor = self.descriptor.with_industry(Industry::parse(v).unwrap());
        self
    }

    pub fn funding_stage(mut self, v: &str) -> Self {
        self.descriptor = self
            .descriptor
            .with_funding_stage(FundingStage::parse(v).unwrap());
        self
    }

    pub fn valuation(mut self, v: &str) -> Self {
        self.descriptor = self.descriptor.with_valuation(Valuation::parse(v).unwrap());
        self
    }

    pub fn tags(mut self, names: &[&str]) -> Self {
        self.descriptor = self.descriptor.with_tags(names.iter().map(|n| tag(n)));
        self
    }

    pub fn build(self) -> EditStartupDescriptor {
        self.descriptor
    }
}

/// Assert that `input` parses to exactly `expected`.
pub fn assert_parse_success(input: &str, expected: EditCommand) {
    match EditCommandParser::new().parse(input) {
        Ok(command) => assert_eq!(command, expected, "input: {:?}", input),
        Err(e) => panic!("expected {:?} to parse, got error: {}", input, e),
    }
}

/// Assert that `input` is rejected with exactly `expected_message`.
pub fn assert_parse_failure(input: &str, expected_message: &str) {
    match EditCommandParser::new().parse(input) {
        Ok(command) => panic!("expected {:?} to fail, parsed as {:?}", input, command),
        Err(e) => assert_eq!(e.to_string(), expected_message, "input: {:?}", input),
    }
}

pub fn startup(name: &str, phone: &str, email: &str, tags: &[&str]) -> Startup {
    Startup {
        name: Name::parse(name).unwrap(),
        phone: Phone::parse(phone).unwrap(),
        email: Email::parse(email).unwrap(),
        address: Address::parse("10 Anson Road").unwrap(),
        industry: Industry::parse("Fintech").unwrap(),
        funding_stage: FundingStage::Seed,
        valuation: Valuation::parse("1000000").unwrap(),
        tags: tags.iter().map(|t| tag(t)).collect(),
    }
}

/// Three-startup book used by execution tests.
pub fn typical_book() -> StartupBook {
    let mut book = StartupBook::new();
    for startup in [
        startup("Alpha Labs", "94351253", "hello@alpha.io", &["potential"]),
        startup("Beta Foods", "98765432", "team@beta.com", &["new", "potential"]),
        startup("Gamma Health", "95352563", "ops@gamma.co", &[]),
    ] {
        book.add(startup).unwrap();
    }
    book
}

pub const TYPICAL_BOOK_JSON: &str = r#"[
    {
        "name": "Alpha Labs",
        "phone": "94351253",
        "email": "hello@alpha.io",
        "address": "10 Anson Road",
        "industry": "Fintech",
        "funding_stage": "S",
        "valuation": "1000000",
        "tags": ["potential"]
    },
    {
        "name": "Beta Foods",
        "phone": "98765432",
        "email": "team@beta.com",
        "address": "10 Anson Road",
        "industry": "Fintech",
        "funding_stage": "S",
        "valuation": "1000000",
        "tags": ["new", "potential"]
    }
]"#;
