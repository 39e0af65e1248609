//! Column alias table.
//!
//! Each logical [`Field`] owns a fixed, ordered list of header spellings.
//! Lookups walk that list and take the first column present, so
//! `"sales price"` wins over `"sale price"` when a sheet carries both.

use std::fmt;

use crate::error::SchemaError;
use crate::types::ActionModel;

/// A logical input column, independent of how the sheet spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Slug,
    Name,
    Price,
    SalePrice,
    Image,
    Description,
    Bullets,
    ContactUs,
    Payment,
    ActionType,
    ContactLink,
    CheckoutLink,
}

const SLUG: &[&str] = &["slug"];
const NAME: &[&str] = &["name"];
const PRICE: &[&str] = &["price"];
const SALE_PRICE: &[&str] = &["sales price", "sale price"];
const IMAGE: &[&str] = &["image"];
const DESCRIPTION: &[&str] = &["description"];
const BULLETS: &[&str] = &["bullet points"];
const CONTACT_US: &[&str] = &["contact us"];
const PAYMENT: &[&str] = &["payment"];
const ACTION_TYPE: &[&str] = &["actiontype", "action type"];
const CONTACT_LINK: &[&str] = &["contactlink", "contact link"];
const CHECKOUT_LINK: &[&str] = &["checkoutlink", "checkout link"];

/// Columns every sheet must carry, whatever the action model.
pub const REQUIRED: &[Field] = &[
    Field::Slug,
    Field::Name,
    Field::Price,
    Field::Image,
    Field::Description,
];

impl Field {
    /// Header spellings for this field, highest priority first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Slug => SLUG,
            Field::Name => NAME,
            Field::Price => PRICE,
            Field::SalePrice => SALE_PRICE,
            Field::Image => IMAGE,
            Field::Description => DESCRIPTION,
            Field::Bullets => BULLETS,
            Field::ContactUs => CONTACT_US,
            Field::Payment => PAYMENT,
            Field::ActionType => ACTION_TYPE,
            Field::ContactLink => CONTACT_LINK,
            Field::CheckoutLink => CHECKOUT_LINK,
        }
    }

    /// Preferred spelling, used in diagnostics.
    pub fn canonical(self) -> &'static str {
        self.aliases()[0]
    }

    /// Optional columns read under `model`. Missing ones fall back to defaults.
    pub fn optional_for(model: ActionModel) -> &'static [Field] {
        match model {
            ActionModel::BooleanFlags => &[
                Field::SalePrice,
                Field::Bullets,
                Field::ContactUs,
                Field::Payment,
            ],
            ActionModel::FreeForm => &[
                Field::SalePrice,
                Field::Bullets,
                Field::ActionType,
                Field::ContactLink,
                Field::CheckoutLink,
            ],
        }
    }

    /// First alias of this field found in `columns`, if any.
    pub fn resolve<'a>(self, columns: &'a [String]) -> Option<&'a str> {
        self.aliases()
            .iter()
            .find_map(|alias| columns.iter().find(|c| c.as_str() == *alias))
            .map(String::as_str)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

/// Trim and lower-case a header cell. A leading byte-order mark is dropped.
pub fn normalize_header(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Fail on the first required field none of whose aliases is in `columns`.
///
/// `columns` must already be normalised (see [`crate::Table::columns`]).
pub fn check_header(columns: &[String]) -> Result<(), SchemaError> {
    match REQUIRED.iter().find(|f| f.resolve(columns).is_none()) {
        Some(field) => Err(SchemaError::MissingColumn(field.canonical().to_string())),
        None => Ok(()),
    }
}

/// Optional columns for `model` that the header does not carry.
pub fn missing_optional(columns: &[String], model: ActionModel) -> Vec<Field> {
    Field::optional_for(model)
        .iter()
        .copied()
        .filter(|f| f.resolve(columns).is_none())
        .collect()
}
