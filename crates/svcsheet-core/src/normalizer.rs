//! Normalizer: turns one [`RawRow`] into zero or one [`ServiceRecord`].
//!
//! Every helper here is total: malformed cells degrade to a documented
//! default (absent money, `false`, empty string or list) instead of failing.
//! The only row-level outcome besides a record is a skip, for rows whose slug
//! is empty or is a stray copy of the header.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::columns::Field;
use crate::types::{Action, ActionFields, ActionModel, Cell, Money, RawRow, ServiceRecord};

/// Tokens accepted as "yes" in a flag cell, compared lower-cased and trimmed.
static TRUTHY: phf::Set<&'static str> = phf::phf_set! {
    "y",
    "yes",
    "true",
    "1",
};

/// Currency symbols and grouping separators stripped before parsing money.
static MONEY_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Sc},]").expect("money noise pattern is valid"));

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// What to emit for `salePrice` when the sale-price cell yields no amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalePriceFallback {
    /// Leave it absent (`null`), distinct from a sale price of zero.
    #[default]
    Absent,
    /// Repeat the regular price.
    Price,
}

impl std::fmt::Display for SalePriceFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SalePriceFallback::Absent => write!(f, "absent"),
            SalePriceFallback::Price => write!(f, "price"),
        }
    }
}

impl std::str::FromStr for SalePriceFallback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absent" | "null" | "none" => Ok(SalePriceFallback::Absent),
            "price" => Ok(SalePriceFallback::Price),
            other => Err(format!(
                "unknown sale price fallback '{other}' (expected absent or price)"
            )),
        }
    }
}

/// Per-run normalisation settings; the `[normalize]` section of the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct NormalizeOptions {
    #[serde(default)]
    pub action_model: ActionModel,
    #[serde(default)]
    pub sale_price_fallback: SalePriceFallback,
}

// ---------------------------------------------------------------------------
// Cell coercions
// ---------------------------------------------------------------------------

/// Trimmed string form of `cell`, or `default` when the cell is absent.
pub fn trim_or_default(cell: Option<&Cell>, default: &str) -> String {
    cell.and_then(Cell::as_text)
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| default.to_string())
}

/// Parse a money cell such as `"$1,234.50"`.
///
/// Empty, `NA`, and unparseable cells are `None`; parsed values are
/// canonicalised by [`Money::new`].
pub fn parse_money(cell: Option<&Cell>) -> Option<Money> {
    let text = cell.and_then(Cell::as_text)?;
    let cleaned = MONEY_NOISE.replace_all(&text, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("na") {
        return None;
    }
    cleaned.parse::<f64>().ok().and_then(Money::new)
}

/// `true` only for `y`, `yes`, `true` or `1` (any case, surrounding space ignored).
pub fn parse_boolean(cell: Option<&Cell>) -> bool {
    cell.and_then(Cell::as_text)
        .map(|s| TRUTHY.contains(s.trim().to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Split a `;`-delimited bullet cell, trimming pieces and dropping empty ones.
pub fn split_bullets(cell: Option<&Cell>) -> Vec<String> {
    let Some(text) = cell.and_then(Cell::as_text) else {
        return Vec::new();
    };
    text.split(';')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Map the contact/payment flags to the single next step shown to visitors.
pub fn derive_action(needs_contact: bool, needs_payment: bool) -> Action {
    match (needs_contact, needs_payment) {
        (true, true) => Action::ContactThenCheckout,
        (false, true) => Action::Checkout,
        (true, false) => Action::Contact,
        (false, false) => Action::None,
    }
}

// ---------------------------------------------------------------------------
// Row normalisation
// ---------------------------------------------------------------------------

/// Normalise one row, or return `None` when the row must be skipped.
///
/// A row is skipped when its slug is empty or equals `slug` in any case
/// (a header row that was read again as data).
pub fn normalize_row(row: &RawRow, options: &NormalizeOptions) -> Option<ServiceRecord> {
    let slug = trim_or_default(row.get(Field::Slug), "");
    if slug.is_empty() || slug.eq_ignore_ascii_case("slug") {
        return None;
    }

    let price = money_field(row, Field::Price, &slug);
    let sale_price = match (money_field(row, Field::SalePrice, &slug), options.sale_price_fallback) {
        (Some(sale), _) => Some(sale),
        (None, SalePriceFallback::Price) => price,
        (None, SalePriceFallback::Absent) => None,
    };

    Some(ServiceRecord {
        name: trim_or_default(row.get(Field::Name), ""),
        price,
        sale_price,
        image: trim_or_default(row.get(Field::Image), ""),
        description: trim_or_default(row.get(Field::Description), ""),
        bullets: split_bullets(row.get(Field::Bullets)),
        action: action_fields(row, options.action_model),
        slug,
    })
}

fn money_field(row: &RawRow, field: Field, slug: &str) -> Option<Money> {
    let cell = row.get(field);
    let money = parse_money(cell);
    if money.is_none() {
        if let Some(raw) = cell.filter(|c| !c.is_empty()).and_then(Cell::as_text) {
            if !raw.trim().eq_ignore_ascii_case("na") {
                tracing::debug!(slug, column = %field, raw = %raw, "money cell did not parse; leaving it empty");
            }
        }
    }
    money
}

fn action_fields(row: &RawRow, model: ActionModel) -> ActionFields {
    match model {
        ActionModel::BooleanFlags => {
            let needs_contact = parse_boolean(row.get(Field::ContactUs));
            let needs_payment = parse_boolean(row.get(Field::Payment));
            ActionFields::BooleanFlags {
                needs_contact,
                needs_payment,
                action: derive_action(needs_contact, needs_payment),
            }
        }
        ActionModel::FreeForm => ActionFields::FreeForm {
            action_type: trim_or_default(row.get(Field::ActionType), "").to_lowercase(),
            contact_link: trim_or_default(row.get(Field::ContactLink), ""),
            checkout_link: trim_or_default(row.get(Field::CheckoutLink), ""),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
