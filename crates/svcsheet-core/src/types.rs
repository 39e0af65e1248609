//! Core types for svcsheet-core.
//!
//! This module defines the data shapes shared by every layer: the loosely
//! typed input side ([`Cell`], [`RawRow`], [`Table`]) and the canonical output
//! side ([`ServiceRecord`], [`Money`], [`Action`], [`ActionFields`]).

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::columns::{normalize_header, Field};

// ---------------------------------------------------------------------------
// Input side
// ---------------------------------------------------------------------------

/// A single spreadsheet cell as delivered by a tabular source.
///
/// Sources map their native cell types onto this enum; everything downstream
/// treats a cell as "absent or stringifiable".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// String form of the cell, or `None` when the cell is absent.
    ///
    /// Whole numbers render without a fractional part so that a numeric
    /// `slug` or price typed into a spreadsheet reads the way it was entered.
    /// Non-finite numbers are treated as absent.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(Cow::Borrowed(s.as_str())),
            Cell::Number(n) if !n.is_finite() => None,
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                Some(Cow::Owned(format!("{}", *n as i64)))
            }
            Cell::Number(n) => Some(Cow::Owned(n.to_string())),
            Cell::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_text().map_or(true, |s| s.trim().is_empty())
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

/// One data row keyed by normalised (trimmed, lower-cased) column name.
///
/// A `RawRow` lives for a single normalisation call. Every header column is
/// present as a key, so "column exists" and "cell is empty" stay distinct.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, Cell>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell under `column`; the name is normalised first. A later
    /// insert with the same normalised name replaces the earlier one.
    pub fn insert(&mut self, column: &str, cell: Cell) {
        self.cells.insert(normalize_header(column), cell);
    }

    /// Raw lookup by already-normalised column name.
    pub fn column(&self, name: &str) -> Option<&Cell> {
        self.cells.get(name)
    }

    /// Resolve `field` through its alias list, returning the cell of the
    /// first alias whose column exists in this row.
    pub fn get(&self, field: Field) -> Option<&Cell> {
        field.aliases().iter().find_map(|alias| self.cells.get(*alias))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: AsRef<str>, C: Into<Cell>> FromIterator<(K, C)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, C)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (k, c) in iter {
            row.insert(k.as_ref(), c.into());
        }
        row
    }
}

/// A whole sheet: the header row plus the data rows beneath it, in sheet order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Header cells as they appear in the sheet (not yet normalised).
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    /// Normalised header names, skipping blank header cells.
    pub fn columns(&self) -> Vec<String> {
        self.headers
            .iter()
            .map(|h| normalize_header(h))
            .filter(|h| !h.is_empty())
            .collect()
    }

    /// Pair each data row with the header row. Short rows are padded with
    /// [`Cell::Empty`]; cells under a blank header are dropped.
    pub fn raw_rows(&self) -> impl Iterator<Item = RawRow> + '_ {
        self.rows.iter().map(move |cells| {
            let mut row = RawRow::new();
            for (idx, header) in self.headers.iter().enumerate() {
                if normalize_header(header).is_empty() {
                    continue;
                }
                let cell = cells.get(idx).cloned().unwrap_or_default();
                row.insert(header, cell);
            }
            row
        })
    }
}

// ---------------------------------------------------------------------------
// Output side
// ---------------------------------------------------------------------------

/// A canonical, finite currency amount.
///
/// Values within `1e-9` of an integer are snapped to that integer; anything
/// else is rounded to two decimals. Whole amounts serialise as JSON integers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Money(f64);

impl Money {
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let nearest = value.round();
        let canonical = if (value - nearest).abs() < 1e-9 {
            nearest
        } else {
            (value * 100.0).round() / 100.0
        };
        // Avoid emitting `-0`.
        Some(Money(if canonical == 0.0 { 0.0 } else { canonical }))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_whole(self) -> bool {
        self.0.fract() == 0.0
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() && self.0.abs() < 9.0e15 {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

/// Call-to-action a listing exposes, derived from the contact/payment flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    None,
    Contact,
    Checkout,
    ContactThenCheckout,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::None => write!(f, "none"),
            Action::Contact => write!(f, "contact"),
            Action::Checkout => write!(f, "checkout"),
            Action::ContactThenCheckout => write!(f, "contact_then_checkout"),
        }
    }
}

/// Which action model a deployment uses. Chosen once per run, never per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionModel {
    /// `contact us` / `payment` yes-no columns, with a derived [`Action`].
    #[default]
    BooleanFlags,
    /// Free-form `action type` column plus pass-through contact/checkout links.
    FreeForm,
}

impl fmt::Display for ActionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionModel::BooleanFlags => write!(f, "boolean_flags"),
            ActionModel::FreeForm => write!(f, "free_form"),
        }
    }
}

impl FromStr for ActionModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "boolean_flags" | "flags" => Ok(ActionModel::BooleanFlags),
            "free_form" | "freeform" => Ok(ActionModel::FreeForm),
            other => Err(format!(
                "unknown action model '{other}' (expected boolean_flags or free_form)"
            )),
        }
    }
}

/// The action-related half of a [`ServiceRecord`], one shape per [`ActionModel`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActionFields {
    #[serde(rename_all = "camelCase")]
    BooleanFlags {
        needs_contact: bool,
        needs_payment: bool,
        action: Action,
    },
    #[serde(rename_all = "camelCase")]
    FreeForm {
        action_type: String,
        contact_link: String,
        checkout_link: String,
    },
}

impl ActionFields {
    pub fn model(&self) -> ActionModel {
        match self {
            ActionFields::BooleanFlags { .. } => ActionModel::BooleanFlags,
            ActionFields::FreeForm { .. } => ActionModel::FreeForm,
        }
    }
}

/// One normalised service listing. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub slug: String,
    pub name: String,
    /// `None` when the price cell was empty, `NA`, or unparseable.
    pub price: Option<Money>,
    pub sale_price: Option<Money>,
    /// Image path, video path, or video-platform URL; not validated.
    pub image: String,
    pub description: String,
    pub bullets: Vec<String>,
    #[serde(flatten)]
    pub action: ActionFields,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
