//! Test builders: ergonomic constructors for rows and options.
//!
//! These are for readability in assertions, not production use.

use svcsheet_core::{ActionModel, Cell, NormalizeOptions, RawRow, SalePriceFallback};

/// Fluent builder for [`RawRow`] fixtures.
///
/// ```rust
/// let row = RowBuilder::new("web-design")
///     .cell("Price", "$1,200")
///     .cell("Contact Us", "yes")
///     .build();
/// ```
pub struct RowBuilder {
    row: RawRow,
}

impl RowBuilder {
    pub fn new(slug: impl Into<Cell>) -> Self {
        let mut row = RawRow::new();
        row.insert("slug", slug.into());
        Self { row }
    }

    pub fn cell(mut self, column: &str, value: impl Into<Cell>) -> Self {
        self.row.insert(column, value.into());
        self
    }

    pub fn empty(self, column: &str) -> Self {
        self.cell(column, Cell::Empty)
    }

    pub fn build(self) -> RawRow {
        self.row
    }
}

pub fn flag_options() -> NormalizeOptions {
    NormalizeOptions {
        action_model: ActionModel::BooleanFlags,
        sale_price_fallback: SalePriceFallback::Absent,
    }
}

pub fn free_form_options() -> NormalizeOptions {
    NormalizeOptions {
        action_model: ActionModel::FreeForm,
        sale_price_fallback: SalePriceFallback::Absent,
    }
}
