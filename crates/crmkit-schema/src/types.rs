use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// EntityKey
///
/// Closed vocabulary of managed record kinds. Stable across tenants; a
/// tenant enables a subset of these, never new ones.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum EntityKey {
    Campaign,
    Contact,
    Employee,
    Loan,
    Route,
    Store,
    Wholesaler,
}

///
/// FieldType
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum FieldType {
    Bool,
    Date,
    Number,
    Select,
    Text,
}

impl FieldType {
    /// Whether values of this type carry free text (search targets).
    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(self, Self::Date | Self::Select | Self::Text)
    }
}

///
/// Category
///
/// Tenant classification used to pick a preset blueprint when a tenant has
/// no bespoke definition. `General` doubles as the unmapped-slug fallback.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum Category {
    General,
    Retail,
    Services,
    Wholesale,
}

///
/// TESTS
///
