//! Enumeration types used in requests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the books an outstanding invoice sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredDeb {
    /// Invoices owed to creditors
    #[serde(rename = "C")]
    Creditor,
    /// Invoices owed by debtors
    #[serde(rename = "D")]
    Debtor,
}

impl CredDeb {
    /// The wire value, `"C"` or `"D"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CredDeb::Creditor => "C",
            CredDeb::Debtor => "D",
        }
    }
}

impl fmt::Display for CredDeb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
