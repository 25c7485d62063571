use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable, NamedEntity};

/// Depth of the leaf accounts that carry postings in the chart of accounts.
pub const LEAF_LEVEL: u8 = 3;

/// Leading code digit of income accounts.
pub const INCOME_CODE_PREFIX: char = '4';
/// Leading code digit of expense accounts.
pub const EXPENSE_CODE_PREFIX: char = '5';

/// A node of the chart of accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub code: String,
    pub name: String,
    pub category: AccountCategory,
    pub level: u8,
}

impl Account {
    /// Creates a leaf account, the only kind that takes part in statements.
    pub fn new(code: impl Into<String>, name: impl Into<String>, category: AccountCategory) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            category,
            level: LEAF_LEVEL,
        }
    }

    /// Places the account at a different depth of the hierarchy.
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.level == LEAF_LEVEL
    }
}

impl Identifiable for Account {
    fn key(&self) -> &str {
        &self.code
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} {} ({})", self.code, self.name, self.category)
    }
}

/// Enumerates the statement classifications of an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AccountCategory {
    Asset,
    Liability,
    Income,
    Expense,
    Equity,
}

impl AccountCategory {
    pub fn label(self) -> &'static str {
        match self {
            AccountCategory::Asset => "Asset",
            AccountCategory::Liability => "Liability",
            AccountCategory::Income => "Income",
            AccountCategory::Expense => "Expense",
            AccountCategory::Equity => "Equity",
        }
    }
}

impl std::fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn is_income_code(code: &str) -> bool {
    code.starts_with(INCOME_CODE_PREFIX)
}

pub fn is_expense_code(code: &str) -> bool {
    code.starts_with(EXPENSE_CODE_PREFIX)
}
