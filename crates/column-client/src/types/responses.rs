/*
[INPUT]:  Column API list envelopes
[OUTPUT]: Typed paginated response structs
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new list endpoints added
*/

use serde::{Deserialize, Serialize};

use super::models::{AccountNumber, BankAccount, BookTransfer, Counterparty, FinancialInstitution};

/// Cursor-paginated list response
pub trait Page {
    type Item;

    fn items(&self) -> &[Self::Item];
    fn has_more(&self) -> bool;

    /// Cursor for the next page (`starting_after`), if there is one.
    fn next_cursor(&self) -> Option<&str>;
}

macro_rules! impl_page {
    ($list:ty, $item:ty, $field:ident) => {
        impl Page for $list {
            type Item = $item;

            fn items(&self) -> &[Self::Item] {
                &self.$field
            }

            fn has_more(&self) -> bool {
                self.has_more
            }

            fn next_cursor(&self) -> Option<&str> {
                if !self.has_more {
                    return None;
                }
                self.$field.last().map(|item| item.id.as_str())
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccountList {
    pub has_more: bool,
    #[serde(default)]
    pub bank_accounts: Vec<BankAccount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountNumberList {
    pub has_more: bool,
    #[serde(default)]
    pub account_numbers: Vec<AccountNumber>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterpartyList {
    pub has_more: bool,
    #[serde(default)]
    pub counterparties: Vec<Counterparty>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialInstitutionList {
    pub has_more: bool,
    #[serde(default)]
    pub financial_institutions: Vec<FinancialInstitution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookTransferList {
    pub has_more: bool,
    #[serde(default, alias = "transfers")]
    pub data: Vec<BookTransfer>,
}

impl_page!(BankAccountList, BankAccount, bank_accounts);
impl_page!(AccountNumberList, AccountNumber, account_numbers);
impl_page!(CounterpartyList, Counterparty, counterparties);
impl_page!(BookTransferList, BookTransfer, data);

// Institutions are keyed by routing number rather than an id.
impl Page for FinancialInstitutionList {
    type Item = FinancialInstitution;

    fn items(&self) -> &[Self::Item] {
        &self.financial_institutions
    }

    fn has_more(&self) -> bool {
        self.has_more
    }

    fn next_cursor(&self) -> Option<&str> {
        if !self.has_more {
            return None;
        }
        self.financial_institutions
            .last()
            .map(|institution| institution.routing_number.as_str())
    }
}
