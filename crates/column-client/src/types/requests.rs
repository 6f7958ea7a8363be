/*
[INPUT]:  Caller-supplied request fields and list filters
[OUTPUT]: Serializable request bodies and ordered query pairs
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new request types added
*/

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{AccountType, BankAccountType, LegalType, RoutingNumberType, TransferStatus};

/// Ordered query pairs; only present values are included
pub type QueryPairs = Vec<(&'static str, String)>;

fn push_opt<T: ToString>(pairs: &mut QueryPairs, key: &'static str, value: Option<&T>) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}

fn rfc3339(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

// ### Shared request fragments

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressRequest {
    pub line_1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_2: Option<String>,
    pub city: String,
    /// Required for US addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub country_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentificationRequest {
    pub number: String,
    pub country_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassportRequest {
    pub country_code: String,
    pub number: String,
}

/// `created` range filter, rendered as `created.gt`, `created.lt`, ...
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatedFilter {
    pub gt: Option<DateTime<Utc>>,
    pub lt: Option<DateTime<Utc>>,
    pub gte: Option<DateTime<Utc>>,
    pub lte: Option<DateTime<Utc>>,
}

impl CreatedFilter {
    pub fn is_empty(&self) -> bool {
        self.gt.is_none() && self.lt.is_none() && self.gte.is_none() && self.lte.is_none()
    }

    fn append_to(&self, pairs: &mut QueryPairs) {
        let bounds = [
            ("created.gt", &self.gt),
            ("created.lt", &self.lt),
            ("created.gte", &self.gte),
            ("created.lte", &self.lte),
        ];
        for (key, bound) in bounds {
            if let Some(value) = bound {
                pairs.push((key, rfc3339(value)));
            }
        }
    }
}

/// Cursor pagination shared by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<u32>,
    pub starting_after: Option<String>,
    pub ending_before: Option<String>,
}

impl Pagination {
    pub fn after(cursor: impl Into<String>) -> Self {
        Self {
            starting_after: Some(cursor.into()),
            ..Self::default()
        }
    }

    fn append_to(&self, pairs: &mut QueryPairs) {
        push_opt(pairs, "limit", self.limit.as_ref());
        push_opt(pairs, "starting_after", self.starting_after.as_ref());
        push_opt(pairs, "ending_before", self.ending_before.as_ref());
    }
}

// ### Entities

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonEntityRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Required unless a passport is provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    /// Required unless an SSN is provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport: Option<PassportRequest>,
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: AddressRequest,
}

impl PersonEntityRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.ssn.is_none() && self.passport.is_none() {
            return Err("person requires either an ssn or a passport".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeneficialOwnerRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport: Option<IdentificationRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drivers_license: Option<IdentificationRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<IdentificationRequest>,
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub is_control_person: bool,
    pub is_beneficial_owner: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership_percentage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    pub address: AddressRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessEntityRequest {
    pub ein: String,
    pub business_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_type: Option<String>,
    pub address: AddressRequest,
    pub beneficial_owners: Vec<BeneficialOwnerRequest>,
}

/// Attach an uploaded document to an entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSubmitRequest {
    pub document_id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ### Bank accounts

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateBankAccountRequest {
    pub entity_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_overdraftable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overdraft_reserve_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateBankAccountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_overdraftable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overdraft_reserve_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankAccountListParams {
    pub is_overdraftable: Option<bool>,
    pub account_type: Option<BankAccountType>,
    pub overdraft_reserve_account_id: Option<String>,
    pub created: CreatedFilter,
    pub page: Pagination,
}

impl BankAccountListParams {
    pub fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "is_overdraftable", self.is_overdraftable.as_ref());
        if let Some(kind) = self.account_type {
            pairs.push(("type", kind.as_str().to_string()));
        }
        push_opt(
            &mut pairs,
            "overdraft_reserve_account_id",
            self.overdraft_reserve_account_id.as_ref(),
        );
        self.page.append_to(&mut pairs);
        self.created.append_to(&mut pairs);
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateAccountNumberRequest {
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountNumberListParams {
    pub page: Pagination,
}

impl AccountNumberListParams {
    pub fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.page.append_to(&mut pairs);
        pairs
    }
}

// ### Counterparties and institutions

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCounterpartyRequest {
    pub routing_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number_type: Option<RoutingNumberType>,
    pub account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wire_drawdown_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_type: Option<LegalType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_account_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CounterpartyListParams {
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub created: CreatedFilter,
    pub page: Pagination,
}

impl CounterpartyListParams {
    pub fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.page.append_to(&mut pairs);
        push_opt(&mut pairs, "account_number", self.account_number.as_ref());
        push_opt(&mut pairs, "routing_number", self.routing_number.as_ref());
        self.created.append_to(&mut pairs);
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialInstitutionListParams {
    pub country_code: Option<String>,
    pub name: Option<String>,
    pub routing_number_type: Option<RoutingNumberType>,
    pub page: Pagination,
}

impl FinancialInstitutionListParams {
    pub fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.page.append_to(&mut pairs);
        push_opt(&mut pairs, "country_code", self.country_code.as_ref());
        push_opt(&mut pairs, "name", self.name.as_ref());
        if let Some(kind) = self.routing_number_type {
            pairs.push(("routing_number_type", kind.as_str().to_string()));
        }
        pairs
    }
}

// ### Transfers

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferDetailsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_category_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_transfer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_description: Option<String>,
    pub address: AddressRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateBookTransferRequest {
    /// Amount in cents
    pub amount: i64,
    pub currency_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_bank_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_account_number_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_bank_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_account_number_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_overdraft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<TransferDetailsRequest>,
    /// Sent as the `Idempotency-Key` header, not in the body
    #[serde(skip)]
    pub idempotency_key: Option<String>,
}

impl CreateBookTransferRequest {
    pub fn new(amount: i64, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.amount <= 0 {
            return Err(format!("amount must be positive, got {}", self.amount));
        }
        if self.currency_code.trim().is_empty() {
            return Err("currency_code is required".to_string());
        }
        match (&self.sender_bank_account_id, &self.sender_account_number_id) {
            (Some(_), Some(_)) => {
                return Err(
                    "specify only one of sender_bank_account_id or sender_account_number_id"
                        .to_string(),
                );
            }
            (None, None) => {
                return Err(
                    "one of sender_bank_account_id or sender_account_number_id is required"
                        .to_string(),
                );
            }
            _ => {}
        }
        match (&self.receiver_bank_account_id, &self.receiver_account_number_id) {
            (Some(_), Some(_)) => Err(
                "specify only one of receiver_bank_account_id or receiver_account_number_id"
                    .to_string(),
            ),
            (None, None) => Err(
                "one of receiver_bank_account_id or receiver_account_number_id is required"
                    .to_string(),
            ),
            _ => Ok(()),
        }
    }
}

/// Clear a held transfer; without an amount the whole hold clears
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearBookTransferRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookTransferListParams {
    pub sender_bank_account_id: Option<String>,
    pub receiver_bank_account_id: Option<String>,
    pub status: Option<TransferStatus>,
    pub created: CreatedFilter,
    pub page: Pagination,
}

impl BookTransferListParams {
    pub fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        self.page.append_to(&mut pairs);
        push_opt(
            &mut pairs,
            "sender_bank_account_id",
            self.sender_bank_account_id.as_ref(),
        );
        push_opt(
            &mut pairs,
            "receiver_bank_account_id",
            self.receiver_bank_account_id.as_ref(),
        );
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        self.created.append_to(&mut pairs);
        pairs
    }
}
