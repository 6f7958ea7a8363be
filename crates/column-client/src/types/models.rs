/*
[INPUT]:  Column API response schemas and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::enums::{BankAccountType, ErrorType, RoutingNumberType, TransferStatus};

/// Error body returned alongside documented error statuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    pub code: String,
    pub message: String,
    pub documentation_url: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub details: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub country_code: String,
    pub postal_code: String,
    /// Absent outside the US
    #[serde(default)]
    pub state: Option<String>,
    pub line_1: String,
    #[serde(default)]
    pub line_2: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub checksum: String,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub id: String,
    pub size: i64,
    #[serde(rename = "type")]
    pub document_type: String,
    pub updated_at: DateTime<Utc>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identification {
    pub number: String,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passport {
    pub country_code: String,
    pub number: String,
}

// ### Entities

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDetails {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub ssn: Option<String>,
    pub date_of_birth: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub passport: Option<Passport>,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonEntity {
    pub id: String,
    pub is_root: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub documents: Vec<Document>,
    pub person_details: PersonDetails,
    #[serde(default, deserialize_with = "serde_helpers::string_or_seq")]
    pub verification_status: Vec<String>,
    #[serde(default, deserialize_with = "serde_helpers::string_or_seq")]
    pub verification_tags: Vec<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub review_reasons: Vec<String>,
    #[serde(rename = "type", default = "person_entity_type")]
    pub entity_type: String,
}

fn person_entity_type() -> String {
    "PERSON".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficialOwner {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub ssn: Option<String>,
    #[serde(default)]
    pub passport: Option<Identification>,
    #[serde(default)]
    pub drivers_license: Option<Identification>,
    #[serde(default)]
    pub national_id: Option<Identification>,
    pub date_of_birth: String,
    #[serde(default)]
    pub email: Option<String>,
    pub is_control_person: bool,
    pub is_beneficial_owner: bool,
    #[serde(default)]
    pub ownership_percentage: Option<u32>,
    #[serde(default)]
    pub job_title: Option<String>,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationId {
    pub number: String,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessDetails {
    pub address: Address,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub beneficial_owners: Vec<BeneficialOwner>,
    pub business_name: String,
    #[serde(default)]
    pub ein: Option<String>,
    #[serde(default)]
    pub registration_id: Option<RegistrationId>,
    pub industry: String,
    #[serde(default)]
    pub website: Option<String>,
    pub legal_type: String,
    #[serde(default)]
    pub state_of_incorporation: Option<String>,
    #[serde(default)]
    pub date_of_incorporation: Option<String>,
    #[serde(default)]
    pub account_usage: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub payment_volumes: Option<String>,
    #[serde(default)]
    pub countries_of_operation: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessEntity {
    pub id: String,
    pub is_root: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub documents: Vec<Document>,
    pub business_details: BusinessDetails,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub review_reasons: Vec<String>,
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_seq")]
    pub verification_status: Vec<String>,
    #[serde(default, deserialize_with = "serde_helpers::string_or_seq")]
    pub verification_tags: Vec<String>,
}

/// An entity as returned by endpoints that serve both kinds.
///
/// Serializes as the inner entity. The client picks the variant from the
/// `type` field of the response body (`PERSON` or `BUSINESS`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entity {
    Person(PersonEntity),
    Business(BusinessEntity),
}

impl Entity {
    pub fn id(&self) -> &str {
        match self {
            Entity::Person(person) => &person.id,
            Entity::Business(business) => &business.id,
        }
    }

    pub fn as_person(&self) -> Option<&PersonEntity> {
        match self {
            Entity::Person(person) => Some(person),
            Entity::Business(_) => None,
        }
    }

    pub fn as_business(&self) -> Option<&BusinessEntity> {
        match self {
            Entity::Business(business) => Some(business),
            Entity::Person(_) => None,
        }
    }
}

// ### Bank accounts

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balances {
    /// Amount available to spend
    pub available_amount: i64,
    /// Balance in HOLD state
    pub holding_amount: i64,
    /// Locked balance, applicable to root accounts
    pub locked_amount: i64,
    pub pending_amount: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub balances: Balances,
    /// Swift BIC for international wires
    pub bic: String,
    pub created_at: DateTime<Utc>,
    pub currency_code: String,
    pub default_account_number: String,
    pub default_account_number_id: String,
    pub description: String,
    pub id: String,
    pub is_overdraftable: bool,
    #[serde(default)]
    pub overdraft_reserve_account_id: Option<String>,
    /// Entity ids tied to this account
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub owners: Vec<String>,
    /// 9-digit ABA routing number
    pub routing_number: String,
    #[serde(rename = "type")]
    pub account_type: String,
}

impl BankAccount {
    /// Typed view of `account_type`, `None` for values this crate does not know.
    pub fn kind(&self) -> Option<BankAccountType> {
        self.account_type.parse().ok()
    }
}

/// Daily balance summary. Amounts are cent values encoded as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccountSummary {
    pub available_balance_credit: String,
    pub available_balance_debit: String,
    pub available_balance_close: String,
    pub currency: String,
    pub effective_on: NaiveDate,
    pub holding_balance_credit: String,
    pub holding_balance_debit: String,
    pub holding_balance_close: String,
    pub locked_balance_credit: String,
    pub locked_balance_debit: String,
    pub locked_balance_close: String,
    pub pending_balance_credit: String,
    pub pending_balance_debit: String,
    pub pending_balance_close: String,
    /// Time zone that decides the day boundaries of `effective_on`
    pub time_zone: String,
    pub transaction_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccountSummaryHistory {
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub history: Vec<BankAccountSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub cents: i64,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdraftAlert {
    pub available_balance: Money,
    pub bank_account_id: String,
    pub overdraft_amount: Money,
    pub reserve_account_id: String,
    pub transfer_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountNumber {
    pub id: String,
    pub bank_account_id: String,
    pub bic: String,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub routing_number: String,
}

// ### Counterparties and institutions

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    pub beneficiary_address: Address,
    pub beneficiary_email: String,
    pub beneficiary_legal_id: String,
    pub beneficiary_name: String,
    pub beneficiary_phone: String,
    pub beneficiary_type: String,
    pub local_account_number: String,
    pub local_bank_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counterparty {
    pub account_number: String,
    pub account_type: String,
    pub address: Address,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub email: String,
    pub id: String,
    pub is_column_account: bool,
    pub legal_id: String,
    pub legal_type: String,
    pub local_account_number: String,
    pub local_bank_code: String,
    pub local_bank_country_code: String,
    pub local_bank_name: String,
    pub name: String,
    pub phone: String,
    pub routing_number: String,
    pub routing_number_type: String,
    pub updated_at: DateTime<Utc>,
    pub wire: Wire,
    pub wire_drawdown_allowed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialInstitution {
    pub ach_eligible: bool,
    pub city: String,
    pub country_code: String,
    pub created_at: String,
    pub full_name: String,
    pub phone_number: String,
    pub routing_number: String,
    pub routing_number_type: RoutingNumberType,
    pub short_name: String,
    pub state: String,
    pub street_address: String,
    pub updated_at: String,
    pub wire_eligible: bool,
    pub wire_settlement_only: bool,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IbanValidation {
    pub account_number: String,
    pub bank_id: String,
    pub bic: String,
    pub branch_id: String,
    pub check_digits: String,
    pub country_code: String,
    pub iban: String,
    pub institution_name: String,
    pub national_id: String,
}

// ### Transfers

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferDetails {
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub merchant_name: Option<String>,
    #[serde(default)]
    pub merchant_category_code: Option<String>,
    #[serde(default)]
    pub authorization_method: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub internal_transfer_type: Option<String>,
    #[serde(default)]
    pub statement_description: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Instantaneous movement of funds between two accounts on the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookTransfer {
    pub allow_overdraft: bool,
    /// Amount in cents
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub currency_code: String,
    pub description: String,
    pub id: String,
    #[serde(default)]
    pub idempotency_key: String,
    pub receiver_account_number_id: String,
    pub receiver_bank_account_id: String,
    pub sender_account_number_id: String,
    pub sender_bank_account_id: String,
    pub status: TransferStatus,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub details: Option<TransferDetails>,
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// Accepts a single string or a list of strings.
    pub fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Vec::new()),
            Value::String(raw) if raw.is_empty() => Ok(Vec::new()),
            Value::String(raw) => Ok(vec![raw]),
            Value::Array(values) => values
                .into_iter()
                .map(|value| match value {
                    Value::String(raw) => Ok(raw),
                    other => Err(serde::de::Error::custom(format!(
                        "expected string, got {other}"
                    ))),
                })
                .collect(),
            other => Err(serde::de::Error::custom(format!(
                "expected string or list of strings, got {other}"
            ))),
        }
    }
}
