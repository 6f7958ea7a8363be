/*
[INPUT]:  Column API enumerated string values
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the API adds new enumerated values
*/

use serde::{Deserialize, Serialize};

/// Environment an API key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Live,
    Test,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Live => "live",
            Environment::Test => "test",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `type` field of an API error body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    AuthenticationError,
    BankAccountError,
    DashboardError,
    EntityError,
    LimitError,
    LoanError,
    RequestValidationError,
    ServerError,
    TransferError,
    #[serde(other)]
    Unknown,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::AuthenticationError => "authentication_error",
            ErrorType::BankAccountError => "bank_account_error",
            ErrorType::DashboardError => "dashboard_error",
            ErrorType::EntityError => "entity_error",
            ErrorType::LimitError => "limit_error",
            ErrorType::LoanError => "loan_error",
            ErrorType::RequestValidationError => "request_validation_error",
            ErrorType::ServerError => "server_error",
            ErrorType::TransferError => "transfer_error",
            ErrorType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankAccountType {
    Checking,
    OverdraftReserve,
    ProgramReserve,
}

impl BankAccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BankAccountType::Checking => "CHECKING",
            BankAccountType::OverdraftReserve => "OVERDRAFT_RESERVE",
            BankAccountType::ProgramReserve => "PROGRAM_RESERVE",
        }
    }
}

impl std::str::FromStr for BankAccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "CHECKING" => Ok(BankAccountType::Checking),
            "OVERDRAFT_RESERVE" => Ok(BankAccountType::OverdraftReserve),
            "PROGRAM_RESERVE" => Ok(BankAccountType::ProgramReserve),
            other => Err(format!("unknown bank account type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferStatus {
    Rejected,
    Completed,
    Hold,
    #[serde(alias = "CANCELLED")]
    Canceled,
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Rejected => "REJECTED",
            TransferStatus::Completed => "COMPLETED",
            TransferStatus::Hold => "HOLD",
            TransferStatus::Canceled => "CANCELED",
        }
    }
}

impl std::str::FromStr for TransferStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "REJECTED" => Ok(TransferStatus::Rejected),
            "COMPLETED" => Ok(TransferStatus::Completed),
            "HOLD" => Ok(TransferStatus::Hold),
            "CANCELED" | "CANCELLED" => Ok(TransferStatus::Canceled),
            other => Err(format!("unknown transfer status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingNumberType {
    Aba,
    Bic,
}

impl RoutingNumberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingNumberType::Aba => "aba",
            RoutingNumberType::Bic => "bic",
        }
    }
}

impl std::str::FromStr for RoutingNumberType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aba" => Ok(RoutingNumberType::Aba),
            "bic" => Ok(RoutingNumberType::Bic),
            other => Err(format!("unknown routing number type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalType {
    Business,
    NonProfit,
    Individual,
    SoleProprietor,
}
