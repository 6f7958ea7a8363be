/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for column-client tests

#![allow(dead_code)]

use column_client::{ClientConfig, ColumnClient};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test_2Q1fIwLCgvJI9DhQ1bVJZn0SxRy";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    }
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> ColumnClient {
    ColumnClient::with_config(TEST_API_KEY, config_for(server)).expect("client init")
}

pub fn address_json() -> Value {
    json!({
        "city": "San Francisco",
        "country_code": "US",
        "postal_code": "94105",
        "state": "CA",
        "line_1": "555 California St",
        "line_2": "Suite 200"
    })
}

pub fn person_json(id: &str) -> Value {
    json!({
        "id": id,
        "type": "PERSON",
        "is_root": false,
        "documents": [],
        "person_details": {
            "first_name": "Oliver",
            "last_name": "Hockey",
            "middle_name": null,
            "ssn": "123-45-6789",
            "date_of_birth": "1985-06-01",
            "email": "oliver@example.com",
            "passport": null,
            "address": address_json()
        },
        "verification_status": "VERIFIED",
        "verification_tags": [],
        "review_reasons": []
    })
}

pub fn business_json(id: &str) -> Value {
    json!({
        "id": id,
        "type": "BUSINESS",
        "is_root": true,
        "documents": [],
        "business_details": {
            "address": address_json(),
            "beneficial_owners": [{
                "first_name": "Ada",
                "last_name": "Lovelace",
                "date_of_birth": "1980-12-10",
                "is_control_person": true,
                "is_beneficial_owner": true,
                "ownership_percentage": 60,
                "address": address_json()
            }],
            "business_name": "Analytical Engines LLC",
            "ein": "12-3456789",
            "industry": "software",
            "website": "https://example.com",
            "legal_type": "llc"
        },
        "review_reasons": [],
        "verification_status": ["PENDING"],
        "verification_tags": ""
    })
}

pub fn bank_account_json(id: &str) -> Value {
    json!({
        "balances": {
            "available_amount": 125000,
            "holding_amount": 0,
            "locked_amount": 0,
            "pending_amount": 0
        },
        "bic": "CLNOUS66",
        "created_at": "2024-01-01T00:00:00Z",
        "currency_code": "USD",
        "default_account_number": "123456789012",
        "default_account_number_id": "acno_default",
        "description": "Operating",
        "id": id,
        "is_overdraftable": false,
        "overdraft_reserve_account_id": null,
        "owners": ["enti_1"],
        "routing_number": "121145307",
        "type": "CHECKING"
    })
}

pub fn counterparty_json(id: &str) -> Value {
    json!({
        "account_number": "000111222",
        "account_type": "checking",
        "address": address_json(),
        "created_at": "2024-01-01T00:00:00Z",
        "description": "vendor",
        "email": "ap@vendor.example",
        "id": id,
        "is_column_account": false,
        "legal_id": "",
        "legal_type": "business",
        "local_account_number": "",
        "local_bank_code": "",
        "local_bank_country_code": "",
        "local_bank_name": "",
        "name": "Vendor Inc",
        "phone": "",
        "routing_number": "322271627",
        "routing_number_type": "aba",
        "updated_at": "2024-01-02T00:00:00Z",
        "wire": {
            "beneficiary_address": address_json(),
            "beneficiary_email": "",
            "beneficiary_legal_id": "",
            "beneficiary_name": "Vendor Inc",
            "beneficiary_phone": "",
            "beneficiary_type": "business",
            "local_account_number": "",
            "local_bank_code": ""
        },
        "wire_drawdown_allowed": false
    })
}

pub fn error_json(error_type: &str, code: &str) -> Value {
    json!({
        "type": error_type,
        "code": code,
        "message": "request failed",
        "documentation_url": "https://column.com/docs/errors",
        "details": { "field": "reason" }
    })
}
