/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use column_client::{
    AccountNumberListParams, AccountType, AddressRequest, BankAccountListParams,
    BeneficialOwnerRequest, BusinessEntityRequest, ColumnClient, ColumnError,
    CounterpartyListParams, CreateAccountNumberRequest, CreateBankAccountRequest,
    CreateCounterpartyRequest, CreatedFilter, DocumentSubmitRequest, Entity, Environment,
    ErrorType, FinancialInstitutionListParams, LegalType, Page, Pagination, PassportRequest,
    PersonEntityRequest, RoutingNumberType, UpdateBankAccountRequest,
};
use chrono::{TimeZone, Utc};
use common::{
    TEST_API_KEY, bank_account_json, business_json, client_for, counterparty_json,
    error_json, person_json, setup_mock_server,
};
use reqwest::StatusCode;
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(ColumnClient::new(TEST_API_KEY));
    assert_eq!(client.environment(), Environment::Test);
    assert_eq!(client.base_url().as_str(), "https://api.column.com/");
}

#[test]
fn test_client_rejects_unprefixed_key() {
    let err = ColumnClient::new("2Q1fIwLCgvJI9DhQ1bVJZn0SxRy").unwrap_err();
    assert!(matches!(err, ColumnError::InvalidApiKey));
}

#[tokio::test]
async fn test_requests_use_basic_auth_with_empty_username() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/entities/enti_person"))
        .and(basic_auth("", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(person_json("enti_person")))
        .expect(1)
        .mount(&server)
        .await;

    let entity = assert_ok!(client_for(&server).get_entity("enti_person").await);
    assert_eq!(entity.id(), "enti_person");
}

#[tokio::test]
async fn test_get_entity_dispatches_on_type() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/entities/enti_person"))
        .respond_with(ResponseTemplate::new(200).set_body_json(person_json("enti_person")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/entities/enti_biz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(business_json("enti_biz")))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let person = assert_ok!(client.get_entity("enti_person").await);
    let person = person.as_person().expect("person entity");
    assert_eq!(person.person_details.ssn.as_deref(), Some("123-45-6789"));
    assert_eq!(person.verification_status, vec!["VERIFIED".to_string()]);

    let business = assert_ok!(client.get_entity("enti_biz").await);
    match business {
        Entity::Business(business) => {
            assert_eq!(business.business_details.business_name, "Analytical Engines LLC");
            assert_eq!(business.business_details.beneficial_owners.len(), 1);
            assert!(business.verification_tags.is_empty());
        }
        Entity::Person(_) => panic!("Expected business entity"),
    }
}

#[tokio::test]
async fn test_create_person_posts_body() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/entities/person"))
        .and(body_json(json!({
            "first_name": "Oliver",
            "last_name": "Hockey",
            "passport": { "country_code": "GB", "number": "987654321" },
            "date_of_birth": "1985-06-01",
            "address": {
                "line_1": "555 California St",
                "city": "San Francisco",
                "state": "CA",
                "postal_code": "94105",
                "country_code": "US"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(person_json("enti_new")))
        .expect(1)
        .mount(&server)
        .await;

    let req = PersonEntityRequest {
        first_name: "Oliver".to_string(),
        last_name: "Hockey".to_string(),
        passport: Some(PassportRequest {
            country_code: "GB".to_string(),
            number: "987654321".to_string(),
        }),
        date_of_birth: "1985-06-01".to_string(),
        address: column_client::AddressRequest {
            line_1: "555 California St".to_string(),
            city: "San Francisco".to_string(),
            state: Some("CA".to_string()),
            postal_code: Some("94105".to_string()),
            country_code: "US".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    let person = assert_ok!(client_for(&server).create_person(&req).await);
    assert_eq!(person.id, "enti_new");
}

#[tokio::test]
async fn test_create_person_without_identity_is_not_sent() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let req = PersonEntityRequest {
        first_name: "Oliver".to_string(),
        last_name: "Hockey".to_string(),
        ..Default::default()
    };

    let err = client_for(&server).create_person(&req).await.unwrap_err();
    assert!(matches!(err, ColumnError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_submit_document_returns_entity() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/entities/enti_biz/documents"))
        .and(body_json(json!({ "document_id": "docu_1", "type": "articles_of_incorporation" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(business_json("enti_biz")))
        .expect(1)
        .mount(&server)
        .await;

    let req = DocumentSubmitRequest {
        document_id: "docu_1".to_string(),
        document_type: Some("articles_of_incorporation".to_string()),
        description: None,
    };

    let entity = assert_ok!(client_for(&server).submit_document("enti_biz", &req).await);
    assert!(entity.as_business().is_some());
}

#[tokio::test]
async fn test_delete_entity_tolerates_empty_body() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/entities/enti_person"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(client_for(&server).delete_entity("enti_person").await);
}

#[tokio::test]
async fn test_list_bank_accounts_with_created_filter() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/entities/enti_1/bank-accounts"))
        .and(query_param("type", "CHECKING"))
        .and(query_param("limit", "10"))
        .and(query_param("created.gte", "2024-01-01T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "has_more": true,
            "bank_accounts": [bank_account_json("bacc_1"), bank_account_json("bacc_2")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = BankAccountListParams {
        account_type: Some(column_client::BankAccountType::Checking),
        created: CreatedFilter {
            gte: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            ..CreatedFilter::default()
        },
        page: Pagination {
            limit: Some(10),
            ..Pagination::default()
        },
        ..BankAccountListParams::default()
    };

    let list = assert_ok!(client_for(&server).list_bank_accounts("enti_1", &params).await);
    assert_eq!(list.items().len(), 2);
    assert_eq!(list.next_cursor(), Some("bacc_2"));
    assert_eq!(list.bank_accounts[0].balances.available_amount, 125_000);
}

#[tokio::test]
async fn test_update_bank_account_and_summary_history() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/entities/bank-account/bacc_1"))
        .and(body_json(json!({ "description": "Payroll" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(bank_account_json("bacc_1")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/entities/bank-account/bacc_1/summary-history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "bacc_1",
            "history": [{
                "available_balance_credit": "5000",
                "available_balance_debit": "-1000",
                "available_balance_close": "4000",
                "currency": "USD",
                "effective_on": "2024-03-01",
                "holding_balance_credit": "0",
                "holding_balance_debit": "0",
                "holding_balance_close": "0",
                "locked_balance_credit": "0",
                "locked_balance_debit": "0",
                "locked_balance_close": "0",
                "pending_balance_credit": "0",
                "pending_balance_debit": "0",
                "pending_balance_close": "0",
                "time_zone": "UTC",
                "transaction_count": 2
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let req = UpdateBankAccountRequest {
        description: Some("Payroll".to_string()),
        ..Default::default()
    };
    let account = assert_ok!(client.update_bank_account("bacc_1", &req).await);
    assert_eq!(account.id, "bacc_1");

    let history = assert_ok!(client.get_bank_account_summary_history("bacc_1").await);
    assert_eq!(history.history.len(), 1);
    assert_eq!(history.history[0].available_balance_close, "4000");
}

#[tokio::test]
async fn test_account_numbers() {
    let server = setup_mock_server().await;
    let account_number = json!({
        "id": "acno_1",
        "bank_account_id": "bacc_1",
        "bic": "CLNOUS66",
        "created_at": "2024-01-01T00:00:00Z",
        "description": "payroll",
        "routing_number": "121145307"
    });

    Mock::given(method("POST"))
        .and(path("/bank-accounts/bacc_1/account-number"))
        .and(body_json(json!({ "description": "payroll" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_number.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bank-accounts/bacc_1/account-numbers"))
        .and(query_param("ending_before", "acno_9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "has_more": false,
            "account_numbers": [account_number.clone()]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/account-numbers/acno_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_number))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = assert_ok!(
        client
            .create_account_number(
                "bacc_1",
                &CreateAccountNumberRequest {
                    description: "payroll".to_string(),
                },
            )
            .await
    );
    assert_eq!(created.id, "acno_1");

    let params = AccountNumberListParams {
        page: Pagination {
            ending_before: Some("acno_9".to_string()),
            ..Pagination::default()
        },
    };
    let list = assert_ok!(client.list_account_numbers("bacc_1", &params).await);
    assert_eq!(list.next_cursor(), None);

    let fetched = assert_ok!(client.get_account_number("acno_1").await);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_counterparties_list_and_delete() {
    let server = setup_mock_server().await;
    let counterparty = counterparty_json("cpty_1");

    Mock::given(method("GET"))
        .and(path("/counterparties"))
        .and(query_param("routing_number", "322271627"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "has_more": false,
            "counterparties": [counterparty]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/counterparties/cpty_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = CounterpartyListParams {
        routing_number: Some("322271627".to_string()),
        ..Default::default()
    };
    let list = assert_ok!(client.list_counterparties(&params).await);
    assert_eq!(list.counterparties[0].name, "Vendor Inc");

    assert_ok!(client.delete_counterparty("cpty_1").await);
}

#[tokio::test]
async fn test_financial_institutions_and_iban() {
    let server = setup_mock_server().await;
    let institution = json!({
        "ach_eligible": true,
        "city": "TAMPA",
        "country_code": "US",
        "created_at": "2021-10-13T16:39:55Z",
        "full_name": "JPMORGAN CHASE BANK, NA",
        "phone_number": "8134323700",
        "routing_number": "322271627",
        "routing_number_type": "aba",
        "short_name": "WASH MUT BANK",
        "state": "FL",
        "street_address": "10430 HIGHLAND MANOR DRIVE",
        "updated_at": "2021-10-28T13:00:35Z",
        "wire_eligible": true,
        "wire_settlement_only": false,
        "zip_code": "33610"
    });

    Mock::given(method("GET"))
        .and(path("/institutions/322271627"))
        .respond_with(ResponseTemplate::new(200).set_body_json(institution.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/institutions"))
        .and(query_param("name", "chase"))
        .and(query_param("routing_number_type", "aba"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "has_more": true,
            "financial_institutions": [institution]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/iban/DE89370400440532013000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account_number": "0532013000",
            "bank_id": "37040044",
            "bic": "COBADEFFXXX",
            "branch_id": "",
            "check_digits": "89",
            "country_code": "DE",
            "iban": "DE89370400440532013000",
            "institution_name": "Commerzbank",
            "national_id": "37040044"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let fi = assert_ok!(client.get_financial_institution("322271627").await);
    assert_eq!(fi.routing_number_type, RoutingNumberType::Aba);

    let params = FinancialInstitutionListParams {
        name: Some("chase".to_string()),
        routing_number_type: Some(RoutingNumberType::Aba),
        ..Default::default()
    };
    let list = assert_ok!(client.list_financial_institutions(&params).await);
    assert_eq!(list.next_cursor(), Some("322271627"));

    let iban = assert_ok!(client.validate_iban("DE89370400440532013000").await);
    assert_eq!(iban.bic, "COBADEFFXXX");
}

#[tokio::test]
async fn test_documented_error_status_maps_to_api_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/transfers/book/book_missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(error_json("transfer_error", "not_found")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_book_transfer("book_missing")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    let api = err.api().expect("Expected Api error variant");
    assert_eq!(api.error_type, ErrorType::TransferError);
    assert_eq!(api.code, "not_found");
    assert_eq!(api.details.get("field").map(String::as_str), Some("reason"));
    assert!(api.url.ends_with("/transfers/book/book_missing"));
    assert!(err.to_string().contains("Server returned status: 404"));
}

#[tokio::test]
async fn test_rate_limit_and_auth_errors() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/counterparties/cpty_limited"))
        .respond_with(ResponseTemplate::new(429).set_body_json(error_json("limit_error", "rate_limited")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/counterparties/cpty_forbidden"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(error_json("authentication_error", "unauthorized")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let limited = client.get_counterparty("cpty_limited").await.unwrap_err();
    assert!(limited.is_rate_limited());
    assert_eq!(limited.status(), Some(StatusCode::TOO_MANY_REQUESTS));

    let forbidden = client.get_counterparty("cpty_forbidden").await.unwrap_err();
    assert!(forbidden.is_auth_error());
}

#[tokio::test]
async fn test_undocumented_status_is_unexpected() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/iban/GB00"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = client_for(&server).validate_iban("GB00").await.unwrap_err();
    assert!(matches!(
        err,
        ColumnError::UnexpectedStatus { status, .. } if status == StatusCode::CONFLICT
    ));
}

#[tokio::test]
async fn test_malformed_success_body_is_serialization_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/entities/bank-account/bacc_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "bacc_1" })))
        .mount(&server)
        .await;

    let err = client_for(&server).get_bank_account("bacc_1").await.unwrap_err();
    assert!(matches!(err, ColumnError::Serialization(_)));
}

fn sf_address() -> AddressRequest {
    AddressRequest {
        line_1: "555 California St".to_string(),
        city: "San Francisco".to_string(),
        state: Some("CA".to_string()),
        postal_code: Some("94105".to_string()),
        country_code: "US".to_string(),
        ..Default::default()
    }
}

fn sf_address_json() -> serde_json::Value {
    json!({
        "line_1": "555 California St",
        "city": "San Francisco",
        "state": "CA",
        "postal_code": "94105",
        "country_code": "US"
    })
}

fn business_request() -> BusinessEntityRequest {
    BusinessEntityRequest {
        ein: "12-3456789".to_string(),
        business_name: "Analytical Engines LLC".to_string(),
        website: Some("https://example.com".to_string()),
        address: sf_address(),
        beneficial_owners: vec![BeneficialOwnerRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ssn: Some("987-65-4321".to_string()),
            date_of_birth: "1980-12-10".to_string(),
            is_control_person: true,
            is_beneficial_owner: true,
            ownership_percentage: Some(60),
            address: sf_address(),
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn business_request_json() -> serde_json::Value {
    json!({
        "ein": "12-3456789",
        "business_name": "Analytical Engines LLC",
        "website": "https://example.com",
        "address": sf_address_json(),
        "beneficial_owners": [{
            "first_name": "Ada",
            "last_name": "Lovelace",
            "ssn": "987-65-4321",
            "date_of_birth": "1980-12-10",
            "is_control_person": true,
            "is_beneficial_owner": true,
            "ownership_percentage": 60,
            "address": sf_address_json()
        }]
    })
}

#[tokio::test]
async fn test_create_and_update_business() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/entities/business"))
        .and(body_json(business_request_json()))
        .respond_with(ResponseTemplate::new(200).set_body_json(business_json("enti_biz")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/entities/business/enti_biz"))
        .and(body_json(business_request_json()))
        .respond_with(ResponseTemplate::new(200).set_body_json(business_json("enti_biz")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let req = business_request();

    let created = assert_ok!(client.create_business(&req).await);
    assert_eq!(created.id, "enti_biz");
    assert_eq!(created.entity_type, "BUSINESS");

    let updated = assert_ok!(client.update_business("enti_biz", &req).await);
    assert_eq!(updated.business_details.business_name, "Analytical Engines LLC");
}

#[tokio::test]
async fn test_update_person_puts_body() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/entities/person/enti_person"))
        .and(body_json(json!({
            "first_name": "Oliver",
            "last_name": "Hockey",
            "ssn": "123-45-6789",
            "date_of_birth": "1985-06-01",
            "email": "oliver@example.com",
            "address": sf_address_json()
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(person_json("enti_person")))
        .expect(1)
        .mount(&server)
        .await;

    let req = PersonEntityRequest {
        first_name: "Oliver".to_string(),
        last_name: "Hockey".to_string(),
        ssn: Some("123-45-6789".to_string()),
        date_of_birth: "1985-06-01".to_string(),
        email: Some("oliver@example.com".to_string()),
        address: sf_address(),
        ..Default::default()
    };

    let person = assert_ok!(client_for(&server).update_person("enti_person", &req).await);
    assert_eq!(person.id, "enti_person");
    assert_eq!(person.entity_type, "PERSON");
}

#[tokio::test]
async fn test_update_person_without_identity_is_not_sent() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let req = PersonEntityRequest {
        first_name: "Oliver".to_string(),
        last_name: "Hockey".to_string(),
        date_of_birth: "1985-06-01".to_string(),
        address: sf_address(),
        ..Default::default()
    };

    let err = client_for(&server)
        .update_person("enti_person", &req)
        .await
        .unwrap_err();
    assert!(matches!(err, ColumnError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_create_and_delete_bank_account() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/entities/bank-account"))
        .and(body_json(json!({
            "entity_id": "enti_1",
            "description": "Operating",
            "is_overdraftable": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(bank_account_json("bacc_new")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/entities/bank-account/bacc_new"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let req = CreateBankAccountRequest {
        entity_id: "enti_1".to_string(),
        description: Some("Operating".to_string()),
        is_overdraftable: Some(false),
        ..Default::default()
    };

    let account = assert_ok!(client.create_bank_account(&req).await);
    assert_eq!(account.id, "bacc_new");
    assert_ok!(client.delete_bank_account(&account.id).await);
}

#[tokio::test]
async fn test_create_counterparty_wire_spelling() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/counterparties"))
        .and(body_json(json!({
            "routing_number": "322271627",
            "routing_number_type": "aba",
            "account_number": "000111222",
            "account_type": "checking",
            "name": "Vendor Inc",
            "legal_type": "non_profit"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(counterparty_json("cpty_new")))
        .expect(1)
        .mount(&server)
        .await;

    let req = CreateCounterpartyRequest {
        routing_number: "322271627".to_string(),
        routing_number_type: Some(RoutingNumberType::Aba),
        account_number: "000111222".to_string(),
        account_type: Some(AccountType::Checking),
        name: Some("Vendor Inc".to_string()),
        legal_type: Some(LegalType::NonProfit),
        ..Default::default()
    };

    let counterparty = assert_ok!(client_for(&server).create_counterparty(&req).await);
    assert_eq!(counterparty.id, "cpty_new");
}
