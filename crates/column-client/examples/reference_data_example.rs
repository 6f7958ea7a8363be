/*
[INPUT]:  COLUMN_API_KEY environment variable, routing number and IBAN
[OUTPUT]: Institution lookup and IBAN validation results
[POS]:    Examples - reference data queries
[UPDATE]: When adding new lookup endpoints
*/

use column_client::*;

/// Example: look up reference data with a sandbox key
///
/// Run with `COLUMN_API_KEY=test_... cargo run --example reference_data_example`.
#[tokio::main]
async fn main() {
    println!("=== Column Reference Data Example ===\n");

    let api_key = std::env::var("COLUMN_API_KEY").unwrap_or_default();
    let client = match ColumnClient::new(api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created ({} environment)\n", client.environment());

    let routing_number = "322271627";
    println!("Looking up institution {}...", routing_number);
    match client.get_financial_institution(routing_number).await {
        Ok(institution) => println!("✓ Institution: {}", institution.full_name),
        Err(e) => println!("✗ Error: {}", e),
    }

    let iban = "DE89370400440532013000";
    println!("\nValidating IBAN {}...", iban);
    match client.validate_iban(iban).await {
        Ok(result) => println!("✓ BIC {} at {}", result.bic, result.institution_name),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Reference data example complete");
}
