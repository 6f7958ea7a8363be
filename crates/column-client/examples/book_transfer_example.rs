/*
[INPUT]:  COLUMN_API_KEY and two sandbox bank account ids
[OUTPUT]: A held book transfer, then its cancellation
[POS]:    Examples - book transfer hold lifecycle
[UPDATE]: When transfer endpoints change
*/

use column_client::*;

/// Example: place a book transfer on hold, then cancel it
///
/// Run with `COLUMN_API_KEY=test_... cargo run --example book_transfer_example -- <sender> <receiver>`.
#[tokio::main]
async fn main() {
    println!("=== Column Book Transfer Example ===\n");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (sender, receiver) = match args.as_slice() {
        [sender, receiver] => (sender.clone(), receiver.clone()),
        _ => {
            eprintln!("usage: book_transfer_example <sender_bank_account_id> <receiver_bank_account_id>");
            return;
        }
    };

    let api_key = std::env::var("COLUMN_API_KEY").unwrap_or_default();
    let client = match ColumnClient::new(api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let req = CreateBookTransferRequest {
        sender_bank_account_id: Some(sender),
        receiver_bank_account_id: Some(receiver),
        description: Some("example hold".to_string()),
        hold: Some(true),
        idempotency_key: Some(new_idempotency_key()),
        ..CreateBookTransferRequest::new(100, "USD")
    };

    let transfer = match client.create_book_transfer(&req).await {
        Ok(transfer) => {
            println!("✓ Transfer {} is {:?}", transfer.id, transfer.status);
            transfer
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    match client.cancel_book_transfer(&transfer.id).await {
        Ok(()) => println!("✓ Hold canceled"),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Book transfer example complete");
}
