/*
[INPUT]:  Book transfer bodies, transfer ids, list filters, idempotency keys
[OUTPUT]: Book transfers, paginated lists, hold cancel/clear confirmation
[POS]:    HTTP layer - book transfer endpoints
[UPDATE]: When adding transfer kinds or hold operations
[UPDATE]: Idempotency-Key header sent on create when the request carries one
*/

use crate::http::{ColumnClient, ColumnError, IDEMPOTENCY_HEADER, Result};
use crate::types::{
    BookTransfer, BookTransferList, BookTransferListParams, ClearBookTransferRequest,
    CreateBookTransferRequest,
};
use reqwest::Method;

impl ColumnClient {
    /// Move funds between two accounts on the platform
    ///
    /// POST /transfers/book
    pub async fn create_book_transfer(&self, req: &CreateBookTransferRequest) -> Result<BookTransfer> {
        req.validate().map_err(ColumnError::InvalidRequest)?;
        let mut builder = self.request(Method::POST, &["transfers", "book"])?.json(req);
        if let Some(key) = &req.idempotency_key {
            builder = builder.header(IDEMPOTENCY_HEADER, key);
        }
        self.send_json(builder).await
    }

    /// GET /transfers/book
    pub async fn list_book_transfers(
        &self,
        params: &BookTransferListParams,
    ) -> Result<BookTransferList> {
        let builder = self
            .request(Method::GET, &["transfers", "book"])?
            .query(&params.to_query());
        self.send_json(builder).await
    }

    /// GET /transfers/book/{book_transfer_id}
    pub async fn get_book_transfer(&self, book_transfer_id: &str) -> Result<BookTransfer> {
        let builder = self.request(Method::GET, &["transfers", "book", book_transfer_id])?;
        self.send_json(builder).await
    }

    /// Cancel a transfer in HOLD state
    ///
    /// POST /transfers/book/{book_transfer_id}/cancel
    pub async fn cancel_book_transfer(&self, book_transfer_id: &str) -> Result<()> {
        let builder = self.request(
            Method::POST,
            &["transfers", "book", book_transfer_id, "cancel"],
        )?;
        self.send_unit(builder).await
    }

    /// Clear a transfer in HOLD state.
    ///
    /// With an amount, exactly that amount clears regardless of the hold's
    /// size; without one the entire hold clears.
    ///
    /// POST /transfers/book/{book_transfer_id}/clear
    pub async fn clear_book_transfer(
        &self,
        book_transfer_id: &str,
        req: &ClearBookTransferRequest,
    ) -> Result<()> {
        if let Some(amount) = req.amount {
            if amount <= 0 {
                return Err(ColumnError::InvalidRequest(format!(
                    "clear amount must be positive, got {amount}"
                )));
            }
        }
        let builder = self
            .request(
                Method::POST,
                &["transfers", "book", book_transfer_id, "clear"],
            )?
            .json(req);
        self.send_unit(builder).await
    }
}
