/*
[INPUT]:  Bank account ids, account number ids and pagination
[OUTPUT]: Account numbers and paginated lists
[POS]:    HTTP layer - account number endpoints
[UPDATE]: When adding account number endpoints
*/

use crate::http::{ColumnClient, Result};
use crate::types::{
    AccountNumber, AccountNumberList, AccountNumberListParams, CreateAccountNumberRequest,
};
use reqwest::Method;

impl ColumnClient {
    /// POST /bank-accounts/{bank_account_id}/account-number
    pub async fn create_account_number(
        &self,
        bank_account_id: &str,
        req: &CreateAccountNumberRequest,
    ) -> Result<AccountNumber> {
        let builder = self
            .request(
                Method::POST,
                &["bank-accounts", bank_account_id, "account-number"],
            )?
            .json(req);
        self.send_json(builder).await
    }

    /// GET /bank-accounts/{bank_account_id}/account-numbers
    pub async fn list_account_numbers(
        &self,
        bank_account_id: &str,
        params: &AccountNumberListParams,
    ) -> Result<AccountNumberList> {
        let builder = self
            .request(
                Method::GET,
                &["bank-accounts", bank_account_id, "account-numbers"],
            )?
            .query(&params.to_query());
        self.send_json(builder).await
    }

    /// GET /account-numbers/{account_number_id}
    pub async fn get_account_number(&self, account_number_id: &str) -> Result<AccountNumber> {
        let builder = self.request(Method::GET, &["account-numbers", account_number_id])?;
        self.send_json(builder).await
    }
}
