/*
[INPUT]:  Bank account ids, create/update bodies and list filters
[OUTPUT]: Bank accounts, lists and daily summary history
[POS]:    HTTP layer - bank account endpoints
[UPDATE]: When adding bank account endpoints or filters
*/

use crate::http::{ColumnClient, Result};
use crate::types::{
    BankAccount, BankAccountList, BankAccountListParams, BankAccountSummaryHistory,
    CreateBankAccountRequest, UpdateBankAccountRequest,
};
use reqwest::Method;

impl ColumnClient {
    /// POST /entities/bank-account
    pub async fn create_bank_account(&self, req: &CreateBankAccountRequest) -> Result<BankAccount> {
        let builder = self
            .request(Method::POST, &["entities", "bank-account"])?
            .json(req);
        self.send_json(builder).await
    }

    /// List bank accounts owned by an entity
    ///
    /// GET /entities/{entity_id}/bank-accounts
    pub async fn list_bank_accounts(
        &self,
        entity_id: &str,
        params: &BankAccountListParams,
    ) -> Result<BankAccountList> {
        let builder = self
            .request(Method::GET, &["entities", entity_id, "bank-accounts"])?
            .query(&params.to_query());
        self.send_json(builder).await
    }

    /// GET /entities/bank-account/{bank_account_id}
    pub async fn get_bank_account(&self, bank_account_id: &str) -> Result<BankAccount> {
        let builder = self.request(Method::GET, &["entities", "bank-account", bank_account_id])?;
        self.send_json(builder).await
    }

    /// PUT /entities/bank-account/{bank_account_id}
    pub async fn update_bank_account(
        &self,
        bank_account_id: &str,
        req: &UpdateBankAccountRequest,
    ) -> Result<BankAccount> {
        let builder = self
            .request(Method::PUT, &["entities", "bank-account", bank_account_id])?
            .json(req);
        self.send_json(builder).await
    }

    /// DELETE /entities/bank-account/{bank_account_id}
    pub async fn delete_bank_account(&self, bank_account_id: &str) -> Result<()> {
        let builder =
            self.request(Method::DELETE, &["entities", "bank-account", bank_account_id])?;
        self.send_unit(builder).await
    }

    /// Daily balance summaries for an account
    ///
    /// GET /entities/bank-account/{bank_account_id}/summary-history
    pub async fn get_bank_account_summary_history(
        &self,
        bank_account_id: &str,
    ) -> Result<BankAccountSummaryHistory> {
        let builder = self.request(
            Method::GET,
            &["entities", "bank-account", bank_account_id, "summary-history"],
        )?;
        self.send_json(builder).await
    }
}
