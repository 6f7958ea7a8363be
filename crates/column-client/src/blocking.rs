/*
[INPUT]:  Async ColumnClient and a private current-thread runtime
[OUTPUT]: Blocking mirror of every client operation
[POS]:    Sync facade - for callers without an async runtime
[UPDATE]: When an endpoint is added to the async client
*/

//! Blocking wrapper around [`crate::ColumnClient`].
//!
//! Each call drives the async request to completion on a private
//! current-thread runtime. Calling these methods from inside an async
//! runtime panics, as with any nested `block_on`.

use std::future::Future;

use tokio::runtime::{Builder, Runtime};

use crate::http::{ClientConfig, ColumnClient as AsyncClient, Result};
use crate::types::*;

#[derive(Debug)]
pub struct ColumnClient {
    inner: AsyncClient,
    runtime: Runtime,
}

impl ColumnClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let inner = AsyncClient::with_config(api_key, config)?;
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, runtime })
    }

    /// Wrap an existing async client
    pub fn from_async(inner: AsyncClient) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, runtime })
    }

    pub fn environment(&self) -> Environment {
        self.inner.environment()
    }

    pub fn as_async(&self) -> &AsyncClient {
        &self.inner
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    // ### Entities

    pub fn get_entity(&self, entity_id: &str) -> Result<Entity> {
        self.block_on(self.inner.get_entity(entity_id))
    }

    pub fn create_person(&self, req: &PersonEntityRequest) -> Result<PersonEntity> {
        self.block_on(self.inner.create_person(req))
    }

    pub fn update_person(&self, entity_id: &str, req: &PersonEntityRequest) -> Result<PersonEntity> {
        self.block_on(self.inner.update_person(entity_id, req))
    }

    pub fn create_business(&self, req: &BusinessEntityRequest) -> Result<BusinessEntity> {
        self.block_on(self.inner.create_business(req))
    }

    pub fn update_business(
        &self,
        entity_id: &str,
        req: &BusinessEntityRequest,
    ) -> Result<BusinessEntity> {
        self.block_on(self.inner.update_business(entity_id, req))
    }

    pub fn delete_entity(&self, entity_id: &str) -> Result<()> {
        self.block_on(self.inner.delete_entity(entity_id))
    }

    pub fn submit_document(&self, entity_id: &str, req: &DocumentSubmitRequest) -> Result<Entity> {
        self.block_on(self.inner.submit_document(entity_id, req))
    }

    // ### Bank accounts

    pub fn create_bank_account(&self, req: &CreateBankAccountRequest) -> Result<BankAccount> {
        self.block_on(self.inner.create_bank_account(req))
    }

    pub fn list_bank_accounts(
        &self,
        entity_id: &str,
        params: &BankAccountListParams,
    ) -> Result<BankAccountList> {
        self.block_on(self.inner.list_bank_accounts(entity_id, params))
    }

    pub fn get_bank_account(&self, bank_account_id: &str) -> Result<BankAccount> {
        self.block_on(self.inner.get_bank_account(bank_account_id))
    }

    pub fn update_bank_account(
        &self,
        bank_account_id: &str,
        req: &UpdateBankAccountRequest,
    ) -> Result<BankAccount> {
        self.block_on(self.inner.update_bank_account(bank_account_id, req))
    }

    pub fn delete_bank_account(&self, bank_account_id: &str) -> Result<()> {
        self.block_on(self.inner.delete_bank_account(bank_account_id))
    }

    pub fn get_bank_account_summary_history(
        &self,
        bank_account_id: &str,
    ) -> Result<BankAccountSummaryHistory> {
        self.block_on(self.inner.get_bank_account_summary_history(bank_account_id))
    }

    // ### Account numbers

    pub fn create_account_number(
        &self,
        bank_account_id: &str,
        req: &CreateAccountNumberRequest,
    ) -> Result<AccountNumber> {
        self.block_on(self.inner.create_account_number(bank_account_id, req))
    }

    pub fn list_account_numbers(
        &self,
        bank_account_id: &str,
        params: &AccountNumberListParams,
    ) -> Result<AccountNumberList> {
        self.block_on(self.inner.list_account_numbers(bank_account_id, params))
    }

    pub fn get_account_number(&self, account_number_id: &str) -> Result<AccountNumber> {
        self.block_on(self.inner.get_account_number(account_number_id))
    }

    // ### Counterparties and institutions

    pub fn get_counterparty(&self, counterparty_id: &str) -> Result<Counterparty> {
        self.block_on(self.inner.get_counterparty(counterparty_id))
    }

    pub fn list_counterparties(&self, params: &CounterpartyListParams) -> Result<CounterpartyList> {
        self.block_on(self.inner.list_counterparties(params))
    }

    pub fn create_counterparty(&self, req: &CreateCounterpartyRequest) -> Result<Counterparty> {
        self.block_on(self.inner.create_counterparty(req))
    }

    pub fn delete_counterparty(&self, counterparty_id: &str) -> Result<()> {
        self.block_on(self.inner.delete_counterparty(counterparty_id))
    }

    pub fn get_financial_institution(&self, routing_number: &str) -> Result<FinancialInstitution> {
        self.block_on(self.inner.get_financial_institution(routing_number))
    }

    pub fn list_financial_institutions(
        &self,
        params: &FinancialInstitutionListParams,
    ) -> Result<FinancialInstitutionList> {
        self.block_on(self.inner.list_financial_institutions(params))
    }

    pub fn validate_iban(&self, iban: &str) -> Result<IbanValidation> {
        self.block_on(self.inner.validate_iban(iban))
    }

    // ### Transfers

    pub fn create_book_transfer(&self, req: &CreateBookTransferRequest) -> Result<BookTransfer> {
        self.block_on(self.inner.create_book_transfer(req))
    }

    pub fn list_book_transfers(&self, params: &BookTransferListParams) -> Result<BookTransferList> {
        self.block_on(self.inner.list_book_transfers(params))
    }

    pub fn get_book_transfer(&self, book_transfer_id: &str) -> Result<BookTransfer> {
        self.block_on(self.inner.get_book_transfer(book_transfer_id))
    }

    pub fn cancel_book_transfer(&self, book_transfer_id: &str) -> Result<()> {
        self.block_on(self.inner.cancel_book_transfer(book_transfer_id))
    }

    pub fn clear_book_transfer(
        &self,
        book_transfer_id: &str,
        req: &ClearBookTransferRequest,
    ) -> Result<()> {
        self.block_on(self.inner.clear_book_transfer(book_transfer_id, req))
    }
}
