/*
[INPUT]:  Parsed subcommands and a configured ColumnClient
[OUTPUT]: JSON values describing each API result
[POS]:    Command layer - maps CLI subcommands onto client calls
[UPDATE]: When client endpoints or CLI flags change
*/

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use column_client::{
    AccountNumberListParams, BankAccountListParams, BankAccountType, BookTransferListParams,
    ClearBookTransferRequest, ColumnClient, CounterpartyListParams, CreateAccountNumberRequest,
    CreateBookTransferRequest, CreatedFilter, FinancialInstitutionListParams, Pagination,
    RoutingNumberType, TransferStatus, new_idempotency_key,
};
use serde::Serialize;
use serde_json::{Value, json};
use std::path::PathBuf;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a template configuration file
    Init {
        #[arg(long, value_name = "PATH", default_value = "column.yaml")]
        output: PathBuf,
    },
    #[command(subcommand)]
    Entity(EntityCommand),
    #[command(subcommand)]
    BankAccount(BankAccountCommand),
    #[command(subcommand)]
    AccountNumber(AccountNumberCommand),
    #[command(subcommand)]
    Counterparty(CounterpartyCommand),
    #[command(subcommand)]
    Institution(InstitutionCommand),
    #[command(subcommand)]
    Iban(IbanCommand),
    #[command(subcommand)]
    Transfer(TransferCommand),
}

#[derive(Subcommand, Debug)]
pub enum EntityCommand {
    Get { entity_id: String },
    Delete { entity_id: String },
}

#[derive(Subcommand, Debug)]
pub enum BankAccountCommand {
    Get {
        bank_account_id: String,
    },
    List {
        #[arg(long = "entity")]
        entity_id: String,
        #[arg(long = "type")]
        account_type: Option<BankAccountType>,
        #[arg(long)]
        overdraftable: Option<bool>,
        #[command(flatten)]
        created: CreatedArgs,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Daily balance summaries
    History {
        bank_account_id: String,
    },
    Delete {
        bank_account_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AccountNumberCommand {
    Get {
        account_number_id: String,
    },
    List {
        bank_account_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Create {
        bank_account_id: String,
        #[arg(long)]
        description: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CounterpartyCommand {
    Get {
        counterparty_id: String,
    },
    List {
        #[arg(long)]
        account_number: Option<String>,
        #[arg(long)]
        routing_number: Option<String>,
        #[command(flatten)]
        created: CreatedArgs,
        #[command(flatten)]
        page: PageArgs,
    },
    Delete {
        counterparty_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum InstitutionCommand {
    Get {
        routing_number: String,
    },
    List {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        country_code: Option<String>,
        #[arg(long)]
        routing_number_type: Option<RoutingNumberType>,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum IbanCommand {
    Validate { iban: String },
}

#[derive(Subcommand, Debug)]
pub enum TransferCommand {
    Get {
        book_transfer_id: String,
    },
    List {
        #[arg(long)]
        sender_bank_account_id: Option<String>,
        #[arg(long)]
        receiver_bank_account_id: Option<String>,
        #[arg(long)]
        status: Option<TransferStatus>,
        #[command(flatten)]
        created: CreatedArgs,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Create a book transfer between two accounts on the platform
    Create(CreateTransferArgs),
    /// Cancel a transfer in HOLD state
    Cancel {
        book_transfer_id: String,
    },
    /// Clear a transfer in HOLD state, fully or by amount
    Clear {
        book_transfer_id: String,
        #[arg(long)]
        amount: Option<i64>,
    },
}

#[derive(Args, Debug)]
pub struct CreateTransferArgs {
    /// Amount in cents
    #[arg(long)]
    pub amount: i64,
    #[arg(long, default_value = "USD")]
    pub currency: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub sender_bank_account_id: Option<String>,
    #[arg(long)]
    pub sender_account_number_id: Option<String>,
    #[arg(long)]
    pub receiver_bank_account_id: Option<String>,
    #[arg(long)]
    pub receiver_account_number_id: Option<String>,
    #[arg(long)]
    pub allow_overdraft: bool,
    #[arg(long)]
    pub hold: bool,
    /// Generated when omitted
    #[arg(long)]
    pub idempotency_key: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct PageArgs {
    #[arg(long)]
    pub limit: Option<u32>,
    #[arg(long)]
    pub starting_after: Option<String>,
    #[arg(long)]
    pub ending_before: Option<String>,
}

impl PageArgs {
    fn to_pagination(&self) -> Pagination {
        Pagination {
            limit: self.limit,
            starting_after: self.starting_after.clone(),
            ending_before: self.ending_before.clone(),
        }
    }
}

/// RFC 3339 bounds on the `created` timestamp
#[derive(Args, Debug, Default)]
pub struct CreatedArgs {
    #[arg(long)]
    pub created_gt: Option<DateTime<Utc>>,
    #[arg(long)]
    pub created_lt: Option<DateTime<Utc>>,
    #[arg(long)]
    pub created_gte: Option<DateTime<Utc>>,
    #[arg(long)]
    pub created_lte: Option<DateTime<Utc>>,
}

impl CreatedArgs {
    fn to_filter(&self) -> CreatedFilter {
        CreatedFilter {
            gt: self.created_gt,
            lt: self.created_lt,
            gte: self.created_gte,
            lte: self.created_lte,
        }
    }
}

impl CreateTransferArgs {
    pub fn to_request(&self) -> CreateBookTransferRequest {
        CreateBookTransferRequest {
            amount: self.amount,
            currency_code: self.currency.clone(),
            description: self.description.clone(),
            sender_bank_account_id: self.sender_bank_account_id.clone(),
            sender_account_number_id: self.sender_account_number_id.clone(),
            receiver_bank_account_id: self.receiver_bank_account_id.clone(),
            receiver_account_number_id: self.receiver_account_number_id.clone(),
            allow_overdraft: self.allow_overdraft.then_some(true),
            hold: self.hold.then_some(true),
            details: None,
            idempotency_key: Some(
                self.idempotency_key
                    .clone()
                    .unwrap_or_else(new_idempotency_key),
            ),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).context("serialize response")
}

fn ok() -> Value {
    json!({ "ok": true })
}

/// Run one API command. `Init` is handled by the caller since it needs no client.
pub async fn execute(client: &ColumnClient, command: Command) -> Result<Value> {
    match command {
        Command::Init { .. } => anyhow::bail!("init does not call the API"),
        Command::Entity(cmd) => entity(client, cmd).await,
        Command::BankAccount(cmd) => bank_account(client, cmd).await,
        Command::AccountNumber(cmd) => account_number(client, cmd).await,
        Command::Counterparty(cmd) => counterparty(client, cmd).await,
        Command::Institution(cmd) => institution(client, cmd).await,
        Command::Iban(IbanCommand::Validate { iban }) => {
            to_json(&client.validate_iban(&iban).await.context("validate iban")?)
        }
        Command::Transfer(cmd) => transfer(client, cmd).await,
    }
}

async fn entity(client: &ColumnClient, cmd: EntityCommand) -> Result<Value> {
    match cmd {
        EntityCommand::Get { entity_id } => {
            to_json(&client.get_entity(&entity_id).await.context("get entity")?)
        }
        EntityCommand::Delete { entity_id } => {
            client.delete_entity(&entity_id).await.context("delete entity")?;
            info!(%entity_id, "entity deleted");
            Ok(ok())
        }
    }
}

async fn bank_account(client: &ColumnClient, cmd: BankAccountCommand) -> Result<Value> {
    match cmd {
        BankAccountCommand::Get { bank_account_id } => to_json(
            &client
                .get_bank_account(&bank_account_id)
                .await
                .context("get bank account")?,
        ),
        BankAccountCommand::List {
            entity_id,
            account_type,
            overdraftable,
            created,
            page,
        } => {
            let params = BankAccountListParams {
                is_overdraftable: overdraftable,
                account_type,
                overdraft_reserve_account_id: None,
                created: created.to_filter(),
                page: page.to_pagination(),
            };
            to_json(
                &client
                    .list_bank_accounts(&entity_id, &params)
                    .await
                    .context("list bank accounts")?,
            )
        }
        BankAccountCommand::History { bank_account_id } => to_json(
            &client
                .get_bank_account_summary_history(&bank_account_id)
                .await
                .context("get summary history")?,
        ),
        BankAccountCommand::Delete { bank_account_id } => {
            client
                .delete_bank_account(&bank_account_id)
                .await
                .context("delete bank account")?;
            info!(%bank_account_id, "bank account deleted");
            Ok(ok())
        }
    }
}

async fn account_number(client: &ColumnClient, cmd: AccountNumberCommand) -> Result<Value> {
    match cmd {
        AccountNumberCommand::Get { account_number_id } => to_json(
            &client
                .get_account_number(&account_number_id)
                .await
                .context("get account number")?,
        ),
        AccountNumberCommand::List {
            bank_account_id,
            page,
        } => {
            let params = AccountNumberListParams {
                page: page.to_pagination(),
            };
            to_json(
                &client
                    .list_account_numbers(&bank_account_id, &params)
                    .await
                    .context("list account numbers")?,
            )
        }
        AccountNumberCommand::Create {
            bank_account_id,
            description,
        } => {
            let req = CreateAccountNumberRequest { description };
            to_json(
                &client
                    .create_account_number(&bank_account_id, &req)
                    .await
                    .context("create account number")?,
            )
        }
    }
}

async fn counterparty(client: &ColumnClient, cmd: CounterpartyCommand) -> Result<Value> {
    match cmd {
        CounterpartyCommand::Get { counterparty_id } => to_json(
            &client
                .get_counterparty(&counterparty_id)
                .await
                .context("get counterparty")?,
        ),
        CounterpartyCommand::List {
            account_number,
            routing_number,
            created,
            page,
        } => {
            let params = CounterpartyListParams {
                account_number,
                routing_number,
                created: created.to_filter(),
                page: page.to_pagination(),
            };
            to_json(
                &client
                    .list_counterparties(&params)
                    .await
                    .context("list counterparties")?,
            )
        }
        CounterpartyCommand::Delete { counterparty_id } => {
            client
                .delete_counterparty(&counterparty_id)
                .await
                .context("delete counterparty")?;
            info!(%counterparty_id, "counterparty deleted");
            Ok(ok())
        }
    }
}

async fn institution(client: &ColumnClient, cmd: InstitutionCommand) -> Result<Value> {
    match cmd {
        InstitutionCommand::Get { routing_number } => to_json(
            &client
                .get_financial_institution(&routing_number)
                .await
                .context("get financial institution")?,
        ),
        InstitutionCommand::List {
            name,
            country_code,
            routing_number_type,
            page,
        } => {
            let params = FinancialInstitutionListParams {
                country_code,
                name,
                routing_number_type,
                page: page.to_pagination(),
            };
            to_json(
                &client
                    .list_financial_institutions(&params)
                    .await
                    .context("list financial institutions")?,
            )
        }
    }
}

async fn transfer(client: &ColumnClient, cmd: TransferCommand) -> Result<Value> {
    match cmd {
        TransferCommand::Get { book_transfer_id } => to_json(
            &client
                .get_book_transfer(&book_transfer_id)
                .await
                .context("get book transfer")?,
        ),
        TransferCommand::List {
            sender_bank_account_id,
            receiver_bank_account_id,
            status,
            created,
            page,
        } => {
            let params = BookTransferListParams {
                sender_bank_account_id,
                receiver_bank_account_id,
                status,
                created: created.to_filter(),
                page: page.to_pagination(),
            };
            to_json(
                &client
                    .list_book_transfers(&params)
                    .await
                    .context("list book transfers")?,
            )
        }
        TransferCommand::Create(args) => {
            let req = args.to_request();
            info!(
                amount = req.amount,
                currency = %req.currency_code,
                idempotency_key = req.idempotency_key.as_deref().unwrap_or_default(),
                "creating book transfer"
            );
            to_json(
                &client
                    .create_book_transfer(&req)
                    .await
                    .context("create book transfer")?,
            )
        }
        TransferCommand::Cancel { book_transfer_id } => {
            client
                .cancel_book_transfer(&book_transfer_id)
                .await
                .context("cancel book transfer")?;
            info!(%book_transfer_id, "hold canceled");
            Ok(ok())
        }
        TransferCommand::Clear {
            book_transfer_id,
            amount,
        } => {
            client
                .clear_book_transfer(&book_transfer_id, &ClearBookTransferRequest { amount })
                .await
                .context("clear book transfer")?;
            info!(%book_transfer_id, ?amount, "hold cleared");
            Ok(ok())
        }
    }
}
