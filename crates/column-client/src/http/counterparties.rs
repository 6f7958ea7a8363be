/*
[INPUT]:  Counterparty ids, create bodies and list filters
[OUTPUT]: Counterparties and paginated lists
[POS]:    HTTP layer - counterparty endpoints
[UPDATE]: When adding counterparty endpoints or filters
*/

use crate::http::{ColumnClient, Result};
use crate::types::{
    Counterparty, CounterpartyList, CounterpartyListParams, CreateCounterpartyRequest,
};
use reqwest::Method;

impl ColumnClient {
    /// GET /counterparties/{counterparty_id}
    pub async fn get_counterparty(&self, counterparty_id: &str) -> Result<Counterparty> {
        let builder = self.request(Method::GET, &["counterparties", counterparty_id])?;
        self.send_json(builder).await
    }

    /// GET /counterparties
    pub async fn list_counterparties(
        &self,
        params: &CounterpartyListParams,
    ) -> Result<CounterpartyList> {
        let builder = self
            .request(Method::GET, &["counterparties"])?
            .query(&params.to_query());
        self.send_json(builder).await
    }

    /// POST /counterparties
    pub async fn create_counterparty(
        &self,
        req: &CreateCounterpartyRequest,
    ) -> Result<Counterparty> {
        let builder = self.request(Method::POST, &["counterparties"])?.json(req);
        self.send_json(builder).await
    }

    /// DELETE /counterparties/{counterparty_id}
    pub async fn delete_counterparty(&self, counterparty_id: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, &["counterparties", counterparty_id])?;
        self.send_unit(builder).await
    }
}
