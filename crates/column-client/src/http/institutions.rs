/*
[INPUT]:  Routing numbers, institution filters and IBANs
[OUTPUT]: Financial institution records and IBAN validation results
[POS]:    HTTP layer - reference data endpoints
[UPDATE]: When adding lookup endpoints
*/

use crate::http::{ColumnClient, Result};
use crate::types::{
    FinancialInstitution, FinancialInstitutionList, FinancialInstitutionListParams, IbanValidation,
};
use reqwest::Method;

impl ColumnClient {
    /// Look up an institution by ABA routing number or BIC
    ///
    /// GET /institutions/{routing_number}
    pub async fn get_financial_institution(
        &self,
        routing_number: &str,
    ) -> Result<FinancialInstitution> {
        let builder = self.request(Method::GET, &["institutions", routing_number])?;
        self.send_json(builder).await
    }

    /// GET /institutions
    pub async fn list_financial_institutions(
        &self,
        params: &FinancialInstitutionListParams,
    ) -> Result<FinancialInstitutionList> {
        let builder = self
            .request(Method::GET, &["institutions"])?
            .query(&params.to_query());
        self.send_json(builder).await
    }

    /// GET /iban/{iban}
    pub async fn validate_iban(&self, iban: &str) -> Result<IbanValidation> {
        let builder = self.request(Method::GET, &["iban", iban])?;
        self.send_json(builder).await
    }
}
