/*
[INPUT]:  Person/business request bodies and entity ids
[OUTPUT]: Person, business and type-dispatched entity results
[POS]:    HTTP layer - entity endpoints
[UPDATE]: When adding entity endpoints or new entity kinds
*/

use crate::http::{ColumnClient, ColumnError, Result};
use crate::types::{
    BusinessEntity, BusinessEntityRequest, DocumentSubmitRequest, Entity, PersonEntity,
    PersonEntityRequest,
};
use reqwest::Method;
use serde_json::Value;

/// Pick the entity variant from the body's `type` field
pub(crate) fn parse_entity(value: Value) -> Result<Entity> {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    match kind.as_str() {
        "PERSON" => Ok(Entity::Person(serde_json::from_value(value)?)),
        "BUSINESS" => Ok(Entity::Business(serde_json::from_value(value)?)),
        _ => Err(ColumnError::UnknownEntityType(kind)),
    }
}

impl ColumnClient {
    /// Get a person or business entity
    ///
    /// GET /entities/{entity_id}
    pub async fn get_entity(&self, entity_id: &str) -> Result<Entity> {
        let builder = self.request(Method::GET, &["entities", entity_id])?;
        parse_entity(self.send_value(builder).await?)
    }

    /// POST /entities/person
    pub async fn create_person(&self, req: &PersonEntityRequest) -> Result<PersonEntity> {
        req.validate().map_err(ColumnError::InvalidRequest)?;
        let builder = self.request(Method::POST, &["entities", "person"])?.json(req);
        self.send_json(builder).await
    }

    /// PUT /entities/person/{entity_id}
    pub async fn update_person(
        &self,
        entity_id: &str,
        req: &PersonEntityRequest,
    ) -> Result<PersonEntity> {
        req.validate().map_err(ColumnError::InvalidRequest)?;
        let builder = self
            .request(Method::PUT, &["entities", "person", entity_id])?
            .json(req);
        self.send_json(builder).await
    }

    /// POST /entities/business
    pub async fn create_business(&self, req: &BusinessEntityRequest) -> Result<BusinessEntity> {
        let builder = self.request(Method::POST, &["entities", "business"])?.json(req);
        self.send_json(builder).await
    }

    /// PUT /entities/business/{entity_id}
    pub async fn update_business(
        &self,
        entity_id: &str,
        req: &BusinessEntityRequest,
    ) -> Result<BusinessEntity> {
        let builder = self
            .request(Method::PUT, &["entities", "business", entity_id])?
            .json(req);
        self.send_json(builder).await
    }

    /// DELETE /entities/{entity_id}
    pub async fn delete_entity(&self, entity_id: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, &["entities", entity_id])?;
        self.send_unit(builder).await
    }

    /// Attach a document to an entity; returns the updated entity
    ///
    /// POST /entities/{entity_id}/documents
    pub async fn submit_document(
        &self,
        entity_id: &str,
        req: &DocumentSubmitRequest,
    ) -> Result<Entity> {
        let builder = self
            .request(Method::POST, &["entities", entity_id, "documents"])?
            .json(req);
        parse_entity(self.send_value(builder).await?)
    }
}
