use crate::models::{NewProperty, Property, PropertyPatch, RoomPayload};
use anyhow::Result;
use async_trait::async_trait;

/// The remote imóvel API as the view consumes it.
///
/// Mutations return nothing: the created or updated entity in the response
/// body is ignored, the view reloads the full list instead.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait PropertyApi: Send + Sync {
    /// `GET /imovel`, every property with its rooms nested
    async fn list_properties(&self) -> Result<Vec<Property>>;

    /// `POST /imovel/create`
    async fn create_property(&self, property: &NewProperty) -> Result<()>;

    /// `POST /imovel/{property_id}/comodo`
    async fn add_room(&self, property_id: i64, room: &RoomPayload) -> Result<()>;

    /// `PATCH /imovel/{id}`
    async fn update_property(&self, id: i64, patch: &PropertyPatch) -> Result<()>;

    /// `DELETE /imovel/{id}`
    async fn delete_property(&self, id: i64) -> Result<()>;

    /// `PATCH /comodo/{id}`
    async fn update_room(&self, id: i64, room: &RoomPayload) -> Result<()>;

    /// `DELETE /comodo/{id}`
    async fn delete_room(&self, id: i64) -> Result<()>;
}
