use crate::api::traits::PropertyApi;
use crate::api::types::ApiSettings;
use crate::models::{NewProperty, Property, PropertyPatch, RoomPayload};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use tracing::debug;

/// reqwest-backed client for the imóvel API
#[derive(Debug, Clone)]
pub struct HttpPropertyApi {
    client: Client,
    base_url: String,
}

impl HttpPropertyApi {
    /// Create a client for the API at the default local address
    pub fn new() -> Result<Self> {
        Self::with_settings(&ApiSettings::default())
    }

    /// Create a client with custom connection settings
    pub fn with_settings(settings: &ApiSettings) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    /// Send the request and turn transport failures and non-2xx statuses into errors
    async fn send(request: RequestBuilder, what: &str) -> Result<Response> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to {}", what))?;

        debug!("{} -> {}", what, response.status());

        response
            .error_for_status()
            .with_context(|| format!("API rejected request to {}", what))
    }
}

#[async_trait]
impl PropertyApi for HttpPropertyApi {
    async fn list_properties(&self) -> Result<Vec<Property>> {
        let response = Self::send(self.request(Method::GET, "/imovel"), "list properties").await?;

        let properties: Vec<Property> = response
            .json()
            .await
            .context("Failed to parse property list")?;

        debug!("Fetched {} properties", properties.len());
        Ok(properties)
    }

    async fn create_property(&self, property: &NewProperty) -> Result<()> {
        let request = self.request(Method::POST, "/imovel/create").json(property);
        Self::send(request, "create property").await?;
        Ok(())
    }

    async fn add_room(&self, property_id: i64, room: &RoomPayload) -> Result<()> {
        let path = format!("/imovel/{}/comodo", property_id);
        let request = self.request(Method::POST, &path).json(room);
        Self::send(request, &format!("add room to property {}", property_id)).await?;
        Ok(())
    }

    async fn update_property(&self, id: i64, patch: &PropertyPatch) -> Result<()> {
        let path = format!("/imovel/{}", id);
        let request = self.request(Method::PATCH, &path).json(patch);
        Self::send(request, &format!("update property {}", id)).await?;
        Ok(())
    }

    async fn delete_property(&self, id: i64) -> Result<()> {
        let path = format!("/imovel/{}", id);
        Self::send(
            self.request(Method::DELETE, &path),
            &format!("delete property {}", id),
        )
        .await?;
        Ok(())
    }

    async fn update_room(&self, id: i64, room: &RoomPayload) -> Result<()> {
        let path = format!("/comodo/{}", id);
        let request = self.request(Method::PATCH, &path).json(room);
        Self::send(request, &format!("update room {}", id)).await?;
        Ok(())
    }

    async fn delete_room(&self, id: i64) -> Result<()> {
        let path = format!("/comodo/{}", id);
        Self::send(
            self.request(Method::DELETE, &path),
            &format!("delete room {}", id),
        )
        .await?;
        Ok(())
    }
}
