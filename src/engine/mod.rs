//! Resource retrieval engine
//!
//! Fetches SFG resources one by one or as ranged listings, and partners
//! from SFG and PEM.
//!
//! # Overview
//!
//! The engine module provides:
//! - `Importer` - Issues the GET calls for one configuration
//! - `ResourceList` - Pages of a listing in fetch order
//!
//! Calls are strictly sequential: each page is requested only after the
//! previous one arrived. Nothing is retried.

mod types;

pub use types::ResourceList;

use crate::auth::EnvironmentCredentials;
use crate::config::Configuration;
use crate::decode::describe_error;
use crate::environment::{resolve, resolve_pem, SfgEnvironment};
use crate::error::{Error, Result};
use crate::http::{HttpClient, ResourceClient};
use crate::pagination::{total_record_count, PageCursor, PAGE_SIZE};
use crate::types::{ApiResponse, MediaType, PEM_PARTNER_REST_URI, SFG_PARTNER_REST_URI};
use reqwest::header::HeaderMap;
use tracing::{debug, info};

/// Fetches resources for one configuration
pub struct Importer<'a, C = HttpClient> {
    client: C,
    config: &'a Configuration,
}

impl<'a> Importer<'a, HttpClient> {
    /// Create an importer with an HTTP client built from the configuration
    pub fn from_config(config: &'a Configuration) -> Result<Self> {
        let client = HttpClient::from_settings(&config.http)?;
        Ok(Self::new(client, config))
    }
}

impl<'a, C: ResourceClient> Importer<'a, C> {
    /// Create an importer over any transport
    pub fn new(client: C, config: &'a Configuration) -> Self {
        Self { client, config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Configuration {
        self.config
    }

    /// Fetch one resource by key
    ///
    /// Requests `base_url + resource_uri + resource_key` as XML. Any status
    /// other than `200` fails with [`Error::Import`]; the body of a
    /// successful response is not inspected.
    pub async fn fetch_resource(
        &self,
        env: SfgEnvironment,
        resource_uri: &str,
        resource_key: &str,
    ) -> Result<ApiResponse> {
        let credentials = resolve(env, self.config);
        let url = format!("{}{}{}", credentials.base_url(), resource_uri, resource_key);
        let headers = MediaType::Xml.accept_headers();

        let response = self.call(&url, &headers, &credentials).await?;
        ensure_success(response)
    }

    /// Fetch every page of a listing
    ///
    /// The first, unranged call announces the total in `Content-Range`;
    /// ranged calls follow until the total is covered. Any failing page
    /// aborts the listing and the pages collected so far are dropped.
    pub async fn fetch_resource_list(
        &self,
        env: SfgEnvironment,
        resource_uri: &str,
    ) -> Result<ResourceList> {
        let credentials = resolve(env, self.config);
        let url = format!("{}{}", credentials.base_url(), resource_uri);
        let headers = MediaType::Json.accept_headers();

        let first = ensure_success(self.call(&url, &headers, &credentials).await?)?;
        let mut cursor = PageCursor::new(total_record_count(first.headers())?, PAGE_SIZE);
        let mut pages = vec![first];

        while let Some(range) = cursor.next_range() {
            let ranged_url = range.apply_to(&url);
            info!("Calling {ranged_url}");
            let page = ensure_success(self.call(&ranged_url, &headers, &credentials).await?)?;
            debug!("Done calling {ranged_url}");

            pages.push(page);
            cursor.advance();
        }

        info!(
            "Fetched {} page(s) of {} from {} SFG ({} records announced)",
            pages.len(),
            resource_uri,
            env,
            cursor.total_records()
        );
        Ok(ResourceList::new(pages))
    }

    /// Fetch an SFG trading partner
    ///
    /// The response is returned whatever its status.
    pub async fn fetch_sfg_partner(
        &self,
        env: SfgEnvironment,
        partner_key: &str,
    ) -> Result<ApiResponse> {
        let credentials = resolve(env, self.config);
        let url = format!(
            "{}{}{}",
            credentials.base_url(),
            SFG_PARTNER_REST_URI,
            partner_key
        );
        self.call(&url, &MediaType::Xml.accept_headers(), &credentials)
            .await
    }

    /// Fetch a partner from PEM
    ///
    /// The response is returned whatever its status.
    pub async fn fetch_pem_partner(&self, partner_key: &str) -> Result<ApiResponse> {
        let credentials = resolve_pem(self.config);
        let url = format!(
            "{}{}{}/",
            credentials.base_url(),
            PEM_PARTNER_REST_URI,
            partner_key
        );
        self.call(&url, &MediaType::Xml.accept_headers(), &credentials)
            .await
    }

    async fn call(
        &self,
        url: &str,
        headers: &HeaderMap,
        credentials: &EnvironmentCredentials,
    ) -> Result<ApiResponse> {
        info!("Running API: GET {url}");
        let response = self.client.get(url, headers, credentials).await?;
        info!("Response: {}", response.status_code());
        debug!("Response body: {}", response.body());
        Ok(response)
    }
}

/// Pass a `200` through, turn anything else into a normalized import error
fn ensure_success(response: ApiResponse) -> Result<ApiResponse> {
    if response.is_success() {
        return Ok(response);
    }

    let body_is_present = !response.body().is_empty();
    let text = if body_is_present {
        response.body()
    } else {
        response.status_line()
    };

    Err(Error::import(describe_error(text, body_is_present)))
}
