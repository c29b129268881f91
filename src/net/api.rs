//! Generic JSON-over-HTTP helper.
//!
//! Requests go to `AppConfig::api_base_url` + endpoint, with optional query
//! parameters and extra headers. A non-2xx response becomes
//! [`ApiError::Status`]; there is no retry.

use gloo_net::http::{Method, RequestBuilder};
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::AppConfig;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Failures surfaced to callers of [`ApiClient`].
#[derive(Debug, Error)]
pub enum ApiError {
	/// The server answered with a non-success status.
	#[error("HTTP error! status: {0}")]
	Status(u16),
	/// The request never got a response.
	#[error("network error: {0}")]
	Network(String),
	/// The request body could not be serialized.
	#[error("request body could not be encoded: {0}")]
	Encode(#[from] serde_json::Error),
	/// The response body was not the expected JSON.
	#[error("response body could not be decoded: {0}")]
	Decode(String),
}

/// Per-request extras.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
	/// Appended to the URL as a query string, in order.
	pub params: Vec<(String, String)>,
	/// Sent after the default `Content-Type`, which they may override.
	pub headers: Vec<(String, String)>,
}

impl RequestOptions {
	/// Adds a query parameter.
	pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.push((key.into(), value.into()));
		self
	}

	/// Adds a header.
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}
}

/// Joins a base URL and an endpoint with exactly one slash between them.
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
	if endpoint.is_empty() {
		return base_url.to_owned();
	}
	format!(
		"{}/{}",
		base_url.trim_end_matches('/'),
		endpoint.trim_start_matches('/')
	)
}

/// Client bound to one base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
	base_url: String,
}

impl ApiClient {
	/// A client for `base_url`.
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
		}
	}

	/// A client for the configured API.
	pub fn from_config(config: &AppConfig) -> Self {
		Self::new(config.api_base_url.clone())
	}

	/// Full URL of `endpoint`, without query parameters.
	pub fn url(&self, endpoint: &str) -> String {
		endpoint_url(&self.base_url, endpoint)
	}

	/// `GET endpoint`.
	pub async fn get<T: DeserializeOwned>(
		&self,
		endpoint: &str,
		options: RequestOptions,
	) -> Result<T, ApiError> {
		self.request(Method::GET, endpoint, None, options).await
	}

	/// `POST endpoint` with a JSON body.
	pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
		&self,
		endpoint: &str,
		body: &B,
		options: RequestOptions,
	) -> Result<T, ApiError> {
		let body = serde_json::to_string(body)?;
		self.request(Method::POST, endpoint, Some(body), options).await
	}

	/// `PUT endpoint` with a JSON body.
	pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
		&self,
		endpoint: &str,
		body: &B,
		options: RequestOptions,
	) -> Result<T, ApiError> {
		let body = serde_json::to_string(body)?;
		self.request(Method::PUT, endpoint, Some(body), options).await
	}

	/// `DELETE endpoint`.
	pub async fn delete<T: DeserializeOwned>(
		&self,
		endpoint: &str,
		options: RequestOptions,
	) -> Result<T, ApiError> {
		self.request(Method::DELETE, endpoint, None, options).await
	}

	async fn request<T: DeserializeOwned>(
		&self,
		method: Method,
		endpoint: &str,
		body: Option<String>,
		options: RequestOptions,
	) -> Result<T, ApiError> {
		let url = self.url(endpoint);
		let mut builder = RequestBuilder::new(&url)
			.method(method)
			.header("Content-Type", "application/json");
		if !options.params.is_empty() {
			builder = builder.query(options.params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
		}
		for (name, value) in &options.headers {
			builder = builder.header(name, value);
		}
		let request = match body {
			Some(body) => builder.body(body),
			None => builder.build(),
		}
		.map_err(|e| ApiError::Network(e.to_string()))?;

		let resp = request
			.send()
			.await
			.map_err(|e| ApiError::Network(e.to_string()))?;
		if !resp.ok() {
			warn!("{url} answered {}", resp.status());
			return Err(ApiError::Status(resp.status()));
		}
		resp.json::<T>()
			.await
			.map_err(|e| ApiError::Decode(e.to_string()))
	}
}
