//! Remote GraphQL endpoint client.
//!
//! # Responsibility
//! - Speak the endpoint's query/mutation contract over HTTP JSON.
//! - Surface network, status, parse and endpoint-level failures as one
//!   typed error for the job runner to log.
//!
//! # Invariants
//! - Every call applies a bounded 10 second timeout; a job never blocks the
//!   scheduler indefinitely.
//! - The replenishment response's canonical product id field is `productId`.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Bound applied to every endpoint call.
pub const ENDPOINT_TIMEOUT: Duration = Duration::from_secs(10);

const UPDATE_LOW_STOCK_MUTATION: &str = "mutation {
    updateLowStockProducts {
        products {
            productId
            name
            quantity
        }
        success
        message
    }
}";

const RECENT_ORDERS_QUERY: &str = "query GetRecentOrders($date: String!) {
    orders(orderDate_Gte: $date) {
        id
        orderDate
        customer {
            email
        }
    }
}";

const HELLO_QUERY: &str = "query { hello }";

/// Failure talking to or reported by the remote endpoint.
#[derive(Debug)]
pub enum TransportError {
    /// Network-level failure: unreachable endpoint, timeout, broken stream.
    Http(String),
    /// Non-success HTTP status from the endpoint.
    Status { code: u16, body: String },
    /// Response body did not match the expected shape.
    Parse(String),
    /// The endpoint answered but reported an operation-level error.
    Endpoint(String),
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(message) => write!(f, "http error: {message}"),
            Self::Status { code, body } => write!(f, "endpoint returned status {code}: {body}"),
            Self::Parse(message) => write!(f, "invalid endpoint response: {message}"),
            Self::Endpoint(message) => write!(f, "endpoint error: {message}"),
        }
    }
}

impl Error for TransportError {}

/// One restocked product as reported by the replenishment mutation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RestockedProduct {
    #[serde(rename = "productId")]
    pub product_id: i64,
    pub name: String,
    pub quantity: i64,
}

/// Replenishment mutation response payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RestockResponse {
    #[serde(default)]
    pub products: Vec<RestockedProduct>,
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// One order row from the recent-orders query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecentOrder {
    pub id: i64,
    #[serde(rename = "orderDate")]
    pub order_date: String,
    pub customer: OrderCustomer,
}

/// Nested customer projection of the recent-orders query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderCustomer {
    pub email: String,
}

/// Query/mutation surface the scheduled jobs depend on.
///
/// Job procedures take this as a parameter so tests can substitute a fake
/// endpoint without a network.
pub trait RemoteEndpoint {
    /// Triggers the replenishment mutation.
    fn update_low_stock(&self) -> Result<RestockResponse, TransportError>;
    /// Queries orders with `orderDate >= since`.
    fn recent_orders(&self, since: NaiveDate) -> Result<Vec<RecentOrder>, TransportError>;
    /// Cheap liveness probe.
    fn hello(&self) -> Result<String, TransportError>;
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct UpdateLowStockData {
    #[serde(rename = "updateLowStockProducts")]
    update_low_stock_products: RestockResponse,
}

#[derive(Debug, Deserialize)]
struct OrdersData {
    #[serde(default)]
    orders: Vec<RecentOrder>,
}

#[derive(Debug, Deserialize)]
struct HelloData {
    hello: String,
}

/// HTTP implementation of [`RemoteEndpoint`].
pub struct HttpEndpoint {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpEndpoint {
    /// Builds a client for `url` with the bounded endpoint timeout.
    pub fn new(url: impl Into<String>) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(ENDPOINT_TIMEOUT)
            .build()
            .map_err(|err| TransportError::Http(err.to_string()))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, TransportError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .map_err(|err| TransportError::Http(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TransportError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let envelope: GraphQlResponse<T> = response
            .json()
            .map_err(|err| TransportError::Parse(err.to_string()))?;

        if let Some(error) = envelope.errors.first() {
            return Err(TransportError::Endpoint(error.message.clone()));
        }

        envelope
            .data
            .ok_or_else(|| TransportError::Endpoint("response carried no data".to_string()))
    }
}

impl RemoteEndpoint for HttpEndpoint {
    fn update_low_stock(&self) -> Result<RestockResponse, TransportError> {
        let data: UpdateLowStockData =
            self.execute(UPDATE_LOW_STOCK_MUTATION, serde_json::json!({}))?;
        Ok(data.update_low_stock_products)
    }

    fn recent_orders(&self, since: NaiveDate) -> Result<Vec<RecentOrder>, TransportError> {
        let variables = serde_json::json!({
            "date": since.format("%Y-%m-%d").to_string(),
        });
        let data: OrdersData = self.execute(RECENT_ORDERS_QUERY, variables)?;
        Ok(data.orders)
    }

    fn hello(&self) -> Result<String, TransportError> {
        let data: HelloData = self.execute(HELLO_QUERY, serde_json::json!({}))?;
        Ok(data.hello)
    }
}
