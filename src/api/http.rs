use super::{ApiError, StorefrontApi};
use crate::config::ApiConfig;
use crate::model::{CreateOrderPayload, OrderRecord, ProductId, ProductRef};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

/// `reqwest`-backed client for the storefront REST API.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
    config: ApiConfig,
}

impl HttpApi {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Other(format!("Invalid base URL {}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Other(format!(
                "Invalid base URL {}: cannot hold a path",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Other(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Joins path segments onto the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Network error");
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(|e| {
                error!(error = %e, "Failed to read response body");
                ApiError::from(e)
            });
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| value.get("message")?.as_str().map(str::to_string));

        let code = status.as_u16();
        match code {
            400 => error!(status = code, ?message, "Bad request"),
            404 => error!(status = code, ?message, "Not found"),
            500 => error!(status = code, ?message, "Server error"),
            _ => error!(status = code, ?message, "Request failed"),
        }

        Err(ApiError::Status {
            status: code,
            message,
        })
    }
}

#[async_trait]
impl StorefrontApi for HttpApi {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<ProductRef>, ApiError> {
        let request = self
            .client
            .get(self.url(&["products"]))
            .query(&[("length", self.config.products_page_size)]);
        let products: Vec<ProductRef> = self.send(request).await?;
        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: ProductId) -> Result<ProductRef, ApiError> {
        let id = id.to_string();
        self.send(self.client.get(self.url(&["products", &id]))).await
    }

    #[instrument(skip(self))]
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, ApiError> {
        let request = self
            .client
            .get(self.url(&["orders"]))
            .query(&[("length", self.config.orders_page_size)]);
        let orders: Vec<OrderRecord> = self.send(request).await?;
        debug!(count = orders.len(), "Fetched orders");
        Ok(orders)
    }

    #[instrument(skip(self))]
    async fn get_order(&self, order_id: &str) -> Result<OrderRecord, ApiError> {
        self.send(self.client.get(self.url(&["orders", order_id])))
            .await
    }

    #[instrument(skip(self, payload), fields(items = payload.items.len(), total = %payload.total_amount))]
    async fn create_order(&self, payload: &CreateOrderPayload) -> Result<OrderRecord, ApiError> {
        debug!(?payload, "create_order called");
        self.send(self.client.post(self.url(&["orders"])).json(payload))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn api(base: &str) -> HttpApi {
        HttpApi::new(ApiConfig::default().with_base_url(base)).unwrap()
    }

    /// Serves one connection: reads the request head, writes `response` verbatim, then keeps
    /// the socket open for `hold` before closing it.
    async fn serve_once(response: String, hold: Duration) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    return;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            tokio::time::sleep(hold).await;
            let _ = socket.shutdown().await;
        });

        addr
    }

    fn reply(status: &str, content_type: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    fn api_at(addr: SocketAddr) -> HttpApi {
        api(&format!("http://{addr}"))
    }

    #[test]
    fn builds_endpoint_urls() {
        let api = api("https://fake.jsonmockapi.com");
        assert_eq!(
            api.url(&["products", "7"]).as_str(),
            "https://fake.jsonmockapi.com/products/7"
        );

        let api = self::api("http://localhost:3000/api/");
        assert_eq!(api.url(&["orders"]).as_str(), "http://localhost:3000/api/orders");
    }

    #[test]
    fn encodes_order_ids() {
        let api = api("http://localhost:3000");
        assert_eq!(
            api.url(&["orders", "ORD 1/2"]).as_str(),
            "http://localhost:3000/orders/ORD%201%2F2"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = HttpApi::new(ApiConfig::default().with_base_url("not a url"));
        assert!(matches!(result, Err(ApiError::Other(_))));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let api = HttpApi::new(
            ApiConfig::default()
                .with_base_url("http://127.0.0.1:9")
                .with_timeout(std::time::Duration::from_secs(2)),
        )
        .unwrap();

        let err = api.list_orders().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
        assert_eq!(
            err.user_message("Failed to fetch orders"),
            "Network error. Please check your connection."
        );
    }

    #[tokio::test]
    async fn bad_request_carries_the_server_message() {
        let addr = serve_once(
            reply(
                "400 Bad Request",
                "application/json",
                r#"{"message":"Email is required"}"#,
            ),
            Duration::ZERO,
        )
        .await;

        let err = api_at(addr).get_order("X").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: Some("Email is required".to_string()),
            }
        );
        assert_eq!(err.user_message("Failed to create order"), "Email is required");
    }

    #[tokio::test]
    async fn not_found_keeps_status_and_message() {
        let addr = serve_once(
            reply(
                "404 Not Found",
                "application/json",
                r#"{"message":"Order not found","code":"E404"}"#,
            ),
            Duration::ZERO,
        )
        .await;

        let err = api_at(addr).get_order("missing").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                message: Some("Order not found".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn non_json_error_body_has_no_message() {
        let addr = serve_once(
            reply("500 Internal Server Error", "text/plain", "upstream exploded"),
            Duration::ZERO,
        )
        .await;

        let err = api_at(addr).list_orders().await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: None,
            }
        );
        assert_eq!(
            err.user_message("Failed to fetch orders"),
            "Request failed with status code 500"
        );
    }

    #[tokio::test]
    async fn success_body_is_decoded() {
        let addr = serve_once(
            reply(
                "200 OK",
                "application/json",
                r#"{"orderId":"X","status":"Shipped","totalAmount":12.5}"#,
            ),
            Duration::ZERO,
        )
        .await;

        let order = api_at(addr).get_order("X").await.unwrap();
        assert_eq!(order.order_id, "X");
        assert_eq!(order.total_amount, rust_decimal_macros::dec!(12.5));
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_decode_error() {
        let addr = serve_once(
            reply("200 OK", "application/json", "{not json"),
            Duration::ZERO,
        )
        .await;

        let err = api_at(addr).list_products().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn stalled_body_is_a_network_error() {
        let head = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 64\r\n\r\n[".to_string();
        let addr = serve_once(head, Duration::from_secs(5)).await;
        let api = HttpApi::new(
            ApiConfig::default()
                .with_base_url(format!("http://{addr}"))
                .with_timeout(Duration::from_millis(300)),
        )
        .unwrap();

        let err = api.list_orders().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
        assert_eq!(
            err.user_message("Failed to fetch orders"),
            "Network error. Please check your connection."
        );
    }
}
