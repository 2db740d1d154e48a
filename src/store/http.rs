//! HTTP implementation of the booking API

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::errors::{HomyError, Result};
use crate::schemas::{
    Booking, BookingId, Config, Customer, CustomerEntry, Service, ServiceId, ServiceUpdate,
    StatusUpdatePayload,
};

use super::api::BookingApi;

const CONNECT_TIMEOUT_SECS: u64 = 10;

const MAX_ERROR_BODY_BYTES: usize = 4 * 1024;

/// Booking API client over `reqwest`
#[derive(Debug, Clone)]
pub struct HttpBookingApi {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBookingApi {
    /// Build a client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(HttpBookingApi {
            client,
            base_url: config.api_base().to_string(),
            token: config.api_token.clone(),
        })
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = check_status(builder.send().await?).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| HomyError::InvalidJson(format!("Unexpected response body: {}", e)))
    }
}

/// Map non-success responses to API errors, keeping a bounded slice of the body.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let mut message = body.trim().to_string();
    if message.len() > MAX_ERROR_BODY_BYTES {
        let mut cut = MAX_ERROR_BODY_BYTES;
        while !message.is_char_boundary(cut) {
            cut -= 1;
        }
        message.truncate(cut);
    }
    if message.is_empty() {
        message = status.canonical_reason().unwrap_or("request failed").to_string();
    }

    tracing::warn!("Backend responded {}: {}", status.as_u16(), message);

    if status == StatusCode::UNAUTHORIZED {
        return Err(HomyError::Unauthorized(message));
    }
    Err(HomyError::Api {
        status: status.as_u16(),
        message,
    })
}

impl BookingApi for HttpBookingApi {
    async fn list_bookings(&self) -> Result<Vec<Booking>> {
        self.send(self.request(Method::GET, "/bookings")).await
    }

    async fn get_booking(&self, id: &BookingId) -> Result<Booking> {
        let builder = self.request(Method::GET, &format!("/bookings/{}", id));
        match self.send(builder).await {
            Err(HomyError::Api { status: 404, .. }) => Err(HomyError::BookingNotFound(id.to_string())),
            other => other,
        }
    }

    async fn update_booking_status(
        &self,
        id: &BookingId,
        payload: &StatusUpdatePayload,
        send_email: bool,
    ) -> Result<Booking> {
        let path = format!("/bookings/{}?sendEmail={}", id, send_email);
        self.send(self.request(Method::PUT, &path).json(payload)).await
    }

    async fn delete_booking(&self, id: &BookingId) -> Result<()> {
        let builder = self.request(Method::DELETE, &format!("/bookings/{}", id));
        check_status(builder.send().await?).await?;
        Ok(())
    }

    async fn list_services(&self) -> Result<Vec<Service>> {
        self.send(self.request(Method::GET, "/services")).await
    }

    async fn create_service(&self, service: &Service) -> Result<Service> {
        self.send(self.request(Method::POST, "/services").json(service)).await
    }

    async fn update_service(&self, id: &ServiceId, update: &ServiceUpdate) -> Result<Service> {
        let builder = self.request(Method::PUT, &format!("/services/{}", id)).json(update);
        match self.send(builder).await {
            Err(HomyError::Api { status: 404, .. }) => Err(HomyError::ServiceNotFound(id.to_string())),
            other => other,
        }
    }

    async fn delete_service(&self, id: &ServiceId) -> Result<()> {
        let builder = self.request(Method::DELETE, &format!("/services/{}", id));
        match check_status(builder.send().await?).await {
            Ok(_) => Ok(()),
            Err(HomyError::Api { status: 404, .. }) => Err(HomyError::ServiceNotFound(id.to_string())),
            Err(e) => Err(e),
        }
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        let entries: Vec<CustomerEntry> = self.send(self.request(Method::GET, "/admin/customers")).await?;
        Ok(entries.into_iter().map(Customer::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::BookingStatus;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer, token: Option<&str>) -> HttpBookingApi {
        let config = Config {
            api_base_url: format!("{}/api/", server.uri()),
            api_token: token.map(str::to_string),
            timeout_seconds: 5,
            ..Config::default()
        };
        HttpBookingApi::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_list_bookings() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/bookings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "name": "Asha", "status": "PENDING", "service": "Sofa Cleaning"},
                {"id": "b-2", "name": "Ravi", "status": "approved"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let bookings = api_for(&server, None).list_bookings().await.unwrap();
        assert_eq!(bookings.len(), 2);
        assert!(bookings[0].has_id("1"));
        assert_eq!(bookings[1].status(), Some(BookingStatus::Approved));
    }

    #[tokio::test]
    async fn test_update_status_sends_payload_and_flag() {
        let server = MockServer::start().await;
        let payload = StatusUpdatePayload {
            cancel_reason: Some("Duplicate".to_string()),
            admin_notes: Some("Duplicate".to_string()),
            ..StatusUpdatePayload::status_only(BookingStatus::Cancelled)
        };

        Mock::given(method("PUT"))
            .and(path("/api/bookings/7"))
            .and(query_param("sendEmail", "false"))
            .and(header("authorization", "Bearer s3cret"))
            .and(body_json(serde_json::json!({
                "status": "CANCELLED",
                "cancelReason": "Duplicate",
                "adminNotes": "Duplicate"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 7, "status": "CANCELLED", "adminNotes": "Duplicate"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server, Some("s3cret"));
        let updated = api
            .update_booking_status(&BookingId::Number(7), &payload, false)
            .await
            .unwrap();
        assert_eq!(updated.status(), Some(BookingStatus::Cancelled));
        assert_eq!(updated.admin_notes.as_deref(), Some("Duplicate"));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/bookings/7"))
            .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
            .mount(&server)
            .await;

        let err = api_for(&server, None)
            .update_booking_status(
                &BookingId::Number(7),
                &StatusUpdatePayload::status_only(BookingStatus::Approved),
                true,
            )
            .await
            .unwrap_err();
        match err {
            HomyError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "database unavailable");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/bookings"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = api_for(&server, Some("expired")).list_bookings().await.unwrap_err();
        assert_eq!(err.code(), "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_get_missing_booking() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/bookings/404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = api_for(&server, None)
            .get_booking(&BookingId::Number(404))
            .await
            .unwrap_err();
        assert!(matches!(err, HomyError::BookingNotFound(id) if id == "404"));
    }

    #[tokio::test]
    async fn test_delete_booking_accepts_empty_body() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/bookings/b-9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        api_for(&server, None)
            .delete_booking(&BookingId::Text("b-9".to_string()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_services() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/services"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "s1", "name": "Sofa Cleaning", "price": 999}
            ])))
            .mount(&server)
            .await;

        let services = api_for(&server, None).list_services().await.unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].name, "Sofa Cleaning");
    }

    #[tokio::test]
    async fn test_create_service_posts_entry() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/services"))
            .and(body_json(serde_json::json!({
                "name": "Sofa Repair",
                "price": 1500.0,
                "isActive": true
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 12, "name": "Sofa Repair", "price": 1500, "isActive": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let new_service = Service {
            name: "Sofa Repair".to_string(),
            price: Some(1500.0),
            is_active: Some(true),
            ..Service::default()
        };
        let created = api_for(&server, None).create_service(&new_service).await.unwrap();
        assert_eq!(created.id, Some(ServiceId::Number(12)));
    }

    #[tokio::test]
    async fn test_update_service_sends_partial_body() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/services/12"))
            .and(body_json(serde_json::json!({"isActive": false})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 12, "name": "Sofa Repair", "isActive": false
            })))
            .expect(1)
            .mount(&server)
            .await;

        let update = ServiceUpdate {
            is_active: Some(false),
            ..ServiceUpdate::default()
        };
        let updated = api_for(&server, None)
            .update_service(&ServiceId::Number(12), &update)
            .await
            .unwrap();
        assert_eq!(updated.is_active, Some(false));
    }

    #[tokio::test]
    async fn test_delete_missing_service() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/services/s9"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let err = api_for(&server, None)
            .delete_service(&ServiceId::Text("s9".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, HomyError::ServiceNotFound(id) if id == "s9"));
    }

    #[tokio::test]
    async fn test_list_customers_unwraps_counts() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/admin/customers"))
            .and(header("authorization", "Bearer s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"customer": {"id": 1, "name": "Asha Rao", "phone": "9876543210"}, "bookingCount": 3},
                {"customer": {"id": 2, "name": "Ravi Kumar", "email": null}, "bookingCount": 0}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let customers = api_for(&server, Some("s3cret")).list_customers().await.unwrap();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].name, "Asha Rao");
        assert_eq!(customers[0].total_bookings, Some(3));
        assert_eq!(customers[1].email, "");
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        let config = Config {
            api_base_url: "http://127.0.0.1:9/api".to_string(),
            timeout_seconds: 2,
            ..Config::default()
        };
        let err = HttpBookingApi::new(&config).unwrap().list_bookings().await.unwrap_err();
        assert_eq!(err.code(), "HTTP_ERROR");
    }
}
