use async_trait::async_trait;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, ACCEPT},
    Method, RequestBuilder, Response,
};
use tracing::{debug, error, instrument};

use shared_config::AppConfig;
use shared_models::{AppError, BookingRequest, BookingResponse, SlotList, SlotQuery};

pub const AVAILABLE_SLOTS_PATH: &str = "/available-slots";
pub const CREATE_APPOINTMENT_PATH: &str = "/create-appointment";

/// What the widget needs from the remote booking service.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Any non-success HTTP status is an error.
    async fn fetch_slots(&self, query: &SlotQuery) -> Result<SlotList, AppError>;

    /// The body is decoded whatever the HTTP status; the service signals
    /// business failures through `status`/`error`.
    async fn submit_booking(&self, request: &BookingRequest) -> Result<BookingResponse, AppError>;
}

pub struct BookingApiClient {
    client: Client,
    config: AppConfig,
}

impl BookingApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &AppConfig) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }

    /// Content-Type is left to `.json()` on requests that carry a body.
    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        debug!("Making {} request to {}", method, url);

        self.client.request(method, &url).headers(self.get_headers())
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, AppError> {
        req.send().await.map_err(|e| {
            error!("Transport failure talking to booking service: {}", e);
            AppError::ExternalService(e.to_string())
        })
    }

    async fn decode<T>(response: Response) -> Result<T, AppError>
    where
        T: serde::de::DeserializeOwned,
    {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::ExternalService(e.to_string()))?;

        serde_json::from_slice::<T>(&bytes).map_err(|e| {
            error!("Malformed response from booking service: {}", e);
            AppError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl BookingApi for BookingApiClient {
    #[instrument(skip(self), fields(doctor = %query.doctor, date = %query.date))]
    async fn fetch_slots(&self, query: &SlotQuery) -> Result<SlotList, AppError> {
        let req = self
            .request(Method::GET, AVAILABLE_SLOTS_PATH)
            .query(&[("date", query.date.as_str()), ("doctor", query.doctor.as_str())]);

        let response = self.send(req).await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Slot API error ({}): {}", status, error_text);
            return Err(AppError::ExternalService(format!(
                "Failed to fetch slots ({})",
                status
            )));
        }

        let slots: SlotList = Self::decode(response).await?;
        debug!("Received {} slots", slots.len());

        Ok(slots)
    }

    #[instrument(skip(self, request), fields(doctor = %request.doctor, date = %request.date, time = %request.time))]
    async fn submit_booking(&self, request: &BookingRequest) -> Result<BookingResponse, AppError> {
        let req = self.request(Method::POST, CREATE_APPOINTMENT_PATH).json(request);

        let response = self.send(req).await?;
        let status = response.status();

        let result: BookingResponse = Self::decode(response).await?;
        if !status.is_success() {
            debug!("Booking service answered {} with status {:?}", status, result.status);
        }

        Ok(result)
    }
}
