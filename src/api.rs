/// HTTP client for the `/djangoapp` backend.
/// One method per endpoint, no caching; callers decide what an error means for the page.
use gloo_net::http::{Request, Response};
use leptos::logging::{log, warn};
use leptos::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;
use crate::config::{ALL_STATES, API_BASE_URL};
use crate::error::ApiError;
use crate::models::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::models::car::{CarCatalog, CarsResponse};
use crate::models::dealer::{Dealer, DealerResponse, DealersResponse};
use crate::models::review::{AddReviewResponse, NewReview, Review, ReviewsResponse, SentimentResponse};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: &'static str,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl ApiClient {
    pub const fn new(base_url: &'static str) -> Self {
        Self { base_url }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/djangoapp/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// `None`, an empty string and `"All"` all mean the unscoped list.
    pub fn dealers_url(&self, state: Option<&str>) -> String {
        match state.filter(|s| !s.is_empty() && *s != ALL_STATES) {
            Some(state) => self.endpoint(&format!("get_dealers/{}", urlencoding::encode(state))),
            None => self.endpoint("get_dealers"),
        }
    }

    pub async fn get_dealers(&self, state: Option<&str>) -> Result<Vec<Dealer>, ApiError> {
        let url = self.dealers_url(state);
        let response: DealersResponse = get_json(&url).await?;
        log!("[API] {} dealers from {}", response.dealers.len(), url);
        Ok(response.dealers)
    }

    pub async fn get_dealer(&self, id: &str) -> Result<Option<Dealer>, ApiError> {
        let url = self.endpoint(&format!("dealer/{}", urlencoding::encode(id)));
        let response: DealerResponse = get_json(&url).await?;
        Ok(response.dealer)
    }

    pub async fn get_reviews(&self, dealer_id: &str) -> Result<Vec<Review>, ApiError> {
        let url = self.endpoint(&format!("reviews/dealer/{}", urlencoding::encode(dealer_id)));
        let response: ReviewsResponse = get_json(&url).await?;
        Ok(response.reviews)
    }

    pub async fn get_cars(&self) -> Result<CarCatalog, ApiError> {
        let response: CarsResponse = get_json(&self.endpoint("get_cars")).await?;
        Ok(CarCatalog::from(response.car_models))
    }

    /// `Ok(true)` only when the backend answers `{"status": 200}`.
    pub async fn add_review(&self, review: &NewReview) -> Result<bool, ApiError> {
        let response: AddReviewResponse = post_json(&self.endpoint("add_review"), review).await?;
        Ok(response.is_accepted())
    }

    pub async fn analyze_review(&self, text: &str) -> Result<Option<String>, ApiError> {
        let url = self.endpoint(&format!("analyze_review?text={}", urlencoding::encode(text)));
        let response: SentimentResponse = get_json(&url).await?;
        Ok(response.sentiment)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        post_json(&self.endpoint("login"), request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        post_json(&self.endpoint("register"), request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        Request::get(&self.endpoint("logout"))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        Ok(())
    }

    /// Fire-and-forget logout. The result is dropped and nothing is retried.
    pub fn logout_in_background(self) {
        spawn_local(async move {
            if let Err(err) = self.logout().await {
                warn!("[API] logout request failed, ignoring: {}", err);
            }
        });
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url).send().await?;
    decode(response, url).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::post(url)
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|err| ApiError::Encode(err.to_string()))?
        .send()
        .await?;
    decode(response, url).await
}

async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Http { status: response.status(), url: url.to_string() });
    }
    response.json::<T>().await.map_err(|err| ApiError::Decode {
        url: url.to_string(),
        reason: err.to_string(),
    })
}
