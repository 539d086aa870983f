// src/models/review.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::car::CarCatalog;
use super::{lenient_bool, lenient_string};
use crate::config::REVIEW_YEARS;
use crate::error::ReviewError;

/// Sentiment label the backend attaches to each review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Anything other than `positive` or `negative` renders as neutral.
    pub fn from_label(label: &str) -> Self {
        match label {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Sentiment::Positive => "😊",
            Sentiment::Negative => "😞",
            Sentiment::Neutral => "😐",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Sentiment::Positive => "badge-positive",
            Sentiment::Negative => "badge-negative",
            Sentiment::Neutral => "badge-neutral",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Review {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,          // Display name of the reviewer
    #[serde(default, deserialize_with = "lenient_string")]
    pub review: String,        // Review body
    #[serde(default, deserialize_with = "lenient_bool")]
    pub purchase: bool,        // Verified purchase flag
    #[serde(default, deserialize_with = "lenient_string")]
    pub purchase_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub car_make: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub car_model: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub car_year: String,
    #[serde(default)]
    pub sentiment: Option<String>,
}

impl Review {
    /// `None` when the backend sent no label, which renders no badge at all.
    pub fn sentiment_label(&self) -> Option<&str> {
        self.sentiment.as_deref().filter(|label| !label.is_empty())
    }

    /// "2021 Toyota Camry — Purchased: 2023-05-01", or `None` without car details.
    pub fn car_summary(&self) -> Option<String> {
        if self.car_make.is_empty() && self.car_model.is_empty() && self.car_year.is_empty() {
            return None;
        }
        let car = [&self.car_year, &self.car_make, &self.car_model]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        if self.purchase_date.is_empty() {
            Some(car)
        } else {
            Some(format!("{car} — Purchased: {}", self.purchase_date))
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct ReviewsResponse {
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Body of `POST /djangoapp/add_review`. The backend assigns id and sentiment.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewReview {
    pub review: String,
    pub purchase: bool,
    pub purchase_date: String,
    pub car_make: String,
    pub car_model: String,
    pub car_year: i32,
    pub dealership: i64,
    #[serde(rename = "userName")]
    pub user_name: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct AddReviewResponse {
    #[serde(default)]
    pub status: Option<Value>,
}

impl AddReviewResponse {
    pub fn is_accepted(&self) -> bool {
        self.status.as_ref().and_then(Value::as_i64) == Some(200)
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct SentimentResponse {
    #[serde(default)]
    pub sentiment: Option<String>,
}

/// Default car year for a new draft: this year when it is selectable,
/// otherwise the newest entry of [`REVIEW_YEARS`].
pub fn default_car_year(current_year: i32) -> i32 {
    if REVIEW_YEARS.contains(&current_year) {
        current_year
    } else {
        REVIEW_YEARS[0]
    }
}

/// Form state of the review page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub review: String,
    pub purchase: bool,
    pub purchase_date: String,
    pub car_make: String,
    pub car_model: String,
    pub car_year: i32,
}

impl ReviewDraft {
    pub fn new(car_year: i32) -> Self {
        Self {
            review: String::new(),
            purchase: false,
            purchase_date: String::new(),
            car_make: String::new(),
            car_model: String::new(),
            car_year,
        }
    }

    /// Switches make and drops a model that does not belong to it.
    pub fn select_make(&mut self, make: &str, catalog: &CarCatalog) {
        self.car_make = make.to_string();
        if !self.car_model.is_empty() && !catalog.has_model(make, &self.car_model) {
            self.car_model.clear();
        }
    }

    /// Builds the request body. `dealer_id` comes from the route and must parse as an integer.
    pub fn into_submission(self, dealer_id: &str, user_name: &str) -> Result<NewReview, ReviewError> {
        if self.review.trim().is_empty() {
            return Err(ReviewError::EmptyReview);
        }
        let dealership = dealer_id
            .trim()
            .parse::<i64>()
            .map_err(|_| ReviewError::InvalidDealerId(dealer_id.to_string()))?;

        Ok(NewReview {
            review: self.review,
            purchase: self.purchase,
            purchase_date: self.purchase_date,
            car_make: self.car_make,
            car_model: self.car_model,
            car_year: self.car_year,
            dealership,
            user_name: user_name.to_string(),
        })
    }
}
