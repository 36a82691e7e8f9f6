use serde::{Deserialize, Serialize};

pub mod calendar;
pub mod entry_book;

pub use calendar::{GridCell, MonthCursor, MonthGrid, WEEKDAY_LABELS};
pub use entry_book::{format_rupees, EntryBook, Publication};

/// One date's recorded prices as it travels over the wire.
///
/// `total_daily_price` is always `aaj_ka_anand_price + times_of_india_price`;
/// the store recomputes it on every write and the client recomputes it locally
/// for immediate feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Store-assigned row id. Absent for entries the client created locally
    /// that have not come back from a reload yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Calendar date (YYYY-MM-DD), unique per entry
    pub date: String,
    /// Price paid for Aaj ka Anand (Hindi)
    #[serde(default)]
    pub aaj_ka_anand_price: f64,
    /// Price paid for Times of India (English)
    #[serde(default)]
    pub times_of_india_price: f64,
    /// Sum of both prices
    #[serde(default)]
    pub total_daily_price: f64,
}

/// A price as supplied by a caller of `POST /api/daily-entry`.
///
/// Numbers are taken as-is, numeric strings are parsed, and a missing or
/// `null` value counts as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl PriceInput {
    /// Resolve to a numeric amount. `None` means the text was not a number.
    pub fn to_amount(&self) -> Option<f64> {
        match self {
            PriceInput::Number(value) => Some(*value),
            PriceInput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
            PriceInput::Missing => Some(0.0),
        }
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        PriceInput::Number(value)
    }
}

/// Request body for `POST /api/daily-entry`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveDailyEntryRequest {
    pub date: String,
    #[serde(default)]
    pub aaj_ka_anand_price: PriceInput,
    #[serde(default)]
    pub times_of_india_price: PriceInput,
}

/// Static reference row for a publication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Newspaper {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// Error body returned by every API route on failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }

    /// The generic body used for any backend failure; no detail is leaked.
    pub fn internal() -> Self {
        Self::new("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_request_accepts_numbers_strings_and_missing_fields() {
        let request: SaveDailyEntryRequest = serde_json::from_value(json!({
            "date": "2024-03-05",
            "aaj_ka_anand_price": 5,
            "times_of_india_price": "7.5"
        }))
        .unwrap();
        assert_eq!(request.aaj_ka_anand_price.to_amount(), Some(5.0));
        assert_eq!(request.times_of_india_price.to_amount(), Some(7.5));

        let request: SaveDailyEntryRequest =
            serde_json::from_value(json!({ "date": "2024-03-05", "times_of_india_price": null }))
                .unwrap();
        assert_eq!(request.aaj_ka_anand_price, PriceInput::Missing);
        assert_eq!(request.times_of_india_price.to_amount(), Some(0.0));
    }

    #[test]
    fn test_price_input_text_rules() {
        assert_eq!(PriceInput::Text("".to_string()).to_amount(), Some(0.0));
        assert_eq!(PriceInput::Text(" 12 ".to_string()).to_amount(), Some(12.0));
        assert_eq!(PriceInput::Text("abc".to_string()).to_amount(), None);
    }

    #[test]
    fn test_daily_entry_wire_shape() {
        let entry = DailyEntry {
            id: Some(3),
            date: "2024-03-05".to_string(),
            aaj_ka_anand_price: 5.0,
            times_of_india_price: 7.0,
            total_daily_price: 12.0,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["date"], "2024-03-05");
        assert_eq!(value["total_daily_price"], 12.0);

        let local = DailyEntry { id: None, ..entry };
        let value = serde_json::to_value(&local).unwrap();
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_internal_error_body() {
        let body = serde_json::to_value(ApiError::internal()).unwrap();
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}
