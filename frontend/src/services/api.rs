use gloo::net::http::Request;
use shared::{DailyEntry, Newspaper, SaveDailyEntryRequest};

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Get the saved entries of a month, ordered by date
    pub async fn get_daily_entries(&self, year: i32, month: u32) -> Result<Vec<DailyEntry>, String> {
        let url = format!("{}/api/daily-entries/{}/{}", self.base_url, year, month);

        match Request::get(&url).send().await {
            Ok(response) => {
                if !response.ok() {
                    return Err(format!("Server returned {}", response.status()));
                }
                match response.json::<Vec<DailyEntry>>().await {
                    Ok(data) => Ok(data),
                    Err(e) => Err(format!("Failed to parse daily entries: {}", e)),
                }
            }
            Err(e) => Err(format!("Failed to fetch daily entries: {}", e)),
        }
    }

    /// Upsert one day's prices; returns the stored row
    pub async fn save_daily_entry(&self, request: &SaveDailyEntryRequest) -> Result<DailyEntry, String> {
        let url = format!("{}/api/daily-entry", self.base_url);

        match Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<DailyEntry>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Get the static newspaper listing
    pub async fn get_newspapers(&self) -> Result<Vec<Newspaper>, String> {
        let url = format!("{}/api/newspapers", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if !response.ok() {
                    return Err(format!("Server returned {}", response.status()));
                }
                match response.json::<Vec<Newspaper>>().await {
                    Ok(data) => Ok(data),
                    Err(e) => Err(format!("Failed to parse newspapers: {}", e)),
                }
            }
            Err(e) => Err(format!("Failed to fetch newspapers: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
