use chrono::NaiveDate;

/// A stored day of newspaper prices
#[derive(Debug, Clone, PartialEq)]
pub struct DailyEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub aaj_ka_anand_price: f64,
    pub times_of_india_price: f64,
    pub total_daily_price: f64,
}

/// Validated prices for an upsert. The total is derived, never supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewEntryPrices {
    pub aaj_ka_anand_price: f64,
    pub times_of_india_price: f64,
}

impl NewEntryPrices {
    pub fn new(aaj_ka_anand_price: f64, times_of_india_price: f64) -> Result<Self, EntryValidationError> {
        let prices = Self {
            aaj_ka_anand_price: check_price("aaj_ka_anand_price", aaj_ka_anand_price)?,
            times_of_india_price: check_price("times_of_india_price", times_of_india_price)?,
        };
        // Two finite prices can still overflow once summed
        if !prices.total().is_finite() {
            return Err(EntryValidationError::TotalOutOfRange);
        }
        Ok(prices)
    }

    pub fn total(&self) -> f64 {
        self.aaj_ka_anand_price + self.times_of_india_price
    }
}

fn check_price(field: &'static str, value: f64) -> Result<f64, EntryValidationError> {
    if !value.is_finite() {
        return Err(EntryValidationError::InvalidPrice { field });
    }
    if value < 0.0 {
        return Err(EntryValidationError::NegativePrice { field, value });
    }
    Ok(value)
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EntryValidationError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("{field} must be a number")]
    InvalidPrice { field: &'static str },
    #[error("{field} cannot be negative (got {value})")]
    NegativePrice { field: &'static str, value: f64 },
    #[error("total_daily_price is out of range")]
    TotalOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_prices() {
        let prices = NewEntryPrices::new(5.0, 7.0).unwrap();
        assert_eq!(prices.total(), 12.0);
    }

    #[test]
    fn test_rejects_negative_and_non_finite_prices() {
        assert_eq!(
            NewEntryPrices::new(-1.0, 7.0),
            Err(EntryValidationError::NegativePrice { field: "aaj_ka_anand_price", value: -1.0 })
        );
        assert_eq!(
            NewEntryPrices::new(1.0, f64::NAN).unwrap_err().to_string(),
            "times_of_india_price must be a number"
        );
    }

    #[test]
    fn test_rejects_total_that_overflows() {
        assert_eq!(
            NewEntryPrices::new(1e308, 1e308),
            Err(EntryValidationError::TotalOutOfRange)
        );
        assert_eq!(NewEntryPrices::new(f64::MAX, 0.0).unwrap().total(), f64::MAX);
    }
}
