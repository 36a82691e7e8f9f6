use shared::calendar::parse_date;
use shared::{DailyEntry as DailyEntryDto, PriceInput, SaveDailyEntryRequest};

use crate::domain::models::{DailyEntry as DomainDailyEntry, EntryValidationError, NewEntryPrices};
use crate::domain::UpsertEntryCommand;

/// Mapper between daily entry DTOs and domain types
pub struct DailyEntryMapper;

impl DailyEntryMapper {
    /// Converts a domain entry to its wire form (date as YYYY-MM-DD).
    pub fn to_dto(domain: DomainDailyEntry) -> DailyEntryDto {
        DailyEntryDto {
            id: Some(domain.id),
            date: domain.date.format("%Y-%m-%d").to_string(),
            aaj_ka_anand_price: domain.aaj_ka_anand_price,
            times_of_india_price: domain.times_of_india_price,
            total_daily_price: domain.total_daily_price,
        }
    }

    /// Validates a save request into an upsert command.
    ///
    /// Missing prices count as zero and numeric strings are accepted.
    pub fn to_upsert_command(
        request: SaveDailyEntryRequest,
    ) -> Result<UpsertEntryCommand, EntryValidationError> {
        let date = parse_date(&request.date)
            .ok_or_else(|| EntryValidationError::InvalidDate(request.date.clone()))?;

        let aaj_ka_anand_price = Self::resolve_price("aaj_ka_anand_price", &request.aaj_ka_anand_price)?;
        let times_of_india_price =
            Self::resolve_price("times_of_india_price", &request.times_of_india_price)?;

        Ok(UpsertEntryCommand {
            date,
            prices: NewEntryPrices::new(aaj_ka_anand_price, times_of_india_price)?,
        })
    }

    fn resolve_price(field: &'static str, input: &PriceInput) -> Result<f64, EntryValidationError> {
        input
            .to_amount()
            .ok_or(EntryValidationError::InvalidPrice { field })
    }
}
