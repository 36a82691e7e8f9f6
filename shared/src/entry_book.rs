//! Client-side view model for one displayed month of daily entries.
//!
//! The book is a transient, derived copy of what the store holds. It is built
//! from a month listing, mutated optimistically on every edit, and thrown away
//! when the user navigates to another month.

use std::collections::BTreeMap;

use crate::calendar::{day_of_month, MonthCursor};
use crate::{DailyEntry, PriceInput, SaveDailyEntryRequest};

/// Which price field of a day is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Publication {
    AajKaAnand,
    TimesOfIndia,
}

impl Publication {
    pub const ALL: [Publication; 2] = [Publication::AajKaAnand, Publication::TimesOfIndia];

    /// Short label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Publication::AajKaAnand => "Hindi",
            Publication::TimesOfIndia => "English",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Publication::AajKaAnand => "Aaj ka Anand",
            Publication::TimesOfIndia => "Times of India",
        }
    }

    fn price_of(&self, entry: &DailyEntry) -> f64 {
        match self {
            Publication::AajKaAnand => entry.aaj_ka_anand_price,
            Publication::TimesOfIndia => entry.times_of_india_price,
        }
    }

    fn set_price(&self, entry: &mut DailyEntry, value: f64) {
        match self {
            Publication::AajKaAnand => entry.aaj_ka_anand_price = value,
            Publication::TimesOfIndia => entry.times_of_india_price = value,
        }
    }
}

/// Parse a raw input value as a price; anything unusable counts as zero.
pub fn parse_price(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Format an amount in rupees with two decimals
pub fn format_rupees(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

/// Day-of-month → entry for the displayed month
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryBook {
    entries: BTreeMap<u32, DailyEntry>,
}

impl EntryBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the lookup from a month listing. Entries whose date cannot be
    /// read are skipped.
    pub fn from_entries(entries: Vec<DailyEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter_map(|entry| day_of_month(&entry.date).map(|day| (day, entry)))
            .collect();
        Self { entries }
    }

    pub fn get(&self, day: u32) -> Option<&DailyEntry> {
        self.entries.get(&day)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply one field edit for a day of `cursor`'s month.
    ///
    /// Creates the local entry when absent, recomputes its total, and returns
    /// the request to persist. Returns `None` when `day` is not in the month.
    pub fn apply_edit(
        &mut self,
        cursor: &MonthCursor,
        day: u32,
        publication: Publication,
        raw: &str,
    ) -> Option<SaveDailyEntryRequest> {
        let date = cursor.date_for_day(day)?;
        let entry = self.entries.entry(day).or_insert_with(|| DailyEntry {
            id: None,
            date,
            aaj_ka_anand_price: 0.0,
            times_of_india_price: 0.0,
            total_daily_price: 0.0,
        });

        publication.set_price(entry, parse_price(raw));
        entry.total_daily_price = entry.aaj_ka_anand_price + entry.times_of_india_price;

        Some(SaveDailyEntryRequest {
            date: entry.date.clone(),
            aaj_ka_anand_price: PriceInput::Number(entry.aaj_ka_anand_price),
            times_of_india_price: PriceInput::Number(entry.times_of_india_price),
        })
    }

    /// Sum of every loaded day's total. Recomputed on each call.
    pub fn grand_total(&self) -> f64 {
        self.entries.values().map(|entry| entry.total_daily_price).sum()
    }

    /// Input value for a day's field; empty when nothing (or zero) is recorded.
    pub fn display_price(&self, day: u32, publication: Publication) -> String {
        match self.get(day).map(|entry| publication.price_of(entry)) {
            Some(price) if price != 0.0 => price.to_string(),
            _ => String::new(),
        }
    }

    /// Formatted total for a day, if the day has an entry
    pub fn display_day_total(&self, day: u32) -> Option<String> {
        self.get(day).map(|entry| format_rupees(entry.total_daily_price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_2024() -> MonthCursor {
        MonthCursor::new(2024, 3).unwrap()
    }

    fn stored(date: &str, a: f64, b: f64) -> DailyEntry {
        DailyEntry {
            id: Some(1),
            date: date.to_string(),
            aaj_ka_anand_price: a,
            times_of_india_price: b,
            total_daily_price: a + b,
        }
    }

    #[test]
    fn test_publications_render_hindi_then_english() {
        let labels: Vec<&str> = Publication::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["Hindi", "English"]);

        let mut book = EntryBook::new();
        book.apply_edit(&march_2024(), 5, Publication::TimesOfIndia, "7");
        let shown: Vec<String> = Publication::ALL
            .iter()
            .map(|p| book.display_price(5, *p))
            .collect();
        assert_eq!(shown, vec!["".to_string(), "7".to_string()]);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.5"), 12.5);
        assert_eq!(parse_price(" 7 "), 7.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("abc"), 0.0);
        assert_eq!(parse_price("-3"), 0.0);
        assert_eq!(parse_price("inf"), 0.0);
        assert_eq!(parse_price("NaN"), 0.0);
    }

    #[test]
    fn test_from_entries_keys_by_day() {
        let book = EntryBook::from_entries(vec![
            stored("2024-03-05", 5.0, 7.0),
            stored("2024-03-31", 1.0, 2.0),
            stored("bad-date", 9.0, 9.0),
        ]);

        assert_eq!(book.len(), 2);
        assert_eq!(book.get(5).unwrap().total_daily_price, 12.0);
        assert_eq!(book.get(31).unwrap().total_daily_price, 3.0);
        assert!(book.get(6).is_none());
    }

    #[test]
    fn test_apply_edit_creates_entry_and_recomputes_total() {
        let mut book = EntryBook::new();
        let cursor = march_2024();

        let request = book
            .apply_edit(&cursor, 5, Publication::AajKaAnand, "5")
            .unwrap();
        assert_eq!(request.date, "2024-03-05");
        assert_eq!(request.aaj_ka_anand_price, PriceInput::Number(5.0));
        assert_eq!(request.times_of_india_price, PriceInput::Number(0.0));
        assert_eq!(book.get(5).unwrap().total_daily_price, 5.0);

        let request = book
            .apply_edit(&cursor, 5, Publication::TimesOfIndia, "7")
            .unwrap();
        assert_eq!(request.aaj_ka_anand_price, PriceInput::Number(5.0));
        assert_eq!(request.times_of_india_price, PriceInput::Number(7.0));
        assert_eq!(book.get(5).unwrap().total_daily_price, 12.0);
    }

    #[test]
    fn test_empty_input_counts_as_zero_locally_and_in_request() {
        let mut book = EntryBook::from_entries(vec![stored("2024-03-05", 5.0, 7.0)]);

        let request = book
            .apply_edit(&march_2024(), 5, Publication::AajKaAnand, "")
            .unwrap();

        assert_eq!(request.aaj_ka_anand_price, PriceInput::Number(0.0));
        assert_eq!(book.get(5).unwrap().total_daily_price, 7.0);
        assert_eq!(book.display_price(5, Publication::AajKaAnand), "");
        assert_eq!(book.display_price(5, Publication::TimesOfIndia), "7");
    }

    #[test]
    fn test_apply_edit_rejects_day_outside_month() {
        let mut book = EntryBook::new();
        let february = MonthCursor::new(2023, 2).unwrap();

        assert!(book.apply_edit(&february, 29, Publication::AajKaAnand, "5").is_none());
        assert!(book.apply_edit(&february, 0, Publication::AajKaAnand, "5").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_grand_total_is_order_independent() {
        let entries = vec![
            stored("2024-03-01", 5.0, 7.0),
            stored("2024-03-02", 5.0, 0.0),
            stored("2024-03-10", 2.5, 7.5),
        ];
        let mut reversed = entries.clone();
        reversed.reverse();

        let book = EntryBook::from_entries(entries.clone());
        assert_eq!(book.grand_total(), 27.0);
        assert_eq!(EntryBook::from_entries(reversed).grand_total(), 27.0);
        // Reloading the same listing gives the same figure
        assert_eq!(EntryBook::from_entries(entries).grand_total(), book.grand_total());
    }

    #[test]
    fn test_grand_total_tracks_edits() {
        let mut book = EntryBook::from_entries(vec![stored("2024-03-01", 5.0, 7.0)]);
        book.apply_edit(&march_2024(), 2, Publication::TimesOfIndia, "8");
        assert_eq!(book.grand_total(), 20.0);
        assert_eq!(format_rupees(book.grand_total()), "₹20.00");
    }

    #[test]
    fn test_display_helpers_for_absent_day() {
        let book = EntryBook::new();
        assert_eq!(book.display_price(3, Publication::TimesOfIndia), "");
        assert!(book.display_day_total(3).is_none());
        assert_eq!(Publication::AajKaAnand.label(), "Hindi");
        assert_eq!(Publication::TimesOfIndia.full_name(), "Times of India");
    }
}
