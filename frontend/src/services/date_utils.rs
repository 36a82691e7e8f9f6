use shared::MonthCursor;

/// The month containing today's date, read from the browser clock
pub fn current_month() -> MonthCursor {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed

    MonthCursor::clamped(year, month)
}
