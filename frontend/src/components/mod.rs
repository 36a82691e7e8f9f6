pub mod calendar_view;
pub mod month_summary;
pub mod newspaper_list;
pub mod save_error_banner;
