use yew::prelude::*;
use shared::format_rupees;

#[derive(Properties, PartialEq)]
pub struct MonthSummaryProps {
    pub month_label: String,
    pub grand_total: f64,
    pub days_recorded: usize,
}

#[function_component(MonthSummary)]
pub fn month_summary(props: &MonthSummaryProps) -> Html {
    html! {
        <section class="month-summary">
            <h3>{"Monthly Bill Summary"}</h3>
            <div class="summary-row">
                <span class="summary-label">{format!("Grand Total for {}:", props.month_label)}</span>
                <span class="summary-amount">{format_rupees(props.grand_total)}</span>
            </div>
            <div class="summary-hint">
                {format!("{} day(s) recorded", props.days_recorded)}
            </div>
        </section>
    }
}
