use yew::prelude::*;
use shared::{EntryBook, GridCell, MonthCursor, MonthGrid, Publication, WEEKDAY_LABELS};
use web_sys::{HtmlInputElement, WheelEvent};
use crate::hooks::use_daily_entries::PriceEdit;

#[derive(Properties, PartialEq)]
pub struct CalendarViewProps {
    pub cursor: MonthCursor,
    pub book: EntryBook,
    pub loading: bool,
    pub on_prev: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
    pub on_edit: Callback<PriceEdit>,
}

#[function_component(CalendarView)]
pub fn calendar_view(props: &CalendarViewProps) -> Html {
    let grid = MonthGrid::new(props.cursor);

    let cells = grid.cells().into_iter().map(|cell| match cell {
        GridCell::Blank => html! { <div class="calendar-day empty"></div> },
        GridCell::Day(day) => html! {
            <DayCell
                key={day.to_string()}
                day={day}
                weekday={props.cursor.weekday_label(day).unwrap_or_default()}
                prices={Publication::ALL
                    .iter()
                    .map(|publication| (*publication, props.book.display_price(day, *publication)))
                    .collect::<Vec<_>>()}
                day_total={props.book.display_day_total(day)}
                on_edit={props.on_edit.clone()}
            />
        },
    });

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <button class="nav-button" onclick={props.on_prev.clone()}>{"‹ Prev"}</button>
                <h2 class="calendar-title">{props.cursor.label()}</h2>
                <button class="nav-button" onclick={props.on_next.clone()}>{"Next ›"}</button>
            </div>

            if props.loading {
                <div class="calendar-loading">{"Loading entries..."}</div>
            }

            <div class="calendar-weekdays">
                {for WEEKDAY_LABELS.iter().map(|label| html! {
                    <div class="weekday">{*label}</div>
                })}
            </div>
            <div
                class="calendar-grid"
                style={format!("grid-template-rows: repeat({}, minmax(110px, auto));", grid.week_rows())}
            >
                {for cells}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DayCellProps {
    pub day: u32,
    pub weekday: &'static str,
    /// Displayed value of each price input, in column order
    pub prices: Vec<(Publication, String)>,
    pub day_total: Option<String>,
    pub on_edit: Callback<PriceEdit>,
}

#[function_component(DayCell)]
fn day_cell(props: &DayCellProps) -> Html {
    let price_input = |publication: Publication, value: &String| {
        let day = props.day;
        let on_edit = props.on_edit.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(PriceEdit { day, publication, raw: input.value() });
        });

        // Scrolling over a focused number input would silently change the price
        let onwheel = Callback::from(|e: WheelEvent| {
            e.prevent_default();
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let _ = input.blur();
            }
        });

        html! {
            <label class="price-field">
                <span class="price-label">{publication.label()}</span>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="0"
                    title={publication.full_name()}
                    value={value.clone()}
                    {oninput}
                    {onwheel}
                />
            </label>
        }
    };

    html! {
        <div class="calendar-day">
            <div class="day-header">
                <div class="day-number">{props.day}</div>
                <div class="day-weekday">{props.weekday}</div>
            </div>
            <div class="day-prices">
                {for props.prices.iter().map(|(publication, value)| price_input(*publication, value))}
            </div>
            if let Some(total) = &props.day_total {
                <div class="day-total">{total}</div>
            }
        </div>
    }
}
