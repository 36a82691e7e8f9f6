use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::calendar_view::CalendarView;
use components::month_summary::MonthSummary;
use components::newspaper_list::NewspaperList;
use components::save_error_banner::SaveErrorBanner;
use hooks::use_daily_entries::use_daily_entries;
use hooks::use_newspapers::use_newspapers;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());

    let daily_entries = use_daily_entries(&api_client);
    let newspapers = use_newspapers(&api_client);

    let state = &daily_entries.state;
    let actions = &daily_entries.actions;

    html! {
        <div class="app">
            <header class="header">
                <div class="container">
                    <h1>{"Newspaper Expense Tracker"}</h1>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    if let Some(message) = &state.save_error {
                        <SaveErrorBanner
                            message={message.clone()}
                            on_dismiss={actions.dismiss_save_error.clone()}
                        />
                    }

                    <CalendarView
                        cursor={state.cursor}
                        book={state.book.clone()}
                        loading={state.loading}
                        on_prev={actions.prev_month.clone()}
                        on_next={actions.next_month.clone()}
                        on_edit={actions.edit_price.clone()}
                    />

                    <MonthSummary
                        month_label={state.cursor.label()}
                        grand_total={state.book.grand_total()}
                        days_recorded={state.book.len()}
                    />

                    <NewspaperList
                        newspapers={newspapers.newspapers.clone()}
                        loading={newspapers.loading}
                    />
                </div>
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
