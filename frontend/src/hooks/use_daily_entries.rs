use yew::prelude::*;
use shared::{EntryBook, MonthCursor, Publication};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use crate::services::api::ApiClient;
use crate::services::date_utils::current_month;

/// One edited input: which day, which paper, and the raw text typed
#[derive(Clone, PartialEq, Debug)]
pub struct PriceEdit {
    pub day: u32,
    pub publication: Publication,
    pub raw: String,
}

#[derive(Clone, PartialEq)]
pub struct DailyEntriesState {
    pub cursor: MonthCursor,
    pub book: EntryBook,
    pub loading: bool,
    pub save_error: Option<String>,
}

pub struct UseDailyEntriesResult {
    pub state: DailyEntriesState,
    pub actions: UseDailyEntriesActions,
}

#[derive(Clone)]
pub struct UseDailyEntriesActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub edit_price: Callback<PriceEdit>,
    pub dismiss_save_error: Callback<MouseEvent>,
}

#[hook]
pub fn use_daily_entries(api_client: &ApiClient) -> UseDailyEntriesResult {
    let cursor = use_state(current_month);
    // The book is mutated in place so rapid edits never see a stale copy
    let book = use_mut_ref(EntryBook::new);
    let displayed = use_mut_ref(|| *cursor);
    let loading = use_state(|| true);
    let save_error = use_state(|| Option::<String>::None);
    let trigger = use_force_update();

    // Reload whenever the displayed month changes
    {
        let api_client = api_client.clone();
        let book = book.clone();
        let displayed = displayed.clone();
        let loading = loading.clone();
        let trigger = trigger.clone();

        use_effect_with(*cursor, move |month: &MonthCursor| {
            let month = *month;
            *displayed.borrow_mut() = month;
            *book.borrow_mut() = EntryBook::new();
            loading.set(true);

            spawn_local(async move {
                let result = api_client.get_daily_entries(month.year(), month.month()).await;

                // The user may have navigated away while this was in flight
                if *displayed.borrow() != month {
                    gloo::console::log!(format!("Dropping stale entries for {}", month.label()));
                    return;
                }

                match result {
                    Ok(entries) => {
                        *book.borrow_mut() = EntryBook::from_entries(entries);
                    }
                    Err(e) => {
                        gloo::console::error!(format!("Error fetching daily entries: {}", e));
                    }
                }
                loading.set(false);
                trigger.force_update();
            });
            || ()
        });
    }

    // Optimistic edit: update locally first, then persist in the background
    let edit_price = {
        let api_client = api_client.clone();
        let book = book.clone();
        let save_error = save_error.clone();
        let trigger = trigger.clone();

        use_callback(*cursor, move |edit: PriceEdit, month: &MonthCursor| {
            let request = book
                .borrow_mut()
                .apply_edit(month, edit.day, edit.publication, &edit.raw);
            trigger.force_update();

            let Some(request) = request else {
                gloo::console::error!(format!("Day {} is not in {}", edit.day, month.label()));
                return;
            };

            let api_client = api_client.clone();
            let save_error = save_error.clone();
            spawn_local(async move {
                if let Err(e) = api_client.save_daily_entry(&request).await {
                    gloo::console::error!(format!("Error saving data: {}", e));
                    save_error.set(Some(format!(
                        "Could not save the entry for {}. It is shown here but not stored.",
                        request.date
                    )));
                }
            });
        })
    };

    let prev_month = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.previous()))
    };

    let next_month = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.set(cursor.next()))
    };

    let dismiss_save_error = {
        let save_error = save_error.clone();
        Callback::from(move |_: MouseEvent| save_error.set(None))
    };

    let state = DailyEntriesState {
        cursor: *cursor,
        book: book.borrow().clone(),
        loading: *loading,
        save_error: (*save_error).clone(),
    };

    let actions = UseDailyEntriesActions {
        prev_month,
        next_month,
        edit_price,
        dismiss_save_error,
    };

    UseDailyEntriesResult { state, actions }
}
