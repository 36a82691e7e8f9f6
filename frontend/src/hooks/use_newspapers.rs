use yew::prelude::*;
use shared::Newspaper;
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct UseNewspapersResult {
    pub newspapers: Vec<Newspaper>,
    pub loading: bool,
}

/// Load the static newspaper listing once on mount
#[hook]
pub fn use_newspapers(api_client: &ApiClient) -> UseNewspapersResult {
    let newspapers = use_state(Vec::<Newspaper>::new);
    let loading = use_state(|| true);

    {
        let newspapers = newspapers.clone();
        let loading = loading.clone();
        let api_client = api_client.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_newspapers().await {
                    Ok(list) => {
                        gloo::console::log!(format!("Loaded {} newspapers", list.len()));
                        newspapers.set(list);
                    }
                    Err(e) => {
                        gloo::console::error!(format!("Failed to load newspapers: {}", e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    UseNewspapersResult {
        newspapers: (*newspapers).clone(),
        loading: *loading,
    }
}
