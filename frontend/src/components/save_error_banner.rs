use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SaveErrorBannerProps {
    pub message: String,
    pub on_dismiss: Callback<MouseEvent>,
}

/// Shown when a background save fails; the edit stays on screen.
#[function_component(SaveErrorBanner)]
pub fn save_error_banner(props: &SaveErrorBannerProps) -> Html {
    html! {
        <div class="save-error-banner" role="alert">
            <span class="save-error-message">{&props.message}</span>
            <button class="dismiss-button" onclick={props.on_dismiss.clone()}>{"Dismiss"}</button>
        </div>
    }
}
