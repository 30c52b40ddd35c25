use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
    /// Whether the overlay is shown at all
    pub active: bool,
    #[prop_or(AttrValue::Static("Updating data..."))]
    pub text: AttrValue,
}

/// Translucent overlay laid over page content while a cosmetic refresh runs.
///
/// The parent must be `relative` for the overlay to cover it.
#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    if !props.active {
        return html! {};
    }

    html! {
        <div class="absolute inset-0 z-30 flex items-center justify-center bg-base-100/60 backdrop-blur-sm rounded-box">
            <div class="flex items-center gap-3">
                <span class="loading loading-spinner loading-md text-primary"></span>
                <p class="text-sm text-base-content/70">{&props.text}</p>
            </div>
        </div>
    }
}
