use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: AttrValue,
}

/// Inline error box for a component whose configuration could not be built.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="alert alert-error">
            <i class="fas fa-exclamation-circle text-xl"></i>
            <div class="flex flex-col">
                <span class="font-semibold">{"Something went wrong"}</span>
                <span class="text-sm">{&props.message}</span>
            </div>
        </div>
    }
}
