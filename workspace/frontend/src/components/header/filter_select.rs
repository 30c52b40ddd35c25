use model::FilterConfig;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterSelectProps {
    pub config: FilterConfig,
    pub on_change: Callback<String>,
}

fn emit_selection(on_change: &Callback<String>, heading: &str, value: String) {
    log::debug!("Filter '{}' changed to '{}'", heading, value);
    on_change.emit(value);
}

/// Dropdown over a closed option list. Holds no state of its own: the
/// selected option always mirrors `config.value`.
#[function_component(FilterSelect)]
pub fn filter_select(props: &FilterSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        let heading = props.config.heading;
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            emit_selection(&on_change, heading, value);
        })
    };

    html! {
        <label class="form-control">
            <div class="label py-1">
                <span class="label-text text-xs text-base-content/70">{props.config.heading}</span>
            </div>
            <select class="select select-sm select-bordered min-w-32" {onchange}>
                { for props.config.options.iter().map(|option| html! {
                    <option
                        value={option.value}
                        selected={option.value == props.config.value}
                    >
                        {option.label}
                    </option>
                }) }
            </select>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn change_emits_the_selected_value_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let on_change = {
            let seen = seen.clone();
            Callback::from(move |value: String| seen.borrow_mut().push(value))
        };

        emit_selection(&on_change, "Period", "30d".to_string());

        assert_eq!(*seen.borrow(), vec!["30d".to_string()]);
    }
}
