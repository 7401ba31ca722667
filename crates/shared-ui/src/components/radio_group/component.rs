use dioxus::prelude::*;
use shared_types::SelectOption;

/// A labeled set of mutually exclusive radio inputs sharing one `name`.
///
/// Each input gets the id `{name}-{value}`. The checked option is owned by the
/// caller through `selected` and `on_change`.
#[component]
pub fn RadioGroup(
    label: String,
    name: String,
    options: Vec<SelectOption>,
    #[props(default)] selected: String,
    #[props(default)] on_change: EventHandler<String>,
    #[props(default)] error: Option<String>,
) -> Element {
    let label_id = format!("{name}-label");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "radio-group",
            role: "radiogroup",
            aria_labelledby: "{label_id}",
            span { id: "{label_id}", class: "radio-group-label", "{label}" }
            div { class: "radio-group-options",
                for option in options.iter() {
                    RadioGroupItem {
                        key: "{option.value}",
                        name: name.clone(),
                        option: option.clone(),
                        checked: option.value == selected,
                        on_change: on_change,
                    }
                }
            }
            if let Some(err) = error {
                p { class: "field-error", role: "alert", "{err}" }
            }
        }
    }
}

#[component]
pub fn RadioGroupItem(
    name: String,
    option: SelectOption,
    checked: bool,
    on_change: EventHandler<String>,
) -> Element {
    let input_id = format!("{name}-{}", option.value);
    let value = option.value.clone();

    rsx! {
        div { class: "radio-item",
            input {
                id: "{input_id}",
                r#type: "radio",
                name: "{name}",
                value: "{option.value}",
                checked: checked,
                onchange: move |_| on_change.call(value.clone()),
            }
            label { r#for: "{input_id}", "{option.label}" }
        }
    }
}
