use dioxus::prelude::*;

/// A labeled multi-line text input.
#[component]
pub fn Textarea(
    id: String,
    label: String,
    #[props(default)] placeholder: String,
    #[props(default = 3)] rows: u32,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "textarea", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            label { class: "textarea-label", r#for: "{id}", "{label}" }
            textarea {
                id: "{id}",
                name: "{id}",
                rows: "{rows}",
                value: value,
                placeholder: placeholder,
                aria_invalid: error.is_some(),
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(err) = error {
                p { class: "field-error", role: "alert", "{err}" }
            }
        }
    }
}
