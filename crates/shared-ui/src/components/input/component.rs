use dioxus::prelude::*;

/// Native input types an [`InputField`] can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Number,
    Tel,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Number => "number",
            InputKind::Tel => "tel",
        }
    }
}

/// A labeled form input. The input's `name` equals its `id`, and the
/// placeholder falls back to the label.
#[component]
pub fn InputField(
    id: String,
    label: String,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] kind: InputKind,
    #[props(default = false)] required: bool,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let placeholder = placeholder.unwrap_or_else(|| label.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            label { class: "input-label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                name: "{id}",
                r#type: kind.as_str(),
                value: value,
                placeholder: placeholder,
                required: required,
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
