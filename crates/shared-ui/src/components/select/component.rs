use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaChevronDown;
use dioxus_free_icons::Icon;
use shared_types::SelectOption;

use crate::outside_click::use_outside_click;

/// Visibility of a [`CustomSelect`] list.
///
/// Closing is a separate phase so the list stays mounted while its exit
/// animation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectState {
    #[default]
    Closed,
    Open,
    Closing,
}

impl SelectState {
    pub fn is_open(&self) -> bool {
        matches!(self, SelectState::Open)
    }

    /// Whether the option list is in the DOM.
    pub fn is_mounted(&self) -> bool {
        !matches!(self, SelectState::Closed)
    }

    /// Trigger click. Reopens a list that is still animating out.
    pub fn toggle(&mut self) {
        *self = match self {
            SelectState::Open => SelectState::Closing,
            SelectState::Closed | SelectState::Closing => SelectState::Open,
        };
    }

    /// Outside interaction.
    pub fn close(&mut self) {
        if self.is_open() {
            *self = SelectState::Closing;
        }
    }

    /// Report `value` to the owner, then close.
    pub fn choose(&mut self, value: String, on_select: impl FnOnce(String)) {
        on_select(value);
        self.close();
    }

    /// Exit animation ended; unmount the list.
    pub fn finish_closing(&mut self) {
        if *self == SelectState::Closing {
            *self = SelectState::Closed;
        }
    }

    fn data_state(&self) -> &'static str {
        if self.is_open() {
            "open"
        } else {
            "closed"
        }
    }
}

/// Label of the option whose value equals `selected`, or `placeholder`.
pub fn display_label<'a>(options: &'a [SelectOption], selected: &str, placeholder: &'a str) -> &'a str {
    options
        .iter()
        .find(|option| option.value == selected)
        .map(|option| option.label.as_str())
        .unwrap_or(placeholder)
}

/// A dropdown with a labeled trigger and an option list that animates in and out.
///
/// The selected value is owned by the caller; the widget only tracks whether
/// the list is open. It closes when an option is chosen or when the user
/// presses anywhere outside it.
#[component]
pub fn CustomSelect(
    id: String,
    label: String,
    options: Vec<SelectOption>,
    selected_value: String,
    on_select: EventHandler<String>,
    placeholder: String,
    #[props(default)] error: Option<String>,
) -> Element {
    let mut state = use_signal(SelectState::default);
    let root_id = format!("{id}-root");
    let list_id = format!("{id}-listbox");

    let close = use_callback(move |()| {
        if state.peek().is_open() {
            state.write().close();
        }
    });
    use_outside_click(&root_id, close);

    let current = *state.read();
    let shown = display_label(&options, &selected_value, &placeholder).to_string();
    let has_value = options.iter().any(|o| o.value == selected_value);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { id: "{root_id}", class: "custom-select",
            label { class: "custom-select-label", r#for: "{id}", "{label}" }
            button {
                id: "{id}",
                r#type: "button",
                class: "custom-select-trigger",
                aria_haspopup: "listbox",
                aria_expanded: current.is_open(),
                aria_controls: "{list_id}",
                aria_invalid: error.is_some(),
                onclick: move |_| state.write().toggle(),
                span {
                    class: "custom-select-value",
                    "data-placeholder": !has_value,
                    "{shown}"
                }
                span { class: "custom-select-chevron", "data-state": current.data_state(),
                    Icon { icon: FaChevronDown, width: 14, height: 14 }
                }
            }
            if current.is_mounted() {
                div {
                    class: "custom-select-content",
                    "data-state": current.data_state(),
                    onanimationend: move |_| state.write().finish_closing(),
                    ul { id: "{list_id}", role: "listbox",
                        for option in options.iter() {
                            CustomSelectItem {
                                key: "{option.value}",
                                option: option.clone(),
                                selected: option.value == selected_value,
                                on_choose: move |value: String| {
                                    let mut next = *state.peek();
                                    next.choose(value, |v| on_select.call(v));
                                    state.set(next);
                                },
                            }
                        }
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
fn CustomSelectItem(option: SelectOption, selected: bool, on_choose: EventHandler<String>) -> Element {
    let value = option.value.clone();

    rsx! {
        li {
            class: "custom-select-item",
            role: "option",
            aria_selected: selected,
            onclick: move |_| on_choose.call(value.clone()),
            "{option.label}"
        }
    }
}
