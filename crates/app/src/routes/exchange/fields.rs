use dioxus::prelude::*;
use shared_types::{ExchangeForm, FormField, SelectField, SelectOption};
use shared_ui::{CustomSelect, InputField, InputKind, RadioGroup, Textarea};

use super::submission::{apply_edit, FieldErrors};

fn update(
    mut form: Signal<ExchangeForm>,
    mut errors: Signal<FieldErrors>,
    field: FormField,
    value: String,
) {
    apply_edit(&mut form.write(), &mut errors.write(), field, value);
}

/// [`InputField`] bound to one text field of the exchange form.
#[component]
pub fn FormInput(
    field: FormField,
    label: String,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] kind: InputKind,
    #[props(default = false)] required: bool,
    form: Signal<ExchangeForm>,
    errors: Signal<FieldErrors>,
) -> Element {
    let key = field.key();

    rsx! {
        InputField {
            id: key.to_string(),
            label: label,
            placeholder: placeholder,
            kind: kind,
            required: required,
            value: form.read().get(field).to_string(),
            on_input: move |evt: FormEvent| update(form, errors, field, evt.value()),
            error: errors.read().get(key).cloned(),
        }
    }
}

#[component]
pub fn FormTextarea(
    field: FormField,
    label: String,
    placeholder: String,
    form: Signal<ExchangeForm>,
    errors: Signal<FieldErrors>,
) -> Element {
    let key = field.key();

    rsx! {
        Textarea {
            id: key.to_string(),
            label: label,
            placeholder: placeholder,
            value: form.read().get(field).to_string(),
            on_input: move |evt: FormEvent| update(form, errors, field, evt.value()),
            error: errors.read().get(key).cloned(),
        }
    }
}

/// [`CustomSelect`] writing into [`shared_types::FormSelections`].
#[component]
pub fn FormSelect(
    field: SelectField,
    label: String,
    options: Vec<SelectOption>,
    placeholder: String,
    form: Signal<ExchangeForm>,
    errors: Signal<FieldErrors>,
) -> Element {
    let field = FormField::Select(field);
    let key = field.key();

    rsx! {
        CustomSelect {
            id: key.to_string(),
            label: label,
            options: options,
            selected_value: form.read().get(field).to_string(),
            on_select: move |value: String| update(form, errors, field, value),
            placeholder: placeholder,
            error: errors.read().get(key).cloned(),
        }
    }
}

#[component]
pub fn FormRadio(
    field: FormField,
    label: String,
    options: Vec<SelectOption>,
    form: Signal<ExchangeForm>,
    errors: Signal<FieldErrors>,
) -> Element {
    let key = field.key();

    rsx! {
        RadioGroup {
            label: label,
            name: key.to_string(),
            options: options,
            selected: form.read().get(field).to_string(),
            on_change: move |value: String| update(form, errors, field, value),
            error: errors.read().get(key).cloned(),
        }
    }
}
