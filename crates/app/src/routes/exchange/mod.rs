mod fields;
pub mod submission;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronRight, FaCircleCheck, FaHouse};
use dioxus_free_icons::Icon;
use shared_types::{
    City, Choice, ExchangeForm, ExchangeReceipt, FeatureLevel, FormField, FuelType, PriceRange, SelectField,
    Transmission, VehicleColor, VehicleCondition, VehicleType, YesNo,
};
use shared_ui::{
    use_toast, Button, ButtonType, ButtonVariant, DialogDescription, DialogTitle, Form, InputKind,
    SubmitPortal, ToastOptions,
};

use crate::routes::Route;
use fields::{FormInput, FormRadio, FormSelect, FormTextarea};
use submission::{clear_form, dismiss_overlay, FailureFeedback, FieldErrors, SubmissionPhase};

const BACKGROUND_IMAGE: &str = "https://plus.unsplash.com/premium_photo-1751800932672-2c3743e77062?w=600&auto=format&fit=crop&q=60&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxmZWF0dXJlZC1waG90b3MtZmVlZHwzNnx8fGVufDB8fHx8fA%3D%3D";
const PORTAL_IMAGE: &str =
    "https://images.unsplash.com/photo-1617704548623-340376564e68?auto=format&fit=crop&w=800&q=80";

/// Vehicle exchange intake page.
#[component]
pub fn Exchange() -> Element {
    let toast = use_toast();

    let mut form = use_signal(ExchangeForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut phase = use_signal(SubmissionPhase::default);

    let handle_submit = move |_: FormEvent| {
        if phase.peek().is_submitting() || phase.peek().is_overlay_open() {
            return;
        }

        let request = match form.peek().to_request() {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(fields = err.field_errors.len(), "exchange form invalid");
                errors.set(err.field_errors);
                return;
            }
        };

        if !phase.write().begin() {
            return;
        }
        errors.write().clear();

        spawn(async move {
            match server::api::submit_exchange_request(request).await {
                Ok(receipt) => {
                    tracing::info!(reference = %receipt.reference, "exchange request submitted");
                    phase.write().succeed(receipt);
                }
                Err(e) => {
                    phase.write().fail();
                    match FailureFeedback::from_server_error(&e.to_string()) {
                        FailureFeedback::Fields(fields) => errors.set(fields),
                        FailureFeedback::Toast(message) => {
                            toast.error(message, ToastOptions::new());
                        }
                    }
                }
            }
        });
    };

    let handle_reset = move |_: FormEvent| {
        clear_form(&mut form.write(), &mut errors.write());
    };

    let close_portal = move |_: ()| {
        dismiss_overlay(&mut phase.write(), &mut form.write(), &mut errors.write());
    };

    let submitting = phase.read().is_submitting();
    let receipt = phase.read().receipt().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./exchange.css") }

        main { class: "exchange-page",
            header { class: "exchange-header",
                nav { class: "breadcrumb", aria_label: "Breadcrumb",
                    Link { to: Route::Home {}, class: "breadcrumb-home",
                        Icon { icon: FaHouse, width: 14, height: 14 }
                        "Home"
                    }
                    span { class: "breadcrumb-separator",
                        Icon { icon: FaChevronRight, width: 12, height: 12 }
                    }
                    span { class: "breadcrumb-current", "Exchange to EV" }
                }
                h1 { class: "page-title",
                    "Exchange To "
                    span { class: "brand-gradient", "EV" }
                }
                p { class: "page-subtitle", "Your one-stop destination for electric vehicle exchange" }
            }

            div {
                class: "exchange-backdrop",
                style: "background-image: url('{BACKGROUND_IMAGE}')",
                div { class: "exchange-backdrop-shade" }
                Form {
                    class: "exchange-form",
                    onsubmit: handle_submit,
                    onreset: handle_reset,
                    div { class: "exchange-grid",
                        h2 { class: "exchange-section", "1. Owner Details" }
                        FormInput {
                            field: FormField::FullName,
                            label: "Full Name",
                            placeholder: "prajwol",
                            required: true,
                            form: form,
                            errors: errors,
                        }
                        FormInput {
                            field: FormField::Email,
                            label: "Email Address",
                            placeholder: "prajwolstha@example.com",
                            kind: InputKind::Email,
                            required: true,
                            form: form,
                            errors: errors,
                        }
                        FormInput {
                            field: FormField::Phone,
                            label: "Phone Number",
                            placeholder: "98XXXXXXXX",
                            kind: InputKind::Tel,
                            required: true,
                            form: form,
                            errors: errors,
                        }
                        FormSelect {
                            field: SelectField::City,
                            label: "City",
                            options: City::options(),
                            placeholder: "Select your city",
                            form: form,
                            errors: errors,
                        }

                        h2 { class: "exchange-section", "2. Vehicle Details" }
                        FormInput {
                            field: FormField::VehicleModel,
                            label: "Vehicle Model",
                            placeholder: "e.g., Maruti Suzuki Alto 800",
                            required: true,
                            form: form,
                            errors: errors,
                        }
                        FormSelect {
                            field: SelectField::VehicleType,
                            label: "Vehicle Type",
                            options: VehicleType::options(),
                            placeholder: "Select your vehicle type",
                            form: form,
                            errors: errors,
                        }
                        FormInput {
                            field: FormField::MakeYear,
                            label: "Make year",
                            placeholder: "e.g., 2078 (2021)",
                            required: true,
                            form: form,
                            errors: errors,
                        }
                        FormSelect {
                            field: SelectField::VehicleColor,
                            label: "Vehicle Color",
                            options: VehicleColor::options(),
                            placeholder: "Select vehicle color",
                            form: form,
                            errors: errors,
                        }
                        FormInput {
                            field: FormField::KmDriven,
                            label: "KM driven",
                            placeholder: "e.g., 35,000",
                            required: true,
                            form: form,
                            errors: errors,
                        }
                        FormInput {
                            field: FormField::ExpectedValuation,
                            label: "Expected Valuation amount (in NPR)",
                            placeholder: "e.g., NPR 12,50,000",
                            required: true,
                            form: form,
                            errors: errors,
                        }
                        FormRadio {
                            field: FormField::Features,
                            label: "Features:",
                            options: FeatureLevel::options(),
                            form: form,
                            errors: errors,
                        }
                        FormRadio {
                            field: FormField::FuelType,
                            label: "Fuel Type:",
                            options: FuelType::options(),
                            form: form,
                            errors: errors,
                        }
                        hr { class: "exchange-rule" }
                        FormRadio {
                            field: FormField::Condition,
                            label: "Vehicle Condition:",
                            options: VehicleCondition::options(),
                            form: form,
                            errors: errors,
                        }
                        hr { class: "exchange-rule" }
                        FormRadio {
                            field: FormField::Accidents,
                            label: "Accidents:",
                            options: YesNo::options(),
                            form: form,
                            errors: errors,
                        }
                        div { class: "exchange-wide",
                            FormTextarea {
                                field: FormField::AccidentInfo,
                                label: "Additional Information (accidents/damages)",
                                placeholder: "Describe any past accidents or current damages...",
                                form: form,
                                errors: errors,
                            }
                        }
                        hr { class: "exchange-rule" }
                        FormRadio {
                            field: FormField::Transmission,
                            label: "Transmission:",
                            options: Transmission::options(),
                            form: form,
                            errors: errors,
                        }

                        h2 { class: "exchange-section", "3. New Vehicle Details" }
                        FormInput {
                            field: FormField::NewVehicleBrand,
                            label: "Vehicle Brand",
                            placeholder: "Leave empty if not applicable",
                            form: form,
                            errors: errors,
                        }
                        FormInput {
                            field: FormField::NewVehicleModel,
                            label: "Vehicle Model",
                            placeholder: "Leave empty if not applicable",
                            form: form,
                            errors: errors,
                        }
                        FormSelect {
                            field: SelectField::NewVehiclePriceRange,
                            label: "Price Range",
                            options: PriceRange::options(),
                            placeholder: "Select price range",
                            form: form,
                            errors: errors,
                        }
                        FormInput {
                            field: FormField::Downpayment,
                            label: "Downpayment amount",
                            placeholder: "NPR",
                            kind: InputKind::Number,
                            form: form,
                            errors: errors,
                        }
                        FormRadio {
                            field: FormField::Finance,
                            label: "Looking to Finance?:",
                            options: YesNo::options(),
                            form: form,
                            errors: errors,
                        }
                        div { class: "exchange-wide",
                            FormTextarea {
                                field: FormField::AdditionalInfo,
                                label: "Additional Information",
                                placeholder: "Any other requirements or details...",
                                form: form,
                                errors: errors,
                            }
                        }

                        div { class: "exchange-actions",
                            Button {
                                button_type: ButtonType::Submit,
                                disabled: submitting,
                                if submitting { "Submitting..." } else { "Submit" }
                            }
                            Button {
                                button_type: ButtonType::Reset,
                                variant: ButtonVariant::Outline,
                                disabled: submitting,
                                "Reset"
                            }
                        }
                    }
                }
            }

            SubmissionConfirmation { receipt: receipt, on_close: close_portal }
        }
    }
}

/// Overlay confirming an accepted request. Open while `receipt` is set.
#[component]
fn SubmissionConfirmation(receipt: Option<ExchangeReceipt>, on_close: EventHandler<()>) -> Element {
    let open = receipt.is_some();
    let (message, reference) = receipt
        .map(|r| (r.message, r.reference))
        .unwrap_or_default();

    rsx! {
        SubmitPortal { open: open, on_close: on_close,
            img { class: "portal-image", src: PORTAL_IMAGE, alt: "Electric car charging" }
            div { class: "portal-icon",
                Icon { icon: FaCircleCheck, width: 48, height: 48 }
            }
            DialogTitle { "Request Submitted!" }
            DialogDescription { "{message}" }
            if !reference.is_empty() {
                p { class: "portal-reference", "Reference: {reference}" }
            }
            Button { onclick: move |_| on_close.call(()), "Sounds Good!" }
        }
    }
}
