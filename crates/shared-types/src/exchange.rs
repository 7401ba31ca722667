use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::choice::Choice;
use crate::choice_enum;
use crate::error::AppError;

// ---------------------------------------------------------------------------
// Option sets
// ---------------------------------------------------------------------------

choice_enum! {
    /// Cities served by the exchange desk.
    pub enum City {
        Kathmandu => ("Kathmandu", "Kathmandu"),
        Pokhara => ("Pokhara", "Pokhara"),
        Lalitpur => ("Lalitpur", "Lalitpur (Patan)"),
        Biratnagar => ("Biratnagar", "Biratnagar"),
        Bhaktapur => ("Bhaktapur", "Bhaktapur"),
    }
}

choice_enum! {
    /// Body style of the vehicle being traded in.
    pub enum VehicleType {
        Sedan => ("sedan", "Sedan"),
        Suv => ("suv", "SUV"),
        Hatch => ("hatch", "Hatch"),
        Coupe => ("coupe", "Coupe"),
        Wagon => ("wagon", "Wagon"),
        Van => ("van", "Van"),
        PeopleMover => ("peoplemover", "People Mover"),
    }
}

choice_enum! {
    /// Paint colour. The value is the lowercased label.
    pub enum VehicleColor {
        White => ("white", "White"),
        Black => ("black", "Black"),
        Silver => ("silver", "Silver"),
        Grey => ("grey", "Grey"),
        Red => ("red", "Red"),
        Blue => ("blue", "Blue"),
        Maroon => ("maroon", "Maroon"),
        Brown => ("brown", "Brown"),
        Green => ("green", "Green"),
        Yellow => ("yellow", "Yellow"),
        Orange => ("orange", "Orange"),
        Gold => ("gold", "Gold"),
        Beige => ("beige", "Beige"),
        SkyBlue => ("sky blue", "Sky Blue"),
        PearlWhite => ("pearl white", "Pearl White"),
        MetallicSilver => ("metallic silver", "Metallic Silver"),
        GunmetalGrey => ("gunmetal grey", "Gunmetal Grey"),
        NavyBlue => ("navy blue", "Navy Blue"),
    }
}

choice_enum! {
    /// Budget bracket for the replacement EV.
    pub enum PriceRange {
        Above30Lakhs => ("above 30 lakhs", "Above 30 lakhs"),
        Above50Lakhs => ("above 50 lakhs", "Above 50 lakhs"),
        Above75Lakhs => ("above 75 lakhs", "Above 75 lakhs"),
        Above1Crore => ("above 1 crore", "Above 1 crore"),
    }
}

choice_enum! {
    pub enum FeatureLevel {
        Full => ("full", "Full Option"),
        Mid => ("mid", "Mid Option"),
        Unknown => ("unknown", "I don't know"),
    }
}

choice_enum! {
    pub enum FuelType {
        Petrol => ("petrol", "Petrol"),
        Diesel => ("diesel", "Diesel"),
        Electric => ("electric", "Electric"),
        Hybrid => ("hybrid", "Hybrid"),
    }
}

choice_enum! {
    pub enum VehicleCondition {
        LikeNew => ("new", "Like New"),
        MinimalDamage => ("minimal", "Minimal damage"),
        MechanicalIssues => ("mechanical", "Mechanical Issues"),
    }
}

choice_enum! {
    pub enum Transmission {
        Manual => ("manual", "Manual"),
        Automatic => ("automatic", "Automatic"),
    }
}

choice_enum! {
    /// Answer for the accidents and financing questions.
    pub enum YesNo {
        Yes => ("yes", "Yes"),
        No => ("no", "No"),
    }
}

// ---------------------------------------------------------------------------
// Limits shared by the form and `ExchangeRequest` validation
// ---------------------------------------------------------------------------

pub const MAX_NAME_LEN: u64 = 120;
pub const MAX_MODEL_LEN: u64 = 120;
pub const MAX_BRAND_LEN: u64 = 80;
pub const MAX_MAKE_YEAR_LEN: u64 = 32;
pub const MAX_NOTES_LEN: u64 = 2000;
pub const MAX_KM_DRIVEN: u32 = 2_000_000;

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// The four dropdown-backed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectField {
    City,
    VehicleType,
    VehicleColor,
    NewVehiclePriceRange,
}

/// Dropdown selections. Each field is empty or one option value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSelections {
    pub city: String,
    pub vehicle_type: String,
    pub vehicle_color: String,
    pub new_vehicle_price_range: String,
}

impl FormSelections {
    pub fn get(&self, field: SelectField) -> &str {
        match field {
            SelectField::City => &self.city,
            SelectField::VehicleType => &self.vehicle_type,
            SelectField::VehicleColor => &self.vehicle_color,
            SelectField::NewVehiclePriceRange => &self.new_vehicle_price_range,
        }
    }

    /// Replace one field, leaving the others untouched.
    pub fn set(&mut self, field: SelectField, value: impl Into<String>) {
        let slot = match field {
            SelectField::City => &mut self.city,
            SelectField::VehicleType => &mut self.vehicle_type,
            SelectField::VehicleColor => &mut self.vehicle_color,
            SelectField::NewVehiclePriceRange => &mut self.new_vehicle_price_range,
        };
        *slot = value.into();
    }
}

/// Every control on the exchange form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FullName,
    Email,
    Phone,
    Select(SelectField),
    VehicleModel,
    MakeYear,
    KmDriven,
    ExpectedValuation,
    Features,
    FuelType,
    Condition,
    Accidents,
    AccidentInfo,
    Transmission,
    NewVehicleBrand,
    NewVehicleModel,
    Downpayment,
    Finance,
    AdditionalInfo,
}

impl FormField {
    /// DOM id, input name and error key. Matches the `ExchangeRequest` field name.
    pub fn key(&self) -> &'static str {
        match self {
            FormField::FullName => "full_name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Select(SelectField::City) => "city",
            FormField::Select(SelectField::VehicleType) => "vehicle_type",
            FormField::Select(SelectField::VehicleColor) => "vehicle_color",
            FormField::Select(SelectField::NewVehiclePriceRange) => "new_vehicle_price_range",
            FormField::VehicleModel => "vehicle_model",
            FormField::MakeYear => "make_year",
            FormField::KmDriven => "km_driven",
            FormField::ExpectedValuation => "expected_valuation",
            FormField::Features => "features",
            FormField::FuelType => "fuel_type",
            FormField::Condition => "condition",
            FormField::Accidents => "accidents",
            FormField::AccidentInfo => "accident_info",
            FormField::Transmission => "transmission",
            FormField::NewVehicleBrand => "new_vehicle_brand",
            FormField::NewVehicleModel => "new_vehicle_model",
            FormField::Downpayment => "downpayment",
            FormField::Finance => "finance",
            FormField::AdditionalInfo => "additional_info",
        }
    }
}

/// Every value the exchange form collects, tracked explicitly.
///
/// Values are kept as typed text until submit; [`ExchangeForm::to_request`]
/// parses them into an [`ExchangeRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub selections: FormSelections,
    pub vehicle_model: String,
    pub make_year: String,
    pub km_driven: String,
    pub expected_valuation: String,
    pub features: String,
    pub fuel_type: String,
    pub condition: String,
    pub accidents: String,
    pub accident_info: String,
    pub transmission: String,
    pub new_vehicle_brand: String,
    pub new_vehicle_model: String,
    pub downpayment: String,
    pub finance: String,
    pub additional_info: String,
}

impl ExchangeForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Select(select) => self.selections.get(select),
            _ => self.text_slot(field).map(|s| s.as_str()).unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        match field {
            FormField::Select(select) => self.selections.set(select, value),
            _ => {
                if let Some(slot) = self.text_slot_mut(field) {
                    *slot = value.into();
                }
            }
        }
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn text_slot(&self, field: FormField) -> Option<&String> {
        let slot = match field {
            FormField::FullName => &self.full_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::VehicleModel => &self.vehicle_model,
            FormField::MakeYear => &self.make_year,
            FormField::KmDriven => &self.km_driven,
            FormField::ExpectedValuation => &self.expected_valuation,
            FormField::Features => &self.features,
            FormField::FuelType => &self.fuel_type,
            FormField::Condition => &self.condition,
            FormField::Accidents => &self.accidents,
            FormField::AccidentInfo => &self.accident_info,
            FormField::Transmission => &self.transmission,
            FormField::NewVehicleBrand => &self.new_vehicle_brand,
            FormField::NewVehicleModel => &self.new_vehicle_model,
            FormField::Downpayment => &self.downpayment,
            FormField::Finance => &self.finance,
            FormField::AdditionalInfo => &self.additional_info,
            FormField::Select(_) => return None,
        };
        Some(slot)
    }

    fn text_slot_mut(&mut self, field: FormField) -> Option<&mut String> {
        let slot = match field {
            FormField::FullName => &mut self.full_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::VehicleModel => &mut self.vehicle_model,
            FormField::MakeYear => &mut self.make_year,
            FormField::KmDriven => &mut self.km_driven,
            FormField::ExpectedValuation => &mut self.expected_valuation,
            FormField::Features => &mut self.features,
            FormField::FuelType => &mut self.fuel_type,
            FormField::Condition => &mut self.condition,
            FormField::Accidents => &mut self.accidents,
            FormField::AccidentInfo => &mut self.accident_info,
            FormField::Transmission => &mut self.transmission,
            FormField::NewVehicleBrand => &mut self.new_vehicle_brand,
            FormField::NewVehicleModel => &mut self.new_vehicle_model,
            FormField::Downpayment => &mut self.downpayment,
            FormField::Finance => &mut self.finance,
            FormField::AdditionalInfo => &mut self.additional_info,
            FormField::Select(_) => return None,
        };
        Some(slot)
    }

    /// Validate the form and assemble the request sent to the intake service.
    ///
    /// On failure every offending field is reported at once, keyed by
    /// [`FormField::key`].
    pub fn to_request(&self) -> Result<ExchangeRequest, AppError> {
        let mut errors = FieldErrors::default();

        let full_name = errors.required(FormField::FullName, &self.full_name);
        errors.max_len(FormField::FullName, &full_name, MAX_NAME_LEN, "Full name is too long");
        let email = errors.required(FormField::Email, &self.email);
        if !email.is_empty() && !looks_like_email(&email) {
            errors.add(FormField::Email, "Enter a valid email address");
        }
        let phone = errors.required(FormField::Phone, &self.phone);
        let phone = if phone.is_empty() {
            phone
        } else {
            normalize_phone(&phone).unwrap_or_else(|| {
                errors.add(FormField::Phone, "Enter a 10-digit phone number");
                String::new()
            })
        };
        let city = errors.required_choice::<City>(FormField::Select(SelectField::City), &self.selections.city);

        let vehicle_model = errors.required(FormField::VehicleModel, &self.vehicle_model);
        errors.max_len(FormField::VehicleModel, &vehicle_model, MAX_MODEL_LEN, "Vehicle model is too long");
        let vehicle_type = errors.required_choice::<VehicleType>(
            FormField::Select(SelectField::VehicleType),
            &self.selections.vehicle_type,
        );
        let make_year = errors.required(FormField::MakeYear, &self.make_year);
        if !make_year.is_empty() && leading_year(&make_year).is_none() {
            errors.add(FormField::MakeYear, "Start with a four-digit year, e.g. 2078 (2021)");
        }
        errors.max_len(FormField::MakeYear, &make_year, MAX_MAKE_YEAR_LEN, "Make year is too long");
        let vehicle_color = errors.required_choice::<VehicleColor>(
            FormField::Select(SelectField::VehicleColor),
            &self.selections.vehicle_color,
        );
        let km_driven = errors
            .required_amount(FormField::KmDriven, &self.km_driven)
            .and_then(|km| match u32::try_from(km) {
                Ok(km) if km <= MAX_KM_DRIVEN => Some(km),
                _ => {
                    errors.add(FormField::KmDriven, "Kilometres driven looks too high");
                    None
                }
            });
        let expected_valuation = errors
            .required_amount(FormField::ExpectedValuation, &self.expected_valuation)
            .filter(|amount| {
                let positive = *amount > 0;
                if !positive {
                    errors.add(
                        FormField::ExpectedValuation,
                        "Expected valuation must be greater than zero",
                    );
                }
                positive
            });

        let features = errors.optional_choice(FormField::Features, &self.features);
        let fuel_type = errors.optional_choice(FormField::FuelType, &self.fuel_type);
        let condition = errors.optional_choice(FormField::Condition, &self.condition);
        let accidents = errors.optional_choice(FormField::Accidents, &self.accidents);
        let transmission = errors.optional_choice(FormField::Transmission, &self.transmission);

        let new_vehicle_price_range = errors.optional_choice(
            FormField::Select(SelectField::NewVehiclePriceRange),
            &self.selections.new_vehicle_price_range,
        );
        let downpayment = errors.optional_amount(FormField::Downpayment, &self.downpayment);
        let finance = errors.optional_choice(FormField::Finance, &self.finance);

        let accident_info = non_empty(&self.accident_info);
        let new_vehicle_brand = non_empty(&self.new_vehicle_brand);
        let new_vehicle_model = non_empty(&self.new_vehicle_model);
        let additional_info = non_empty(&self.additional_info);
        let notes_too_long = "Keep the description under 2000 characters";
        errors.max_len_opt(FormField::AccidentInfo, &accident_info, MAX_NOTES_LEN, notes_too_long);
        errors.max_len_opt(FormField::NewVehicleBrand, &new_vehicle_brand, MAX_BRAND_LEN, "Brand is too long");
        errors.max_len_opt(FormField::NewVehicleModel, &new_vehicle_model, MAX_MODEL_LEN, "Model is too long");
        errors.max_len_opt(FormField::AdditionalInfo, &additional_info, MAX_NOTES_LEN, notes_too_long);

        if !errors.is_empty() {
            return Err(errors.into_app_error());
        }

        // Every required value parsed above, so the `Option`s are populated.
        match (city, vehicle_type, vehicle_color, km_driven, expected_valuation) {
            (
                Some(city),
                Some(vehicle_type),
                Some(vehicle_color),
                Some(km_driven),
                Some(expected_valuation),
            ) => Ok(ExchangeRequest {
                full_name,
                email,
                phone,
                city,
                vehicle_model,
                vehicle_type,
                make_year,
                vehicle_color,
                km_driven,
                expected_valuation,
                features,
                fuel_type,
                condition,
                accidents,
                accident_info,
                transmission,
                new_vehicle_brand,
                new_vehicle_model,
                new_vehicle_price_range,
                downpayment,
                finance,
                additional_info,
            }),
            _ => Err(AppError::internal("Form validation left a required field unset")),
        }
    }
}

/// Accumulates per-field messages while a form is being validated.
#[derive(Debug, Default)]
struct FieldErrors(HashMap<String, String>);

impl FieldErrors {
    fn add(&mut self, field: FormField, message: &str) {
        self.0
            .entry(field.key().to_string())
            .or_insert_with(|| message.to_string());
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn required(&mut self, field: FormField, raw: &str) -> String {
        let value = raw.trim();
        if value.is_empty() {
            self.add(field, "This field is required");
        }
        value.to_string()
    }

    /// Character count, matching `validator`'s `length`.
    fn max_len(&mut self, field: FormField, value: &str, max: u64, message: &str) {
        if value.chars().count() as u64 > max {
            self.add(field, message);
        }
    }

    fn max_len_opt(&mut self, field: FormField, value: &Option<String>, max: u64, message: &str) {
        if let Some(value) = value {
            self.max_len(field, value, max, message);
        }
    }

    fn required_choice<C: Choice>(&mut self, field: FormField, raw: &str) -> Option<C> {
        if raw.is_empty() {
            self.add(field, "Please make a selection");
            return None;
        }
        self.optional_choice(field, raw)
    }

    fn optional_choice<C: Choice>(&mut self, field: FormField, raw: &str) -> Option<C> {
        if raw.is_empty() {
            return None;
        }
        let parsed = C::from_value(raw);
        if parsed.is_none() {
            self.add(field, "Choose one of the listed options");
        }
        parsed
    }

    fn required_amount(&mut self, field: FormField, raw: &str) -> Option<u64> {
        if raw.trim().is_empty() {
            self.add(field, "This field is required");
            return None;
        }
        self.optional_amount(field, raw)
    }

    fn optional_amount(&mut self, field: FormField, raw: &str) -> Option<u64> {
        if raw.trim().is_empty() {
            return None;
        }
        let parsed = parse_amount(raw);
        if parsed.is_none() {
            self.add(field, "Enter a whole number");
        }
        parsed
    }

    fn into_app_error(self) -> AppError {
        AppError::validation("Please correct the highlighted fields", self.0)
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Minimal shape check; the server applies full RFC validation.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Strip separators and an optional `+977` prefix; expect ten digits.
fn normalize_phone(value: &str) -> Option<String> {
    let compact: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    let local = compact.strip_prefix("+977").unwrap_or(&compact);
    (local.len() == 10 && local.chars().all(|c| c.is_ascii_digit())).then(|| local.to_string())
}

fn leading_year(value: &str) -> Option<u16> {
    let digits: String = value.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.len() == 4 {
        digits.parse().ok()
    } else {
        None
    }
}

/// Parse amounts typed with grouping (`35,000`, `NPR 12,50,000`).
fn parse_amount(value: &str) -> Option<u64> {
    let trimmed = value.trim();
    let body = trimmed
        .strip_prefix("NPR")
        .or_else(|| trimmed.strip_prefix("Rs."))
        .or_else(|| trimmed.strip_prefix("Rs"))
        .unwrap_or(trimmed)
        .trim();
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit() || c == ',') {
        return None;
    }
    body.chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .ok()
}

// ---------------------------------------------------------------------------
// Request / response DTOs
// ---------------------------------------------------------------------------

/// A vehicle exchange request as accepted by the intake service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ExchangeRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = MAX_NAME_LEN, message = "Full name is required"))
    )]
    pub full_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(equal = 10, message = "Enter a 10-digit phone number"))
    )]
    pub phone: String,
    pub city: City,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = MAX_MODEL_LEN, message = "Vehicle model is required"))
    )]
    pub vehicle_model: String,
    pub vehicle_type: VehicleType,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 4, max = MAX_MAKE_YEAR_LEN, message = "Start with a four-digit year"))
    )]
    pub make_year: String,
    pub vehicle_color: VehicleColor,
    #[cfg_attr(
        feature = "validation",
        validate(range(max = MAX_KM_DRIVEN, message = "Kilometres driven looks too high"))
    )]
    pub km_driven: u32,
    /// Expected valuation in NPR.
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Expected valuation must be greater than zero"))
    )]
    pub expected_valuation: u64,
    #[serde(default)]
    pub features: Option<FeatureLevel>,
    #[serde(default)]
    pub fuel_type: Option<FuelType>,
    #[serde(default)]
    pub condition: Option<VehicleCondition>,
    #[serde(default)]
    pub accidents: Option<YesNo>,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(max = MAX_NOTES_LEN, message = "Keep the description under 2000 characters"))
    )]
    pub accident_info: Option<String>,
    #[serde(default)]
    pub transmission: Option<Transmission>,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(max = MAX_BRAND_LEN, message = "Brand is too long"))
    )]
    pub new_vehicle_brand: Option<String>,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(max = MAX_MODEL_LEN, message = "Model is too long"))
    )]
    pub new_vehicle_model: Option<String>,
    #[serde(default)]
    pub new_vehicle_price_range: Option<PriceRange>,
    /// Downpayment in NPR.
    #[serde(default)]
    pub downpayment: Option<u64>,
    #[serde(default)]
    pub finance: Option<YesNo>,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(max = MAX_NOTES_LEN, message = "Keep the description under 2000 characters"))
    )]
    pub additional_info: Option<String>,
}

/// Acknowledgement returned once a request is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExchangeReceipt {
    /// Reference quoted when the team calls back.
    pub reference: String,
    /// RFC 3339 timestamp.
    pub received_at: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use pretty_assertions::assert_eq;

    fn filled_form() -> ExchangeForm {
        let mut form = ExchangeForm {
            full_name: "Prajwol Shrestha".into(),
            email: "prajwolstha@example.com".into(),
            phone: "98 1234 5678".into(),
            vehicle_model: "Maruti Suzuki Alto 800".into(),
            make_year: "2078 (2021)".into(),
            km_driven: "35,000".into(),
            expected_valuation: "NPR 12,50,000".into(),
            ..ExchangeForm::default()
        };
        form.selections.set(SelectField::City, "Pokhara");
        form.selections.set(SelectField::VehicleType, "hatch");
        form.selections.set(SelectField::VehicleColor, "sky blue");
        form
    }

    fn field_errors(form: &ExchangeForm) -> HashMap<String, String> {
        let err = form.to_request().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        err.field_errors
    }

    #[test]
    fn option_lists_match_the_page() {
        assert_eq!(City::options().len(), 5);
        assert_eq!(VehicleType::options().len(), 7);
        assert_eq!(VehicleColor::options().len(), 18);
        assert_eq!(PriceRange::options().len(), 4);
        assert_eq!(City::Lalitpur.label(), "Lalitpur (Patan)");
        assert_eq!(VehicleType::PeopleMover.value(), "peoplemover");
    }

    #[test]
    fn color_values_are_lowercased_labels() {
        for color in VehicleColor::ALL {
            assert_eq!(color.value(), color.label().to_lowercase());
        }
    }

    #[test]
    fn selections_set_touches_one_field() {
        let mut selections = FormSelections::default();
        selections.set(SelectField::City, "Pokhara");
        assert_eq!(selections.city, "Pokhara");
        assert_eq!(selections.vehicle_type, "");
        assert_eq!(selections.vehicle_color, "");
        assert_eq!(selections.new_vehicle_price_range, "");
    }

    #[test]
    fn form_get_set_routes_selects_to_selections() {
        let mut form = ExchangeForm::default();
        form.set(FormField::Select(SelectField::VehicleColor), "red");
        form.set(FormField::KmDriven, "12000");
        assert_eq!(form.selections.vehicle_color, "red");
        assert_eq!(form.get(FormField::Select(SelectField::VehicleColor)), "red");
        assert_eq!(form.get(FormField::KmDriven), "12000");
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = filled_form();
        form.finance = "yes".into();
        form.reset();
        assert_eq!(form, ExchangeForm::default());
    }

    #[test]
    fn valid_form_builds_typed_request() {
        let mut form = filled_form();
        form.fuel_type = "petrol".into();
        form.accidents = "no".into();
        form.downpayment = "500000".into();
        form.selections.set(SelectField::NewVehiclePriceRange, "above 50 lakhs");
        form.new_vehicle_brand = "  ".into();

        let req = form.to_request().unwrap();
        assert_eq!(req.phone, "9812345678");
        assert_eq!(req.city, City::Pokhara);
        assert_eq!(req.vehicle_type, VehicleType::Hatch);
        assert_eq!(req.vehicle_color, VehicleColor::SkyBlue);
        assert_eq!(req.km_driven, 35_000);
        assert_eq!(req.expected_valuation, 1_250_000);
        assert_eq!(req.fuel_type, Some(FuelType::Petrol));
        assert_eq!(req.accidents, Some(YesNo::No));
        assert_eq!(req.new_vehicle_price_range, Some(PriceRange::Above50Lakhs));
        assert_eq!(req.downpayment, Some(500_000));
        assert_eq!(req.new_vehicle_brand, None);
        assert_eq!(req.transmission, None);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = field_errors(&ExchangeForm::default());
        let mut keys: Vec<_> = errors.keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "city",
                "email",
                "expected_valuation",
                "full_name",
                "km_driven",
                "make_year",
                "phone",
                "vehicle_color",
                "vehicle_model",
                "vehicle_type",
            ]
        );
    }

    #[test]
    fn malformed_email_and_phone_are_rejected() {
        let mut form = filled_form();
        form.email = "prajwol@localhost".into();
        form.phone = "12345".into();
        let errors = field_errors(&form);
        assert_eq!(errors["email"], "Enter a valid email address");
        assert_eq!(errors["phone"], "Enter a 10-digit phone number");
    }

    #[test]
    fn phone_accepts_country_prefix() {
        let mut form = filled_form();
        form.phone = "+977-9812345678".into();
        assert_eq!(form.to_request().unwrap().phone, "9812345678");
    }

    #[test]
    fn unknown_selection_value_is_rejected() {
        let mut form = filled_form();
        form.selections.set(SelectField::City, "Dharan");
        form.transmission = "cvt".into();
        let errors = field_errors(&form);
        assert_eq!(errors["city"], "Choose one of the listed options");
        assert_eq!(errors["transmission"], "Choose one of the listed options");
    }

    #[test]
    fn non_numeric_amounts_are_rejected() {
        let mut form = filled_form();
        form.km_driven = "about 35k".into();
        form.downpayment = "-10".into();
        let errors = field_errors(&form);
        assert_eq!(errors["km_driven"], "Enter a whole number");
        assert_eq!(errors["downpayment"], "Enter a whole number");
    }

    #[test]
    fn make_year_needs_leading_year() {
        let mut form = filled_form();
        form.make_year = "twenty21".into();
        assert!(field_errors(&form).contains_key("make_year"));
    }

    #[test]
    fn request_serializes_option_values() {
        let req = filled_form().to_request().unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["city"], "Pokhara");
        assert_eq!(json["vehicle_color"], "sky blue");
        assert_eq!(json["features"], serde_json::Value::Null);
    }

    #[test]
    fn request_rejects_unknown_enum_value_on_the_wire() {
        let mut json = serde_json::to_value(filled_form().to_request().unwrap()).unwrap();
        json["vehicle_type"] = "tractor".into();
        assert!(serde_json::from_value::<ExchangeRequest>(json).is_err());
    }

    #[test]
    fn oversized_values_are_caught_on_the_client() {
        let mut form = filled_form();
        form.full_name = "a".repeat(MAX_NAME_LEN as usize + 1);
        form.make_year = format!("2078 {}", "x".repeat(MAX_MAKE_YEAR_LEN as usize));
        form.km_driven = "2,000,001".into();
        form.new_vehicle_brand = "b".repeat(MAX_BRAND_LEN as usize + 1);
        form.additional_info = "c".repeat(MAX_NOTES_LEN as usize + 1);
        let errors = field_errors(&form);
        assert_eq!(errors["full_name"], "Full name is too long");
        assert_eq!(errors["make_year"], "Make year is too long");
        assert_eq!(errors["km_driven"], "Kilometres driven looks too high");
        assert_eq!(errors["new_vehicle_brand"], "Brand is too long");
        assert_eq!(errors["additional_info"], "Keep the description under 2000 characters");
    }

    #[test]
    fn km_beyond_u32_is_an_error_not_a_cap() {
        let mut form = filled_form();
        form.km_driven = "99999999999".into();
        assert_eq!(field_errors(&form)["km_driven"], "Kilometres driven looks too high");
    }

    #[test]
    fn zero_valuation_is_caught_on_the_client() {
        let mut form = filled_form();
        form.expected_valuation = "0".into();
        assert_eq!(
            field_errors(&form)["expected_valuation"],
            "Expected valuation must be greater than zero"
        );
    }

    #[test]
    fn values_at_the_limits_are_accepted() {
        let mut form = filled_form();
        form.full_name = "a".repeat(MAX_NAME_LEN as usize);
        form.km_driven = MAX_KM_DRIVEN.to_string();
        form.new_vehicle_model = "m".repeat(MAX_MODEL_LEN as usize);
        let req = form.to_request().unwrap();
        assert_eq!(req.km_driven, MAX_KM_DRIVEN);
    }

    #[cfg(feature = "validation")]
    #[test]
    fn server_accepts_whatever_the_client_accepts_at_the_limits() {
        let mut form = filled_form();
        form.full_name = "a".repeat(MAX_NAME_LEN as usize);
        form.make_year = format!("2078{}", "x".repeat(MAX_MAKE_YEAR_LEN as usize - 4));
        form.km_driven = MAX_KM_DRIVEN.to_string();
        form.accident_info = "d".repeat(MAX_NOTES_LEN as usize);
        let req = form.to_request().unwrap();
        assert!(req.validate().is_ok());

        let mut over = req.clone();
        over.km_driven = MAX_KM_DRIVEN + 1;
        assert!(over.validate().is_err());
    }
}
