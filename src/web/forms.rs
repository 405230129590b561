use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use storefront::booking::{BookingForm, FieldEdit, FormEvent};

use crate::web::security::new_form_id;

#[derive(Deserialize)]
pub struct SlugQuery {
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingAction {
    Next,
    Back,
    Submit,
}

impl From<BookingAction> for FormEvent {
    fn from(action: BookingAction) -> Self {
        match action {
            BookingAction::Next => FormEvent::Next,
            BookingAction::Back => FormEvent::Back,
            BookingAction::Submit => FormEvent::Submit,
        }
    }
}

/// Everything the booking section posts back.
///
/// The page carries the whole draft in the form (step 1 values ride along as
/// hidden inputs on step 2), so the server can rebuild the form state from a
/// single request.
#[derive(Debug, Default, Deserialize)]
pub struct BookingFormInput {
    pub form_id: Option<String>,
    pub step: Option<String>,
    pub action: Option<BookingAction>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub tour_date: Option<String>,
    pub guests: Option<String>,
    pub is_international: Option<String>,
    pub nationality: Option<String>,
    pub passport_number: Option<String>,
    pub country_of_residence: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub food_allergies: Option<String>,
    pub medical_conditions: Option<String>,
}

impl BookingFormInput {
    /// The posted instance id, or a fresh one if it is missing or garbled.
    pub fn form_id(&self) -> Uuid {
        self.form_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id.trim()).ok())
            .unwrap_or_else(new_form_id)
    }

    /// Missing actions behave like "next", the default button on step 1.
    pub fn action(&self) -> BookingAction {
        self.action.unwrap_or(BookingAction::Next)
    }

    fn on_safety_step(&self) -> bool {
        self.step.as_deref().map(str::trim) == Some("2")
    }

    /// Field edits for every value present in the post.
    pub fn edits(&self) -> Vec<FieldEdit> {
        let text_fields: [(&Option<String>, fn(String) -> FieldEdit); 12] = [
            (&self.full_name, FieldEdit::FullName),
            (&self.email, FieldEdit::Email),
            (&self.phone, FieldEdit::Phone),
            (&self.tour_date, FieldEdit::TourDate),
            (&self.guests, FieldEdit::Guests),
            (&self.nationality, FieldEdit::Nationality),
            (&self.passport_number, FieldEdit::PassportNumber),
            (&self.country_of_residence, FieldEdit::CountryOfResidence),
            (&self.emergency_contact_name, FieldEdit::EmergencyContactName),
            (&self.emergency_contact_phone, FieldEdit::EmergencyContactPhone),
            (&self.food_allergies, FieldEdit::FoodAllergies),
            (&self.medical_conditions, FieldEdit::MedicalConditions),
        ];

        let mut edits: Vec<FieldEdit> = text_fields
            .into_iter()
            .filter_map(|(value, edit)| value.clone().map(edit))
            .collect();

        if let Some(flag) = self.is_international.as_deref() {
            edits.push(FieldEdit::International(flag.trim() == "true"));
        }
        edits
    }

    /// Rebuild the form as the visitor last saw it.
    ///
    /// A post from step 2 re-runs the step 1 checks on the way, so tampered
    /// hidden inputs land the visitor back on step 1 with the error.
    pub fn replay(&self, max_guests: u32, today: NaiveDate) -> BookingForm {
        let mut form = BookingForm::new(max_guests, today);
        for edit in self.edits() {
            form.dispatch(FormEvent::Edit(edit));
        }
        if self.on_safety_step() {
            form.dispatch(FormEvent::Next);
        }
        form
    }
}
