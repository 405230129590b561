use crate::models::{BookingRequest, InternationalInfo};

/// A single field change coming from the form.
///
/// `Guests` carries the raw input so clamping happens at edit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    FullName(String),
    Email(String),
    Phone(String),
    TourDate(String),
    Guests(String),
    International(bool),
    Nationality(String),
    PassportNumber(String),
    CountryOfResidence(String),
    EmergencyContactName(String),
    EmergencyContactPhone(String),
    FoodAllergies(String),
    MedicalConditions(String),
}

/// Values typed into the booking form so far.
///
/// The international details are kept even while `is_international` is off,
/// so switching the answer back does not lose what was typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub tour_date: String,
    pub guests: u32,
    pub is_international: bool,
    pub international: InternationalInfo,
    pub food_allergies: String,
    pub medical_conditions: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            tour_date: String::new(),
            guests: 1,
            is_international: false,
            international: InternationalInfo::default(),
            food_allergies: String::new(),
            medical_conditions: String::new(),
        }
    }
}

/// A tour that advertises fewer than one seat still books one guest.
pub fn effective_max_guests(max_guests: u32) -> u32 {
    max_guests.max(1)
}

/// Clamp raw guest-count input into `[1, max_guests]`.
///
/// Non-numeric input becomes 1 and fractions are truncated.
pub fn clamp_guests(input: &str, max_guests: u32) -> u32 {
    let max = effective_max_guests(max_guests);
    let value = input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(f64::trunc)
        .unwrap_or(0.0);

    if value < 1.0 {
        1
    } else if value >= f64::from(max) {
        max
    } else {
        value as u32
    }
}

impl BookingDraft {
    pub fn apply(&mut self, edit: FieldEdit, max_guests: u32) {
        match edit {
            FieldEdit::FullName(v) => self.full_name = v,
            FieldEdit::Email(v) => self.email = v,
            FieldEdit::Phone(v) => self.phone = v,
            FieldEdit::TourDate(v) => self.tour_date = v,
            FieldEdit::Guests(raw) => self.guests = clamp_guests(&raw, max_guests),
            FieldEdit::International(flag) => self.is_international = flag,
            FieldEdit::Nationality(v) => self.international.nationality = v,
            FieldEdit::PassportNumber(v) => self.international.passport_number = v,
            FieldEdit::CountryOfResidence(v) => self.international.country_of_residence = v,
            FieldEdit::EmergencyContactName(v) => self.international.emergency_contact_name = v,
            FieldEdit::EmergencyContactPhone(v) => self.international.emergency_contact_phone = v,
            FieldEdit::FoodAllergies(v) => self.food_allergies = v,
            FieldEdit::MedicalConditions(v) => self.medical_conditions = v,
        }
    }

    /// Build the submission payload.
    ///
    /// International details only travel when the traveler is international;
    /// blank safety notes are left out entirely.
    pub fn to_request(&self) -> BookingRequest {
        BookingRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            tour_date: self.tour_date.clone(),
            guests: self.guests,
            is_international_traveler: self.is_international,
            international: self.is_international.then(|| self.international.clone()),
            food_allergies: optional_note(&self.food_allergies),
            medical_conditions: optional_note(&self.medical_conditions),
        }
    }
}

/// A note that is empty or only whitespace is left out of the payload.
/// Anything else is sent as typed.
fn optional_note(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}
