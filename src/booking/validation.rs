use chrono::NaiveDate;

use super::draft::{BookingDraft, effective_max_guests};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks the basic-info step. The first failing check wins.
pub fn validate_step1(
    draft: &BookingDraft,
    max_guests: u32,
    today: NaiveDate,
) -> Result<(), String> {
    if is_blank(&draft.full_name) {
        return Err("Full name is required".into());
    }
    if is_blank(&draft.email) {
        return Err("Email is required".into());
    }
    if is_blank(&draft.phone) {
        return Err("Phone is required".into());
    }
    if is_blank(&draft.tour_date) {
        return Err("Tour date is required".into());
    }

    let date = NaiveDate::parse_from_str(draft.tour_date.trim(), DATE_FORMAT)
        .map_err(|_| "Tour date must be a valid date (YYYY-MM-DD)".to_string())?;
    if date < today {
        return Err("Tour date cannot be in the past".into());
    }

    let max = effective_max_guests(max_guests);
    if draft.guests < 1 || draft.guests > max {
        return Err(format!("Guests must be between 1 and {max}"));
    }

    if draft.is_international {
        let info = &draft.international;
        let required = [
            (&info.nationality, "Nationality is required"),
            (&info.passport_number, "Passport number is required"),
            (&info.country_of_residence, "Country of residence is required"),
            (&info.emergency_contact_name, "Emergency contact name is required"),
            (&info.emergency_contact_phone, "Emergency contact phone is required"),
        ];
        if let Some((_, message)) = required.iter().find(|(value, _)| is_blank(value)) {
            return Err((*message).to_string());
        }
    }

    Ok(())
}
