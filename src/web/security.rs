use std::collections::HashSet;
use std::sync::Mutex;
use uuid::Uuid;

/// Store slugs: 1..=255 ASCII letters, digits, hyphens and underscores.
pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > 255 {
        return false;
    }

    slug.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Identity of one rendered booking form.
pub fn new_form_id() -> Uuid {
    Uuid::new_v4()
}

/// Booking forms whose submission is currently awaiting the API.
///
/// At most one request per form is allowed in flight.
pub struct InFlightBookings {
    forms: Mutex<HashSet<Uuid>>,
}

impl InFlightBookings {
    pub fn new() -> Self {
        Self {
            forms: Mutex::new(HashSet::new()),
        }
    }

    /// Claim the slot for `form_id`. `None` if a request is already running.
    pub fn try_begin(&self, form_id: Uuid) -> Option<InFlightTicket<'_>> {
        let mut forms = self
            .forms
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if !forms.insert(form_id) {
            return None;
        }

        Some(InFlightTicket {
            registry: self,
            form_id,
        })
    }

    #[cfg(test)]
    pub fn is_in_flight(&self, form_id: Uuid) -> bool {
        self.forms
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(&form_id)
    }
}

impl Default for InFlightBookings {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases the form's slot when dropped.
pub struct InFlightTicket<'a> {
    registry: &'a InFlightBookings,
    form_id: Uuid,
}

impl Drop for InFlightTicket<'_> {
    fn drop(&mut self) {
        self.registry
            .forms
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&self.form_id);
    }
}
