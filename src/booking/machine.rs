use chrono::NaiveDate;

use crate::models::BookingRequest;

use super::draft::{BookingDraft, FieldEdit};
use super::validation::validate_step1;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Contact details, date, guests and traveler classification.
    #[default]
    Basic,
    /// Food allergies, medical conditions and the submit button.
    Safety,
}

impl Step {
    pub fn number(&self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Safety => 2,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "Basic Info"),
            Self::Safety => write!(f, "Safety Info"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Editing(Step),
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Edit(FieldEdit),
    Next,
    Back,
    Submit,
    SubmissionSucceeded,
    SubmissionFailed(String),
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendBooking(BookingRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub form: BookingForm,
    pub effect: Option<Effect>,
}

/// One visitor's booking form for one tour.
///
/// Field values only change while editing; a failed submission lands back on
/// the safety step with the error set and every value intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    draft: BookingDraft,
    status: FormStatus,
    error: Option<String>,
    max_guests: u32,
    today: NaiveDate,
}

impl BookingForm {
    pub fn new(max_guests: u32, today: NaiveDate) -> Self {
        Self {
            draft: BookingDraft::default(),
            status: FormStatus::Editing(Step::Basic),
            error: None,
            max_guests,
            today,
        }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn max_guests(&self) -> u32 {
        self.max_guests
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn step(&self) -> Option<Step> {
        match self.status {
            FormStatus::Editing(step) => Some(step),
            FormStatus::Submitting => Some(Step::Safety),
            FormStatus::Succeeded => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn is_succeeded(&self) -> bool {
        self.status == FormStatus::Succeeded
    }

    /// Apply `event` in place, returning any effect to run.
    pub fn dispatch(&mut self, event: FormEvent) -> Option<Effect> {
        match (self.status, event) {
            (FormStatus::Editing(_), FormEvent::Edit(edit)) => {
                self.draft.apply(edit, self.max_guests);
                self.error = None;
                None
            }
            (FormStatus::Editing(Step::Basic), FormEvent::Next) => {
                match validate_step1(&self.draft, self.max_guests, self.today) {
                    Ok(()) => {
                        self.status = FormStatus::Editing(Step::Safety);
                        self.error = None;
                    }
                    Err(message) => self.error = Some(message),
                }
                None
            }
            (FormStatus::Editing(Step::Safety), FormEvent::Back) => {
                self.status = FormStatus::Editing(Step::Basic);
                None
            }
            (FormStatus::Editing(Step::Safety), FormEvent::Submit) => {
                self.status = FormStatus::Submitting;
                self.error = None;
                Some(Effect::SendBooking(self.draft.to_request()))
            }
            (FormStatus::Submitting, FormEvent::SubmissionSucceeded) => {
                self.status = FormStatus::Succeeded;
                self.draft = BookingDraft::default();
                self.error = None;
                None
            }
            (FormStatus::Submitting, FormEvent::SubmissionFailed(message)) => {
                self.status = FormStatus::Editing(Step::Safety);
                self.error = Some(message);
                None
            }
            // Everything else is a no-op for the current state.
            _ => None,
        }
    }
}

/// Pure reducer over [`BookingForm`].
pub fn reduce(mut form: BookingForm, event: FormEvent) -> Transition {
    let effect = form.dispatch(event);
    Transition { form, effect }
}
