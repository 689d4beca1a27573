//! Modal dialogs and their form lifecycle.
//!
//! At most one modal is open. Opening replaces whatever was open, and every
//! way of dismissing a modal (backdrop, close control, successful submit)
//! ends in [`ModalController::close`], which drops the payload and the draft
//! together.
//!
//! Submissions are tracked by [`SubmitTicket`]. A completion whose ticket is no
//! longer current, because the modal was closed or replaced while the request
//! was in flight, is ignored.

use crate::catalog::Plan;
use crate::content::JobPosting;
use crate::error::{FormError, SubmitError};
use crate::form::{Field, FormDraft, FormKind};
use crate::notice::Notice;
use crate::submit::failure_notice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    None,
    QuickOrder,
    Preregister,
    JobApplication,
}

/// An open modal together with the entity it targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveModal {
    QuickOrder { plan: Option<&'static Plan> },
    Preregister,
    /// `None` is the general application.
    JobApplication { job: Option<&'static JobPosting> },
}

impl ActiveModal {
    pub fn kind(&self) -> ModalKind {
        match self {
            ActiveModal::QuickOrder { .. } => ModalKind::QuickOrder,
            ActiveModal::Preregister => ModalKind::Preregister,
            ActiveModal::JobApplication { .. } => ModalKind::JobApplication,
        }
    }

    pub fn form_kind(&self) -> FormKind {
        match self {
            ActiveModal::QuickOrder { .. } => FormKind::QuickOrder,
            ActiveModal::Preregister => FormKind::Preregister,
            ActiveModal::JobApplication { .. } => FormKind::JobApplication,
        }
    }

    pub fn title(&self) -> String {
        match self {
            ActiveModal::QuickOrder { plan: Some(plan) } => format!("Quick order: {}", plan.title),
            ActiveModal::QuickOrder { plan: None } => "Quick order".to_string(),
            ActiveModal::Preregister => "Get early access to the app".to_string(),
            ActiveModal::JobApplication { job: Some(job) } => format!("Apply: {}", job.title),
            ActiveModal::JobApplication { job: None } => "General application".to_string(),
        }
    }

    /// Whether submitting goes over the network.
    pub fn is_remote(&self) -> bool {
        matches!(self, ActiveModal::Preregister)
    }

    pub fn success_notice(&self) -> Notice {
        match self {
            ActiveModal::QuickOrder { .. } => Notice::success("Order placed — we will contact you"),
            ActiveModal::Preregister => {
                Notice::success("You're on the list! We'll let you know when the app launches.")
            }
            ActiveModal::JobApplication { job: Some(job) } => Notice::success(format!(
                "Application for {} - We'll contact you soon!",
                job.title
            )),
            ActiveModal::JobApplication { job: None } => Notice::success(
                "General Application - We'll review your profile and contact you!",
            ),
        }
    }
}

/// Identifies one submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTicket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum Submission {
    #[default]
    Idle,
    InFlight(u64),
    Failed(SubmitError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalController {
    active: Option<ActiveModal>,
    draft: FormDraft,
    submission: Submission,
    tickets: u64,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ActiveModal> {
        self.active
    }

    pub fn kind(&self) -> ModalKind {
        self.active.map_or(ModalKind::None, |m| m.kind())
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut FormDraft {
        &mut self.draft
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.submission, Submission::InFlight(_))
    }

    pub fn last_error(&self) -> Option<&SubmitError> {
        match &self.submission {
            Submission::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Open `modal`, replacing any open one and starting from a fresh draft.
    pub fn open(&mut self, modal: ActiveModal) {
        tracing::debug!(kind = ?modal.kind(), "modal opened");
        self.active = Some(modal);
        self.draft.clear();
        self.submission = Submission::Idle;
        if let ActiveModal::QuickOrder { .. } = modal {
            self.draft.set(Field::Frequency, "Daily");
        }
    }

    pub fn close(&mut self) {
        if let Some(modal) = self.active.take() {
            tracing::debug!(kind = ?modal.kind(), "modal closed");
        }
        self.draft.clear();
        self.submission = Submission::Idle;
    }

    /// Validate the draft and mark a submission as in flight.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, FormError> {
        let modal = self.active.ok_or(FormError::NoActiveModal)?;
        if self.is_submitting() {
            return Err(FormError::AlreadyInFlight);
        }
        self.draft.validate(modal.form_kind())?;

        self.tickets += 1;
        self.submission = Submission::InFlight(self.tickets);
        Ok(SubmitTicket(self.tickets))
    }

    /// Apply the outcome of the attempt `ticket` started.
    ///
    /// Returns the notice to show, or `None` when the ticket is stale.
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<(), SubmitError>,
    ) -> Option<Notice> {
        if self.submission != Submission::InFlight(ticket.0) {
            tracing::debug!(ticket = ticket.0, "stale submission ignored");
            return None;
        }
        let modal = self.active?;

        match outcome {
            Ok(()) => {
                let notice = modal.success_notice();
                self.close();
                Some(notice)
            }
            Err(err) => {
                let notice = failure_notice(&err);
                self.submission = Submission::Failed(err);
                Some(notice)
            }
        }
    }
}
