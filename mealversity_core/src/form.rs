//! Transient form buffers and their validation rules.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::FormError;

/// Input fields across every form on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    /// "Phone or Email" on the quick order form.
    Contact,
    StartDate,
    Frequency,
    Message,
    Portfolio,
    NotifyMe,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Contact => "Phone or Email",
            Field::StartDate => "Start date",
            Field::Frequency => "Frequency",
            Field::Message => "Message",
            Field::Portfolio => "Portfolio link",
            Field::NotifyMe => "Notify me",
        }
    }
}

/// Which form a draft belongs to; decides the required fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    QuickOrder,
    Preregister,
    JobApplication,
    Contact,
    Newsletter,
}

impl FormKind {
    pub fn required(self) -> &'static [Field] {
        match self {
            FormKind::QuickOrder => &[Field::Name, Field::Contact],
            FormKind::Preregister => &[Field::Name, Field::Email],
            FormKind::JobApplication => &[Field::Name, Field::Email],
            FormKind::Contact => &[Field::Name, Field::Message],
            FormKind::Newsletter => &[Field::Email],
        }
    }

    fn checks_email(self) -> bool {
        self.required().contains(&Field::Email)
    }
}

/// Key/value input buffer. Values are stored as typed, trimmed on read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormDraft {
    values: BTreeMap<Field, String>,
    flags: BTreeSet<Field>,
}

impl FormDraft {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Raw value as typed, for binding back into inputs.
    pub fn raw(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    /// Trimmed value, `None` when blank.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values
            .get(&field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn set_flag(&mut self, field: Field, on: bool) {
        if on {
            self.flags.insert(field);
        } else {
            self.flags.remove(&field);
        }
    }

    pub fn flag(&self, field: Field) -> bool {
        self.flags.contains(&field)
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.flags.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.flags.is_empty()
    }

    /// Check required fields in declaration order, then the email shape.
    pub fn validate(&self, kind: FormKind) -> Result<(), FormError> {
        if let Some(missing) = kind.required().iter().find(|f| self.get(**f).is_none()) {
            return Err(FormError::MissingField(*missing));
        }
        if kind.checks_email() && !self.get(Field::Email).is_some_and(looks_like_email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_values_count_as_missing() {
        let mut draft = FormDraft::default();
        draft.set(Field::Name, "   ");
        draft.set(Field::Contact, "98765 43210");
        assert_eq!(
            draft.validate(FormKind::QuickOrder),
            Err(FormError::MissingField(Field::Name))
        );
        assert_eq!(draft.raw(Field::Name), "   ");
    }

    #[test]
    fn first_missing_field_is_reported() {
        let draft = FormDraft::default();
        assert_eq!(
            draft.validate(FormKind::Preregister),
            Err(FormError::MissingField(Field::Name))
        );
        assert_eq!(
            draft.validate(FormKind::Newsletter),
            Err(FormError::MissingField(Field::Email))
        );
    }

    #[test]
    fn email_shape_is_checked_where_email_is_required() {
        let mut draft = FormDraft::default();
        draft.set(Field::Name, "Asha");
        draft.set(Field::Email, "asha-at-example");
        assert_eq!(
            draft.validate(FormKind::JobApplication),
            Err(FormError::InvalidEmail)
        );

        draft.set(Field::Email, " asha@example.in ");
        assert_eq!(draft.validate(FormKind::JobApplication), Ok(()));
    }

    #[test]
    fn quick_order_accepts_phone_as_contact() {
        let mut draft = FormDraft::default();
        draft.set(Field::Name, "Ravi");
        draft.set(Field::Contact, "9876543210");
        assert_eq!(draft.validate(FormKind::QuickOrder), Ok(()));
    }

    #[test]
    fn flags_and_clear() {
        let mut draft = FormDraft::default();
        draft.set_flag(Field::NotifyMe, true);
        draft.set(Field::Phone, "1");
        assert!(draft.flag(Field::NotifyMe));
        draft.set_flag(Field::NotifyMe, false);
        assert!(!draft.flag(Field::NotifyMe));
        draft.clear();
        assert!(draft.is_empty());
    }

    #[test]
    fn email_heuristic() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("a@b."));
    }
}
