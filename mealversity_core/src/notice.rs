//! Transient user-facing messages (toast notices).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "notice notice-success",
            NoticeLevel::Info => "notice notice-info",
            NoticeLevel::Error => "notice notice-error",
        }
    }
}

impl<E: std::error::Error> From<&E> for Notice {
    fn from(err: &E) -> Self {
        let text = err.to_string();
        let mut chars = text.chars();
        let message = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Notice::error(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;

    #[test]
    fn errors_become_capitalised_error_notices() {
        let notice = Notice::from(&FormError::InvalidEmail);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Please enter a valid email address");
        assert_eq!(notice.css_class(), "notice notice-error");
    }
}
