//! Placeholder forms and the collaborators they talk to.
//!
//! None of the site's forms authenticate or persist anything. A submission
//! checks its required fields, hands the values to a [`SubmitSink`], and posts
//! an acknowledgment to a [`Notifier`].

use std::collections::BTreeMap;

use crate::core::error::ValidationError;
use crate::core::motion::VisualState;

/// Displays a message to the user. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Accepts submitted field values. Guarantees nothing beyond accepting them.
pub trait SubmitSink {
    fn submit(&self, kind: FormKind, fields: FormFields);
}

/// Sink that only records the submission in the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingSink;

impl SubmitSink for LoggingSink {
    fn submit(&self, kind: FormKind, fields: FormFields) {
        // Values may contain passwords, only names are logged
        tracing::info!(
            "Placeholder {:?} form submitted with fields: {}",
            kind,
            fields.names().collect::<Vec<_>>().join(", ")
        );
    }
}

/// Forms present on the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    SignIn,
    SignUp,
    Contact,
    Newsletter,
}

impl FormKind {
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            FormKind::SignIn => &["email", "password"],
            FormKind::SignUp => &["username", "email", "password", "confirm_password", "terms"],
            FormKind::Contact => &["name", "email", "message"],
            // The footer input carries no `required` attribute
            FormKind::Newsletter => &[],
        }
    }

    /// Message shown once the submission is accepted.
    pub fn acknowledgment(&self) -> &'static str {
        match self {
            FormKind::SignIn => "Sign In submitted! (Placeholder)",
            FormKind::SignUp => "Sign Up submitted! (Placeholder)",
            FormKind::Contact => "Form submitted! (Placeholder)",
            FormKind::Newsletter => "Subscribed! (Placeholder)",
        }
    }

    /// How long the form stays faded before the acknowledgment, in ms.
    pub fn fade_ms(&self) -> u64 {
        match self {
            FormKind::Newsletter => 300,
            _ => 500,
        }
    }

    /// State the form fades to while submitting.
    pub fn faded_state(&self) -> VisualState {
        let faded = VisualState::hidden();
        match self {
            FormKind::SignUp => VisualState { opacity: 0.3, ..faded }.with_scale(0.98),
            FormKind::Newsletter => VisualState { opacity: 0.5, ..faded },
            FormKind::SignIn | FormKind::Contact => faded,
        }
    }

    /// Every required field must be present and not blank.
    pub fn validate(&self, fields: &FormFields) -> Result<(), ValidationError> {
        let missing = self
            .required_fields()
            .iter()
            .copied()
            .find(|name| fields.get(name).is_none_or(|v| v.trim().is_empty()));
        match missing {
            Some(field) => Err(ValidationError::MissingField { field }),
            None => Ok(()),
        }
    }

    /// Message shown instead of the acknowledgment when validation fails.
    pub fn rejection(&self, error: &ValidationError) -> String {
        match (self, error) {
            (FormKind::SignUp, ValidationError::MissingField { field: "terms" }) => {
                "Please accept the terms and conditions.".to_string()
            }
            (_, ValidationError::MissingField { field }) => {
                format!("Please fill in the {} field.", field.replace('_', " "))
            }
        }
    }

    /// Validate, then hand the fields to `sink` and acknowledge via `notifier`.
    pub fn submit(
        &self,
        fields: FormFields,
        sink: &impl SubmitSink,
        notifier: &impl Notifier,
    ) -> Result<(), ValidationError> {
        self.validate(&fields)?;
        sink.submit(*self, fields);
        notifier.notify(self.acknowledgment());
        Ok(())
    }
}

/// Ordered field name to value map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
