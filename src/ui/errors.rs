use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub message: String,
    pub validity: Validity,
}

/// `state` is the validity to apply, `payload` the field it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAction {
    pub state: Validity,
    pub payload: String,
}

impl FieldAction {
    pub fn valid(field: impl Into<String>) -> Self {
        Self {
            state: Validity::Valid,
            payload: field.into(),
        }
    }

    pub fn invalid(field: impl Into<String>) -> Self {
        Self {
            state: Validity::Invalid,
            payload: field.into(),
        }
    }
}

/// Per-field validation state for a form. Every field starts valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    fields: BTreeMap<String, FieldError>,
}

impl FieldErrors {
    pub fn new<I, K, M>(initial: I) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<String>,
        M: Into<String>,
    {
        let fields = initial
            .into_iter()
            .map(|(field, message)| {
                (
                    field.into(),
                    FieldError {
                        message: message.into(),
                        validity: Validity::Valid,
                    },
                )
            })
            .collect();
        Self { fields }
    }

    /// Applies `action` to its target field. Fields that were not registered
    /// up front are ignored.
    pub fn dispatch(&mut self, action: FieldAction) {
        if let Some(entry) = self.fields.get_mut(&action.payload) {
            entry.validity = action.state;
        }
    }

    /// The field's message, only while it is invalid.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .filter(|entry| entry.validity == Validity::Invalid)
            .map(|entry| entry.message.as_str())
    }
}
