use crate::error::AppError;

use super::form::{IMAGE_FIELD, MediaForm, VERSION_FIELD};

/// Field layout of one media-backed resource.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSchema {
    /// Route segment and response key, e.g. `project`.
    pub name: &'static str,
    /// Capitalised name used in messages, e.g. `Project`.
    pub label: &'static str,
    /// Scalar parts that must all be present on create.
    pub required: &'static [&'static str],
    /// Scalar parts an update may change. Anything else is ignored on update.
    pub updatable: &'static [&'static str],
}

impl ResourceSchema {
    /// Whether a multipart text part with this name should be read.
    pub fn accepts(&self, field: &str) -> bool {
        field == VERSION_FIELD || self.required.contains(&field) || self.updatable.contains(&field)
    }

    /// Required fields absent from `form`, in declaration order, image last.
    pub fn missing(&self, form: &MediaForm) -> Vec<&'static str> {
        let mut missing: Vec<&'static str> = self
            .required
            .iter()
            .copied()
            .filter(|name| form.text(name).is_none())
            .collect();
        if !form.has_image() {
            missing.push(IMAGE_FIELD);
        }
        missing
    }

    /// Reject a create payload unless every required field and the image are present.
    pub fn ensure_complete(&self, form: &MediaForm) -> Result<(), AppError> {
        let missing = self.missing(form);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            )))
        }
    }

    pub fn not_found(&self) -> AppError {
        AppError::NotFound(format!("{} not found", self.label))
    }
}
