//! Form field validation and the permissive numeric cast.
//!
//! Validation is presence-only: a submitted field always yields an integer
//! via [`coerce_int`], never a rejection. Angle ranges are deliberately not
//! validated — the stored values mirror whatever the clients send.

use axum::Form;
use axum::extract::rejection::FormRejection;
use serde::Deserialize;

use posehub_domain::angles::ServoAngles;
use posehub_domain::error::ValidationError;
use posehub_domain::id::PoseId;

/// Raw servo fields as submitted. All optional so that presence is checked
/// here, with the client-facing message, rather than by the deserializer.
#[derive(Debug, Deserialize)]
pub struct ServoFields {
    pub servo1: Option<String>,
    pub servo2: Option<String>,
    pub servo3: Option<String>,
    pub servo4: Option<String>,
}

impl ServoFields {
    /// Unpack the form extraction and require all four fields.
    ///
    /// A body that could not be read as a form (wrong content type,
    /// malformed encoding) carries no fields, so it is reported the same
    /// way as an empty submission.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingServoParameters`] when the body is
    /// unreadable or any field is absent.
    pub fn from_form(
        form: Result<Form<Self>, FormRejection>,
    ) -> Result<ServoAngles, ValidationError> {
        match form {
            Ok(Form(fields)) => fields.into_angles(),
            Err(_) => Err(ValidationError::MissingServoParameters),
        }
    }

    /// Require all four fields and coerce each to an integer.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingServoParameters`] when any field is
    /// absent.
    pub fn into_angles(self) -> Result<ServoAngles, ValidationError> {
        match (self.servo1, self.servo2, self.servo3, self.servo4) {
            (Some(s1), Some(s2), Some(s3), Some(s4)) => Ok(ServoAngles::new(
                coerce_int(&s1),
                coerce_int(&s2),
                coerce_int(&s3),
                coerce_int(&s4),
            )),
            _ => Err(ValidationError::MissingServoParameters),
        }
    }
}

/// Raw identifier field as submitted.
#[derive(Debug, Deserialize)]
pub struct IdField {
    pub id: Option<String>,
}

impl IdField {
    /// Unpack the form extraction and require the `id` field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingId`] when the body is unreadable
    /// or the field is absent.
    pub fn from_form(form: Result<Form<Self>, FormRejection>) -> Result<PoseId, ValidationError> {
        match form {
            Ok(Form(field)) => field.into_id(),
            Err(_) => Err(ValidationError::MissingId),
        }
    }

    /// Require the `id` field and coerce it to an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingId`] when the field is absent.
    pub fn into_id(self) -> Result<PoseId, ValidationError> {
        self.id
            .map(|raw| PoseId::new(coerce_int(&raw)))
            .ok_or(ValidationError::MissingId)
    }
}

/// Permissive cast from a form field to an integer.
///
/// Takes the longest leading optionally-signed decimal prefix after skipping
/// leading whitespace; anything without such a prefix becomes 0. The existing
/// clients rely on this cast, so malformed input is absorbed rather than
/// rejected.
#[must_use]
pub fn coerce_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    digits[..end].parse::<i64>().map_or(0, |value| sign * value)
}
