//! Field validation shared by every entity.

use crate::errors::ModelError;

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ModelError::Validation("invalid email".into()));
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || email.len() > 255 {
        return Err(ModelError::Validation("invalid email".into()));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    let name = name.trim();
    if name.is_empty() { return Err(ModelError::Validation("name required".into())); }
    if name.len() > 128 { return Err(ModelError::Validation("name too long (<=128)".into())); }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ModelError> {
    let phone = phone.trim();
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < 6 || phone.len() > 32 || !phone.chars().all(|c| c.is_ascii_digit() || "+- ".contains(c)) {
        return Err(ModelError::Validation("invalid phone number".into()));
    }
    Ok(())
}
