use std::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while turning raw form input into a [`CustomerInfo`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Invalid contact number: {0}")]
    InvalidContactNumber(String),
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    #[error("Unsupported delivery mode: {0}")]
    InvalidDeliveryMode(String),
}

/// Fields of the customer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    ContactNo,
    Email,
    Address,
    DeliveryMode,
    Remarks,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::FirstName => "First name",
            FormField::LastName => "Last name",
            FormField::ContactNo => "Contact number",
            FormField::Email => "Email",
            FormField::Address => "Address",
            FormField::DeliveryMode => "Delivery mode",
            FormField::Remarks => "Remarks",
        }
    }
}

/// Raw form state exactly as typed. Blank by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub contact_no: String,
    pub email: String,
    pub address: String,
    pub delivery_mode: String,
    pub remarks: String,
}

impl CustomerForm {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::ContactNo => &mut self.contact_no,
            FormField::Email => &mut self.email,
            FormField::Address => &mut self.address,
            FormField::DeliveryMode => &mut self.delivery_mode,
            FormField::Remarks => &mut self.remarks,
        };
        *slot = value.into();
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// Phone number normalised to an optional leading `+` followed by 7 to 15 digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactNumber(String);

impl ContactNumber {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let (plus, rest) = match trimmed.strip_prefix('+') {
            Some(rest) => ("+", rest),
            None => ("", trimmed),
        };

        let mut digits = String::with_capacity(rest.len());
        for c in rest.chars() {
            match c {
                '0'..='9' => digits.push(c),
                ' ' | '-' | '(' | ')' => {}
                _ => return Err(ValidationError::InvalidContactNumber(raw.to_string())),
            }
        }

        if !(7..=15).contains(&digits.len()) {
            return Err(ValidationError::InvalidContactNumber(raw.to_string()));
        }
        Ok(Self(format!("{}{}", plus, digits)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let email = raw.trim();
        let invalid = || ValidationError::InvalidEmail(raw.to_string());

        if email.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.contains('@') {
            return Err(invalid());
        }
        let dot = domain.find('.').ok_or_else(invalid)?;
        if dot == 0 || domain.ends_with('.') {
            return Err(invalid());
        }
        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMode {
    Delivery,
    PickUp,
}

impl DeliveryMode {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "delivery" => Ok(DeliveryMode::Delivery),
            "pick-up" | "pickup" | "pick up" => Ok(DeliveryMode::PickUp),
            _ => Err(ValidationError::InvalidDeliveryMode(raw.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryMode::Delivery => "delivery",
            DeliveryMode::PickUp => "pick-up",
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer details after boundary validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub contact_no: ContactNumber,
    pub email: Email,
    pub address: String,
    pub delivery_mode: DeliveryMode,
    pub remarks: Option<String>,
}

fn required(value: &str, field: FormField) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(field.label()));
    }
    Ok(value.to_string())
}

impl CustomerInfo {
    /// Validates the raw form. The first failing field is reported.
    pub fn parse(form: &CustomerForm) -> Result<Self, ValidationError> {
        let first_name = required(&form.first_name, FormField::FirstName)?;
        let last_name = required(&form.last_name, FormField::LastName)?;
        let contact_no = ContactNumber::parse(&required(&form.contact_no, FormField::ContactNo)?)?;
        let email = Email::parse(&required(&form.email, FormField::Email)?)?;
        let address = required(&form.address, FormField::Address)?;
        let delivery_mode = DeliveryMode::parse(&required(&form.delivery_mode, FormField::DeliveryMode)?)?;
        let remarks = Some(form.remarks.trim())
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        Ok(Self {
            first_name,
            last_name,
            contact_no,
            email,
            address,
            delivery_mode,
            remarks,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
