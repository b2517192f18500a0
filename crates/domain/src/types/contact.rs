//! Contact enquiry types
//!
//! The form fields as typed, the validated enquiry, and the JSON payload
//! accepted by `POST /api/contacts`.

use serde::{Deserialize, Serialize};

use crate::utils::text::non_blank;

/// Raw contact form values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

/// Required contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Company => "Company",
            Self::Message => "Message",
        }
    }
}

/// A contact enquiry with every required field present and trimmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEnquiry {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactEnquiry {
    /// Validate a form, returning the blank fields on failure.
    pub fn from_form(form: &ContactForm) -> Result<Self, Vec<ContactField>> {
        let name = non_blank(&form.name);
        let email = non_blank(&form.email);
        let company = non_blank(&form.company);
        let message = non_blank(&form.message);

        match (name, email, company, message) {
            (Some(name), Some(email), Some(company), Some(message)) => {
                Ok(Self { name, email, company, message })
            }
            (name, email, company, message) => {
                let missing = [
                    (name.is_none(), ContactField::Name),
                    (email.is_none(), ContactField::Email),
                    (company.is_none(), ContactField::Company),
                    (message.is_none(), ContactField::Message),
                ];
                Err(missing.into_iter().filter(|(blank, _)| *blank).map(|(_, f)| f).collect())
            }
        }
    }

    /// Notes field sent to the CRM: company first, then the message.
    pub fn notes(&self) -> String {
        format!("Company: {}\n\n{}", self.company, self.message)
    }
}

/// JSON body for `POST /api/contacts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub full_name: String,
    pub email: String,
    pub source: String,
    pub preferred_contact_method: String,
    pub notes: String,
}

impl ContactPayload {
    pub fn from_enquiry(
        enquiry: &ContactEnquiry,
        source: impl Into<String>,
        preferred_contact_method: impl Into<String>,
    ) -> Self {
        Self {
            full_name: enquiry.name.clone(),
            email: enquiry.email.clone(),
            source: source.into(),
            preferred_contact_method: preferred_contact_method.into(),
            notes: enquiry.notes(),
        }
    }
}
