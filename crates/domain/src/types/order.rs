//! Commercial order types
//!
//! `OrderForm` carries the raw page values, `OrderInput` the normalised
//! values, and `OrderSummary` the derived document held until the next
//! generation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ORDER_FILENAME_PREFIX, PLACEHOLDER_NO_ADDONS, PLACEHOLDER_NO_ASSUMPTIONS, PLACEHOLDER_TBC,
};
use crate::utils::currency::{normalize_fee, parse_fee};
use crate::utils::text::{non_blank, slugify};

/// A fee as submitted: JSON clients send numbers, the page sends strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeeField {
    Number(f64),
    Text(String),
}

impl FeeField {
    /// Non-negative fee value; anything unparseable is `0.0`.
    pub fn value(&self) -> f64 {
        match self {
            Self::Number(value) => normalize_fee(*value),
            Self::Text(raw) => parse_fee(raw),
        }
    }
}

impl Default for FeeField {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for FeeField {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for FeeField {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Raw order form values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderForm {
    pub company: String,
    pub legal_entity: String,
    pub contact_name: String,
    pub contact_email: String,
    pub deployment: String,
    pub go_live_date: String,
    pub scope_summary: String,
    pub assumptions: String,
    pub signer_name: String,
    pub signer_title: String,
    pub signer_date: String,
    pub representative: String,
    pub one_off_fee: FeeField,
    pub monthly_fee: FeeField,
    pub add_ons: Vec<String>,
    pub terms_accepted: bool,
}

/// Text fields of the order form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderField {
    Company,
    LegalEntity,
    ContactName,
    ContactEmail,
    Deployment,
    GoLiveDate,
    ScopeSummary,
    Assumptions,
    SignerName,
    SignerTitle,
    SignerDate,
    Representative,
}

/// Fields that must be non-blank before an order can be generated
pub const REQUIRED_ORDER_FIELDS: [OrderField; 9] = [
    OrderField::Company,
    OrderField::LegalEntity,
    OrderField::ContactName,
    OrderField::ContactEmail,
    OrderField::Deployment,
    OrderField::ScopeSummary,
    OrderField::SignerName,
    OrderField::SignerTitle,
    OrderField::SignerDate,
];

impl OrderField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Company => "Customer company",
            Self::LegalEntity => "Legal entity name",
            Self::ContactName => "Contact name",
            Self::ContactEmail => "Contact email",
            Self::Deployment => "Deployment option",
            Self::GoLiveDate => "Target go-live date",
            Self::ScopeSummary => "Scope summary",
            Self::Assumptions => "Assumptions",
            Self::SignerName => "Signer name",
            Self::SignerTitle => "Signer title",
            Self::SignerDate => "Signature date",
            Self::Representative => "Freehold representative",
        }
    }
}

impl OrderForm {
    pub fn value(&self, field: OrderField) -> &str {
        match field {
            OrderField::Company => &self.company,
            OrderField::LegalEntity => &self.legal_entity,
            OrderField::ContactName => &self.contact_name,
            OrderField::ContactEmail => &self.contact_email,
            OrderField::Deployment => &self.deployment,
            OrderField::GoLiveDate => &self.go_live_date,
            OrderField::ScopeSummary => &self.scope_summary,
            OrderField::Assumptions => &self.assumptions,
            OrderField::SignerName => &self.signer_name,
            OrderField::SignerTitle => &self.signer_title,
            OrderField::SignerDate => &self.signer_date,
            OrderField::Representative => &self.representative,
        }
    }

    /// Required fields left blank, in form order
    pub fn missing_required(&self) -> Vec<OrderField> {
        REQUIRED_ORDER_FIELDS
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }
}

/// Normalised order values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInput {
    pub company: String,
    pub legal_entity: String,
    pub contact_name: String,
    pub contact_email: String,
    pub deployment: String,
    pub go_live_date: Option<String>,
    pub scope_summary: String,
    pub assumptions: Option<String>,
    pub signer_name: String,
    pub signer_title: String,
    pub signer_date: String,
    pub representative: Option<String>,
    pub one_off_fee: f64,
    pub monthly_fee: f64,
    /// Selected add-ons, first occurrence order, no duplicates
    pub add_ons: Vec<String>,
    pub terms_accepted: bool,
}

impl OrderInput {
    /// Validate and normalise a form, returning the blank required fields on
    /// failure.
    pub fn from_form(form: &OrderForm) -> Result<Self, Vec<OrderField>> {
        let missing = form.missing_required();
        if !missing.is_empty() {
            return Err(missing);
        }

        let mut add_ons: Vec<String> = Vec::with_capacity(form.add_ons.len());
        for add_on in form.add_ons.iter().filter_map(|a| non_blank(a)) {
            if !add_ons.contains(&add_on) {
                add_ons.push(add_on);
            }
        }

        Ok(Self {
            company: form.company.trim().to_string(),
            legal_entity: form.legal_entity.trim().to_string(),
            contact_name: form.contact_name.trim().to_string(),
            contact_email: form.contact_email.trim().to_string(),
            deployment: form.deployment.trim().to_string(),
            go_live_date: non_blank(&form.go_live_date),
            scope_summary: form.scope_summary.trim().to_string(),
            assumptions: non_blank(&form.assumptions),
            signer_name: form.signer_name.trim().to_string(),
            signer_title: form.signer_title.trim().to_string(),
            signer_date: form.signer_date.trim().to_string(),
            representative: non_blank(&form.representative),
            one_off_fee: form.one_off_fee.value(),
            monthly_fee: form.monthly_fee.value(),
            add_ons,
            terms_accepted: form.terms_accepted,
        })
    }

    pub fn go_live_or_tbc(&self) -> &str {
        self.go_live_date.as_deref().unwrap_or(PLACEHOLDER_TBC)
    }

    pub fn representative_or_tbc(&self) -> &str {
        self.representative.as_deref().unwrap_or(PLACEHOLDER_TBC)
    }

    pub fn assumptions_or_placeholder(&self) -> &str {
        self.assumptions.as_deref().unwrap_or(PLACEHOLDER_NO_ASSUMPTIONS)
    }

    /// Add-ons joined for display, or the "none" placeholder
    pub fn add_ons_text(&self) -> String {
        if self.add_ons.is_empty() {
            PLACEHOLDER_NO_ADDONS.to_string()
        } else {
            self.add_ons.join(", ")
        }
    }
}

/// Derived commercial figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderFigures {
    pub one_off: f64,
    pub monthly: f64,
    pub annual: f64,
    pub first_year: f64,
}

impl OrderFigures {
    pub fn compute(one_off: f64, monthly: f64) -> Self {
        let one_off = normalize_fee(one_off);
        let monthly = normalize_fee(monthly);
        let annual = monthly * 12.0;
        Self { one_off, monthly, annual, first_year: one_off + annual }
    }
}

/// Figures rendered as display strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedFigures {
    pub one_off: String,
    pub monthly: String,
    pub annual: String,
    pub first_year: String,
}

/// A generated order summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub reference: String,
    pub generated_on: NaiveDate,
    pub input: OrderInput,
    pub figures: OrderFigures,
    pub formatted: FormattedFigures,
    pub currency_code: String,
    pub add_ons_text: String,
    /// The rendered plain-text document
    pub text: String,
}

impl OrderSummary {
    /// Download file name for the text export on the given date.
    pub fn text_filename(&self, on: NaiveDate) -> String {
        order_text_filename(&self.input.company, on)
    }
}

/// `freehold-order-<slug(company)>-<YYYY-MM-DD>.txt`
pub fn order_text_filename(company: &str, on: NaiveDate) -> String {
    format!("{ORDER_FILENAME_PREFIX}-{}-{}.txt", slugify(company), on.format("%Y-%m-%d"))
}
