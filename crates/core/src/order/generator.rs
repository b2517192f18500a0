//! Order generator - validation, derived figures and the text summary

use std::sync::Arc;

use freehold_domain::utils::currency::format_whole;
use freehold_domain::{
    FormattedFigures, OrderConfig, OrderFigures, OrderForm, OrderInput, OrderSummary,
};
use tracing::{info, warn};

use super::errors::OrderError;
use super::ports::{Clock, ReferenceSuffixSource};
use super::render::render_text;
use super::state::OrderState;

/// Order generator service
pub struct OrderGenerator {
    clock: Arc<dyn Clock>,
    suffixes: Arc<dyn ReferenceSuffixSource>,
    config: OrderConfig,
}

impl OrderGenerator {
    /// Create a generator with the default order configuration
    pub fn new(clock: Arc<dyn Clock>, suffixes: Arc<dyn ReferenceSuffixSource>) -> Self {
        Self { clock, suffixes, config: OrderConfig::default() }
    }

    /// Override the order configuration (reference prefix, currency)
    pub fn with_config(mut self, config: OrderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &OrderConfig {
        &self.config
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Validate the form and build a new summary without storing it.
    pub fn build(&self, form: &OrderForm) -> Result<OrderSummary, OrderError> {
        let input = OrderInput::from_form(form).map_err(|missing| {
            warn!(missing = missing.len(), "order form incomplete");
            OrderError::MissingFields(missing)
        })?;

        let generated_on = self.clock.today();
        let suffix = self.suffixes.next_suffix().clamp(1000, 9999);
        let reference = format!(
            "{}-{}-{suffix:04}",
            self.config.reference_prefix,
            generated_on.format("%Y%m%d")
        );

        let figures = OrderFigures::compute(input.one_off_fee, input.monthly_fee);
        let currency = &self.config.currency;
        let formatted = FormattedFigures {
            one_off: format_whole(figures.one_off, currency),
            monthly: format_whole(figures.monthly, currency),
            annual: format_whole(figures.annual, currency),
            first_year: format_whole(figures.first_year, currency),
        };

        let mut summary = OrderSummary {
            reference,
            generated_on,
            add_ons_text: input.add_ons_text(),
            input,
            figures,
            formatted,
            currency_code: currency.code.clone(),
            text: String::new(),
        };
        summary.text = render_text(&summary);

        Ok(summary)
    }

    /// Generate a summary and store it as the latest order.
    ///
    /// On validation failure the previously stored summary is kept.
    pub fn generate<'s>(
        &self,
        form: &OrderForm,
        state: &'s mut OrderState,
    ) -> Result<&'s OrderSummary, OrderError> {
        let summary = self.build(form)?;
        info!(reference = %summary.reference, "order summary generated");
        Ok(state.replace(summary))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    struct FixedClock;

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            NaiveDate::from_ymd_opt(2026, 3, 9).unwrap_or_default()
        }
    }

    struct FixedSuffix(u16);

    impl ReferenceSuffixSource for FixedSuffix {
        fn next_suffix(&self) -> u16 {
            self.0
        }
    }

    fn generator(suffix: u16) -> OrderGenerator {
        OrderGenerator::new(Arc::new(FixedClock), Arc::new(FixedSuffix(suffix)))
    }

    fn form() -> OrderForm {
        OrderForm {
            company: "Acme".to_string(),
            legal_entity: "Acme Ltd".to_string(),
            contact_name: "Jo Bloggs".to_string(),
            contact_email: "jo@acme.example".to_string(),
            deployment: "Hosted".to_string(),
            scope_summary: "Pilot".to_string(),
            signer_name: "Jo Bloggs".to_string(),
            signer_title: "CEO".to_string(),
            signer_date: "2026-03-09".to_string(),
            ..OrderForm::default()
        }
    }

    #[test]
    fn reference_combines_prefix_date_and_suffix() {
        let summary = generator(4821).build(&form()).expect("form is complete");
        assert_eq!(summary.reference, "FH-20260309-4821");
    }

    #[test]
    fn out_of_range_suffix_is_clamped_to_four_digits() {
        let summary = generator(7).build(&form()).expect("form is complete");
        assert_eq!(summary.reference, "FH-20260309-1000");
    }

    #[test]
    fn configured_prefix_is_used() {
        let config = OrderConfig { reference_prefix: "ORD".to_string(), ..OrderConfig::default() };
        let summary =
            generator(1234).with_config(config).build(&form()).expect("form is complete");
        assert!(summary.reference.starts_with("ORD-20260309-"));
    }

    #[test]
    fn failed_generation_keeps_previous_summary() {
        let generator = generator(1111);
        let mut state = OrderState::new();
        generator.generate(&form(), &mut state).expect("form is complete");

        let incomplete = OrderForm { company: String::new(), ..form() };
        let err = generator.generate(&incomplete, &mut state).expect_err("company is blank");

        assert!(matches!(err, OrderError::MissingFields(_)));
        assert_eq!(state.latest().map(|s| s.input.company.as_str()), Some("Acme"));
    }
}
