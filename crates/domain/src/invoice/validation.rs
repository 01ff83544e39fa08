//! Invoice request validation.
//!
//! Four checks run in a fixed order and the first failure wins, because
//! each failure carries its own message for the customer:
//!
//! 1. at least one order is referenced
//! 2. the invoice title is not blank
//! 3. the recipient email is not blank
//! 4. a special invoice carries a tax identification number

use thiserror::Error;

use super::InvoiceRequest;

/// Reason an invoice request was refused.
///
/// The `Display` text is shown to the customer verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("order list must not be empty")]
    EmptyOrderList,

    #[error("invoice title must not be empty")]
    EmptyInvoiceTitle,

    #[error("recipient email must not be empty")]
    EmptyEmail,

    #[error("special invoice requires a tax identification number")]
    MissingTaxNumber,
}

impl ValidationError {
    /// Short machine-readable code, used as a metrics label.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyOrderList => "empty_order_list",
            ValidationError::EmptyInvoiceTitle => "empty_invoice_title",
            ValidationError::EmptyEmail => "empty_email",
            ValidationError::MissingTaxNumber => "missing_tax_number",
        }
    }
}

/// Result of validating an invoice request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected(ValidationError),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }

    /// Converts the outcome into a `Result` for use with `?`.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            ValidationOutcome::Accepted => Ok(()),
            ValidationOutcome::Rejected(reason) => Err(reason),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Decides whether `request` is well-formed enough to submit.
pub fn validate(request: &InvoiceRequest) -> ValidationOutcome {
    match check(request) {
        Ok(()) => ValidationOutcome::Accepted,
        Err(reason) => ValidationOutcome::Rejected(reason),
    }
}

fn check(request: &InvoiceRequest) -> Result<(), ValidationError> {
    if request.order_ids.is_empty() {
        return Err(ValidationError::EmptyOrderList);
    }
    if is_blank(&request.invoice_title) {
        return Err(ValidationError::EmptyInvoiceTitle);
    }
    if is_blank(&request.email) {
        return Err(ValidationError::EmptyEmail);
    }
    if request.invoice_type.is_special() && request.tax_number.as_deref().is_none_or(is_blank) {
        return Err(ValidationError::MissingTaxNumber);
    }
    Ok(())
}
