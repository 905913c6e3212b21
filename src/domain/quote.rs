// src/domain/quote.rs

use serde::Serialize;
use thiserror::Error;

pub const MIN_TERM_MONTHS: u32 = 12;
pub const MAX_TERM_MONTHS: u32 = 84;

/// Calculator defaults shown on the car details page.
pub const DEFAULT_TERM_MONTHS: u32 = 36;
pub const DEFAULT_ANNUAL_RATE: f64 = 16.9;
pub const DEFAULT_DOWN_PAYMENT_PERCENT: i64 = 20;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    #[error("Down payment must be at least 0 and less than the car price")]
    InvalidDownPayment,
    #[error("Price must be greater than 0")]
    InvalidPrice,
    #[error("Loan term must be at least one month")]
    InvalidTerm,
    #[error("Interest rate must be a non-negative number")]
    InvalidRate,
    #[error("Loan figures are too large to calculate")]
    AmountTooLarge,
}

/// Aggregate figures of a fixed-rate annuity loan.
///
/// All money fields are whole currency units. `total_amount` always equals
/// `loan_amount + overpayment + down_payment`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanQuote {
    pub price: i64,
    pub down_payment: i64,
    pub loan_amount: i64,
    pub term_months: u32,
    pub annual_rate_percent: f64,
    pub monthly_payment: i64,
    pub overpayment: i64,
    pub total_amount: i64,
}

/// Computes the annuity payment summary for a car purchased on credit.
///
/// Rate arithmetic runs in f64 and only the monthly payment is rounded
/// (half away from zero). Totals are then derived as `payment * term`, so
/// they are not separately rounded sums.
pub fn compute_loan_quote(
    price: i64,
    down_payment: i64,
    term_months: u32,
    annual_rate_percent: f64,
) -> Result<LoanQuote, QuoteError> {
    if price <= 0 {
        return Err(QuoteError::InvalidPrice);
    }
    if down_payment < 0 || down_payment >= price {
        return Err(QuoteError::InvalidDownPayment);
    }
    if term_months == 0 {
        return Err(QuoteError::InvalidTerm);
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(QuoteError::InvalidRate);
    }

    let loan_amount = price - down_payment;
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let n = term_months as f64;

    // r / (1 - (1+r)^-n) stays finite when (1+r)^n overflows; it tends to r.
    let payment = if monthly_rate == 0.0 {
        loan_amount as f64 / n
    } else {
        loan_amount as f64 * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-n))
    };
    if !payment.is_finite() || payment.round() >= i64::MAX as f64 {
        return Err(QuoteError::AmountTooLarge);
    }
    let monthly_payment = payment.round() as i64;

    let total_paid = monthly_payment
        .checked_mul(term_months as i64)
        .ok_or(QuoteError::AmountTooLarge)?;
    let total_amount = total_paid
        .checked_add(down_payment)
        .ok_or(QuoteError::AmountTooLarge)?;
    let overpayment = total_paid - loan_amount;

    Ok(LoanQuote {
        price,
        down_payment,
        loan_amount,
        term_months,
        annual_rate_percent,
        monthly_payment,
        overpayment,
        total_amount,
    })
}

/// Keeps a requested term inside the range the dealership offers.
pub fn clamp_term(months: u32) -> u32 {
    months.clamp(MIN_TERM_MONTHS, MAX_TERM_MONTHS)
}

pub fn default_down_payment(price: i64) -> i64 {
    // Never larger than `price`, so the narrowing cast is lossless.
    (i128::from(price) * i128::from(DEFAULT_DOWN_PAYMENT_PERCENT) / 100) as i64
}
