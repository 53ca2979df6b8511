//! Trip pricing: per-day totals, subtotal, commission and display formatting.
use crate::catalog::{Catalog, Category};
use crate::customization::{DayCustomization, DayPlan};
use crate::numbers::{i64_to_f64, round_to_cents};
use serde::{Deserialize, Serialize};

/// Fixed surcharge applied to every subtotal.
pub const COMMISSION_RATE: f64 = 0.10;

/// Sum of the three slot prices for one day; unset or unknown slots count as 0.
#[must_use]
pub fn day_total(catalog: &Catalog, day: &DayCustomization) -> i64 {
    Category::ALL
        .iter()
        .map(|category| catalog.price_of(*category, day.slot(*category)))
        .sum()
}

/// Sum of `day_total` over every day of the plan.
#[must_use]
pub fn customization_total(catalog: &Catalog, plan: &DayPlan) -> i64 {
    plan.days().iter().map(|day| day_total(catalog, day)).sum()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Budget of the pre-selected plan, 0 without one
    pub base_budget: i64,
    pub customization_total: i64,
    pub subtotal: f64,
    pub commission: f64,
    pub total: f64,
}

impl PriceBreakdown {
    #[must_use]
    pub fn from_parts(base_budget: i64, customization_total: i64) -> Self {
        let subtotal = i64_to_f64(base_budget + customization_total);
        let commission = subtotal * COMMISSION_RATE;
        Self {
            base_budget,
            customization_total,
            subtotal,
            commission,
            total: subtotal + commission,
        }
    }
}

/// Price the whole trip. This is the single formula every view uses.
#[must_use]
pub fn price_breakdown(catalog: &Catalog, plan: &DayPlan, base_budget: Option<i64>) -> PriceBreakdown {
    PriceBreakdown::from_parts(base_budget.unwrap_or(0), customization_total(catalog, plan))
}

/// Format with thousands separators and exactly two decimals: `1,234.50`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    let cents = round_to_cents(amount);
    let negative = cents < 0;
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{fraction:02}")
}

#[must_use]
pub fn format_currency(currency: &str, amount: f64) -> String {
    format!("{currency} {}", format_amount(amount))
}

/// Whole-unit price as shown on catalog cards: `AED 1,200`.
#[must_use]
pub fn format_price(currency: &str, price: i64) -> String {
    let full = format_amount(i64_to_f64(price));
    let trimmed = full.strip_suffix(".00").unwrap_or(&full);
    format!("{currency} {trimmed}")
}
