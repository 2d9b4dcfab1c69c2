use rust_decimal::{Decimal, RoundingStrategy};

/// Service for computing session price snapshots
pub struct PriceCalculator;

impl PriceCalculator {
    /// Compute a session price from an hourly rate and a duration in
    /// minutes, rounded to cents with midpoints away from zero.
    pub fn session_price(hourly_rate: Decimal, duration_minutes: i32) -> Decimal {
        (hourly_rate * Decimal::from(duration_minutes) / Decimal::from(60))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Quote a price snapshot for a coach who may not have set a rate yet.
    /// No rate means no price; the booking proceeds without one.
    pub fn quote(hourly_rate: Option<Decimal>, duration_minutes: i32) -> Option<Decimal> {
        hourly_rate.map(|rate| Self::session_price(rate, duration_minutes))
    }
}
