//! Exchange rate resolution over a rate snapshot.
//!
//! Resolution walks a fixed priority ladder: identity, direct pair,
//! reverse pair (reciprocal), then a cross rate through the anchor
//! currency. "Not found" is a normal outcome returned as `None`; callers
//! render it as a placeholder.

use crate::core::currency::CurrencyCode;
use crate::core::rates::RateSnapshot;

/// Anchor used for cross rates in the Monobank feed (UAH).
pub const DEFAULT_ANCHOR: CurrencyCode = CurrencyCode(980);

/// Resolves exchange rates against an immutable snapshot. Pure and
/// stateless apart from the configured anchor currency.
#[derive(Debug, Clone, Copy)]
pub struct RateResolver {
    anchor: CurrencyCode,
}

impl Default for RateResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ANCHOR)
    }
}

impl RateResolver {
    pub fn new(anchor: CurrencyCode) -> Self {
        Self { anchor }
    }

    /// Units of `to` per 1 unit of `from`, or `None` when no tier yields a
    /// usable rate.
    ///
    /// The sub-priority differs between tiers on purpose: direct and
    /// anchor lookups take the sell rate first (converting out of a
    /// currency), the reverse tier takes the buy rate first (inverting a
    /// quote into it).
    pub fn resolve_rate(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
        snapshot: &RateSnapshot,
    ) -> Option<f64> {
        // Identity holds even for codes absent from every pair.
        if from == to {
            return Some(1.0);
        }

        // A direct pair settles the lookup: when one exists but carries no
        // values at all, resolution ends with no rate rather than trying
        // the reverse or anchor tiers.
        if let Some(pair) = snapshot.find(from, to) {
            return pair.outgoing_rate();
        }

        // Reverse quote: only a strictly positive value can be inverted; a
        // zero or absent value falls through to the anchor tier.
        if let Some(reverse) = snapshot.find(to, from).and_then(|pair| pair.incoming_rate())
            && reverse > 0.0
        {
            return Some(1.0 / reverse);
        }

        let from_to_anchor = snapshot
            .find(from, self.anchor)
            .and_then(|pair| pair.outgoing_rate())?;
        let to_to_anchor = snapshot
            .find(to, self.anchor)
            .and_then(|pair| pair.outgoing_rate())?;
        if to_to_anchor == 0.0 {
            return None;
        }
        Some(from_to_anchor / to_to_anchor)
    }

    /// Converts `amount` from one currency to another. `None` when the
    /// rate is unresolvable. Amounts are not validated; zero and negative
    /// values convert arithmetically.
    pub fn convert(
        &self,
        amount: f64,
        from: CurrencyCode,
        to: CurrencyCode,
        snapshot: &RateSnapshot,
    ) -> Option<f64> {
        self.resolve_rate(from, to, snapshot)
            .map(|rate| amount * rate)
    }
}
