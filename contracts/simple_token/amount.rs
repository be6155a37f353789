//! Overflow-checked arithmetic for token amounts.
//!
//! Amounts are fixed-width, so scaling a caller-supplied quantity into the
//! ledger's internal unit (`amount * 10^decimals`) can overflow. Every helper
//! here returns `None` instead of wrapping.

/// Internal unit of the ledger. Matches `Balance` of the default environment.
pub type Amount = u128;

/// Largest `decimals` whose scale factor still fits in an [`Amount`].
pub const MAX_DECIMALS: u8 = 38;

/// `10^decimals`, or `None` if it does not fit.
pub fn scale_factor(decimals: u8) -> Option<Amount> {
    10u128.checked_pow(u32::from(decimals))
}

/// Converts a caller-supplied quantity into the internal unit.
pub fn scale(amount: Amount, decimals: u8) -> Option<Amount> {
    scale_factor(decimals)?.checked_mul(amount)
}
