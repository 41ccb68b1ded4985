pub mod admin;
pub mod category;
pub mod comparison;
pub mod completeness;
pub mod criterion;
pub mod jury;
pub mod leaderboard;
pub mod mark;
pub mod participant;

use rust_decimal::Decimal;

/// Points are stored as `NUMERIC(8, 2)`
pub const POINTS_SCALE: u32 = 2;

/// Whether `value` can be stored in a points column without rounding or overflow.
pub fn fits_points_column(value: &Decimal) -> bool {
    value.normalize().scale() <= POINTS_SCALE && value.abs() < Decimal::from(1_000_000)
}

/// Rejects names that are empty once surrounding whitespace is trimmed.
pub(crate) fn validate_not_blank(name: &str) -> Result<(), validator::ValidationError> {
    if name.trim().is_empty() {
        let mut error = validator::ValidationError::new("blank_name");
        error.message = Some("Name must not be blank".into());
        Err(error)
    } else {
        Ok(())
    }
}
