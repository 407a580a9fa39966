use crate::{Result, WireError};

/// Checks that `value` lies within the inclusive range `[min, max]`.
///
/// # Errors
/// Returns [WireError::OutOfRange] carrying the offending value and both bounds, widened to
/// `i128`, if `value < min` or `value > max`.
pub fn check_bounds<T>(value: T, min: T, max: T) -> Result<()>
where
    T: PartialOrd + Copy + Into<i128>,
{
    if value < min || value > max {
        let (value, min, max): (i128, i128, i128) = (value.into(), min.into(), max.into());
        tracing::trace!(%value, %min, %max, "rejected out of range value");
        return Err(WireError::OutOfRange { value, min, max });
    }

    Ok(())
}
