use chrono::NaiveDate;

use super::EngineError;

/// `start <= end`. The only precondition for historical reporting.
pub(crate) fn ordered(start: NaiveDate, end: NaiveDate) -> Result<(), EngineError> {
    if start > end {
        return Err(EngineError::InvalidRange {
            start,
            end,
            reason: "start date is after end date",
        });
    }
    Ok(())
}

/// `start` strictly after `today`, then `start <= end`. Runs before any
/// store read so invalid requests never touch the collaborator.
pub(crate) fn future_ordered(
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Result<(), EngineError> {
    if start <= today {
        return Err(EngineError::InvalidRange {
            start,
            end,
            reason: "start date must be after today",
        });
    }
    ordered(start, end)
}
