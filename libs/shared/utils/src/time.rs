// =====================================================================================
// TIME CONVERTER - 12-HOUR LABELS <-> 24-HOUR SLOT VALUES
// =====================================================================================

use chrono::NaiveTime;
use tracing::debug;

use shared_models::AppError;

const FORMAT_24_HOUR: &str = "%H:%M";
const FORMAT_LABEL: &str = "%I:%M %p";

/// "08:00 AM" -> "08:00", "12:00 AM" -> "00:00", "01:30 PM" -> "13:30".
///
/// A value without a meridian is taken as already being 24-hour and is only
/// re-padded, so the raw slot values of the time selector pass through.
/// Empty input gives an empty string.
pub fn to_24_hour(label: &str) -> Result<String, AppError> {
    let label = label.trim();
    if label.is_empty() {
        return Ok(String::new());
    }

    let time = NaiveTime::parse_from_str(label, FORMAT_LABEL)
        .or_else(|_| NaiveTime::parse_from_str(label, FORMAT_24_HOUR))
        .map_err(|e| {
            debug!("Rejecting time value {:?}: {}", label, e);
            AppError::InvalidTime(format!("'{}' is not a valid time", label))
        })?;

    Ok(time.format(FORMAT_24_HOUR).to_string())
}

/// "00:00" -> "12:00 AM", "13:30" -> "01:30 PM".
pub fn to_label(time24: &str) -> Result<String, AppError> {
    let time24 = time24.trim();
    let time = NaiveTime::parse_from_str(time24, FORMAT_24_HOUR)
        .map_err(|_| AppError::InvalidTime(format!("'{}' is not a 24-hour time", time24)))?;

    Ok(time.format(FORMAT_LABEL).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_hours_cycle_through_twelve() {
        assert_eq!(to_label("00:05").unwrap(), "12:05 AM");
        assert_eq!(to_label("11:59").unwrap(), "11:59 AM");
        assert_eq!(to_label("23:00").unwrap(), "11:00 PM");
    }

    #[test]
    fn unpadded_hour_is_padded() {
        assert_eq!(to_24_hour("8:00 AM").unwrap(), "08:00");
        assert_eq!(to_24_hour("9:15").unwrap(), "09:15");
    }
}
