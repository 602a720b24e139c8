use crate::error::{Error, Result};
use crate::mode::PressureTestMode;

/// Derives how long the target load is held.
///
/// `FIXED` holds for the whole `duration`. Ramped modes hold for what is left
/// after the ramp-up; an absent ramp-up counts as zero.
///
/// A negative `duration` or `ramp_up` is a malformed input, not a short hold,
/// so `NegativeDuration` only ever means the ramp-up outlasts the duration.
pub fn hold_time(duration: i64, ramp_up: Option<i64>, mode: PressureTestMode) -> Result<u64> {
    let Ok(total) = u64::try_from(duration) else {
        return Err(Error::format("duration", duration));
    };
    if mode.is_fixed() {
        return Ok(total);
    }

    let ramp_up = ramp_up.unwrap_or(0);
    let Ok(ramp) = u64::try_from(ramp_up) else {
        return Err(Error::format("rampUp", ramp_up));
    };

    total
        .checked_sub(ramp)
        .ok_or(Error::NegativeDuration { duration, ramp_up })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_keeps_full_duration() {
        assert_eq!(hold_time(120, Some(20), PressureTestMode::Fixed), Ok(120));
        assert_eq!(hold_time(120, Some(500), PressureTestMode::Fixed), Ok(120));
        assert_eq!(hold_time(0, None, PressureTestMode::Fixed), Ok(0));
    }

    #[test]
    fn ramped_modes_subtract_ramp_up() {
        assert_eq!(hold_time(120, Some(20), PressureTestMode::Linear), Ok(100));
        assert_eq!(hold_time(120, Some(20), PressureTestMode::Stair), Ok(100));
        assert_eq!(hold_time(120, None, PressureTestMode::Linear), Ok(120));
        assert_eq!(hold_time(20, Some(20), PressureTestMode::Linear), Ok(0));
    }

    #[test]
    fn ramp_up_longer_than_duration_is_rejected() {
        assert_eq!(
            hold_time(10, Some(20), PressureTestMode::Linear),
            Err(Error::NegativeDuration {
                duration: 10,
                ramp_up: 20
            })
        );
    }

    #[test]
    fn negative_inputs_are_rejected() {
        assert!(matches!(
            hold_time(10, Some(-5), PressureTestMode::Stair),
            Err(Error::ParameterFormat { .. })
        ));
        assert!(matches!(
            hold_time(i64::MIN, Some(1), PressureTestMode::Linear),
            Err(Error::ParameterFormat { .. })
        ));
    }

    #[test]
    fn negative_duration_names_the_field_in_every_mode() {
        for mode in [
            PressureTestMode::Fixed,
            PressureTestMode::Linear,
            PressureTestMode::Stair,
        ] {
            assert_eq!(
                hold_time(-1, None, mode),
                Err(Error::ParameterFormat {
                    field: "duration".to_string(),
                    value: "-1".to_string(),
                }),
                "mode {mode}"
            );
        }
    }
}
