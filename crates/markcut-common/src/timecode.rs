//! Conversion between `HH:MM:SS` text and whole seconds.
//!
//! Parsing is a permissive sum of fields: minutes and seconds are not
//! limited to 0-59, so `00:90:00` is 5400 seconds. Formatting never wraps
//! the hours field; it simply grows past two digits.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::{Error, Result};

/// Whole seconds since the start of the media.
pub type Seconds = u64;

const SECS_PER_MINUTE: Seconds = 60;
const SECS_PER_HOUR: Seconds = 60 * 60;

/// Parse `HH:MM:SS` into seconds.
///
/// # Errors
///
/// Returns [`Error::Format`] when the text does not have exactly three
/// colon-separated components, when a component is not an unsigned base-10
/// integer, or when the total does not fit in [`Seconds`].
///
/// # Examples
///
/// ```
/// use markcut_common::timecode;
///
/// assert_eq!(timecode::parse("01:02:03").unwrap(), 3723);
/// assert_eq!(timecode::parse("00:90:00").unwrap(), 5400);
/// assert!(timecode::parse("1:2").is_err());
/// ```
pub fn parse(text: &str) -> Result<Seconds> {
    let components: Vec<&str> = text.split(':').collect();
    let &[hours, minutes, seconds] = components.as_slice() else {
        return Err(Error::format(
            text,
            format!("expected 3 components, found {}", components.len()),
        ));
    };

    let hours = parse_component(text, "hours", hours)?;
    let minutes = parse_component(text, "minutes", minutes)?;
    let seconds = parse_component(text, "seconds", seconds)?;

    hours
        .checked_mul(SECS_PER_HOUR)
        .and_then(|total| total.checked_add(minutes.checked_mul(SECS_PER_MINUTE)?))
        .and_then(|total| total.checked_add(seconds))
        .ok_or_else(|| Error::format(text, "timestamp is too large"))
}

fn parse_component(text: &str, field: &str, component: &str) -> Result<Seconds> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::format(
            text,
            format!("{field} component {component:?} is not a base-10 integer"),
        ));
    }

    component
        .parse()
        .map_err(|_| Error::format(text, format!("{field} component {component:?} is too large")))
}

/// Render seconds as `HH:MM:SS`, each field zero-padded to two digits.
///
/// ```
/// use markcut_common::timecode;
///
/// assert_eq!(timecode::format(40), "00:00:40");
/// assert_eq!(timecode::format(360_000), "100:00:00");
/// ```
pub fn format(secs: Seconds) -> String {
    let hh = secs / SECS_PER_HOUR;
    let mm = secs / SECS_PER_MINUTE % 60;
    let ss = secs % 60;
    format!("{hh:02}:{mm:02}:{ss:02}")
}

/// A point in time that displays and serializes as `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timecode(pub Seconds);

impl Timecode {
    /// The wrapped number of seconds.
    pub fn secs(self) -> Seconds {
        self.0
    }
}

impl From<Seconds> for Timecode {
    fn from(secs: Seconds) -> Self {
        Self(secs)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self.0))
    }
}

impl FromStr for Timecode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s).map(Self)
    }
}

impl Serialize for Timecode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use proptest::prelude::*;

    #[test]
    fn parse_sums_fields() {
        assert_eq!(parse("00:00:00").unwrap(), 0);
        assert_eq!(parse("00:00:10").unwrap(), 10);
        assert_eq!(parse("00:01:30").unwrap(), 90);
        assert_eq!(parse("02:00:00").unwrap(), 7200);
        assert_eq!(parse("1:2:3").unwrap(), 3723);
    }

    #[test]
    fn parse_accepts_out_of_clock_range_fields() {
        assert_eq!(parse("00:00:75").unwrap(), 75);
        assert_eq!(parse("00:61:00").unwrap(), 3660);
        assert_eq!(parse("123:00:00").unwrap(), 442_800);
    }

    #[test]
    fn parse_rejects_wrong_component_count() {
        for text in ["1:2", "", "10", "00:00:00:00"] {
            let err = parse(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "{text:?}");
        }
        let err = parse("1:2").unwrap_err();
        assert!(err.to_string().contains("expected 3 components, found 2"));
    }

    #[test]
    fn parse_rejects_non_integer_components() {
        for text in ["aa:00:00", "00:0x:00", "00:00:1.5", "00::00", "-1:00:00", "+1:00:00", " 1:00:00"] {
            let err = parse(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "{text:?}");
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        let err = parse("99999999999999999999:00:00").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        let err = parse(&format!("{}:00:00", u64::MAX / 3600 + 1)).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn format_pads_and_grows_hours() {
        assert_eq!(format(0), "00:00:00");
        assert_eq!(format(5), "00:00:05");
        assert_eq!(format(3723), "01:02:03");
        assert_eq!(format(359_999), "99:59:59");
        assert_eq!(format(360_000), "100:00:00");
    }

    #[test]
    fn timecode_serializes_as_text() {
        assert_eq!(Timecode(40).to_string(), "00:00:40");
        assert_eq!("00:01:00".parse::<Timecode>().unwrap(), Timecode(60));
    }

    proptest! {
        #[test]
        fn format_then_parse_round_trips(secs in any::<u64>()) {
            prop_assert_eq!(parse(&format(secs)).unwrap(), secs);
        }

        #[test]
        fn two_digit_fields_below_100_hours(secs in 0u64..360_000) {
            let text = format(secs);
            prop_assert_eq!(text.len(), 8);
        }

        #[test]
        fn parse_is_deterministic(h in 0u64..10_000, m in 0u64..1000, s in 0u64..1000) {
            let text = std::format!("{h:02}:{m:02}:{s:02}");
            let first = parse(&text).unwrap();
            prop_assert_eq!(first, 3600 * h + 60 * m + s);
            prop_assert_eq!(parse(&text).unwrap(), first);
        }
    }
}
