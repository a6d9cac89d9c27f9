// ── Weekly operating schedule ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Day of the week, matching the backend's `"Sunday"`..`"Saturday"`
/// labels exactly.
///
/// Schedule rows are always located by comparing `Day` values -- never
/// by indexing into the week array.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// Parse a backend day label. Unknown labels yield `None`; the
    /// schedule entry is then treated as absent (closed).
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }
}

impl From<chrono::Weekday> for Day {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

/// Open/close pair for a single day, as the backend records it.
///
/// Times stay strings at the model layer (`"9:00 AM"`, `"17:00"`);
/// parsing happens in the hours evaluator, where any malformed value
/// resolves to "closed" rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub open: String,
    pub close: String,
}

/// One weekday's schedule entry. `period: None` means closed all day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Day,
    pub period: Option<Period>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_mapping_is_by_name() {
        assert_eq!(Day::from(chrono::Weekday::Sun), Day::Sunday);
        assert_eq!(Day::from(chrono::Weekday::Mon), Day::Monday);
        assert_eq!(Day::from(chrono::Weekday::Sat), Day::Saturday);
    }

    #[test]
    fn day_labels_parse() {
        assert_eq!(Day::from_label("Wednesday"), Some(Day::Wednesday));
        assert_eq!(Day::from_label("wednesday"), None);
        assert_eq!(Day::from_label("Funday"), None);
    }
}
