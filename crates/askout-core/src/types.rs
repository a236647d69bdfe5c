//! Core domain types for the date flow

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which screen of the card is active.
///
/// Exactly one step is active at a time and it alone decides which view
/// the card renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowStep {
    /// The opening question with Yes / No
    #[default]
    Initial,
    /// Picking one of the fixed date ideas
    DateOptions,
    /// A date idea was picked (terminal for the session)
    Confirmed,
    /// The user said no and confirmed it
    Rejected,
}

impl FlowStep {
    pub const ALL: [FlowStep; 4] = [
        FlowStep::Initial,
        FlowStep::DateOptions,
        FlowStep::Confirmed,
        FlowStep::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowStep::Initial => "initial",
            FlowStep::DateOptions => "dateOptions",
            FlowStep::Confirmed => "confirmed",
            FlowStep::Rejected => "rejected",
        }
    }

    /// Whether the floating glyph decoration is shown for this step
    pub fn has_floating_glyphs(&self) -> bool {
        matches!(self, FlowStep::Confirmed | FlowStep::Rejected)
    }
}

impl fmt::Display for FlowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowStep {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FlowStep::ALL
            .into_iter()
            .find(|step| step.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::unknown_step(s))
    }
}

/// One of the fixed date ideas offered on the options screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateOption {
    pub label: &'static str,
    pub glyph: &'static str,
}

/// The three date ideas, in display order.
pub static DATE_OPTIONS: [DateOption; 3] = [
    DateOption {
        label: "Coffee Date",
        glyph: "☕",
    },
    DateOption {
        label: "Pizza Night",
        glyph: "🍕",
    },
    DateOption {
        label: "Movie Time",
        glyph: "🎬",
    },
];

impl DateOption {
    /// Look up an option by its 0-based display index.
    pub fn by_index(index: usize) -> Result<&'static DateOption> {
        DATE_OPTIONS
            .get(index)
            .ok_or_else(|| Error::unknown_date_option(format!("#{}", index + 1)))
    }

    /// Look up an option by label (case-insensitive).
    pub fn by_label(label: &str) -> Result<&'static DateOption> {
        let wanted = label.trim();
        DATE_OPTIONS
            .iter()
            .find(|opt| opt.label.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::unknown_date_option(wanted))
    }
}

/// Header title and description shown above the card body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderContent {
    pub title: &'static str,
    pub description: &'static str,
}

impl HeaderContent {
    pub fn for_step(step: FlowStep) -> Self {
        match step {
            FlowStep::Initial => Self {
                title: "Hey there, Cutie! 💖",
                description: "I've been gathering up some courage to ask you something...",
            },
            FlowStep::DateOptions => Self {
                title: "Yay! You said yes! 🎉",
                description: "Now, let's pick the perfect date idea...",
            },
            FlowStep::Confirmed => Self {
                title: "It's a date! 😍",
                description: "I can't wait to spend time with you!",
            },
            FlowStep::Rejected => Self {
                title: "Aw, maybe next time? 😊",
                description: "No worries, I still think you're awesome!",
            },
        }
    }

    /// Header for a step given by name; unknown names get the opening header.
    pub fn for_step_name(name: &str) -> Self {
        Self::for_step(name.parse().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_step_default_is_initial() {
        assert_eq!(FlowStep::default(), FlowStep::Initial);
    }

    #[test]
    fn test_flow_step_parse_roundtrips_names() {
        for step in FlowStep::ALL {
            assert_eq!(step.as_str().parse::<FlowStep>().unwrap(), step);
        }
        assert_eq!(
            "DATEOPTIONS".parse::<FlowStep>().unwrap(),
            FlowStep::DateOptions
        );
    }

    #[test]
    fn test_flow_step_parse_unknown_is_error() {
        let err = "celebrating".parse::<FlowStep>().unwrap_err();
        assert!(err.to_string().contains("celebrating"));
    }

    #[test]
    fn test_flow_step_serializes_camel_case() {
        let json = serde_json::to_string(&FlowStep::DateOptions).unwrap();
        assert_eq!(json, "\"dateOptions\"");
    }

    #[test]
    fn test_floating_glyph_steps() {
        assert!(!FlowStep::Initial.has_floating_glyphs());
        assert!(!FlowStep::DateOptions.has_floating_glyphs());
        assert!(FlowStep::Confirmed.has_floating_glyphs());
        assert!(FlowStep::Rejected.has_floating_glyphs());
    }

    #[test]
    fn test_date_options_are_fixed() {
        let labels: Vec<_> = DATE_OPTIONS.iter().map(|o| o.label).collect();
        assert_eq!(labels, ["Coffee Date", "Pizza Night", "Movie Time"]);
        let glyphs: Vec<_> = DATE_OPTIONS.iter().map(|o| o.glyph).collect();
        assert_eq!(glyphs, ["☕", "🍕", "🎬"]);
    }

    #[test]
    fn test_date_option_lookup() {
        assert_eq!(DateOption::by_index(1).unwrap().label, "Pizza Night");
        assert_eq!(DateOption::by_label("movie time").unwrap().glyph, "🎬");
        assert_eq!(
            DateOption::by_label("  Coffee Date ").unwrap().label,
            "Coffee Date"
        );
    }

    #[test]
    fn test_date_option_lookup_failures() {
        assert!(matches!(
            DateOption::by_index(3),
            Err(Error::UnknownDateOption { .. })
        ));
        let err = DateOption::by_label("Picnic").unwrap_err();
        assert!(err.to_string().contains("Picnic"));
    }

    #[test]
    fn test_header_for_each_step() {
        assert_eq!(
            HeaderContent::for_step(FlowStep::Initial).title,
            "Hey there, Cutie! 💖"
        );
        assert_eq!(
            HeaderContent::for_step(FlowStep::DateOptions).description,
            "Now, let's pick the perfect date idea..."
        );
        assert_eq!(
            HeaderContent::for_step(FlowStep::Confirmed).title,
            "It's a date! 😍"
        );
        assert_eq!(
            HeaderContent::for_step(FlowStep::Rejected).description,
            "No worries, I still think you're awesome!"
        );
    }

    #[test]
    fn test_header_unknown_step_falls_back_to_initial() {
        assert_eq!(
            HeaderContent::for_step_name("bogus"),
            HeaderContent::for_step(FlowStep::Initial)
        );
        assert_eq!(
            HeaderContent::for_step_name("rejected"),
            HeaderContent::for_step(FlowStep::Rejected)
        );
    }
}
