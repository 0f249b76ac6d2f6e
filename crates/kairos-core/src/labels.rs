//! Fixed name tables keyed by decoded indices.
//!
//! Every lookup reduces its index with `rem_euclid`, so any `i64` resolves.

use serde::Serialize;

/// Chakra days, in weekday order starting at genesis.
pub const DAY_NAMES: [&str; 6] = ["Solhara", "Aquaris", "Flamora", "Verdari", "Sonari", "Kaelith"];

pub const MONTH_NAMES: [&str; 8] = [
    "Aethon", "Virelai", "Solari", "Amarin", "Kaelus", "Umbriel", "Noctura", "Liora",
];

/// One of the six phases of a day, six beats each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ArcLabel {
    pub name: &'static str,
    /// `#rrggbb`
    pub color: &'static str,
    pub caption: &'static str,
}

pub const ARCS: [ArcLabel; 6] = [
    ArcLabel {
        name: "Ignition",
        color: "#ff0024",
        caption: "Spark the day",
    },
    ArcLabel {
        name: "Integration",
        color: "#ff6f00",
        caption: "Gather what was lit",
    },
    ArcLabel {
        name: "Harmonization",
        color: "#ffd600",
        caption: "Bring the parts into tune",
    },
    ArcLabel {
        name: "Reflection",
        color: "#00c853",
        caption: "See what the day has made",
    },
    ArcLabel {
        name: "Purification",
        color: "#00b0ff",
        caption: "Let go of what is spent",
    },
    ArcLabel {
        name: "Dream",
        color: "#c186ff",
        caption: "Rest and return to the source",
    },
];

fn index(i: i64, len: usize) -> usize {
    i.rem_euclid(len as i64) as usize
}

pub fn day_name(day_index: i64) -> &'static str {
    DAY_NAMES[index(day_index, DAY_NAMES.len())]
}

pub fn month_name(month_index: i64) -> &'static str {
    MONTH_NAMES[index(month_index, MONTH_NAMES.len())]
}

pub fn arc(arc_index: i64) -> &'static ArcLabel {
    &ARCS[index(arc_index, ARCS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moment::decode_moment;

    #[test]
    fn test_genesis_labels() {
        let m = decode_moment(0);
        assert_eq!(day_name(m.day_index.into()), "Solhara");
        assert_eq!(month_name(m.month_index.into()), "Aethon");
        assert_eq!(arc(m.arc_index.into()).name, "Ignition");
    }

    #[test]
    fn test_negative_index_wraps() {
        assert_eq!(day_name(-1), "Kaelith");
        assert_eq!(month_name(-1), "Liora");
        assert_eq!(arc(-7).name, "Dream");
    }

    #[test]
    fn test_overflowing_index_wraps() {
        assert_eq!(day_name(6), "Solhara");
        assert_eq!(month_name(17), "Virelai");
        assert_eq!(arc(i64::MAX).name, ARCS[(i64::MAX % 6) as usize].name);
    }

    #[test]
    fn test_arc_label_does_not_shadow_std_arc() {
        use std::sync::Arc;

        let shared: Arc<&ArcLabel> = Arc::new(arc(0));
        assert_eq!(shared.name, "Ignition");
    }

    #[test]
    fn test_arc_colors_are_hex() {
        for a in &ARCS {
            assert_eq!(a.color.len(), 7);
            assert!(a.color.starts_with('#'));
            assert!(a.color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
