use core::f64::consts::PI;

use crate::math::sign_non_negative;

/// The eight named sectors of the synodic month, in cyclic order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// Phase index -> (phase, display name, glyph).
const PHASE_TABLE: [(MoonPhase, &str, &str); 8] = [
    (MoonPhase::NewMoon, "New Moon", "\u{1F311}"),
    (MoonPhase::WaxingCrescent, "Waxing Crescent", "\u{1F312}"),
    (MoonPhase::FirstQuarter, "First Quarter", "\u{1F313}"),
    (MoonPhase::WaxingGibbous, "Waxing Gibbous", "\u{1F314}"),
    (MoonPhase::FullMoon, "Full Moon", "\u{1F315}"),
    (MoonPhase::WaningGibbous, "Waning Gibbous", "\u{1F316}"),
    (MoonPhase::LastQuarter, "Last Quarter", "\u{1F317}"),
    (MoonPhase::WaningCrescent, "Waning Crescent", "\u{1F318}"),
];

/// Bin edges of the phase value: new, first quarter, full, last quarter, new.
const PHASE_EDGES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

impl MoonPhase {
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Looks up the phase for a cyclic index in `0..8`.
    ///
    /// # Panics
    ///
    /// On an index of 8 or more, which the classifier never produces.
    pub fn from_index(index: usize) -> Self {
        assert!(index < PHASE_TABLE.len(), "moon phase index {index} outside 0..8");
        PHASE_TABLE[index].0
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        PHASE_TABLE[self.index()].1
    }

    pub fn glyph(self) -> &'static str {
        PHASE_TABLE[self.index()].2
    }

    pub fn is_waxing(self) -> bool {
        matches!(
            self,
            MoonPhase::WaxingCrescent | MoonPhase::FirstQuarter | MoonPhase::WaxingGibbous
        )
    }
}

impl core::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Phase value in [0, 1] from the phase angle `inc` and bright-limb `angle`.
///
/// 0 and 1 are new moon, 0.5 is full moon; values below 0.5 are waxing.
pub(crate) fn phase_value(inc: f64, angle: f64) -> f64 {
    0.5 + 0.5 * inc * sign_non_negative(angle) / PI
}

/// Classifies the phase from the phase value of the query day and the next day.
///
/// A day whose interval `[today, tomorrow]` contains a bin edge gets the
/// quarter phase of that edge (even index); otherwise it gets the intermediate
/// phase before the next edge (odd index). When the value wraps from near 1
/// back to near 0 the interval contains the new moon, index 0.
pub(crate) fn classify(today: f64, tomorrow: f64) -> usize {
    if today > tomorrow {
        return 0;
    }
    for (i, &edge) in PHASE_EDGES.iter().enumerate() {
        if edge >= today && edge <= tomorrow {
            return (2 * i) % 8;
        }
        if edge > today {
            // (2i - 1) mod 8 without underflow at i == 0
            return (2 * i + 7) % 8;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_in_cyclic_order() {
        for (i, phase) in MoonPhase::ALL.iter().enumerate() {
            assert_eq!(MoonPhase::from_index(i), *phase);
            assert_eq!(phase.index(), i);
        }
        assert_eq!(MoonPhase::WaningCrescent.glyph(), "\u{1F318}");
        assert_eq!(MoonPhase::FullMoon.name(), "Full Moon");
    }

    #[test]
    #[should_panic(expected = "outside 0..8")]
    fn out_of_range_index_is_a_defect() {
        let _ = MoonPhase::from_index(8);
    }

    #[test]
    fn quarter_edges_win_over_intermediate_phases() {
        assert_eq!(classify(0.24, 0.26), 2);
        assert_eq!(classify(0.49, 0.51), 4);
        assert_eq!(classify(0.74, 0.76), 6);
        assert_eq!(classify(0.25, 0.25), 2);
    }

    #[test]
    fn between_edges_gives_intermediate_phase() {
        assert_eq!(classify(0.10, 0.13), 1);
        assert_eq!(classify(0.30, 0.33), 3);
        assert_eq!(classify(0.60, 0.63), 5);
        assert_eq!(classify(0.80, 0.83), 7);
    }

    #[test]
    fn wrap_through_one_is_new_moon() {
        assert_eq!(classify(0.975, 0.0097), 0);
        assert_eq!(classify(0.99, 1.0), 0);
        assert_eq!(classify(0.0, 0.02), 0);
    }

    #[test]
    fn phase_value_sign_convention() {
        assert_eq!(phase_value(PI, 0.0), 1.0);
        assert_eq!(phase_value(PI, -0.1), 0.0);
        assert_eq!(phase_value(0.0, 1.0), 0.5);
    }
}
