//! Karana (half-tithi).
//!
//! 60 karanas of 6 deg elongation per synodic month. Slot 0 is Kimstughna,
//! slots 1-56 cycle through the seven movable karanas, and the last three
//! slots are Shakuni, Chatushpada and Naga.

use crate::util::normalize_360;

/// Elongation covered by one karana.
pub const KARANA_SPAN: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Whether this karana repeats through the month.
    pub const fn is_movable(self) -> bool {
        matches!(
            self,
            Self::Bava
                | Self::Balava
                | Self::Kaulava
                | Self::Taitila
                | Self::Gara
                | Self::Vanija
                | Self::Vishti
        )
    }

    /// Karana occupying slot `index` (0..59) of the month.
    pub const fn from_sequence_index(index: u8) -> Self {
        match index {
            0 => Self::Kimstughna,
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            59.. => Self::Naga,
            i => MOVABLE[((i - 1) % 7) as usize],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// 0-based karana sequence index within the synodic month (0..59).
    pub karana_index: u8,
}

/// Determine karana from the Moon-Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let d = normalize_360(elongation_deg);
    let idx = ((d / KARANA_SPAN).floor() as u8).min(59);
    KaranaInfo {
        karana: Karana::from_sequence_index(idx),
        karana_index: idx,
    }
}
