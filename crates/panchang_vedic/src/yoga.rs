//! Yoga from the sum of Sun and Moon longitudes.

use crate::partition::YOGA_PARTITION;
use crate::util::normalize_360;

/// The 27 yogas, Vishkumbha first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoga {
    Vishkumbha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkumbha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

/// Auspiciousness class attached to each yoga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YogaEffect {
    Auspicious,
    VeryAuspicious,
    Inauspicious,
}

impl YogaEffect {
    /// Display label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auspicious => "Auspicious",
            Self::VeryAuspicious => "Very Auspicious",
            Self::Inauspicious => "Inauspicious",
        }
    }
}

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkumbha => "Vishkumbha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 0-based index (Vishkumbha=0 .. Vaidhriti=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn effect(self) -> YogaEffect {
        match self {
            Self::Saubhagya
            | Self::Vriddhi
            | Self::Vajra
            | Self::Siddhi
            | Self::Shubha
            | Self::Shukla
            | Self::Indra => YogaEffect::VeryAuspicious,
            Self::Vishkumbha
            | Self::Atiganda
            | Self::Shula
            | Self::Ganda
            | Self::Vyaghata
            | Self::Vyatipata
            | Self::Variyan
            | Self::Parigha
            | Self::Brahma
            | Self::Vaidhriti => YogaEffect::Inauspicious,
            _ => YogaEffect::Auspicious,
        }
    }
}

/// Result of a yoga lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInfo {
    pub yoga: Yoga,
    /// 0-based yoga index (0..26).
    pub yoga_index: u8,
    pub effect: YogaEffect,
    /// Normalized Sun + Moon sum in degrees.
    pub sum_deg: f64,
}

/// Determine yoga from `sun + moon` longitude (normalized here).
pub fn yoga_from_sum(sum_deg: f64) -> YogaInfo {
    let sum = normalize_360(sum_deg);
    let idx = YOGA_PARTITION.index_of(sum);
    let yoga = ALL_YOGAS[idx as usize];
    YogaInfo {
        yoga,
        yoga_index: idx as u8,
        effect: yoga.effect(),
        sum_deg: sum,
    }
}
