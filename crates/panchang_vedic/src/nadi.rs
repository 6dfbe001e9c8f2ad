//! Nadi (Chandra or Surya) of the day's tithi.
//!
//! Tithis 1-3, 7-9 and 13-15 of Shukla paksha are Chandra nadi and the
//! rest are Surya nadi. Krishna paksha reverses the assignment.

use crate::tithi::Paksha;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nadi {
    Chandra,
    Surya,
}

impl Nadi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chandra => "Chandra",
            Self::Surya => "Surya",
        }
    }
}

/// Nadi for a paksha-relative tithi number (1-15).
pub fn nadi_for(paksha: Paksha, tithi_in_paksha: u8) -> Nadi {
    let lunar_block = matches!(tithi_in_paksha, 1..=3 | 7..=9 | 13..=15);
    match (paksha, lunar_block) {
        (Paksha::Shukla, true) | (Paksha::Krishna, false) => Nadi::Chandra,
        _ => Nadi::Surya,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shukla_blocks() {
        assert_eq!(nadi_for(Paksha::Shukla, 1), Nadi::Chandra);
        assert_eq!(nadi_for(Paksha::Shukla, 4), Nadi::Surya);
        assert_eq!(nadi_for(Paksha::Shukla, 15), Nadi::Chandra);
    }

    #[test]
    fn krishna_reverses() {
        for t in 1..=15u8 {
            assert_ne!(nadi_for(Paksha::Shukla, t), nadi_for(Paksha::Krishna, t));
        }
        assert_eq!(nadi_for(Paksha::Krishna, 6), Nadi::Chandra);
    }
}
