//! Vaar (weekday).

use panchang_time::weekday_index;

/// The seven weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Weekday of a Julian Day Number.
pub fn vaar_from_jdn(jdn: i64) -> Vaar {
    ALL_VAARS[weekday_index(jdn) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_weekdays() {
        assert_eq!(vaar_from_jdn(2_451_545), Vaar::Shanivaar);
        assert_eq!(vaar_from_jdn(2_460_311), Vaar::Somvaar);
        assert_eq!(vaar_from_jdn(2_460_311).english_name(), "Monday");
    }

    #[test]
    fn cycles_weekly() {
        for d in 0..14 {
            let a = vaar_from_jdn(2_460_000 + d);
            let b = vaar_from_jdn(2_460_007 + d);
            assert_eq!(a, b);
        }
    }
}
