//! Day verdicts and observances derived from a classification.
//!
//! A day scores +1 or -1 on each of three elements:
//! - yoga: +1 for Vishkumbha, Priti, Ayushman, Saubhagya or Shobhana
//! - tithi: -1 for Chaturdashi (either paksha) or Amavasya
//! - nakshatra: -1 for Krittika
//!
//! The day is auspicious when the total is positive.

use crate::classify::PanchangClassification;
use crate::nakshatra::Nakshatra;
use crate::tithi::{Paksha, TithiInfo};
use crate::yoga::{Yoga, YogaEffect};

/// Observances and activities suggested for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observance {
    KaliPuja,
    AncestorWorship,
    LakshmiPuja,
    FullMoonMeditation,
    EkadashiVrat,
    VishnuWorship,
    HouseWarming,
    VehiclePurchase,
    FamilyCeremonies,
    NewEndeavors,
}

impl Observance {
    pub const fn name(self) -> &'static str {
        match self {
            Self::KaliPuja => "Kali Puja",
            Self::AncestorWorship => "Ancestor Worship",
            Self::LakshmiPuja => "Lakshmi Puja",
            Self::FullMoonMeditation => "Full Moon Meditation",
            Self::EkadashiVrat => "Ekadashi Vrat (Fast)",
            Self::VishnuWorship => "Vishnu Worship",
            Self::HouseWarming => "House Warming",
            Self::VehiclePurchase => "Vehicle Purchase",
            Self::FamilyCeremonies => "Family Ceremonies",
            Self::NewEndeavors => "Good for New Endeavors",
        }
    }
}

/// New moon: the 15th tithi of Krishna paksha.
pub fn is_amavasya(tithi: &TithiInfo) -> bool {
    tithi.paksha == Paksha::Krishna && tithi.tithi_in_paksha == 15
}

/// Full moon: the 15th tithi of Shukla paksha.
pub fn is_purnima(tithi: &TithiInfo) -> bool {
    tithi.paksha == Paksha::Shukla && tithi.tithi_in_paksha == 15
}

/// Verdict from the yoga, tithi and nakshatra scores.
pub fn is_auspicious_day(c: &PanchangClassification) -> bool {
    let yoga = match c.yoga.yoga {
        Yoga::Vishkumbha | Yoga::Priti | Yoga::Ayushman | Yoga::Saubhagya | Yoga::Shobhana => 1,
        _ => -1,
    };
    let tithi = if c.tithi.tithi_in_paksha == 14 || is_amavasya(&c.tithi) {
        -1
    } else {
        1
    };
    let nakshatra = if c.nakshatra.nakshatra == Nakshatra::Krittika {
        -1
    } else {
        1
    };
    yoga + tithi + nakshatra > 0
}

/// One-line advice for a verdict.
pub const fn recommendation(auspicious: bool) -> &'static str {
    if auspicious {
        "Favorable day for important activities"
    } else {
        "Day requires caution for major decisions"
    }
}

/// Suggested observances in tithi, nakshatra, yoga order, without repeats.
pub fn observances(c: &PanchangClassification) -> Vec<Observance> {
    let mut out = Vec::new();
    let mut push = |o: Observance| {
        if !out.contains(&o) {
            out.push(o);
        }
    };

    if is_amavasya(&c.tithi) {
        push(Observance::KaliPuja);
        push(Observance::AncestorWorship);
    }
    if is_purnima(&c.tithi) {
        push(Observance::LakshmiPuja);
        push(Observance::FullMoonMeditation);
    }
    if c.tithi.tithi_in_paksha == 11 {
        push(Observance::EkadashiVrat);
        push(Observance::VishnuWorship);
    }

    match c.nakshatra.nakshatra {
        Nakshatra::Rohini => {
            push(Observance::HouseWarming);
            push(Observance::VehiclePurchase);
        }
        Nakshatra::Magha => {
            push(Observance::AncestorWorship);
            push(Observance::FamilyCeremonies);
        }
        _ => {}
    }

    if c.yoga.effect != YogaEffect::Inauspicious {
        push(Observance::NewEndeavors);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::nakshatra::NAKSHATRA_SPAN;
    use crate::util::normalize_360;

    fn at(elongation: f64, moon: f64) -> PanchangClassification {
        classify(normalize_360(moon - elongation), moon).unwrap()
    }

    #[test]
    fn new_year_2024_is_auspicious() {
        // Krishna Shashthi, Hasta, Sukarma
        let c = classify(280.651_232_897_334_9, 162.607_853_008_637_9).unwrap();
        assert!(is_auspicious_day(&c));
        assert_eq!(observances(&c), vec![Observance::NewEndeavors]);
        assert_eq!(recommendation(true), "Favorable day for important activities");
    }

    #[test]
    fn amavasya_in_magha_lists_ancestor_worship_once() {
        // Elongation in the last tithi, Moon in Magha
        let moon = 9.0 * NAKSHATRA_SPAN + 1.0;
        let c = at(354.0, moon);
        assert!(is_amavasya(&c.tithi));
        assert_eq!(c.nakshatra.nakshatra, Nakshatra::Magha);
        let obs = observances(&c);
        assert_eq!(obs[0], Observance::KaliPuja);
        assert_eq!(
            obs.iter().filter(|&&o| o == Observance::AncestorWorship).count(),
            1
        );
        assert!(obs.contains(&Observance::FamilyCeremonies));
    }

    #[test]
    fn purnima_and_ekadashi() {
        let c = at(174.0, 50.0);
        assert!(is_purnima(&c.tithi));
        assert!(observances(&c).contains(&Observance::LakshmiPuja));

        let shukla_ekadashi = at(125.0, 50.0);
        assert_eq!(shukla_ekadashi.tithi.tithi_in_paksha, 11);
        let krishna_ekadashi = at(305.0, 50.0);
        assert_eq!(krishna_ekadashi.tithi.tithi_in_paksha, 11);
        for c in [shukla_ekadashi, krishna_ekadashi] {
            let obs = observances(&c);
            assert!(obs.contains(&Observance::EkadashiVrat));
            assert!(obs.contains(&Observance::VishnuWorship));
        }
    }

    #[test]
    fn rohini_suggests_house_warming() {
        let c = at(30.0, 3.0 * NAKSHATRA_SPAN + 2.0);
        assert_eq!(c.nakshatra.nakshatra, Nakshatra::Rohini);
        assert!(observances(&c).contains(&Observance::HouseWarming));
    }

    #[test]
    fn chaturdashi_in_krittika_is_inauspicious() {
        // Krishna Chaturdashi (raw tithi 28), Moon early in Krittika
        let c = at(28.0 * 12.0 + 1.0, 2.0 * NAKSHATRA_SPAN + 1.0);
        assert_eq!(c.tithi.tithi_in_paksha, 14);
        assert_eq!(c.nakshatra.nakshatra, Nakshatra::Krittika);
        assert!(!is_auspicious_day(&c));
        assert_eq!(recommendation(false), "Day requires caution for major decisions");
    }

    #[test]
    fn verdict_counts_three_scores() {
        // Shukla Dwitiya: tithi +1, nakshatra +1 outside Krittika
        for sun in (0..360).step_by(5) {
            let sun = sun as f64;
            let c = classify(sun, normalize_360(sun + 13.0)).unwrap();
            if c.nakshatra.nakshatra == Nakshatra::Krittika {
                continue;
            }
            assert!(is_auspicious_day(&c), "sun {sun} yoga {:?}", c.yoga.yoga);
        }
    }

    #[test]
    fn names() {
        assert_eq!(Observance::EkadashiVrat.name(), "Ekadashi Vrat (Fast)");
        assert_eq!(Observance::NewEndeavors.name(), "Good for New Endeavors");
    }
}
