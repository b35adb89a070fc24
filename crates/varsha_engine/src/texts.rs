//! Narrative text port.
//!
//! All prose in the results flows through [`TextProvider`] so hosts can
//! swap in their own copy or translations. Numeric outputs never depend
//! on the language; only these strings do. [`BuiltinTexts`] ships small
//! English and Hindi templates.

use serde::{Deserialize, Serialize};
use varsha_base::{AspectGeometry, AspectNature, BalaGrade, Graha, PatakiSector, Rashi, Saham};

/// Output language for narrative strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }
}

/// Template lookup injected into the engine alongside the ephemeris.
pub trait TextProvider: Send + Sync {
    /// Message for a target year before the birth year.
    fn year_before_birth(&self, language: Language, year: i32, birth_year: i32) -> String;

    /// One-line effect text for a matched aspect.
    fn aspect_effect(&self, language: Language, geometry: &AspectGeometry) -> String;

    /// Narrative for the Muntha's sign and house placement.
    fn muntha_narrative(&self, language: Language, rashi: Rashi, house: u8) -> String;

    /// Narrative for one Saham, reflecting whether it is active.
    fn saham_narrative(&self, language: Language, saham: Saham, active: bool) -> String;

    /// Interpretation for the dominant Tri-Pataki sector.
    fn tri_pataki_interpretation(
        &self,
        language: Language,
        sector: PatakiSector,
        count: usize,
    ) -> String;

    /// Narrative for one house prediction.
    fn house_narrative(&self, language: Language, house: u8, grade: BalaGrade) -> String;

    /// Event line for the house seating the Year Lord.
    fn year_lord_presence(&self, language: Language, lord: Graha, house: u8) -> String;

    /// Event line for the house seating the Muntha.
    fn muntha_presence(&self, language: Language, house: u8) -> String;

    /// Overall year summary from the Year Lord and its strength.
    fn overall_summary(&self, language: Language, year_lord: Graha, grade: BalaGrade) -> String;

    /// Key-event line for a Mudda period change.
    fn period_begins(&self, language: Language, graha: Graha) -> String;

    /// Key-event line for the solar-return instant itself.
    fn solar_return_event(&self, language: Language) -> String;
}

/// Compact built-in templates, English and Hindi.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTexts;

impl BuiltinTexts {
    fn grade_phrase(language: Language, grade: BalaGrade) -> &'static str {
        match (language, grade) {
            (Language::English, BalaGrade::Purna) => "excellent support",
            (Language::English, BalaGrade::Adhika) => "strong support",
            (Language::English, BalaGrade::Madhya) => "steady but mixed support",
            (Language::English, BalaGrade::Alpa) => "weak support",
            (Language::English, BalaGrade::Heena) => "little support",
            (Language::Hindi, BalaGrade::Purna) => "उत्तम बल",
            (Language::Hindi, BalaGrade::Adhika) => "अधिक बल",
            (Language::Hindi, BalaGrade::Madhya) => "मध्यम बल",
            (Language::Hindi, BalaGrade::Alpa) => "अल्प बल",
            (Language::Hindi, BalaGrade::Heena) => "हीन बल",
        }
    }
}

impl TextProvider for BuiltinTexts {
    fn year_before_birth(&self, language: Language, year: i32, birth_year: i32) -> String {
        match language {
            Language::English => {
                format!("target year {year} precedes the birth year {birth_year}")
            }
            Language::Hindi => {
                format!("लक्षित वर्ष {year} जन्म वर्ष {birth_year} से पहले है")
            }
        }
    }

    fn aspect_effect(&self, language: Language, geometry: &AspectGeometry) -> String {
        let a = geometry.graha_a.name();
        let b = geometry.graha_b.name();
        let aspect = geometry.aspect.name();
        match (language, geometry.aspect.nature()) {
            (Language::English, AspectNature::Harmonious) => {
                format!("{a}-{b} {aspect}: cooperative, eases the houses it touches")
            }
            (Language::English, AspectNature::Tense) => {
                format!("{a}-{b} {aspect}: friction, demands effort in the houses it touches")
            }
            (Language::English, AspectNature::Neutral) => {
                format!("{a}-{b} {aspect}: blends both planets' significations")
            }
            (Language::Hindi, AspectNature::Harmonious) => {
                format!("{a}-{b} {aspect}: शुभ योग, संबंधित भावों को सहारा देता है")
            }
            (Language::Hindi, AspectNature::Tense) => {
                format!("{a}-{b} {aspect}: तनावपूर्ण योग, प्रयास की मांग करता है")
            }
            (Language::Hindi, AspectNature::Neutral) => {
                format!("{a}-{b} {aspect}: दोनों ग्रहों के फल मिश्रित होते हैं")
            }
        }
    }

    fn muntha_narrative(&self, language: Language, rashi: Rashi, house: u8) -> String {
        match language {
            Language::English => format!(
                "the Muntha transits {} in house {house}, focusing the year there",
                rashi.name()
            ),
            Language::Hindi => format!(
                "मुंथा {} राशि में भाव {house} में है, वर्ष का केंद्र वहीं रहेगा",
                rashi.name()
            ),
        }
    }

    fn saham_narrative(&self, language: Language, saham: Saham, active: bool) -> String {
        match (language, active) {
            (Language::English, true) => format!(
                "{} ({}) is activated by the running dasha lord",
                saham.name(),
                saham.meaning()
            ),
            (Language::English, false) => format!(
                "{} ({}) stays latent this year",
                saham.name(),
                saham.meaning()
            ),
            (Language::Hindi, true) => {
                format!("{} साहम चालू दशा स्वामी से सक्रिय है", saham.name())
            }
            (Language::Hindi, false) => {
                format!("{} साहम इस वर्ष सुप्त रहेगा", saham.name())
            }
        }
    }

    fn tri_pataki_interpretation(
        &self,
        language: Language,
        sector: PatakiSector,
        count: usize,
    ) -> String {
        match language {
            Language::English => format!(
                "{} grahas gather in the {} sector: the year leans toward its {} themes",
                count,
                sector.name(),
                sector.role()
            ),
            Language::Hindi => format!(
                "{} ग्रह {} खंड में हैं, वर्ष उसी दिशा में झुका रहेगा",
                count,
                sector.name()
            ),
        }
    }

    fn house_narrative(&self, language: Language, house: u8, grade: BalaGrade) -> String {
        match language {
            Language::English => format!(
                "house {house} carries {} this year",
                Self::grade_phrase(language, grade)
            ),
            Language::Hindi => format!(
                "भाव {house} को इस वर्ष {} प्राप्त है",
                Self::grade_phrase(language, grade)
            ),
        }
    }

    fn year_lord_presence(&self, language: Language, lord: Graha, house: u8) -> String {
        match language {
            Language::English => format!(
                "the year lord {} operates from house {house}",
                lord.name()
            ),
            Language::Hindi => format!(
                "वर्षेश {} भाव {house} से कार्य करता है",
                lord.name()
            ),
        }
    }

    fn muntha_presence(&self, language: Language, house: u8) -> String {
        match language {
            Language::English => format!("the Muntha rests in house {house} this year"),
            Language::Hindi => format!("मुंथा इस वर्ष भाव {house} में स्थित है"),
        }
    }

    fn overall_summary(&self, language: Language, year_lord: Graha, grade: BalaGrade) -> String {
        match language {
            Language::English => format!(
                "{} rules the year with {}; plan the year around its significations",
                year_lord.name(),
                Self::grade_phrase(language, grade)
            ),
            Language::Hindi => format!(
                "वर्षेश {} है और उसे {} प्राप्त है; वर्ष की योजना उसी के अनुसार करें",
                year_lord.name(),
                Self::grade_phrase(language, grade)
            ),
        }
    }

    fn period_begins(&self, language: Language, graha: Graha) -> String {
        match language {
            Language::English => format!("{} Mudda dasha begins", graha.name()),
            Language::Hindi => format!("{} की मुद्दा दशा आरंभ होती है", graha.name()),
        }
    }

    fn solar_return_event(&self, language: Language) -> String {
        match language {
            Language::English => "solar return: the annual chart takes effect".to_string(),
            Language::Hindi => "वर्ष प्रवेश: वार्षिक कुंडली प्रभाव में आती है".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn year_message_carries_both_years() {
        let t = BuiltinTexts;
        let msg = t.year_before_birth(Language::English, 1980, 1990);
        assert!(msg.contains("1980"));
        assert!(msg.contains("1990"));
        let hi = t.year_before_birth(Language::Hindi, 1980, 1990);
        assert!(hi.contains("1980"));
    }

    #[test]
    fn summaries_differ_by_language_only() {
        let t = BuiltinTexts;
        let en = t.overall_summary(Language::English, Graha::Guru, BalaGrade::Adhika);
        let hi = t.overall_summary(Language::Hindi, Graha::Guru, BalaGrade::Adhika);
        assert_ne!(en, hi);
        assert!(en.contains("Guru"));
        assert!(hi.contains("Guru"));
    }
}
