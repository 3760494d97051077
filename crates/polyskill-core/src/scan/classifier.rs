//! URL reputation classifier.
//!
//! Turns a raw engine-vote tally into a one-line risk verdict plus the
//! rendered tally. The decisive signal is the balance between "clean"
//! and "unrated" votes; anything without either key is treated as
//! hostile-dominated.

use polyskill_types::reputation::ReputationTally;

/// Unrated/clean ratio at or above this reads as suspicious.
const SUSPICIOUS_RATIO: f64 = 1.2;
/// Unrated/clean ratio at or below this reads as safe.
const SAFE_RATIO: f64 = 0.1;

/// Human-readable risk label derived from engine vote counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskVerdict {
    /// Noticeably more unrated than clean votes.
    Suspicious,
    /// Clean votes dominate.
    Safe,
    /// Mixed or unusual vote shape.
    Odd,
    /// Neither "clean" nor "unrated" present: hostile verdicts dominate.
    Avoid,
}

impl RiskVerdict {
    /// The verdict line shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            RiskVerdict::Suspicious => "Какая-то странная ссылка, будь внимателен",
            RiskVerdict::Safe => "Все классно, должно быть безопасно!",
            RiskVerdict::Odd => "Что-то странное 0_o",
            RiskVerdict::Avoid => {
                "Оу, братец, как-то подозрительно не думаю, что стоит переходить, либо используй защиту!"
            }
        }
    }
}

/// Classify a tally into a [`RiskVerdict`].
///
/// Keys present in the tally map to counts >= 1 by construction; the
/// division is still guarded so a hand-built zero-count tally cannot
/// divide by zero.
pub fn classify(tally: &ReputationTally) -> RiskVerdict {
    let clean = tally.get("clean");
    let unrated = tally.get("unrated");

    match (clean, unrated) {
        (Some(clean), Some(unrated)) => {
            if clean == 0 {
                return RiskVerdict::Suspicious;
            }
            let ratio = f64::from(unrated) / f64::from(clean);
            if ratio >= SUSPICIOUS_RATIO {
                RiskVerdict::Suspicious
            } else if ratio <= SAFE_RATIO {
                RiskVerdict::Safe
            } else {
                RiskVerdict::Odd
            }
        }
        (Some(_), None) => RiskVerdict::Safe,
        (None, Some(_)) => RiskVerdict::Odd,
        (None, None) => RiskVerdict::Avoid,
    }
}

/// Render the tally as `"<verdict> = <count>"` pairs in tally order.
pub fn render_tally(tally: &ReputationTally) -> String {
    tally
        .iter()
        .map(|(verdict, count)| format!("{verdict} = {count}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full user-facing report: verdict line plus the rendered tally.
pub fn report(tally: &ReputationTally) -> String {
    format!(
        "{}\nОтчет антивирусов: {}",
        classify(tally).message(),
        render_tally(tally)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(pairs: &[(&str, u32)]) -> ReputationTally {
        pairs
            .iter()
            .map(|(v, c)| (v.to_string(), *c))
            .collect()
    }

    #[test]
    fn test_mostly_clean_is_safe() {
        let t = tally(&[("clean", 60), ("unrated", 2)]);
        assert_eq!(classify(&t), RiskVerdict::Safe);
    }

    #[test]
    fn test_zero_unrated_with_clean_is_safe() {
        // ratio 0 <= 0.1
        let t = tally(&[("clean", 5), ("unrated", 0)]);
        assert_eq!(classify(&t), RiskVerdict::Safe);
    }

    #[test]
    fn test_unrated_dominates_is_suspicious() {
        let t = tally(&[("clean", 10), ("unrated", 12)]);
        assert_eq!(classify(&t), RiskVerdict::Suspicious);
    }

    #[test]
    fn test_middle_ratio_is_odd() {
        let t = tally(&[("clean", 10), ("unrated", 5)]);
        assert_eq!(classify(&t), RiskVerdict::Odd);
    }

    #[test]
    fn test_only_clean_is_safe() {
        let t = tally(&[("clean", 70)]);
        assert_eq!(classify(&t), RiskVerdict::Safe);
    }

    #[test]
    fn test_only_unrated_is_odd() {
        let t = tally(&[("unrated", 70)]);
        assert_eq!(classify(&t), RiskVerdict::Odd);
    }

    #[test]
    fn test_only_malicious_is_avoid() {
        let t = tally(&[("malicious", 40), ("phishing", 3)]);
        assert_eq!(classify(&t), RiskVerdict::Avoid);
    }

    #[test]
    fn test_zero_clean_guard() {
        let t = tally(&[("clean", 0), ("unrated", 7)]);
        assert_eq!(classify(&t), RiskVerdict::Suspicious);
    }

    #[test]
    fn test_render_tally_preserves_order() {
        let t = tally(&[("clean", 60), ("unrated", 2)]);
        assert_eq!(render_tally(&t), "clean = 60 unrated = 2");
    }

    #[test]
    fn test_report_contains_verdict_and_tally() {
        let t = tally(&[("clean", 60), ("unrated", 2)]);
        let report = report(&t);
        assert!(report.starts_with(RiskVerdict::Safe.message()));
        assert!(report.ends_with("Отчет антивирусов: clean = 60 unrated = 2"));
    }
}
