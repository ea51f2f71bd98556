use crate::app::view::{NoticeLevel, RenderedPage};
use crate::app::view_model::{DiagnosticsControls, PageId};
use crate::core::diagnostics;
use crate::domain::model::Diagnosis;

const GENETICS_NOTE: &str = "**Diagnostic Enhancement:** Nutrient deficiency patterns correlate \
with genetic variations in transport genes (e.g. **IRT1** for Iron, **HMA4** for Zinc). Plants \
with specific variations in these transporters may show more pronounced symptoms.";

pub fn render(controls: &DiagnosticsControls) -> RenderedPage {
    let mut page = RenderedPage::new(PageId::Diagnostics);
    page.heading("Deficiency Detective")
        .markdown(
            "Identify 'Hidden Hunger' (Micronutrient Deficiency) based on visual symptoms.",
        )
        .notice(NoticeLevel::Info, GENETICS_NOTE)
        .metric(
            "Where are the symptoms located?",
            controls.location.map_or("Select...", |l| l.label()),
        )
        .metric(
            "What is the pattern?",
            controls.pattern.map_or("Select...", |p| p.label()),
        )
        .divider();

    match diagnostics::diagnose(controls.location, controls.pattern) {
        Ok(Diagnosis::Deficiency {
            nutrient,
            note,
            recommendation,
        }) => {
            page.notice(NoticeLevel::Warning, format!("**Diagnosis: {} Deficiency**", nutrient));
            if let Some(note) = note {
                page.markdown(note);
            }
            if let Some(recommendation) = recommendation {
                page.notice(NoticeLevel::Info, format!("**Recommendation:** {}", recommendation));
            }
        }
        Ok(Diagnosis::LowConfidence) => {
            page.notice(NoticeLevel::Error, "Unable to determine with high confidence.");
        }
        Ok(Diagnosis::Inconclusive) => {
            page.notice(
                NoticeLevel::Info,
                "Analysis inconclusive. Please consult a lab test.",
            );
        }
        Err(e) => {
            page.notice(NoticeLevel::Error, e.user_friendly_message());
        }
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{SymptomLocation, SymptomPattern};

    #[test]
    fn test_unselected_shows_validation_message() {
        let page = render(&DiagnosticsControls {
            location: Some(SymptomLocation::NewLeaves),
            pattern: None,
        });
        assert_eq!(
            page.notices(NoticeLevel::Error).next(),
            Some(diagnostics::INCOMPLETE_SELECTION)
        );
        assert_eq!(page.notices(NoticeLevel::Warning).count(), 0);
    }

    #[test]
    fn test_iron_diagnosis() {
        let page = render(&DiagnosticsControls {
            location: Some(SymptomLocation::NewLeaves),
            pattern: Some(SymptomPattern::InterveinalChlorosis),
        });
        assert_eq!(
            page.notices(NoticeLevel::Warning).next(),
            Some("**Diagnosis: Iron (Fe) Deficiency**")
        );
    }
}
