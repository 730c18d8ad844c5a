//! Built-in assessment content: one phase/question table and one overview
//! record per niche. Everything here is static data; sessions clone what
//! they need and never write back.

#![forbid(unsafe_code)]

mod assessments;
mod overviews;

use std::sync::LazyLock;

use vetting_core::model::{AssessmentDefinition, Niche, NicheOverview};

static DEFINITIONS: LazyLock<Vec<AssessmentDefinition>> = LazyLock::new(|| {
    Niche::ALL
        .iter()
        .map(|niche| build_definition(*niche))
        .collect()
});

static OVERVIEWS: LazyLock<Vec<NicheOverview>> =
    LazyLock::new(|| Niche::ALL.iter().map(|niche| overviews::build(*niche)).collect());

fn build_definition(niche: Niche) -> AssessmentDefinition {
    let phases = match niche {
        Niche::BackendDev => assessments::backend_dev::phases(),
        Niche::Contentwriting => assessments::content_writing::phases(),
        Niche::Copywriting => assessments::copywriting::phases(),
        Niche::FrontendDev => assessments::frontend_dev::phases(),
        Niche::GraphicsDesign => assessments::graphics_design::phases(),
        Niche::ProductDesign => assessments::product_design::phases(),
        Niche::SocialMediaMgnt => assessments::social_media::phases(),
        Niche::VideoEditing => assessments::video_editing::phases(),
        Niche::VirtualAssistant => assessments::virtual_assistant::phases(),
    };
    AssessmentDefinition::new(niche, phases).expect("built-in assessment tables are valid")
}

/// The assessment definition for a niche. Total over the enum.
#[must_use]
pub fn definition(niche: Niche) -> &'static AssessmentDefinition {
    DEFINITIONS
        .iter()
        .find(|definition| definition.niche() == niche)
        .expect("every niche has a built-in definition")
}

/// The overview record for a niche. Total over the enum.
#[must_use]
pub fn overview(niche: Niche) -> &'static NicheOverview {
    OVERVIEWS
        .iter()
        .find(|overview| overview.niche() == niche)
        .expect("every niche has a built-in overview")
}

/// Resolves a definition from a raw niche key, degrading to the default
/// niche when the key is unrecognized. Never fails.
#[must_use]
pub fn definition_for_key(key: &str) -> &'static AssessmentDefinition {
    definition(Niche::from_key_or_default(key))
}

/// Resolves an overview from a raw niche key, degrading to the default
/// niche when the key is unrecognized. Never fails.
#[must_use]
pub fn overview_for_key(key: &str) -> &'static NicheOverview {
    overview(Niche::from_key_or_default(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_niche_builds_a_valid_definition() {
        for niche in Niche::ALL {
            let definition = definition(niche);
            assert_eq!(definition.niche(), niche);
            assert!(definition.total_questions() > 0);
        }
    }

    #[test]
    fn phase_and_question_counts_match_the_source_tables() {
        let expected = [
            (Niche::BackendDev, 10, 51),
            (Niche::Contentwriting, 10, 50),
            (Niche::Copywriting, 10, 50),
            (Niche::FrontendDev, 5, 50),
            (Niche::GraphicsDesign, 10, 50),
            (Niche::ProductDesign, 10, 50),
            (Niche::SocialMediaMgnt, 10, 50),
            (Niche::VideoEditing, 5, 50),
            (Niche::VirtualAssistant, 5, 50),
        ];
        for (niche, phases, questions) in expected {
            let definition = definition(niche);
            assert_eq!(definition.phase_count(), phases, "{niche} phase count");
            assert_eq!(
                definition.total_questions(),
                questions,
                "{niche} question count"
            );
        }
    }

    #[test]
    fn every_shipped_question_is_written() {
        for niche in Niche::ALL {
            for phase in definition(niche).phases() {
                for question in phase.questions() {
                    assert!(
                        question.kind().is_written(),
                        "{} {} should be written",
                        niche,
                        question.id()
                    );
                }
            }
        }
    }

    #[test]
    fn unknown_key_falls_back_to_default_definition() {
        let definition = definition_for_key("brand-identity");
        assert_eq!(definition.niche(), Niche::DEFAULT);

        let overview = overview_for_key("brand-identity");
        assert_eq!(overview.niche(), Niche::DEFAULT);
    }

    #[test]
    fn known_keys_resolve_their_own_content() {
        let definition = definition_for_key("frontend-dev");
        assert_eq!(definition.niche(), Niche::FrontendDev);
        assert_eq!(definition.phases()[0].title(), "1. Core HTML (Structure & Semantics)");

        let overview = overview_for_key("virtual-assistant");
        assert_eq!(overview.title(), "Virtual Assistant");
    }

    #[test]
    fn every_overview_lists_tools_expectations_and_deliverables() {
        for niche in Niche::ALL {
            let overview = overview(niche);
            assert!(!overview.description().is_empty());
            assert_eq!(overview.tools().len(), 4, "{niche} tools");
            assert_eq!(overview.expectations().len(), 4, "{niche} expectations");
            assert_eq!(overview.deliverables().len(), 4, "{niche} deliverables");
        }
    }
}
