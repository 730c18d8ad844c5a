use crate::model::Niche;

/// Static overview record shown before an assessment starts: the role
/// description plus the tools, expectations and deliverables lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicheOverview {
    niche: Niche,
    title: String,
    description: String,
    tools: Vec<String>,
    expectations: Vec<String>,
    deliverables: Vec<String>,
}

impl NicheOverview {
    #[must_use]
    pub fn new(
        niche: Niche,
        title: impl Into<String>,
        description: impl Into<String>,
        tools: Vec<String>,
        expectations: Vec<String>,
        deliverables: Vec<String>,
    ) -> Self {
        Self {
            niche,
            title: title.into(),
            description: description.into(),
            tools,
            expectations,
            deliverables,
        }
    }

    #[must_use]
    pub fn niche(&self) -> Niche {
        self.niche
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    #[must_use]
    pub fn expectations(&self) -> &[String] {
        &self.expectations
    }

    #[must_use]
    pub fn deliverables(&self) -> &[String] {
        &self.deliverables
    }
}
