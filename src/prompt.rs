//! Fixed prompt text for every completion the API issues.

/// Frameworks covered by the comparative endpoint, in response order.
pub const FRAMEWORKS: [&str; 3] = ["Utilitarianism", "Deontology", "Virtue Ethics"];

pub const DILEMMA_SYSTEM: &str = "You are an ethical dilemma generator.";

pub const DILEMMA_REQUEST: &str = "Generate a realistic and thought-provoking moral dilemma. \
The dilemma should be concise, present a difficult choice without an obvious right answer, \
and be suitable for a general audience. Please provide only the dilemma text.";

pub const COMPARATIVE_SYSTEM: &str = "You are an expert in ethical frameworks.";

pub const ANALYSIS_SYSTEM: &str = "You are an expert in ethical frameworks and moral philosophy.";

/// Builds the analysis request for one framework. The framework name is
/// substituted as given; callers decide whether to validate it.
#[must_use]
pub fn analysis_prompt(framework: &str, dilemma: &str) -> String {
    format!(
        "Analyze the following ethical dilemma from the perspective of {framework}:\n\
         \n\
         Dilemma: {dilemma}\n\
         \n\
         Please provide a detailed analysis that explains how a follower of {framework} would \
         approach this situation. Discuss the core principles of the framework and how they \
         apply to the dilemma, and suggest a likely course of action.\n"
    )
}
