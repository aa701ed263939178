//! Template catalog: the fixed, ordered set of rewriting styles.
//!
//! Process-wide constant. Ids run 1..=N in catalog order; variant results are
//! placed by catalog position, which therefore equals `id - 1`.

use serde::Serialize;

use crate::enhancement::models::EnhancedResume;

/// One named rewriting style applied to the same source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateSpec {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Style-specific rewriting instruction injected into the variant prompt.
    pub style_directive: &'static str,
}

impl TemplateSpec {
    /// File name the renderer should use when exporting this variant.
    pub fn export_filename(&self, resume: &EnhancedResume) -> String {
        format!(
            "{}_Resume_{}.pdf",
            underscore_words(&resume.name),
            underscore_words(self.name)
        )
    }
}

fn underscore_words(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join("_")
}

pub static CATALOG: [TemplateSpec; 4] = [
    TemplateSpec {
        id: 1,
        name: "Modern Professional",
        description: "Clean design perfect for tech and creative roles",
        style_directive: "\
            Rewrite the resume with a modern, achievement-focused voice.\n\
            - Turn existing accomplishments into quantified results where the source supports it \
            (e.g. \"managed team\" -> \"Led 12-person team, improving throughput by 35%\")\n\
            - Use strong action verbs: spearheaded, orchestrated, optimized\n\
            - Add ATS keywords that match the person's actual role\n\
            - Emphasize innovation and technical leadership already present in the experience",
    },
    TemplateSpec {
        id: 2,
        name: "Executive Classic",
        description: "Traditional format ideal for senior positions",
        style_directive: "\
            Rewrite the resume with executive-level positioning.\n\
            - Elevate responsibilities to their strategic impact\n\
            - Express technical work as business outcomes (ROI, efficiency, cost savings)\n\
            - Bring out the leadership dimension of every role\n\
            - Highlight decision-making, stakeholder management and organizational influence\n\
            - Use sophisticated business language without changing any fact",
    },
    TemplateSpec {
        id: 3,
        name: "Creative Minimal",
        description: "Stylish layout for creative professionals",
        style_directive: "\
            Rewrite the resume with creative, innovation-focused framing.\n\
            - Highlight the inventive aspects of the actual projects\n\
            - Emphasize problem-solving and original solutions\n\
            - Balance technical expertise with creative thinking\n\
            - Show versatility and adaptability across the experiences\n\
            - Mention the distinctive approaches or methods that were used",
    },
    TemplateSpec {
        id: 4,
        name: "Corporate Standard",
        description: "Professional format for corporate roles",
        style_directive: "\
            Rewrite the resume with traditional corporate polish.\n\
            - Present experiences as evidence of reliability and consistency\n\
            - Emphasize process improvement and operational excellence\n\
            - Highlight team collaboration and cross-functional work\n\
            - Keep the language professional and conservative\n\
            - Focus on compliance, standards and best practices",
    },
];

pub fn catalog() -> &'static [TemplateSpec] {
    &CATALOG
}
