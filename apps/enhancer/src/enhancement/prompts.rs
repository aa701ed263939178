// All LLM prompt constants for the enhancement pipeline.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::GenerationOptions;

pub const IMPROVEMENT_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.3,
    max_tokens: 500,
};

/// Balanced for accuracy and creativity; room for a complete resume.
pub const VARIANT_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.6,
    max_tokens: 3000,
};

/// System prompt for improvement analysis. Append `JSON_ONLY_SYSTEM`.
pub const IMPROVEMENT_SYSTEM: &str = "You are a professional resume analyst. \
    Analyze the provided resume and identify EXACTLY 4 specific areas for improvement. Focus on: \
    (1) missing quantifiable metrics and achievements, \
    (2) weak action verbs or passive language, \
    (3) missing technical keywords for applicant tracking systems, \
    (4) a missing or weak professional summary. \
    Return ONLY a JSON array of 4 specific, actionable improvement statements.";

/// Improvement analysis prompt. Replace `{document}` before sending.
pub const IMPROVEMENT_PROMPT_TEMPLATE: &str = r#"Analyze this resume and identify 4 specific improvements:

{document}

Return a JSON array: ["improvement 1", "improvement 2", "improvement 3", "improvement 4"]"#;

/// System prompt for one template variant.
/// Replace: {style_directive}, {factuality_instruction}, {json_only}
pub const VARIANT_SYSTEM_TEMPLATE: &str = r#"You are an expert resume writer. Your task is to ENHANCE and IMPROVE the provided resume while keeping ALL factual information accurate.

{style_directive}

{factuality_instruction}

REQUIREMENTS:
1. Keep names, companies, job titles, dates and education EXACTLY as provided
2. Make the language more impactful and professional
3. Add quantifiable metrics only where the source reasonably supports them
4. Extract and enhance EVERY experience mentioned in the resume

{json_only}"#;

/// Shared strict schema instruction for every variant.
/// Replace: {template_name}, {document}
pub const VARIANT_PROMPT_TEMPLATE: &str = r#"ENHANCE this resume into the {template_name} style. Keep ALL information but improve the presentation.

ORIGINAL RESUME CONTENT:
{document}

Return a JSON object with EXACTLY this schema ("name" and "experience" are required):
{
  "name": "Full name from the resume",
  "title": "Current role, phrased for the {template_name} style",
  "contact": {
    "email": "From the resume",
    "phone": "From the resume",
    "location": "From the resume, if present",
    "linkedin": "From the resume, if present"
  },
  "summary": "2-3 sentence summary grounded in the actual experience",
  "experience": [
    {
      "title": "Actual job title",
      "company": "Actual company",
      "duration": "Actual dates",
      "description": "Enhanced description of the actual role",
      "achievements": ["Accomplishment rewritten as an impact statement"]
    }
  ],
  "education": [
    {"degree": "Actual degree", "school": "Actual school", "year": "Actual year", "gpa": "If mentioned"}
  ],
  "skills": ["Actual skills, ordered by {template_name} priorities"],
  "projects": [
    {"name": "Actual project", "description": "Enhanced description", "technologies": ["Actual technologies"], "link": "If available"}
  ],
  "certifications": ["Actual certifications, if any"],
  "languages": ["Actual languages, if mentioned"]
}"#;
