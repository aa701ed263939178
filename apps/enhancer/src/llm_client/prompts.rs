// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file holds the cross-cutting pieces.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction appended to every rewriting prompt.
pub const FACTUALITY_INSTRUCTION: &str = "\
    CRITICAL: Keep every fact from the source resume (names, companies, dates, education) \
    exactly as provided. Do NOT invent new experiences, employers, degrees or dates. \
    Enhance only the language, structure and emphasis of what is already there.";
