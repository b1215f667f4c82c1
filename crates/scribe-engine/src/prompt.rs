//! Generation request construction.
//!
//! One fixed role instruction per trigger kind, plus a user payload built
//! from the gathered context and the verbatim current document. The
//! document is appended last under its own delimiter because context
//! gathered from per-file storage can lag behind the editor buffer — the
//! delimited copy is the authoritative latest version.

use scribe_core::{Trigger, TriggerKind, UpdateDirective};
use scribe_llm::GenerationRequest;

/// Delimiter marking the authoritative current document in the prompt.
pub const CURRENT_FILE_DELIMITER: &str = "--- CURRENT FILE (LATEST) ---";

/// Build the generation request for a trigger.
#[must_use]
pub fn build_request(trigger: &Trigger, context: &str, current_document: &str) -> GenerationRequest {
    GenerationRequest {
        system_instruction: system_instruction(trigger),
        user_prompt: format!("{context}\n\n{CURRENT_FILE_DELIMITER}\n\n{current_document}"),
    }
}

/// The role instruction for a trigger's kind, with the topic inlined.
fn system_instruction(trigger: &Trigger) -> String {
    match trigger.kind {
        TriggerKind::Template => template_instruction(&trigger.topic),
        TriggerKind::Write => write_instruction(&trigger.topic),
        TriggerKind::Update => {
            let directive = UpdateDirective::parse(&trigger.topic);
            update_instruction(&directive)
        }
    }
}

fn template_instruction(topic: &str) -> String {
    format!(
        "You are a helpful writer helping the user write articles in Markdown format.\n\
         \n\
         The full context is provided.\n\
         \n\
         The user is requesting a concise template, or writing plan, for this topic:\n\
         \n\
         {topic}\n\
         \n\
         IMPORTANT NOTES:\n\
         \n\
         1. Output only the template or writing plan. NEVER wrap the whole output in a \
         Markdown code block (triple backticks).\n\
         2. Use Markdown level 2 titles (##) for sections.\n\
         3. Inside each section, describe your plan in an ai-write code block so the user \
         can generate it later, section by section.\n\
         4. Order the sections carefully: if section B needs information from section A, \
         place B after A.\n\
         5. Where they fit, add emojis to keep the document lively.\n"
    )
}

fn write_instruction(topic: &str) -> String {
    format!(
        "You are a helpful writer helping the user write articles in Markdown format.\n\
         \n\
         The full context is provided.\n\
         \n\
         The user is requesting a written section about this topic:\n\
         \n\
         {topic}\n\
         \n\
         Check the latest information available to you and provide details about this topic.\n\
         \n\
         IMPORTANT NOTES:\n\
         \n\
         1. Output only the section. NEVER wrap the output in a Markdown code block \
         (triple backticks).\n\
         2. Your output replaces the original lines in place.\n\
         3. Stay strictly on the requested topic and include nothing else.\n"
    )
}

fn update_instruction(directive: &UpdateDirective) -> String {
    format!(
        "You are a helpful writer revising part of a Markdown article.\n\
         \n\
         The full context is provided.\n\
         \n\
         Revise the text below according to this feedback:\n\
         \n\
         {instruction}\n\
         \n\
         TEXT TO REVISE:\n\
         \n\
         {prior}\n\
         \n\
         IMPORTANT NOTES:\n\
         \n\
         1. Output only the revised text. NEVER wrap the output in a Markdown code block \
         (triple backticks).\n\
         2. Your output replaces the original lines in place.\n\
         3. Preserve the factual content; change tone and detail only as the feedback asks.\n",
        instruction = directive.instruction,
        prior = directive.prior_content,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
