//! System instruction for the assistant.
//!
//! The instruction is a fixed template with two parameters: the comma-joined
//! profile summary and a guidebook context block built from the catalog.

use minijinja::{Environment, context};
use zoo_core::ProfileSet;
use zoo_core::poi::Catalog;

const SYSTEM_INSTRUCTION_TEMPLATE: &str = r#"You are "ZooBuddy", an AI assistant for the zoo specialized in Corporate Social Responsibility and Accessibility.

Current User Profile(s): **{{ profile_summary }}**

Your goal is to help the guest navigate the zoo, learn about animals, and handle their specific needs based on their combined profiles.

Map/Guidebook Context:
{{ context }}

Guidelines:
- Keep responses concise (under 3 sentences unless asked for a story).
- Be empathetic, professional, and fun.
- Synthesize advice based on ALL active profiles. For example, if Mobility AND Sensory are active, suggest flat routes that are also quiet.
- You are the primary navigator. Give clear textual directions relative to landmarks if asked.
- Always answer questions about the animals enthusiastically!
- Use Markdown formatting (bold, bullet points) to make your responses easy to read on mobile.
"#;

/// One line per POI: name, category, description and the notes matching the
/// active profiles.
///
/// Lines are added in catalog order while the block stays within
/// `max_chars`; the first line that would overflow ends the block.
pub fn build_context_block(profiles: &ProfileSet, catalog: &Catalog, max_chars: usize) -> String {
    let mut block = String::new();
    let mut block_chars = 0;

    for (index, poi) in catalog.pois().iter().enumerate() {
        let mut line = format!("- {} ({}): {}", poi.name, poi.category, poi.description);
        for profile in profiles.iter() {
            if let Some(note) = poi.note(profile) {
                line.push_str(&format!(" [{} Note: {}]", profile.label(), note));
            }
        }

        let separator = usize::from(!block.is_empty());
        let line_chars = line.chars().count();
        if block_chars + separator + line_chars > max_chars {
            tracing::debug!(
                "Guidebook context truncated at {} of {} POIs ({} chars)",
                index,
                catalog.len(),
                block_chars
            );
            break;
        }
        if separator == 1 {
            block.push('\n');
        }
        block.push_str(&line);
        block_chars += separator + line_chars;
    }

    block
}

/// Renders the fixed assistant instruction.
pub struct PromptBuilder {
    env: Environment<'static>,
    max_context_chars: usize,
}

impl PromptBuilder {
    pub fn new(max_context_chars: usize) -> Self {
        Self {
            env: Environment::new(),
            max_context_chars,
        }
    }

    pub fn system_instruction(
        &self,
        profiles: &ProfileSet,
        catalog: &Catalog,
    ) -> Result<String, minijinja::Error> {
        let context_block = build_context_block(profiles, catalog, self.max_context_chars);
        self.render(&profiles.summary(), &context_block)
    }

    pub fn render(
        &self,
        profile_summary: &str,
        context_block: &str,
    ) -> Result<String, minijinja::Error> {
        self.env.render_str(
            SYSTEM_INSTRUCTION_TEMPLATE,
            context! {
                profile_summary => profile_summary,
                context => context_block,
            },
        )
    }
}
