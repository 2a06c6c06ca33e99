//! Prompt template loading and rendering via `minijinja`.
//!
//! Two templates make up a reaction prompt: `system` (the oracle's role and
//! the verdict fields) and `reaction` (the furnace contents). Both ship with
//! the crate; a templates directory can override either one so operators can
//! tune the oracle without recompiling.

use std::path::Path;

use alchemy_core::ReactionRequest;
use alchemy_lab::{accessory_info, catalyst_info};
use minijinja::Environment;
use serde::Serialize;

use crate::error::OracleError;

const SYSTEM_TEMPLATE: &str = include_str!("../templates/system.j2");
const REACTION_TEMPLATE: &str = include_str!("../templates/reaction.j2");

/// Manages prompt template loading and rendering.
pub struct PromptEngine {
    env: Environment<'static>,
}

/// The complete rendered prompt ready to send to an LLM backend.
#[derive(Debug, Clone)]
pub struct RenderedPrompt {
    /// System message establishing the oracle's role.
    pub system: String,
    /// User message describing the furnace contents.
    pub user: String,
}

/// Template context for one reaction.
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext {
    /// Elements in the furnace, in slot order.
    pub inputs: Vec<PromptElement>,
    /// Active catalyst, if any.
    pub catalyst: Option<PromptModifier>,
    /// Equipped accessory, if any.
    pub accessory: Option<PromptModifier>,
    /// Player insight.
    pub insight: u32,
}

/// An input element as the prompt shows it.
#[derive(Debug, Clone, Serialize)]
pub struct PromptElement {
    /// Display name.
    pub name: String,
    /// Chemical-style symbol.
    pub symbol: String,
}

/// A furnace modifier as the prompt shows it.
#[derive(Debug, Clone, Serialize)]
pub struct PromptModifier {
    /// Display name.
    pub name: &'static str,
    /// Gameplay effect text.
    pub effect: &'static str,
}

impl PromptContext {
    /// Build the context for a reaction request.
    pub fn from_request(request: &ReactionRequest) -> Self {
        Self {
            inputs: request
                .inputs
                .iter()
                .map(|e| PromptElement {
                    name: e.name.clone(),
                    symbol: e.symbol.clone(),
                })
                .collect(),
            catalyst: request.catalyst.map(|kind| {
                let info = catalyst_info(kind);
                PromptModifier {
                    name: info.name,
                    effect: info.effect,
                }
            }),
            accessory: request.accessory.map(|kind| {
                let info = accessory_info(kind);
                PromptModifier {
                    name: info.name,
                    effect: info.effect,
                }
            }),
            insight: request.insight,
        }
    }
}

impl PromptEngine {
    /// Create a prompt engine with the built-in templates.
    pub fn new() -> Result<Self, OracleError> {
        Self::build(SYSTEM_TEMPLATE.to_owned(), REACTION_TEMPLATE.to_owned())
    }

    /// Create a prompt engine, taking `system.j2` and `reaction.j2` from
    /// `dir` where present and the built-in templates otherwise.
    pub fn from_dir(dir: &Path) -> Result<Self, OracleError> {
        let system = load_template(dir, "system.j2")?.unwrap_or_else(|| SYSTEM_TEMPLATE.to_owned());
        let reaction =
            load_template(dir, "reaction.j2")?.unwrap_or_else(|| REACTION_TEMPLATE.to_owned());
        Self::build(system, reaction)
    }

    fn build(system: String, reaction: String) -> Result<Self, OracleError> {
        let mut env = Environment::new();
        env.add_template_owned("system", system)
            .map_err(|e| OracleError::Template(format!("failed to add system template: {e}")))?;
        env.add_template_owned("reaction", reaction)
            .map_err(|e| OracleError::Template(format!("failed to add reaction template: {e}")))?;
        Ok(Self { env })
    }

    /// Render the prompt for one reaction.
    pub fn render(&self, context: &PromptContext) -> Result<RenderedPrompt, OracleError> {
        let system = self
            .env
            .get_template("system")
            .map_err(|e| OracleError::Template(format!("missing system template: {e}")))?
            .render(context)
            .map_err(|e| OracleError::Template(format!("system render failed: {e}")))?;

        let user = self
            .env
            .get_template("reaction")
            .map_err(|e| OracleError::Template(format!("missing reaction template: {e}")))?
            .render(context)
            .map_err(|e| OracleError::Template(format!("reaction render failed: {e}")))?;

        Ok(RenderedPrompt { system, user })
    }
}

/// Read a template override; a missing file is not an error.
fn load_template(dir: &Path, filename: &str) -> Result<Option<String>, OracleError> {
    let path = dir.join(filename);
    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(OracleError::Template(format!(
            "failed to read {}: {e}",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use alchemy_lab::starting_elements;
    use alchemy_types::CatalystKind;

    use super::*;

    fn request(catalyst: Option<CatalystKind>) -> ReactionRequest {
        ReactionRequest {
            inputs: starting_elements().into_iter().take(2).collect(),
            catalyst,
            accessory: None,
            insight: 42,
        }
    }

    #[test]
    fn builtin_templates_render_inputs_and_modifiers() {
        let engine = PromptEngine::new();
        assert!(engine.is_ok());
        let Ok(engine) = engine else { return };

        let prompt = engine.render(&PromptContext::from_request(&request(Some(
            CatalystKind::Stabilizer,
        ))));
        assert!(prompt.is_ok());
        let Ok(prompt) = prompt else { return };

        assert!(prompt.system.contains("visualEffect"));
        assert!(prompt.user.contains("氫"));
        assert!(prompt.user.contains("量子穩定劑"));
        assert!(prompt.user.contains("大幅提升成功率"));
        assert!(prompt.user.contains("熔爐組件：無"));
        assert!(prompt.user.contains("42"));
    }

    #[test]
    fn directory_overrides_only_present_templates() {
        let dir = std::env::temp_dir().join(format!("alchemy-prompts-{}", std::process::id()));
        assert!(std::fs::create_dir_all(&dir).is_ok());
        assert!(std::fs::write(dir.join("reaction.j2"), "insight={{ insight }}").is_ok());

        let engine = PromptEngine::from_dir(&dir);
        assert!(engine.is_ok());
        if let Ok(engine) = engine {
            let prompt = engine.render(&PromptContext::from_request(&request(None)));
            assert!(prompt.is_ok());
            if let Ok(prompt) = prompt {
                assert_eq!(prompt.user, "insight=42");
                assert!(prompt.system.contains("rarity"));
            }
        }

        let _ = std::fs::remove_dir_all(&dir);
    }
}
