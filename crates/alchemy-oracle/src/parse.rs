//! Oracle response parsing into a validated [`OracleVerdict`].
//!
//! The model is asked for a single JSON object. Models wrap it in markdown
//! fences or leave trailing commas often enough that parsing tries a few
//! recovery strategies before giving up.

use alchemy_types::{ElementCategory, Rarity, VisualEffect};
use serde::Deserialize;

use crate::error::OracleError;

/// The oracle's decision on one reaction, as the response schema defines it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleVerdict {
    /// Whether the reaction produced anything.
    pub success: bool,
    /// Product display name (required on success).
    #[serde(default)]
    pub product_name: Option<String>,
    /// Product symbol (required on success).
    #[serde(default)]
    pub product_symbol: Option<String>,
    /// Product flavour text.
    #[serde(default)]
    pub product_description: Option<String>,
    /// Product category.
    #[serde(default)]
    pub product_type: Option<ElementCategory>,
    /// Product rarity.
    pub rarity: Rarity,
    /// Result line shown to the player.
    pub message: String,
    /// Insight awarded. Negative values are treated as zero.
    #[serde(default)]
    pub insight_value: i64,
    /// Furnace glow color.
    #[serde(default)]
    pub visual_color: Option<String>,
    /// Furnace animation category.
    #[serde(default)]
    pub visual_effect: Option<VisualEffect>,
}

impl OracleVerdict {
    /// Insight awarded, clamped into the counter's range.
    pub fn insight_gained(&self) -> u32 {
        u32::try_from(self.insight_value.max(0)).unwrap_or(u32::MAX)
    }

    /// Name and symbol of the product, when the verdict names one.
    pub fn product_names(&self) -> Option<(&str, &str)> {
        let name = self.product_name.as_deref().map(str::trim)?;
        let symbol = self.product_symbol.as_deref().map(str::trim)?;
        (!name.is_empty() && !symbol.is_empty()).then_some((name, symbol))
    }

    fn validate(self) -> Result<Self, OracleError> {
        if self.success && self.product_names().is_none() {
            return Err(OracleError::Parse(
                "successful verdict without productName/productSymbol".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Response schema sent to backends that support structured output.
pub fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "success": {"type": "BOOLEAN"},
            "productName": {"type": "STRING"},
            "productSymbol": {"type": "STRING"},
            "productDescription": {"type": "STRING"},
            "productType": {"type": "STRING", "enum": ["basic", "compound", "rare"]},
            "rarity": {
                "type": "STRING",
                "enum": ["common", "uncommon", "rare", "epic", "legendary"]
            },
            "message": {"type": "STRING"},
            "insightValue": {"type": "INTEGER"},
            "visualColor": {"type": "STRING"},
            "visualEffect": {
                "type": "STRING",
                "enum": ["fire", "water", "electric", "bio", "magic", "metal", "gas", "default"]
            }
        },
        "required": ["success", "rarity", "message", "insightValue", "visualColor", "visualEffect"]
    })
}

/// Parse a raw oracle response into a validated verdict.
///
/// Tries, in order: the text as-is, the contents of a markdown code block,
/// then both again with trailing commas removed.
///
/// # Errors
///
/// Returns [`OracleError::Parse`] when no strategy yields a valid verdict.
pub fn parse_verdict(raw: &str) -> Result<OracleVerdict, OracleError> {
    let trimmed = raw.trim();
    let fenced = extract_json_from_codeblock(trimmed);

    let candidates = [
        Some(trimmed.to_owned()),
        fenced.map(ToOwned::to_owned),
        Some(strip_trailing_commas(trimmed)),
        fenced.map(strip_trailing_commas),
    ];

    let mut last_error = None;
    for candidate in candidates.iter().flatten() {
        match serde_json::from_str::<OracleVerdict>(candidate) {
            Ok(verdict) => return verdict.validate(),
            Err(e) => last_error = Some(e),
        }
    }

    Err(OracleError::Parse(match last_error {
        Some(e) => format!("all parse strategies failed ({e}) for: {trimmed}"),
        None => format!("all parse strategies failed for: {trimmed}"),
    }))
}

/// Contents of the first markdown code block, with any language tag dropped.
fn extract_json_from_codeblock(text: &str) -> Option<&str> {
    let (_, after_fence) = text.split_once("```")?;
    let (body, _) = after_fence.split_once("```")?;
    let body = match body.split_once('\n') {
        Some((tag, rest)) if !tag.trim_start().starts_with('{') => rest,
        _ => body,
    };
    Some(body.trim())
}

/// Drop commas that directly precede a closing brace or bracket.
fn strip_trailing_commas(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for (index, c) in text.char_indices() {
        if c == ','
            && let Some(rest) = text.get(index.saturating_add(1)..)
            && rest.trim_start().starts_with(['}', ']'])
        {
            continue;
        }
        result.push(c);
    }
    result
}
