//! The curated recipe catalog.
//!
//! Maps a canonical key (sorted, `+`-joined input ids) to a product template.
//! Keys are derived from each recipe's reactant list when the catalog is
//! built, so a recipe can never sit under a key that lookups cannot produce.

use std::collections::HashMap;

use alchemy_types::{Element, ElementCategory, ElementId, Rarity, VisualEffect};

// ---------------------------------------------------------------------------
// Canonical key
// ---------------------------------------------------------------------------

/// Build the order-independent key for a set of input ids.
///
/// `{o, h}` and `{h, o}` both yield `"h+o"`.
pub fn canonical_key<'a>(ids: impl IntoIterator<Item = &'a ElementId>) -> String {
    let mut sorted: Vec<&str> = ids.into_iter().map(ElementId::as_str).collect();
    sorted.sort_unstable();
    sorted.join("+")
}

/// Order input elements by id, the same order [`canonical_key`] uses.
pub fn canonical_order(inputs: &[Element]) -> Vec<&Element> {
    let mut sorted: Vec<&Element> = inputs.iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));
    sorted
}

/// Creativity awarded for discovering a product of the given rarity.
pub const fn creativity_reward(rarity: Rarity) -> u32 {
    match rarity {
        Rarity::Common | Rarity::Uncommon => 5,
        Rarity::Rare => 20,
        Rarity::Epic | Rarity::Legendary => 40,
    }
}

/// Derive an element id from a product symbol: lowercase, whitespace to `_`.
pub fn product_id(symbol: &str) -> ElementId {
    let id: String = symbol
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    ElementId::new(id)
}

/// Sum of the inputs' atomic numbers, saturating.
pub fn atomic_sum(inputs: &[Element]) -> u32 {
    inputs
        .iter()
        .fold(0_u32, |acc, e| acc.saturating_add(e.atomic_number))
}

// ---------------------------------------------------------------------------
// Recipe
// ---------------------------------------------------------------------------

/// A product template keyed by its reactants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Input ids, in any order.
    pub reactants: Vec<ElementId>,
    /// Product display name.
    pub name: &'static str,
    /// Product symbol; also the source of the product id.
    pub symbol: &'static str,
    /// Product category.
    pub category: ElementCategory,
    /// Product rarity.
    pub rarity: Rarity,
    /// Furnace animation for the product.
    pub effect: VisualEffect,
    /// Product description.
    pub description: &'static str,
}

impl Recipe {
    fn new(
        reactants: [&str; 2],
        name: &'static str,
        symbol: &'static str,
        category: ElementCategory,
        rarity: Rarity,
        effect: VisualEffect,
        description: &'static str,
    ) -> Self {
        Self {
            reactants: reactants.into_iter().map(ElementId::new).collect(),
            name,
            symbol,
            category,
            rarity,
            effect,
            description,
        }
    }

    /// Canonical key of this recipe's reactants.
    pub fn key(&self) -> String {
        canonical_key(&self.reactants)
    }

    /// Instantiate the product element for the given inputs.
    pub fn product(&self, inputs: &[Element]) -> Element {
        Element {
            id: product_id(self.symbol),
            name: self.name.to_owned(),
            symbol: self.symbol.to_owned(),
            atomic_number: atomic_sum(inputs),
            category: self.category,
            rarity: self.rarity,
            description: self.description.to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// RecipeCatalog
// ---------------------------------------------------------------------------

/// Exact-match recipe table with O(1) lookup.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: HashMap<String, Recipe>,
}

impl RecipeCatalog {
    /// Build a catalog, keying each recipe by its canonical reactant key.
    ///
    /// A later recipe with the same key replaces an earlier one.
    pub fn from_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        Self {
            recipes: recipes.into_iter().map(|r| (r.key(), r)).collect(),
        }
    }

    /// The eight curated recipes of the base game.
    pub fn standard() -> Self {
        use ElementCategory::{Basic, Compound};
        use Rarity::{Common, Uncommon};

        Self::from_recipes([
            Recipe::new(
                ["h", "o"],
                "水",
                "H2O",
                Compound,
                Common,
                VisualEffect::Water,
                "生命之源，最完美的溶劑。",
            ),
            Recipe::new(
                ["c", "o"],
                "二氧化碳",
                "CO2",
                Compound,
                Common,
                VisualEffect::Gas,
                "植物呼吸的必需品。",
            ),
            Recipe::new(
                ["h", "c"],
                "甲烷",
                "CH4",
                Compound,
                Uncommon,
                VisualEffect::Fire,
                "簡單的碳氫化合物，極度易燃。",
            ),
            Recipe::new(
                ["c", "fe"],
                "鋼鐵",
                "Steel",
                Compound,
                Uncommon,
                VisualEffect::Metal,
                "經過碳強化的鐵，工業的骨架。",
            ),
            Recipe::new(
                ["fe", "o"],
                "氧化鐵",
                "Fe2O3",
                Compound,
                Common,
                VisualEffect::Default,
                "俗稱鐵鏽，氧化的金屬產物。",
            ),
            Recipe::new(
                ["h", "h"],
                "純氫氣",
                "H2",
                Basic,
                Common,
                VisualEffect::Gas,
                "高度不穩定的雙原子分子。",
            ),
            Recipe::new(
                ["o", "o"],
                "臭氧",
                "O3",
                ElementCategory::Rare,
                Rarity::Rare,
                VisualEffect::Magic,
                "罕見的氧同素異形體，具有強氧化性。",
            ),
            Recipe::new(
                ["c", "c"],
                "石墨",
                "Graphite",
                Basic,
                Uncommon,
                VisualEffect::Default,
                "純碳結構，導電且質軟。",
            ),
        ])
    }

    /// Find the recipe whose reactants exactly match `inputs`.
    pub fn lookup(&self, inputs: &[Element]) -> Option<&Recipe> {
        self.get(&canonical_key(inputs.iter().map(|e| &e.id)))
    }

    /// Find a recipe by canonical key.
    pub fn get(&self, key: &str) -> Option<&Recipe> {
        self.recipes.get(key)
    }

    /// Number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog has no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Iterate over `(key, recipe)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Recipe)> {
        self.recipes.iter().map(|(k, r)| (k.as_str(), r))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
