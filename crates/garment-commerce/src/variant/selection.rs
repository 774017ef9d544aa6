//! Cascading selection state for the product page.

use crate::catalog::Variant;
use crate::variant::resolver;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// How far the shopper has narrowed the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionStage {
    /// Nothing chosen yet.
    NoSelection,
    /// Color chosen, size pending.
    ColorChosen,
    /// Color and size chosen but they match no variant.
    SizeChosen,
    /// Color and size chosen; the first matching material is used.
    VariantImplicit,
    /// All three chosen.
    MaterialChosen,
}

impl SelectionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionStage::NoSelection => "no-selection",
            SelectionStage::ColorChosen => "color-chosen",
            SelectionStage::SizeChosen => "size-chosen",
            SelectionStage::VariantImplicit => "variant-implicit",
            SelectionStage::MaterialChosen => "material-chosen",
        }
    }
}

/// A variant picked by a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedVariant<'a> {
    /// The purchasable variant.
    pub variant: &'a Variant,
    /// True when no material was chosen and the first match was taken.
    pub implicit: bool,
}

/// Color → size → material selection.
///
/// Choosing a color clears size and material; choosing a size clears
/// material. A downstream choice can never outlive the upstream choice it
/// was made under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSelection {
    color: Option<String>,
    size: Option<String>,
    material: Option<String>,
}

impl VariantSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    /// Choose a color. Always clears size and material.
    pub fn select_color(&mut self, color: impl Into<String>) {
        self.color = Some(color.into());
        self.size = None;
        self.material = None;
    }

    /// Choose a size. Clears material.
    ///
    /// Returns `false` and leaves the selection untouched when no color is chosen.
    pub fn select_size(&mut self, size: impl Into<String>) -> bool {
        if self.color.is_none() {
            return false;
        }
        self.size = Some(size.into());
        self.material = None;
        true
    }

    /// Choose a material.
    ///
    /// Returns `false` and leaves the selection untouched when no size is chosen.
    pub fn select_material(&mut self, material: impl Into<String>) -> bool {
        if self.size.is_none() {
            return false;
        }
        self.material = Some(material.into());
        true
    }

    /// Forget every choice.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current stage of the selection against a product's variants.
    pub fn stage(&self, variants: &[Variant]) -> SelectionStage {
        match (&self.color, &self.size, &self.material) {
            (None, _, _) => SelectionStage::NoSelection,
            (Some(_), None, _) => SelectionStage::ColorChosen,
            (Some(_), Some(_), Some(_)) => SelectionStage::MaterialChosen,
            (Some(_), Some(_), None) => {
                if self.resolve_opt(variants).is_some() {
                    SelectionStage::VariantImplicit
                } else {
                    SelectionStage::SizeChosen
                }
            }
        }
    }

    /// Colors the shopper can pick from.
    pub fn colors<'a>(&self, variants: &'a [Variant]) -> Vec<&'a str> {
        resolver::available_colors(variants)
    }

    /// Sizes available under the chosen color.
    pub fn sizes<'a>(&self, variants: &'a [Variant]) -> Vec<&'a str> {
        resolver::available_sizes(variants, self.color())
    }

    /// Materials available under the chosen color and size.
    pub fn materials<'a>(&self, variants: &'a [Variant]) -> Vec<&'a str> {
        resolver::available_materials(variants, self.color(), self.size())
    }

    fn resolve_opt<'a>(&self, variants: &'a [Variant]) -> Option<&'a Variant> {
        resolver::resolve_variant(variants, self.color(), self.size(), self.material())
    }

    /// Resolve to a purchasable variant.
    ///
    /// Fails with [`CommerceError::SelectionIncomplete`] when color or size is
    /// missing and [`CommerceError::VariantUnavailable`] when the combination
    /// does not exist.
    pub fn resolve<'a>(&self, variants: &'a [Variant]) -> Result<ResolvedVariant<'a>, CommerceError> {
        if self.color.is_none() || self.size.is_none() {
            return Err(CommerceError::SelectionIncomplete);
        }

        let variant = self
            .resolve_opt(variants)
            .ok_or_else(|| CommerceError::VariantUnavailable(self.describe()))?;

        Ok(ResolvedVariant {
            variant,
            implicit: self.material.is_none(),
        })
    }

    /// Label of the current choices (e.g., "Red / M / Linen").
    pub fn describe(&self) -> String {
        [self.color(), self.size(), self.material()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants() -> Vec<Variant> {
        vec![
            Variant::new("1", "A", "Red", "M", "Cotton"),
            Variant::new("2", "B", "Red", "M", "Linen"),
            Variant::new("3", "C", "Blue", "L", "Cotton"),
        ]
    }

    #[test]
    fn test_changing_color_clears_downstream() {
        let mut selection = VariantSelection::new();
        selection.select_color("Red");
        selection.select_size("M");
        selection.select_material("Linen");

        selection.select_color("Blue");
        assert_eq!(selection.color(), Some("Blue"));
        assert_eq!(selection.size(), None);
        assert_eq!(selection.material(), None);
    }

    #[test]
    fn test_reselecting_same_color_still_clears() {
        let mut selection = VariantSelection::new();
        selection.select_color("Red");
        selection.select_size("M");

        selection.select_color("Red");
        assert_eq!(selection.size(), None);
    }

    #[test]
    fn test_changing_size_clears_material() {
        let mut selection = VariantSelection::new();
        selection.select_color("Red");
        selection.select_size("M");
        selection.select_material("Linen");

        assert!(selection.select_size("L"));
        assert_eq!(selection.color(), Some("Red"));
        assert_eq!(selection.material(), None);
    }

    #[test]
    fn test_out_of_order_choices_are_ignored() {
        let mut selection = VariantSelection::new();
        assert!(!selection.select_size("M"));
        assert!(!selection.select_material("Cotton"));
        assert_eq!(selection, VariantSelection::new());

        selection.select_color("Red");
        assert!(!selection.select_material("Cotton"));
        assert_eq!(selection.material(), None);
    }

    #[test]
    fn test_stage_progression() {
        let variants = variants();
        let mut selection = VariantSelection::new();
        assert_eq!(selection.stage(&variants), SelectionStage::NoSelection);

        selection.select_color("Red");
        assert_eq!(selection.stage(&variants), SelectionStage::ColorChosen);

        selection.select_size("M");
        assert_eq!(selection.stage(&variants), SelectionStage::VariantImplicit);

        selection.select_material("Linen");
        assert_eq!(selection.stage(&variants), SelectionStage::MaterialChosen);

        selection.select_size("XXL");
        assert_eq!(selection.stage(&variants), SelectionStage::SizeChosen);
    }

    #[test]
    fn test_resolve_implicit_and_explicit() {
        let variants = variants();
        let mut selection = VariantSelection::new();
        selection.select_color("Red");
        selection.select_size("M");

        let resolved = selection.resolve(&variants).unwrap();
        assert_eq!(resolved.variant.sku, "A");
        assert!(resolved.implicit);

        selection.select_material("Linen");
        let resolved = selection.resolve(&variants).unwrap();
        assert_eq!(resolved.variant.sku, "B");
        assert!(!resolved.implicit);
    }

    #[test]
    fn test_resolve_failures_are_distinct() {
        let variants = variants();
        let mut selection = VariantSelection::new();
        selection.select_color("Red");
        assert!(matches!(
            selection.resolve(&variants),
            Err(CommerceError::SelectionIncomplete)
        ));

        selection.select_size("M");
        selection.select_material("Silk");
        match selection.resolve(&variants) {
            Err(CommerceError::VariantUnavailable(label)) => assert_eq!(label, "Red / M / Silk"),
            other => panic!("expected unavailable variant, got {:?}", other),
        }
    }

    #[test]
    fn test_available_options_follow_selection() {
        let variants = variants();
        let mut selection = VariantSelection::new();
        assert_eq!(selection.colors(&variants), vec!["Red", "Blue"]);
        assert!(selection.sizes(&variants).is_empty());
        assert!(selection.materials(&variants).is_empty());

        selection.select_color("Red");
        selection.select_size("M");
        assert_eq!(selection.sizes(&variants), vec!["M"]);
        assert_eq!(selection.materials(&variants), vec!["Cotton", "Linen"]);
    }

    #[test]
    fn test_reset() {
        let mut selection = VariantSelection::new();
        selection.select_color("Red");
        selection.reset();
        assert_eq!(selection.describe(), "");
    }
}
