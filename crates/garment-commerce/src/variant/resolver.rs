//! Option derivation and variant resolution over a flat variant list.
//!
//! None of these functions fail: malformed or empty variant data yields
//! empty option lists and an unresolved selection.

use crate::catalog::Variant;
use std::collections::HashSet;

/// Distinct values in first-seen order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

/// Every color offered, in first-seen order.
pub fn available_colors(variants: &[Variant]) -> Vec<&str> {
    distinct(variants.iter().map(|v| v.color.as_str()))
}

/// Sizes offered in `color`; empty until a color is chosen.
pub fn available_sizes<'a>(variants: &'a [Variant], color: Option<&str>) -> Vec<&'a str> {
    let Some(color) = color else {
        return Vec::new();
    };
    distinct(
        variants
            .iter()
            .filter(|v| v.color == color)
            .map(|v| v.size.as_str()),
    )
}

/// Materials offered for `color` and `size`; empty until both are chosen.
pub fn available_materials<'a>(
    variants: &'a [Variant],
    color: Option<&str>,
    size: Option<&str>,
) -> Vec<&'a str> {
    let (Some(color), Some(size)) = (color, size) else {
        return Vec::new();
    };
    distinct(
        variants
            .iter()
            .filter(|v| v.color == color && v.size == size)
            .map(|v| v.material.as_str()),
    )
}

/// Resolve a selection to a variant.
///
/// Color and size are required. With a material, the first variant matching
/// all three is returned. Without one, the first (color, size) match is
/// returned as an implicit default.
pub fn resolve_variant<'a>(
    variants: &'a [Variant],
    color: Option<&str>,
    size: Option<&str>,
    material: Option<&str>,
) -> Option<&'a Variant> {
    let (color, size) = (color?, size?);
    let mut matching = variants
        .iter()
        .filter(|v| v.color == color && v.size == size);

    match material {
        Some(material) => matching.find(|v| v.material == material),
        None => matching.next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants() -> Vec<Variant> {
        vec![
            Variant::new("1", "A", "Red", "M", "Cotton"),
            Variant::new("2", "B", "Red", "M", "Linen"),
            Variant::new("3", "C", "Red", "L", "Cotton"),
            Variant::new("4", "D", "Blue", "S", "Silk"),
            Variant::new("5", "E", "Red", "S", "Cotton"),
            Variant::new("6", "F", "Blue", "S", "Silk"),
        ]
    }

    #[test]
    fn test_colors_first_seen_order() {
        assert_eq!(available_colors(&variants()), vec!["Red", "Blue"]);
    }

    #[test]
    fn test_sizes_require_color() {
        let variants = variants();
        assert!(available_sizes(&variants, None).is_empty());
        assert_eq!(available_sizes(&variants, Some("Red")), vec!["M", "L", "S"]);
        assert_eq!(available_sizes(&variants, Some("Blue")), vec!["S"]);
        assert!(available_sizes(&variants, Some("Green")).is_empty());
    }

    #[test]
    fn test_materials_require_color_and_size() {
        let variants = variants();
        assert!(available_materials(&variants, None, None).is_empty());
        assert!(available_materials(&variants, Some("Red"), None).is_empty());
        assert!(available_materials(&variants, None, Some("M")).is_empty());
        assert_eq!(
            available_materials(&variants, Some("Red"), Some("M")),
            vec!["Cotton", "Linen"]
        );
        assert_eq!(
            available_materials(&variants, Some("Blue"), Some("S")),
            vec!["Silk"]
        );
    }

    #[test]
    fn test_resolve_implicit_first_match() {
        let variants = variants();
        let v = resolve_variant(&variants, Some("Red"), Some("M"), None).unwrap();
        assert_eq!(v.sku, "A");
    }

    #[test]
    fn test_resolve_with_material() {
        let variants = variants();
        let v = resolve_variant(&variants, Some("Red"), Some("M"), Some("Linen")).unwrap();
        assert_eq!(v.sku, "B");
    }

    #[test]
    fn test_resolve_duplicate_combination_picks_first() {
        let variants = variants();
        let v = resolve_variant(&variants, Some("Blue"), Some("S"), Some("Silk")).unwrap();
        assert_eq!(v.sku, "D");
    }

    #[test]
    fn test_resolve_unresolved_cases() {
        let variants = variants();
        assert!(resolve_variant(&variants, None, Some("M"), None).is_none());
        assert!(resolve_variant(&variants, Some("Red"), None, None).is_none());
        assert!(resolve_variant(&variants, Some("Blue"), Some("M"), None).is_none());
        assert!(resolve_variant(&variants, Some("Red"), Some("L"), Some("Linen")).is_none());
    }

    #[test]
    fn test_empty_variant_list() {
        let empty: Vec<Variant> = Vec::new();
        assert!(available_colors(&empty).is_empty());
        assert!(available_sizes(&empty, Some("Red")).is_empty());
        assert!(available_materials(&empty, Some("Red"), Some("M")).is_empty());
        assert!(resolve_variant(&empty, Some("Red"), Some("M"), None).is_none());
    }
}
