//! Variant selection module.
//!
//! Cascading color → size → material options over a product's variant list
//! and resolution of a selection to one purchasable variant.

mod resolver;
mod selection;

pub use resolver::{available_colors, available_materials, available_sizes, resolve_variant};
pub use selection::{ResolvedVariant, SelectionStage, VariantSelection};
