use crate::core::data::colour::Colour;
use crate::core::data::iteration::IterationResult;

/// Seam between per-pixel evaluation and the palette.
///
/// Mapping is total: every iteration result has a colour.
pub trait ColourMap {
    fn map(&self, result: IterationResult) -> Colour;

    fn display_name(&self) -> &str;
}
