//! Name validation for playgrounds and templates

use crate::interpolator;

/// Characters that may not appear in a playground or template name
pub const ILLEGAL_CHARACTERS: &[char] = &['/', '*', '?'];

/// Check whether `name` can be used as a playground or template name
pub fn is_legal(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(ILLEGAL_CHARACTERS)
        && !interpolator::is_interpolated(name)
}
