pub mod fractions;
pub mod normalize;
pub mod quantity;

pub use fractions::{CLUMP_MARKER, clean_unicode_fractions};
pub use normalize::{normalize_token, singularize};
pub use quantity::{format_quantity, parse_quantity};
