//! Tropical zodiac placement, rulers, retrograde detection and formatting.

pub mod format;
pub mod mapper;
pub mod rulers;
pub mod signs;

pub use format::{format_dms, to_dms};
pub use mapper::{ZodiacMapper, ZodiacPosition};
pub use rulers::{modern_ruler, ruled_signs, sign_ruler, traditional_ruler};
pub use signs::{Element, Quality, Sign, ZodiacError, ZodiacSign, ELEMENTS, QUALITIES, SIGN_SPAN, ZODIAC_SIGNS};
