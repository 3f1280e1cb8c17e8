use crate::models::{CatalogItem, PreferenceQuery};

/// One of the five preference dimensions a catalog item is tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    SkinTone,
    EyeColor,
    HairColor,
    FaceShape,
    Occasion,
}

/// Relaxation ladder, strictest first
///
/// Each step lists the dimensions an item must still satisfy. Skin tone
/// is the least negotiable attribute and is never dropped; occasion is
/// the most negotiable and goes first.
pub const RELAXATION_LEVELS: [&[Dimension]; 5] = [
    &[
        Dimension::SkinTone,
        Dimension::EyeColor,
        Dimension::HairColor,
        Dimension::FaceShape,
        Dimension::Occasion,
    ],
    &[
        Dimension::SkinTone,
        Dimension::EyeColor,
        Dimension::HairColor,
        Dimension::FaceShape,
    ],
    &[Dimension::SkinTone, Dimension::EyeColor, Dimension::HairColor],
    &[Dimension::SkinTone, Dimension::EyeColor],
    &[Dimension::SkinTone],
];

/// The item's acceptable values for one dimension
#[inline]
pub fn attribute_set(item: &CatalogItem, dimension: Dimension) -> &[String] {
    match dimension {
        Dimension::SkinTone => &item.skin_tone,
        Dimension::EyeColor => &item.eye_color,
        Dimension::HairColor => &item.hair_color,
        Dimension::FaceShape => &item.face_shape,
        Dimension::Occasion => &item.occasion,
    }
}

/// The user's chosen value for one dimension
#[inline]
pub fn query_value(query: &PreferenceQuery, dimension: Dimension) -> &str {
    match dimension {
        Dimension::SkinTone => &query.skin_tone,
        Dimension::EyeColor => &query.eye_color,
        Dimension::HairColor => &query.hair_color,
        Dimension::FaceShape => &query.face_shape,
        Dimension::Occasion => &query.occasion,
    }
}

/// Check that the item accepts the queried value in every listed dimension
#[inline]
pub fn matches_dimensions(
    item: &CatalogItem,
    dimensions: &[Dimension],
    query: &PreferenceQuery,
) -> bool {
    dimensions.iter().all(|&dimension| {
        attribute_set(item, dimension)
            .iter()
            .any(|value| value == query_value(query, dimension))
    })
}
