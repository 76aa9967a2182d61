//! Values published to ancestor views
//!
//! A scroll view exposes its header offset and opacity so code above it can
//! react (e.g. fade a navigation title) without owning the controller. When
//! several scroll views publish the same key, values are combined with the
//! key's `reduce`.

/// A value that child views publish and ancestors read
pub trait PreferenceKey {
    type Value: Copy + PartialEq + std::fmt::Debug;

    /// Value seen when no child publishes the key
    const DEFAULT: Self::Value;

    /// Combine an accumulated value with the next child's value
    fn reduce(value: &mut Self::Value, next: Self::Value);

    /// Fold published values, starting from [`PreferenceKey::DEFAULT`]
    fn collect<I>(values: I) -> Self::Value
    where
        I: IntoIterator<Item = Self::Value>,
    {
        let mut value = Self::DEFAULT;
        for next in values {
            Self::reduce(&mut value, next);
        }
        value
    }
}

/// Current header offset; the largest value wins
pub struct HeaderOffsetPreference;

impl PreferenceKey for HeaderOffsetPreference {
    type Value = f32;
    const DEFAULT: f32 = 0.0;

    fn reduce(value: &mut f32, next: f32) {
        *value = value.max(next);
    }
}

/// Current header opacity; the largest value wins
pub struct HeaderOpacityPreference;

impl PreferenceKey for HeaderOpacityPreference {
    type Value = f32;
    const DEFAULT: f32 = 0.0;

    fn reduce(value: &mut f32, next: f32) {
        *value = value.max(next);
    }
}

/// Header offset and opacity published by one scroll view
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeaderPreferences {
    pub offset: f32,
    pub opacity: f32,
}

impl HeaderPreferences {
    /// Combine the values published by several scroll views
    pub fn merge<I>(views: I) -> Self
    where
        I: IntoIterator<Item = HeaderPreferences>,
    {
        let views: Vec<HeaderPreferences> = views.into_iter().collect();
        Self {
            offset: HeaderOffsetPreference::collect(views.iter().map(|p| p.offset)),
            opacity: HeaderOpacityPreference::collect(views.iter().map(|p| p.opacity)),
        }
    }
}
