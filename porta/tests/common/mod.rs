#![allow(dead_code)]

use porta::{Plugin, Prioritized};
use std::fmt;

// ============================================================================
// Test Delimiter Types
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaType {
    Json,
    Yaml,
    Csv,
    Binary,
}

// ============================================================================
// Test Plugins
// ============================================================================

/// A serializer for a fixed set of media types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Codec {
    pub name: &'static str,
    pub media: &'static [MediaType],
    pub order: Option<i32>,
}

impl Codec {
    pub const fn new(name: &'static str, media: &'static [MediaType]) -> Self {
        Self {
            name,
            media,
            order: None,
        }
    }

    pub const fn ordered(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }
}

impl Plugin<MediaType> for Codec {
    fn supports(&self, media: &MediaType) -> bool {
        self.media.contains(media)
    }
}

impl Prioritized for Codec {
    fn order(&self) -> Option<i32> {
        self.order
    }
}

/// An interceptor around another plugin, as a metrics or tracing layer
/// would be. Sorts as the plugin it wraps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metered<P> {
    pub inner: P,
}

impl<P> Metered<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<S: ?Sized, P: Plugin<S>> Plugin<S> for Metered<P> {
    fn supports(&self, delimiter: &S) -> bool {
        self.inner.supports(delimiter)
    }
}

impl<P: Prioritized> Prioritized for Metered<P> {
    fn target(&self) -> Option<&dyn Prioritized> {
        Some(&self.inner)
    }
}

/// Object-safe view of the plugins under test.
pub trait Named: Plugin<MediaType> + Prioritized + fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;
}

impl Named for Codec {
    fn name(&self) -> &'static str {
        self.name
    }
}

impl<P: Named> Named for Metered<P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub const JSON: Codec = Codec::new("json", &[MediaType::Json]);
pub const YAML: Codec = Codec::new("yaml", &[MediaType::Yaml, MediaType::Json]);
pub const CSV: Codec = Codec::new("csv", &[MediaType::Csv]);

pub fn codec_names<'a, I>(codecs: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a Codec>,
{
    codecs.into_iter().map(|codec| codec.name).collect()
}
