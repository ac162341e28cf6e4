//! Minimal HAL (`application/hal+json`) hypermedia models.
//!
//! Links are plain string hrefs; callers template them from a base URL.

use std::collections::BTreeMap;

use serde::Serialize;

pub const SELF_REL: &str = "self";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// Relation name to link, rendered as the `_links` object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Links(BTreeMap<String, Link>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_self(self, href: impl Into<String>) -> Self {
        self.with_rel(SELF_REL, href)
    }

    pub fn with_rel(mut self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        self.0.insert(rel.into(), Link::new(href));
        self
    }
}

/// A single resource with its links; resource fields are inlined.
#[derive(Clone, Debug, Serialize)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> EntityModel<T> {
    pub fn new(content: T, links: Links) -> Self {
        Self { content, links }
    }
}

/// A collection of resources embedded under a single relation name.
#[derive(Clone, Debug, Serialize)]
pub struct CollectionModel<T> {
    #[serde(rename = "_embedded")]
    pub embedded: BTreeMap<String, Vec<T>>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> CollectionModel<T> {
    pub fn new(rel: impl Into<String>, items: Vec<T>, links: Links) -> Self {
        let mut embedded = BTreeMap::new();
        embedded.insert(rel.into(), items);
        Self { embedded, links }
    }
}
