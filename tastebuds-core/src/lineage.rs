//! Fork ancestry for public menus.
//!
//! A menu's fork graph can be arbitrarily deep, but only one hop in each
//! direction is ever materialized: the immediate source and the immediate
//! forks. This is display data, not a traversal structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bounded representation of a referenced menu in a lineage panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuSummary {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    /// Whether the referenced menu is publicly reachable. Non-public
    /// references may show their title but must not render as links.
    pub is_public: bool,
}

/// The menu this one was forked from, with the fork note left by its author.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineageSource {
    pub menu: MenuSummary,
    pub fork_note: Option<String>,
}

/// One hop of fork ancestry in each direction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineageInfo {
    pub source: Option<LineageSource>,
    /// Immediate forks, bounded to a display count by the resolver.
    pub forks: Vec<MenuSummary>,
    /// Total fork count, reported independently of the bounded list.
    pub fork_count: u64,
}
