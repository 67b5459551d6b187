//! The menu graph: menus, courses, course items, and pairings.
//!
//! Every entity here is created and owned by the external menu store; this
//! crate only models the shape the store hands back. Iteration order of
//! `courses` and `items`, not the stored position values, is authoritative
//! for aggregation and display.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::media::{MediaItem, MediaItemId};

/// A user-curated menu of courses and items.
///
/// A menu is either public (reachable by its permanent slug) or private
/// (reachable only through a draft share token scoped to it). The slug is
/// unique and immutable once the menu goes public.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Menu {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub courses: Vec<Course>,
    pub pairings: Vec<Pairing>,
}

/// One course within a menu, holding an ordered run of items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: Uuid,
    /// Stored display position. Contiguity is not guaranteed; consumers
    /// iterate in sequence order instead of sorting by this value.
    pub position: u32,
    pub title: String,
    pub description: Option<String>,
    pub items: Vec<CourseItem>,
}

/// A single pick within a course, referencing a media item by identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseItem {
    pub id: Uuid,
    /// Weak reference into the external media catalog.
    pub media_item_id: MediaItemId,
    pub position: u32,
    pub notes: Option<String>,
    /// The resolved media record, populated by the store when materializing
    /// the graph. `None` when the referenced media no longer exists; the
    /// item then renders degraded rather than breaking the menu.
    pub media: Option<MediaItem>,
}

/// A descriptive relationship between two items of the same menu.
///
/// Never interpreted by the resolution engine; carried through to the view
/// model untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pairing {
    pub first_item_id: Uuid,
    pub second_item_id: Uuid,
    pub relationship: String,
    pub note: Option<String>,
}

impl Menu {
    /// Total number of items across all courses.
    pub fn total_items(&self) -> usize {
        self.courses.iter().map(|course| course.items.len()).sum()
    }
}
