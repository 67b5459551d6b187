//! Tastebuds Core - Domain model and configuration for menu sharing
//!
//! This crate provides the fundamental building blocks shared across
//! Tastebuds services: the menu graph entities, media and availability
//! records, fork lineage types, centralized configuration, and tracing
//! setup. All entities are owned by the external store; nothing here
//! performs I/O or mutation.

pub mod config;
pub mod lineage;
pub mod media;
pub mod menu;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::{ShareConfig, StoreConfig, TastebudsConfig};
pub use lineage::{LineageInfo, LineageSource, MenuSummary};
pub use media::{AvailabilitySummary, MediaItem, MediaItemId, MediaType};
pub use menu::{Course, CourseItem, Menu, Pairing};
