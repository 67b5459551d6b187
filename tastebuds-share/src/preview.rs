//! Cover image selection for preview surfaces.

use tastebuds_core::menu::Menu;

/// Collects up to `limit` cover image URLs from a menu graph.
///
/// Walks courses in their given order, then items within each course in
/// their given order, appending each present cover image and skipping items
/// without one (including items whose media reference did not resolve).
/// Deterministic: the same graph always yields the same sequence.
pub fn select_preview_images(menu: &Menu, limit: usize) -> Vec<String> {
    let mut images = Vec::new();
    if limit == 0 {
        return images;
    }

    for course in &menu.courses {
        for item in &course.items {
            let Some(cover) = item
                .media
                .as_ref()
                .and_then(|media| media.cover_image_url.as_deref())
            else {
                continue;
            };

            images.push(cover.to_string());
            if images.len() == limit {
                return images;
            }
        }
    }

    images
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tastebuds_core::media::{MediaItem, MediaItemId, MediaType};
    use tastebuds_core::menu::{Course, CourseItem, Menu};
    use uuid::Uuid;

    use super::*;

    fn item_with_cover(cover: Option<&str>) -> CourseItem {
        let media_item_id = MediaItemId::from("m");
        CourseItem {
            id: Uuid::new_v4(),
            media_item_id: media_item_id.clone(),
            position: 0,
            notes: None,
            media: cover.map(|url| MediaItem {
                id: media_item_id,
                title: "Pick".to_string(),
                subtitle: None,
                cover_image_url: Some(url.to_string()),
                release_date: None,
                canonical_url: None,
                media_type: MediaType::Movie,
            }),
        }
    }

    fn menu_from_layout(layout: &[Vec<Option<String>>]) -> Menu {
        Menu {
            id: Uuid::new_v4(),
            slug: "layout".to_string(),
            title: "Layout".to_string(),
            description: None,
            is_public: true,
            courses: layout
                .iter()
                .enumerate()
                .map(|(index, covers)| Course {
                    id: Uuid::new_v4(),
                    position: index as u32 + 1,
                    title: format!("Course {index}"),
                    description: None,
                    items: covers
                        .iter()
                        .map(|cover| item_with_cover(cover.as_deref()))
                        .collect(),
                })
                .collect(),
            pairings: vec![],
        }
    }

    #[test]
    fn test_empty_menu_yields_no_images() {
        let menu = menu_from_layout(&[]);
        assert!(select_preview_images(&menu, 4).is_empty());
    }

    #[test]
    fn test_items_without_covers_are_skipped() {
        let menu = menu_from_layout(&[vec![
            Some("a.jpg".to_string()),
            None,
            Some("b.jpg".to_string()),
        ]]);

        assert_eq!(select_preview_images(&menu, 4), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_course_then_item_order_is_preserved() {
        let menu = menu_from_layout(&[
            vec![Some("first.jpg".to_string())],
            vec![Some("second.jpg".to_string()), Some("third.jpg".to_string())],
        ]);

        assert_eq!(
            select_preview_images(&menu, 4),
            vec!["first.jpg", "second.jpg", "third.jpg"]
        );
    }

    #[test]
    fn test_selection_stops_at_limit() {
        let menu = menu_from_layout(&[vec![
            Some("a.jpg".to_string()),
            Some("b.jpg".to_string()),
            Some("c.jpg".to_string()),
            Some("d.jpg".to_string()),
        ]]);

        assert_eq!(select_preview_images(&menu, 3), vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_zero_limit_yields_nothing() {
        let menu = menu_from_layout(&[vec![Some("a.jpg".to_string())]]);
        assert!(select_preview_images(&menu, 0).is_empty());
    }

    proptest! {
        #[test]
        fn test_selection_is_ordered_prefix_within_limit(
            layout in prop::collection::vec(
                prop::collection::vec(prop::option::of("[a-z]{1,8}\\.jpg"), 0..5),
                0..5,
            ),
            limit in 0usize..6,
        ) {
            let menu = menu_from_layout(&layout);
            let images = select_preview_images(&menu, limit);

            let expected: Vec<String> = layout
                .iter()
                .flatten()
                .filter_map(|cover| cover.clone())
                .take(limit)
                .collect();

            prop_assert!(images.len() <= limit);
            prop_assert_eq!(images, expected);
        }
    }
}
