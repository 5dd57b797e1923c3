mod common;

#[cfg(test)]
pub mod catalog_tests {
    use std::collections::HashSet;

    use savory_bistro::models::*;

    #[test]
    fn test_all_filter_returns_everything() {
        assert_eq!(filtered(MENU_ITEMS, Filter::All).len(), MENU_ITEMS.len());
        assert_eq!(filtered(GALLERY_IMAGES, Filter::All).len(), GALLERY_IMAGES.len());
    }

    #[test]
    fn test_category_filter_partitions_menu() {
        let mut total = 0;
        for category in MenuCategory::ALL {
            let items = filtered(MENU_ITEMS, Filter::Only(category));
            assert!(!items.is_empty(), "{} has no items", category);
            assert!(items.iter().all(|item| item.category == category));
            total += items.len();
        }
        assert_eq!(total, MENU_ITEMS.len());
    }

    #[test]
    fn test_filter_keeps_original_order() {
        let desserts = filtered(MENU_ITEMS, Filter::Only(MenuCategory::Desserts));
        let expected: Vec<u32> = MENU_ITEMS
            .iter()
            .filter(|item| item.category == MenuCategory::Desserts)
            .map(|item| item.id)
            .collect();
        assert_eq!(desserts.iter().map(|item| item.id).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_gallery_filter() {
        for category in GalleryCategory::ALL {
            let images = filtered(GALLERY_IMAGES, Filter::Only(category));
            assert!(images.iter().all(|image| image.category == category));
        }
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let menu_ids: HashSet<u32> = MENU_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(menu_ids.len(), MENU_ITEMS.len());

        let gallery_ids: HashSet<u32> = GALLERY_IMAGES.iter().map(|image| image.id).collect();
        assert_eq!(gallery_ids.len(), GALLERY_IMAGES.len());
    }

    #[test]
    fn test_cursor_wraps_both_ways() {
        let mut cursor = Cursor::new(0, 3).unwrap();

        cursor.prev();
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.position_label(), "3 of 3");

        cursor.next();
        assert_eq!(cursor.index(), 0);
        cursor.next();
        assert_eq!(cursor.position_label(), "2 of 3");
    }

    #[test]
    fn test_cursor_bounds() {
        assert!(Cursor::new(0, 0).is_none());
        assert_eq!(Cursor::new(9, 4).unwrap().index(), 3);

        let mut cursor = Cursor::new(1, 4).unwrap();
        cursor.go_to(10);
        assert_eq!(cursor.index(), 1);
        cursor.go_to(3);
        assert_eq!(cursor.index(), 3);

        let mut single = Cursor::new(0, 1).unwrap();
        assert!(!single.has_many());
        single.next();
        assert_eq!(single.index(), 0);
    }

    #[test]
    fn test_testimonial_stars() {
        let five = TESTIMONIALS.iter().find(|t| t.rating == 5).unwrap();
        assert_eq!(five.stars(), [true; 5]);

        let four = Testimonial {
            rating: 4,
            ..*five
        };
        assert_eq!(four.stars(), [true, true, true, true, false]);

        let too_many = Testimonial {
            rating: 9,
            ..*five
        };
        assert_eq!(too_many.stars(), [true; 5]);
    }

    #[test]
    fn test_theme_variants() {
        assert_eq!("noctora".parse::<ThemeVariant>(), Ok(ThemeVariant::Noctora));
        assert_eq!(" Savory ".parse::<ThemeVariant>(), Ok(ThemeVariant::Savory));
        assert!("purple".parse::<ThemeVariant>().is_err());

        assert_eq!(ThemeVariant::Noctora.theme().brand, "Noctora");
        assert_eq!(ThemeVariant::default().theme(), Theme::SAVORY);
    }
}
