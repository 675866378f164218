//! Unit tests for sp-layout.

#[cfg(test)]
mod kind {
    use crate::{LayoutError, ProductCategory, ShelfKind, ShelfSize};

    #[test]
    fn parses_wire_names() {
        assert_eq!("cashier".parse::<ShelfKind>().unwrap(), ShelfKind::Checkout);
        assert_eq!("wall".parse::<ShelfKind>().unwrap(), ShelfKind::Wall);
        assert_eq!(
            "Dairy".parse::<ShelfKind>().unwrap(),
            ShelfKind::Product(ProductCategory::Dairy)
        );
        assert_eq!(ShelfKind::Checkout.to_string(), "cashier");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "spaceship".parse::<ShelfKind>().unwrap_err();
        assert!(matches!(err, LayoutError::UnknownKind(s) if s == "spaceship"));
    }

    #[test]
    fn every_category_round_trips_through_its_name() {
        for c in ProductCategory::ALL {
            assert_eq!(c.as_str().parse::<ShelfKind>().unwrap(), ShelfKind::Product(c));
        }
    }

    #[test]
    fn sizes() {
        assert_eq!("large".parse::<ShelfSize>().unwrap().dimensions(), [2.5, 1.5, 0.6]);
        assert_eq!(ShelfSize::default(), ShelfSize::Medium);
        assert!("huge".parse::<ShelfSize>().is_err());
    }
}

#[cfg(test)]
mod registry {
    use sp_core::{FloorPoint, SpError};

    use crate::{LayoutError, ProductCategory, Shelf, ShelfKind, ShelfRegistry, ShelfSize};

    fn dairy(id: &str, x: f32) -> Shelf {
        Shelf::new(id, ShelfKind::Product(ProductCategory::Dairy), FloorPoint::on_floor(x, 0.0))
    }

    #[test]
    fn add_generates_unique_ids_in_order() {
        let mut reg = ShelfRegistry::new();
        let a = reg.add(ShelfKind::Wall, ShelfSize::Small, FloorPoint::ORIGIN);
        let b = reg.add(ShelfKind::Checkout, ShelfSize::Large, FloorPoint::on_floor(1.0, 1.0));
        assert_ne!(a, b);
        let ids: Vec<_> = reg.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut reg = ShelfRegistry::new();
        reg.insert(dairy("d", 0.0)).unwrap();
        assert!(matches!(reg.insert(dairy("d", 1.0)), Err(LayoutError::DuplicateShelf(_))));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn increment_is_monotonic() {
        let mut reg = ShelfRegistry::from_shelves([dairy("d", 0.0)]).unwrap();
        assert_eq!(reg.increment_interaction("d").unwrap(), 1);
        assert_eq!(reg.increment_interaction("d").unwrap(), 2);
        assert_eq!(reg.get("d").unwrap().interaction_count, 2);
    }

    #[test]
    fn unknown_id_reports_not_found() {
        let mut reg = ShelfRegistry::new();
        assert!(matches!(reg.increment_interaction("nope"), Err(SpError::ShelfNotFound(_))));
        assert!(reg.update_rotation("nope", 1.0).is_err());
        assert!(reg.remove("nope").is_err());
    }

    #[test]
    fn remove_keeps_index_consistent() {
        let mut reg =
            ShelfRegistry::from_shelves([dairy("a", 0.0), dairy("b", 1.0), dairy("c", 2.0)]).unwrap();
        reg.remove("a").unwrap();
        assert_eq!(reg.get("c").unwrap().position.x, 2.0);
        reg.update_position("b", 5.0, 6.0).unwrap();
        assert_eq!(reg.get("b").unwrap().position, FloorPoint::on_floor(5.0, 6.0));
    }

    #[test]
    fn replace_all_is_atomic_on_duplicate() {
        let mut reg = ShelfRegistry::from_shelves([dairy("keep", 0.0)]).unwrap();
        assert!(reg.replace_all([dairy("x", 0.0), dairy("x", 1.0)]).is_err());
        assert!(reg.contains("keep"));
        reg.replace_all([dairy("x", 0.0)]).unwrap();
        assert!(!reg.contains("keep"));
        reg.clear();
        assert!(reg.is_empty());
    }

    #[test]
    fn checkout_positions() {
        let mut reg = ShelfRegistry::from_shelves([dairy("a", 0.0)]).unwrap();
        assert!(!reg.has_checkout());
        reg.insert(Shelf::new("till", ShelfKind::Checkout, FloorPoint::on_floor(3.0, 4.0)))
            .unwrap();
        assert_eq!(reg.checkout_positions(), vec![FloorPoint::on_floor(3.0, 4.0)]);
    }
}

#[cfg(test)]
mod store {
    use sp_core::{FloorPoint, SequenceRng};

    use crate::{Footprint, ShelfRegistry, StoreLayout};

    #[test]
    fn entrance_defaults_to_front_door() {
        let layout = StoreLayout::new(Footprint::default(), ShelfRegistry::new());
        assert_eq!(layout.entrance, FloorPoint::on_floor(0.0, 15.0));
    }

    #[test]
    fn spawn_point_lies_on_inset_ellipse() {
        let layout = StoreLayout::new(Footprint { width: 10.0, length: 20.0, height: 3.0 }, ShelfRegistry::new());
        let mut rng = SequenceRng::new(vec![0.0, 0.25]);
        let p0 = layout.spawn_point(&mut rng);
        assert!((p0.x - 4.0).abs() < 1e-5 && p0.z.abs() < 1e-5);
        let p1 = layout.spawn_point(&mut rng);
        assert!(p1.x.abs() < 1e-4 && (p1.z - 9.0).abs() < 1e-4);
    }
}
