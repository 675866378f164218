//! Unit tests for sp-agent.

#[cfg(test)]
mod route {
    use sp_core::{FloorPoint, ShelfId};

    use crate::ScriptedRoute;

    fn pts(xs: &[(f32, f32)]) -> Vec<FloorPoint> {
        xs.iter().map(|&(x, z)| FloorPoint::on_floor(x, z)).collect()
    }

    #[test]
    fn short_paths_are_rejected() {
        assert!(ScriptedRoute::new(pts(&[(0.0, 0.0)]), vec![]).is_none());
        assert!(ScriptedRoute::new(vec![], vec![]).is_none());
    }

    #[test]
    fn segment_and_completion() {
        let mut r = ScriptedRoute::new(pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]), vec![]).unwrap();
        assert_eq!(r.cursor, 1);
        assert_eq!(
            r.segment(),
            Some((FloorPoint::on_floor(0.0, 0.0), FloorPoint::on_floor(1.0, 0.0)))
        );
        r.set_cursor(3);
        assert!(r.is_complete());
        assert_eq!(r.segment(), None);
        r.set_cursor(99);
        assert_eq!(r.cursor, 3);
    }

    #[test]
    fn loop_detection_uses_axis_tolerance() {
        let loop_route =
            ScriptedRoute::new(pts(&[(0.0, 0.0), (5.0, 5.0), (1.5, -1.0)]), vec![ShelfId::new("a")])
                .unwrap();
        assert!(loop_route.ends_where_it_started(2.0));
        let open = ScriptedRoute::new(pts(&[(0.0, 0.0), (5.0, 5.0)]), vec![]).unwrap();
        assert!(!open.ends_where_it_started(2.0));
    }
}

#[cfg(test)]
mod builder {
    use sp_core::{FloorPoint, ShelfId};

    use crate::CustomerBuilder;

    #[test]
    fn wandering_by_default() {
        let c = CustomerBuilder::new(FloorPoint::new(1.0, 3.0, 2.0)).build();
        assert!(c.is_wandering());
        assert_eq!(c.position.y, 0.0);
        assert_eq!(c.target_position, c.position);
        assert!(c.speed > 0.0);
    }

    #[test]
    fn target_and_invalid_speed() {
        let c = CustomerBuilder::new(FloorPoint::ORIGIN)
            .id("c1")
            .target(ShelfId::new("s"), FloorPoint::on_floor(4.0, 0.0))
            .speed(-2.0)
            .build();
        assert_eq!(c.id.as_str(), "c1");
        assert_eq!(c.target_shelf, Some(ShelfId::new("s")));
        assert_eq!(c.target_position, FloorPoint::on_floor(4.0, 0.0));
        assert_eq!(c.speed, 1.0);
    }
}

#[cfg(test)]
mod store {
    use sp_core::{CustomerId, FloorPoint, ShelfId, SpError};

    use crate::{CustomerStore, ScriptedVisitor};

    fn visitor(id: u32, len: usize) -> ScriptedVisitor {
        ScriptedVisitor {
            id: CustomerId::new(id.to_string()),
            path: (0..len).map(|i| FloorPoint::on_floor(i as f32, 0.0)).collect(),
            visited_shelves: vec![ShelfId::new(format!("s{id}"))],
        }
    }

    #[test]
    fn add_and_lookup() {
        let mut store = CustomerStore::new();
        let id = store.add(FloorPoint::on_floor(1.0, 1.0), None, 2.0);
        let c = store.get(id.as_str()).unwrap();
        assert!(c.is_wandering());
        assert_eq!(c.speed, 2.0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn bulk_replace_caps_then_filters() {
        let mut store = CustomerStore::new();
        store.add(FloorPoint::ORIGIN, None, 1.0);

        // 50 records; every 5th has a one-point path.
        let batch: Vec<_> = (0..50).map(|i| visitor(i, if i % 5 == 0 { 1 } else { 3 })).collect();
        let created = store.bulk_replace(batch, 20, 3.0);

        // First 20 records contain 4 malformed ones.
        assert_eq!(created, 16);
        assert_eq!(store.len(), 16);
        assert!(!store.contains("0"));
        assert!(store.contains("1"));
    }

    #[test]
    fn imported_customer_shape() {
        let mut store = CustomerStore::new();
        store.bulk_replace([visitor(7, 3)], 20, 3.0);
        let c = store.get("7").unwrap();
        assert_eq!(c.position, FloorPoint::on_floor(0.0, 0.0));
        assert_eq!(c.target_position, FloorPoint::on_floor(1.0, 0.0));
        assert_eq!(c.target_shelf, Some(ShelfId::new("s7")));
        assert_eq!(c.path_index(), Some(1));
        assert_eq!(c.speed, 3.0);
    }

    #[test]
    fn update_position_clamps_cursor() {
        let mut store = CustomerStore::new();
        store.bulk_replace([visitor(1, 3)], 20, 3.0);
        store.update_position("1", FloorPoint::on_floor(2.0, 0.0), Some(10)).unwrap();
        assert_eq!(store.get("1").unwrap().path_index(), Some(3));
    }

    #[test]
    fn clearing_target_parks_on_position() {
        let mut store = CustomerStore::new();
        let id = store.add(
            FloorPoint::on_floor(1.0, 2.0),
            Some((ShelfId::new("a"), FloorPoint::on_floor(5.0, 5.0))),
            1.0,
        );
        store.set_target(id.as_str(), None, None).unwrap();
        let c = store.get(id.as_str()).unwrap();
        assert!(c.is_wandering());
        assert_eq!(c.target_position, c.position);
    }

    #[test]
    fn remove_keeps_remaining_reachable() {
        let mut store = CustomerStore::new();
        let a = store.add(FloorPoint::ORIGIN, None, 1.0);
        let b = store.add(FloorPoint::on_floor(1.0, 0.0), None, 1.0);
        let c = store.add(FloorPoint::on_floor(2.0, 0.0), None, 1.0);
        store.remove(a.as_str()).unwrap();
        assert_eq!(store.get(c.as_str()).unwrap().position.x, 2.0);
        assert_eq!(store.ids().cloned().collect::<Vec<_>>(), vec![b, c]);
        assert!(matches!(store.remove(a.as_str()), Err(SpError::CustomerNotFound(_))));
    }

    #[test]
    fn unknown_ids_error() {
        let mut store = CustomerStore::new();
        assert!(store.update_position("x", FloorPoint::ORIGIN, None).is_err());
        assert!(store.set_target("x", None, None).is_err());
        assert!(store.note_product_visit("x").is_err());
    }
}

#[cfg(test)]
mod animation {
    use sp_core::FloorPoint;

    use crate::{CustomerStore, WalkCycle};

    #[test]
    fn walking_swings_legs() {
        let w = WalkCycle::default().advance(true, 0.1);
        assert!((w.phase - 0.5).abs() < 1e-6);
        assert!((w.leg_angle - 0.5_f32.sin() * 0.5).abs() < 1e-6);
    }

    #[test]
    fn standing_settles_toward_rest() {
        let w = WalkCycle { phase: 1.0, leg_angle: 0.4 }.advance(false, 0.1);
        assert!((w.leg_angle - 0.2).abs() < 1e-6);
        assert_eq!(w.phase, 1.0);
        let w = w.advance(false, 1.0);
        assert_eq!(w.leg_angle, 0.0);
    }

    #[test]
    fn threshold() {
        assert!(WalkCycle::is_walking(0.1, 0.0));
        assert!(!WalkCycle::is_walking(0.05, -0.09));
    }

    #[test]
    fn store_advances_only_movers() {
        let mut store = CustomerStore::new();
        let idle = store.add(FloorPoint::ORIGIN, None, 1.0);
        let mover = store.add(
            FloorPoint::ORIGIN,
            Some((sp_core::ShelfId::new("s"), FloorPoint::on_floor(3.0, 0.0))),
            1.0,
        );
        store.advance_animations(0.2);
        assert_eq!(store.get(idle.as_str()).unwrap().walk.phase, 0.0);
        assert!(store.get(mover.as_str()).unwrap().walk.phase > 0.0);
    }
}
