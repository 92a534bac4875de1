//! Unit tests for wh-core primitives.

#[cfg(test)]
mod ids {
    use crate::{PlanId, UnitId};

    #[test]
    fn ordering_and_next() {
        assert!(UnitId(0) < UnitId(1));
        assert_eq!(PlanId(4).next(), PlanId(5));
    }

    #[test]
    fn display() {
        assert_eq!(UnitId(7).to_string(), "UnitId(7)");
        assert_eq!(PlanId(0).to_string(), "PlanId(0)");
    }
}

#[cfg(test)]
mod coord {
    use crate::{Coord, Toward};

    #[test]
    fn adjacency() {
        let c = Coord::new(4, 4);
        assert!(c.is_adjacent(Coord::new(5, 4)));
        assert!(c.is_adjacent(Coord::new(4, 3)));
        assert!(!c.is_adjacent(Coord::new(5, 5)));
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn toward_between() {
        assert_eq!(Toward::between(3, 6), Toward::Right);
        assert_eq!(Toward::between(9, 6), Toward::Left);
        assert_eq!(Toward::between(6, 6), Toward::Here);
        assert_eq!(Toward::Left.step(), -1);
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(3, 2).to_string(), "(3, 2)");
        assert_eq!(Toward::Left.to_string(), "left");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(3).since(Tick(10)), 0);
        assert_eq!(Tick(12).since(Tick(10)), 2);
    }
}

#[cfg(test)]
mod config {
    use crate::{Coord, LayoutConfig, SimConfig, WhError};

    fn scenario() -> LayoutConfig {
        let blocked = [3, 9, 15]
            .into_iter()
            .flat_map(|c| [2, 5].into_iter().map(move |r| Coord::new(c, r)));
        LayoutConfig::default().with_blocked(blocked)
    }

    #[test]
    fn default_layout_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
        assert!(scenario().validate().is_ok());
    }

    #[test]
    fn aisle_and_dispatch_predicates() {
        let layout = LayoutConfig::default();
        let aisles: Vec<usize> = (0..layout.columns).filter(|&c| layout.is_aisle_column(c)).collect();
        assert_eq!(aisles, vec![6, 12]);
        assert!(!layout.is_dispatch_row(7));
        assert!(layout.is_dispatch_row(8));
        assert!(layout.is_dispatch_row(9));
        assert!(!layout.is_dispatch_row(10));
        assert_eq!(layout.storage_rows(), 8);
    }

    #[test]
    fn column_zero_is_never_an_aisle() {
        let layout = LayoutConfig { aisle_freq: 2, ..LayoutConfig::default() };
        assert!(!layout.is_aisle_column(0));
        assert!(layout.is_aisle_column(2));
    }

    #[test]
    fn rejects_bad_dimensions() {
        let empty = LayoutConfig { columns: 0, ..LayoutConfig::default() };
        assert_eq!(empty.validate(), Err(WhError::EmptyGrid { columns: 0, rows: 10 }));

        let freq = LayoutConfig { aisle_freq: 1, ..LayoutConfig::default() };
        assert_eq!(freq.validate(), Err(WhError::AisleFrequency(1)));

        let narrow = LayoutConfig { columns: 6, ..LayoutConfig::default() };
        assert!(matches!(narrow.validate(), Err(WhError::NoAisle { .. })));

        let zone = LayoutConfig { dispatch_zone_size: 1, ..LayoutConfig::default() };
        assert_eq!(zone.validate(), Err(WhError::DispatchZone(1)));

        let short = LayoutConfig { rows: 2, ..LayoutConfig::default() };
        assert!(matches!(short.validate(), Err(WhError::NoStorageRows { .. })));
    }

    #[test]
    fn rejects_bad_blocked_cells() {
        let out = LayoutConfig::default().with_blocked([Coord::new(18, 0)]);
        assert_eq!(out.validate(), Err(WhError::BlockedOutOfBounds(Coord::new(18, 0))));

        let aisle = LayoutConfig::default().with_blocked([Coord::new(6, 3)]);
        assert_eq!(aisle.validate(), Err(WhError::BlockedOnAisle(Coord::new(6, 3))));

        let dispatch = LayoutConfig::default().with_blocked([Coord::new(2, 9)]);
        assert_eq!(dispatch.validate(), Err(WhError::BlockedInDispatchZone(Coord::new(2, 9))));

        let dup = LayoutConfig::default().with_blocked([Coord::new(3, 2), Coord::new(3, 2)]);
        assert_eq!(dup.validate(), Err(WhError::DuplicateBlocked(Coord::new(3, 2))));
    }

    #[test]
    fn sim_config_defaults() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.move_delay_ticks, 30);
        assert_eq!(cfg.max_pending_moves, 1);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.coord(18, 10), r2.coord(18, 10));
        }
    }

    #[test]
    fn coord_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let c = rng.coord(18, 10);
            assert!(c.column < 18 && c.row < 10);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert_eq!(rng.choose::<u8>(&[]), None);
    }
}
