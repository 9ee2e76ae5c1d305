use globe_lookup::prelude::*;
use globe_lookup::{Bounds, Cell};
use std::rc::Rc;

/// Test 1: Poles and the antimeridian are valid positions
#[test]
fn test_extreme_coordinates() {
    let mut globe = Globe::new();

    let north_pole = GeoPoint::new(90.0, 0.0);
    let south_pole = GeoPoint::new(-90.0, 0.0);
    let date_line_east = GeoPoint::new(0.0, 180.0);
    let date_line_west = GeoPoint::new(0.0, -180.0);

    for p in [north_pole, south_pole, date_line_east, date_line_west] {
        globe.add(p).expect("Failed to insert edge coordinate");
    }
    assert_eq!(globe.len(), 4);

    let results = globe.search(89.999, 0.0, 1_000.0);
    assert_eq!(results, vec![&north_pole]);

    // 180 and -180 are the same meridian.
    let results = globe.search(0.0, 180.0, 1.0);
    assert_eq!(results.len(), 2);
}

/// Test 2: Zero range finds nothing, even an exactly coincident item
#[test]
fn test_zero_and_tiny_ranges() {
    let mut globe = Globe::new();
    let p = GeoPoint::new(12.345, 67.89);
    globe.add(p).unwrap();

    assert!(globe.search(p.lat, p.lon, 0.0).is_empty());
    assert_eq!(globe.search(p.lat, p.lon, 1e-9), vec![&p]);
    assert_eq!(globe.search(p.lat, p.lon, f64::MIN_POSITIVE), vec![&p]);
}

/// Test 3: Items exactly on cell boundaries
#[test]
fn test_items_on_cell_boundaries() {
    let mut globe = Globe::new();
    let corners = [
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(18.0, 36.0),
        GeoPoint::new(-18.0, -36.0),
        GeoPoint::new(72.0, 144.0),
    ];
    for p in corners {
        globe.add(p).unwrap();
    }

    for p in &corners {
        assert!(globe.leaf_at(p.lat, p.lon).bounds().contains(p.lat, p.lon));
        assert_eq!(globe.search(p.lat, p.lon, 1e-3), vec![p]);
    }
}

/// Test 4: Empty globe queries
#[test]
fn test_empty_globe_queries() {
    let globe: Globe<GeoPoint> = Globe::new();
    assert!(globe.search(0.0, 0.0, 1e7).is_empty());
    assert!(globe.all_items().is_empty());
    assert_eq!(globe.stats().leaf_cells, 100);
}

/// Test 5: Invalid coordinates and ranges
#[test]
fn test_invalid_inputs() {
    let mut globe = Globe::new();
    assert!(matches!(
        globe.add(GeoPoint::new(0.0, 181.0)),
        Err(GlobeError::InvalidCoordinate { .. })
    ));
    assert!(matches!(
        globe.add(GeoPoint::new(f64::NAN, f64::NAN)),
        Err(GlobeError::InvalidCoordinate { .. })
    ));
    assert!(matches!(
        globe.subdivide_at(-91.0, 0.0, 2, 2),
        Err(GlobeError::InvalidCoordinate { .. })
    ));

    globe.add(GeoPoint::new(1.0, 1.0)).unwrap();
    assert!(globe.search(1.0, 1.0, -5.0).is_empty());
    assert!(globe.search(f64::NAN, 1.0, 1_000.0).is_empty());

    // Removing something never added has no effect.
    globe.remove(&GeoPoint::new(50.0, 50.0));
    globe.remove(&GeoPoint::new(f64::NAN, 500.0));
    assert_eq!(globe.len(), 1);
}

/// Test 6: Single-cell globe degenerates to a brute-force scan
#[test]
fn test_single_cell_globe() {
    let mut globe = Globe::with_divisions(EARTH_RADIUS_METERS, 1, 1).unwrap();
    globe.add(GeoPoint::new(10.0, 170.0)).unwrap();
    globe.add(GeoPoint::new(10.0, -170.0)).unwrap();

    assert_eq!(globe.search(10.0, 180.0, 2_500_000.0).len(), 2);
    assert!(matches!(globe.sub_region(0.0, 0.0), Cell::Leaf(_)));
}

/// Test 7: A custom radius changes the distance unit
#[test]
fn test_kilometre_globe() {
    let mut globe = Globe::with_radius(6_371.0).unwrap();
    let nyc = GeoPoint::new(40.7128, -74.0060);
    globe.add(nyc).unwrap();

    assert_eq!(globe.search(34.0522, -118.2437, 4_000.0).len(), 1);
    assert!(globe.search(34.0522, -118.2437, 3_900.0).is_empty());
}

/// Test 8: Shared handles can be indexed and removed
#[test]
fn test_shared_handles() {
    let mut globe = Globe::new();
    let tokyo = Rc::new(GeoPoint::new(35.6762, 139.6503));
    globe.add(Rc::clone(&tokyo)).unwrap();

    assert_eq!(Rc::strong_count(&tokyo), 2);
    assert_eq!(globe.search(35.68, 139.65, 1_000.0).len(), 1);

    globe.remove(&tokyo);
    assert!(globe.is_empty());
    assert_eq!(Rc::strong_count(&tokyo), 1);

    // Equal coordinates, distinct handles: removal takes the handle it was given.
    let a = Rc::new(GeoPoint::new(10.0, 10.0));
    let b = Rc::new(GeoPoint::new(10.0, 10.0));
    globe.add(Rc::clone(&a)).unwrap();
    globe.add(Rc::clone(&b)).unwrap();

    globe.remove(&b);
    assert_eq!(globe.len(), 1);
    assert_eq!(Rc::strong_count(&a), 2);
    assert_eq!(Rc::strong_count(&b), 1);
    assert!(Rc::ptr_eq(globe.all_items()[0], &a));
}

/// Test 9: Deeply nested subdivision
#[test]
fn test_deep_subdivision() {
    let mut globe = Globe::new();
    let p = GeoPoint::new(-33.8688, 151.2093);
    globe.add(p).unwrap();

    for _ in 0..8 {
        assert_eq!(globe.subdivide_at(p.lat, p.lon, 2, 2).unwrap(), 1);
    }

    let leaf = globe.leaf_at(p.lat, p.lon);
    let b: &Bounds = leaf.bounds();
    assert!(b.lat_span() < 0.1);
    assert!(b.contains(p.lat, p.lon));
    assert_eq!(globe.stats().max_depth, 9);
    assert_eq!(globe.search(p.lat, p.lon, 1.0), vec![&p]);
    assert_eq!(globe.search(p.lat + 0.2, p.lon, 30_000.0), vec![&p]);
}

/// Test 10: Clamp policy keeps off-globe items addressable
#[test]
fn test_clamp_policy_round_trip() {
    let mut globe = GlobeBuilder::new()
        .coordinate_policy(CoordinatePolicy::Clamp)
        .build()
        .unwrap();

    let beyond = GeoPoint::new(-95.0, -200.0);
    globe.add(beyond).unwrap();
    assert_eq!(globe.all_items(), vec![&beyond]);

    globe.remove(&beyond);
    assert!(globe.is_empty());
}
