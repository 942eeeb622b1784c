// Host-side tests for pointer picking against POI hitboxes.

use glam::{Vec2, Vec3};
use starmap_core::constants::POI_GLYPH_RADIUS;
use starmap_core::*;

fn poi(x: f32, y: f32, z: f32, name: &str) -> Poi {
    Poi::new(Vec3::new(x, y, z), 0xffffff, name, "")
}

fn straight_down(x: f32, y: f32) -> Ray {
    Ray {
        origin: Vec3::new(x, y, 60.0),
        dir: Vec3::NEG_Z,
    }
}

#[test]
fn nearest_overlapping_hitbox_wins() {
    let reg = PoiRegistry::new(vec![
        poi(0.0, 0.0, -5.0, "far"),
        poi(0.5, 0.0, 2.0, "near"),
    ])
    .unwrap();
    let cfg = StarMapConfig::default().hit_test;
    let hit = pick(&reg, &straight_down(0.2, 0.0), &cfg).unwrap();
    assert_eq!(hit.poi, PoiId(1));
    assert!((hit.distance - 58.0).abs() < 1e-4);
    assert!((hit.point - Vec3::new(0.2, 0.0, 2.0)).length() < 1e-4);
}

#[test]
fn equal_distance_resolves_to_registry_order() {
    let reg = PoiRegistry::new(vec![
        poi(-0.5, 0.0, 0.0, "first"),
        poi(0.5, 0.0, 0.0, "second"),
    ])
    .unwrap();
    let cfg = StarMapConfig::default().hit_test;
    let hit = pick(&reg, &straight_down(0.0, 0.0), &cfg).unwrap();
    assert_eq!(hit.poi, PoiId(0));
}

#[test]
fn no_intersection_is_no_selection() {
    let reg = PoiRegistry::new(vec![poi(0.0, 0.0, 0.0, "only")]).unwrap();
    let cfg = StarMapConfig::default().hit_test;
    assert!(pick(&reg, &straight_down(30.0, 30.0), &cfg).is_none());
    assert!(pick(&PoiRegistry::default(), &straight_down(0.0, 0.0), &cfg).is_none());
}

#[test]
fn mobile_hitbox_is_larger_and_reaches_further() {
    let reg = PoiRegistry::new(vec![poi(0.0, 0.0, -200.0, "deep")]).unwrap();
    let desktop = StarMapConfig::for_device(DeviceClass::Desktop).hit_test;
    let mobile = StarMapConfig::for_device(DeviceClass::Mobile).hit_test;
    // 260 units away: beyond the desktop reach, within the mobile reach
    assert!(pick(&reg, &straight_down(0.0, 0.0), &desktop).is_none());
    assert!(pick(&reg, &straight_down(0.0, 0.0), &mobile).is_some());

    let reg = PoiRegistry::new(vec![poi(0.0, 0.0, 0.0, "edge")]).unwrap();
    let off = POI_GLYPH_RADIUS * 2.5;
    assert!(pick(&reg, &straight_down(off, 0.0), &desktop).is_none());
    assert!(pick(&reg, &straight_down(off, 0.0), &mobile).is_some());
}

#[test]
fn star_map_picks_poi_under_its_projection() {
    let reg = default_registry().unwrap();
    let map = StarMap::new(reg, StarMapConfig::default(), Viewport::new(1280.0, 800.0));
    let target = PoiId(0);
    let px = map.screen_position(target).unwrap();
    assert_eq!(map.pick(px).map(|h| h.poi), Some(target));
    assert!(map.pick(Vec2::new(-500.0, -500.0)).is_none());
}
