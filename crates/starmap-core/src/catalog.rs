use crate::error::PoiError;
use crate::poi::{Poi, PoiRegistry};
use glam::Vec3;

// (x, y, z, colour, name, description), top of the page first
const DEFAULT_POIS: &[(f32, f32, f32, u32, &str, &str)] = &[
    (
        -14.0,
        60.0,
        0.0,
        0xffd27a,
        "Sol",
        "Home star. A G-type main-sequence dwarf about 4.6 billion years old.",
    ),
    (
        18.0,
        44.0,
        -4.0,
        0xfff1c4,
        "Alpha Centauri",
        "The closest star system to the Sun, 4.37 light-years away, with two Sun-like stars and a red dwarf companion.",
    ),
    (
        -22.0,
        30.0,
        2.0,
        0xff6b5a,
        "Barnard's Star",
        "A faint red dwarf with the largest proper motion of any star seen from Earth.",
    ),
    (
        10.0,
        12.0,
        -2.0,
        0xbcd6ff,
        "Sirius",
        "The brightest star in the night sky, a hot white main-sequence star with a white dwarf companion.",
    ),
    (
        -8.0,
        -6.0,
        1.0,
        0xff9a5c,
        "Epsilon Eridani",
        "A young orange dwarf ringed by dusty debris belts and a Jupiter-mass planet.",
    ),
    (
        20.0,
        -20.0,
        -3.0,
        0xa8c4ff,
        "Vega",
        "A rapidly spinning A-type star once used as the zero point of the magnitude scale.",
    ),
    (
        -16.0,
        -38.0,
        0.0,
        0xff5c3a,
        "Betelgeuse",
        "A red supergiant in Orion, large enough to swallow the orbit of Jupiter.",
    ),
    (
        6.0,
        -56.0,
        -1.0,
        0xd7b4ff,
        "Orion Nebula",
        "A stellar nursery 1,340 light-years away where thousands of young stars are forming.",
    ),
];

/// Builds the registry shipped with the page.
pub fn default_registry() -> Result<PoiRegistry, PoiError> {
    PoiRegistry::new(
        DEFAULT_POIS
            .iter()
            .map(|&(x, y, z, color, name, description)| {
                Poi::new(Vec3::new(x, y, z), color, name, description)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_valid_and_ordered_top_down() {
        let reg = default_registry().unwrap();
        assert_eq!(reg.len(), DEFAULT_POIS.len());
        let ys: Vec<f32> = reg.iter().map(|(_, p)| p.position.y).collect();
        assert!(ys.windows(2).all(|w| w[0] > w[1]));
    }
}
