//! Points of interest and the read-only registry that owns them.

use crate::error::PoiError;
use glam::Vec3;

/// Index of a POI in registry order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoiId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct Poi {
    pub position: Vec3,
    /// Packed 0xRRGGBB.
    pub color: u32,
    pub name: String,
    pub description: String,
}

impl Poi {
    pub fn new(position: Vec3, color: u32, name: &str, description: &str) -> Self {
        Self {
            position,
            color,
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    /// Colour as linear-ish RGB in \[0, 1\].
    pub fn color_rgb(&self) -> [f32; 3] {
        rgb_from_u32(self.color)
    }

    /// Colour as a CSS hex string, e.g. `#ffcc66`.
    pub fn css_color(&self) -> String {
        format!("#{:06x}", self.color & 0x00ff_ffff)
    }
}

#[inline]
pub fn rgb_from_u32(color: u32) -> [f32; 3] {
    [
        ((color >> 16) & 0xff) as f32 / 255.0,
        ((color >> 8) & 0xff) as f32 / 255.0,
        (color & 0xff) as f32 / 255.0,
    ]
}

/// Ordered, immutable collection of POIs.
#[derive(Clone, Debug, Default)]
pub struct PoiRegistry {
    pois: Vec<Poi>,
}

impl PoiRegistry {
    /// Validates every POI; the first offending entry is reported.
    pub fn new(pois: Vec<Poi>) -> Result<Self, PoiError> {
        for (index, poi) in pois.iter().enumerate() {
            if poi.name.trim().is_empty() {
                return Err(PoiError::EmptyName { index });
            }
            if !poi.position.is_finite() {
                return Err(PoiError::NonFinitePosition {
                    name: poi.name.clone(),
                });
            }
            if poi.color > 0x00ff_ffff {
                return Err(PoiError::ColorOutOfRange {
                    name: poi.name.clone(),
                    color: poi.color,
                });
            }
        }
        Ok(Self { pois })
    }

    pub fn len(&self) -> usize {
        self.pois.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }

    pub fn get(&self, id: PoiId) -> Option<&Poi> {
        self.pois.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PoiId, &Poi)> {
        self.pois.iter().enumerate().map(|(i, p)| (PoiId(i), p))
    }

    /// Lowest and highest POI Y, or `None` for an empty registry.
    pub fn vertical_extent(&self) -> Option<(f32, f32)> {
        let mut it = self.pois.iter().map(|p| p.position.y);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Plane depth used for pixel/world conversion: the mean POI Z.
    pub fn mean_z(&self) -> f32 {
        if self.pois.is_empty() {
            return 0.0;
        }
        self.pois.iter().map(|p| p.position.z).sum::<f32>() / self.pois.len() as f32
    }
}
