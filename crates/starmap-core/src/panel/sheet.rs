/// Vertical drag on the bottom sheet. Only downward travel moves the sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetDrag {
    start_y: f32,
    offset: f32,
}

impl SheetDrag {
    pub fn new(start_y: f32) -> Self {
        Self {
            start_y,
            offset: 0.0,
        }
    }

    /// Returns the sheet offset in CSS px (never negative).
    pub fn update(&mut self, y: f32) -> f32 {
        let dy = y - self.start_y;
        self.offset = if dy.is_finite() { dy.max(0.0) } else { 0.0 };
        self.offset
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn should_dismiss(&self, threshold_px: f32) -> bool {
        self.offset > threshold_px
    }
}
