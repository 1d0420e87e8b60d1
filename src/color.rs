use eframe::egui::Color32;
use palette::{named, Darken, Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Chart element colours, shared by the PNG and the viewer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Pm10,
    Pm25,
    Pm10Limit,
    Pm25Limit,
}

impl Element {
    pub fn base(self) -> Srgb<u8> {
        match self {
            Element::Pm10 => named::ORANGE,
            Element::Pm25 => named::GREEN,
            Element::Pm10Limit => named::RED,
            Element::Pm25Limit => named::BLUE,
        }
    }

    /// Darker variant used for markers on slots above the limit.
    pub fn marker(self) -> Srgb<u8> {
        darken(self.base(), 0.35)
    }
}

/// Darken in HSL space so the hue stays recognisable.
pub fn darken(color: Srgb<u8>, amount: f32) -> Srgb<u8> {
    let hsl: Hsl = color.into_format::<f32>().into_color();
    let rgb: Srgb = hsl.darken(amount).into_color();
    rgb.into_format()
}

pub fn to_egui(color: Srgb<u8>) -> Color32 {
    Color32::from_rgb(color.red, color.green, color.blue)
}

pub fn to_plotters(color: Srgb<u8>) -> RGBColor {
    RGBColor(color.red, color.green, color.blue)
}
