use colors_transform::Color;
use colors_transform::Hsl;
use colors_transform::Rgb;
use glam::Vec4;

pub trait Vec4Color {
    fn new_rgb(r: u8, g: u8, b: u8, a: u8) -> Vec4;
    fn new_hsl(hue: f32, saturation: f32, lightness: f32) -> Vec4;
}

pub trait RgbToVec4 {
    fn to_vec4(self) -> Vec4;
}

impl Vec4Color for Vec4 {
    fn new_rgb(r: u8, g: u8, b: u8, a: u8) -> Vec4 {
        Vec4::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Hue in degrees, saturation and lightness in percents.
    fn new_hsl(hue: f32, saturation: f32, lightness: f32) -> Vec4 {
        Hsl::from(hue, saturation, lightness).to_rgb().to_vec4()
    }
}

impl RgbToVec4 for Rgb {
    fn to_vec4(self) -> Vec4 {
        let (r, g, b) = self.as_tuple();
        Vec4::new(r / 255.0, g / 255.0, b / 255.0, 1.0)
    }
}
