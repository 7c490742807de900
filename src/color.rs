// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub const CYAN: Color = Color::from_u32(0x00ffffff);
pub const MAGENTA: Color = Color::from_u32(0xff00ffff);

// Fixed two color palette particles are drawn from
pub const PALETTE: [Color; 2] = [CYAN, MAGENTA];

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Canvas fill style string, alpha is applied separately through globalAlpha
    pub fn to_css_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
