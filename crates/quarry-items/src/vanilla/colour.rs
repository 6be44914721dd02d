/// The sixteen dye colours. The discriminant is the meta used by coloured blocks;
/// dye-based items (firework stars, banners) count the other way round.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(u8)]
pub enum Colour {
    White = 0,
    Orange = 1,
    Magenta = 2,
    LightBlue = 3,
    Yellow = 4,
    Lime = 5,
    Pink = 6,
    Grey = 7,
    LightGrey = 8,
    Cyan = 9,
    Purple = 10,
    Blue = 11,
    Brown = 12,
    Green = 13,
    Red = 14,
    Black = 15,
}

impl Colour {
    pub const ALL: &'static [Colour] = &[
        Colour::White,
        Colour::Orange,
        Colour::Magenta,
        Colour::LightBlue,
        Colour::Yellow,
        Colour::Lime,
        Colour::Pink,
        Colour::Grey,
        Colour::LightGrey,
        Colour::Cyan,
        Colour::Purple,
        Colour::Blue,
        Colour::Brown,
        Colour::Green,
        Colour::Red,
        Colour::Black,
    ];

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: u8) -> Option<Colour> {
        Colour::ALL.get(i as usize).copied()
    }

    #[inline]
    pub fn dye(self) -> u8 {
        15 - self.index()
    }

    pub fn from_dye(d: u8) -> Option<Colour> {
        if d > 15 {
            return None;
        }
        Colour::from_index(15 - d)
    }

    pub fn name(self) -> &'static str {
        match self {
            Colour::White => "white",
            Colour::Orange => "orange",
            Colour::Magenta => "magenta",
            Colour::LightBlue => "light_blue",
            Colour::Yellow => "yellow",
            Colour::Lime => "lime",
            Colour::Pink => "pink",
            Colour::Grey => "grey",
            Colour::LightGrey => "light_grey",
            Colour::Cyan => "cyan",
            Colour::Purple => "purple",
            Colour::Blue => "blue",
            Colour::Brown => "brown",
            Colour::Green => "green",
            Colour::Red => "red",
            Colour::Black => "black",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dye_order_is_reversed() {
        assert_eq!(Colour::White.dye(), 15);
        assert_eq!(Colour::Black.dye(), 0);
        assert_eq!(Colour::from_dye(1), Some(Colour::Red));
        assert_eq!(Colour::from_dye(16), None);
        for &c in Colour::ALL {
            assert_eq!(Colour::from_dye(c.dye()), Some(c));
            assert_eq!(Colour::from_index(c.index()), Some(c));
        }
    }
}
