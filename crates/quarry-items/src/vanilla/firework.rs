use std::any::Any;
use std::sync::Arc;

use quarry_nbt::{Compound, NbtValue};

use super::colour::Colour;
use crate::item::{AuxDecoder, Item};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum FireworkShape {
    #[default]
    SmallSphere = 0,
    HugeSphere = 1,
    Star = 2,
    CreeperHead = 3,
    Burst = 4,
}

impl FireworkShape {
    pub fn from_id(id: u8) -> Option<FireworkShape> {
        Some(match id {
            0 => FireworkShape::SmallSphere,
            1 => FireworkShape::HugeSphere,
            2 => FireworkShape::Star,
            3 => FireworkShape::CreeperHead,
            4 => FireworkShape::Burst,
            _ => return None,
        })
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FireworkExplosion {
    pub shape: FireworkShape,
    pub colours: Vec<Colour>,
    pub fades: Vec<Colour>,
    pub twinkle: bool,
    pub trail: bool,
}

fn dye_list(data: &Compound, key: &str) -> Option<Vec<Colour>> {
    data.get(key)
        .and_then(NbtValue::as_byte_array)
        .map(|bytes| bytes.iter().filter_map(|&b| Colour::from_dye(b)).collect())
}

fn flag(data: &Compound, key: &str) -> Option<bool> {
    data.get(key).and_then(NbtValue::as_integer).map(|v| v != 0)
}

/// Small unsigned value stored under any integer tag; out-of-range values count as absent.
fn small(data: &Compound, key: &str) -> Option<u8> {
    data.get(key)
        .and_then(NbtValue::as_integer)
        .and_then(|v| u8::try_from(v).ok())
}

impl FireworkExplosion {
    /// Reads the `FireworkType`/`FireworkColor`/`FireworkFade`/`FireworkFlicker`/`FireworkTrail` keys
    /// on top of `base`. Keys that are absent keep `base`'s values.
    pub fn from_compound(base: &FireworkExplosion, data: &Compound) -> Self {
        let mut out = base.clone();
        if let Some(shape) = small(data, "FireworkType").and_then(FireworkShape::from_id) {
            out.shape = shape;
        }
        if let Some(colours) = dye_list(data, "FireworkColor") {
            out.colours = colours;
        }
        if let Some(fades) = dye_list(data, "FireworkFade") {
            out.fades = fades;
        }
        if let Some(twinkle) = flag(data, "FireworkFlicker") {
            out.twinkle = twinkle;
        }
        if let Some(trail) = flag(data, "FireworkTrail") {
            out.trail = trail;
        }
        out
    }
}

/// Firework rocket (401).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Firework {
    pub flight_duration: u8,
    pub explosions: Vec<FireworkExplosion>,
}

impl Default for Firework {
    fn default() -> Self {
        Self {
            flight_duration: 1,
            explosions: Vec::new(),
        }
    }
}

impl Firework {
    pub const ID: i32 = 401;
}

impl Item for Firework {
    fn encode_item(&self) -> (i32, i16) {
        (Self::ID, 0)
    }

    fn name(&self) -> String {
        "firework_rocket".to_string()
    }

    fn as_aux_decoder(&self) -> Option<&dyn AuxDecoder> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl AuxDecoder for Firework {
    fn decode_aux(&self, data: &Compound) -> Arc<dyn Item> {
        let mut out = self.clone();
        if let Some(fw) = data.get("Fireworks").and_then(NbtValue::as_compound) {
            if let Some(flight) = small(fw, "Flight") {
                out.flight_duration = flight;
            }
            if let Some(list) = fw.get("Explosions").and_then(NbtValue::as_list) {
                out.explosions = list
                    .iter()
                    .filter_map(NbtValue::as_compound)
                    .map(|ex| FireworkExplosion::from_compound(&FireworkExplosion::default(), ex))
                    .collect();
            }
        }
        Arc::new(out)
    }
}

/// Firework star (402). Meta is the dye value of the star's colour.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FireworkStar {
    pub colour: Colour,
    pub explosion: FireworkExplosion,
    pub custom_colour: Option<i32>,
}

impl FireworkStar {
    pub const ID: i32 = 402;

    pub fn new(colour: Colour) -> Self {
        Self {
            colour,
            explosion: FireworkExplosion {
                colours: vec![colour],
                ..Default::default()
            },
            custom_colour: None,
        }
    }
}

impl Item for FireworkStar {
    fn encode_item(&self) -> (i32, i16) {
        (Self::ID, self.colour.dye() as i16)
    }

    fn name(&self) -> String {
        format!("{}_firework_star", self.colour.name())
    }

    fn as_aux_decoder(&self) -> Option<&dyn AuxDecoder> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl AuxDecoder for FireworkStar {
    fn decode_aux(&self, data: &Compound) -> Arc<dyn Item> {
        let mut out = self.clone();
        if let Some(ex) = data.get("FireworksItem").and_then(NbtValue::as_compound) {
            out.explosion = FireworkExplosion::from_compound(&self.explosion, ex);
        }
        if let Some(c) = data.get("customColor").and_then(NbtValue::as_int) {
            out.custom_colour = Some(c);
        }
        Arc::new(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_meta_is_dye() {
        assert_eq!(FireworkStar::new(Colour::Black).encode_item(), (402, 0));
        assert_eq!(FireworkStar::new(Colour::White).encode_item(), (402, 15));
    }

    #[test]
    fn star_decode_keeps_colour() {
        let mut ex = Compound::new();
        ex.insert("FireworkType".into(), NbtValue::Byte(3));
        ex.insert("FireworkColor".into(), NbtValue::ByteArray(vec![1]));
        ex.insert("FireworkTrail".into(), NbtValue::Byte(1));
        let mut data = Compound::new();
        data.insert("FireworksItem".into(), NbtValue::Compound(ex));
        data.insert("customColor".into(), NbtValue::Int(-3));

        let item = FireworkStar::new(Colour::Red).decode_aux(&data);
        let star = item.as_any().downcast_ref::<FireworkStar>().unwrap();
        assert_eq!(star.colour, Colour::Red);
        assert_eq!(star.explosion.shape, FireworkShape::CreeperHead);
        assert_eq!(star.explosion.colours, vec![Colour::Red]);
        assert!(star.explosion.trail);
        assert!(!star.explosion.twinkle);
        assert_eq!(star.custom_colour, Some(-3));
    }

    #[test]
    fn rocket_with_empty_explosions() {
        let mut fw = Compound::new();
        fw.insert("Flight".into(), NbtValue::Byte(2));
        fw.insert("Explosions".into(), NbtValue::List(Vec::new()));
        let mut data = Compound::new();
        data.insert("Fireworks".into(), NbtValue::Compound(fw));

        let item = Firework::default().decode_aux(&data);
        let rocket = item.as_any().downcast_ref::<Firework>().unwrap();
        assert_eq!(rocket.flight_duration, 2);
        assert!(rocket.explosions.is_empty());
    }

    #[test]
    fn star_without_colour_key_keeps_own_colour() {
        let mut ex = Compound::new();
        ex.insert("FireworkType".into(), NbtValue::Byte(1));
        let mut data = Compound::new();
        data.insert("FireworksItem".into(), NbtValue::Compound(ex));

        let item = FireworkStar::new(Colour::Red).decode_aux(&data);
        let star = item.as_any().downcast_ref::<FireworkStar>().unwrap();
        assert_eq!(star.explosion.shape, FireworkShape::HugeSphere);
        assert_eq!(star.explosion.colours, vec![Colour::Red]);
        assert_eq!(star.custom_colour, None);
    }

    #[test]
    fn wide_integer_tags_are_accepted() {
        let mut ex = Compound::new();
        ex.insert("FireworkType".into(), NbtValue::Int(4));
        let mut fw = Compound::new();
        fw.insert("Flight".into(), NbtValue::Short(3));
        fw.insert("Explosions".into(), NbtValue::List(vec![NbtValue::Compound(ex)]));
        let mut data = Compound::new();
        data.insert("Fireworks".into(), NbtValue::Compound(fw));

        let item = Firework::default().decode_aux(&data);
        let rocket = item.as_any().downcast_ref::<Firework>().unwrap();
        assert_eq!(rocket.flight_duration, 3);
        assert_eq!(rocket.explosions[0].shape, FireworkShape::Burst);
    }

    #[test]
    fn out_of_range_flight_is_ignored() {
        let mut fw = Compound::new();
        fw.insert("Flight".into(), NbtValue::Int(300));
        let mut data = Compound::new();
        data.insert("Fireworks".into(), NbtValue::Compound(fw));

        let item = Firework::default().decode_aux(&data);
        let rocket = item.as_any().downcast_ref::<Firework>().unwrap();
        assert_eq!(rocket.flight_duration, 1);
    }
}
