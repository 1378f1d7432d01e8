//! Deserializer & parser for the Color type.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use css_color_parser::{Color as CssColor, ColorParseError as CssColorParseError};
use serde::de::{self, Deserialize, Visitor};

use super::super::constants::PALETTE;
use super::super::Color;


const FIELDS: &'static [&'static str] = &["r", "g", "b"];
const EXPECTING_MSG: &'static str = "color name, CSS color string or array/map of RGB values";

lazy_static! {
    /// Colors that can be referred to by name, keyed by lowercase name.
    ///
    /// Besides the palette names, this has their English equivalents,
    /// which take precedence over CSS color keywords of the same name.
    static ref NAMED_COLORS: HashMap<String, Color> = {
        let mut colors: HashMap<String, Color> = PALETTE.iter()
            .map(|&(name, color)| (name.to_lowercase(), color))
            .collect();
        colors.extend(hashmap!{
            "white".to_owned() => Color(0xff, 0xff, 0xff),
            "black".to_owned() => Color(0x0, 0x0, 0x0),
            "red".to_owned() => Color(0xff, 0x0, 0x0),
            "blue".to_owned() => Color(0x0, 0x0, 0xff),
            "green".to_owned() => Color(0x0, 0xff, 0x0),
            "yellow".to_owned() => Color(0xff, 0xff, 0x0),
        });
        colors
    };
}


impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: de::Deserializer<'de>
    {
        deserializer.deserialize_any(ColorVisitor)
    }
}

struct ColorVisitor;
impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", EXPECTING_MSG)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let color = Color::from_str(v).map_err(|e| {
            warn!("Failed to parse color `{}`: {}", v, e);
            E::custom(e)
        })?;
        Ok(color)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where A: de::SeqAccess<'de>
    {
        let mut rgb = [0u8; 3];
        for (i, channel) in rgb.iter_mut().enumerate() {
            *channel = seq.next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<u8>()?.is_some() {
            return Err(de::Error::invalid_length(rgb.len() + 1, &self));
        }
        let [r, g, b] = rgb;
        Ok(Color(r, g, b))
    }

    /// Accept maps with the channels keyed by letter or by full name, e.g. `{"red": 255, ...}`.
    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where A: de::MapAccess<'de>
    {
        let mut rgb: [Option<u8>; 3] = [None; 3];
        while let Some(key) = map.next_key::<String>()? {
            let index = match key.trim().to_lowercase().as_str() {
                "r" | "red" => 0,
                "g" | "green" => 1,
                "b" | "blue" => 2,
                other => return Err(de::Error::unknown_field(other, FIELDS)),
            };
            if rgb[index].is_some() {
                return Err(de::Error::duplicate_field(FIELDS[index]));
            }
            rgb[index] = Some(map.next_value()?);
        }
        match rgb {
            [Some(r), Some(g), Some(b)] => Ok(Color(r, g, b)),
            _ => {
                let missing = rgb.iter().position(Option::is_none).unwrap_or(0);
                Err(de::Error::missing_field(FIELDS[missing]))
            }
        }
    }
}


impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(v: &str) -> Result<Self, Self::Err> {
        let mut s = v.trim().to_lowercase();
        if let Some(&color) = NAMED_COLORS.get(&s) {
            return Ok(color);
        }

        // Replace all other possible hex prefixes with the standard CSS one.
        let mut had_hex_prefix = false;
        for &prefix in ["#", "0x", "$"].iter() {
            if s.starts_with(prefix) {
                s = s[prefix.len()..].to_owned();

                // If a prefix other than the standard CSS one is used,
                // the color has to be a full 24-bit hex number.
                if prefix != "#" && s.len() != 6 {
                    return Err(ColorParseError::Css(CssColorParseError));
                }

                had_hex_prefix = true;
                break;
            }
        }
        if had_hex_prefix {
            s = format!("#{}", s);
        }

        let css_color: CssColor = s.parse()?;
        if css_color.a != 1.0 {
            return Err(ColorParseError::Alpha(css_color.a));
        }

        Ok(Color(css_color.r, css_color.g, css_color.b))
    }
}


/// Error that may occur while parsing the Color.
#[derive(Debug, Error)]
pub enum ColorParseError {
    /// Error while trying to parse a string as CSS color.
    #[error(non_std, msg = "invalid CSS color syntax")]
    Css(CssColorParseError),
    /// Error for when the color erroneously includes an alpha channel value.
    #[error(no_from, non_std, msg = "color transparency not supported")]
    Alpha(f32),
}

// This is necessary because css_color_parser::ColorParseError doesn't impl PartialEq,
// so we cannot #[derive] that ourselves :(
impl PartialEq<ColorParseError> for ColorParseError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (&ColorParseError::Css(_), &ColorParseError::Css(_)) => true,
            (&ColorParseError::Alpha(a1), &ColorParseError::Alpha(a2)) => a1 == a2,
            _ => false,
        }
    }
}
