//! Tests for parsing & deserializing model types.

use serde_json::{self, Value};
use serde_test::{assert_de_tokens, Token};
use spectral::prelude::*;

use super::super::{Color, ColorParseError, Position};


#[test]
fn color_from_palette_name() {
    assert_that!("Червоний".parse::<Color>()).is_ok().is_equal_to(Color(0xff, 0, 0));
    assert_that!("жовтий".parse::<Color>()).is_ok().is_equal_to(Color(0xff, 0xff, 0));
}

#[test]
fn color_english_name_beats_css_keyword() {
    // CSS "green" is #008000, but the palette's green is pure.
    assert_that!("green".parse::<Color>()).is_ok().is_equal_to(Color(0, 0xff, 0));
    assert_that!(" White ".parse::<Color>()).is_ok().is_equal_to(Color::white());
}

#[test]
fn color_css_syntax() {
    assert_that!("#0a0b0c".parse::<Color>()).is_ok().is_equal_to(Color(10, 11, 12));
    assert_that!("0xff8000".parse::<Color>()).is_ok().is_equal_to(Color(255, 128, 0));
    assert_that!("$00FF00".parse::<Color>()).is_ok().is_equal_to(Color(0, 255, 0));
    assert_that!("rgb(1,2,3)".parse::<Color>()).is_ok().is_equal_to(Color(1, 2, 3));
    assert_that!("teal".parse::<Color>()).is_ok().is_equal_to(Color(0, 128, 128));
}

#[test]
fn color_short_hex_needs_css_prefix() {
    assert_that!("#fff".parse::<Color>()).is_ok().is_equal_to(Color::white());
    assert_that!("0xfff".parse::<Color>()).is_err();
}

#[test]
fn color_with_alpha() {
    assert_that!("rgba(1,2,3,0.5)".parse::<Color>())
        .is_err().is_equal_to(ColorParseError::Alpha(0.5));
}

#[test]
fn color_garbage() {
    assert_that!("definitely not a color".parse::<Color>()).is_err();
}

#[test]
fn deserialize_color_forms() {
    assert_de_tokens(&Color(1, 2, 3), &[
        Token::Seq{len: Some(3)},
        Token::U8(1), Token::U8(2), Token::U8(3),
        Token::SeqEnd,
    ]);
    assert_de_tokens(&Color(0xff, 0, 0), &[Token::Str("red")]);

    let from_map: Color = serde_json::from_value(json_map(4, 5, 6)).unwrap();
    assert_eq!(Color(4, 5, 6), from_map);
}

#[test]
fn deserialize_color_wrong_length() {
    let input: Value = serde_json::from_str("[1, 2]").unwrap();
    let result = serde_json::from_value::<Color>(input);
    assert_that!(result.is_err()).is_true();
    if let Err(e) = result {
        assert_that!(format!("{}", e)).contains("invalid length");
    }
}

#[test]
fn deserialize_position() {
    assert_de_tokens(&Position::Top, &[
        Token::UnitVariant{name: "Position", variant: "top"},
    ]);
    let bottom: Position = serde_json::from_str("\"bottom\"").unwrap();
    assert_eq!(Position::Bottom, bottom);
    assert_that!(serde_json::from_str::<Position>("\"left\"")).is_err();
}


// Utility functions

fn json_map(r: u8, g: u8, b: u8) -> Value {
    let mut map = serde_json::Map::new();
    map.insert("red".into(), r.into());
    map.insert("g".into(), g.into());
    map.insert("Blue".into(), b.into());
    Value::Object(map)
}
