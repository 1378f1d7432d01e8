//! Tests for the image session.

use std::fs;

use image::{self, ImageFormat, Rgb, RgbImage};
use rand::SeedableRng;
use rand::rngs::StdRng;
use spectral::prelude::*;
use tempfile::TempDir;

use filter::Filter;
use model::{Caption, Color, Position};
use resources::FontResolver;
use super::{Error, ImageSession, SessionBuilder};


fn new_session() -> ImageSession {
    SessionBuilder::new().font_resolver(FontResolver::fallback_only()).build().unwrap()
}

fn checkerboard(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 { Rgb([0xc0, 0x20, 0x40]) } else { Rgb([0x10, 0x90, 0xf0]) }
    })
}


#[test]
fn empty_session() {
    let mut session = new_session();
    assert!(!session.is_loaded());
    assert_eq!(None, session.dimensions());

    match session.apply_filter("Invert") {
        Err(Error::EmptyImage) => {},
        other => panic!("unexpected result: {:?}", other),
    }
    match session.draw_text(&Caption::text_at(Position::Top, "x")) {
        Err(Error::EmptyImage) => {},
        other => panic!("unexpected result: {:?}", other),
    }
    match session.save("/nonexistent/never.png") {
        Err(Error::EmptyImage) => {},
        other => panic!("unexpected result: {:?}", other),
    }
    session.reset();
    assert!(!session.is_loaded());
}

#[test]
fn load_and_save_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.png");
    checkerboard(8, 6).save(&path).unwrap();

    let mut session = new_session();
    assert_that!(session.load(&path)).is_ok();
    assert_eq!(Some((8, 6)), session.dimensions());
    assert_eq!(Some(&checkerboard(8, 6)), session.original());

    let copy = dir.path().join("copy.png");
    assert_that!(session.save(&copy)).is_ok();
    let mut other = new_session();
    other.load(&copy).unwrap();
    assert_eq!(session.image(), other.image());
}

#[test]
fn load_failure_clears_session() {
    let dir = TempDir::new().unwrap();
    let garbage = dir.path().join("garbage.png");
    fs::write(&garbage, b"this is not an image").unwrap();

    let mut session = new_session();
    session.load_image(checkerboard(4, 4));
    match session.load(&garbage) {
        Err(Error::Load(ref p, _)) => assert_eq!(&garbage, p),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(!session.is_loaded());
    assert_eq!(None, session.original());

    assert_that!(session.load(dir.path().join("missing.png")).is_err()).is_true();
    assert!(!session.is_loaded());
}

#[test]
fn reset_restores_original() {
    let mut session = new_session();
    session.load_image(checkerboard(30, 20));
    session.apply(Filter::Sepia).unwrap();
    session.draw_text(&Caption::text_at(Position::Middle, "Привіт").with_size(16)).unwrap();
    session.apply_with_rng(Filter::Vintage, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_ne!(Some(&checkerboard(30, 20)), session.image());

    session.reset();
    assert_eq!(Some(&checkerboard(30, 20)), session.image());
    assert_eq!(session.original(), session.image());
}

#[test]
fn unknown_filter_leaves_image_alone() {
    let mut session = new_session();
    session.load_image(checkerboard(5, 5));
    session.apply(Filter::Invert).unwrap();
    let before = session.image().cloned();

    match session.apply_filter("Flarp") {
        Err(Error::UnknownFilter(ref f)) => assert_eq!("Flarp", f.as_str()),
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(before.as_ref(), session.image());
}

#[test]
fn filter_by_label() {
    let mut session = new_session();
    session.load_image(checkerboard(5, 5));
    assert_that!(session.apply_filter("Негатив")).is_ok();
    assert_that!(session.apply_filter("negatив")).is_err();
    assert_eq!(Rgb([0x3f, 0xdf, 0xbf]), session.image().unwrap()[(0, 0)]);
}

#[test]
fn add_caption_skips_empty_texts() {
    let mut session = new_session();
    session.load_image(RgbImage::from_pixel(100, 100, Rgb([0x80, 0x80, 0x80])));
    session.add_caption("", "BOTTOM", "Impact", 8, Color::white()).unwrap();

    let img = session.image().unwrap();
    let white = Rgb([0xff, 0xff, 0xff]);
    assert!(img.rows().take(50).all(|mut row| row.all(|p| *p != white)));
    assert!(img.rows().skip(50).any(|mut row| row.any(|p| *p == white)));
}

#[test]
fn add_caption_needs_image() {
    match new_session().add_caption("a", "b", "Arial", 12, Color::white()) {
        Err(Error::EmptyImage) => {},
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn preview_never_upsizes() {
    let mut session = new_session();
    session.load_image(checkerboard(40, 30));
    assert_eq!((40, 30), session.preview_resize(800, 600).dimensions());
    assert_eq!((40, 30), session.preview_resize(40, 30).dimensions());
}

#[test]
fn preview_keeps_aspect_ratio() {
    let mut session = new_session();
    session.load_image(checkerboard(400, 200));
    assert_eq!((100, 50), session.preview_resize(100, 100).dimensions());
    assert_eq!((60, 30), session.preview_resize(500, 30).dimensions());
    // Stored image isn't touched.
    assert_eq!(Some((400, 200)), session.dimensions());
}

#[test]
fn preview_placeholder() {
    let preview = new_session().preview_resize(640, 480);
    assert_eq!((100, 100), preview.dimensions());
    assert!(preview.pixels().all(|p| *p == Rgb([0, 0, 0])));
}

#[test]
fn save_jpeg() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.JPG");
    let mut session = new_session();
    session.load_image(checkerboard(16, 16));
    assert_that!(session.save(&path)).is_ok();
    let saved = image::open(&path).unwrap().to_rgb8();
    assert_eq!((16, 16), saved.dimensions());
}

#[test]
fn save_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let mut session = new_session();
    session.load_image(checkerboard(4, 4));
    match session.save(dir.path().join("out.unknown")) {
        Err(Error::Save(Some(_), _)) => {},
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn encode_png() {
    let mut session = new_session();
    session.load_image(checkerboard(3, 3));
    let bytes = session.encode(ImageFormat::Png).unwrap();
    assert_eq!(&[0x89, b'P', b'N', b'G'], &bytes[..4]);
}
