use super::*;
use crate::foundation::core::Size;
use crate::render::canvas::Pen;
use crate::render::sketch::SketchRecorder;
use crate::render::style::SketchStyle;

#[test]
fn empty_surface_is_rejected() {
    let surface = Surface::new();
    assert!(rasterize_surface(&surface, None).is_err());
}

#[test]
fn strokes_leave_ink_and_background_fills() {
    let mut surface = Surface::new();
    surface.resize(Size::new(64.0, 32.0));
    let mut canvas = SketchRecorder::new(1);
    Pen::new(&mut canvas, &mut surface).rectangle(4.0, 4.0, 56.0, 24.0, &SketchStyle::normal());

    let frame = rasterize_surface(&surface, None).unwrap();
    assert_eq!((frame.width, frame.height), (64, 32));
    assert_eq!(frame.data.len(), 64 * 32 * 4);
    let inked = frame.inked_pixels();
    assert!(inked > 0 && inked < 64 * 32, "inked = {inked}");

    let filled = rasterize_surface(&surface, Some(Rgba8::WHITE)).unwrap();
    assert_eq!(filled.inked_pixels(), 64 * 32);
}

#[test]
fn unpremultiply_restores_straight_color() {
    let mut px = vec![64, 0, 0, 128, 0, 0, 0, 0, 10, 20, 30, 255];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 0, 0, 128]);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..], &[10, 20, 30, 255]);
}

#[test]
fn png_roundtrips_dimensions() {
    let mut surface = Surface::new();
    surface.resize(Size::new(20.0, 10.0));
    let mut canvas = SketchRecorder::new(2);
    Pen::new(&mut canvas, &mut surface).line(0.0, 5.0, 20.0, 5.0, &SketchStyle::normal());
    let frame = rasterize_surface(&surface, Some(Rgba8::WHITE)).unwrap();

    let dir = std::path::PathBuf::from("target").join("raster_unit");
    let path = dir.join("line.png");
    write_png(&frame, &path).unwrap();
    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (20, 10));
}
