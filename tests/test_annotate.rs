mod common;

use common::*;
use faceframe::annotate::draw_face_boxes;
use faceframe::models::Color;

#[test]
fn single_box_colors_exactly_the_outline_pixels() {
    let img = solid_image(100, 100, [255, 255, 255]);
    let mut annotated = img.to_rgb8();
    let red = Color { r: 255, g: 0, b: 0 };
    draw_face_boxes(&mut annotated, &[face_box(20, 30, 40, 20)], red, 1);

    let original = img.to_rgb8();
    let mut changed = 0usize;
    for (x, y, pixel) in annotated.enumerate_pixels() {
        let (xi, yi) = (x as i32, y as i32);
        // Outline corners are (20, 30) and (20 + 40, 30 + 20) inclusive.
        let on_outline = (20..=60).contains(&xi)
            && (30..=50).contains(&yi)
            && (xi == 20 || xi == 60 || yi == 30 || yi == 50);
        if on_outline {
            assert_eq!(pixel.0, [255, 0, 0], "outline pixel ({x}, {y}) not colored");
            changed += 1;
        } else {
            assert_eq!(
                pixel,
                original.get_pixel(x, y),
                "pixel ({x}, {y}) outside the outline changed"
            );
        }
    }
    // 41x21 outline: two horizontal runs plus two vertical runs minus the
    // four corners counted twice.
    assert_eq!(changed, 2 * 41 + 2 * 21 - 4);
}

#[test]
fn thickness_grows_inward() {
    let img = solid_image(50, 50, [0, 0, 0]);
    let mut annotated = img.to_rgb8();
    draw_face_boxes(&mut annotated, &[face_box(10, 10, 20, 20)], Color::GREEN, 2);

    // Outer ring and the ring inset by one are both colored.
    assert_eq!(annotated.get_pixel(10, 10).0, [0, 255, 0]);
    assert_eq!(annotated.get_pixel(11, 11).0, [0, 255, 0]);
    // Interior stays untouched.
    assert_eq!(annotated.get_pixel(12, 12).0, [0, 0, 0]);
    assert_eq!(annotated.get_pixel(20, 20).0, [0, 0, 0]);
    // Nothing bleeds outside the box.
    assert_eq!(annotated.get_pixel(9, 9).0, [0, 0, 0]);
    assert_eq!(annotated.get_pixel(9, 20).0, [0, 0, 0]);
}

#[test]
fn boxes_are_clamped_to_image_bounds() {
    let img = solid_image(40, 40, [255, 255, 255]);
    let mut annotated = img.to_rgb8();
    let blue = Color { r: 0, g: 0, b: 255 };
    // One box hangs over the right/bottom edges, one starts at negative
    // coordinates.
    draw_face_boxes(
        &mut annotated,
        &[face_box(30, 30, 20, 20), face_box(-5, -5, 10, 10)],
        blue,
        1,
    );
    // Clamped outlines land on the image edges instead of panicking.
    assert_eq!(annotated.get_pixel(39, 35).0, [0, 0, 255]);
    assert_eq!(annotated.get_pixel(35, 39).0, [0, 0, 255]);
    assert_eq!(annotated.get_pixel(0, 0).0, [0, 0, 255]);
    assert_eq!(annotated.get_pixel(5, 2).0, [0, 0, 255]);
}

#[test]
fn zero_thickness_is_a_no_op() {
    let img = solid_image(30, 30, [128, 128, 128]);
    let mut annotated = img.to_rgb8();
    draw_face_boxes(&mut annotated, &[face_box(5, 5, 10, 10)], Color::GREEN, 0);
    assert_eq!(annotated.as_raw(), img.to_rgb8().as_raw());
}

#[test]
fn every_box_in_the_list_is_outlined() {
    let img = solid_image(100, 100, [0, 0, 0]);
    let mut annotated = img.to_rgb8();
    let white = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    let boxes = [
        face_box(5, 5, 10, 10),
        face_box(40, 40, 20, 15),
        face_box(70, 10, 12, 12),
    ];
    draw_face_boxes(&mut annotated, &boxes, white, 1);
    for b in &boxes {
        assert_eq!(
            annotated.get_pixel(b.x as u32, b.y as u32).0,
            [255, 255, 255]
        );
        assert_eq!(
            annotated
                .get_pixel(b.x as u32 + b.width, b.y as u32 + b.height)
                .0,
            [255, 255, 255]
        );
    }
}

#[test]
fn degenerate_boxes_are_skipped() {
    let img = solid_image(20, 20, [10, 10, 10]);
    let mut annotated = img.to_rgb8();
    // Zero-area and fully out-of-bounds boxes must not draw anything.
    draw_face_boxes(
        &mut annotated,
        &[face_box(5, 5, 0, 0), face_box(100, 100, 10, 10)],
        Color::GREEN,
        2,
    );
    assert_eq!(annotated.as_raw(), img.to_rgb8().as_raw());
}
