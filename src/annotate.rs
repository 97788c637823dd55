use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::models::{Color, FaceBox};

/// Draw an unfilled rectangle outline for every face box, mutating the image
/// in place. The outline runs from `(x, y)` to `(x + w, y + h)` inclusive,
/// boxes are clamped to the image bounds, and thickness grows inward.
/// Iteration order is the order the detector returned the boxes in.
pub fn draw_face_boxes(image: &mut RgbImage, faces: &[FaceBox], color: Color, thickness: u32) {
    for face in faces {
        draw_box_outline(image, face, color, thickness);
    }
}

fn draw_box_outline(image: &mut RgbImage, face: &FaceBox, color: Color, thickness: u32) {
    if image.width() == 0 || image.height() == 0 {
        return;
    }
    let (w, h) = (i64::from(image.width()), i64::from(image.height()));

    // Clamp the inclusive corners to the image; the detector may emit boxes
    // touching or crossing the edge.
    let x_min = i64::from(face.x).clamp(0, w - 1);
    let y_min = i64::from(face.y).clamp(0, h - 1);
    let x_max = i64::from(face.right()).clamp(0, w - 1);
    let y_max = i64::from(face.bottom()).clamp(0, h - 1);

    if x_min >= x_max || y_min >= y_max {
        return;
    }

    let pixel = Rgb::from(color);
    for t in 0..i64::from(thickness) {
        let left = x_min + t;
        let top = y_min + t;
        let right = x_max - t;
        let bottom = y_max - t;
        if left >= right || top >= bottom {
            break;
        }
        let rect = Rect::at(left as i32, top as i32)
            .of_size((right - left + 1) as u32, (bottom - top + 1) as u32);
        draw_hollow_rect_mut(image, rect, pixel);
    }
}
