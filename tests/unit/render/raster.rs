use super::*;

#[test]
fn filled_layer_is_uniform() {
    let layer = RasterLayer::filled(4, 3, Rgba8::new(10, 20, 30, 255));
    assert_eq!(layer.data().len(), 4 * 3 * 4);
    assert!(
        layer
            .data()
            .chunks_exact(4)
            .all(|px| px == [10, 20, 30, 255])
    );
}

#[test]
fn filled_layer_stores_premultiplied_pixels() {
    let layer = RasterLayer::filled(1, 1, Rgba8::new(255, 128, 0, 150));
    assert_eq!(layer.pixel(0, 0), Some([150, 75, 0, 150]));
}

#[test]
fn out_of_bounds_writes_are_ignored() {
    let mut layer = RasterLayer::filled(2, 2, Rgba8::BLACK);
    let before = layer.clone();
    layer.put(-1, 0, [255; 4]);
    layer.put(0, 2, [255; 4]);
    layer.blend(5, 5, [255; 4]);
    layer.fill_column(2, 0..2, [255; 4]);
    assert_eq!(layer, before);
    assert_eq!(layer.pixel(2, 0), None);
}

#[test]
fn fill_column_clamps_rows() {
    let mut layer = RasterLayer::filled(2, 4, Rgba8::BLACK);
    layer.fill_column(1, 2..100, [255; 4]);
    assert_eq!(layer.pixel(1, 1), Some([0, 0, 0, 255]));
    assert_eq!(layer.pixel(1, 2), Some([255; 4]));
    assert_eq!(layer.pixel(1, 3), Some([255; 4]));
    assert_eq!(layer.pixel(0, 3), Some([0, 0, 0, 255]));
}

#[test]
fn blend_rect_clips_to_layer() {
    let mut layer = RasterLayer::filled(3, 3, Rgba8::TRANSPARENT);
    layer.blend_rect(-5..2, 1..10, [0, 0, 100, 100]);
    assert_eq!(layer.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(layer.pixel(1, 2), Some([0, 0, 100, 100]));
    assert_eq!(layer.pixel(2, 2), Some([0, 0, 0, 0]));
}

#[test]
fn rgba_image_is_straight_alpha() {
    let layer = RasterLayer::filled(2, 1, Rgba8::new(255, 128, 0, 150));
    let img = layer.to_rgba_image();
    assert_eq!(img.dimensions(), (2, 1));
    let px = img.get_pixel(1, 0).0;
    assert_eq!(px[3], 150);
    assert!(px[0] >= 254);
    assert_eq!(px[2], 0);
}
