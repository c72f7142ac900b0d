use std::{cell::RefCell, io::Cursor, rc::Rc};

use city_assets::{
    AssetConfig, LoadingManager, MemorySource,
    catalog::{model_requests, texture_requests},
};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use rand::{SeedableRng, rngs::StdRng};

pub(crate) const TRIANGLE_OBJ: &str = "\
o triangle
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 0.0 1.0
vn 0.0 0.0 1.0
f 1/1/1 2/2/1 3/3/1
";

pub(crate) const QUAD_OBJ: &str = "\
o quad
v -1.0 -1.0 0.0
v 1.0 -1.0 0.0
v 1.0 1.0 0.0
v -1.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 1.0 1.0
vt 0.0 1.0
vn 0.0 0.0 1.0
f 1/1/1 2/2/1 3/3/1 4/4/1
";

pub(crate) fn jpeg_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .expect("failed to encode test jpeg");
    bytes
}

pub(crate) fn png_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("failed to encode test png");
    bytes
}

/// A source serving every file of the catalog: 2x2 grey JPEGs and a triangle per model.
pub(crate) fn complete_source(config: &AssetConfig) -> MemorySource {
    let mut source = MemorySource::new();
    let texture = jpeg_bytes(2, 2, [128, 128, 128]);
    for request in texture_requests(config) {
        source.insert(request.path, texture.clone());
    }
    for request in model_requests(config) {
        source.insert(request.path, TRIANGLE_OBJ);
    }
    source
}

pub(crate) fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

/// Everything the loading manager reported through its callbacks.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Recorded {
    pub starts: Vec<(String, usize, usize)>,
    pub progress: Vec<(String, usize, usize)>,
    pub loads: usize,
    pub errors: Vec<String>,
}

pub(crate) fn recording_manager() -> (LoadingManager, Rc<RefCell<Recorded>>) {
    let recorded = Rc::new(RefCell::new(Recorded::default()));
    let (starts, progress, loads, errors) = (
        recorded.clone(),
        recorded.clone(),
        recorded.clone(),
        recorded.clone(),
    );
    let manager = LoadingManager::new()
        .on_start(move |url, loaded, total| {
            starts
                .borrow_mut()
                .starts
                .push((url.to_string(), loaded, total))
        })
        .on_progress(move |url, loaded, total| {
            progress
                .borrow_mut()
                .progress
                .push((url.to_string(), loaded, total))
        })
        .on_load(move || loads.borrow_mut().loads += 1)
        .on_error(move |url| errors.borrow_mut().errors.push(url.to_string()));
    (manager, recorded)
}
