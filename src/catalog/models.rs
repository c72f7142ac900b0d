use crate::{catalog::numbered, config::AssetConfig, data_structures::geometry::Geometry};

/// Side length of the square smoke sprite.
pub const SMOKE_SIZE: f32 = 64.0;

const ADS_MODELS: [&str; 14] = [
    "ads_s_01_01",
    "ads_s_01_02",
    "ads_s_02_01",
    "ads_s_02_02",
    "ads_s_03_01",
    "ads_s_03_02",
    "ads_s_04_01",
    "ads_s_04_02",
    "ads_s_04_03",
    "ads_s_04_04",
    "ads_s_05_01",
    "ads_s_05_02",
    "ads_s_05_03",
    "ads_s_05_04",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelRequest {
    pub key: String,
    pub path: String,
}

impl ModelRequest {
    fn new(config: &AssetConfig, key: &str) -> Self {
        Self {
            key: key.to_string(),
            path: config.resolve(&format!("models/{key}.obj")),
        }
    }
}

/// Every OBJ model the scene loads, in request order.
pub fn model_requests(config: &AssetConfig) -> Vec<ModelRequest> {
    // Street blocks: five styles with three variants each.
    let blocks = (1..=5).flat_map(|style| numbered("", 3).map(move |v| format!("s_{style:02}_{v}")));

    std::iter::once("storefronts".to_string())
        .chain(blocks)
        .chain(numbered("mega_", 6))
        .chain(ADS_MODELS.iter().map(|key| key.to_string()))
        .chain(numbered("topper_", 12))
        .chain(numbered("car_", 8))
        .chain(std::iter::once("spotlight".to_string()))
        .map(|key| ModelRequest::new(config, &key))
        .collect()
}

/// Geometry built in code instead of being loaded.
pub fn procedural_models() -> Vec<Geometry> {
    vec![Geometry::plane("smoke", SMOKE_SIZE, SMOKE_SIZE)]
}
