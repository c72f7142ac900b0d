use crate::{
    catalog::numbered,
    config::AssetConfig,
    data_structures::texture::TextureSettings,
};

pub const BUILDING_COUNT: usize = 10;
pub const ADS_COUNT: usize = 5;
pub const ADS_LARGE_COUNT: usize = 5;
pub const SMOKE_COUNT: usize = 3;
pub const SPOTLIGHT_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct TextureRequest {
    /// Key in the texture mapping.
    pub key: String,
    /// Full path handed to the asset source.
    pub path: String,
    pub settings: TextureSettings,
}

impl TextureRequest {
    fn new(config: &AssetConfig, key: &str, file: &str, settings: TextureSettings) -> Self {
        Self {
            key: key.to_string(),
            path: config.resolve(&format!("textures/{file}")),
            settings,
        }
    }
}

/// Every texture the scene loads, in request order.
pub fn texture_requests(config: &AssetConfig) -> Vec<TextureRequest> {
    let facade = TextureSettings::repeating(config.texture_anisotropy);
    let plain = TextureSettings::default();
    let mut requests = vec![
        TextureRequest::new(config, "sky_night", "sky_night.jpg", TextureSettings::equirectangular()),
        TextureRequest::new(
            config,
            "env_night",
            "environment_night.jpg",
            TextureSettings::equirectangular(),
        ),
        TextureRequest::new(config, "ground", "ground.jpg", plain),
        TextureRequest::new(config, "ground_em", "ground_em.jpg", plain),
        TextureRequest::new(config, "cars", "cars.jpg", plain),
        TextureRequest::new(config, "cars_em", "cars_em.jpg", plain),
        TextureRequest::new(config, "storefronts", "storefronts_01.jpg", facade),
        TextureRequest::new(config, "storefronts_em", "storefronts_01_em.jpg", facade),
        TextureRequest::new(config, "mega_building_01", "mega_building_01.jpg", facade),
        TextureRequest::new(config, "mega_building_01_em", "mega_building_01_em.jpg", facade),
    ];

    for building in numbered("building_", BUILDING_COUNT) {
        requests.push(TextureRequest::new(config, &building, &format!("{building}.jpg"), facade));
        requests.push(TextureRequest::new(
            config,
            &format!("{building}_em"),
            &format!("{building}_em.jpg"),
            facade,
        ));
        // Specular intensity lives in the `_spec` file.
        requests.push(TextureRequest::new(
            config,
            &format!("{building}_rough"),
            &format!("{building}_spec.jpg"),
            facade,
        ));
    }

    let simple = numbered("ads_", ADS_COUNT)
        .chain(numbered("ads_large_", ADS_LARGE_COUNT))
        .chain(numbered("smoke_", SMOKE_COUNT))
        .chain(numbered("spotlight_", SPOTLIGHT_COUNT));
    for key in simple {
        requests.push(TextureRequest::new(config, &key, &format!("{key}.jpg"), plain));
    }

    requests
}
