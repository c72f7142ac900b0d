use std::collections::{HashMap, HashSet};

use city_assets::{
    AssetConfig,
    catalog::{model_requests, pad_number, procedural_models, texture_requests},
    data_structures::texture::{Mapping, TextureSettings, Wrap},
};

fn config() -> AssetConfig {
    AssetConfig::default().with_base_path("city/")
}

#[test]
fn should_pad_numbers_to_two_digits() {
    assert_eq!(pad_number(1), "01");
    assert_eq!(pad_number(9), "09");
    assert_eq!(pad_number(12), "12");
    assert_eq!(pad_number(100), "100");
}

#[test]
fn should_request_every_texture_once() {
    let requests = texture_requests(&config());
    assert_eq!(requests.len(), 57);

    let keys: HashSet<_> = requests.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys.len(), requests.len(), "texture keys must be unique");

    for key in [
        "sky_night",
        "env_night",
        "ground",
        "ground_em",
        "cars_em",
        "storefronts_em",
        "mega_building_01_em",
        "building_01_rough",
        "building_10_em",
        "ads_05",
        "ads_large_01",
        "smoke_03",
        "spotlight_04",
    ] {
        assert!(keys.contains(key), "missing texture {key}");
    }
    assert!(!keys.contains("building_11"));
    assert!(!keys.contains("spotlight_05"));
}

#[test]
fn should_map_texture_keys_to_their_files() {
    let paths: HashMap<_, _> = texture_requests(&config())
        .into_iter()
        .map(|r| (r.key, r.path))
        .collect();

    assert_eq!(paths["env_night"], "city/textures/environment_night.jpg");
    assert_eq!(paths["storefronts"], "city/textures/storefronts_01.jpg");
    assert_eq!(paths["storefronts_em"], "city/textures/storefronts_01_em.jpg");
    assert_eq!(paths["building_03_rough"], "city/textures/building_03_spec.jpg");
    assert_eq!(paths["ads_large_02"], "city/textures/ads_large_02.jpg");
}

#[test]
fn should_configure_sampling_per_texture_group() {
    let mut config = config();
    config.texture_anisotropy = 4;
    let settings: HashMap<_, _> = texture_requests(&config)
        .into_iter()
        .map(|r| (r.key, r.settings))
        .collect();

    assert_eq!(settings["sky_night"].mapping, Mapping::EquirectangularReflection);
    assert_eq!(settings["env_night"], TextureSettings::equirectangular());

    for key in ["storefronts", "mega_building_01_em", "building_07", "building_07_rough"] {
        assert_eq!(settings[key].wrap_s, Wrap::Repeat, "{key}");
        assert_eq!(settings[key].wrap_t, Wrap::Repeat, "{key}");
        assert_eq!(settings[key].anisotropy, 4, "{key}");
    }

    for key in ["ground", "cars", "ads_01", "smoke_02", "spotlight_01"] {
        assert_eq!(settings[key], TextureSettings::default(), "{key}");
    }
}

#[test]
fn should_request_every_model_once() {
    let requests = model_requests(&config());
    assert_eq!(requests.len(), 57);

    let keys: HashSet<_> = requests.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys.len(), requests.len(), "model keys must be unique");

    for key in [
        "storefronts",
        "s_01_01",
        "s_05_03",
        "mega_06",
        "ads_s_04_04",
        "ads_s_05_04",
        "topper_12",
        "car_08",
        "spotlight",
    ] {
        assert!(keys.contains(key), "missing model {key}");
    }
    for key in ["s_01_04", "ads_s_01_03", "ads_s_03_03", "car_09", "smoke"] {
        assert!(!keys.contains(key), "unexpected model {key}");
    }

    for request in &requests {
        assert_eq!(request.path, format!("city/models/{}.obj", request.key));
    }
}

#[test]
fn should_build_smoke_plane_procedurally() {
    let models = procedural_models();
    assert_eq!(models.len(), 1);
    let smoke = &models[0];
    assert_eq!(smoke.name, "smoke");
    assert_eq!(smoke.bounds(), Some(([-32.0, -32.0, 0.0], [32.0, 32.0, 0.0])));
}
