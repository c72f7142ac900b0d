use std::collections::HashMap;

use rand::Rng;

use crate::{
    catalog::{
        numbered,
        textures::{ADS_COUNT, ADS_LARGE_COUNT, BUILDING_COUNT, SMOKE_COUNT, SPOTLIGHT_COUNT},
    },
    config::AssetConfig,
    data_structures::{
        color::Color,
        material::{Blending, PhongMaterial, Side, TextureHandle},
    },
};

pub const GROUND_EMISSIVE: u32 = 0x00d2ff;
pub const GROUND_EMISSIVE_INTENSITY: f32 = 0.35;
pub const BUILDING_BUMP_SCALE: f32 = 0.05;
/// Saturation and lightness of the randomly tinted building windows.
pub const BUILDING_WINDOW_SATURATION: f32 = 1.0;
pub const BUILDING_WINDOW_LIGHTNESS: f32 = 0.9;

struct Lookup<'a> {
    textures: &'a HashMap<String, TextureHandle>,
}

impl Lookup<'_> {
    fn get(&self, material: &str, key: &str) -> Option<TextureHandle> {
        let texture = self.textures.get(key).cloned();
        if texture.is_none() {
            log::warn!("Material {material} is missing texture {key}");
        }
        texture
    }
}

/// Assemble the material catalog from the loaded textures.
///
/// Textures that failed to load leave their slot empty. `rng` picks the hue
/// of every building's window glow.
pub fn build_materials<R: Rng + ?Sized>(
    config: &AssetConfig,
    textures: &HashMap<String, TextureHandle>,
    rng: &mut R,
) -> Vec<PhongMaterial> {
    let lookup = Lookup { textures };
    let mut materials = Vec::new();

    materials.push(PhongMaterial {
        map: lookup.get("ground", "ground"),
        emissive: Color::from_hex(GROUND_EMISSIVE),
        emissive_map: lookup.get("ground", "ground_em"),
        emissive_intensity: GROUND_EMISSIVE_INTENSITY,
        shininess: 0.0,
        ..PhongMaterial::new("ground")
    });

    materials.push(PhongMaterial {
        map: lookup.get("cars", "cars"),
        emissive: Color::WHITE,
        emissive_map: lookup.get("cars", "cars_em"),
        emissive_intensity: 1.0,
        side: Side::Double,
        ..PhongMaterial::new("cars")
    });

    materials.push(PhongMaterial {
        map: lookup.get("storefronts", "storefronts"),
        emissive: Color::WHITE,
        emissive_map: lookup.get("storefronts", "storefronts_em"),
        emissive_intensity: config.building_windows_emissive_intensity,
        shininess: 0.0,
        ..PhongMaterial::new("storefronts")
    });

    for id in numbered("building_", BUILDING_COUNT) {
        let hue = rng.gen_range(0.0..360.0);
        materials.push(PhongMaterial {
            map: lookup.get(&id, &id),
            specular: Color::WHITE,
            specular_map: lookup.get(&id, &format!("{id}_rough")),
            env_map: lookup.get(&id, "env_night"),
            emissive: Color::from_hsl(hue, BUILDING_WINDOW_SATURATION, BUILDING_WINDOW_LIGHTNESS),
            emissive_map: lookup.get(&id, &format!("{id}_em")),
            emissive_intensity: config.building_windows_emissive_intensity,
            bump_map: lookup.get(&id, &id),
            bump_scale: BUILDING_BUMP_SCALE,
            ..PhongMaterial::new(&id)
        });
    }

    materials.push(PhongMaterial {
        map: lookup.get("mega_building_01", "mega_building_01"),
        specular: Color::WHITE,
        emissive: Color::WHITE,
        emissive_map: lookup.get("mega_building_01", "mega_building_01_em"),
        emissive_intensity: config.building_windows_emissive_intensity,
        bump_map: lookup.get("mega_building_01", "mega_building_01"),
        bump_scale: 1.0,
        ..PhongMaterial::new("mega_building_01")
    });

    // Billboards glow with their own image.
    for id in numbered("ads_", ADS_COUNT).chain(numbered("ads_large_", ADS_LARGE_COUNT)) {
        let texture = lookup.get(&id, &id);
        materials.push(PhongMaterial {
            map: texture.clone(),
            emissive: Color::WHITE,
            emissive_map: texture,
            emissive_intensity: config.ads_emissive_intensity,
            blending: Blending::Additive,
            fog: false,
            side: Side::Double,
            ..PhongMaterial::new(&id)
        });
    }

    for id in numbered("smoke_", SMOKE_COUNT).chain(numbered("spotlight_", SPOTLIGHT_COUNT)) {
        materials.push(PhongMaterial {
            alpha_map: lookup.get(&id, &id),
            color: Color::WHITE,
            shininess: 0.0,
            specular: Color::BLACK,
            blending: Blending::Additive,
            depth_write: false,
            transparent: false,
            ..PhongMaterial::new(&id)
        });
    }

    materials
}
