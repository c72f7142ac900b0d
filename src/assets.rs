//! The asset manager: loads the catalog and hands out shared handles.
//!
//! [`AssetManager::load`] issues every texture and model request of the
//! catalog at once and drives them concurrently. Each request is registered
//! with the [`LoadingManager`] before anything is awaited, so the completion
//! callback fires exactly once, after the last request settled. Successful
//! results land in the texture and model mappings; the material catalog is
//! assembled from whatever textures arrived.
//!
//! Afterwards the mappings are read-only. [`AssetManager::upload`] turns them
//! into GPU resources for the renderer.

use std::{collections::HashMap, sync::Arc, time::Duration};

use futures::{FutureExt, StreamExt, future::LocalBoxFuture, stream::FuturesUnordered};
use instant::Instant;
use rand::Rng;

use crate::{
    catalog,
    config::AssetConfig,
    context::Context,
    data_structures::{
        geometry::{Geometry, Mesh},
        material::{GpuMaterial, PhongMaterial, TextureHandle, phong_layout},
        texture::{TextureAsset, Texture},
    },
    loading::LoadingManager,
    resources::{self, AssetSource},
};

/// Outcome of one [`AssetManager::load`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadReport {
    /// Requests that succeeded.
    pub loaded: usize,
    /// Paths of the requests that failed.
    pub failed: Vec<String>,
    pub elapsed: Duration,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

enum Loaded {
    Texture(TextureAsset),
    Model(Geometry),
}

struct Settled {
    key: String,
    path: String,
    result: anyhow::Result<Loaded>,
}

#[derive(Debug, Default)]
pub struct AssetManager {
    config: AssetConfig,
    textures: HashMap<String, TextureHandle>,
    models: HashMap<String, Arc<Geometry>>,
    materials: HashMap<String, Arc<PhongMaterial>>,
}

impl AssetManager {
    pub fn new(config: AssetConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    /// Load the whole catalog, tinting building windows with the thread RNG.
    pub async fn load<S: AssetSource>(
        &mut self,
        source: &S,
        loading: &mut LoadingManager,
    ) -> LoadReport {
        self.load_with_rng(source, loading, &mut rand::thread_rng())
            .await
    }

    /// Same as [`Self::load`] with an explicit RNG for reproducible materials.
    pub async fn load_with_rng<S: AssetSource, R: Rng + ?Sized>(
        &mut self,
        source: &S,
        loading: &mut LoadingManager,
        rng: &mut R,
    ) -> LoadReport {
        log::info!("AssetManager: Loading assets");
        let started = Instant::now();

        // A reload replaces everything; entries that fail this time must not survive.
        self.textures.clear();
        self.models.clear();
        let (loaded, failed) = self.fetch_all(source, loading).await;
        for geometry in catalog::procedural_models() {
            self.models.insert(geometry.name.clone(), Arc::new(geometry));
        }
        self.materials = catalog::build_materials(&self.config, &self.textures, rng)
            .into_iter()
            .map(|material| (material.name.clone(), Arc::new(material)))
            .collect();

        let elapsed = started.elapsed();
        log::info!(
            "AssetManager: {} textures, {} models, {} materials ready in {:?}",
            self.textures.len(),
            self.models.len(),
            self.materials.len(),
            elapsed
        );
        LoadReport {
            loaded,
            failed,
            elapsed,
        }
    }

    /// Issue every catalog request and store what arrives. Returns the number
    /// of successful requests and the paths that failed in this batch.
    async fn fetch_all<S: AssetSource>(
        &mut self,
        source: &S,
        loading: &mut LoadingManager,
    ) -> (usize, Vec<String>) {
        let mut pending: FuturesUnordered<LocalBoxFuture<'_, Settled>> = FuturesUnordered::new();

        for request in catalog::texture_requests(&self.config) {
            loading.item_start(&request.path);
            pending.push(
                async move {
                    let result = resources::load_texture(
                        source,
                        &request.key,
                        &request.path,
                        request.settings,
                    )
                    .await
                    .map(Loaded::Texture);
                    Settled {
                        key: request.key,
                        path: request.path,
                        result,
                    }
                }
                .boxed_local(),
            );
        }

        for request in catalog::model_requests(&self.config) {
            loading.item_start(&request.path);
            pending.push(
                async move {
                    let result = resources::load_obj_geometry(source, &request.key, &request.path)
                        .await
                        .map(Loaded::Model);
                    Settled {
                        key: request.key,
                        path: request.path,
                        result,
                    }
                }
                .boxed_local(),
            );
        }

        let mut loaded = 0;
        let mut failed = Vec::new();
        while let Some(settled) = pending.next().await {
            match settled.result {
                Ok(Loaded::Texture(texture)) => {
                    self.textures.insert(settled.key, Arc::new(texture));
                    loaded += 1;
                }
                Ok(Loaded::Model(geometry)) => {
                    self.models.insert(settled.key, Arc::new(geometry));
                    loaded += 1;
                }
                Err(e) => {
                    log::error!("{:#}", e);
                    loading.item_error(&settled.path);
                    failed.push(settled.path.clone());
                }
            }
            loading.item_end(&settled.path);
        }
        (loaded, failed)
    }

    pub fn get_texture(&self, id: &str) -> Option<&TextureHandle> {
        self.textures.get(id)
    }

    pub fn get_model(&self, id: &str) -> Option<&Arc<Geometry>> {
        self.models.get(id)
    }

    pub fn get_material(&self, id: &str) -> Option<&Arc<PhongMaterial>> {
        self.materials.get(id)
    }

    pub fn textures(&self) -> &HashMap<String, TextureHandle> {
        &self.textures
    }

    pub fn models(&self) -> &HashMap<String, Arc<Geometry>> {
        &self.models
    }

    pub fn materials(&self) -> &HashMap<String, Arc<PhongMaterial>> {
        &self.materials
    }

    /// Create GPU textures, meshes and materials for everything loaded so far.
    pub fn upload(&self, ctx: &Context) -> anyhow::Result<GpuAssets> {
        let mut textures = HashMap::with_capacity(self.textures.len());
        for (key, asset) in &self.textures {
            let texture = Texture::from_asset(&ctx.device, &ctx.queue, asset)?;
            textures.insert(key.clone(), texture);
        }

        let meshes = self
            .models
            .iter()
            .map(|(key, geometry)| (key.clone(), Mesh::from_geometry(&ctx.device, geometry)))
            .collect();

        let layout = phong_layout(&ctx.device);
        let fallback = Texture::create_solid(&ctx.device, &ctx.queue, [255; 4], "white");
        let mut materials = HashMap::with_capacity(self.materials.len());
        for (key, material) in &self.materials {
            let gpu_material = GpuMaterial::new(&ctx.device, &layout, material, &textures, &fallback)?;
            materials.insert(key.clone(), gpu_material);
        }

        Ok(GpuAssets {
            textures,
            meshes,
            materials,
            layout,
            fallback,
        })
    }
}

/// GPU resources created by [`AssetManager::upload`], keyed like the CPU mappings.
#[derive(Debug)]
pub struct GpuAssets {
    pub textures: HashMap<String, Texture>,
    pub meshes: HashMap<String, Mesh>,
    pub materials: HashMap<String, GpuMaterial>,
    /// Layout every material bind group was created with.
    pub layout: wgpu::BindGroupLayout,
    /// Bound in place of absent maps.
    pub fallback: Texture,
}

/// Load the catalog without blocking the caller's event loop.
///
/// On native targets the load runs to completion on a fresh tokio runtime
/// before `on_done` is called. In the browser it is spawned onto the page's
/// executor and `on_done` runs once it finished.
pub fn spawn_load<S, F>(
    mut manager: AssetManager,
    source: S,
    mut loading: LoadingManager,
    on_done: F,
) -> anyhow::Result<()>
where
    S: AssetSource + 'static,
    F: FnOnce(AssetManager, LoadReport) + 'static,
{
    #[cfg(not(target_arch = "wasm32"))]
    {
        let async_runtime = tokio::runtime::Runtime::new()?;
        let report = async_runtime.block_on(manager.load(&source, &mut loading));
        on_done(manager, report);
    }

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            let report = manager.load(&source, &mut loading).await;
            on_done(manager, report);
        });
    }

    Ok(())
}
