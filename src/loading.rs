//! Progress tracking for a batch of asset requests.
//!
//! The [`LoadingManager`] counts items as they are started and as they end.
//! Every request calls [`LoadingManager::item_start`] before it is issued and
//! [`LoadingManager::item_end`] once it settled, whether it succeeded or not.
//! Failures additionally go through [`LoadingManager::item_error`]. When the
//! number of ended items catches up with the number of started ones the batch
//! is complete and the `on_load` callback fires.
//!
//! The manager always logs progress, completion and failures; the callbacks are
//! for the application (progress bars, starting the scene).

/// `(url, items_loaded, items_total)`
pub type ProgressCallback = Box<dyn FnMut(&str, usize, usize)>;
pub type LoadCallback = Box<dyn FnMut()>;
pub type ErrorCallback = Box<dyn FnMut(&str)>;

#[derive(Default)]
pub struct LoadingManager {
    items_loaded: usize,
    items_total: usize,
    is_loading: bool,
    failed: Vec<String>,
    on_start: Option<ProgressCallback>,
    on_progress: Option<ProgressCallback>,
    on_load: Option<LoadCallback>,
    on_error: Option<ErrorCallback>,
}

impl std::fmt::Debug for LoadingManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingManager")
            .field("items_loaded", &self.items_loaded)
            .field("items_total", &self.items_total)
            .field("is_loading", &self.is_loading)
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}

impl LoadingManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the first url of a batch.
    pub fn on_start(mut self, f: impl FnMut(&str, usize, usize) + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    /// Called every time an item ended.
    pub fn on_progress(mut self, f: impl FnMut(&str, usize, usize) + 'static) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }

    /// Called once all started items ended.
    pub fn on_load(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_load = Some(Box::new(f));
        self
    }

    /// Called with the url of every item that failed.
    pub fn on_error(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub fn item_start(&mut self, url: &str) {
        self.items_total += 1;
        if !self.is_loading {
            if let Some(on_start) = self.on_start.as_mut() {
                on_start(url, self.items_loaded, self.items_total);
            }
        }
        self.is_loading = true;
    }

    pub fn item_end(&mut self, url: &str) {
        self.items_loaded += 1;
        log::info!(
            "AssetManager: {} of {} files loaded",
            self.items_loaded,
            self.items_total
        );
        if let Some(on_progress) = self.on_progress.as_mut() {
            on_progress(url, self.items_loaded, self.items_total);
        }

        if self.items_loaded == self.items_total {
            self.is_loading = false;
            log::info!("AssetManager: Assets loaded");
            if let Some(on_load) = self.on_load.as_mut() {
                on_load();
            }
        }
    }

    pub fn item_error(&mut self, url: &str) {
        log::error!("AssetManager: Failed to load {url}");
        self.failed.push(url.to_string());
        if let Some(on_error) = self.on_error.as_mut() {
            on_error(url);
        }
    }

    pub fn items_loaded(&self) -> usize {
        self.items_loaded
    }

    pub fn items_total(&self) -> usize {
        self.items_total
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Fraction of ended items in `[0, 1]`, `1.0` when nothing was requested.
    ///
    /// Ends reported without a matching start do not push it past `1.0`.
    pub fn progress(&self) -> f32 {
        if self.items_total == 0 {
            1.0
        } else {
            (self.items_loaded as f32 / self.items_total as f32).min(1.0)
        }
    }

    /// Urls reported through [`Self::item_error`], in order.
    pub fn failed(&self) -> &[String] {
        &self.failed
    }
}
