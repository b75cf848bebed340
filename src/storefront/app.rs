//! Storefront Application
//!
//! The eframe application: owns the catalog data, the search controller,
//! the category tracker and its section observers, and the channels for
//! work running off the frame loop. Network calls run on worker threads
//! with their own runtime and report back over mpsc; the frame loop only
//! ever does non-blocking `try_recv`.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::time::{Duration, Instant};

use crate::shared::{Ingredient, Product};
use crate::storefront::api::{ApiClient, ApiError};
use crate::storefront::catalog::CATEGORIES;
use crate::storefront::category::{CategoryTracker, SectionObserver};
use crate::storefront::config::Config;
use crate::storefront::search::{SearchController, SearchRequest};
use crate::storefront::ui;
use crate::storefront::ui::filters::FiltersState;

/// Which screen the client is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Catalog,
    /// Product detail, reached from a search selection or a card click.
    Product(i64),
}

/// Top-level application state.
pub struct StorefrontApp {
    api: ApiClient,

    pub view: View,
    pub products: Vec<Product>,
    pub ingredients: Vec<Ingredient>,

    pub search: SearchController,
    pub tracker: CategoryTracker,
    /// One observer per entry of [`CATEGORIES`], index-aligned.
    pub observers: Vec<SectionObserver>,
    pub filters: FiltersState,
    /// Category the catalog view should scroll to on the next frame.
    pub scroll_to: Option<i64>,

    pending_products: Option<Receiver<Result<Vec<Product>, ApiError>>>,
    pending_ingredients: Option<Receiver<Result<Vec<Ingredient>, ApiError>>>,
    pending_searches: Vec<Receiver<(u64, Result<Vec<Product>, ApiError>)>>,
}

impl StorefrontApp {
    pub fn new() -> Self {
        let mut app = Self {
            api: ApiClient::new(Config::new()),
            view: View::Catalog,
            products: Vec::new(),
            ingredients: Vec::new(),
            search: SearchController::new(),
            tracker: CategoryTracker::default(),
            observers: CATEGORIES
                .iter()
                .map(|c| SectionObserver::new(c.id))
                .collect(),
            filters: FiltersState::default(),
            scroll_to: None,
            pending_products: None,
            pending_ingredients: None,
            pending_searches: Vec::new(),
        };
        app.load_catalog();
        app
    }

    /// Kick off the initial catalog and ingredient loads.
    fn load_catalog(&mut self) {
        let (tx, rx) = channel();
        let api = self.api.clone();
        std::thread::spawn(move || {
            let _ = tx.send(run_blocking(api.list_products()));
        });
        self.pending_products = Some(rx);

        let (tx, rx) = channel();
        let api = self.api.clone();
        std::thread::spawn(move || {
            let _ = tx.send(run_blocking(api.list_ingredients()));
        });
        self.pending_ingredients = Some(rx);
    }

    /// Run a settled search request on a worker thread.
    fn spawn_search(&mut self, request: SearchRequest) {
        let (tx, rx) = channel();
        let api = self.api.clone();
        std::thread::spawn(move || {
            let outcome = run_blocking(api.search(&request.query));
            let _ = tx.send((request.seq, outcome));
        });
        self.pending_searches.push(rx);
    }

    /// Drain finished worker results without blocking the frame.
    fn poll_workers(&mut self) {
        if let Some(rx) = &self.pending_products {
            match rx.try_recv() {
                Ok(Ok(products)) => {
                    self.products = products;
                    self.pending_products = None;
                }
                Ok(Err(err)) => {
                    tracing::warn!("catalog load failed: {err}");
                    self.pending_products = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => self.pending_products = None,
            }
        }

        if let Some(rx) = &self.pending_ingredients {
            match rx.try_recv() {
                Ok(Ok(ingredients)) => {
                    self.ingredients = ingredients;
                    self.pending_ingredients = None;
                }
                Ok(Err(err)) => {
                    tracing::warn!("ingredient load failed: {err}");
                    self.pending_ingredients = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => self.pending_ingredients = None,
            }
        }

        let mut finished = Vec::new();
        self.pending_searches.retain(|rx| match rx.try_recv() {
            Ok(result) => {
                finished.push(result);
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => false,
        });
        for (seq, outcome) in finished {
            self.search.apply(seq, outcome);
        }
    }
}

impl Default for StorefrontApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_workers();

        if let Some(request) = self.search.poll(Instant::now()) {
            self.spawn_search(request);
        }

        ui::render(ctx, self);

        // The debounce deadline has to fire even with no input events
        ctx.request_repaint_after(Duration::from_millis(50));
    }
}

/// Drive one API future to completion on the calling worker thread.
fn run_blocking<T>(
    fut: impl std::future::Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt.block_on(fut),
        Err(err) => Err(ApiError::Internal(format!(
            "failed to build worker runtime: {err}"
        ))),
    }
}
