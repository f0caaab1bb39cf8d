//! # Module Registry
//!
//! Resolves a discovered [`ModuleHandle`] into a usable module instance
//! exactly once per run, caching the result (success *or* failure) keyed by
//! handle identity. All phases reuse the same instance, which is what lets a
//! module carry state from `Setup` into `Start`.
//!
//! # Architecture Note
//! The cache is the only shared mutable state in the engine. The lock is held
//! across the resolver call itself, so even if two phases ever raced on the
//! same handle, instantiation would run at most once (single-flight). A failed
//! resolution is cached too: the handle is excluded from all later phases of
//! the run, and later lookups report [`ResolveError::PreviouslyFailed`]
//! without re-running the resolver.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use super::error::ResolveError;
use super::module::Module;
use crate::discovery::ModuleHandle;

/// A resolved instance, shared between phases. The engine serializes access
/// through the mutex; modules themselves only need `Send`.
pub type SharedModule = Arc<Mutex<Box<dyn Module>>>;

/// Turns a discovered handle into a module instance. One-shot and possibly
/// fallible; the registry guarantees it runs at most once per handle per run.
#[async_trait]
pub trait ModuleResolver: Send + Sync {
    async fn resolve(&self, handle: &ModuleHandle) -> Result<Box<dyn Module>, ResolveError>;
}

enum CacheEntry {
    Ready(SharedModule),
    Failed(ResolveError),
}

/// Per-run resolve-once cache over a [`ModuleResolver`].
pub struct ModuleRegistry {
    resolver: Arc<dyn ModuleResolver>,
    cache: Mutex<HashMap<String, CacheEntry>>,
}

impl ModuleRegistry {
    pub fn new(resolver: Arc<dyn ModuleResolver>) -> Self {
        Self {
            resolver,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolves `handle`, instantiating on first access and returning the
    /// cached instance afterwards.
    ///
    /// A fresh failure comes back as the resolver produced it; a cached one
    /// comes back as [`ResolveError::PreviouslyFailed`] so the caller can tell
    /// first observation (worth a warning) from repetition.
    pub async fn resolve(&self, handle: &ModuleHandle) -> Result<SharedModule, ResolveError> {
        // Held across the resolver await: at most one instantiation per handle.
        let mut cache = self.cache.lock().await;

        if let Some(entry) = cache.get(handle.name()) {
            return match entry {
                CacheEntry::Ready(module) => {
                    debug!(module = handle.name(), "Resolved from cache");
                    Ok(Arc::clone(module))
                }
                CacheEntry::Failed(error) => Err(error.as_cached(handle.name())),
            };
        }

        match self.resolver.resolve(handle).await {
            Ok(instance) => {
                let shared: SharedModule = Arc::new(Mutex::new(instance));
                cache.insert(
                    handle.name().to_string(),
                    CacheEntry::Ready(Arc::clone(&shared)),
                );
                debug!(module = handle.name(), "Resolved");
                Ok(shared)
            }
            Err(error) => {
                cache.insert(
                    handle.name().to_string(),
                    CacheEntry::Failed(error.clone()),
                );
                Err(error)
            }
        }
    }
}
