//! # Discovery Collaborators
//!
//! The engine does not know where modules come from: a discovery collaborator
//! enumerates candidate [`ModuleHandle`]s from a host environment, and a
//! [`ModuleResolver`](crate::engine::ModuleResolver) turns a handle into an
//! instance. The core only consumes the candidate sequence: it never mutates
//! it and treats enumeration order as unspecified.
//!
//! Two collaborators ship with the crate:
//!
//! - [`StaticCatalog`] - named factory functions; doubles as the resolver
//! - [`DirectoryDiscovery`](directory::DirectoryDiscovery) - lists module
//!   sources from a filesystem directory

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::engine::error::ResolveError;
use crate::engine::module::{Module, ModuleError};
use crate::engine::registry::ModuleResolver;

pub mod directory;

pub use directory::DirectoryDiscovery;

/// Where a discovered handle points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModuleSource {
    /// A named entry in a [`StaticCatalog`].
    Catalog,
    /// A file enumerated from the host filesystem.
    File(PathBuf),
}

/// An opaque discovery result. Identity is the name, which must be unique
/// within one discovery pass; the registry keys its cache on it.
#[derive(Clone, Debug)]
pub struct ModuleHandle {
    name: String,
    source: ModuleSource,
}

impl ModuleHandle {
    /// Handle for a named catalog entry.
    pub fn catalog(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: ModuleSource::Catalog,
        }
    }

    /// Handle for a module source file.
    pub fn file(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            source: ModuleSource::File(path),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &ModuleSource {
        &self.source
    }
}

/// Enumerates candidate modules from a host environment.
///
/// Errors while enumerating are the collaborator's own concern: it logs and
/// returns whatever it could list, so the core never sees a discovery fault.
#[async_trait]
pub trait Discovery: Send + Sync {
    async fn list_candidates(&self) -> Vec<ModuleHandle>;
}

/// Factory producing a fresh module instance for one catalog entry.
pub type ModuleFactory = Box<dyn Fn() -> Result<Box<dyn Module>, ModuleError> + Send + Sync>;

/// A fixed catalog of named module factories.
///
/// The simplest host wiring: register factories once, hand the catalog to the
/// orchestrator as resolver, and feed it its own candidate list. A factory
/// runs at most once per run, since the registry caches the instance.
#[derive(Default)]
pub struct StaticCatalog {
    factories: HashMap<String, ModuleFactory>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Box<dyn Module>, ModuleError> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }
}

#[async_trait]
impl Discovery for StaticCatalog {
    async fn list_candidates(&self) -> Vec<ModuleHandle> {
        self.factories
            .keys()
            .map(|name| ModuleHandle::catalog(name.as_str()))
            .collect()
    }
}

#[async_trait]
impl ModuleResolver for StaticCatalog {
    async fn resolve(&self, handle: &ModuleHandle) -> Result<Box<dyn Module>, ResolveError> {
        match handle.source() {
            ModuleSource::Catalog => match self.factories.get(handle.name()) {
                Some(factory) => factory().map_err(|e| ResolveError::Instantiation {
                    name: handle.name().to_string(),
                    reason: e.to_string(),
                }),
                None => Err(ResolveError::UnknownSource(handle.name().to_string())),
            },
            ModuleSource::File(_) => Err(ResolveError::UnknownSource(handle.name().to_string())),
        }
    }
}
