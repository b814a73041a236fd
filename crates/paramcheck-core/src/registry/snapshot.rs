//! Atomically swapped registry snapshots for runtime reload
//!
//! Readers take an `Arc` to the current registry and validate against it for
//! as long as they like. A reload builds the complete replacement first and
//! swaps it in with a single write, so nobody observes a half-built mapping.
//!
//! Copyright (c) 2025 Paramcheck Team
//! Licensed under the Apache-2.0 license

use super::ValidatorRegistry;
use crate::error::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

/// A registry that can be replaced while other threads keep validating
#[derive(Debug)]
pub struct SharedRegistry {
    current: RwLock<Arc<ValidatorRegistry>>,
    generation: AtomicU64,
}

impl SharedRegistry {
    pub fn new(registry: ValidatorRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
            generation: AtomicU64::new(0),
        }
    }

    /// The registry currently in effect
    pub fn snapshot(&self) -> Arc<ValidatorRegistry> {
        Arc::clone(&self.current.read())
    }

    /// Number of successful swaps since construction
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Install `registry` and return the one it replaced
    pub fn replace(&self, registry: ValidatorRegistry) -> Arc<ValidatorRegistry> {
        let next = Arc::new(registry);
        let mut guard = self.current.write();
        let previous = std::mem::replace(&mut *guard, next);
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        drop(guard);

        info!(
            generation,
            parameters = previous.len(),
            "Swapped validator registry snapshot"
        );
        previous
    }

    /// Build a new registry with `build` and install it.
    ///
    /// If `build` fails the current snapshot stays in place and the
    /// configuration error is returned.
    pub fn reload<F>(&self, build: F) -> Result<Arc<ValidatorRegistry>>
    where
        F: FnOnce() -> Result<ValidatorRegistry>,
    {
        match build() {
            Ok(registry) => Ok(self.replace(registry)),
            Err(error) => {
                warn!(error = %error, "Registry reload rejected, keeping current snapshot");
                Err(error)
            }
        }
    }
}

impl From<ValidatorRegistry> for SharedRegistry {
    fn from(registry: ValidatorRegistry) -> Self {
        Self::new(registry)
    }
}
