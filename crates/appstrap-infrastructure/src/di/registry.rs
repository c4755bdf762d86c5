//! Named service registry
//!
//! Maps service names to factories with a lifecycle flag. Nothing runs
//! at registration time; factories execute on resolution, at most once
//! for singletons. Factories receive the registry itself so they can
//! resolve their dependencies by name; re-entrant resolution of a name
//! already in flight fails fast instead of recursing.

use appstrap_domain::{Error, Result};
use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Service lifecycle flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// A fresh instance on every resolution
    Transient,
    /// Exactly one instance per registry, created on first resolution
    Singleton,
}

/// Type-erased service instance
pub type ServiceInstance = Arc<dyn Any + Send + Sync>;

/// Factory producing a service instance, given the registry as context
pub type ServiceFactory = Arc<dyn Fn(&ServiceRegistry) -> Result<ServiceInstance> + Send + Sync>;

/// A registered service: name, factory and lifecycle
#[derive(Clone)]
pub struct ServiceDescriptor {
    /// Unique service name within the registry
    pub name: String,
    /// Lifecycle applied on resolution
    pub lifecycle: Lifecycle,
    factory: ServiceFactory,
}

impl std::fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("name", &self.name)
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}

/// Name-to-descriptor mapping with singleton instance caching
#[derive(Default)]
pub struct ServiceRegistry {
    descriptors: RwLock<HashMap<String, ServiceDescriptor>>,
    singletons: RwLock<HashMap<String, ServiceInstance>>,
    resolving: RwLock<HashSet<String>>,
}

impl ServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service factory under `name`
    ///
    /// Last registration wins: an existing descriptor is replaced and
    /// any cached singleton instance for the name is discarded. No side
    /// effect occurs until resolution.
    pub fn register<N, F>(&self, name: N, lifecycle: Lifecycle, factory: F)
    where
        N: Into<String>,
        F: Fn(&ServiceRegistry) -> Result<ServiceInstance> + Send + Sync + 'static,
    {
        let name = name.into();
        debug!(service = %name, ?lifecycle, "Registering service");

        self.singletons
            .write()
            .expect("singleton cache lock poisoned")
            .remove(&name);
        self.descriptors
            .write()
            .expect("descriptor table lock poisoned")
            .insert(
                name.clone(),
                ServiceDescriptor {
                    name,
                    lifecycle,
                    factory: Arc::new(factory),
                },
            );
    }

    /// Resolve a service to its type-erased instance
    ///
    /// Transient services get a fresh factory invocation per call;
    /// singletons are created once and the same `Arc` is returned on
    /// every subsequent call for the registry's lifetime.
    pub fn resolve_raw(&self, name: &str) -> Result<ServiceInstance> {
        let (factory, lifecycle) = {
            let descriptors = self
                .descriptors
                .read()
                .expect("descriptor table lock poisoned");
            let descriptor = descriptors
                .get(name)
                .ok_or_else(|| Error::service_not_found(name))?;
            (descriptor.factory.clone(), descriptor.lifecycle)
        };

        if lifecycle == Lifecycle::Singleton {
            if let Some(instance) = self
                .singletons
                .read()
                .expect("singleton cache lock poisoned")
                .get(name)
            {
                return Ok(instance.clone());
            }
        }

        // Fail fast on factory cycles instead of recursing forever
        {
            let mut resolving = self.resolving.write().expect("resolution set lock poisoned");
            if !resolving.insert(name.to_string()) {
                return Err(Error::circular_dependency(name));
            }
        }

        let produced = factory(self);

        self.resolving
            .write()
            .expect("resolution set lock poisoned")
            .remove(name);

        let instance = produced?;
        debug!(service = %name, "Service resolved");

        if lifecycle == Lifecycle::Singleton {
            self.singletons
                .write()
                .expect("singleton cache lock poisoned")
                .insert(name.to_string(), instance.clone());
        }
        Ok(instance)
    }

    /// Resolve a service and downcast it to its concrete type
    pub fn resolve<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
        self.resolve_raw(name)?.downcast::<T>().map_err(|_| {
            Error::internal(format!(
                "Service '{name}' is not a {}",
                std::any::type_name::<T>()
            ))
        })
    }

    /// Whether a descriptor exists for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.descriptors
            .read()
            .expect("descriptor table lock poisoned")
            .contains_key(name)
    }

    /// Registered service names, sorted for stable diagnostics
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .descriptors
            .read()
            .expect("descriptor table lock poisoned")
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("services", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Counter(usize);

    fn counting_factory(
        calls: Arc<AtomicUsize>,
    ) -> impl Fn(&ServiceRegistry) -> Result<ServiceInstance> {
        move |_| {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Counter(n)))
        }
    }

    #[test]
    fn unregistered_name_is_service_not_found() {
        let registry = ServiceRegistry::new();
        let err = registry.resolve_raw("ghost").unwrap_err();
        assert!(matches!(err, Error::ServiceNotFound { .. }));
    }

    #[test]
    fn singleton_factory_runs_once_and_instance_is_shared() {
        let registry = ServiceRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        registry.register("svc", Lifecycle::Singleton, counting_factory(calls.clone()));

        let first = registry.resolve::<Counter>("svc").unwrap();
        let second = registry.resolve::<Counter>("svc").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn transient_factory_runs_every_call() {
        let registry = ServiceRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        registry.register("svc", Lifecycle::Transient, counting_factory(calls.clone()));

        let first = registry.resolve::<Counter>("svc").unwrap();
        let second = registry.resolve::<Counter>("svc").unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn last_registration_wins_and_drops_the_cached_singleton() {
        let registry = ServiceRegistry::new();
        registry.register("svc", Lifecycle::Singleton, |_| Ok(Arc::new(Counter(1))));
        let first = registry.resolve::<Counter>("svc").unwrap();
        assert_eq!(first.0, 1);

        registry.register("svc", Lifecycle::Singleton, |_| Ok(Arc::new(Counter(2))));
        let second = registry.resolve::<Counter>("svc").unwrap();
        assert_eq!(second.0, 2);
    }

    #[test]
    fn factories_resolve_dependencies_by_name() {
        let registry = ServiceRegistry::new();
        registry.register("leaf", Lifecycle::Singleton, |_| Ok(Arc::new(Counter(7))));
        registry.register("root", Lifecycle::Transient, |r| {
            let leaf = r.resolve::<Counter>("leaf")?;
            Ok(Arc::new(Counter(leaf.0 + 1)))
        });

        assert_eq!(registry.resolve::<Counter>("root").unwrap().0, 8);
    }

    #[test]
    fn circular_factories_fail_fast() {
        let registry = ServiceRegistry::new();
        registry.register("a", Lifecycle::Transient, |r| {
            r.resolve_raw("b").map(|_| Arc::new(Counter(0)) as ServiceInstance)
        });
        registry.register("b", Lifecycle::Transient, |r| {
            r.resolve_raw("a").map(|_| Arc::new(Counter(0)) as ServiceInstance)
        });

        let err = registry.resolve_raw("a").unwrap_err();
        assert!(matches!(err, Error::CircularDependency { .. }));

        // The failed attempt leaves no residue; an unrelated resolve works
        registry.register("b", Lifecycle::Transient, |_| Ok(Arc::new(Counter(0))));
        assert!(registry.resolve_raw("a").is_ok());
    }

    #[test]
    fn downcast_mismatch_is_reported() {
        let registry = ServiceRegistry::new();
        registry.register("svc", Lifecycle::Transient, |_| Ok(Arc::new(Counter(0))));
        let err = registry.resolve::<String>("svc").unwrap_err();
        assert!(matches!(err, Error::Internal { .. }));
    }
}
