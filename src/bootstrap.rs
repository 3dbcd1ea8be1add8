//! Server bootstrap sequence for the prototype registry
//!
//! new registry -> built-ins -> content packs in order -> lock.
//! The result is shared read-only with every subsystem.

use crate::config::RegistryConfig;
use crate::error::RegistryResult;
use crate::item::PrototypeRegistry;
use anyhow::{Context, Result};
use std::sync::Arc;

/// A bundle of prototypes registered during setup
pub trait ContentPack {
    fn name(&self) -> &str;

    /// Optional packs may fail without aborting startup
    fn is_optional(&self) -> bool {
        false
    }

    fn register(&self, registry: &mut PrototypeRegistry) -> RegistryResult<()>;
}

/// Build, populate and lock the registry.
///
/// A failing optional pack may leave the prototypes it registered before
/// failing in the catalog.
pub fn bootstrap_registry(
    config: &RegistryConfig,
    packs: &[&dyn ContentPack],
) -> Result<Arc<PrototypeRegistry>> {
    config.validate()?;

    let mut registry = PrototypeRegistry::new();
    if config.initialize_builtins {
        registry
            .initialize_builtins()
            .context("failed to register built-in prototypes")?;
    }

    let mut loaded = 0usize;
    let mut skipped = 0usize;
    for pack in packs {
        if config.is_pack_disabled(pack.name()) {
            log::info!("Content pack '{}' disabled by configuration", pack.name());
            skipped += 1;
            continue;
        }

        match pack.register(&mut registry) {
            Ok(()) => {
                log::info!("Loaded content pack '{}'", pack.name());
                loaded += 1;
            }
            Err(e) if pack.is_optional() && !config.optional_pack_failures_fatal => {
                log::warn!("Skipping optional content pack '{}': {}", pack.name(), e);
                skipped += 1;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("content pack '{}' failed", pack.name()));
            }
        }
    }

    registry.lock();
    log::info!(
        "Prototype registry ready: {} prototypes, {} packs loaded, {} skipped",
        registry.len(),
        loaded,
        skipped
    );
    if config.log_catalog_on_lock {
        for entry in registry.catalog() {
            log::info!("  {:>5} {}", entry.id.0, entry.name);
        }
    }

    Ok(Arc::new(registry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use crate::item::ItemId;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    struct SimplePack {
        name: &'static str,
        optional: bool,
        entries: Vec<(u32, &'static str)>,
    }

    impl ContentPack for SimplePack {
        fn name(&self) -> &str {
            self.name
        }

        fn is_optional(&self) -> bool {
            self.optional
        }

        fn register(&self, registry: &mut PrototypeRegistry) -> RegistryResult<()> {
            for (raw, name) in &self.entries {
                let definition = registry.create_simple_item(ItemId(*raw), 16)?;
                registry.register(ItemId(*raw), name, definition)?;
            }
            Ok(())
        }
    }

    fn pack(name: &'static str, optional: bool, entries: Vec<(u32, &'static str)>) -> SimplePack {
        SimplePack {
            name,
            optional,
            entries,
        }
    }

    #[test]
    fn test_bootstrap_locks_registry() {
        init_logging();
        let ores = pack("ores", false, vec![(100, "ores:coal"), (101, "ores:iron")]);
        let registry =
            bootstrap_registry(&RegistryConfig::default(), &[&ores]).expect("bootstrap");

        assert!(registry.is_locked());
        assert_eq!(registry.len(), 10);
        assert_eq!(registry.id_to_name(ItemId(101)), "ores:iron");
        assert!(registry
            .create_simple_item(ItemId(200), 16)
            .unwrap_err()
            .is_locked_violation());
    }

    #[test]
    fn test_required_pack_conflict_aborts() {
        init_logging();
        let clash = pack("clash", false, vec![(1, "clash:stone")]);
        let err = bootstrap_registry(&RegistryConfig::default(), &[&clash]).unwrap_err();

        assert!(err.to_string().contains("clash"));
        assert_eq!(
            err.downcast_ref::<RegistryError>(),
            Some(&RegistryError::IdTaken(ItemId::STONE))
        );
    }

    #[test]
    fn test_optional_pack_conflict_is_skipped() {
        init_logging();
        let clash = pack("clash", true, vec![(2, "clash:dirt")]);
        let extra = pack("extra", false, vec![(300, "extra:gem")]);
        let registry = bootstrap_registry(&RegistryConfig::default(), &[&clash, &extra])
            .expect("optional failure tolerated");

        assert_eq!(registry.id_to_name(ItemId::DIRT), "cloudland:dirt");
        assert!(!registry.contains_name("clash:dirt"));
        assert!(registry.contains(ItemId(300)));
    }

    #[test]
    fn test_optional_failure_fatal_when_configured() {
        init_logging();
        let config = RegistryConfig {
            optional_pack_failures_fatal: true,
            ..RegistryConfig::default()
        };
        let clash = pack("clash", true, vec![(2, "clash:dirt")]);
        assert!(bootstrap_registry(&config, &[&clash]).is_err());
    }

    #[test]
    fn test_disabled_pack_not_loaded() {
        init_logging();
        let config = RegistryConfig {
            disabled_packs: vec!["ores".to_string()],
            log_catalog_on_lock: true,
            ..RegistryConfig::default()
        };
        let ores = pack("ores", false, vec![(100, "ores:coal")]);
        let registry = bootstrap_registry(&config, &[&ores]).expect("bootstrap");

        assert!(!registry.contains(ItemId(100)));
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_without_builtins() {
        init_logging();
        let config = RegistryConfig {
            initialize_builtins: false,
            ..RegistryConfig::default()
        };
        let registry = bootstrap_registry(&config, &[]).expect("bootstrap");

        assert!(registry.is_empty());
        assert!(!registry.is_initiated());
        assert_eq!(registry.id_to_name(ItemId::STONE), "cloudland:air");
    }
}
