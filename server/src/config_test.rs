use super::*;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold `env_lock()` so no other test touches these vars.
unsafe fn clear_config_env() {
    unsafe {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("PORT");
        std::env::remove_var("DB_MAX_CONNECTIONS");
        std::env::remove_var("REVENUE_CACHE_TTL_SECS");
        std::env::remove_var("DEV_AUTH_TENANT");
    }
}

#[test]
fn from_env_applies_defaults() {
    let _guard = env_lock();
    unsafe {
        clear_config_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/propdash");
    }

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.database_url, "postgres://localhost/propdash");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert_eq!(cfg.revenue_cache_ttl, Duration::from_secs(DEFAULT_REVENUE_CACHE_TTL_SECS));
    assert_eq!(cfg.dev_auth_tenant, None);

    unsafe { clear_config_env() };
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_lock();
    unsafe {
        clear_config_env();
        std::env::set_var("DATABASE_URL", "postgres://db/propdash");
        std::env::set_var("PORT", "8080");
        std::env::set_var("DB_MAX_CONNECTIONS", "12");
        std::env::set_var("REVENUE_CACHE_TTL_SECS", "30");
        std::env::set_var("DEV_AUTH_TENANT", " tenant-a ");
    }

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.db_max_connections, 12);
    assert_eq!(cfg.revenue_cache_ttl, Duration::from_secs(30));
    assert_eq!(cfg.dev_auth_tenant.as_deref(), Some("tenant-a"));

    unsafe { clear_config_env() };
}

#[test]
fn from_env_requires_database_url() {
    let _guard = env_lock();
    unsafe { clear_config_env() };
    assert_eq!(Config::from_env(), Err(ConfigError::Missing("DATABASE_URL")));
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = env_lock();
    unsafe {
        clear_config_env();
        std::env::set_var("DATABASE_URL", "postgres://db/propdash");
        std::env::set_var("PORT", "eighty");
    }

    assert_eq!(
        Config::from_env(),
        Err(ConfigError::Invalid { key: "PORT", value: "eighty".to_owned() })
    );

    unsafe { clear_config_env() };
}

#[test]
fn blank_dev_tenant_is_ignored() {
    let _guard = env_lock();
    unsafe {
        clear_config_env();
        std::env::set_var("DATABASE_URL", "postgres://db/propdash");
        std::env::set_var("DEV_AUTH_TENANT", "   ");
    }

    assert_eq!(Config::from_env().unwrap().dev_auth_tenant, None);

    unsafe { clear_config_env() };
}
