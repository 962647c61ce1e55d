use std::future::Future;
use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::join_all;
use log::{error, info, warn};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio::task::JoinHandle;
use tokio_shutdown::Shutdown;
use mentorship_gate::api::api::api_service;
use mentorship_gate::api::structs::api_service_data::ApiServiceData;
use mentorship_gate::common::common::setup_logging;
use mentorship_gate::config::structs::configuration::Configuration;
use mentorship_gate::layer::structs::performance_layer::PerformanceLayer;
use mentorship_gate::structs::Cli;

/// Runs `task` every `seconds` until `shutdown` fires. A zero interval disables the loop.
fn spawn_interval<T, Fut>(name: &'static str, seconds: u64, shutdown: Shutdown, task: T) -> Option<JoinHandle<()>>
where
    T: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    if seconds == 0 {
        info!("[BOOT] Thread for {name} disabled");
        return None;
    }
    info!("[BOOT] Starting thread for {name} with {seconds} seconds delay...");
    Some(tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(seconds));
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    task().await;
                }
                _ = shutdown.handle() => {
                    info!("[BOOT] Shutting down thread for {name}...");
                    return;
                }
            }
        }
    }))
}

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("Unable to set up logging: {e}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard = config.sentry.enabled.then(|| {
        sentry::init((config.sentry.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry.debug,
            sample_rate: config.sentry.sample_rate,
            max_breadcrumbs: config.sentry.max_breadcrumbs,
            attach_stacktrace: config.sentry.attach_stacktrace,
            send_default_pii: config.sentry.send_default_pii,
            traces_sample_rate: config.sentry.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }))
    });

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let layer = match PerformanceLayer::new(config.clone()).await {
                Ok(layer) => Arc::new(layer),
                Err(e) => {
                    error!("[BOOT] Unable to build the performance layer: {e}");
                    exit(1);
                }
            };

            let tokio_shutdown = Shutdown::new().map_err(|e| std::io::Error::other(format!("{e:?}")))?;
            let mut tasks: Vec<JoinHandle<()>> = Vec::new();

            tasks.extend(spawn_interval("deadlocks", 30, tokio_shutdown.clone(), || async {
                let deadlocks = deadlock::check_deadlock();
                if !deadlocks.is_empty() {
                    info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                    for (i, threads) in deadlocks.iter().enumerate() {
                        info!("[DEADLOCK] #{i}");
                        for t in threads {
                            info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                            info!("[DEADLOCK] {:#?}", t.backtrace());
                            sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                        }
                    }
                }
            }));

            let reaper_layer = layer.clone();
            tasks.extend(spawn_interval("pool reaper", config.pool.reap_interval, tokio_shutdown.clone(), move || {
                let layer = reaper_layer.clone();
                async move {
                    layer.pool.reap_idle().await;
                }
            }));

            let purge_layer = layer.clone();
            tasks.extend(spawn_interval("cache expiry sweep", config.cache.maintenance_interval, tokio_shutdown.clone(), move || {
                let layer = purge_layer.clone();
                async move {
                    let purged = layer.cache.purge_expired().await;
                    info!("[CACHE] Expiry sweep removed {purged} entries");
                }
            }));

            let cleanup_layer = layer.clone();
            tasks.extend(spawn_interval("rate limit cleanup", config.rate_limiter.cleanup_interval, tokio_shutdown.clone(), move || {
                let layer = cleanup_layer.clone();
                async move {
                    match layer.rate_limiter.purge_idle().await {
                        Ok(purged) if purged > 0 => info!("[RATELIMIT] Dropped {purged} idle windows"),
                        Ok(_) => {}
                        Err(e) => warn!("[RATELIMIT] Cleanup failed: {e}"),
                    }
                }
            }));

            let stats_layer = layer.clone();
            tasks.extend(spawn_interval("console updates", config.log_console_interval, tokio_shutdown.clone(), move || {
                let layer = stats_layer.clone();
                async move {
                    let stats = layer.stats();
                    info!(
                        "[STATS] Uptime: {}s | Cache: Lookups:{} Hits:{} ({:.2}) Items:{}/{} Evicted:{}",
                        stats.uptime_seconds, stats.cache.lookups, stats.cache.hits, stats.cache.hit_ratio,
                        stats.cache.memory_items, stats.cache.memory_capacity, stats.cache.memory_evictions
                    );
                    info!(
                        "[STATS] RateLimit ({}): Checks:{} Allowed:{} Rejected:{} Errors:{} | Pool: Live:{} Idle:{} InUse:{} Waiting:{} ({:.2})",
                        stats.rate_limiter.backend, stats.rate_limiter.checks, stats.rate_limiter.allowed,
                        stats.rate_limiter.rejected, stats.rate_limiter.errors,
                        stats.pool.live, stats.pool.idle, stats.pool.in_use, stats.pool.waiting, stats.pool.utilization
                    );
                }
            }));

            let mut api_handle = None;
            if config.api.enabled {
                let address: SocketAddr = match config.api.bind_address.parse() {
                    Ok(address) => address,
                    Err(e) => {
                        error!("[API] Invalid bind address {}: {e}", config.api.bind_address);
                        exit(1);
                    }
                };
                let data = Arc::new(ApiServiceData {
                    layer: layer.clone(),
                    api_config: Arc::new(config.api.clone()),
                });
                match api_service(address, data) {
                    Ok((handle, server)) => {
                        api_handle = Some(handle);
                        tokio::spawn(async move {
                            if let Err(e) = server.await {
                                error!("[API] Server stopped with an error: {e}");
                            }
                        });
                    }
                    Err(e) => {
                        error!("[API] Unable to bind {address}: {e}");
                        exit(1);
                    }
                }
            }

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");

                    if let Some(handle) = api_handle {
                        handle.stop(true).await;
                    }

                    tokio_shutdown.handle().await;
                    join_all(tasks).await;

                    let outstanding = layer.shutdown().await;
                    if outstanding > 0 {
                        warn!("[SHUTDOWN] {outstanding} pool handles were still checked out");
                    }

                    info!("Server shutting down completed");
                    Ok(())
                }
            }
        })
}
