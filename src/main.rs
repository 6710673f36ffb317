use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use ambient_core::settings::TomlSettings;
use ambient_core::Config;
use ambient_ui::services::{
    request_cities, request_resolve, request_suggestions, start_polling, CityServiceMessage,
    DashboardServiceMessage, LocationServiceMessage, SuggestServiceMessage,
};
use ambient_ui::{render, AppServices, DashboardModel, MapModel};

fn main() -> Result<()> {
    ambient_core::init()?;

    let (config, validation) = Config::load_validated()?;
    for warning in &validation.warnings {
        tracing::warn!("Config: {}: {}", warning.field, warning.message);
    }

    let settings = TomlSettings::load(&config.config_dir)?;
    let services = AppServices::new(config, &settings)?;
    let handle = services.handle();

    println!("Ambient - Environmental Monitoring Dashboard");
    println!("Config directory: {}", services.config().config_dir.display());

    // One channel per service; the main thread drains them all.
    let (location_tx, location_rx) = mpsc::channel::<LocationServiceMessage>();
    let (city_tx, city_rx) = mpsc::channel::<CityServiceMessage>();
    let (tick_tx, tick_rx) = mpsc::channel::<DashboardServiceMessage>();
    let (suggest_tx, suggest_rx) = mpsc::channel::<SuggestServiceMessage>();

    let mut map = MapModel::new(services.config());
    let mut dashboard = DashboardModel::new();

    // This binary always runs in a client context; walk the map view
    // through its mount and engine-load lifecycle directly.
    map.mount(true);
    map.request_engine(services.map_engine_loaded());
    if map.state() != ambient_core::MapViewState::EngineReady {
        map.engine_loaded();
        services.mark_map_engine_loaded();
    }

    let view_token = services.view_token();

    if map.begin_fetches() {
        request_resolve(&handle, &location_tx, services.location(), view_token.clone());
        request_cities(&handle, &city_tx, services.catalog(), view_token.clone());
    }

    let poll_seconds = services.config().dashboard.poll_seconds;
    if poll_seconds > 0 {
        start_polling(
            &handle,
            &tick_tx,
            services.sensor_slot(),
            services.config().sensor.prefer_network,
            Duration::from_secs(u64::from(poll_seconds)),
            view_token.clone(),
        );
    }

    // Ctrl-C cancels the view token and flips the stop flag.
    let stopping = Arc::new(AtomicBool::new(false));
    {
        let stopping = stopping.clone();
        let token = view_token.clone();
        handle.spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown requested");
                token.cancel();
                stopping.store(true, Ordering::Relaxed);
            }
        });
    }

    while !stopping.load(Ordering::Relaxed) {
        while let Ok(LocationServiceMessage::ResolveDone(resolved)) = location_rx.try_recv() {
            tracing::info!(
                "Location resolved ({}, {}){}",
                resolved.coord.lat,
                resolved.coord.lng,
                if resolved.from_fallback { " via fallback" } else { "" }
            );
            map.apply_location(resolved);
            report_map(&map);
        }

        while let Ok(CityServiceMessage::CitiesDone(outcome)) = city_rx.try_recv() {
            tracing::info!(
                "City catalog resolved: {} readings, {} failures",
                outcome.readings.len(),
                outcome.failures.len()
            );
            map.apply_cities(outcome);
            report_map(&map);
        }

        while let Ok(DashboardServiceMessage::Tick { reading, status }) = tick_rx.try_recv() {
            map.apply_reading(reading);
            let wants_suggestions = dashboard.apply_tick(reading, status);

            if let Some(banner) = dashboard.status_banner() {
                println!("! {}", banner);
            }
            if let (Some(t), Some(h)) = (reading.temperature, reading.humidity) {
                println!("Reading: {:.1} C, {:.1} %", t, h);
            } else {
                println!("Reading: unavailable");
            }
            report_map(&map);

            if wants_suggestions {
                if let Some(t) = reading.temperature {
                    request_suggestions(
                        &handle,
                        &suggest_tx,
                        services.suggest(),
                        t,
                        reading.humidity.unwrap_or(0.0),
                        view_token.clone(),
                    );
                }
            }
        }

        while let Ok(SuggestServiceMessage::SuggestionsDone(set)) = suggest_rx.try_recv() {
            dashboard.apply_suggestions(set);
            if let Some(set) = dashboard.suggestions() {
                println!("\n{}\n", render::render_set(set));
            }
        }

        std::thread::sleep(Duration::from_millis(100));
    }

    services.shutdown();
    Ok(())
}

fn report_map(map: &MapModel) {
    if let Some(nearest) = map.nearest() {
        println!(
            "Nearest city: {} ({:+.1} C, {})",
            nearest.city,
            nearest.delta_celsius,
            nearest.direction.label()
        );
    }
    for error in map.errors() {
        tracing::warn!("Map: {}", error);
    }
}
