//! Resource Simulation Driver
//!
//! Runs the editor resource backend headless: registers a few in-memory
//! assets and scenes, issues loads, and ticks at a fixed rate until every
//! request has reported.
//!
//! Run with: cargo run --bin resource-sim [config.toml]
//!
//! Delay bounds and seed can be overridden with VOID_RESOURCE_MIN_DELAY,
//! VOID_RESOURCE_MAX_DELAY and VOID_RESOURCE_SEED.

use std::sync::Arc;
use std::time::Duration;

use void_resource::prelude::*;
use void_resource_editor::prelude::*;

const FRAME: Duration = Duration::from_millis(16);
const MAX_FRAMES: u64 = 10_000;
const SCENE_STEP: f32 = 0.05;

struct Material {
    shader: &'static str,
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid resource config: {}", e);
            std::process::exit(1);
        }
    };

    let assets = Arc::new(MemoryAssetDatabase::new());
    assets.insert("hero.prefab", shared("hero".to_string()));
    assets.insert("ui/atlas.png", shared(vec![0u8; 64]));
    assets.insert("materials/stone.mat", shared(Material { shader: "pbr" }));
    assets.insert("audio/theme.ogg", shared(vec![1u8; 16]));

    let scenes = Arc::new(ScriptedSceneManager::new());
    scenes.register("level1");
    scenes.register("menu");

    let manager = match EditorResourceManager::new(config, assets, scenes.clone()) {
        Ok(manager) => manager,
        Err(e) => {
            log::error!("Failed to create resource manager: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = issue_requests(&manager) {
        log::error!("Request rejected: {}", e);
    }

    while !manager.is_idle() && manager.frame() < MAX_FRAMES {
        scenes.advance_all(SCENE_STEP);
        let stats = manager.tick();
        if stats.finished() > 0 || stats.batches_finished > 0 {
            log::debug!("Frame {}: {:?}", stats.frame, stats);
        }
        std::thread::sleep(FRAME);
    }

    log::info!("Finished after {} frames", manager.frame());
}

fn load_config() -> Result<EditorResourceConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading resource config from {}", path);
            EditorResourceConfig::load(path)
        }
        None => {
            let mut config = EditorResourceConfig::default();
            config.apply_env_overrides()?;
            config.validate()?;
            Ok(config)
        }
    }
}

fn issue_requests(manager: &EditorResourceManager) -> ResourceResult<()> {
    manager.set_read_only_path("assets")?;
    manager.set_read_write_path("cache")?;

    let per_asset = LoadAssetCallbacks::new()
        .on_success(|name, _, elapsed, _| {
            log::info!("Loaded '{}' in {:.2}s", name, elapsed);
        })
        .on_failure(|name, status, message, _| {
            log::warn!("Failed '{}' ({}): {}", name, status, message);
        });

    manager.load_asset_with(
        AssetLoadRequest::new("materials/stone.mat").with_type::<Material>(),
        LoadAssetCallbacks::new().on_success(|name, asset, _, _| {
            if let Some(material) = asset.downcast_ref::<Material>() {
                log::info!("Material '{}' uses shader '{}'", name, material.shader);
            }
        }),
    )?;
    manager.load_asset("missing.prefab", per_asset.clone())?;

    manager.load_assets_with(
        AssetBatchRequest::new(["hero.prefab", "ui/atlas.png", "audio/theme.ogg"])
            .with_priority(10)
            .on_done(|names, _, duration, _| {
                log::info!("Batch ready: {:?} ({:.2}s total)", names, duration);
            }),
        per_asset,
    )?;

    manager.load_scene(
        "level1",
        LoadSceneCallbacks::new()
            .on_success(|name, elapsed, _| log::info!("Scene '{}' loaded in {:.2}s", name, elapsed))
            .on_update(|name, progress, _| log::trace!("Scene '{}' at {:.0}%", name, progress * 100.0)),
    )?;
    manager.unload_scene(
        "menu",
        UnloadSceneCallbacks::new().on_success(|name, _| log::info!("Scene '{}' unloaded", name)),
    )?;

    if let Err(e) = manager.asset_count().into_result() {
        log::info!("{}", e);
    }
    Ok(())
}
