//! Integration tests for the editor resource scheduler

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use void_resource::prelude::*;
use void_resource_editor::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Update(String, f32),
    Success(String, f32),
    Failure(String, LoadResourceStatus, String),
}

type Events = Arc<Mutex<Vec<Event>>>;

struct Harness {
    manager: Arc<EditorResourceManager>,
    assets: Arc<MemoryAssetDatabase>,
    scenes: Arc<ScriptedSceneManager>,
    clock: Arc<ManualClock>,
    sink: Arc<RecordingSink>,
}

impl Harness {
    fn new(config: EditorResourceConfig) -> Self {
        let assets = Arc::new(MemoryAssetDatabase::new());
        let scenes = Arc::new(ScriptedSceneManager::new());
        let clock = Arc::new(ManualClock::new());
        let sink = Arc::new(RecordingSink::new());
        let manager = EditorResourceManager::new(config, assets.clone(), scenes.clone())
            .unwrap()
            .with_clock(clock.clone())
            .with_sink(sink.clone());

        Self {
            manager: Arc::new(manager),
            assets,
            scenes,
            clock,
            sink,
        }
    }

    fn fixed(delay_secs: f32) -> Self {
        Self::new(EditorResourceConfig::default().with_fixed_delay(delay_secs))
    }

    fn with_assets(self, names: &[&str]) -> Self {
        for name in names {
            self.assets.insert(*name, shared(name.to_string()));
        }
        self
    }
}

fn asset_callbacks(events: &Events) -> LoadAssetCallbacks {
    let on_success = events.clone();
    let on_failure = events.clone();
    let on_update = events.clone();
    LoadAssetCallbacks::new()
        .on_success(move |name, _, elapsed, _| {
            on_success.lock().push(Event::Success(name.to_string(), elapsed));
        })
        .on_failure(move |name, status, message, _| {
            on_failure
                .lock()
                .push(Event::Failure(name.to_string(), status, message.to_string()));
        })
        .on_update(move |name, progress, _| {
            on_update.lock().push(Event::Update(name.to_string(), progress));
        })
}

fn scene_callbacks(events: &Events) -> LoadSceneCallbacks {
    let on_success = events.clone();
    let on_failure = events.clone();
    let on_update = events.clone();
    LoadSceneCallbacks::new()
        .on_success(move |name, elapsed, _| {
            on_success.lock().push(Event::Success(name.to_string(), elapsed));
        })
        .on_failure(move |name, status, message, _| {
            on_failure
                .lock()
                .push(Event::Failure(name.to_string(), status, message.to_string()));
        })
        .on_update(move |name, progress, _| {
            on_update.lock().push(Event::Update(name.to_string(), progress));
        })
}

type BatchReport = Arc<Mutex<Vec<(Vec<String>, usize, f32)>>>;

fn batch_request(names: &[&str], report: &BatchReport) -> AssetBatchRequest {
    let report = report.clone();
    AssetBatchRequest::new(names.iter().copied()).on_done(move |names, assets, duration, _| {
        report.lock().push((names.to_vec(), assets.len(), duration));
    })
}

fn terminal_count(events: &Events, name: &str) -> usize {
    events
        .lock()
        .iter()
        .filter(|e| match e {
            Event::Success(n, _) | Event::Failure(n, _, _) => n == name,
            Event::Update(..) => false,
        })
        .count()
}

// ============================================================================
// Asset loads
// ============================================================================

#[test]
fn test_delays_stay_within_configured_bounds() {
    let h = Harness::new(
        EditorResourceConfig::default()
            .with_delay_range(0.25, 2.0)
            .with_seed(7),
    );
    let events = Events::default();

    for i in 0..64 {
        h.manager
            .load_asset(&format!("asset_{}", i), asset_callbacks(&events))
            .unwrap();
    }

    let snapshot = h.manager.asset_load_snapshot();
    assert_eq!(snapshot.len(), 64);
    for load in snapshot {
        let secs = load.delay.as_secs_f32();
        assert!((0.25 - 1e-5..=2.0 + 1e-5).contains(&secs), "{} out of bounds", secs);
    }
}

#[test]
fn test_load_reports_progress_then_success_on_due_tick() {
    let h = Harness::fixed(1.0).with_assets(&["hero.prefab"]);
    let events = Events::default();
    h.manager.load_asset("hero.prefab", asset_callbacks(&events)).unwrap();

    h.manager.tick();
    h.clock.advance_secs(0.5);
    h.manager.tick();
    assert_eq!(h.manager.pending_asset_loads(), 1);

    h.clock.advance_secs(0.5);
    let stats = h.manager.tick();
    assert_eq!(stats.assets_finished, 1);

    h.clock.advance_secs(5.0);
    h.manager.tick();

    assert_eq!(
        *events.lock(),
        vec![
            Event::Update("hero.prefab".into(), 0.0),
            Event::Update("hero.prefab".into(), 0.5),
            Event::Success("hero.prefab".into(), 1.0),
        ]
    );
    assert!(h.manager.is_idle());
}

#[test]
fn test_zero_delay_succeeds_on_first_tick_without_update() {
    let h = Harness::new(EditorResourceConfig::default().with_delay_range(0.0, 0.0))
        .with_assets(&["hero.prefab"]);
    let events = Events::default();
    h.manager.load_asset("hero.prefab", asset_callbacks(&events)).unwrap();

    h.manager.tick();

    assert_eq!(*events.lock(), vec![Event::Success("hero.prefab".into(), 0.0)]);
    assert_eq!(h.manager.pending_asset_loads(), 0);
}

#[test]
fn test_missing_asset_fails_with_not_exist() {
    let h = Harness::fixed(0.0);
    let events = Events::default();
    h.manager.load_asset("ghost.prefab", asset_callbacks(&events)).unwrap();

    h.manager.tick();

    assert_eq!(
        *events.lock(),
        vec![Event::Failure(
            "ghost.prefab".into(),
            LoadResourceStatus::NotExist,
            "Can not load this asset from asset database.".into(),
        )]
    );
}

#[test]
fn test_type_filter_mismatch_fails() {
    let h = Harness::fixed(0.0).with_assets(&["hero.prefab"]);
    let events = Events::default();

    h.manager
        .load_asset_typed("hero.prefab", AssetType::of::<u64>(), asset_callbacks(&events))
        .unwrap();
    h.manager
        .load_asset_typed("hero.prefab", AssetType::of::<String>(), asset_callbacks(&events))
        .unwrap();
    h.manager.tick();

    let events = events.lock();
    assert!(matches!(events[0], Event::Failure(_, LoadResourceStatus::NotExist, _)));
    assert!(matches!(events[1], Event::Success(_, _)));
}

#[test]
fn test_user_data_reaches_callbacks() {
    let h = Harness::fixed(0.0).with_assets(&["hero.prefab"]);
    let seen = Arc::new(Mutex::new(None));
    let sink = seen.clone();

    h.manager
        .load_asset_with(
            AssetLoadRequest::new("hero.prefab").with_user_data(shared(42u32)),
            LoadAssetCallbacks::new().on_success(move |_, asset, _, data| {
                let tag = data.and_then(|d| d.downcast_ref::<u32>()).copied();
                let value = asset.downcast_ref::<String>().cloned();
                *sink.lock() = Some((tag, value));
            }),
        )
        .unwrap();
    h.manager.tick();

    assert_eq!(*seen.lock(), Some((Some(42), Some("hero.prefab".to_string()))));
}

#[test]
fn test_staggered_loads_each_finish_on_first_due_tick() {
    let h = Harness::new(
        EditorResourceConfig::default()
            .with_delay_range(0.1, 1.0)
            .with_seed(3),
    );
    let names: Vec<String> = (0..25).map(|i| format!("prop_{}", i)).collect();
    for name in &names {
        h.assets.insert(name.clone(), shared(0u8));
    }

    let events = Events::default();
    for name in &names {
        h.manager.load_asset(name, asset_callbacks(&events)).unwrap();
    }

    let step = std::time::Duration::from_secs_f32(0.1);
    let expected: HashMap<String, u32> = h
        .manager
        .asset_load_snapshot()
        .into_iter()
        .map(|load| {
            let frame = (1u32..).find(|k| step * *k >= load.delay).unwrap();
            (load.name, frame)
        })
        .collect();

    let mut finished_on: HashMap<String, u32> = HashMap::new();
    for frame in 1..=15u32 {
        let seen = events.lock().len();
        h.clock.advance(step);
        h.manager.tick();

        for event in &events.lock()[seen..] {
            if let Event::Success(name, _) = event {
                assert!(finished_on.insert(name.clone(), frame).is_none(), "{}", name);
            }
        }
    }

    assert!(h.manager.is_idle());
    assert_eq!(finished_on, expected);
    for name in &names {
        assert_eq!(terminal_count(&events, name), 1, "{}", name);
    }
}

#[test]
fn test_progress_is_monotonic() {
    let h = Harness::fixed(2.0).with_assets(&["terrain"]);
    let events = Events::default();
    h.manager.load_asset("terrain", asset_callbacks(&events)).unwrap();

    for _ in 0..30 {
        h.manager.tick();
        h.clock.advance_secs(0.1);
    }

    let progress: Vec<f32> = events
        .lock()
        .iter()
        .filter_map(|e| match e {
            Event::Update(_, p) => Some(*p),
            _ => None,
        })
        .collect();
    assert!(!progress.is_empty());
    assert!(progress.windows(2).all(|w| w[0] <= w[1]));
    assert!(progress.iter().all(|p| (0.0..=1.0).contains(p)));
    assert_eq!(terminal_count(&events, "terrain"), 1);
}

// ============================================================================
// Batches
// ============================================================================

#[test]
fn test_batch_completes_while_unrelated_load_pending() {
    let h = Harness::fixed(1.0).with_assets(&["a", "b", "c", "slow"]);
    let events = Events::default();
    let report = BatchReport::default();

    h.manager
        .load_assets_with(batch_request(&["a", "b", "c"], &report), asset_callbacks(&events))
        .unwrap();
    h.clock.advance_secs(0.5);
    h.manager.load_asset("slow", asset_callbacks(&events)).unwrap();
    h.clock.advance_secs(0.5);

    let stats = h.manager.tick();
    assert_eq!(stats.batches_finished, 1);
    assert_eq!(h.manager.pending_asset_loads(), 1);
    assert_eq!(h.manager.pending_batches(), 0);

    let reports = report.lock();
    assert_eq!(reports.len(), 1);
    let (names, assets, duration) = &reports[0];
    assert_eq!(names, &vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    assert_eq!(*assets, 3);
    assert_eq!(*duration, 3.0);

    for name in ["a", "b", "c"] {
        assert_eq!(terminal_count(&events, name), 1);
    }
}

#[test]
fn test_batch_failures_count_toward_completion() {
    let h = Harness::fixed(0.0).with_assets(&["a", "c"]);
    let events = Events::default();
    let report = BatchReport::default();

    h.manager
        .load_assets_with(
            batch_request(&["a", "missing", "c"], &report),
            asset_callbacks(&events),
        )
        .unwrap();
    h.manager.tick();

    let reports = report.lock();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].0, vec!["a".to_string(), "c".to_string()]);
    assert_eq!(reports[0].1, 2);
    assert_eq!(terminal_count(&events, "missing"), 1);
}

#[test]
fn test_empty_batch_reports_on_next_tick() {
    let h = Harness::fixed(0.0);
    let report = BatchReport::default();
    let callbacks = LoadAssetCallbacks::new().on_success(|_, _, _, _| {});

    h.manager
        .load_assets_with(batch_request(&[], &report), callbacks)
        .unwrap();
    assert!(report.lock().is_empty());
    assert_eq!(h.manager.pending_batches(), 1);

    h.manager.tick();
    assert_eq!(*report.lock(), vec![(Vec::new(), 0, 0.0)]);
}

#[test]
fn test_concurrent_batches_report_independently() {
    let h = Harness::fixed(1.0).with_assets(&["a", "b", "x", "y"]);
    let events = Events::default();
    let first = BatchReport::default();
    let second = BatchReport::default();

    h.manager
        .load_assets_with(batch_request(&["a", "b"], &first), asset_callbacks(&events))
        .unwrap();
    h.clock.advance_secs(0.5);
    h.manager
        .load_assets_with(batch_request(&["x", "y"], &second), asset_callbacks(&events))
        .unwrap();

    h.clock.advance_secs(0.5);
    h.manager.tick();
    assert_eq!(first.lock().len(), 1);
    assert!(second.lock().is_empty());
    assert_eq!(h.manager.pending_batches(), 1);

    h.clock.advance_secs(0.5);
    h.manager.tick();
    assert_eq!(first.lock().len(), 1);
    assert_eq!(second.lock()[0].0, vec!["x".to_string(), "y".to_string()]);
    assert!(h.manager.is_idle());
}

#[test]
fn test_batch_priorities_and_types_repeat_last_value() {
    let h = Harness::fixed(1.0);
    let report = BatchReport::default();
    let callbacks = LoadAssetCallbacks::new().on_success(|_, _, _, _| {});

    let id = h
        .manager
        .load_assets_with(
            batch_request(&["a", "b", "c"], &report).with_priorities(vec![5, 9]),
            callbacks,
        )
        .unwrap();

    let snapshot = h.manager.asset_load_snapshot();
    let priorities: Vec<i32> = snapshot.iter().map(|s| s.priority).collect();
    assert_eq!(priorities, vec![5, 9, 9]);
    assert!(snapshot.iter().all(|s| s.batch == Some(id)));
}

#[test]
fn test_invalid_batch_queues_nothing() {
    let h = Harness::fixed(0.0);
    let report = BatchReport::default();
    let callbacks = LoadAssetCallbacks::new().on_success(|_, _, _, _| {});

    let no_done = AssetBatchRequest::new(["a", "b"]);
    assert!(h.manager.load_assets_with(no_done, callbacks.clone()).is_err());

    let blank = batch_request(&["a", ""], &report);
    assert!(h.manager.load_assets_with(blank, callbacks).is_err());

    assert_eq!(h.sink.len(), 2);
    assert_eq!(h.manager.pending_asset_loads(), 0);
    assert_eq!(h.manager.pending_batches(), 0);
}

// ============================================================================
// Scenes
// ============================================================================

#[test]
fn test_scene_load_reports_platform_progress() {
    let h = Harness::fixed(0.0);
    h.scenes.register("level1");
    let events = Events::default();

    h.manager.load_scene("level1", scene_callbacks(&events)).unwrap();
    let op = h.scenes.load_operation("level1").unwrap();

    h.manager.tick();
    op.set_progress(0.5);
    h.clock.advance_secs(2.0);
    h.manager.tick();
    op.complete(true);
    h.manager.tick();
    h.manager.tick();

    assert_eq!(
        *events.lock(),
        vec![
            Event::Update("level1".into(), 0.0),
            Event::Update("level1".into(), 0.5),
            Event::Success("level1".into(), 2.0),
        ]
    );
    assert_eq!(h.manager.pending_scene_loads(), 0);
}

#[test]
fn test_scene_done_without_activation_fails() {
    let h = Harness::fixed(0.0);
    h.scenes.register("level1");
    let events = Events::default();

    h.manager.load_scene("level1", scene_callbacks(&events)).unwrap();
    h.scenes.load_operation("level1").unwrap().complete(false);
    h.manager.tick();

    assert_eq!(
        *events.lock(),
        vec![Event::Failure(
            "level1".into(),
            LoadResourceStatus::NotExist,
            "Can not load this scene from asset database.".into(),
        )]
    );
}

#[test]
fn test_scene_unload_success_and_failure() {
    let h = Harness::fixed(0.0);
    h.scenes.register("level1");
    h.scenes.register("level2");
    let outcomes = Arc::new(Mutex::new(Vec::new()));

    let callbacks = {
        let ok = outcomes.clone();
        let failed = outcomes.clone();
        UnloadSceneCallbacks::new()
            .on_success(move |name, _| ok.lock().push(format!("unloaded {}", name)))
            .on_failure(move |name, _| failed.lock().push(format!("kept {}", name)))
    };

    h.manager.unload_scene("level1", callbacks.clone()).unwrap();
    h.manager.unload_scene("level2", callbacks).unwrap();

    h.manager.tick();
    assert!(outcomes.lock().is_empty());

    h.scenes.unload_operation("level2").unwrap().complete(false);
    h.scenes.unload_operation("level1").unwrap().complete(true);
    let stats = h.manager.tick();

    assert_eq!(stats.scenes_unloaded, 2);
    assert_eq!(
        *outcomes.lock(),
        vec!["unloaded level1".to_string(), "kept level2".to_string()]
    );
}

// ============================================================================
// Validation and re-entrancy
// ============================================================================

#[test]
fn test_empty_names_report_once_and_queue_nothing() {
    let h = Harness::fixed(0.0);
    let events = Events::default();

    let err = h.manager.load_asset("", asset_callbacks(&events)).unwrap_err();
    assert_eq!(err, ResourceError::InvalidRequest("Asset name is invalid.".into()));
    assert_eq!(h.sink.messages(), vec!["Asset name is invalid.".to_string()]);

    h.sink.clear();
    assert!(h.manager.load_scene("", scene_callbacks(&events)).is_err());
    assert_eq!(h.sink.messages(), vec!["Scene asset name is invalid.".to_string()]);

    h.manager.tick();
    assert!(events.lock().is_empty());
    assert!(h.manager.is_idle());
}

#[test]
fn test_missing_scene_callbacks_rejected() {
    let h = Harness::fixed(0.0);
    h.scenes.register("level1");

    let err = h
        .manager
        .load_scene("level1", LoadSceneCallbacks::new())
        .unwrap_err();
    assert!(err.is_invalid_request());
    assert!(h.scenes.load_operation("level1").is_none());

    assert!(h.manager.unload_scene("level1", UnloadSceneCallbacks::new()).is_err());
    assert_eq!(h.sink.len(), 2);
}

#[test]
fn test_work_queued_from_callback_runs_next_tick() {
    let h = Harness::fixed(0.0).with_assets(&["first", "second"]);
    let events = Events::default();

    let manager = h.manager.clone();
    let follow_up = asset_callbacks(&events);
    let log = events.clone();
    h.manager
        .load_asset(
            "first",
            LoadAssetCallbacks::new().on_success(move |name, _, elapsed, _| {
                log.lock().push(Event::Success(name.to_string(), elapsed));
                manager.load_asset("second", follow_up.clone()).unwrap();
            }),
        )
        .unwrap();

    h.manager.tick();
    assert_eq!(terminal_count(&events, "first"), 1);
    assert_eq!(terminal_count(&events, "second"), 0);
    assert_eq!(h.manager.pending_asset_loads(), 1);

    h.manager.tick();
    assert_eq!(terminal_count(&events, "second"), 1);
    assert!(h.manager.is_idle());
}

#[test]
fn test_facade_through_trait_object() {
    let h = Harness::fixed(0.0).with_assets(&["hero.prefab"]);
    let events = Events::default();
    let facade: &dyn ResourceManager = h.manager.as_ref();

    facade
        .load_asset_with_priority("hero.prefab", 3, asset_callbacks(&events))
        .unwrap();
    assert!(facade.has_asset("hero.prefab"));
    assert_eq!(facade.current_variant(), None);
    assert_eq!(facade.resource_count(), Capability::Unsupported("resource_count"));
    assert!(facade.asset_groups().supported().is_none());

    h.manager.tick();
    assert_eq!(terminal_count(&events, "hero.prefab"), 1);
}
