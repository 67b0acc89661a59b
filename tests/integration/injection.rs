// tests/integration/injection.rs
use std::{collections::BTreeMap, fs, path::PathBuf};

use generate_discrepancies::{
    InjectConfig, InjectError, Injector, Outcome, RngSampler, Tally, Thresholds,
    filesystem::count_files,
};

use crate::common::TempWorkspace;

fn aggressive(seed: u64) -> InjectConfig {
    InjectConfig {
        thresholds: Thresholds::new(0.2, 0.5).unwrap(),
        seed: Some(seed),
        ..InjectConfig::default()
    }
}

fn run_recording(
    ws: &TempWorkspace,
    config: InjectConfig,
) -> (Tally, BTreeMap<PathBuf, Outcome>) {
    let sampler = RngSampler::from_seed(config.seed);
    let mut outcomes = BTreeMap::new();
    let tally = Injector::new(config, sampler)
        .run_with(ws.path(), |path, outcome| {
            let rel = path.strip_prefix(ws.path()).unwrap().to_path_buf();
            assert!(outcomes.insert(rel, outcome).is_none(), "file visited twice");
        })
        .expect("run succeeds");
    (tally, outcomes)
}

#[test]
fn counts_sum_to_files_present_before_run() {
    let ws = TempWorkspace::with_files("sum", 400);
    let before = count_files(ws.path()).unwrap();
    assert_eq!(before, 400);

    let (tally, outcomes) = run_recording(&ws, aggressive(42));

    assert_eq!(tally.total(), before);
    assert_eq!(outcomes.len() as u64, before);
    assert!(tally.ok > 0 && tally.missing > 0 && tally.mismatch > 0);
}

#[test]
fn each_outcome_leaves_the_expected_trace() {
    let ws = TempWorkspace::with_files("trace", 400);
    let before = ws.snapshot();

    let (tally, outcomes) = run_recording(&ws, aggressive(7));

    for (rel, outcome) in &outcomes {
        let original = &before[rel];
        let path = ws.path().join(rel);
        match outcome {
            Outcome::Missing => assert!(!path.exists(), "{} should be gone", rel.display()),
            Outcome::Mismatch => {
                let now = fs::read(&path).unwrap();
                assert_eq!(now.len(), original.len() + 10);
                assert!(now.starts_with(original));
                assert!(now[original.len()..].iter().all(u8::is_ascii_alphabetic));
            }
            Outcome::Ok => assert_eq!(&fs::read(&path).unwrap(), original),
        }
    }

    let after = ws.snapshot();
    assert_eq!(after.len() as u64, tally.ok + tally.mismatch);
    assert_eq!(count_files(ws.path()).unwrap(), tally.ok + tally.mismatch);
}

#[test]
fn same_seed_same_snapshot_same_classification() {
    let first = TempWorkspace::with_files("det_a", 300);
    let second = TempWorkspace::with_files("det_b", 300);

    let (tally_a, outcomes_a) = run_recording(&first, aggressive(2024));
    let (tally_b, outcomes_b) = run_recording(&second, aggressive(2024));

    assert_eq!(tally_a, tally_b);
    assert_eq!(outcomes_a, outcomes_b);
    assert_eq!(first.snapshot(), second.snapshot());
}

#[test]
fn default_rates_touch_few_files() {
    let ws = TempWorkspace::with_files("default", 2000);
    let config = InjectConfig {
        seed: Some(99),
        ..InjectConfig::default()
    };

    let (tally, _) = run_recording(&ws, config);

    assert_eq!(tally.total(), 2000);
    // 0.5% expected; anything near 10% means the thresholds are wrong.
    assert!(tally.missing + tally.mismatch < 100, "{tally:?}");
}

#[test]
fn custom_suffix_length_is_honoured() {
    let ws = TempWorkspace::new("suffix");
    ws.create_file("one", "abc");
    ws.create_file("deep/two", "defg");

    let config = InjectConfig {
        thresholds: Thresholds::new(1.0, 1.0).unwrap(),
        suffix_len: 25,
        seed: Some(1),
    };
    let (tally, _) = run_recording(&ws, config);

    assert_eq!(tally.mismatch, 2);
    assert_eq!(fs::metadata(ws.path().join("one")).unwrap().len(), 3 + 25);
    assert_eq!(fs::metadata(ws.path().join("deep/two")).unwrap().len(), 4 + 25);
}

#[test]
fn plain_file_root_is_rejected_without_mutation() {
    let ws = TempWorkspace::new("not_dir");
    let file = ws.create_file("lonely.txt", "keep me");

    let result = Injector::new(aggressive(3), RngSampler::from_seed(Some(3))).run(&file);

    assert!(matches!(result, Err(InjectError::NotADirectory(_))));
    assert_eq!(fs::read_to_string(&file).unwrap(), "keep me");
}

#[cfg(unix)]
#[test]
fn symlinks_are_not_visited() {
    let ws = TempWorkspace::new("links");
    let target = ws.create_file("real", "data");
    std::os::unix::fs::symlink(&target, ws.path().join("link")).unwrap();

    assert_eq!(count_files(ws.path()).unwrap(), 1);
}
