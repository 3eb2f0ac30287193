//! Integration tests for slidr
//!
//! These drive the whole pipeline end to end: a photo collection file on
//! disk, through candidate generation, scoring, formulation and the bundled
//! solver backend, down to the slideshow file and back.

use slidr::{
    SlidrError, Solution,
    config::Settings,
    input, output,
    solver::ChainSearch,
};
use std::fs;
use std::path::{Path, PathBuf};

fn write_collection(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn compose_file(path: &Path, settings: &Settings) -> Result<Solution, SlidrError> {
    let photos = input::load_photos(path)?;
    slidr::compose(&photos, settings, &ChainSearch)
}

#[test]
fn lone_vertical_is_dropped_and_both_horizontals_shown() {
    // two horizontal singles, no vertical pair possible
    let dir = tempfile::tempdir().unwrap();
    let input = write_collection(dir.path(), "photos.txt", "3\nH 2 a b\nH 1 c\nV 1 x\n");

    let solution = compose_file(&input, &Settings::default()).unwrap();

    assert!(!solution.infeasible);
    assert_eq!(solution.photo_ids(), vec![vec![0], vec![1]]);
    // {a,b} vs {c}: nothing shared, transition score 0
    assert_eq!(solution.score, 0);
    assert_eq!(solution.chain_breaks, 0);
}

#[test]
fn four_verticals_pair_into_two_disjoint_slides() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_collection(dir.path(), "photos.txt", "4\nV 1 x\nV 1 x\nV 1 y\nV 1 y\n");

    let solution = compose_file(&input, &Settings::default()).unwrap();

    assert_eq!(solution.slides.len(), 2);
    assert!(solution.slides.iter().all(slidr::slides::Slide::is_pair));

    // every photo used exactly once
    let mut used: Vec<u32> = solution.photo_ids().into_iter().flatten().collect();
    used.sort_unstable();
    assert_eq!(used, vec![0, 1, 2, 3]);

    // every pairing of these tag sets scores 0 by the min() formula, so the
    // objective cannot exceed 0 no matter which pairs are chosen
    assert_eq!(solution.score, 0);
}

#[test]
fn single_horizontal_is_a_trivial_show() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_collection(dir.path(), "photos.txt", "1\nH 1 a\n");

    let solution = compose_file(&input, &Settings::default()).unwrap();

    assert!(!solution.infeasible);
    assert_eq!(solution.photo_ids(), vec![vec![0]]);
    assert_eq!(solution.score, 0);
}

#[test]
fn single_vertical_yields_the_empty_infeasible_show() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_collection(dir.path(), "photos.txt", "1\nV 1 a\n");

    let solution = compose_file(&input, &Settings::default()).unwrap();

    assert!(solution.infeasible);
    assert!(solution.slides.is_empty());

    // the empty show still writes cleanly
    let out = dir.path().join("empty.sol");
    output::write_show(&out, &solution).unwrap();
    assert!(output::read_show(&out).unwrap().is_empty());
}

#[test]
fn scale_guard_aborts_before_model_construction() {
    // 200 verticals project to 19900 pair candidates
    let mut content = String::from("200\n");
    for i in 0..200 {
        content.push_str(&format!("V 1 t{i}\n"));
    }
    let dir = tempfile::tempdir().unwrap();
    let input = write_collection(dir.path(), "photos.txt", &content);

    let settings = Settings { max_candidates: 1000, ..Settings::default() };
    let err = compose_file(&input, &settings).unwrap_err();
    assert!(matches!(err, SlidrError::Scale(_)));
}

#[test]
fn chained_horizontals_realize_their_transition_scores() {
    // score(0,1) = 2 and score(1,2) = 2; slide 2 shares nothing with slide 0
    let dir = tempfile::tempdir().unwrap();
    let input = write_collection(
        dir.path(),
        "photos.txt",
        "3\nH 4 a b c d\nH 4 c d e f\nH 4 e f g h\n",
    );

    let solution = compose_file(&input, &Settings::default()).unwrap();

    assert_eq!(solution.photo_ids(), vec![vec![0], vec![1], vec![2]]);
    assert_eq!(solution.score, 4);
    assert_eq!(solution.chain_breaks, 0);
    // the bundled backend is a heuristic, so the flag is always up
    assert!(solution.possibly_suboptimal);
}

#[test]
fn written_show_reparses_to_the_same_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_collection(
        dir.path(),
        "photos.txt",
        "5\nH 3 a b c\nV 2 b d\nV 2 c e\nH 3 d e f\nH 2 a f\n",
    );

    let solution = compose_file(&input, &Settings::default()).unwrap();
    assert!(!solution.slides.is_empty());

    let out = dir.path().join("show.sol");
    output::write_show(&out, &solution).unwrap();
    assert_eq!(output::read_show(&out).unwrap(), solution.photo_ids());
}

#[test]
fn time_limited_run_still_produces_a_valid_show() {
    let mut content = String::from("12\n");
    for i in 0..12 {
        content.push_str(&format!("H 3 common t{i} t{}\n", i + 1));
    }
    let dir = tempfile::tempdir().unwrap();
    let input = write_collection(dir.path(), "photos.txt", &content);

    let settings = Settings { time_limit_secs: Some(0), ..Settings::default() };
    let solution = compose_file(&input, &settings).unwrap();

    assert!(!solution.infeasible);
    assert!(solution.possibly_suboptimal);
    // no photo repeats even under the cut-off
    let mut used: Vec<u32> = solution.photo_ids().into_iter().flatten().collect();
    let before = used.len();
    used.sort_unstable();
    used.dedup();
    assert_eq!(used.len(), before);
}

#[test]
fn malformed_collection_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_collection(dir.path(), "photos.txt", "2\nH 1 a\nX 1 b\n");

    let err = compose_file(&input, &Settings::default()).unwrap_err();
    assert!(matches!(err, SlidrError::Input(_)));
}
