use anagram_finder::{AnagramSolver, Lexicon, QueryError, DEFAULT_MAX_LETTERS};
use std::sync::Arc;
use std::thread;

fn get_test_solver() -> AnagramSolver {
    let lexicon = Lexicon::build(["eel", "eels", "lee", "leel"]);
    AnagramSolver::new(Arc::new(lexicon))
}

#[test]
fn test_solver_defaults() {
    let solver = get_test_solver();
    assert_eq!(solver.max_letters(), Some(DEFAULT_MAX_LETTERS));
    assert_eq!(solver.lexicon().word_count(), 4);
}

#[test]
fn test_solve() {
    let solver = get_test_solver();
    assert_eq!(
        solver.solve("eels").unwrap(),
        vec!["eel", "eels", "lee"]
    );
    assert!(solver.solve("").unwrap().is_empty());
}

#[test]
fn test_solve_rejects_long_rack() {
    let solver = get_test_solver().with_max_letters(Some(4));
    assert_eq!(
        solver.solve("eelsx"),
        Err(QueryError::InputTooLong { len: 5, max: 4 })
    );
}

#[test]
fn test_solve_unbounded() {
    let solver = get_test_solver().with_max_letters(None);
    let rack = "e".repeat(18) + "l";
    assert_eq!(solver.solve(&rack).unwrap(), vec!["eel", "lee"]);
}

#[test]
fn test_is_word() {
    let solver = get_test_solver();
    assert!(solver.is_word("leel"));
    assert!(!solver.is_word("le"));
}

#[test]
fn test_solve_many_keeps_order() {
    let solver = get_test_solver().with_max_letters(Some(4));
    let racks = vec!["eels", "xyz", "eelsx", "eel"];
    let results = solver.solve_many(&racks);

    let order: Vec<&str> = results.iter().map(|(rack, _)| rack.as_str()).collect();
    assert_eq!(order, racks);

    assert_eq!(results[0].1, Ok(vec!["eel".to_string(), "eels".to_string(), "lee".to_string()]));
    assert_eq!(results[1].1, Ok(vec![]));
    assert!(results[2].1.is_err());
    assert_eq!(results[3].1, Ok(vec!["eel".to_string(), "lee".to_string()]));
}

#[test]
fn test_shared_lexicon_across_threads() {
    let solver = get_test_solver();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let solver = solver.clone();
            thread::spawn(move || solver.solve("eel").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["eel", "lee"]);
    }
}
