//! Sharing one specification tree across threads

use std::sync::Arc;
use std::thread;

use specula::prelude::*;

fn tree() -> BoxedSpecification {
    CharacterSetSpecification::decimal_digits()
        .and(CountSpecification::between(2, 4).unwrap())
        .and(RegularExpressionSpecification::new("0.*0").unwrap().not())
        .boxed()
}

#[test]
fn scoped_threads_share_a_borrowed_tree() {
    let spec = tree();
    let candidates: Vec<String> = (0..200).map(|n| n.to_string()).collect();
    let expected: Vec<bool> = candidates.iter().map(|c| spec.is_satisfied_by(c)).collect();

    let results: Vec<Vec<bool>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    candidates
                        .iter()
                        .map(|c| spec.is_satisfied_by(c))
                        .collect::<Vec<bool>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in results {
        assert_eq!(result, expected);
    }
}

#[test]
fn arc_tree_moves_into_spawned_threads() {
    let spec: Arc<dyn Specification> = Arc::from(tree());
    let handles: Vec<_> = ["42", "0123", "1010", "ice"]
        .into_iter()
        .map(|candidate| {
            let spec = Arc::clone(&spec);
            thread::spawn(move || (candidate, spec.is_satisfied_by(&candidate)))
        })
        .collect();

    let mut results: Vec<(&str, bool)> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    results.sort();
    assert_eq!(
        results,
        vec![("0123", true), ("1010", false), ("42", true), ("ice", false)]
    );
}
