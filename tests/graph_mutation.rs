//! Mutation tests: add/remove semantics, bulk operations, index consistency.

use rand::Rng;

use indexed_graph::{IndexedGraph, Iri, Literal, Triple, TriplePattern};

// ==================== Helpers ====================

fn iri(s: &str) -> Iri {
    Iri::new(s).unwrap()
}

/// Five distinct triples over three IRIs; t1 and t4 share subject `foo`.
fn fixture() -> [Triple; 5] {
    let foo = iri("http://example.org/foo");
    let bar = iri("http://example.org/bar");
    let test = iri("http://example.org/test");
    [
        Triple::new(foo.clone(), bar.clone(), test.clone()),
        Triple::new(bar.clone(), bar.clone(), foo.clone()),
        Triple::new(test.clone(), foo.clone(), test.clone()),
        Triple::new(foo.clone(), test.clone(), bar.clone()),
        Triple::new(bar, test, foo),
    ]
}

fn populated() -> IndexedGraph {
    IndexedGraph::from_triples(fixture())
}

/// Assert that every index holds exactly one entry per member triple.
fn assert_indexes_consistent(graph: &IndexedGraph) {
    let (s, p, o) = graph.index_entry_counts();
    assert_eq!(s, graph.len(), "subject index out of sync");
    assert_eq!(p, graph.len(), "predicate index out of sync");
    assert_eq!(o, graph.len(), "object index out of sync");
}

// ==================== Add / remove ====================

#[test]
fn add_has_set_semantics() {
    let mut graph = IndexedGraph::new();
    let [t1, ..] = fixture();

    assert!(graph.add(t1.clone()));
    assert!(!graph.add(t1.clone()), "duplicate add must be a no-op");
    assert_eq!(graph.len(), 1);
    assert!(graph.contains(&t1));
    assert_indexes_consistent(&graph);
}

#[test]
fn add_remove_round_trip_restores_state() {
    let mut graph = populated();
    let extra = Triple::new(
        iri("http://example.org/new"),
        iri("http://example.org/p"),
        Literal::new("value"),
    );
    let before = graph.len();

    assert!(graph.add(extra.clone()));
    assert!(graph.remove(&extra));
    assert_eq!(graph.len(), before);
    assert!(!graph.contains(&extra));
    assert_indexes_consistent(&graph);
}

#[test]
fn remove_absent_is_a_noop() {
    let mut graph = populated();
    let absent = Triple::new(
        iri("http://example.org/nope"),
        iri("http://example.org/nope"),
        iri("http://example.org/nope"),
    );
    assert!(!graph.remove(&absent));
    assert_eq!(graph.len(), 5);
}

#[test]
fn structurally_equal_triples_are_interchangeable() {
    let mut graph = IndexedGraph::new();
    graph.add(Triple::new(
        iri("http://example.org/s"),
        iri("http://example.org/p"),
        Literal::new("v"),
    ));
    // A separately constructed but field-equal triple removes the stored one.
    let twin = Triple::new(
        iri("http://example.org/s"),
        iri("http://example.org/p"),
        Literal::new("v"),
    );
    assert!(graph.contains(&twin));
    assert!(graph.remove(&twin));
    assert!(graph.is_empty());
}

// ==================== Bulk operations ====================

#[test]
fn remove_all_removes_exactly_the_shared_members() {
    // X = {t1..t5}, Y = {t1, t3, t5}; X.remove_all(Y) leaves {t2, t4}.
    let [t1, t2, t3, t4, t5] = fixture();
    let mut x = IndexedGraph::from_triples([t1.clone(), t2.clone(), t3.clone(), t4.clone(), t5.clone()]);
    let y = IndexedGraph::from_triples([t1, t3, t5]);

    assert_eq!(x.remove_all(&y), 3);
    assert_eq!(x.len(), 2);
    assert!(x.contains(&t2));
    assert!(x.contains(&t4));
    assert_indexes_consistent(&x);
}

#[test]
fn remove_all_counts_only_actual_removals() {
    let [t1, t2, ..] = fixture();
    let mut x = IndexedGraph::from_triples([t1.clone()]);
    let y = IndexedGraph::from_triples([t1, t2]);
    assert_eq!(x.remove_all(&y), 1);
    assert!(x.is_empty());
}

#[test]
fn retain_all_keeps_the_intersection() {
    let [t1, t2, t3, t4, t5] = fixture();
    let mut x = IndexedGraph::from_triples([t1.clone(), t2.clone(), t3.clone(), t4.clone(), t5.clone()]);
    let y = IndexedGraph::from_triples([t2.clone(), t4.clone()]);

    assert_eq!(x.retain_all(&y), 3);
    assert_eq!(x.len(), 2);
    assert!(x.contains(&t2));
    assert!(x.contains(&t4));
    assert!(!x.contains(&t1));
    assert_indexes_consistent(&x);
}

#[test]
fn clear_empties_everything() {
    let mut graph = populated();
    graph.clear();
    assert!(graph.is_empty());
    assert_indexes_consistent(&graph);

    // Clearing an empty graph changes nothing.
    let version = graph.version();
    graph.clear();
    assert_eq!(graph.version(), version);
}

#[test]
fn extend_and_from_iterator_import() {
    let [t1, t2, t3, ..] = fixture();
    let graph: IndexedGraph = [t1.clone(), t2.clone()].into_iter().collect();
    assert_eq!(graph.len(), 2);

    let mut graph = graph;
    graph.extend([t2, t3]);
    assert_eq!(graph.len(), 3, "extend must keep set semantics");
    assert_indexes_consistent(&graph);
}

#[test]
fn one_graph_can_seed_another() {
    let source = populated();
    let copy = IndexedGraph::from_triples(source);
    assert_eq!(copy.len(), 5);
    for t in fixture() {
        assert!(copy.contains(&t));
    }
}

// ==================== Index consistency under churn ====================

#[test]
fn indexes_stay_consistent_under_random_churn() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = rand::thread_rng();
    let subjects: Vec<Iri> = (0..10)
        .map(|i| iri(&format!("http://example.org/s{i}")))
        .collect();
    let predicates: Vec<Iri> = (0..5)
        .map(|i| iri(&format!("http://example.org/p{i}")))
        .collect();

    let mut graph = IndexedGraph::new();
    let mut shadow: Vec<Triple> = Vec::new();

    for round in 0..2000 {
        let t = Triple::new(
            subjects[rng.gen_range(0..subjects.len())].clone(),
            predicates[rng.gen_range(0..predicates.len())].clone(),
            Literal::new(format!("o{}", rng.gen_range(0..20))),
        );
        if round % 3 == 2 && !shadow.is_empty() {
            let victim = shadow.swap_remove(rng.gen_range(0..shadow.len()));
            graph.remove(&victim);
        } else if graph.add(t.clone()) {
            shadow.push(t);
        }
        assert_indexes_consistent(&graph);
    }

    // Shadow list and graph must agree on membership.
    assert_eq!(graph.len(), shadow.len());
    for t in &shadow {
        assert!(graph.contains(t));
    }
}

// ==================== Version counter ====================

#[test]
fn version_advances_only_on_actual_change() {
    let mut graph = IndexedGraph::new();
    let [t1, ..] = fixture();

    let v0 = graph.version();
    graph.add(t1.clone());
    let v1 = graph.version();
    assert!(v1 > v0);

    graph.add(t1.clone()); // duplicate: no change
    assert_eq!(graph.version(), v1);

    graph.remove(&t1);
    let v2 = graph.version();
    assert!(v2 > v1);

    graph.remove(&t1); // absent: no change
    assert_eq!(graph.version(), v2);
}

#[test]
fn noop_mutations_do_not_invalidate_cursors() {
    let mut graph = populated();
    let [t1, ..] = fixture();
    let mut cursor = graph.query(&TriplePattern::any());

    // Neither a duplicate add nor an absent remove is a structural change.
    graph.add(t1);
    graph.remove(&Triple::new(
        iri("http://example.org/nope"),
        iri("http://example.org/nope"),
        iri("http://example.org/nope"),
    ));

    assert!(cursor.next(&graph).unwrap().is_some());
}
