use avl_forest::avl::height_bound;
use avl_forest::{default_less, AvlTree, CountingAllocator, MergeIfEqual, NeverMerge, NoAggregate};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

#[test]
fn randomized_positional_ops_match_a_vector_model() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5EED_AF1E);
    let mut tree = AvlTree::with_parts(
        default_less::<i64>,
        NeverMerge,
        NoAggregate,
        CountingAllocator::new(),
    );
    let mut model: Vec<i64> = Vec::new();

    for step in 0..1000 {
        if !model.is_empty() && rng.gen_range(0..3) == 0 {
            let index = rng.gen_range(0..model.len());
            let removed = tree.remove_at(index).expect("index in range");
            assert_eq!(removed, model.remove(index));
        } else {
            let index = rng.gen_range(0..=model.len());
            let value = rng.gen_range(0..1000);
            tree.insert_at(index, value).expect("index in range");
            model.insert(index, value);
        }
        tree.assert_valid().expect("invariants hold at every step");
        assert_eq!(tree.size(), model.len());
        assert_eq!(tree.allocator().live(), model.len());
        if step % 37 == 0 {
            assert_eq!(tree.iter().copied().collect::<Vec<_>>(), model);
        }
    }

    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), model);
    while !model.is_empty() {
        let removed = tree.remove_at(0).expect("index in range");
        assert_eq!(removed, model.remove(0));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.allocator().live(), 0);
}

#[test]
fn randomized_ordered_ops_match_a_sorted_model() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0xBA1A_2CED);
    let mut tree = AvlTree::new();
    let mut model: Vec<i64> = Vec::new();

    for _ in 0..800 {
        if !model.is_empty() && rng.gen_range(0..3) == 0 {
            let value = if rng.gen_bool(0.5) {
                model[rng.gen_range(0..model.len())]
            } else {
                rng.gen_range(0..100)
            };
            match tree.remove_ordered(&value) {
                None => assert!(!model.contains(&value)),
                Some(index) => {
                    assert_eq!(model[index], value);
                    model.remove(index);
                }
            }
        } else {
            let value = rng.gen_range(0..100);
            let index = tree.insert_ordered(value);
            assert_eq!(index, model.partition_point(|x| *x < value));
            model.insert(index, value);
        }
        tree.assert_valid().expect("invariants hold at every step");
        tree.assert_ordered().expect("traversal stays sorted");
        assert_eq!(tree.size(), model.len());
        assert!(tree.height() <= height_bound(tree.size()));
    }

    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), model);
}

#[test]
fn sequential_ordered_insertion_stays_within_the_height_bound() {
    let mut tree = AvlTree::new();
    for value in 1..=1000 {
        tree.insert_ordered(value);
    }
    assert_eq!(tree.size(), 1000);
    assert!(tree.height() <= 11, "height was {}", tree.height());
    assert!(tree.iter().copied().eq(1..=1000));
    tree.assert_valid().expect("invariants hold");
    tree.assert_ordered().expect("sorted");
}

#[test]
fn descending_and_alternating_insertions_stay_balanced() {
    let mut tree = AvlTree::new();
    for value in (1..=500).rev() {
        tree.insert_ordered(value);
    }
    for value in 501..=1000 {
        tree.insert_ordered(value);
    }
    assert_eq!(tree.size(), 1000);
    assert!(tree.iter().copied().eq(1..=1000));
    tree.assert_valid().expect("invariants hold");
}

#[test]
fn merging_inserts_allocate_no_nodes() {
    let mut tree = AvlTree::with_parts(
        default_less::<i64>,
        MergeIfEqual,
        NoAggregate,
        CountingAllocator::new(),
    );
    for value in [1, 2, 2, 3, 1, 1, 3, 3, 3] {
        tree.insert_ordered(value);
    }
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.allocator().allocated, 3);
    assert_eq!(tree.allocator().live(), 3);

    tree.clear();
    assert_eq!(tree.allocator().live(), 0);
    assert_eq!(tree.allocator().reclaimed, 3);
}

#[test]
fn every_removal_reclaims_exactly_one_node() {
    let mut tree = AvlTree::with_parts(
        default_less::<i64>,
        NeverMerge,
        NoAggregate,
        CountingAllocator::new(),
    );
    for value in 0..64 {
        tree.insert_ordered(value);
    }
    assert_eq!(tree.allocator().allocated, 64);
    for value in 0..64 {
        let reclaimed_before = tree.allocator().reclaimed;
        assert!(tree.remove_ordered(&value).is_some());
        assert_eq!(tree.allocator().reclaimed, reclaimed_before + 1);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.allocator().live(), 0);
}
