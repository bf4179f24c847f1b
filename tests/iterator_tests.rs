use ropevec::RopeVec;

#[test]
fn test_iterator_empty_vector() {
    let rope: RopeVec<i32> = RopeVec::new();

    let items: Vec<_> = rope.iter().collect();
    assert_eq!(items.len(), 0);
}

#[test]
fn test_iterator_populated_vector() {
    let rope: RopeVec<i32, 4> = (0..10).collect();

    let items: Vec<_> = rope.iter().copied().collect();
    assert_eq!(items, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_iterator_after_front_growth() {
    let mut rope: RopeVec<i32, 4> = (3..9).collect();
    rope.push_front(2);
    rope.push_front(1);
    rope.insert(1, 100).unwrap();

    let items: Vec<_> = rope.iter().copied().collect();
    assert_eq!(items, [1, 100, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(rope.iter().count(), rope.len());
}

#[test]
fn test_for_loop_syntax() {
    let rope: RopeVec<i32, 4> = (1..=5).collect();

    let mut sum = 0;
    for value in &rope {
        sum += value;
    }
    assert_eq!(sum, 15);
}

#[test]
fn test_iterator_size_hint() {
    let rope: RopeVec<i32, 4> = (0..3).collect();

    let mut iter = rope.iter();
    assert_eq!(iter.size_hint(), (3, Some(3)));
    iter.next();
    assert_eq!(iter.len(), 2);
    iter.next_back();
    assert_eq!(iter.len(), 1);
    iter.next();
    assert_eq!(iter.size_hint(), (0, Some(0)));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iterator_double_ended_meets_in_middle() {
    let rope: RopeVec<i32, 2> = (0..5).collect();

    let mut iter = rope.iter();
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_iterator_nth_and_clone() {
    let rope: RopeVec<i32, 3> = (0..10).collect();

    let mut iter = rope.iter();
    assert_eq!(iter.nth(4), Some(&4));
    let snapshot = iter.clone();
    assert_eq!(iter.next(), Some(&5));
    assert_eq!(snapshot.copied().collect::<Vec<_>>(), [5, 6, 7, 8, 9]);
    assert_eq!(iter.nth(100), None);
}

#[test]
fn test_iter_mut_modifies_in_place() {
    let mut rope: RopeVec<i32, 4> = (4..10).collect();
    rope.push_front(3);
    rope.push_front(2);

    for value in rope.iter_mut() {
        *value *= 10;
    }

    assert_eq!(
        rope.iter().copied().collect::<Vec<_>>(),
        [20, 30, 40, 50, 60, 70, 80, 90]
    );
}

#[test]
fn test_iter_mut_single_chunk_window() {
    let mut rope: RopeVec<i32, 8> = (0..5).collect();
    rope.erase_front().unwrap();
    rope.erase_front().unwrap();

    let items: Vec<_> = rope.iter_mut().map(|value| *value).collect();
    assert_eq!(items, [2, 3, 4]);
    assert_eq!(rope.iter_mut().len(), 3);
}

#[test]
fn test_iter_mut_empty_vector() {
    let mut rope: RopeVec<i32, 4> = RopeVec::new();
    assert_eq!(rope.iter_mut().next(), None);

    rope.push_back(1);
    rope.erase_front().unwrap();
    assert_eq!(rope.iter_mut().next(), None);
    assert_eq!(rope.iter_mut().next_back(), None);
}

#[test]
fn test_iter_mut_double_ended() {
    let mut rope: RopeVec<i32, 3> = (0..10).collect();
    rope.push_front(-1);

    let mut iter = rope.iter_mut();
    assert_eq!(iter.len(), 11);
    *iter.next().unwrap() = 100;
    *iter.next_back().unwrap() = 200;
    let middle: Vec<_> = iter.map(|value| *value).collect();
    assert_eq!(middle, (0..9).collect::<Vec<_>>());

    assert_eq!(rope.front(), Ok(&100));
    assert_eq!(rope.back(), Ok(&200));
}

#[test]
fn test_for_loop_mut_syntax() {
    let mut rope: RopeVec<String, 2> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();

    for value in &mut rope {
        value.push('!');
    }

    assert_eq!(rope[0], "a!");
    assert_eq!(rope[2], "c!");
}

#[test]
fn test_into_iter_consumes_in_order() {
    let mut rope: RopeVec<i32, 4> = (5..12).collect();
    rope.push_front(4);

    let items: Vec<_> = rope.into_iter().collect();
    assert_eq!(items, (4..12).collect::<Vec<_>>());
}

#[test]
fn test_into_iter_both_ends() {
    let rope: RopeVec<i32, 2> = (0..6).collect();

    let mut iter = rope.into_iter();
    assert_eq!(iter.len(), 6);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(5));
    assert_eq!(iter.rev().collect::<Vec<_>>(), [4, 3, 2, 1]);
}

#[test]
fn test_iterator_collect_round_trip() {
    let original: Vec<i32> = (0..1000).map(|i| i * 7 % 13).collect();

    let rope: RopeVec<i32, 16> = original.iter().copied().collect();
    let collected: Vec<i32> = rope.iter().copied().collect();

    assert_eq!(collected, original);
}
