use ropevec::RopeVec;

#[test]
fn test_cursor_dereference() {
    let rope: RopeVec<i32, 4> = (0..10).collect();

    let cursor = rope.cursor(3);
    assert_eq!(cursor.index(), 3);
    assert_eq!(cursor.get(), Some(&3));
    assert_eq!(rope.cursor(10).get(), None);
}

#[test]
fn test_cursor_offset_arithmetic() {
    let rope: RopeVec<i32, 4> = (0..10).collect();
    let begin = rope.cursor(0);

    let mut cursor = begin + 7;
    assert_eq!(cursor.get(), Some(&7));
    cursor -= 2;
    assert_eq!(cursor.get(), Some(&5));
    cursor += -5;
    assert_eq!(cursor, begin);
    assert_eq!((begin + 9 - 4_isize).get(), Some(&5));
}

#[test]
fn test_cursor_difference_and_ordering() {
    let rope: RopeVec<i32, 4> = (0..10).collect();
    let begin = rope.cursor(0);
    let end = rope.cursor(rope.len());

    assert_eq!(end - begin, 10);
    assert_eq!(begin - end, -10);
    assert!(begin < end);
    assert!(end >= begin);
    assert!(begin <= begin);
    assert_ne!(begin, end);
}

#[test]
fn test_cursor_walk_forward_and_back() {
    let rope: RopeVec<i32, 3> = (0..7).collect();

    let mut cursor = rope.cursor(0);
    let mut forward = Vec::new();
    while let Some(value) = cursor.get() {
        forward.push(*value);
        cursor.move_next();
    }
    assert_eq!(forward, (0..7).collect::<Vec<_>>());

    let mut backward = Vec::new();
    cursor.move_prev();
    while let Some(value) = cursor.get() {
        backward.push(*value);
        cursor.move_prev();
    }
    assert_eq!(backward, (0..7).rev().collect::<Vec<_>>());
}

#[test]
fn test_cursor_peek() {
    let rope: RopeVec<i32, 4> = (0..5).collect();
    let cursor = rope.cursor(2);

    assert_eq!(cursor.peek(0), Some(&2));
    assert_eq!(cursor.peek(2), Some(&4));
    assert_eq!(cursor.peek(-2), Some(&0));
    assert_eq!(cursor.peek(-3), None);
    assert_eq!(cursor.peek(3), None);
}

#[test]
fn test_cursors_of_different_containers() {
    let a: RopeVec<i32, 4> = (0..3).collect();
    let b: RopeVec<i32, 4> = (0..3).collect();

    assert_ne!(a.cursor(1), b.cursor(1));
    assert_eq!(a.cursor(1).partial_cmp(&b.cursor(2)), None);
    assert_eq!(a.cursor(1), a.cursor(1));
}

#[test]
fn test_cursor_mut_edit_and_move() {
    let mut rope: RopeVec<i32, 4> = (0..6).collect();

    {
        let mut cursor = rope.cursor_mut(1);
        *cursor.get_mut().unwrap() = 10;
        cursor.move_next();
        *cursor.get_mut().unwrap() = 20;
        cursor.seek(3);
        assert_eq!(cursor.index(), 5);
        assert_eq!(cursor.get(), Some(&5));
        cursor.move_prev();
        assert_eq!(cursor.as_cursor().get(), Some(&4));
        cursor.seek(10);
        assert!(cursor.get_mut().is_none());
    }

    assert_eq!(rope.iter().copied().collect::<Vec<_>>(), [0, 10, 20, 3, 4, 5]);
}

#[test]
fn test_cursor_mut_survives_back_growth() {
    let mut rope: RopeVec<i32, 4> = (0..6).collect();
    let mut cursor = rope.cursor_mut(4);

    for value in 6..100 {
        cursor.container().push_back(value);
    }
    cursor.container().reserve(1000);

    assert_eq!(cursor.get(), Some(&4));
    *cursor.get_mut().unwrap() = -4;
    assert_eq!(rope[4], -4);
    assert_eq!(rope.len(), 100);
}

#[test]
fn test_cursor_mut_after_front_growth_tracks_index() {
    let mut rope: RopeVec<i32, 4> = (0..4).collect();
    let mut cursor = rope.cursor_mut(2);

    // front growth renumbers elements; the cursor stays on logical index 2
    cursor.container().push_front(-1);
    assert_eq!(cursor.get(), Some(&1));
    cursor.move_next();
    assert_eq!(cursor.get(), Some(&2));
}

#[test]
fn test_cursor_copy_semantics() {
    let rope: RopeVec<i32, 4> = (0..4).collect();
    let mut a = rope.cursor(0);
    let b = a;

    a.move_next();
    assert_eq!(a.get(), Some(&1));
    assert_eq!(b.get(), Some(&0));
    assert_eq!(format!("{b:?}"), "Cursor { index: 0 }");
}

#[test]
fn test_cursor_mut_offset_arithmetic() {
    let mut rope: RopeVec<i32, 4> = (0..8).collect();

    let mut cursor = rope.cursor_mut(0);
    cursor += 3;
    assert_eq!(cursor.get(), Some(&3));
    cursor -= 1;
    assert_eq!(cursor.index(), 2);

    let mut cursor = cursor + 4;
    *cursor.get_mut().unwrap() = 60;
    let cursor = cursor - 6;
    assert_eq!(cursor.get(), Some(&0));
    assert_eq!(cursor.as_cursor() - cursor.as_cursor(), 0);

    assert_eq!(rope[6], 60);
}

#[test]
fn test_rev_cursor_dereference() {
    let rope: RopeVec<i32, 4> = (0..10).collect();

    let rbegin = rope.rev_cursor(0);
    assert_eq!(rbegin.position(), 0);
    assert_eq!(rbegin.get(), Some(&9));
    assert_eq!(rope.rev_cursor(9).get(), Some(&0));
    assert_eq!(rope.rev_cursor(10).get(), None);
}

#[test]
fn test_rev_cursor_offset_arithmetic() {
    let mut rope: RopeVec<i32, 4> = (1..10).collect();
    rope.push_front(0);
    let rbegin = rope.rev_cursor(0);

    let mut cursor = rbegin + 3;
    assert_eq!(cursor.get(), Some(&6));
    cursor -= 2;
    assert_eq!(cursor.get(), Some(&8));
    cursor += -1;
    assert_eq!(cursor, rbegin);
    assert_eq!((rbegin + 9 - 4_isize).get(), Some(&4));
    assert_eq!(rbegin.peek(2), Some(&7));
    assert_eq!(rbegin.peek(-1), None);
}

#[test]
fn test_rev_cursor_difference_and_ordering() {
    let rope: RopeVec<i32, 4> = (0..10).collect();
    let rbegin = rope.rev_cursor(0);
    let rend = rope.rev_cursor(rope.len());

    assert_eq!(rend - rbegin, 10);
    assert_eq!(rbegin - rend, -10);
    assert!(rbegin < rend);
    assert!(rope.rev_cursor(2) > rope.rev_cursor(1));
    assert_ne!(rbegin, rend);

    let other: RopeVec<i32, 4> = (0..10).collect();
    assert_eq!(rbegin.partial_cmp(&other.rev_cursor(0)), None);
}

#[test]
fn test_rev_cursor_walk_matches_reverse_iteration() {
    let rope: RopeVec<i32, 3> = (0..7).collect();

    let mut cursor = rope.rev_cursor(0);
    let mut walked = Vec::new();
    while let Some(value) = cursor.get() {
        walked.push(*value);
        cursor.move_next();
    }
    assert_eq!(walked, rope.iter_rev().copied().collect::<Vec<_>>());

    cursor.move_prev();
    assert_eq!(cursor.get(), Some(&0));
}

#[test]
fn test_rev_cursor_base() {
    let rope: RopeVec<i32, 4> = (0..10).collect();

    assert_eq!(rope.rev_cursor(0).base(), rope.cursor(10));
    assert_eq!(rope.rev_cursor(10).base(), rope.cursor(0));
    // the base sits one past the reverse cursor's element
    assert_eq!(rope.rev_cursor(3).get(), Some(&6));
    assert_eq!(rope.rev_cursor(3).base().get(), Some(&7));
}

#[test]
fn test_rev_cursor_mut_edit_and_move() {
    let mut rope: RopeVec<i32, 4> = (0..6).collect();

    {
        let mut cursor = rope.rev_cursor_mut(0);
        *cursor.get_mut().unwrap() = 50;
        cursor += 2;
        *cursor.get_mut().unwrap() = 30;
        cursor.move_next();
        assert_eq!(cursor.get(), Some(&2));
        let mut cursor = cursor - 3;
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.as_rev_cursor().get(), Some(&50));
        cursor.seek(6);
        assert!(cursor.get_mut().is_none());
    }

    assert_eq!(rope.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 30, 4, 50]);
}

#[test]
fn test_rev_cursor_mut_keeps_position_across_front_growth() {
    let mut rope: RopeVec<i32, 4> = (0..4).collect();
    let mut cursor = rope.rev_cursor_mut(1);

    for value in 1..10 {
        cursor.container().push_front(-value);
    }

    assert_eq!(cursor.get(), Some(&2));
    assert_eq!(rope.len(), 13);
}
