use crate::lookup::Lattice;
use crate::segment::Segment;
use crate::tests::fixtures::sorted;

/// 「사과를」のテンプレート組み合わせ直後のラティス
fn sagwareul_lattice(offset: usize) -> Lattice {
    let mut lattice = Lattice::new(3, offset);
    for seg in [
        Segment::single("사", "Noun", 0, 1),
        Segment::pair("사", "과", "Noun", "Josa", 0, 1, 2),
        Segment::single("사과", "Noun", 0, 2),
        Segment::pair("사과", "를", "Noun", "Josa", 0, 2, 3),
    ] {
        lattice.push(seg.shifted(offset));
    }
    lattice
}

#[test]
fn test_remove_prefix_of_resolvable_pair() {
    let mut lattice = Lattice::new(2, 0);
    lattice.push(Segment::single("밥", "Noun", 0, 1));
    lattice.push(Segment::pair("밥", "을", "Noun", "Josa", 0, 1, 2));
    lattice.remove_subsumed();

    assert_eq!(lattice.num_segments(), 1);
    assert_eq!(lattice.bucket(0)[0].to_string(), "밥/Noun + 을/Josa");
}

#[test]
fn test_same_bucket_does_not_overlap() {
    let mut lattice = sagwareul_lattice(0);
    lattice.remove_subsumed();

    // 사과/를 starts at the same position as 사/과, so both pairs are open
    // and drop their one-part prefixes.
    assert_eq!(
        sorted(lattice.into_segments()),
        [
            "0..1..2 사/Noun + 과/Josa",
            "0..2..3 사과/Noun + 를/Josa",
        ]
    );
}

#[test]
fn test_remove_shorter_right_part() {
    let mut lattice = Lattice::new(4, 0);
    lattice.push(Segment::single("학교", "Noun", 0, 2));
    lattice.push(Segment::pair("학교", "에", "Noun", "Josa", 0, 2, 3));
    lattice.push(Segment::pair("학교", "에서", "Noun", "Josa", 0, 2, 4));
    lattice.remove_subsumed();

    assert_eq!(
        sorted(lattice.into_segments()),
        ["0..2..4 학교/Noun + 에서/Josa"]
    );
}

#[test]
fn test_different_right_tag_is_kept() {
    let mut lattice = Lattice::new(4, 0);
    lattice.push(Segment::pair("학교", "에", "Noun", "Josa", 0, 2, 3));
    lattice.push(Segment::pair("학교", "에서", "Noun", "Adverb", 0, 2, 4));
    lattice.remove_subsumed();

    assert_eq!(lattice.num_segments(), 2);
}

#[test]
fn test_straddling_segment_from_another_bucket() {
    let mut lattice = Lattice::new(3, 0);
    lattice.push(Segment::single("가", "Noun", 0, 1));
    lattice.push(Segment::pair("가", "나다", "Noun", "Josa", 0, 1, 3));
    lattice.push(Segment::single("나", "Noun", 1, 2));
    lattice.push(Segment::pair("나", "다", "Noun", "Josa", 1, 2, 3));
    lattice.remove_subsumed();

    // 나 and 나/다 start inside the right part of 가/나다, so 가/나다 stays
    // ambiguous and the single 가 is kept. 나/다 is open and drops the single 나.
    assert_eq!(
        sorted(lattice.into_segments()),
        [
            "0..1..1 가/Noun",
            "0..1..3 가/Noun + 나다/Josa",
            "1..2..3 나/Noun + 다/Josa",
        ]
    );
}

#[test]
fn test_straddling_segment_from_earlier_bucket() {
    // 가나 ends at the boundary of 나/다, which is still open.
    let mut lattice = Lattice::new(3, 0);
    lattice.push(Segment::single("가나", "Noun", 0, 2));
    lattice.push(Segment::single("나", "Noun", 1, 2));
    lattice.push(Segment::pair("나", "다", "Noun", "Josa", 1, 2, 3));
    lattice.remove_subsumed();
    assert_eq!(lattice.num_segments(), 2);
    assert!(lattice.bucket(1).iter().all(|s| !s.is_single()));

    // 가나다 begins before the right part of 나/다 and covers it.
    let mut lattice = Lattice::new(3, 0);
    lattice.push(Segment::single("가나다", "Noun", 0, 3));
    lattice.push(Segment::single("나", "Noun", 1, 2));
    lattice.push(Segment::pair("나", "다", "Noun", "Josa", 1, 2, 3));
    lattice.remove_subsumed();
    assert_eq!(lattice.num_segments(), 3);
}

#[test]
fn test_idempotent() {
    for offset in [0, 7] {
        let mut lattice = sagwareul_lattice(offset);
        lattice.remove_subsumed();
        let once = lattice.clone();
        lattice.remove_subsumed();
        assert_eq!(lattice, once);
    }
}

#[test]
fn test_offset() {
    let mut lattice = sagwareul_lattice(10);
    lattice.remove_subsumed();
    assert_eq!(lattice.offset(), 10);
    assert_eq!(lattice.bucket(0).len(), 2);
    assert!(lattice.bucket(1).is_empty());
    assert!(lattice.iter().all(|s| s.begin() == 10));
}
