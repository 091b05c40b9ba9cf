use inkpad::draw::line::line_points;
use inkpad::draw::model::Point;

fn collect(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    line_points(Point::new(x0, y0), Point::new(x1, y1))
        .map(|p| (p.x, p.y))
        .collect()
}

#[test]
fn reference_cases_match_exactly() {
    assert_eq!(collect(5, 5, 5, 5), vec![(5, 5)]);
    assert_eq!(
        collect(0, 0, 4, 0),
        vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]
    );
    assert_eq!(collect(0, 0, 3, 3), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);

    let shallow = collect(0, 0, 4, 2);
    assert_eq!(shallow.len(), 5);
    for (i, &(x, _)) in shallow.iter().enumerate() {
        assert_eq!(x, i as i32);
    }
    let ys: Vec<i32> = shallow.iter().map(|&(_, y)| y).collect();
    assert!(ys.windows(2).all(|w| w[1] - w[0] == 0 || w[1] - w[0] == 1));
    assert_eq!(ys.first(), Some(&0));
    assert_eq!(ys.last(), Some(&2));
}

// Sweep every segment with endpoints in a small grid and check the whole
// contract: point count, endpoints, 8-connectivity, per-axis monotonicity,
// and exact reversal.
#[test]
fn contract_holds_for_all_small_segments() {
    let range = -6..=6i32;
    for x1 in range.clone() {
        for y1 in range.clone() {
            let points = collect(0, 0, x1, y1);
            let expected_len = x1.abs().max(y1.abs()) as usize + 1;
            assert_eq!(points.len(), expected_len, "len of (0,0)->({x1},{y1})");
            assert_eq!(points.first(), Some(&(0, 0)));
            assert_eq!(points.last(), Some(&(x1, y1)));

            for pair in points.windows(2) {
                let dx = pair[1].0 - pair[0].0;
                let dy = pair[1].1 - pair[0].1;
                assert!(dx.abs() <= 1 && dy.abs() <= 1, "gap in (0,0)->({x1},{y1})");
                assert!(dx * x1.signum() >= 0, "x backtracks in (0,0)->({x1},{y1})");
                assert!(dy * y1.signum() >= 0, "y backtracks in (0,0)->({x1},{y1})");
            }

            let mut backward = collect(x1, y1, 0, 0);
            backward.reverse();
            assert_eq!(points, backward, "reversal of (0,0)->({x1},{y1})");
        }
    }
}

#[test]
fn iterator_length_is_known_up_front() {
    let iter = line_points(Point::new(-3, 2), Point::new(9, -1));
    assert_eq!(iter.len(), 13);
    assert_eq!(iter.count(), 13);
}

#[test]
fn repeated_calls_are_deterministic() {
    let first = collect(-17, 4, 23, -9);
    let second = collect(-17, 4, 23, -9);
    assert_eq!(first, second);
}
