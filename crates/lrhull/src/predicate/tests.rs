use super::*;
use nalgebra::vector;
use proptest::prelude::*;

/// r, q, p with the naive predicate reporting the wrong sign.
fn flipped_triple() -> (Point, Point, Point) {
    let ulp = f64::EPSILON / 2.0;
    (
        vector![0.5 + 48.0 * ulp, 0.5 + 9.0 * ulp],
        vector![12.0, 12.0],
        vector![24.0, 24.0 + 16.0 * f64::EPSILON],
    )
}

fn exact_sign(r: (i64, i64), q: (i64, i64), p: (i64, i64)) -> i8 {
    let v = (p.0 - r.0) as i128 * (q.1 - r.1) as i128 - (p.1 - r.1) as i128 * (q.0 - r.0) as i128;
    v.signum() as i8
}

#[test]
fn screen_space_convention() {
    let o = vector![0.0, 0.0];
    let x = vector![1.0, 0.0];
    let y = vector![0.0, 1.0];
    // (0,0),(1,0),(0,1) turns counter-clockwise on paper but clockwise on a
    // y-down screen, so the value is negative.
    assert_eq!(naive_orient(&o, &x, &y), -1.0);
    assert_eq!(Robust.orientation(&o, &x, &y), Some(Orientation::Right));
    assert_eq!(Robust.orientation(&x, &o, &y), Some(Orientation::Left));
    assert_eq!(
        Naive.orientation(&o, &x, &vector![2.0, 0.0]),
        Some(Orientation::Collinear)
    );
}

#[test]
fn naive_and_robust_agree_on_well_conditioned_input() {
    let r = vector![0.25, -1.5];
    let q = vector![3.0, 2.0];
    for p in [vector![-4.0, 7.5], vector![10.0, 0.125], vector![1.0, 1.0]] {
        assert_eq!(
            Naive.orientation(&r, &q, &p),
            Robust.orientation(&r, &q, &p)
        );
        assert!((Naive.orient(&r, &q, &p) - Robust.orient(&r, &q, &p)).abs() < 1e-9);
    }
}

#[test]
fn naive_sign_flips_near_collinear() {
    let (r, q, p) = flipped_triple();
    assert_eq!(Naive.orientation(&r, &q, &p), Some(Orientation::Right));
    assert_eq!(Robust.orientation(&r, &q, &p), Some(Orientation::Left));
}

#[test]
fn robust_sign_is_stable_under_power_of_two_scaling() {
    let (r, q, p) = flipped_triple();
    for k in [-30, -3, 1, 4, 10, 200] {
        let s = 2f64.powi(k);
        let (rs, qs, ps) = (r * s, q * s, p * s);
        assert_eq!(
            Robust.orientation(&rs, &qs, &ps),
            Some(Orientation::Left),
            "scale 2^{k}"
        );
        // Scaling is exact, so the naive error scales along with the input.
        assert_eq!(Naive.orientation(&rs, &qs, &ps), Some(Orientation::Right));
    }
}

#[test]
fn naive_misses_sign_after_translation() {
    let (r, q, p) = flipped_triple();
    let t = vector![1.0, 1.0];
    assert_eq!(
        Naive.orientation(&(r + t), &(q + t), &(p + t)),
        Some(Orientation::Collinear)
    );
    assert_eq!(
        Robust.orientation(&(r + t), &(q + t), &(p + t)),
        Some(Orientation::Left)
    );
}

#[test]
fn exactly_collinear_triples_are_zero() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 1e-17];
    let c = vector![2.0, 2e-17];
    assert_eq!(Robust.orient(&a, &b, &c), 0.0);
    assert_eq!(Naive.orient(&a, &b, &c), 0.0);
}

#[test]
fn closures_and_kinds_are_predicates() {
    let count = std::cell::Cell::new(0usize);
    let counting = |r: &Point, q: &Point, p: &Point| {
        count.set(count.get() + 1);
        naive_orient(r, q, p)
    };
    let (r, q, p) = (vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]);
    assert_eq!(counting.orientation(&r, &q, &p), Some(Orientation::Right));
    assert_eq!(count.get(), 1);
    assert_eq!(PredicateKind::Naive.orient(&r, &q, &p), -1.0);
    assert!(PredicateKind::Robust.orient(&r, &q, &p) < 0.0);
    let nan = |_: &Point, _: &Point, _: &Point| f64::NAN;
    assert_eq!(nan.orientation(&r, &q, &p), None);
}

#[test]
fn predicate_kind_parses_and_displays() {
    assert_eq!("naive".parse::<PredicateKind>(), Ok(PredicateKind::Naive));
    assert_eq!(" Robust ".parse::<PredicateKind>(), Ok(PredicateKind::Robust));
    assert_eq!("exact".parse::<PredicateKind>(), Ok(PredicateKind::Robust));
    assert_eq!("fragile".parse::<PredicateKind>(), Ok(PredicateKind::Naive));
    let err = "adaptive".parse::<PredicateKind>().unwrap_err();
    assert!(err.to_string().contains("adaptive"));
    for kind in PredicateKind::ALL {
        assert_eq!(kind.to_string().parse::<PredicateKind>(), Ok(kind));
    }
    assert_eq!(PredicateKind::default(), PredicateKind::Robust);
}

proptest! {
    #[test]
    fn robust_matches_exact_integer_sign(
        ax in -(1i64 << 26)..(1i64 << 26), ay in -(1i64 << 26)..(1i64 << 26),
        bx in -(1i64 << 26)..(1i64 << 26), by in -(1i64 << 26)..(1i64 << 26),
        k in -4i64..5, d in -1i64..=1, e in -1i64..=1,
    ) {
        // p = a + k (b - a) + (d, e): exactly or nearly collinear with a→b.
        let r = (ax, ay);
        let q = (bx, by);
        let p = (ax + k * (bx - ax) + d, ay + k * (by - ay) + e);
        // 2^-40 scaling keeps every coordinate exact and pushes magnitudes below 1.
        let s = 2f64.powi(-40);
        let f = |c: (i64, i64)| vector![c.0 as f64 * s, c.1 as f64 * s];
        let got = Robust.orientation(&f(r), &f(q), &f(p)).map(Orientation::signum);
        prop_assert_eq!(got, Some(exact_sign(r, q, p)));
    }

    #[test]
    fn robust_sign_is_cyclic_and_antisymmetric(
        xs in proptest::array::uniform6(-1.0e3f64..1.0e3),
        t in 1e-12f64..1.0,
    ) {
        let r = vector![xs[0], xs[1]];
        let q = vector![xs[2], xs[3]];
        // Third point close to the segment r→q.
        let p = r + (q - r) * t + vector![xs[4], xs[5]] * 1e-15;
        let s = Robust.orientation(&r, &q, &p).map(Orientation::signum);
        prop_assert_eq!(s, Robust.orientation(&q, &p, &r).map(Orientation::signum));
        prop_assert_eq!(s, Robust.orientation(&p, &r, &q).map(Orientation::signum));
        prop_assert_eq!(s.map(|v| -v), Robust.orientation(&q, &r, &p).map(Orientation::signum));
    }
}
