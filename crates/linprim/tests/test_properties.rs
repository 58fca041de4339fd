//! Property-based tests for the algebraic identities of the primitives.

use approx::relative_eq;
use linprim::{Matrix, Permutation, Vector};
use proptest::prelude::*;

fn values(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e3..1.0e3f64, len)
}

fn vector_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (0usize..16).prop_flat_map(|n| (values(n), values(n)))
}

/// A permutation on `0..dim` built from a sequence of transpositions.
fn permutation(dim: usize) -> impl Strategy<Value = Permutation> {
    prop::collection::vec((0..dim, 0..dim), 0..2 * dim).prop_map(move |swaps| {
        let mut p = Permutation::new(dim).unwrap();
        for (i, j) in swaps {
            p.add_cycle(i, j).unwrap();
        }
        p
    })
}

fn vector_with_permutation() -> impl Strategy<Value = (Vec<f64>, Permutation)> {
    (1usize..16).prop_flat_map(|n| (values(n), permutation(n)))
}

type MatrixCase = (usize, usize, Vec<f64>, Permutation, Permutation);

fn matrix_with_permutations() -> impl Strategy<Value = MatrixCase> {
    (1usize..6, 1usize..6).prop_flat_map(|(h, w)| {
        (Just(h), Just(w), values(h * w), permutation(h), permutation(w))
    })
}

fn close(a: &[f64], b: &[f64]) -> bool {
    a.iter()
        .zip(b)
        .all(|(x, y)| relative_eq!(*x, *y, epsilon = 1e-9, max_relative = 1e-12))
}

proptest! {
    #[test]
    fn prop_sum_then_diff_recovers((v, w) in vector_pair()) {
        let v = Vector::from_vec(v);
        let w = Vector::from_vec(w);
        let mut s = Vector::zeros(v.dim());
        s.sum(&v, &w).unwrap();
        let mut d = Vector::zeros(v.dim());
        d.diff(&s, &w).unwrap();
        prop_assert!(close(d.as_slice(), v.as_slice()));
    }

    #[test]
    fn prop_sum_is_commutative((v, w) in vector_pair()) {
        let v = Vector::from_vec(v);
        let w = Vector::from_vec(w);
        let mut a = Vector::zeros(v.dim());
        let mut b = Vector::zeros(v.dim());
        a.sum(&v, &w).unwrap();
        b.sum(&w, &v).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_mult_then_div_recovers(v in (0usize..16).prop_flat_map(values), x in 0.1..100.0f64) {
        let v = Vector::from_vec(v);
        let mut y = Vector::zeros(v.dim());
        y.real_mult(&v, x).unwrap();
        let scaled = y.clone();
        y.real_div(&scaled, x).unwrap();
        prop_assert!(close(y.as_slice(), v.as_slice()));
    }

    #[test]
    fn prop_dot_is_symmetric((v, w) in vector_pair()) {
        let v = Vector::from_vec(v);
        let w = Vector::from_vec(w);
        prop_assert_eq!(v.dot(&w).unwrap(), w.dot(&v).unwrap());
    }

    #[test]
    fn prop_vector_permute_round_trip((data, p) in vector_with_permutation()) {
        let v = Vector::from_vec(data);
        let mut y = Vector::zeros(v.dim());
        y.permute(&v, &p).unwrap();
        let mut back = Vector::zeros(v.dim());
        back.permute_back(&y, &p).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn prop_permute_back_matches_inverse((data, p) in vector_with_permutation()) {
        let v = Vector::from_vec(data);
        let mut a = Vector::zeros(v.dim());
        let mut b = Vector::zeros(v.dim());
        a.permute_back(&v, &p).unwrap();
        b.permute(&v, &p.inverse()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_matrix_permute_round_trip((h, w, data, rows, cols) in matrix_with_permutations()) {
        let a = Matrix::from_vec(h, w, data).unwrap();
        let mut b = Matrix::zeros(h, w);
        b.permute(&a, &rows, &cols).unwrap();
        let mut back = Matrix::zeros(h, w);
        back.permute_back(&b, &rows, &cols).unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn prop_transposition_is_self_inverse(dim in 1usize..12, i in 0usize..12, j in 0usize..12) {
        let (i, j) = (i % dim, j % dim);
        let mut p = Permutation::new(dim).unwrap();
        p.add_cycle(i, j).unwrap();
        p.add_cycle(i, j).unwrap();
        prop_assert!(p.is_identity());
    }

    #[test]
    fn prop_clone_is_deep(data in (1usize..16).prop_flat_map(values)) {
        let mut raw = data.clone();
        let mut v = Vector::from_slice_mut(&mut raw);
        let copy = v.clone();
        v.fill(0.5);
        prop_assert!(!copy.is_borrowed());
        prop_assert_eq!(copy.as_slice(), data.as_slice());
    }

    #[test]
    fn prop_matrix_mult_is_linear(
        (h, w, data, _rows, _cols) in matrix_with_permutations(),
        x in -10.0..10.0f64
    ) {
        let a = Matrix::from_vec(h, w, data).unwrap();
        let v: Vector = (0..w).map(|k| k as f64 - 1.5).collect();
        let mut av = Vector::zeros(h);
        av.matrix_mult(&a, &v).unwrap();

        let mut xv = Vector::zeros(w);
        xv.real_mult(&v, x).unwrap();
        let mut axv = Vector::zeros(h);
        axv.matrix_mult(&a, &xv).unwrap();

        av *= x;
        prop_assert!(close(axv.as_slice(), av.as_slice()));
    }
}
