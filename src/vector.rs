//! Elementary vector arithmetic over ragged `f64` slices.
//!
//! Monzos of different lengths are compared as if the shorter one were
//! zero-extended on the right. Every routine here pads explicitly first,
//! so none of them index past the end of an input.

/// Copy `vector`, zero-extended or truncated to exactly `len` entries.
pub fn resize(vector: &[f64], len: usize) -> Vec<f64> {
    let mut out: Vec<f64> = vector.iter().copied().take(len).collect();
    out.resize(len, 0.0);
    out
}

/// Zero-extend both vectors to their common length.
pub fn pad_pair(a: &[f64], b: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let len = a.len().max(b.len());
    (resize(a, len), resize(b, len))
}

/// Dot product. Missing coefficients count as zero.
pub fn dot(vector: &[f64], coefficients: &[f64]) -> f64 {
    vector
        .iter()
        .zip(coefficients)
        .map(|(v, c)| v * c)
        .sum()
}

/// Element-wise `a - b` over the padded union of both lengths.
pub fn sub(a: &[f64], b: &[f64]) -> Vec<f64> {
    let (a, b) = pad_pair(a, b);
    a.iter().zip(&b).map(|(x, y)| x - y).collect()
}

/// Element-wise negation.
pub fn negate(vector: &[f64]) -> Vec<f64> {
    vector.iter().map(|x| -x).collect()
}

/// Exact equality after zero-extension. No tolerance is applied.
pub fn vectors_equal(a: &[f64], b: &[f64]) -> bool {
    let (a, b) = pad_pair(a, b);
    a == b
}

/// Mathematical modulo: the result always lies in `[0, m)` for `m > 0`.
pub fn mmod(x: i64, m: i64) -> i64 {
    x.rem_euclid(m)
}
