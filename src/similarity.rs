//! Vector similarity helpers
//!
//! Cosine similarity and normalization over fixed-length numeric vectors.
//! Pure functions, independent of the graph animator; consumed ad hoc by
//! "similar item" demo surfaces. Degenerate inputs surface as explicit
//! errors rather than a misleading number.

use thiserror::Error;

/// Errors from the similarity helpers.
#[derive(Error, Debug, PartialEq)]
pub enum SimilarityError {
    /// The two vectors have different lengths
    #[error("vector length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A vector with Euclidean norm zero has no direction
    #[error("zero-norm vector has no direction")]
    ZeroNorm,
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm(v: &[f32]) -> f32 {
    dot(v, v).sqrt()
}

/// Scale a vector to unit Euclidean norm.
///
/// Errors with [`SimilarityError::ZeroNorm`] when the input's norm is
/// exactly zero; a zero vector is never silently returned.
pub fn normalize(v: &[f32]) -> Result<Vec<f32>, SimilarityError> {
    let n = norm(v);
    if n == 0.0 {
        return Err(SimilarityError::ZeroNorm);
    }
    Ok(v.iter().map(|x| x / n).collect())
}

/// Cosine of the angle between two equal-length vectors, in [-1, 1].
///
/// 1 means identical direction, -1 opposite, 0 orthogonal. Errors on
/// mismatched lengths and on a zero-norm input.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let (norm_a, norm_b) = (norm(a), norm(b));
    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(SimilarityError::ZeroNorm);
    }

    Ok((dot(a, b) / (norm_a * norm_b)).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-6;

    #[test]
    fn identical_vectors_have_similarity_one() {
        let v = [0.3, -1.2, 4.0, 0.5];
        let score = cosine_similarity(&v, &v).unwrap();
        assert!((score - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn opposite_vectors_have_similarity_negative_one() {
        let v = [1.0, 2.0, 3.0];
        let negated: Vec<f32> = v.iter().map(|x| -x).collect();
        let score = cosine_similarity(&v, &negated).unwrap();
        assert!((score + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn orthogonal_vectors_have_similarity_zero() {
        let score = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(score.abs() < TOLERANCE);
    }

    #[test]
    fn similarity_is_scale_invariant() {
        let a = [1.0, 2.0, 3.0];
        let scaled = [10.0, 20.0, 30.0];
        let score = cosine_similarity(&a, &scaled).unwrap();
        assert!((score - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn mismatched_lengths_error() {
        let result = cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
        assert_eq!(
            result,
            Err(SimilarityError::LengthMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn zero_vector_similarity_errors() {
        let result = cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]);
        assert_eq!(result, Err(SimilarityError::ZeroNorm));
    }

    #[test]
    fn normalize_yields_unit_norm() {
        let unit = normalize(&[3.0, 4.0]).unwrap();
        let n: f32 = unit.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((n - 1.0).abs() < TOLERANCE);
        assert!((unit[0] - 0.6).abs() < TOLERANCE);
        assert!((unit[1] - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize(&[0.2, -5.0, 1.7]).unwrap();
        let twice = normalize(&once).unwrap();
        for (a, b) in once.iter().zip(&twice) {
            assert!((a - b).abs() < TOLERANCE);
        }
    }

    #[test]
    fn normalize_zero_vector_errors() {
        assert_eq!(normalize(&[0.0, 0.0, 0.0]), Err(SimilarityError::ZeroNorm));
    }
}
