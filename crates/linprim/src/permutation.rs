//! Index permutations built from transpositions.

use std::fmt;

use crate::error::{LinalgError, Result, ensure_index};

/// A bijective reordering of the indices `0..dim`.
///
/// A fresh permutation is the identity. The only mutator is
/// [`add_cycle`](Permutation::add_cycle), which swaps two images, so the
/// mapping stays a bijection for the whole lifetime of the value.
///
/// # Examples
///
/// ```
/// use linprim::Permutation;
///
/// let mut p = Permutation::new(4).unwrap();
/// p.add_cycle(0, 2).unwrap().add_cycle(2, 3).unwrap();
/// assert_eq!(p.as_slice(), &[2, 1, 3, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Permutation {
    map: Vec<usize>,
}

impl Permutation {
    /// Create the identity permutation on `0..dim`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::InvalidArgument` if `dim == 0`.
    pub fn new(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(LinalgError::InvalidArgument {
                reason: "permutation dimension must be positive",
            });
        }
        Ok(Self {
            map: (0..dim).collect(),
        })
    }

    /// Create a permutation from its mapping: `map[i]` is the image of `i`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::InvalidArgument` if `map` is empty or is not a
    /// bijection on `0..map.len()`.
    pub fn from_map(map: Vec<usize>) -> Result<Self> {
        if map.is_empty() {
            return Err(LinalgError::InvalidArgument {
                reason: "permutation dimension must be positive",
            });
        }
        let mut seen = vec![false; map.len()];
        for &image in &map {
            if image >= map.len() || seen[image] {
                return Err(LinalgError::InvalidArgument {
                    reason: "mapping is not a bijection",
                });
            }
            seen[image] = true;
        }
        Ok(Self { map })
    }

    /// Number of indices permuted.
    #[inline]
    pub fn dim(&self) -> usize {
        self.map.len()
    }

    /// Image of `n`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfRange` if `n >= dim`.
    #[inline]
    pub fn get(&self, n: usize) -> Result<usize> {
        ensure_index(n, self.dim())?;
        Ok(self.map[n])
    }

    /// The mapping as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }

    /// Swap the images of `i` and `j`.
    ///
    /// This is a single transposition. Longer cycles are built by chaining
    /// calls: `p.add_cycle(0, 1)?.add_cycle(1, 2)?`.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::IndexOutOfRange` if either index is `>= dim`;
    /// the mapping is left unchanged.
    pub fn add_cycle(&mut self, i: usize, j: usize) -> Result<&mut Self> {
        ensure_index(i, self.dim())?;
        ensure_index(j, self.dim())?;
        self.map.swap(i, j);
        Ok(self)
    }

    /// The inverse permutation: `p.inverse()[p[i]] == i`.
    pub fn inverse(&self) -> Self {
        let mut inv = vec![0; self.dim()];
        for (i, &image) in self.map.iter().enumerate() {
            inv[image] = i;
        }
        Self { map: inv }
    }

    /// Check whether every index maps to itself.
    pub fn is_identity(&self) -> bool {
        self.map.iter().enumerate().all(|(i, &image)| i == image)
    }
}

impl std::ops::Index<usize> for Permutation {
    type Output = usize;

    #[inline]
    fn index(&self, n: usize) -> &usize {
        &self.map[n]
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = LinalgError;

    fn try_from(map: Vec<usize>) -> Result<Self> {
        Self::from_map(map)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(p: Permutation) -> Self {
        p.map
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, image) in self.map.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{image}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_identity() {
        let p = Permutation::new(5).unwrap();
        assert_eq!(p.dim(), 5);
        assert!(p.is_identity());
        for i in 0..5 {
            assert_eq!(p[i], i);
            assert_eq!(p.get(i), Ok(i));
        }
    }

    #[test]
    fn test_new_zero_dim() {
        assert!(matches!(
            Permutation::new(0),
            Err(LinalgError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_get_out_of_range() {
        let p = Permutation::new(3).unwrap();
        assert_eq!(
            p.get(3),
            Err(LinalgError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_add_cycle_is_transposition() {
        let mut p = Permutation::new(4).unwrap();
        p.add_cycle(1, 3).unwrap();
        assert_eq!(p.as_slice(), &[0, 3, 2, 1]);
        assert!(!p.is_identity());
    }

    #[test]
    fn test_add_cycle_twice_restores() {
        let mut p = Permutation::new(4).unwrap();
        p.add_cycle(0, 1).unwrap();
        let before = p.clone();
        p.add_cycle(2, 3).unwrap().add_cycle(2, 3).unwrap();
        assert_eq!(p, before);
    }

    #[test]
    fn test_add_cycle_composes_longer_cycles() {
        // 0 -> 1 -> 2 -> 0 from two transpositions
        let mut p = Permutation::new(3).unwrap();
        p.add_cycle(0, 1).unwrap().add_cycle(1, 2).unwrap();
        assert_eq!(p.as_slice(), &[1, 2, 0]);
    }

    #[test]
    fn test_add_cycle_same_index() {
        let mut p = Permutation::new(2).unwrap();
        p.add_cycle(1, 1).unwrap();
        assert!(p.is_identity());
    }

    #[test]
    fn test_add_cycle_out_of_range_leaves_mapping() {
        let mut p = Permutation::new(3).unwrap();
        p.add_cycle(0, 2).unwrap();
        assert!(p.add_cycle(1, 3).is_err());
        assert_eq!(p.as_slice(), &[2, 1, 0]);
    }

    #[test]
    fn test_clone_is_independent() {
        let p = Permutation::new(3).unwrap();
        let mut q = p.clone();
        q.add_cycle(0, 2).unwrap();
        assert!(p.is_identity());
        assert_eq!(q.as_slice(), &[2, 1, 0]);
    }

    #[test]
    fn test_from_map() {
        let p = Permutation::from_map(vec![2, 0, 1]).unwrap();
        assert_eq!(p[0], 2);
        assert!(Permutation::from_map(vec![0, 0, 1]).is_err());
        assert!(Permutation::from_map(vec![0, 3, 1]).is_err());
        assert!(Permutation::from_map(vec![]).is_err());
    }

    #[test]
    fn test_inverse() {
        let p = Permutation::from_map(vec![2, 0, 3, 1]).unwrap();
        let inv = p.inverse();
        for i in 0..4 {
            assert_eq!(inv[p[i]], i);
        }
    }

    #[test]
    fn test_display() {
        let p = Permutation::from_map(vec![1, 0, 2]).unwrap();
        assert_eq!(p.to_string(), "(1 0 2)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_non_bijection() {
        let p: Permutation = serde_json::from_str("[1,0,2]").unwrap();
        assert_eq!(p.as_slice(), &[1, 0, 2]);
        assert_eq!(serde_json::to_string(&p).unwrap(), "[1,0,2]");
        assert!(serde_json::from_str::<Permutation>("[1,1]").is_err());
    }
}
