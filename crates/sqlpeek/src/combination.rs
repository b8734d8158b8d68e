//! Order-preserving combinations.

/// Iterator over every length-`level` sub-sequence of `elements` that keeps
/// the original relative order.
///
/// Sequences are yielded in lexicographic order of their element indices, so
/// for `[a, b, c]` at level 2 the output is `[a, b]`, `[a, c]`, `[b, c]`.
/// A level of zero, or one larger than `elements.len()`, yields nothing.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    elements: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<'a, T> Combinations<'a, T> {
    pub fn new(elements: &'a [T], level: usize) -> Self {
        Self {
            elements,
            indices: (0..level).collect(),
            started: false,
            done: level == 0 || level > elements.len(),
        }
    }

    /// Move `indices` to the next combination; returns false once exhausted.
    fn advance(&mut self) -> bool {
        let n = self.elements.len();
        let k = self.indices.len();

        let Some(pivot) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            return false;
        };
        self.indices[pivot] += 1;
        for j in pivot + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.indices.iter().map(|&i| &self.elements[i]).collect())
    }
}

/// Collect every order-preserving combination of `elements` of length `level`.
///
/// # Example
/// ```
/// use sqlpeek::combinations;
///
/// let combos = combinations(&["WHERE", "ORDER BY", "LIMIT"], 2);
/// assert_eq!(
///     combos,
///     vec![
///         vec!["WHERE", "ORDER BY"],
///         vec!["WHERE", "LIMIT"],
///         vec!["ORDER BY", "LIMIT"],
///     ]
/// );
/// ```
pub fn combinations<T: Clone>(elements: &[T], level: usize) -> Vec<Vec<T>> {
    Combinations::new(elements, level)
        .map(|combo| combo.into_iter().cloned().collect())
        .collect()
}
