//! Sparse term vectors and the dense pairwise similarity matrix.

use std::cmp::Ordering;

/// One document's non-zero term weights, sorted by column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseRow {
    entries: Vec<(usize, f64)>,
}

impl SparseRow {
    /// Build a row from `(column, weight)` pairs.
    ///
    /// Zero weights are dropped and the pairs are sorted by column. Columns
    /// must be distinct.
    #[must_use]
    pub fn from_entries(pairs: impl IntoIterator<Item = (usize, f64)>) -> Self {
        let mut entries: Vec<(usize, f64)> = pairs
            .into_iter()
            .filter(|&(_, weight)| weight.abs() > 0.0)
            .collect();
        entries.sort_by_key(|&(column, _)| column);
        Self { entries }
    }

    /// Non-zero `(column, weight)` pairs in column order.
    #[must_use]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Weight stored at `column`, zero when absent.
    #[must_use]
    pub fn get(&self, column: usize) -> f64 {
        self.entries
            .binary_search_by_key(&column, |&(col, _)| col)
            .ok()
            .and_then(|position| self.entries.get(position))
            .map_or(0.0, |&(_, weight)| weight)
    }

    /// Report whether every weight is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean length of the row.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Scale the row to unit length; zero rows are returned unchanged.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "row normalisation divides by the norm")]
    pub fn normalised(self) -> Self {
        let norm = self.norm();
        if norm <= 0.0 {
            return self;
        }
        Self {
            entries: self
                .entries
                .into_iter()
                .map(|(column, weight)| (column, weight / norm))
                .collect(),
        }
    }

    /// Inner product with `other`, merging the two sorted entry lists.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "dot products accumulate weight products")]
    pub fn dot(&self, other: &Self) -> f64 {
        let mut left = self.entries.iter();
        let mut right = other.entries.iter();
        let mut a = left.next();
        let mut b = right.next();
        let mut sum = 0.0;
        while let (Some(&(col_a, weight_a)), Some(&(col_b, weight_b))) = (a, b) {
            match col_a.cmp(&col_b) {
                Ordering::Less => a = left.next(),
                Ordering::Greater => b = right.next(),
                Ordering::Equal => {
                    sum += weight_a * weight_b;
                    a = left.next();
                    b = right.next();
                }
            }
        }
        sum
    }
}

/// Sparse TF-IDF matrix: one row per catalog entry, one column per term.
///
/// A matrix with no vocabulary is degenerate: every row is zero. That is the
/// result for an empty catalog or for names that are all stop words.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVectorMatrix {
    rows: Vec<SparseRow>,
    vocabulary: Vec<String>,
    idf: Vec<f64>,
}

impl TermVectorMatrix {
    /// Assemble a matrix from its rows, sorted vocabulary and per-term IDF.
    #[must_use]
    pub const fn new(rows: Vec<SparseRow>, vocabulary: Vec<String>, idf: Vec<f64>) -> Self {
        Self {
            rows,
            vocabulary,
            idf,
        }
    }

    /// Number of rows (documents).
    #[must_use]
    pub const fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (vocabulary terms).
    #[must_use]
    pub const fn n_terms(&self) -> usize {
        self.vocabulary.len()
    }

    /// All rows in document order.
    #[must_use]
    pub fn rows(&self) -> &[SparseRow] {
        &self.rows
    }

    /// Row for document `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&SparseRow> {
        self.rows.get(index)
    }

    /// Vocabulary terms in column order.
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Term stored in `column`.
    #[must_use]
    pub fn term(&self, column: usize) -> Option<&str> {
        self.vocabulary.get(column).map(String::as_str)
    }

    /// Column holding `term`.
    #[must_use]
    pub fn column_of(&self, term: &str) -> Option<usize> {
        self.vocabulary
            .binary_search_by(|probe| probe.as_str().cmp(term))
            .ok()
    }

    /// Inverse document frequency of the term in `column`.
    #[must_use]
    pub fn idf(&self, column: usize) -> Option<f64> {
        self.idf.get(column).copied()
    }

    /// Weight at (`row`, `column`), zero outside the matrix.
    #[must_use]
    pub fn weight(&self, row: usize, column: usize) -> f64 {
        self.row(row).map_or(0.0, |entries| entries.get(column))
    }

    /// Number of all-zero rows.
    #[must_use]
    pub fn empty_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.is_zero()).count()
    }

    /// Report whether the vocabulary is empty.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

/// Dense, symmetric `n x n` matrix of pairwise cosine similarities.
///
/// Row `i` holds the similarity of catalog entry `i` to every entry. Only the
/// upper triangle is computed; the lower triangle is mirrored from it, so
/// `get(i, j) == get(j, i)` holds exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    dim: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Multiply `terms` by its transpose.
    ///
    /// Rows of `terms` are unit length or zero, so each cell is the cosine
    /// similarity of two documents; zero rows score zero everywhere,
    /// including on the diagonal.
    #[must_use]
    pub fn from_terms(terms: &TermVectorMatrix) -> Self {
        let rows = terms.rows();
        let dim = rows.len();
        let mut values = vec![0.0; dim * dim];
        for (i, row_i) in rows.iter().enumerate() {
            for (j, row_j) in rows.iter().enumerate().skip(i) {
                let score = row_i.dot(row_j);
                if let Some(cell) = values.get_mut(i * dim + j) {
                    *cell = score;
                }
                if let Some(cell) = values.get_mut(j * dim + i) {
                    *cell = score;
                }
            }
        }
        Self { dim, values }
    }

    /// Side length of the square matrix.
    #[must_use]
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// Report whether the matrix has no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Similarity between entries `i` and `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.dim || j >= self.dim {
            return None;
        }
        self.values.get(i * self.dim + j).copied()
    }

    /// Similarities of entry `i` to every entry, in index order.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.dim {
            return None;
        }
        let start = i * self.dim;
        self.values.get(start..start + self.dim)
    }

    /// Iterate the rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.dim).filter_map(|i| self.row(i))
    }
}
