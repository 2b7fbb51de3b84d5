use derive_new::new;

/// A maximal run of aligned line pairs that either all match or all differ.
///
/// For `Changed` segments, `removed` and `added` are parallel: entry `k` of
/// both runs came from the same index of the walk, so the two runs always
/// have the same length. When one file is a position short, the missing side
/// is padded with the element default (the empty string for lines).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffSegment<T> {
    Unchanged { line: T },
    Changed { removed: Vec<T>, added: Vec<T> },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffResult<T> {
    pub segments: Vec<DiffSegment<T>>,
    pub files_are_equal: bool,
}

/// Positional comparison of two line sequences.
///
/// Lines are matched solely by index: no insertion-point search and no
/// common-subsequence matching. The walk is driven by the longer sequence,
/// so when the second sequence is the longer one its lines populate the
/// removed runs and the first sequence's lines the added runs.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PositionalDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone + Default> PositionalDiff<'d, T> {
    pub fn compare(&self) -> DiffResult<T> {
        if self.a == self.b {
            return DiffResult {
                segments: Vec::new(),
                files_are_equal: true,
            };
        }

        // Length ties go to `a`, so equal-length inputs walk in `a`'s order.
        let (longer, shorter) = if self.a.len() >= self.b.len() {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        };

        let mut segments = Vec::new();
        let mut removed: Vec<T> = Vec::new();
        let mut added: Vec<T> = Vec::new();

        for (i, line) in longer.iter().enumerate() {
            match shorter.get(i) {
                Some(other) if line == other => {
                    if !removed.is_empty() {
                        segments.push(DiffSegment::Changed {
                            removed: std::mem::take(&mut removed),
                            added: std::mem::take(&mut added),
                        });
                    }
                    segments.push(DiffSegment::Unchanged { line: line.clone() });
                }
                Some(other) => {
                    removed.push(line.clone());
                    added.push(other.clone());
                }
                // trailing lines of the longer sequence have no counterpart
                None => {
                    removed.push(line.clone());
                    added.push(T::default());
                }
            }
        }

        if !removed.is_empty() {
            segments.push(DiffSegment::Changed { removed, added });
        }

        DiffResult {
            segments,
            files_are_equal: false,
        }
    }
}
