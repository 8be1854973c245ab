//! Per-axis weight tables for separable resampling.
//!
//! A [`Distribution`] records, for every destination column (or row), which
//! source columns contribute to it and with what weight. The contributions of
//! all destination indices live in one flat buffer; each [`SourceRange`]
//! addresses its span by start and end offsets.
//!
//! Building a distribution costs `O(dst_extent * contributions_per_index)`.
//! When downscaling the kernel is widened by the size ratio, so the number of
//! contributions per index grows with the ratio: heavy downscaling with a wide
//! kernel is the expensive case. Build once and reuse through
//! [`KernelScaler`](crate::KernelScaler).


use std::ops::Range;

use crate::common::{Error, Result, FIXED_POINT_ONE};
use crate::kernel::{self, Footprint, Kernel};

/// Weight of one source column (or row) for one destination column (or row).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    /// Source index relative to the start of the source rectangle.
    pub source: usize,
    pub weight: f64,
}

/// Span of contributions owned by one destination index, with the reciprocal
/// of their total weight.
///
/// Kernels are truncated at the image edges, so raw weights do not always
/// sum to one; multiplying by `inv_total_weight` renormalizes them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceRange {
    pub start: usize,
    pub end: usize,
    pub inv_total_weight: f64,
    /// `inv_total_weight / 0xffff`, for accumulating 16-bit channel values
    /// straight into the normalized range.
    pub inv_total_weight_ffff: f64,
}

impl SourceRange {
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// How `source_extent` source samples are distributed over the destination
/// samples of one axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    ranges: Vec<SourceRange>,
    contributions: Vec<Contribution>,
    source_extent: usize,
}

impl Distribution {
    /// Distributes `src_extent` source samples over `dst_extent` destination
    /// samples.
    ///
    /// An empty axis on either side yields an empty distribution.
    ///
    /// # Errors
    /// - [`Error::InvalidKernel`] if the kernel support is not finite and positive.
    /// - [`Error::ZeroTotalWeight`] if every weight of some destination index
    ///   evaluates to zero, which would turn renormalization into a division
    ///   by zero.
    pub fn new<K: Kernel + ?Sized>(kernel: &K, dst_extent: u32, src_extent: u32) -> Result<Self> {
        kernel::validate(kernel)?;

        if dst_extent == 0 || src_extent == 0 {
            return Ok(Self::default());
        }

        let scale = src_extent as f64 / dst_extent as f64;
        let footprint = Footprint::new(kernel, scale);
        let last = src_extent as i64 - 1;

        // Candidate windows first, so the contribution buffer is allocated once.
        let windows: Vec<(f64, i64, i64)> = (0..dst_extent)
            .map(|x| {
                let center = (x as f64 + 0.5) * scale - 0.5;
                let i = ((center - footprint.half_width).floor() as i64).max(0);
                let j = ((center + footprint.half_width).ceil() as i64)
                    .min(last)
                    .max(i);
                (center, i, j)
            })
            .collect();
        let capacity: usize = windows.iter().map(|&(_, i, j)| (j - i + 1) as usize).sum();

        let mut ranges = Vec::with_capacity(dst_extent as usize);
        let mut contributions = Vec::with_capacity(capacity);

        for (index, &(center, i, j)) in windows.iter().enumerate() {
            let start = contributions.len();
            let mut total_weight = 0.0;

            for coord in i..=j {
                let weight = footprint.weight(kernel, center, coord as f64);
                if weight == 0.0 {
                    continue;
                }
                total_weight += weight;
                contributions.push(Contribution {
                    source: coord as usize,
                    weight,
                });
            }

            if total_weight == 0.0 || !total_weight.is_finite() {
                return Err(Error::ZeroTotalWeight { index });
            }

            let inv_total_weight = 1.0 / total_weight;
            ranges.push(SourceRange {
                start,
                end: contributions.len(),
                inv_total_weight,
                inv_total_weight_ffff: inv_total_weight / FIXED_POINT_ONE,
            });
        }

        tracing::debug!(
            dst_extent,
            src_extent,
            contributions = contributions.len(),
            "built weight distribution"
        );

        Ok(Self {
            ranges,
            contributions,
            source_extent: src_extent as usize,
        })
    }

    #[inline]
    pub fn ranges(&self) -> &[SourceRange] {
        &self.ranges
    }

    #[inline]
    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    /// Contributions of destination index `index`.
    ///
    /// # Panics
    /// Panics if `index >= destination_extent()`.
    #[inline]
    pub fn contributions_for(&self, index: usize) -> &[Contribution] {
        &self.contributions[self.ranges[index].range()]
    }

    #[inline]
    pub fn destination_extent(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn source_extent(&self) -> usize {
        self.source_extent
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
