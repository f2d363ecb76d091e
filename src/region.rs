use std::borrow::Borrow;
use std::fmt;
use std::ops::RangeInclusive;

use num::PrimInt;

use crate::error::{Error, Result};
use crate::geom::Vector2D;

/// An axis-aligned box with **inclusive** bounds on both axes.
///
/// A range whose start is past its end makes the region empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region2D<T = i32> {
    pub x_range: RangeInclusive<T>,
    pub y_range: RangeInclusive<T>,
}

impl<T: PrimInt> Region2D<T> {
    #[inline]
    pub fn new(x_range: RangeInclusive<T>, y_range: RangeInclusive<T>) -> Self {
        Self { x_range, y_range }
    }

    /// Smallest region containing every point. Fails on an empty input.
    pub fn bounding<I>(points: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<Vector2D<T>>,
    {
        let mut points = points.into_iter();
        let first = *points.next().ok_or(Error::EmptyRegion)?.borrow();
        let (min, max) = points.fold((first, first), |(min, max), p| {
            let p = *p.borrow();
            (
                Vector2D::new(min.x.min(p.x), min.y.min(p.y)),
                Vector2D::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Ok(Self::new(min.x..=max.x, min.y..=max.y))
    }

    #[inline]
    pub fn contains(&self, p: Vector2D<T>) -> bool {
        self.x_range.contains(&p.x) && self.y_range.contains(&p.y)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x_range.is_empty() || self.y_range.is_empty()
    }

    #[inline]
    pub fn min(&self) -> Vector2D<T> {
        Vector2D::new(*self.x_range.start(), *self.y_range.start())
    }

    #[inline]
    pub fn max(&self) -> Vector2D<T> {
        Vector2D::new(*self.x_range.end(), *self.y_range.end())
    }

    /// Number of columns, zero when empty.
    #[inline]
    pub fn width(&self) -> usize {
        span(&self.x_range)
    }

    /// Number of rows, zero when empty.
    #[inline]
    pub fn height(&self) -> usize {
        span(&self.y_range)
    }

    /// Number of points in the region, saturating at `usize::MAX`.
    pub fn len(&self) -> usize {
        self.width().saturating_mul(self.height())
    }

    /// Every point, x-major: all of column `x0` bottom to top, then column `x0 + 1`, ...
    #[inline]
    pub fn iter(&self) -> RegionIter<T> {
        RegionIter {
            x_end: *self.x_range.end(),
            y_start: *self.y_range.start(),
            y_end: *self.y_range.end(),
            next: (!self.is_empty()).then(|| self.min()),
        }
    }
}

/// Values in an inclusive range, saturating at `usize::MAX`.
fn span<T: PrimInt>(range: &RangeInclusive<T>) -> usize {
    if range.is_empty() {
        return 0;
    }
    let (start, end) = (*range.start(), *range.end());
    // Signed types go through i128, unsigned ones above i128::MAX through u128.
    let distance = match (start.to_i128(), end.to_i128()) {
        (Some(start), Some(end)) => end.checked_sub(start).and_then(|d| usize::try_from(d).ok()),
        _ => start
            .to_u128()
            .zip(end.to_u128())
            .and_then(|(start, end)| usize::try_from(end - start).ok()),
    };
    distance.map_or(usize::MAX, |d| d.saturating_add(1))
}

impl<'a, T: PrimInt> IntoIterator for &'a Region2D<T> {
    type Item = Vector2D<T>;
    type IntoIter = RegionIter<T>;
    #[inline]
    fn into_iter(self) -> RegionIter<T> {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Region2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..={}] x [{}..={}]",
            self.x_range.start(),
            self.x_range.end(),
            self.y_range.start(),
            self.y_range.end()
        )
    }
}

/// x-major iterator over the points in a [`Region2D`].
#[derive(Clone, Debug)]
pub struct RegionIter<T> {
    x_end: T,
    y_start: T,
    y_end: T,
    next: Option<Vector2D<T>>,
}

impl<T: PrimInt> Iterator for RegionIter<T> {
    type Item = Vector2D<T>;

    fn next(&mut self) -> Option<Vector2D<T>> {
        let p = self.next?;
        // Compare before stepping so bounds at T::MAX do not overflow.
        self.next = if p.y < self.y_end {
            Some(Vector2D::new(p.x, p.y + T::one()))
        } else if p.x < self.x_end {
            Some(Vector2D::new(p.x + T::one(), self.y_start))
        } else {
            None
        };
        Some(p)
    }
}
