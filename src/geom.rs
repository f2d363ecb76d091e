//! Integer vectors and the four compass directions.
//!
//! The y axis points up: moving [`Direction::Up`] increases `y`. Callers that
//! read text grids top-down usually reverse the rows first.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num::Signed;

use crate::error::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The opposite direction. Used to forbid doubling back along the edge just walked.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    #[inline]
    pub const fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// Unit step for this direction.
    #[inline]
    pub fn delta<T: Signed>(self) -> Vector2D<T> {
        match self {
            Direction::Up => Vector2D::new(T::zero(), T::one()),
            Direction::Down => Vector2D::new(T::zero(), -T::one()),
            Direction::Left => Vector2D::new(-T::one(), T::zero()),
            Direction::Right => Vector2D::new(T::one(), T::zero()),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Error> {
        match c {
            'U' | '^' => Ok(Direction::Up),
            'D' | 'v' => Ok(Direction::Down),
            'L' | '<' => Ok(Direction::Left),
            'R' | '>' => Ok(Direction::Right),
            other => Err(Error::InvalidDirection(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        };
        write!(f, "{c}")
    }
}

/// A 2D integer vector. Values are immutable; every operation returns a new one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector2D<T = i32> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2D<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Signed + Copy> Vector2D<T> {
    /// One step in `dir`.
    #[inline]
    pub fn moved(self, dir: Direction) -> Self {
        self + dir.delta()
    }

    /// `n` steps in `dir`.
    #[inline]
    pub fn moved_by(self, dir: Direction, n: T) -> Self {
        self + dir.delta() * n
    }

    /// The four orthogonal neighbours, in [`Direction::ALL`] order.
    #[inline]
    pub fn neighbors(self) -> [Self; 4] {
        Direction::ALL.map(|dir| self.moved(dir))
    }

    #[inline]
    pub fn manhattan_distance(self, other: Self) -> T {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl<T> From<(T, T)> for Vector2D<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: fmt::Display> fmt::Display for Vector2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Add<Output = T>> Add for Vector2D<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Vector2D<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Vector2D<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Neg<Output = T>> Neg for Vector2D<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector3D<T = i64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector3D<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Signed + Copy> Vector3D<T> {
    #[inline]
    pub fn manhattan_distance(self, other: Self) -> T {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }
}

impl<T> From<(T, T, T)> for Vector3D<T> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: fmt::Display> fmt::Display for Vector3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<T: Add<Output = T>> Add for Vector3D<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Sub<Output = T>> Sub for Vector3D<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Vector3D<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_is_an_involution_without_fixed_points() {
        for dir in Direction::ALL {
            assert_eq!(dir.flip().flip(), dir);
            assert_ne!(dir.flip(), dir);
        }
    }

    #[test]
    fn flip_keeps_axis() {
        for dir in Direction::ALL {
            assert_eq!(dir.is_horizontal(), dir.flip().is_horizontal());
            assert_ne!(dir.is_horizontal(), dir.is_vertical());
        }
    }

    #[test]
    fn moving_up_increases_y() {
        let p = Vector2D::new(3, 4);
        assert_eq!(p.moved(Direction::Up), Vector2D::new(3, 5));
        assert_eq!(p.moved(Direction::Down), Vector2D::new(3, 3));
        assert_eq!(p.moved(Direction::Left), Vector2D::new(2, 4));
        assert_eq!(p.moved(Direction::Right), Vector2D::new(4, 4));
        assert_eq!(p.moved_by(Direction::Left, 10), Vector2D::new(-7, 4));
    }

    #[test]
    fn moving_there_and_back() {
        let p: Vector2D<i64> = Vector2D::new(-2, 9);
        for dir in Direction::ALL {
            assert_eq!(p.moved(dir).moved(dir.flip()), p);
        }
    }

    #[test]
    fn vector_arithmetic() {
        let a = Vector2D::new(1, 2);
        let b = Vector2D::new(3, 4);
        assert_eq!(a + b, Vector2D::new(4, 6));
        assert_eq!(b - a, Vector2D::new(2, 2));
        assert_eq!(a * 3, Vector2D::new(3, 6));
        assert_eq!(-a, Vector2D::new(-1, -2));
        assert_eq!(a.manhattan_distance(b), 4);
        assert_eq!(Vector2D::from((1, 2)), a);
    }

    #[test]
    fn neighbors_are_one_step_away() {
        let p = Vector2D::new(0, 0);
        let n = p.neighbors();
        assert_eq!(n.len(), 4);
        assert!(n.iter().all(|q| q.manhattan_distance(p) == 1));
        assert_eq!(n[0], Vector2D::new(0, 1));
    }

    #[test]
    fn vector3d_arithmetic() {
        let a = Vector3D::new(1, -2, 3);
        let b = Vector3D::new(4, 5, -6);
        assert_eq!(a + b, Vector3D::new(5, 3, -3));
        assert_eq!(b - a, Vector3D::new(3, 7, -9));
        assert_eq!(a * 2, Vector3D::new(2, -4, 6));
        assert_eq!(a.manhattan_distance(b), 19);
        assert_eq!(format!("{a}"), "(1, -2, 3)");
    }

    #[test]
    fn direction_from_char() {
        assert_eq!(Direction::try_from('U'), Ok(Direction::Up));
        assert_eq!(Direction::try_from('v'), Ok(Direction::Down));
        assert_eq!(Direction::try_from('<'), Ok(Direction::Left));
        assert_eq!(Direction::try_from('R'), Ok(Direction::Right));
        assert_eq!(Direction::try_from('x'), Err(Error::InvalidDirection('x')));
        for dir in Direction::ALL {
            let c = dir.to_string().chars().next().unwrap();
            assert_eq!(Direction::try_from(c), Ok(dir));
        }
    }
}
