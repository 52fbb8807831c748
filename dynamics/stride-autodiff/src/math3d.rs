//! Small 3-D linear algebra, generic over the scalar.
//!
//! `nalgebra` stays the workhorse for concrete `f64` linear algebra at the
//! API boundary; these types exist so the dynamics formulas can be written
//! once and instantiated with dual numbers as well. Conversions to and from
//! the `nalgebra` types are provided for `f64`.

use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::{Matrix3, Vector3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Real;

/// A 3-vector over any [`Real`] scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
    /// Z component.
    pub z: T,
}

impl<T: Copy> Vec3<T> {
    /// Create a vector from components.
    #[must_use]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Real> Vec3<T> {
    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Lift an `f64` vector into this scalar type (dual components are
    /// constants).
    #[must_use]
    pub fn lift(v: &Vector3<f64>) -> Self {
        Self::new(T::from_f64(v.x), T::from_f64(v.y), T::from_f64(v.z))
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared Euclidean norm.
    #[must_use]
    pub fn norm_squared(self) -> T {
        self.dot(self)
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(self) -> T {
        self.norm_squared().sqrt()
    }
}

impl Vec3<f64> {
    /// Convert to the `nalgebra` vector.
    #[must_use]
    pub fn to_vector3(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Convert from the `nalgebra` vector.
    #[must_use]
    pub fn from_vector3(v: &Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T: Real> Add for Vec3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Real> Sub for Vec3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Real> Neg for Vec3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Scaling by a scalar on the right: `v * s`.
impl<T: Real> Mul<T> for Vec3<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

/// A 3×3 matrix over any [`Real`] scalar, stored as rows.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mat3<T> {
    rows: [Vec3<T>; 3],
}

impl<T: Copy> Mat3<T> {
    /// Build a matrix from its three rows.
    #[must_use]
    pub const fn from_rows(r0: Vec3<T>, r1: Vec3<T>, r2: Vec3<T>) -> Self {
        Self {
            rows: [r0, r1, r2],
        }
    }

    /// Row `i` (0-based).
    #[must_use]
    pub fn row(&self, i: usize) -> Vec3<T> {
        self.rows[i]
    }

    /// Element at `(row, col)` (0-based).
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> T {
        let r = self.rows[row];
        match col {
            0 => r.x,
            1 => r.y,
            _ => r.z,
        }
    }
}

impl<T: Real> Mat3<T> {
    /// The zero matrix.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_rows(Vec3::zero(), Vec3::zero(), Vec3::zero())
    }

    /// The identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        let o = T::one();
        let z = T::zero();
        Self::from_rows(
            Vec3::new(o, z, z),
            Vec3::new(z, o, z),
            Vec3::new(z, z, o),
        )
    }

    /// Diagonal matrix from a vector.
    #[must_use]
    pub fn from_diagonal(d: Vec3<T>) -> Self {
        let z = T::zero();
        Self::from_rows(
            Vec3::new(d.x, z, z),
            Vec3::new(z, d.y, z),
            Vec3::new(z, z, d.z),
        )
    }

    /// Lift an `f64` matrix into this scalar type.
    #[must_use]
    pub fn lift(m: &Matrix3<f64>) -> Self {
        Self::from_rows(
            Vec3::new(
                T::from_f64(m[(0, 0)]),
                T::from_f64(m[(0, 1)]),
                T::from_f64(m[(0, 2)]),
            ),
            Vec3::new(
                T::from_f64(m[(1, 0)]),
                T::from_f64(m[(1, 1)]),
                T::from_f64(m[(1, 2)]),
            ),
            Vec3::new(
                T::from_f64(m[(2, 0)]),
                T::from_f64(m[(2, 1)]),
                T::from_f64(m[(2, 2)]),
            ),
        )
    }

    /// Skew-symmetric cross-product matrix: `skew(a) * b == a × b`.
    #[must_use]
    pub fn skew(a: Vec3<T>) -> Self {
        let z = T::zero();
        Self::from_rows(
            Vec3::new(z, -a.z, a.y),
            Vec3::new(a.z, z, -a.x),
            Vec3::new(-a.y, a.x, z),
        )
    }

    /// Column `j` (0-based).
    #[must_use]
    pub fn col(&self, j: usize) -> Vec3<T> {
        Vec3::new(self.at(0, j), self.at(1, j), self.at(2, j))
    }

    /// Transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.col(0), self.col(1), self.col(2))
    }

    /// Determinant.
    #[must_use]
    pub fn determinant(&self) -> T {
        self.rows[0].dot(self.rows[1].cross(self.rows[2]))
    }

    /// Closed-form adjugate inverse.
    ///
    /// The caller guarantees the matrix is invertible; the rotational
    /// inertia blocks this is used on are validated positive-definite at
    /// construction time.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let c0 = self.col(0);
        let c1 = self.col(1);
        let c2 = self.col(2);
        let inv_det = T::one() / self.determinant();
        // Rows of the inverse are the cross products of the columns.
        Self::from_rows(
            c1.cross(c2) * inv_det,
            c2.cross(c0) * inv_det,
            c0.cross(c1) * inv_det,
        )
    }
}

impl Mat3<f64> {
    /// Convert to the `nalgebra` matrix.
    #[must_use]
    pub fn to_matrix3(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.at(0, 0),
            self.at(0, 1),
            self.at(0, 2),
            self.at(1, 0),
            self.at(1, 1),
            self.at(1, 2),
            self.at(2, 0),
            self.at(2, 1),
            self.at(2, 2),
        )
    }

    /// Convert from the `nalgebra` matrix.
    #[must_use]
    pub fn from_matrix3(m: &Matrix3<f64>) -> Self {
        Self::lift(m)
    }
}

impl<T: Real> Add for Mat3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_rows(
            self.rows[0] + rhs.rows[0],
            self.rows[1] + rhs.rows[1],
            self.rows[2] + rhs.rows[2],
        )
    }
}

/// Matrix-vector product.
impl<T: Real> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        Vec3::new(
            self.rows[0].dot(v),
            self.rows[1].dot(v),
            self.rows[2].dot(v),
        )
    }
}

/// Matrix-matrix product.
impl<T: Real> Mul<Mat3<T>> for Mat3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let c0 = rhs.col(0);
        let c1 = rhs.col(1);
        let c2 = rhs.col(2);
        Self::from_rows(
            Vec3::new(
                self.rows[0].dot(c0),
                self.rows[0].dot(c1),
                self.rows[0].dot(c2),
            ),
            Vec3::new(
                self.rows[1].dot(c0),
                self.rows[1].dot(c1),
                self.rows[1].dot(c2),
            ),
            Vec3::new(
                self.rows[2].dot(c0),
                self.rows[2].dot(c1),
                self.rows[2].dot(c2),
            ),
        )
    }
}

/// Scaling by a scalar on the right: `m * s`.
impl<T: Real> Mul<T> for Mat3<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::from_rows(self.rows[0] * s, self.rows[1] * s, self.rows[2] * s)
    }
}
