//! 3D vector definition, used as a point, a direction and a color.
//!
//! Value operators (`+`, `-`, `*`, `/`, unary `-`) never touch their operands. The named
//! in-place variants ([Vector::add_to], [Vector::subtract_from], [Vector::mult_to],
//! [Vector::div_to], [Vector::negate_in_place]) mutate the receiver and return nothing, for hot
//! loops that want to reuse a value.
//!
//! Nothing here is checked: dividing by zero, or normalizing a zero vector, silently yields
//! `inf`/`NaN` components.

use super::{DefaultType, DEFAULT_DIM};

use std::{
    fmt::Display,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use paste::paste;

#[derive(PartialEq, Clone, Copy, Debug)]
/// DIM-dimensional vector of [DefaultType] values.
pub struct Vector<const DIM: usize = DEFAULT_DIM> {
    /// Coordinate vector.
    pub inner: [DefaultType; DIM],
}

/// 3D vector in its direction/offset role.
pub type Vec3 = Vector<3>;

/// 3D vector in its position role.
pub type Point3 = Vector<3>;

impl<const DIM: usize> Default for Vector<DIM> {
    fn default() -> Self {
        Self { inner: [0.; DIM] }
    }
}

impl<const DIM: usize> Index<usize> for Vector<DIM> {
    type Output = DefaultType;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl<const DIM: usize> IndexMut<usize> for Vector<DIM> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}

impl<const DIM: usize> From<[DefaultType; DIM]> for Vector<DIM> {
    fn from(value: [DefaultType; DIM]) -> Self {
        Self { inner: value }
    }
}

impl<const DIM: usize> From<Vector<DIM>> for [DefaultType; DIM] {
    fn from(value: Vector<DIM>) -> Self {
        value.inner
    }
}

macro_rules! impl_vec_vec_op {
    ($trait:ident, $function:ident, $($op:tt)+) => {
        paste! {
            impl<const DIM: usize> [<$trait Assign>]<Self> for Vector<DIM> {
                fn [<$function _assign>](&mut self, rhs: Self) {
                    for (l, r) in self.inner.iter_mut().zip(rhs.inner.iter()) {
                        *l $($op)+ *r;
                    }
                }
            }

            impl<const DIM: usize> $trait<Self> for Vector<DIM> {
                type Output = Self;

                fn $function(mut self, rhs: Self) -> Self::Output {
                    self $($op)+ rhs;
                    self
                }
            }
        }
    }
}

impl_vec_vec_op! (Add, add, +=);
impl_vec_vec_op! (Sub, sub, -=);
// Component-wise (Hadamard) product.
impl_vec_vec_op! (Mul, mul, *=);

macro_rules! impl_vec_type_op {
    ($trait:ident, $function:ident, $($op:tt)+) => {
        paste! {
            impl<const DIM: usize> [<$trait Assign>]<DefaultType> for Vector<DIM> {
                fn [<$function _assign>](&mut self, rhs: DefaultType) {
                    for v in self.inner.as_mut_slice() {
                        *v $($op)+ rhs;
                    }
                }
            }

            impl<const DIM: usize> $trait<DefaultType> for Vector<DIM> {
                type Output = Self;

                fn $function(mut self, rhs: DefaultType) -> Self::Output {
                    self $($op)+ rhs;
                    self
                }
            }
        }
    }
}

impl_vec_type_op! (Mul, mul, *=);
impl_vec_type_op! (Div, div, /=);

impl<const DIM: usize> Mul<Vector<DIM>> for DefaultType {
    type Output = Vector<DIM>;

    fn mul(self, rhs: Vector<DIM>) -> Self::Output {
        rhs * self
    }
}

impl<const DIM: usize> Neg for Vector<DIM> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.negate_in_place();
        self
    }
}

impl Vector<3> {
    /// Create a new 3D vector from values.
    pub const fn new(x: DefaultType, y: DefaultType, z: DefaultType) -> Self {
        Self { inner: [x, y, z] }
    }

    #[inline]
    #[allow(missing_docs)]
    pub fn x(&self) -> DefaultType {
        self.inner[0]
    }

    #[inline]
    #[allow(missing_docs)]
    pub fn y(&self) -> DefaultType {
        self.inner[1]
    }

    #[inline]
    #[allow(missing_docs)]
    pub fn z(&self) -> DefaultType {
        self.inner[2]
    }

    /// Perform cross product with `other`.
    ///
    /// Anti-commutative: `u.cross(&v) == -v.cross(&u)`.
    pub fn cross(&self, other: &Self) -> Self {
        Vector {
            inner: [
                other.inner[2] * self.inner[1] - self.inner[2] * other.inner[1],
                other.inner[0] * self.inner[2] - self.inner[0] * other.inner[2],
                other.inner[1] * self.inner[0] - self.inner[1] * other.inner[0],
            ],
        }
    }
}

impl<const DIM: usize> Vector<DIM> {
    /// Perform dot product with `other`.
    pub fn dot(&self, other: &Self) -> DefaultType {
        self.inner
            .iter()
            .zip(other.inner.iter())
            .fold(0., |acc, cur| acc + *cur.0 * *cur.1)
    }

    #[inline]
    /// Get squared length of the vector, slightly faster than [Vector::length].
    pub fn length_squared(&self) -> DefaultType {
        self.dot(self)
    }

    #[inline]
    /// Get length of the vector.
    pub fn length(&self) -> DefaultType {
        self.length_squared().sqrt()
    }

    #[inline]
    /// Get the unit vector pointing in the same direction.
    ///
    /// Unspecified for a zero vector: every component comes out `NaN`.
    pub fn unit_vector(&self) -> Self {
        *self / self.length()
    }

    /// `self += other`.
    pub fn add_to(&mut self, other: &Self) {
        *self += *other;
    }

    /// `self -= other`.
    pub fn subtract_from(&mut self, other: &Self) {
        *self -= *other;
    }

    /// `self *= gain`.
    pub fn mult_to(&mut self, gain: DefaultType) {
        *self *= gain;
    }

    /// `self /= gain`. A zero `gain` is the caller's problem.
    pub fn div_to(&mut self, gain: DefaultType) {
        *self /= gain;
    }

    /// `self = -self`.
    pub fn negate_in_place(&mut self) {
        for v in self.inner.iter_mut() {
            *v = -*v;
        }
    }
}

impl<const DIM: usize> Display for Vector<DIM> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for v in self.inner.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
            first = false;
        }

        Ok(())
    }
}

/// Free-function form of [Vector::dot].
pub fn dot(u: &Vec3, v: &Vec3) -> DefaultType {
    u.dot(v)
}

/// Free-function form of [Vector::cross].
pub fn cross(u: &Vec3, v: &Vec3) -> Vec3 {
    u.cross(v)
}

/// Free-function form of [Vector::unit_vector].
pub fn unit_vector(v: &Vec3) -> Vec3 {
    v.unit_vector()
}

/// Negated copy of `v`.
pub fn neg_vec3(v: &Vec3) -> Vec3 {
    -*v
}
