//! # Constants and type definitions for Sightline
//!
//! This module centralizes the **numeric constants**, **tolerances**, and **common type
//! definitions** used throughout the `sightline` library.
//!
//! ## Overview
//!
//! - Angular constants and comparison tolerances
//! - Core unit aliases used across the crate
//! - Reference axis lengths for the default body shape
//!
//! These definitions are used by all main modules, including the vector algebra,
//! coordinate conversions, and the sensor facade.

// -------------------------------------------------------------------------------------------------
// Angular constants and tolerances
// -------------------------------------------------------------------------------------------------

/// 2π, useful for right-ascension range normalization
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-6;

/// Absolute component-wise tolerance under which two rays are considered parallel.
///
/// [`angle`](crate::vector_math::angle) short-circuits to zero below this tolerance
/// instead of evaluating an unstable `acos` near 1.
pub const RAY_EQUALITY_TOL: f64 = 1e-4;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

// -------------------------------------------------------------------------------------------------
// Reference body shape
// -------------------------------------------------------------------------------------------------

/// Default major axis of the reference bi-axial ellipsoid, in meters
pub const DEFAULT_MAJOR_AXIS: Meter = 1000.0;

/// Default minor axis of the reference bi-axial ellipsoid, in meters
pub const DEFAULT_MINOR_AXIS: Meter = 1000.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in meters
pub type Meter = f64;
/// Distance in millimeters
pub type Millimeter = f64;
/// Ground sampling distance in meters per pixel
pub type MetersPerPixel = f64;
/// Acquisition time; the epoch and unit are defined by the concrete sensor model
pub type ImageTime = f64;
