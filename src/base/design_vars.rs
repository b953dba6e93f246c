use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the number of design variables
pub const NDIM: usize = 4;

/// Defines the design parameters of the stent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Param {
    /// Aspect ratio of the material microstructure
    Ar,

    /// Strut width
    W,

    /// Strut thickness
    T,

    /// Stent length
    L,
}

impl Param {
    /// Holds all parameters in the order of the design vector
    pub const ALL: [Param; NDIM] = [Param::Ar, Param::W, Param::T, Param::L];

    /// Returns the position of the parameter in the design vector
    pub fn index(self) -> usize {
        match self {
            Param::Ar => 0,
            Param::W => 1,
            Param::T => 2,
            Param::L => 3,
        }
    }

    /// Returns the short name of the parameter
    pub fn name(self) -> &'static str {
        match self {
            Param::Ar => "ar",
            Param::W => "w",
            Param::T => "t",
            Param::L => "l",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Holds a point of the design space x = (ar, w, t, l)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignVars {
    pub ar: f64, // aspect ratio
    pub w: f64,  // strut width
    pub t: f64,  // strut thickness
    pub l: f64,  // stent length
}

impl DesignVars {
    /// Allocates a new instance
    pub fn new(ar: f64, w: f64, t: f64, l: f64) -> Self {
        DesignVars { ar, w, t, l }
    }

    /// Allocates a new instance from a slice with exactly four entries
    pub fn from_slice(x: &[f64]) -> Result<Self, StrError> {
        if x.len() != NDIM {
            return Err("the design vector must have four entries (ar, w, t, l)");
        }
        Ok(DesignVars::new(x[0], x[1], x[2], x[3]))
    }

    /// Returns the design vector
    pub fn as_array(&self) -> [f64; NDIM] {
        [self.ar, self.w, self.t, self.l]
    }

    /// Returns the value of a parameter
    pub fn get(&self, param: Param) -> f64 {
        match param {
            Param::Ar => self.ar,
            Param::W => self.w,
            Param::T => self.t,
            Param::L => self.l,
        }
    }
}

impl fmt::Display for DesignVars {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ar = {:.4}, w = {:.4}, t = {:.4}, l = {:.4}",
            self.ar, self.w, self.t, self.l
        )
    }
}

/// Holds a closed interval [min, max]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Allocates a new instance
    pub fn new(min: f64, max: f64) -> Self {
        Interval { min, max }
    }
}

/// Holds the box bounds of the design space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub ar: Interval,
    pub w: Interval,
    pub t: Interval,
    pub l: Interval,
}

impl Bounds {
    /// Returns the interval of a parameter
    pub fn get(&self, param: Param) -> Interval {
        match param {
            Param::Ar => self.ar,
            Param::W => self.w,
            Param::T => self.t,
            Param::L => self.l,
        }
    }

    /// Returns the lower bounds ordered as the design vector
    pub fn lower(&self) -> [f64; NDIM] {
        [self.ar.min, self.w.min, self.t.min, self.l.min]
    }

    /// Returns the upper bounds ordered as the design vector
    pub fn upper(&self) -> [f64; NDIM] {
        [self.ar.max, self.w.max, self.t.max, self.l.max]
    }

    /// Indicates whether the point lies in the box (with tolerance)
    pub fn contains(&self, x: &DesignVars, tol: f64) -> bool {
        Param::ALL.iter().all(|p| {
            let b = self.get(*p);
            let v = x.get(*p);
            v >= b.min - tol && v <= b.max + tol
        })
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        for param in Param::ALL {
            let b = self.get(param);
            if !b.min.is_finite() || !b.max.is_finite() {
                return Some(format!("bounds of {} must be finite", param));
            }
            if b.max <= b.min {
                return Some(format!(
                    "bounds of {} are incorrect; max = {:?} must be > min = {:?}",
                    param, b.max, b.min
                ));
            }
        }
        None // all good
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
