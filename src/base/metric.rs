use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the performance metrics predicted by the response surfaces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Cross-sectional area of the lumen after recoil
    Csa,

    /// Foreshortening (percent change of the stent length on expansion)
    Fs,

    /// Metal-to-artery (stent-to-artery) coverage ratio
    Par,

    /// Radial stiffness
    Rs,
}

impl Metric {
    /// Holds all metrics in the order of the response-surface columns
    pub const ALL: [Metric; 4] = [Metric::Csa, Metric::Fs, Metric::Par, Metric::Rs];

    /// Returns the column index of the metric
    pub fn index(self) -> usize {
        match self {
            Metric::Csa => 0,
            Metric::Fs => 1,
            Metric::Par => 2,
            Metric::Rs => 3,
        }
    }

    /// Returns the short name of the metric
    pub fn name(self) -> &'static str {
        match self {
            Metric::Csa => "csa",
            Metric::Fs => "fs",
            Metric::Par => "par",
            Metric::Rs => "rs",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Holds one value per metric
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    pub csa: f64, // cross-sectional area
    pub fs: f64,  // foreshortening
    pub par: f64, // metal-to-artery ratio
    pub rs: f64,  // radial stiffness
}

impl Outputs {
    /// Allocates a new instance from values ordered as [Metric::ALL]
    pub fn from_array(values: [f64; 4]) -> Self {
        Outputs {
            csa: values[0],
            fs: values[1],
            par: values[2],
            rs: values[3],
        }
    }

    /// Returns the values ordered as [Metric::ALL]
    pub fn as_array(&self) -> [f64; 4] {
        [self.csa, self.fs, self.par, self.rs]
    }

    /// Returns the value of a metric
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Csa => self.csa,
            Metric::Fs => self.fs,
            Metric::Par => self.par,
            Metric::Rs => self.rs,
        }
    }
}

impl fmt::Display for Outputs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "csa = {:.4}, fs = {:.4}, par = {:.4}, rs = {:.4}",
            self.csa, self.fs, self.par, self.rs
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Metric, Outputs};

    #[test]
    fn metric_index_and_name_work() {
        for (i, metric) in Metric::ALL.iter().enumerate() {
            assert_eq!(metric.index(), i);
        }
        assert_eq!(Metric::Par.name(), "par");
        assert_eq!(format!("{}", Metric::Fs), "fs");
    }

    #[test]
    fn outputs_work() {
        let out = Outputs::from_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(out.as_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(out.get(Metric::Csa), 1.0);
        assert_eq!(out.get(Metric::Rs), 4.0);
        assert_eq!(
            format!("{}", out),
            "csa = 1.0000, fs = 2.0000, par = 3.0000, rs = 4.0000"
        );
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Metric::Csa).unwrap();
        assert_eq!(json, "\"csa\"");
        let metric: Metric = serde_json::from_str("\"rs\"").unwrap();
        assert_eq!(metric, Metric::Rs);
    }
}
