use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// one row of a coordinate table. the coordinate fields keep the verbatim
/// text of the log file so re-emitting them cannot change the printed
/// precision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atom {
    pub element: String,
    pub x: String,
    pub y: String,
    pub z: String,
}

impl Atom {
    pub fn new(element: &str, x: &str, y: &str, z: &str) -> Self {
        Self {
            element: element.to_string(),
            x: x.to_string(),
            y: y.to_string(),
            z: z.to_string(),
        }
    }
}

impl Display for Atom {
    /// the tab-separated row shared by the xyz and deck writers
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t {}\t {}\t {}", self.element, self.x, self.y, self.z)
    }
}
