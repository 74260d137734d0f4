use serde::{Deserialize, Serialize};

/// Coverage thresholds of the classification policy, in percent.
///
/// Both comparisons are strict: coverage must be above the threshold.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Params {
    pub high_potential_above: f64,
    pub moderate_potential_above: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            high_potential_above: 10.0,
            moderate_potential_above: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let params: Params = serde_json::from_str(r#"{"high_potential_above": 20.0}"#).unwrap();
        assert_eq!(params.high_potential_above, 20.0);
        assert_eq!(params.moderate_potential_above, 3.0);
    }
}
