use serde::{Deserialize, Serialize};

use super::Predictor;

/// Reference calibration sample as `(temperature_c, irradiance, power_output_w)`.
///
/// Peak output in this sample is [`super::MODEL_PEAK_OUTPUT_W`].
pub const REFERENCE_SAMPLE: [(f32, f32, f32); 10] = [
    (15.0, 0.2, 150.0),
    (20.0, 0.4, 300.0),
    (25.0, 0.6, 500.0),
    (30.0, 0.8, 750.0),
    (35.0, 1.0, 950.0),
    (22.0, 0.5, 450.0),
    (18.0, 0.3, 250.0),
    (28.0, 0.7, 650.0),
    (32.0, 0.9, 850.0),
    (40.0, 0.95, 900.0),
];

/// Input feature a split node tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Temperature,
    Irradiance,
}

/// One node of a binary regression tree.
///
/// Split nodes send a sample left when `value <= threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Split {
        feature: Feature,
        threshold: f32,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f32,
    },
}

/// A regression tree stored as a flat node array rooted at index 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecisionTree {
    pub nodes: Vec<Node>,
}

impl DecisionTree {
    fn predict(&self, temperature_c: f32, irradiance: f32) -> f32 {
        let mut idx = 0;
        loop {
            match self.nodes.get(idx) {
                Some(Node::Leaf { value }) => return *value,
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = match feature {
                        Feature::Temperature => temperature_c,
                        Feature::Irradiance => irradiance,
                    };
                    idx = if x <= *threshold { *left } else { *right };
                }
                None => return 0.0,
            }
        }
    }

    /// Structural checks: non-empty, children in bounds and after their parent.
    fn check(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        let n = self.nodes.len();
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(format!("leaf {i} has a non-finite value"));
                    }
                }
                Node::Split {
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    if !threshold.is_finite() {
                        return Err(format!("split {i} has a non-finite threshold"));
                    }
                    for child in [*left, *right] {
                        if child <= i || child >= n {
                            return Err(format!(
                                "split {i} points to node {child} (must be in {}..{n})",
                                i + 1
                            ));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// An ensemble of regression trees whose predictions are averaged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionForest {
    pub trees: Vec<DecisionTree>,
}

impl RegressionForest {
    pub fn new(trees: Vec<DecisionTree>) -> Self {
        Self { trees }
    }

    /// Builds a single-tree forest that reproduces [`REFERENCE_SAMPLE`].
    ///
    /// The tree splits on irradiance at midpoints between neighbouring
    /// sample rows, so each row's irradiance maps back to its recorded output.
    pub fn reference() -> Self {
        let mut points: Vec<(f32, f32)> = REFERENCE_SAMPLE
            .iter()
            .map(|&(_, irradiance, power)| (irradiance, power))
            .collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut nodes = Vec::with_capacity(2 * points.len());
        build_irradiance_tree(&points, &mut nodes);
        Self::new(vec![DecisionTree { nodes }])
    }

    /// Validates every tree in the ensemble.
    pub(crate) fn check(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("forest has no trees".to_string());
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.check().map_err(|e| format!("tree {i}: {e}"))?;
        }
        Ok(())
    }
}

fn build_irradiance_tree(points: &[(f32, f32)], nodes: &mut Vec<Node>) -> usize {
    let idx = nodes.len();
    match points {
        [] => nodes.push(Node::Leaf { value: 0.0 }),
        [(_, power)] => nodes.push(Node::Leaf { value: *power }),
        _ => {
            // placeholder, replaced once both children have indices
            nodes.push(Node::Leaf { value: 0.0 });
            let mid = points.len() / 2;
            let threshold = (points[mid - 1].0 + points[mid].0) / 2.0;
            let left = build_irradiance_tree(&points[..mid], nodes);
            let right = build_irradiance_tree(&points[mid..], nodes);
            nodes[idx] = Node::Split {
                feature: Feature::Irradiance,
                threshold,
                left,
                right,
            };
        }
    }
    idx
}

impl Predictor for RegressionForest {
    fn predict(&self, temperature_c: f32, irradiance: f32) -> f32 {
        if self.trees.is_empty() {
            return 0.0;
        }
        let sum: f32 = self
            .trees
            .iter()
            .map(|t| t.predict(temperature_c, irradiance))
            .sum();
        sum / self.trees.len() as f32
    }
}
