use crate::core::model::Entity;
use crate::core::primitives::midpoint;

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileReport {
    pub padded_entities: usize,
    pub truncated_entities: usize,
}

impl ReconcileReport {
    #[must_use]
    pub fn changed(self) -> bool {
        self.padded_entities > 0 || self.truncated_entities > 0
    }
}

/// Resizes one value vector to `feature_count`.
///
/// Missing slots are appended with the range midpoint; surplus slots are cut
/// from the end. Returns `true` when the vector was touched.
pub fn reconcile_values(
    values: &mut Vec<f64>,
    feature_count: usize,
    min_y: f64,
    max_y: f64,
) -> bool {
    match values.len().cmp(&feature_count) {
        std::cmp::Ordering::Equal => false,
        std::cmp::Ordering::Less => {
            values.resize(feature_count, midpoint(min_y, max_y));
            true
        }
        std::cmp::Ordering::Greater => {
            values.truncate(feature_count);
            true
        }
    }
}

/// Keeps entity value vectors aligned with the feature list.
///
/// The reconciler remembers the feature count it last aligned to so callers
/// can run it on every mutation while only paying for real count changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DimensionReconciler {
    aligned_feature_count: Option<usize>,
}

impl DimensionReconciler {
    #[must_use]
    pub fn aligned_feature_count(&self) -> Option<usize> {
        self.aligned_feature_count
    }

    /// Whether a pass is due for `feature_count`.
    #[must_use]
    pub fn is_due(&self, feature_count: usize) -> bool {
        self.aligned_feature_count != Some(feature_count)
    }

    /// Aligns every entity when the feature count changed since the last pass.
    pub fn reconcile_if_due<'a>(
        &mut self,
        entities: impl IntoIterator<Item = &'a mut Entity>,
        feature_count: usize,
        min_y: f64,
        max_y: f64,
    ) -> ReconcileReport {
        if !self.is_due(feature_count) {
            return ReconcileReport::default();
        }
        self.reconcile(entities, feature_count, min_y, max_y)
    }

    /// Unconditional pass, used after externally sourced entities replace local ones.
    pub fn reconcile<'a>(
        &mut self,
        entities: impl IntoIterator<Item = &'a mut Entity>,
        feature_count: usize,
        min_y: f64,
        max_y: f64,
    ) -> ReconcileReport {
        let mut report = ReconcileReport::default();
        for entity in entities {
            let before = entity.values.len();
            if reconcile_values(&mut entity.values, feature_count, min_y, max_y) {
                if before < feature_count {
                    report.padded_entities += 1;
                } else {
                    report.truncated_entities += 1;
                }
            }
        }
        self.aligned_feature_count = Some(feature_count);
        report
    }
}
