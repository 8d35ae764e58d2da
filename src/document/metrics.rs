use crate::observability::labels::Labels;
use metrics::{counter, Counter};

pub struct ValidatorMetrics {
    pub validations: Counter,
    pub valid: Counter,
    pub rejected_shape: Counter,
    pub rejected_blocklist: Counter,
    pub rejected_checksum: Counter,
}

const REASON: &str = "reason";

impl ValidatorMetrics {
    pub fn new(labels: &Labels) -> Self {
        ValidatorMetrics {
            validations: counter!("validation.count", labels.clone()),
            valid: counter!("validation.valid", labels.clone()),
            rejected_shape: counter!(
                "validation.rejected",
                labels.clone_with_labels(Labels::new(&[(REASON, "shape")]))
            ),
            rejected_blocklist: counter!(
                "validation.rejected",
                labels.clone_with_labels(Labels::new(&[(REASON, "blocklist")]))
            ),
            rejected_checksum: counter!(
                "validation.rejected",
                labels.clone_with_labels(Labels::new(&[(REASON, "checksum")]))
            ),
        }
    }
}
