use crate::document::metrics::ValidatorMetrics;
use crate::document::scheme::{DocumentScheme, DocumentSchemeError, Rejection};
use crate::document::{DocumentType, Validator};
use crate::observability::labels::Labels;
use crate::stats::GLOBAL_STATS;

const DOCUMENT_TYPE: &str = "document_type";

/// Validates documents of a single scheme and reports every outcome as metrics.
pub struct DocumentValidator {
    scheme: DocumentScheme,
    metrics: ValidatorMetrics,
}

impl DocumentValidator {
    /// Builds a validator for a custom scheme. The scheme is checked once here so that
    /// validation itself can't fail.
    pub fn new(scheme: DocumentScheme, labels: &Labels) -> Result<Self, DocumentSchemeError> {
        if let Err(err) = scheme.validate() {
            GLOBAL_STATS.invalid_schemes.increment(1);
            return Err(err);
        }
        GLOBAL_STATS.validator_creations.increment(1);
        Ok(Self {
            scheme,
            metrics: ValidatorMetrics::new(labels),
        })
    }

    pub fn for_document_type(document_type: DocumentType) -> Self {
        let labels = Labels::new(&[(DOCUMENT_TYPE, document_type.to_string())]);
        GLOBAL_STATS.validator_creations.increment(1);
        Self {
            scheme: document_type.scheme().clone(),
            metrics: ValidatorMetrics::new(&labels),
        }
    }

    pub fn scheme(&self) -> &DocumentScheme {
        &self.scheme
    }

    pub fn validate(&self, candidate: &str) -> bool {
        self.metrics.validations.increment(1);
        match self.scheme.evaluate(candidate) {
            Ok(()) => {
                self.metrics.valid.increment(1);
                true
            }
            Err(rejection) => {
                let counter = match rejection {
                    Rejection::Shape => &self.metrics.rejected_shape,
                    Rejection::Blocklist => &self.metrics.rejected_blocklist,
                    Rejection::Checksum => &self.metrics.rejected_checksum,
                };
                counter.increment(1);
                false
            }
        }
    }
}

impl Validator for DocumentValidator {
    fn is_valid(&self, candidate: &str) -> bool {
        self.validate(candidate)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::check_digit::CheckDigitConfig;
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    fn counter_value(
        snapshot: &std::collections::HashMap<
            CompositeKey,
            (
                Option<metrics::Unit>,
                Option<metrics::SharedString>,
                DebugValue,
            ),
        >,
        name: &'static str,
        labels: Vec<Label>,
    ) -> Option<u64> {
        let key = CompositeKey::new(Counter, Key::from_parts(name, labels));
        snapshot.get(&key).map(|(_, _, value)| match value {
            DebugValue::Counter(count) => *count,
            _ => panic!("{name} is not a counter"),
        })
    }

    #[test]
    fn should_submit_validation_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let validator = DocumentValidator::for_document_type(DocumentType::BrazilianCpf);
            assert!(validator.validate("123.456.789-09"));
            assert!(validator.validate("12345678909"));
            assert!(!validator.validate("1234567890"));
            assert!(!validator.validate("11111111111"));
            assert!(!validator.validate("12345678900"));
        });

        let snapshot = snapshotter.snapshot().into_hashmap();
        let document_type = Label::new("document_type", "brazilian_cpf");
        let rejected = |reason: &'static str| {
            counter_value(
                &snapshot,
                "validation.rejected",
                vec![document_type.clone(), Label::new("reason", reason)],
            )
        };

        assert_eq!(
            counter_value(&snapshot, "validation.count", vec![document_type.clone()]),
            Some(5)
        );
        assert_eq!(
            counter_value(&snapshot, "validation.valid", vec![document_type.clone()]),
            Some(2)
        );
        assert_eq!(rejected("shape"), Some(1));
        assert_eq!(rejected("blocklist"), Some(1));
        assert_eq!(rejected("checksum"), Some(1));
    }

    #[test]
    fn should_refuse_invalid_scheme() {
        let scheme = DocumentScheme::new(11, vec![]);
        assert_eq!(
            DocumentValidator::new(scheme, &Labels::empty()).err(),
            Some(DocumentSchemeError::NoCheckDigits)
        );
    }

    #[test]
    fn custom_scheme_behaves_like_builtin() {
        let check_digit = CheckDigitConfig::new().substitute("0", &[10, 11]);
        let scheme = DocumentScheme::new(
            11,
            vec![
                check_digit.multiplier_range(2, 10),
                check_digit.multiplier_range(2, 11),
            ],
        );
        let validator = DocumentValidator::new(scheme, &Labels::empty()).unwrap();
        assert_eq!(validator.scheme(), DocumentType::BrazilianCpf.scheme());
        assert!(validator.is_valid("123.456.789-09"));
        assert!(!validator.is_valid("123.456.789-08"));
    }
}
