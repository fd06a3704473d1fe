//! Metric registry and text renderer seam.
//!
//! The client never builds metrics itself. It asks a [`MetricRegistry`] for
//! its metric families and renders them with the `prometheus` text encoder.

use std::sync::Arc;

use prometheus::proto::MetricFamily;
use prometheus::{Registry, TextEncoder};

/// Content type sent with every gateway request.
pub const TEXT_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Source of metric families to push.
pub trait MetricRegistry {
    fn metric_families(&self) -> Vec<MetricFamily>;
}

impl MetricRegistry for Registry {
    fn metric_families(&self) -> Vec<MetricFamily> {
        self.gather()
    }
}

/// Already gathered families, e.g. a snapshot taken before the job exits.
impl MetricRegistry for Vec<MetricFamily> {
    fn metric_families(&self) -> Vec<MetricFamily> {
        self.clone()
    }
}

impl<T: MetricRegistry + ?Sized> MetricRegistry for &T {
    fn metric_families(&self) -> Vec<MetricFamily> {
        (**self).metric_families()
    }
}

impl<T: MetricRegistry + ?Sized> MetricRegistry for Arc<T> {
    fn metric_families(&self) -> Vec<MetricFamily> {
        (**self).metric_families()
    }
}

/// Render metric families in the text exposition format.
pub fn render_text(metric_families: &[MetricFamily]) -> Result<String, prometheus::Error> {
    let mut out = String::new();
    TextEncoder::new().encode_utf8(metric_families, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::{Counter, Opts};

    #[test]
    fn test_render_registry() {
        let registry = Registry::new();
        let counter = Counter::with_opts(Opts::new("rows_processed", "Rows processed")).unwrap();
        registry.register(Box::new(counter.clone())).unwrap();
        counter.inc_by(3.0);

        let text = render_text(&registry.metric_families()).unwrap();

        assert!(text.contains("# HELP rows_processed Rows processed"));
        assert!(text.contains("# TYPE rows_processed counter"));
        assert!(text.contains("rows_processed 3"));
    }

    #[test]
    fn test_render_empty_registry() {
        let registry = Registry::new();
        assert_eq!(render_text(&registry.metric_families()).unwrap(), "");
    }

    #[test]
    fn test_snapshot_and_shared_registries() {
        let registry = Arc::new(Registry::new());
        let counter = Counter::new("jobs_total", "Jobs").unwrap();
        registry.register(Box::new(counter)).unwrap();

        let snapshot: Vec<MetricFamily> = registry.metric_families();
        assert_eq!(snapshot.metric_families().len(), 1);
    }

    #[test]
    fn test_content_type_extends_encoder_format() {
        assert!(TEXT_CONTENT_TYPE.starts_with(prometheus::TEXT_FORMAT));
    }
}
