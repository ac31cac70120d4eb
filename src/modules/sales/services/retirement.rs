use crate::core::AppError;

/// Notified when a sale was stored but its variant could not be deleted.
///
/// The catalog then lists a variant that has already been sold. Implementors
/// can queue a compensating delete or alert staff. `sale_uid` is `None` when
/// the catalog stored the sale without reporting its uid.
pub trait RetirementObserver: Send + Sync {
    fn retirement_failed(&self, sale_uid: Option<&str>, variant_uid: &str, error: &AppError);
}

/// Observer that takes no action beyond the orchestrator's own log line
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRetirementObserver;

impl RetirementObserver for NoopRetirementObserver {
    fn retirement_failed(&self, _sale_uid: Option<&str>, _variant_uid: &str, _error: &AppError) {}
}
