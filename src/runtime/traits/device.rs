//! Trait for device identification

/// A compute unit a runtime client is bound to
///
/// Devices only identify hardware; all work goes through the client.
pub trait Device: Clone + Send + Sync + 'static {
    /// Index of this device among devices of the same runtime
    fn id(&self) -> usize;

    /// Human-readable name, used in log output
    fn name(&self) -> String {
        format!("device:{}", self.id())
    }
}
