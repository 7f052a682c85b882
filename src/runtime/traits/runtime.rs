//! Core trait for compute backends

/// Core trait for compute backends
///
/// `Runtime` names a backend and creates the clients that execute compiled
/// graphs on it. Kernels are generic over `Runtime`, so the registry and
/// every kernel are monomorphized per backend.
///
/// # Associated Types
///
/// - `Device`: Identifies a specific compute unit
/// - `Client`: Executes compiled graphs on that device
///
/// # Example
///
/// ```
/// use numscan::runtime::Runtime;
/// use numscan::runtime::cpu::CpuRuntime;
///
/// let device = CpuRuntime::default_device();
/// let client = CpuRuntime::default_client(&device);
/// assert_eq!(CpuRuntime::name(), "cpu");
/// # let _ = client;
/// ```
pub trait Runtime: Clone + Send + Sync + 'static {
    /// Device identifier type
    type Device: super::Device;

    /// Client for executing graphs
    type Client: super::RuntimeClient<Self>;

    /// Human-readable name of this runtime
    fn name() -> &'static str;

    /// Get the default device
    fn default_device() -> Self::Device;

    /// Get the default client for a device
    fn default_client(device: &Self::Device) -> Self::Client;
}
