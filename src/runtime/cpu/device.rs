//! CPU device

use crate::runtime::Device;

/// The host CPU; there is exactly one
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CpuDevice;

impl CpuDevice {
    /// Handle to the host CPU
    pub fn new() -> Self {
        Self
    }
}

impl Device for CpuDevice {
    fn id(&self) -> usize {
        0
    }

    fn name(&self) -> String {
        "cpu".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::cpu::CpuRuntime;
    use crate::runtime::{Runtime, RuntimeClient};

    #[test]
    fn test_default_client_is_bound_to_host() {
        let device = CpuRuntime::default_device();
        let client = CpuRuntime::default_client(&device);
        assert_eq!(client.device(), &CpuDevice::new());
        assert_eq!(client.device().name(), "cpu");
        assert_eq!(client.device().id(), 0);
    }
}
