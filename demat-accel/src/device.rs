/// One-time accelerator detection result.
///
/// Immutable after construction; create it once during startup and pass it
/// by reference to components that want the hint.
#[derive(Debug, Clone, Default)]
pub struct AccelCapability {
    available: bool,
    adapter_name: Option<String>,
}

impl AccelCapability {
    /// Capability value for the CPU-only state, used when probing is skipped
    /// or finds nothing usable.
    pub fn cpu_only() -> Self {
        Self::default()
    }

    /// Whether an accelerator adapter was detected.
    pub fn available(&self) -> bool {
        self.available
    }

    /// Name of the detected adapter, if any.
    pub fn adapter_name(&self) -> Option<&str> {
        self.adapter_name.as_deref()
    }
}

/// Probes for an accelerator adapter asynchronously.
///
/// Requests a high-performance compute adapter from the primary native
/// backends (no surface). Software rasterizer adapters do not count as an
/// accelerator. Any failure is logged and reported as the CPU-only
/// capability; this function never returns an error.
pub async fn probe() -> AccelCapability {
    log::debug!("Probing for accelerator adapter");

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::PRIMARY, // Vulkan, Metal, DX12
        ..Default::default()
    });

    let adapter = match instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None, // No surface needed for compute
            force_fallback_adapter: false,
        })
        .await
    {
        Ok(adapter) => adapter,
        Err(err) => {
            log::info!("No accelerator adapter available: {}", err);
            return AccelCapability::cpu_only();
        }
    };

    let info = adapter.get_info();
    if info.device_type == wgpu::DeviceType::Cpu {
        log::info!(
            "Only a software adapter was found ({}); reporting CPU-only",
            info.name
        );
        return AccelCapability::cpu_only();
    }

    log::info!("Accelerator adapter found: {} ({:?})", info.name, info.backend);
    AccelCapability {
        available: true,
        adapter_name: Some(info.name),
    }
}

/// Blocking wrapper around [`probe`] for synchronous startup code.
pub fn probe_blocking() -> AccelCapability {
    pollster::block_on(probe())
}
