/// Renderer-facing context (device/queue + surface format + aspect).
///
/// This is intentionally small and stable.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Width/height ratio of the drawable, for projection derivation.
    pub aspect_ratio: f32,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        aspect_ratio: f32,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            aspect_ratio,
        }
    }
}
