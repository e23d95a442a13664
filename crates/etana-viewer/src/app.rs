//! The viewer's per-frame logic.

use anyhow::{Context, Result};
use glam::{Mat4, Vec3};

use etana_engine::camera::{CameraMovement, FlyCamera};
use etana_engine::core::{App, AppControl, FrameCtx};
use etana_engine::input::Key;
use etana_engine::render::{MeshBuffer, MeshData, SceneUniforms, ShaderProgram};
use etana_engine::assets::ShaderPair;

/// Teal background, readable against the lit grey model.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.2,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

/// The model is authored at 10x scale.
const MODEL_SCALE: f32 = 0.1;

/// GPU-side resources, created on the first frame once a device exists.
struct Scene {
    program: ShaderProgram,
    mesh: MeshBuffer,
}

pub struct ViewerApp {
    shaders: ShaderPair,
    /// CPU mesh awaiting upload; taken when the scene is created.
    pending_model: Option<MeshData>,
    scene: Option<Scene>,

    camera: FlyCamera,
    model_matrix: Mat4,
    tint: Vec3,
}

impl ViewerApp {
    pub fn new(shaders: ShaderPair, model: MeshData) -> Self {
        Self {
            shaders,
            pending_model: Some(model),
            scene: None,
            camera: FlyCamera::new(Vec3::new(0.0, 1.5, 6.0)),
            model_matrix: Mat4::from_scale(Vec3::splat(MODEL_SCALE)),
            tint: Vec3::ONE,
        }
    }

    fn create_scene(
        &mut self,
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
    ) -> Result<Scene> {
        let program = ShaderProgram::create(
            device,
            surface_format,
            &self.shaders.vertex,
            &self.shaders.fragment,
        )
        .context("shader program creation failed")?;

        let model = self
            .pending_model
            .take()
            .context("scene already created")?;
        let mesh = MeshBuffer::create(device, model).context("mesh upload failed")?;

        log::info!(
            "scene ready: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(Scene { program, mesh })
    }

    fn drive_camera(&mut self, ctx: &FrameCtx<'_, '_>) {
        let dt = ctx.time.dt;

        if ctx.input.key_down(Key::W) {
            self.camera.process_keyboard(CameraMovement::Forward, dt);
        }
        if ctx.input.key_down(Key::S) {
            self.camera.process_keyboard(CameraMovement::Backward, dt);
        }
        if ctx.input.key_down(Key::A) {
            self.camera.process_keyboard(CameraMovement::Left, dt);
        }
        if ctx.input.key_down(Key::D) {
            self.camera.process_keyboard(CameraMovement::Right, dt);
        }

        let frame = ctx.input_frame;
        if frame.cursor_dx != 0.0 || frame.cursor_dy != 0.0 {
            self.camera
                .process_mouse_movement(frame.cursor_dx, frame.cursor_dy);
        }
        if frame.scroll_lines != 0.0 {
            self.camera.process_mouse_scroll(frame.scroll_lines);
        }
    }
}

impl App for ViewerApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.keys_pressed.contains(&Key::Escape) {
            return AppControl::Exit;
        }

        if self.scene.is_none() {
            match self.create_scene(ctx.gpu.device(), ctx.gpu.surface_format()) {
                Ok(scene) => self.scene = Some(scene),
                Err(e) => {
                    // No scene means nothing to draw, ever; bail out.
                    log::error!("failed to create scene: {e:#}");
                    return AppControl::Exit;
                }
            }
        }

        self.drive_camera(ctx);

        let Some(scene) = self.scene.as_ref() else {
            return AppControl::Continue;
        };

        let model = self.model_matrix;
        let view = self.camera.view_matrix();
        let camera = &self.camera;
        let tint = self.tint;

        ctx.render(CLEAR_COLOR, |rctx, rpass| {
            let uniforms = SceneUniforms::new(
                model,
                view,
                camera.projection_matrix(rctx.aspect_ratio),
                tint,
            );
            scene.program.write_uniforms(rctx.queue, &uniforms);
            scene.program.bind(rpass);
            scene.mesh.draw(rpass);
        })
    }
}
