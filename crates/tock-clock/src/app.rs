use tock_engine::core::{App, AppControl, FrameCtx};
use tock_engine::face::{ClockFace, FaceStyle};
use tock_engine::render::MeshRenderer;
use tock_engine::scene::DrawList;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Implements `tock_engine::core::App` for the clock window.
///
/// Owns the face catalogue and its GPU meshes; everything per frame is
/// derived from the frame's wall time.
pub struct ClockApp {
    face: ClockFace,
    renderer: MeshRenderer,
    draw_list: DrawList,
}

impl ClockApp {
    pub fn new(style: FaceStyle) -> Self {
        Self {
            face: ClockFace::build(style),
            renderer: MeshRenderer::new(),
            draw_list: DrawList::new(),
        }
    }
}

impl App for ClockApp {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.renderer.mesh_count() == 0 {
            self.renderer.upload_face(&ctx.render_ctx(), &self.face);
            log::info!(
                "{} clock shapes uploaded to {}",
                self.renderer.mesh_count(),
                ctx.gpu.adapter_info().name
            );
        }

        let angles = self.face.angles_at(ctx.time.wall);
        if ctx.time.frame_index % 600 == 0 {
            log::trace!(
                "frame {} at {} ({:.1} ms): {angles:?}",
                ctx.time.frame_index,
                ctx.time.wall,
                ctx.time.dt * 1000.0
            );
        }

        self.draw_list.clear();
        self.face.record(&angles, &mut self.draw_list);

        let renderer = &mut self.renderer;
        let draw_list = &self.draw_list;
        let background = self.face.style().palette.background;

        ctx.render(background, |rctx, target| {
            renderer.render(rctx, target, draw_list);
        })
    }
}
