use std::borrow::Cow;
use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::face::{ClockFace, ShapeId};
use crate::geometry::{Shape, Topology, Vertex};
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList, ShapeCmd};

use super::common::{premul_alpha_blend, ViewportUniform, VIEWPORT_UBO_SIZE};

/// Primitive topology of an uploaded mesh.
///
/// wgpu has no fans, so `Topology::Fan` uploads as a triangle list.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MeshTopology {
    TriangleList,
    TriangleStrip,
    LineList,
}

impl MeshTopology {
    const ALL: [MeshTopology; 3] = [
        MeshTopology::TriangleList,
        MeshTopology::TriangleStrip,
        MeshTopology::LineList,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn primitive(self) -> wgpu::PrimitiveTopology {
        match self {
            MeshTopology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
            MeshTopology::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
            MeshTopology::LineList => wgpu::PrimitiveTopology::LineList,
        }
    }

    /// Vertex data and topology as uploaded for `shape`.
    pub fn prepare(shape: &Shape) -> (MeshTopology, Cow<'_, [Vertex]>) {
        match shape.topology() {
            Topology::Triangles => (MeshTopology::TriangleList, Cow::Borrowed(shape.vertices())),
            Topology::Strip => (MeshTopology::TriangleStrip, Cow::Borrowed(shape.vertices())),
            Topology::Lines => (MeshTopology::LineList, Cow::Borrowed(shape.vertices())),
            Topology::Fan => (
                MeshTopology::TriangleList,
                Cow::Owned(crate::geometry::fan_to_triangles(shape.vertices())),
            ),
        }
    }
}

struct GpuMesh {
    vbo: wgpu::Buffer,
    vertex_count: u32,
    topology: MeshTopology,
}

/// Renderer for `DrawCmd::Shape`.
///
/// Shapes are uploaded once with [`MeshRenderer::upload`]; each draw
/// command then selects a mesh by id and supplies its transform and color
/// as instance data.
#[derive(Default)]
pub struct MeshRenderer {
    meshes: HashMap<ShapeId, GpuMesh>,

    /// Format and sample count the pipelines were built for.
    pipeline_key: Option<(wgpu::TextureFormat, u32)>,
    pipelines: [Option<wgpu::RenderPipeline>; 3],

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,

    warned_missing: bool,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads `shape` under `id`, replacing any mesh already stored there.
    pub fn upload(&mut self, ctx: &RenderCtx<'_>, id: ShapeId, shape: &Shape) {
        let (topology, vertices) = MeshTopology::prepare(shape);
        if vertices.is_empty() {
            log::warn!("shape {id:?} has no drawable vertices");
            self.meshes.remove(&id);
            return;
        }

        let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tock mesh vbo"),
            contents: bytemuck::cast_slice(&*vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::debug!("uploaded {id:?}: {} vertices as {topology:?}", vertices.len());
        self.meshes.insert(
            id,
            GpuMesh {
                vbo,
                vertex_count: vertices.len() as u32,
                topology,
            },
        );
    }

    /// Uploads every shape of `face`.
    pub fn upload_face(&mut self, ctx: &RenderCtx<'_>, face: &ClockFace) {
        for (id, shape) in face.shapes() {
            self.upload(ctx, id, shape);
        }
    }

    /// Number of shapes currently resident on the GPU.
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &DrawList) {
        self.ensure_pipelines(ctx);
        self.ensure_bindings(ctx);

        let mut draws: Vec<(&GpuMesh, ShapeInstance)> = Vec::with_capacity(draw_list.len());
        for cmd in draw_list.iter() {
            let DrawCmd::Shape(cmd) = cmd;
            let Some(mesh) = self.meshes.get(&cmd.shape) else {
                if !self.warned_missing {
                    log::warn!("draw of {:?} skipped: shape not uploaded", cmd.shape);
                    self.warned_missing = true;
                }
                continue;
            };
            draws.push((mesh, ShapeInstance::from_cmd(cmd)));
        }

        if draws.is_empty() {
            return;
        }

        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        ctx.queue.write_buffer(
            ubo,
            0,
            bytemuck::bytes_of(&ViewportUniform::from_viewport(ctx.viewport)),
        );

        let required = draws.len();
        if required > self.instance_capacity || self.instance_vbo.is_none() {
            let new_cap = required.next_power_of_two().max(64);
            self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("tock mesh instance vbo"),
                size: (new_cap * std::mem::size_of::<ShapeInstance>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.instance_capacity = new_cap;
        }

        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };
        let raw: Vec<ShapeInstance> = draws.iter().map(|(_, inst)| *inst).collect();
        ctx.queue.write_buffer(instance_vbo, 0, bytemuck::cast_slice(&raw));

        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tock mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: target.resolve_target,
                ops: load_ops(),
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));

        let mut bound: Option<MeshTopology> = None;
        for (i, (mesh, _)) in draws.iter().enumerate() {
            if bound != Some(mesh.topology) {
                let Some(pipeline) = self.pipelines[mesh.topology.index()].as_ref() else {
                    continue;
                };
                rpass.set_pipeline(pipeline);
                bound = Some(mesh.topology);
            }
            let i = i as u32;
            rpass.set_vertex_buffer(0, mesh.vbo.slice(..));
            rpass.draw(0..mesh.vertex_count, i..i + 1);
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        let key = (ctx.surface_format, ctx.sample_count);
        if self.pipeline_key == Some(key) && self.pipelines.iter().all(Option::is_some) {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tock shape shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/shape.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tock shape bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(VIEWPORT_UBO_SIZE),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("tock shape pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        for topology in MeshTopology::ALL {
            let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("tock shape pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[vertex_layout(), ShapeInstance::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(premul_alpha_blend()),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: topology.primitive(),
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState {
                    count: ctx.sample_count,
                    ..Default::default()
                },
                multiview_mask: None,
                cache: None,
            });
            self.pipelines[topology.index()] = Some(pipeline);
        }

        self.pipeline_key = Some(key);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tock viewport ubo"),
            size: VIEWPORT_UBO_SIZE.get(),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tock shape bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }
}

/// Keeps what earlier passes (the clear) drew; the resolve target is
/// rewritten from the stored samples.
fn load_ops() -> wgpu::Operations<wgpu::Color> {
    wgpu::Operations {
        load: wgpu::LoadOp::Load,
        store: wgpu::StoreOp::Store,
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

/// Instance data layout (40 bytes):
///
///  offset  0  rotation   [f32; 2]   loc 1  (cos, sin)
///  offset  8  scale      [f32; 2]   loc 2
///  offset 16  translate  [f32; 2]   loc 3
///  offset 24  color      [f32; 4]   loc 4  (premultiplied)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct ShapeInstance {
    rotation: [f32; 2],
    scale: [f32; 2],
    translate: [f32; 2],
    color: [f32; 4],
}

impl ShapeInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // rotation
        2 => Float32x2, // scale
        3 => Float32x2, // translate
        4 => Float32x4  // color
    ];

    fn from_cmd(cmd: &ShapeCmd) -> Self {
        let (sin, cos) = cmd.transform.rotation.sin_cos();
        let t = &cmd.transform;
        Self {
            rotation: [cos, sin],
            scale: [t.scale.x, t.scale.y],
            translate: [t.translate.x, t.translate.y],
            color: cmd.color.to_array(),
        }
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::geometry::{disc, radial_ticks, ring, HandKind};
    use crate::paint::Color;
    use crate::scene::Transform;

    #[test]
    fn fans_upload_as_triangle_lists() {
        let d = disc(8, 1.0);
        let (topology, verts) = MeshTopology::prepare(&d);
        assert_eq!(topology, MeshTopology::TriangleList);
        assert_eq!(verts.len(), 8 * 3);
    }

    #[test]
    fn strips_and_lines_upload_unchanged() {
        let r = ring(16, 0.5, 1.0);
        let (topology, verts) = MeshTopology::prepare(&r);
        assert_eq!(topology, MeshTopology::TriangleStrip);
        assert!(matches!(verts, Cow::Borrowed(_)));
        assert_eq!(verts.len(), r.len());

        let (topology, _) = MeshTopology::prepare(&radial_ticks(60, 0.8, 0.9, None));
        assert_eq!(topology, MeshTopology::LineList);
    }

    #[test]
    fn new_renderer_has_nothing_resident() {
        assert_eq!(MeshRenderer::new().mesh_count(), 0);
    }

    #[test]
    fn mesh_pass_loads_and_stores() {
        let ops = load_ops();
        assert_eq!(ops.load, wgpu::LoadOp::Load);
        assert_eq!(ops.store, wgpu::StoreOp::Store);
    }

    #[test]
    fn prepared_vertices_outlive_only_their_shape() {
        let shapes = [disc(12, 0.5), ring(12, 0.5, 0.6), radial_ticks(4, 0.1, 0.2, Some(0.01))];
        let prepared: Vec<_> = shapes.iter().map(MeshTopology::prepare).collect();
        assert!(matches!(prepared[0].1, Cow::Owned(_)));
        assert!(matches!(prepared[1].1, Cow::Borrowed(_)));
        assert_eq!(prepared[2].0, MeshTopology::TriangleList);
        assert_eq!(prepared[2].1.len(), 24);
    }

    #[test]
    fn instance_matches_shader_layout() {
        assert_eq!(std::mem::size_of::<ShapeInstance>(), 40);
        assert_eq!(std::mem::size_of::<Vertex>(), 8);
    }

    #[test]
    fn instance_encodes_the_transform() {
        let cmd = ShapeCmd {
            shape: ShapeId::Hand(HandKind::Minute),
            transform: Transform::rotated(std::f32::consts::FRAC_PI_2)
                .with_translate(Vec2::new(0.25, -0.5)),
            color: Color::white(),
        };
        let inst = ShapeInstance::from_cmd(&cmd);
        assert!(inst.rotation[0].abs() < 1e-6);
        assert!((inst.rotation[1] - 1.0).abs() < 1e-6);
        assert_eq!(inst.scale, [1.0, 1.0]);
        assert_eq!(inst.translate, [0.25, -0.5]);
        assert_eq!(inst.color, [1.0, 1.0, 1.0, 1.0]);
    }
}
