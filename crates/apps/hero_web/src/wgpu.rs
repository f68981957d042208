#[cfg(target_arch = "wasm32")]
mod imp {
    use ::wgpu::util::DeviceExt;
    use std::borrow::Cow;
    use std::collections::HashMap;
    use wasm_bindgen::JsCast;

    use gpu::{MeshVertex, RenderCommand, RenderFrame, build_mesh};
    use hero::{HeroError, RenderBackend, SurfaceSize};
    use scene::components::{FaceSide, Rgb, Shading};
    use scene::globe::GlobePart;
    use scene::lighting::Lighting;

    /// WGSL Blinn-Phong with color/bump/specular maps. Untextured parts bind
    /// 1x1 white maps and a zero bump scale.
    const GLOBE_SHADER: &str = r#"
const PI: f32 = 3.141592653589793;

struct Globals {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
    ambient: vec4<f32>,
    sun_dir: vec4<f32>,
    sun_color: vec4<f32>,
    sky: vec4<f32>,
    ground: vec4<f32>,
};

struct Object {
    model: mat4x4<f32>,
    // rgb + opacity
    color: vec4<f32>,
    // rgb + shininess
    specular: vec4<f32>,
    // x: lit, y: bump scale, zw: bump texel size
    params: vec4<f32>,
};

@group(0) @binding(0) var<uniform> globals: Globals;
@group(1) @binding(0) var<uniform> object: Object;
@group(2) @binding(0) var color_map: texture_2d<f32>;
@group(2) @binding(1) var bump_map: texture_2d<f32>;
@group(2) @binding(2) var specular_map: texture_2d<f32>;
@group(2) @binding(3) var map_sampler: sampler;

struct VsOut {
    @builtin(position) pos: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
) -> VsOut {
    let world = object.model * vec4<f32>(position, 1.0);
    // Model matrices are rigid, so they transform normals directly.
    let n = (object.model * vec4<f32>(normal, 0.0)).xyz;
    return VsOut(globals.view_proj * world, world.xyz, n, uv);
}

fn bumped_normal(n: vec3<f32>, world_pos: vec3<f32>, uv: vec2<f32>) -> vec3<f32> {
    let texel = object.params.zw;
    let h = textureSample(bump_map, map_sampler, uv).r;
    let dh_du = (textureSample(bump_map, map_sampler, uv + vec2<f32>(texel.x, 0.0)).r - h) / texel.x;
    let dh_dv = (textureSample(bump_map, map_sampler, uv + vec2<f32>(0.0, texel.y)).r - h) / texel.y;

    let duv_dx = dpdx(uv);
    let duv_dy = dpdy(uv);
    let dh = object.params.y * vec2<f32>(
        dh_du * duv_dx.x + dh_dv * duv_dx.y,
        dh_du * duv_dy.x + dh_dv * duv_dy.y,
    );

    let sigma_x = dpdx(world_pos);
    let sigma_y = dpdy(world_pos);
    let r1 = cross(sigma_y, n);
    let r2 = cross(n, sigma_x);
    let det = dot(sigma_x, r1);
    let grad = sign(det) * (dh.x * r1 + dh.y * r2);
    let perturbed = abs(det) * n - grad;
    if length(perturbed) < 1e-12 {
        return n;
    }
    return normalize(perturbed);
}

@fragment
fn fs_main(in: VsOut, @builtin(front_facing) front: bool) -> @location(0) vec4<f32> {
    let facing = select(-1.0, 1.0, front);
    let geometric = normalize(in.normal) * facing;
    let n = bumped_normal(geometric, in.world_pos, in.uv);
    let albedo = object.color.rgb * textureSample(color_map, map_sampler, in.uv).rgb;
    let spec_mask = textureSample(specular_map, map_sampler, in.uv).r;

    if object.params.x < 0.5 {
        return vec4<f32>(albedo, object.color.a);
    }

    let l = normalize(globals.sun_dir.xyz);
    let v = normalize(globals.camera_pos.xyz - in.world_pos);
    let ndl = max(dot(n, l), 0.0);
    let hemi = mix(globals.ground.rgb, globals.sky.rgb, 0.5 * n.y + 0.5);
    let irradiance = globals.ambient.rgb + hemi + globals.sun_color.rgb * ndl;
    let diffuse = albedo * irradiance / PI;

    let shininess = max(object.specular.w, 1.0);
    let ndh = max(dot(n, normalize(l + v)), 0.0);
    let blinn = (shininess * 0.5 + 1.0) / PI * pow(ndh, shininess);
    let specular = object.specular.rgb * spec_mask * globals.sun_color.rgb * ndl * blinn;

    return vec4<f32>(diffuse + specular, object.color.a);
}
"#;

    #[repr(C)]
    #[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
    struct Globals {
        view_proj: [[f32; 4]; 4],
        camera_pos: [f32; 4],
        ambient: [f32; 4],
        sun_dir: [f32; 4],
        sun_color: [f32; 4],
        sky: [f32; 4],
        ground: [f32; 4],
    }

    #[repr(C)]
    #[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
    struct ObjectUniform {
        model: [[f32; 4]; 4],
        color: [f32; 4],
        specular: [f32; 4],
        params: [f32; 4],
    }

    struct GpuObject {
        vertex_buffer: ::wgpu::Buffer,
        index_buffer: ::wgpu::Buffer,
        index_count: u32,
        uniform_buffer: ::wgpu::Buffer,
        bind_group: ::wgpu::BindGroup,
    }

    /// Canvas-backed wgpu renderer for the hero globe. Owns its instance so
    /// nothing survives `dispose`.
    pub struct WgpuBackend {
        surface: ::wgpu::Surface<'static>,
        device: ::wgpu::Device,
        queue: ::wgpu::Queue,
        config: ::wgpu::SurfaceConfiguration,
        canvas: web_sys::HtmlCanvasElement,
        clear: ::wgpu::Color,
        /// Indexed by `pipeline_index`.
        pipelines: Vec<::wgpu::RenderPipeline>,
        globals_buffer: ::wgpu::Buffer,
        globals_bind_group: ::wgpu::BindGroup,
        object_layout: ::wgpu::BindGroupLayout,
        maps_layout: ::wgpu::BindGroupLayout,
        sampler: ::wgpu::Sampler,
        blank_maps: ::wgpu::BindGroup,
        surface_maps: Option<::wgpu::BindGroup>,
        objects: HashMap<GlobePart, GpuObject>,
        depth_view: ::wgpu::TextureView,
        /// Declared last so it drops after everything created from it.
        _instance: ::wgpu::Instance,
    }

    fn init_err(stage: &str, detail: impl std::fmt::Display) -> HeroError {
        HeroError::init(format!("{stage}: {detail}"))
    }

    fn srgb_to_linear(c: f32) -> f32 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    fn linear(rgb: Rgb, scale: f32) -> [f32; 4] {
        [
            srgb_to_linear(rgb.r) * scale,
            srgb_to_linear(rgb.g) * scale,
            srgb_to_linear(rgb.b) * scale,
            0.0,
        ]
    }

    fn pipeline_index(side: FaceSide, transparent: bool) -> usize {
        let side = match side {
            FaceSide::Front => 0,
            FaceSide::Back => 2,
        };
        side + usize::from(transparent)
    }

    fn create_depth_view(
        device: &::wgpu::Device,
        config: &::wgpu::SurfaceConfiguration,
    ) -> ::wgpu::TextureView {
        let tex = device.create_texture(&::wgpu::TextureDescriptor {
            label: Some("hero-depth"),
            size: ::wgpu::Extent3d {
                width: config.width.max(1),
                height: config.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: ::wgpu::TextureDimension::D2,
            format: ::wgpu::TextureFormat::Depth24Plus,
            usage: ::wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        tex.create_view(&::wgpu::TextureViewDescriptor::default())
    }

    fn upload_texture(
        device: &::wgpu::Device,
        queue: &::wgpu::Queue,
        label: &str,
        width: u32,
        height: u32,
        rgba: &[u8],
        format: ::wgpu::TextureFormat,
    ) -> ::wgpu::TextureView {
        let size = ::wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&::wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: ::wgpu::TextureDimension::D2,
            format,
            usage: ::wgpu::TextureUsages::TEXTURE_BINDING | ::wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            ::wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: ::wgpu::Origin3d::ZERO,
                aspect: ::wgpu::TextureAspect::All,
            },
            rgba,
            ::wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * size.width),
                rows_per_image: Some(size.height),
            },
            size,
        );
        texture.create_view(&::wgpu::TextureViewDescriptor::default())
    }

    fn create_maps_bind_group(
        device: &::wgpu::Device,
        layout: &::wgpu::BindGroupLayout,
        sampler: &::wgpu::Sampler,
        views: [&::wgpu::TextureView; 3],
        label: &str,
    ) -> ::wgpu::BindGroup {
        device.create_bind_group(&::wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                ::wgpu::BindGroupEntry {
                    binding: 0,
                    resource: ::wgpu::BindingResource::TextureView(views[0]),
                },
                ::wgpu::BindGroupEntry {
                    binding: 1,
                    resource: ::wgpu::BindingResource::TextureView(views[1]),
                },
                ::wgpu::BindGroupEntry {
                    binding: 2,
                    resource: ::wgpu::BindingResource::TextureView(views[2]),
                },
                ::wgpu::BindGroupEntry {
                    binding: 3,
                    resource: ::wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }

    fn uniform_entry(binding: u32) -> ::wgpu::BindGroupLayoutEntry {
        ::wgpu::BindGroupLayoutEntry {
            binding,
            visibility: ::wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: ::wgpu::BindingType::Buffer {
                ty: ::wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }
    }

    fn texture_entry(binding: u32) -> ::wgpu::BindGroupLayoutEntry {
        ::wgpu::BindGroupLayoutEntry {
            binding,
            visibility: ::wgpu::ShaderStages::FRAGMENT,
            ty: ::wgpu::BindingType::Texture {
                sample_type: ::wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: ::wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        }
    }

    fn create_pipeline(
        device: &::wgpu::Device,
        layout: &::wgpu::PipelineLayout,
        shader: &::wgpu::ShaderModule,
        format: ::wgpu::TextureFormat,
        side: FaceSide,
        transparent: bool,
    ) -> ::wgpu::RenderPipeline {
        let cull_mode = match side {
            FaceSide::Front => ::wgpu::Face::Back,
            FaceSide::Back => ::wgpu::Face::Front,
        };
        let blend = if transparent {
            ::wgpu::BlendState::ALPHA_BLENDING
        } else {
            ::wgpu::BlendState::REPLACE
        };
        device.create_render_pipeline(&::wgpu::RenderPipelineDescriptor {
            label: Some("hero-globe-pipeline"),
            layout: Some(layout),
            vertex: ::wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[::wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as ::wgpu::BufferAddress,
                    step_mode: ::wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        ::wgpu::VertexAttribute {
                            format: ::wgpu::VertexFormat::Float32x3,
                            offset: 0,
                            shader_location: 0,
                        },
                        ::wgpu::VertexAttribute {
                            format: ::wgpu::VertexFormat::Float32x3,
                            offset: 12,
                            shader_location: 1,
                        },
                        ::wgpu::VertexAttribute {
                            format: ::wgpu::VertexFormat::Float32x2,
                            offset: 24,
                            shader_location: 2,
                        },
                    ],
                }],
            },
            fragment: Some(::wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(::wgpu::ColorTargetState {
                    format,
                    blend: Some(blend),
                    write_mask: ::wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: ::wgpu::PrimitiveState {
                topology: ::wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: ::wgpu::FrontFace::Ccw,
                cull_mode: Some(cull_mode),
                polygon_mode: ::wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(::wgpu::DepthStencilState {
                format: ::wgpu::TextureFormat::Depth24Plus,
                // Blended parts test against the planet but never occlude.
                depth_write_enabled: !transparent,
                depth_compare: ::wgpu::CompareFunction::LessEqual,
                stencil: ::wgpu::StencilState::default(),
                bias: ::wgpu::DepthBiasState::default(),
            }),
            multisample: ::wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
    }

    fn globals_for(frame: &RenderFrame) -> Globals {
        let Lighting {
            ambient,
            sun,
            hemisphere,
        } = frame.lighting;
        let sun_dir = sun.direction().to_f32();
        let [x, y, z] = frame.camera_position;
        Globals {
            view_proj: frame.view_proj,
            camera_pos: [x, y, z, 1.0],
            ambient: linear(ambient.color, ambient.intensity),
            sun_dir: [sun_dir[0], sun_dir[1], sun_dir[2], 0.0],
            sun_color: linear(sun.color, sun.intensity),
            sky: linear(hemisphere.sky, hemisphere.intensity),
            ground: linear(hemisphere.ground, hemisphere.intensity),
        }
    }

    fn object_uniform(command: &RenderCommand) -> ObjectUniform {
        let RenderCommand::DrawMesh {
            model, material, ..
        } = command;
        let [r, g, b, _] = linear(material.color, 1.0);
        let (specular, shininess, lit) = match material.shading {
            Shading::Phong {
                specular,
                shininess,
            } => (linear(specular, 1.0), shininess, 1.0),
            Shading::Basic => ([0.0; 4], 1.0, 0.0),
        };
        let (bump_scale, texel) = match material.maps {
            Some(maps) => (maps.bump_scale, maps.bump_texel),
            None => (0.0, [1.0, 1.0]),
        };
        ObjectUniform {
            model: *model,
            color: [r, g, b, material.opacity() as f32],
            specular: [specular[0], specular[1], specular[2], shininess],
            params: [lit, bump_scale, texel[0], texel[1]],
        }
    }

    impl WgpuBackend {
        /// Create a canvas inside `container` and bring up wgpu on it. The
        /// canvas is removed again if any step fails.
        pub async fn create(
            container: &web_sys::HtmlElement,
            size: SurfaceSize,
            clear_rgba: [f64; 4],
        ) -> Result<Self, HeroError> {
            let document = container
                .owner_document()
                .ok_or_else(|| HeroError::init("container is detached from the document"))?;
            let canvas = document
                .create_element("canvas")
                .map_err(|e| init_err("canvas", format!("{e:?}")))?
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .map_err(|_| HeroError::init("canvas element has an unexpected type"))?;
            let _ = canvas.set_attribute("style", "display:block;width:100%;height:100%;");
            let (width, height) = size.physical();
            canvas.set_width(width);
            canvas.set_height(height);
            container
                .append_child(&canvas)
                .map_err(|e| init_err("canvas", format!("{e:?}")))?;

            match Self::init(canvas.clone(), width, height, clear_rgba).await {
                Ok(backend) => Ok(backend),
                Err(err) => {
                    canvas.remove();
                    Err(err)
                }
            }
        }

        async fn init(
            canvas: web_sys::HtmlCanvasElement,
            width: u32,
            height: u32,
            clear_rgba: [f64; 4],
        ) -> Result<Self, HeroError> {
            let instance = ::wgpu::Instance::new(&::wgpu::InstanceDescriptor {
                backends: ::wgpu::Backends::BROWSER_WEBGPU | ::wgpu::Backends::GL,
                ..Default::default()
            });

            let surface = instance
                .create_surface(::wgpu::SurfaceTarget::Canvas(canvas.clone()))
                .map_err(|e| init_err("surface", e))?;

            let adapter = instance
                .request_adapter(&::wgpu::RequestAdapterOptions {
                    power_preference: ::wgpu::PowerPreference::HighPerformance,
                    compatible_surface: Some(&surface),
                    force_fallback_adapter: false,
                })
                .await
                .map_err(|e| init_err("adapter", e))?;

            let (device, queue) = adapter
                .request_device(&::wgpu::DeviceDescriptor {
                    label: Some("hero-wgpu-device"),
                    required_features: ::wgpu::Features::empty(),
                    required_limits: ::wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    ..Default::default()
                })
                .await
                .map_err(|e| init_err("device", e))?;

            let caps = surface.get_capabilities(&adapter);
            let format = caps
                .formats
                .iter()
                .copied()
                .find(|f| f.is_srgb())
                .or_else(|| caps.formats.first().copied())
                .ok_or_else(|| HeroError::init("surface reports no formats"))?;
            let alpha_mode = if caps
                .alpha_modes
                .contains(&::wgpu::CompositeAlphaMode::PreMultiplied)
            {
                ::wgpu::CompositeAlphaMode::PreMultiplied
            } else {
                caps.alpha_modes
                    .first()
                    .copied()
                    .unwrap_or(::wgpu::CompositeAlphaMode::Auto)
            };

            let config = ::wgpu::SurfaceConfiguration {
                usage: ::wgpu::TextureUsages::RENDER_ATTACHMENT,
                format,
                width,
                height,
                desired_maximum_frame_latency: 2,
                present_mode: ::wgpu::PresentMode::Fifo,
                alpha_mode,
                view_formats: vec![],
            };
            surface.configure(&device, &config);
            let depth_view = create_depth_view(&device, &config);

            let shader = device.create_shader_module(::wgpu::ShaderModuleDescriptor {
                label: Some("hero-globe-shader"),
                source: ::wgpu::ShaderSource::Wgsl(Cow::Borrowed(GLOBE_SHADER)),
            });

            let globals_layout = device.create_bind_group_layout(&::wgpu::BindGroupLayoutDescriptor {
                label: Some("hero-globals-bgl"),
                entries: &[uniform_entry(0)],
            });
            let object_layout = device.create_bind_group_layout(&::wgpu::BindGroupLayoutDescriptor {
                label: Some("hero-object-bgl"),
                entries: &[uniform_entry(0)],
            });
            let maps_layout = device.create_bind_group_layout(&::wgpu::BindGroupLayoutDescriptor {
                label: Some("hero-maps-bgl"),
                entries: &[
                    texture_entry(0),
                    texture_entry(1),
                    texture_entry(2),
                    ::wgpu::BindGroupLayoutEntry {
                        binding: 3,
                        visibility: ::wgpu::ShaderStages::FRAGMENT,
                        ty: ::wgpu::BindingType::Sampler(::wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

            let globals_buffer = device.create_buffer(&::wgpu::BufferDescriptor {
                label: Some("hero-globals"),
                size: std::mem::size_of::<Globals>() as u64,
                usage: ::wgpu::BufferUsages::UNIFORM | ::wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let globals_bind_group = device.create_bind_group(&::wgpu::BindGroupDescriptor {
                label: Some("hero-globals-bg"),
                layout: &globals_layout,
                entries: &[::wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buffer.as_entire_binding(),
                }],
            });

            let sampler = device.create_sampler(&::wgpu::SamplerDescriptor {
                label: Some("hero-map-sampler"),
                address_mode_u: ::wgpu::AddressMode::Repeat,
                address_mode_v: ::wgpu::AddressMode::ClampToEdge,
                mag_filter: ::wgpu::FilterMode::Linear,
                min_filter: ::wgpu::FilterMode::Linear,
                ..Default::default()
            });

            let white = [255u8; 4];
            let blank_color = upload_texture(
                &device,
                &queue,
                "hero-blank-color",
                1,
                1,
                &white,
                ::wgpu::TextureFormat::Rgba8UnormSrgb,
            );
            let blank_data = upload_texture(
                &device,
                &queue,
                "hero-blank-data",
                1,
                1,
                &white,
                ::wgpu::TextureFormat::Rgba8Unorm,
            );
            let blank_maps = create_maps_bind_group(
                &device,
                &maps_layout,
                &sampler,
                [&blank_color, &blank_data, &blank_data],
                "hero-blank-maps",
            );

            let pipeline_layout = device.create_pipeline_layout(&::wgpu::PipelineLayoutDescriptor {
                label: Some("hero-globe-pipeline-layout"),
                bind_group_layouts: &[&globals_layout, &object_layout, &maps_layout],
                immediate_size: 0,
            });
            let mut pipelines = Vec::with_capacity(4);
            for side in [FaceSide::Front, FaceSide::Back] {
                for transparent in [false, true] {
                    debug_assert_eq!(pipelines.len(), pipeline_index(side, transparent));
                    pipelines.push(create_pipeline(
                        &device,
                        &pipeline_layout,
                        &shader,
                        format,
                        side,
                        transparent,
                    ));
                }
            }

            let [r, g, b, a] = clear_rgba;
            let premultiply = if alpha_mode == ::wgpu::CompositeAlphaMode::PreMultiplied {
                a
            } else {
                1.0
            };

            tracing::info!(width, height, format = ?format, "hero wgpu backend ready");

            Ok(WgpuBackend {
                surface,
                device,
                queue,
                config,
                canvas,
                clear: ::wgpu::Color {
                    r: r * premultiply,
                    g: g * premultiply,
                    b: b * premultiply,
                    a,
                },
                pipelines,
                globals_buffer,
                globals_bind_group,
                object_layout,
                maps_layout,
                sampler,
                blank_maps,
                surface_maps: None,
                objects: HashMap::new(),
                depth_view,
                _instance: instance,
            })
        }

        fn ensure_object(&mut self, command: &RenderCommand) {
            let RenderCommand::DrawMesh { part, geometry, .. } = command;
            if self.objects.contains_key(part) {
                return;
            }
            let mesh = build_mesh(geometry);
            let vertex_buffer = self
                .device
                .create_buffer_init(&::wgpu::util::BufferInitDescriptor {
                    label: Some("hero-mesh-vertices"),
                    contents: bytemuck::cast_slice(&mesh.vertices),
                    usage: ::wgpu::BufferUsages::VERTEX,
                });
            let index_buffer = self
                .device
                .create_buffer_init(&::wgpu::util::BufferInitDescriptor {
                    label: Some("hero-mesh-indices"),
                    contents: bytemuck::cast_slice(&mesh.indices),
                    usage: ::wgpu::BufferUsages::INDEX,
                });
            let uniform_buffer = self.device.create_buffer(&::wgpu::BufferDescriptor {
                label: Some("hero-object"),
                size: std::mem::size_of::<ObjectUniform>() as u64,
                usage: ::wgpu::BufferUsages::UNIFORM | ::wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = self.device.create_bind_group(&::wgpu::BindGroupDescriptor {
                label: Some("hero-object-bg"),
                layout: &self.object_layout,
                entries: &[::wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });
            self.objects.insert(
                *part,
                GpuObject {
                    vertex_buffer,
                    index_buffer,
                    index_count: mesh.indices.len() as u32,
                    uniform_buffer,
                    bind_group,
                },
            );
        }
    }

    impl RenderBackend for WgpuBackend {
        fn resize(&mut self, size: SurfaceSize) {
            let (width, height) = size.physical();
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = create_depth_view(&self.device, &self.config);
        }

        fn install_textures(&mut self, textures: &assets::TextureSet) -> Result<(), HeroError> {
            let limit = self.device.limits().max_texture_dimension_2d;
            for slot in assets::TextureSlot::ALL {
                let t = textures.get(slot);
                if t.width > limit || t.height > limit {
                    return Err(HeroError::Render(format!(
                        "{slot} texture {}x{} exceeds device limit {limit}",
                        t.width, t.height
                    )));
                }
            }
            let color = upload_texture(
                &self.device,
                &self.queue,
                "hero-color-map",
                textures.color.width,
                textures.color.height,
                &textures.color.rgba,
                ::wgpu::TextureFormat::Rgba8UnormSrgb,
            );
            let bump = upload_texture(
                &self.device,
                &self.queue,
                "hero-bump-map",
                textures.bump.width,
                textures.bump.height,
                &textures.bump.rgba,
                ::wgpu::TextureFormat::Rgba8Unorm,
            );
            let specular = upload_texture(
                &self.device,
                &self.queue,
                "hero-specular-map",
                textures.specular.width,
                textures.specular.height,
                &textures.specular.rgba,
                ::wgpu::TextureFormat::Rgba8Unorm,
            );
            self.surface_maps = Some(create_maps_bind_group(
                &self.device,
                &self.maps_layout,
                &self.sampler,
                [&color, &bump, &specular],
                "hero-surface-maps",
            ));
            Ok(())
        }

        fn draw(&mut self, frame: &RenderFrame) -> Result<(), HeroError> {
            for command in &frame.commands {
                self.ensure_object(command);
            }

            let target = self
                .surface
                .get_current_texture()
                .map_err(|e| HeroError::Render(format!("surface acquire failed: {e}")))?;
            let view = target
                .texture
                .create_view(&::wgpu::TextureViewDescriptor::default());

            self.queue.write_buffer(
                &self.globals_buffer,
                0,
                bytemuck::bytes_of(&globals_for(frame)),
            );
            for command in &frame.commands {
                let RenderCommand::DrawMesh { part, .. } = command;
                if let Some(object) = self.objects.get(part) {
                    self.queue.write_buffer(
                        &object.uniform_buffer,
                        0,
                        bytemuck::bytes_of(&object_uniform(command)),
                    );
                }
            }

            let mut encoder = self
                .device
                .create_command_encoder(&::wgpu::CommandEncoderDescriptor {
                    label: Some("hero-frame-encoder"),
                });
            {
                let mut rpass = encoder.begin_render_pass(&::wgpu::RenderPassDescriptor {
                    label: Some("hero-globe-pass"),
                    color_attachments: &[Some(::wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        depth_slice: None,
                        ops: ::wgpu::Operations {
                            load: ::wgpu::LoadOp::Clear(self.clear),
                            store: ::wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: Some(::wgpu::RenderPassDepthStencilAttachment {
                        view: &self.depth_view,
                        depth_ops: Some(::wgpu::Operations {
                            load: ::wgpu::LoadOp::Clear(1.0),
                            store: ::wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    }),
                    occlusion_query_set: None,
                    timestamp_writes: None,
                    multiview_mask: None,
                });

                rpass.set_bind_group(0, &self.globals_bind_group, &[]);
                for command in &frame.commands {
                    let RenderCommand::DrawMesh { part, material, .. } = command;
                    let Some(object) = self.objects.get(part) else {
                        continue;
                    };
                    let maps = match (material.maps, &self.surface_maps) {
                        (Some(_), Some(surface)) => surface,
                        _ => &self.blank_maps,
                    };
                    let pipeline =
                        &self.pipelines[pipeline_index(material.side, material.is_transparent())];
                    rpass.set_pipeline(pipeline);
                    rpass.set_bind_group(1, &object.bind_group, &[]);
                    rpass.set_bind_group(2, maps, &[]);
                    rpass.set_vertex_buffer(0, object.vertex_buffer.slice(..));
                    rpass.set_index_buffer(object.index_buffer.slice(..), ::wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..object.index_count, 0, 0..1);
                }
            }

            self.queue.submit(std::iter::once(encoder.finish()));
            target.present();
            Ok(())
        }

        fn dispose(self) {
            let WgpuBackend {
                surface, canvas, ..
            } = self;
            drop(surface);
            canvas.remove();
            tracing::info!("hero wgpu backend disposed");
            // The remaining GPU objects, then the instance, drop here.
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use gpu::RenderFrame;
    use hero::{HeroError, RenderBackend, SurfaceSize};

    #[derive(Debug, Default)]
    pub struct WgpuBackend;

    impl WgpuBackend {
        pub async fn create(
            _container: &web_sys::HtmlElement,
            _size: SurfaceSize,
            _clear_rgba: [f64; 4],
        ) -> Result<Self, HeroError> {
            Err(HeroError::init(
                "wgpu initialization is only available on wasm32 targets",
            ))
        }
    }

    impl RenderBackend for WgpuBackend {
        fn resize(&mut self, _size: SurfaceSize) {}

        fn install_textures(&mut self, _textures: &assets::TextureSet) -> Result<(), HeroError> {
            Ok(())
        }

        fn draw(&mut self, _frame: &RenderFrame) -> Result<(), HeroError> {
            Err(HeroError::Render(
                "wgpu rendering is only available on wasm32 targets".to_string(),
            ))
        }

        fn dispose(self) {}
    }
}

pub use imp::WgpuBackend;
