//! Chair scene viewer
//!
//! Renders a four-part chair model and a lamp marker under a two-light rig.
//! Controls: hold LeftAlt + left mouse and drag to orbit the camera, scroll
//! to zoom the field of view, F to refocus the default view, Left/Right
//! arrows for discrete 45-degree yaw steps, Escape to quit.

mod config;
mod scene;

use std::path::Path;

use glfw::{Action, Key, WindowEvent};
use glow::HasContext as _;
use scene_engine::foundation::logging;
use scene_engine::prelude::*;

use crate::config::ViewerConfig;
use crate::scene::Scene;

const CONFIG_PATH: &str = "chair_viewer.toml";

fn main() {
    logging::init();
    if let Err(err) = run() {
        log::error!("fatal: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ViewerConfig::load_or_default(Path::new(CONFIG_PATH))?;

    let mut window = Window::new(
        &config.window.title,
        config.window.width,
        config.window.height,
    )?;
    let mut scene = Scene::load(window.gl(), &config)?;

    let mut camera = OrbitCamera::new();
    let mut input = InputState::new();
    let mut timer = Timer::new();

    unsafe { window.gl().enable(glow::DEPTH_TEST) };

    log::info!("entering render loop");
    while !window.should_close() {
        timer.update();

        let (width, height) = window.framebuffer_size();
        let aspect = width as f32 / height.max(1) as f32;
        let view = camera.view_matrix();
        let projection = camera.projection_matrix(aspect);

        draw_frame(
            window.gl(),
            &mut scene,
            &camera,
            &config,
            width,
            height,
            &view,
            &projection,
        );

        // Present, then let queued input shape the next frame's matrices
        window.swap_buffers();
        window.poll_events();
        for event in window.drain_events() {
            apply_event(event, &mut window, &mut input, &mut camera);
        }
        camera.transform_camera(&input);
    }

    log::info!(
        "render loop exited after {} frames ({:.1}s)",
        timer.frame_count(),
        timer.total_time()
    );
    scene.destroy(window.gl());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_frame(
    gl: &glow::Context,
    scene: &mut Scene,
    camera: &OrbitCamera,
    config: &ViewerConfig,
    width: i32,
    height: i32,
    view: &Mat4,
    projection: &Mat4,
) {
    unsafe {
        gl.viewport(0, 0, width, height);
        let [r, g, b, a] = config.clear_color;
        gl.clear_color(r, g, b, a);
        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
    }

    // Chair pass: matrices and the light rig, then the three model meshes
    scene.model_shader.use_program(gl);
    scene.model_shader.set_mat4(gl, "view", view);
    scene.model_shader.set_mat4(gl, "projection", projection);
    scene
        .lighting
        .apply(gl, &mut scene.model_shader, camera.position);

    scene.wood.bind(gl);
    scene.frame.bind(gl);
    for index in 0..scene::INSTANCE_COUNT {
        let model = scene::frame_instance_matrix(index);
        scene.model_shader.set_mat4(gl, "model", &model);
        scene.frame.draw(gl);
    }
    unsafe { gl.bind_vertex_array(None) };

    let identity = Mat4::identity();
    scene.wood.bind(gl);
    scene.back.bind(gl);
    scene.model_shader.set_mat4(gl, "model", &identity);
    scene.back.draw(gl);
    unsafe { gl.bind_vertex_array(None) };

    scene.fabric.bind(gl);
    scene.seat.bind(gl);
    scene.model_shader.set_mat4(gl, "model", &identity);
    scene.seat.draw(gl);
    unsafe {
        gl.bind_vertex_array(None);
        gl.use_program(None);
    }

    // Lamp pass: four scaled markers at the key light
    scene.lamp_shader.use_program(gl);
    scene.lamp_shader.set_mat4(gl, "view", view);
    scene.lamp_shader.set_mat4(gl, "projection", projection);
    scene.lamp.bind(gl);
    for index in 0..scene::INSTANCE_COUNT {
        let model = scene::lamp_instance_matrix(index, scene.lighting.key_light_position());
        scene.lamp_shader.set_mat4(gl, "model", &model);
        scene.lamp.draw(gl);
    }
    unsafe {
        gl.bind_vertex_array(None);
        gl.use_program(None);
    }
}

fn apply_event(
    event: WindowEvent,
    window: &mut Window,
    input: &mut InputState,
    camera: &mut OrbitCamera,
) {
    match event {
        WindowEvent::Key(Key::Escape, _, Action::Press, _) => window.request_close(),
        WindowEvent::Key(key, _, Action::Press, _) => input.on_key(key, true),
        WindowEvent::Key(key, _, Action::Release, _) => input.on_key(key, false),
        WindowEvent::MouseButton(button, Action::Press, _) => input.on_mouse_button(button, true),
        WindowEvent::MouseButton(button, Action::Release, _) => {
            input.on_mouse_button(button, false);
        }
        WindowEvent::CursorPos(x, y) => {
            let (dx, dy) = input.cursor_delta(x as f32, y as f32);
            camera.orbit(dx, dy);
        }
        WindowEvent::Scroll(_, yoffset) => camera.zoom(yoffset as f32),
        // Viewport size is re-queried every frame, so resize events need no
        // bookkeeping here
        _ => {}
    }
}
