//! GLFW window and OpenGL context management
//!
//! Creates the window with a 3.3 core profile context, wires up event
//! polling for every input class the viewer consumes, and loads the `glow`
//! function table from the context. Input events accumulate in the GLFW
//! message queue and are drained explicitly by the application loop, which
//! keeps event application synchronous and single-threaded.

use glfw::Context as _;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("GLFW initialization failed")]
    InitializationFailed,

    #[error("window creation failed")]
    CreationFailed,
}

pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper owning the OpenGL context and the event queue
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    gl: glow::Context,
}

impl Window {
    /// Create a window with an OpenGL 3.3 core context and vsync enabled.
    ///
    /// Fatal on GLFW or window-creation failure; there is no degraded mode.
    pub fn new(title: &str, width: u32, height: u32) -> WindowResult<Self> {
        let mut glfw =
            glfw::init(glfw::fail_on_errors).map_err(|_| WindowError::InitializationFailed)?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.set_key_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_mouse_button_polling(true);
        window.set_scroll_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_close_polling(true);

        window.make_current();
        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

        let gl = unsafe {
            glow::Context::from_loader_function(|name| window.get_proc_address(name) as *const _)
        };

        log::info!("created {width}x{height} window with OpenGL 3.3 core context");

        Ok(Self {
            glfw,
            window,
            events,
            gl,
        })
    }

    /// The loaded GL function table
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Whether a close has been requested
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Request an orderly shutdown at the end of the current iteration
    pub fn request_close(&mut self) {
        self.window.set_should_close(true);
    }

    /// Current drawable size in pixels
    pub fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    /// Present the frame
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Pump the OS event queue; queued events become visible to
    /// [`Window::drain_events`]
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Drain all pending window events captured since the last poll
    pub fn drain_events(&self) -> Vec<glfw::WindowEvent> {
        glfw::flush_messages(&self.events)
            .map(|(_, event)| event)
            .collect()
    }
}
