use crate::core::data::point::Point;
use crate::core::view::plane_view::PlaneView;
use crate::core::view::view_config::ViewConfig;
use crate::presenters::pixel_format::copy_entries_to_rgba;
use pixels::{Pixels, SurfaceTexture};
use std::error::Error;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

pub fn run_gui(width: u32, height: u32) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let window = WindowBuilder::new()
        .with_title("Mandelbrot Set Viewer")
        .with_inner_size(LogicalSize::new(width as f64, height as f64))
        .with_resizable(false)
        .build(&event_loop)?;
    // pixels borrows the window for the life of the event loop
    let window: &'static winit::window::Window = Box::leak(Box::new(window));

    let surface_size = window.inner_size();
    let surface_texture = SurfaceTexture::new(surface_size.width, surface_size.height, window);
    let mut pixels = Pixels::new(surface_size.width, surface_size.height, surface_texture)?;

    let mut plane = PlaneView::new(surface_size.width, surface_size.height, ViewConfig::default())?;
    let mut cursor = Point { x: 0, y: 0 };

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape)
                {
                    elwt.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                cursor = Point {
                    x: position.x as i32,
                    y: position.y as i32,
                };
                plane.set_mouse_location(cursor);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                match button {
                    MouseButton::Left => {
                        plane.set_center(cursor);
                        plane.zoom_in();
                    }
                    MouseButton::Right => {
                        plane.set_center(cursor);
                        plane.zoom_out();
                    }
                    _ => return,
                }
                println!("{}\n", plane.status_text());
                window.request_redraw();
            }
            WindowEvent::Resized(size) => {
                // the view itself is fixed for the session; only the
                // surface scales
                if size.width > 0 && size.height > 0 {
                    if let Err(err) = pixels.resize_surface(size.width, size.height) {
                        eprintln!("surface resize error: {}", err);
                        elwt.exit();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = plane.refresh() {
                    eprintln!("render error: {}", err);
                    elwt.exit();
                    return;
                }

                copy_entries_to_rgba(plane.pixels(), pixels.frame_mut());

                if let Err(err) = pixels.render() {
                    eprintln!("present error: {}", err);
                    elwt.exit();
                }
            }
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;

    Ok(())
}
