//! Interactive explorer for the tetration fractal (z <- c^z).
//!
//! A single control thread owns the view state and drives the render loop;
//! the divergence kernel fans out over rayon's pool. Left click zooms in on
//! the clicked point, right click returns to the previous view, and every
//! render is also saved as a PNG snapshot named from the view parameters.

mod config;
mod controller;
mod coords;
mod presenter;
mod timefmt;

use std::time::Instant;

use anyhow::Context;
use log::{error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use controller::{InputEvent, ViewController};
use presenter::{blit_rgba, PngPresenter, Presenter};
use tetrascope_compute::{compute_divergence, DivergenceMap};
use tetrascope_core::{IterationParams, SampleGrid, ViewState};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("tetrascope")
        .with_inner_size(LogicalSize::new(config::NX as f64, config::NY as f64))
        .with_resizable(false)
        .build(&event_loop)
        .context("creating window")?;

    let mut pixels = {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, &window);
        Pixels::new(config::NX, config::NY, surface).context("creating framebuffer")?
    };

    let params = config::iteration_params();
    // Starts in the pending phase, so the first pass through the loop
    // renders the initial view before any input arrives.
    let mut controller = ViewController::new(config::initial_view()?, config::ZOOM_STEP);
    let mut png =
        PngPresenter::new(std::env::current_dir().context("resolving snapshot directory")?);
    let mut cursor: Option<PhysicalPosition<f64>> = None;

    event_loop.run(move |event, _, control_flow| {
        // Block until the next relevant event between render cycles.
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => {
                let input = match event {
                    WindowEvent::CloseRequested => Some(InputEvent::Close),
                    WindowEvent::CursorMoved { position, .. } => {
                        cursor = Some(position);
                        None
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button,
                        ..
                    } => translate_click(button, cursor, controller.current(), &pixels),
                    WindowEvent::Resized(size) => {
                        if let Err(err) = pixels.resize_surface(size.width, size.height) {
                            error!("resizing surface failed: {err}");
                            *control_flow = ControlFlow::Exit;
                        }
                        None
                    }
                    _ => None,
                };

                match input {
                    Some(InputEvent::Close) => {
                        info!("close requested, shutting down");
                        *control_flow = ControlFlow::Exit;
                    }
                    Some(transition) => {
                        if let Err(err) = controller.handle(transition) {
                            error!("rejected input: {err}");
                        }
                    }
                    None => {}
                }
            }
            Event::MainEventsCleared => {
                if let Some(view) = controller.take_pending() {
                    let started = Instant::now();
                    match render_view(&view, &params, &mut pixels, &mut png) {
                        Ok(map) => {
                            info!(
                                "{} of {} points divergent",
                                map.count_divergent(),
                                map.cells().len()
                            );
                            info!("Delta time>> {}", timefmt::format_hms(started.elapsed()));
                            window.request_redraw();
                        }
                        Err(err) => {
                            // No retry: a failed render cycle is surfaced
                            // and the loop terminates.
                            error!("render failed: {err:#}");
                            *control_flow = ControlFlow::Exit;
                        }
                    }
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(err) = pixels.render() {
                    error!("presenting frame failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

/// One render cycle: sampler -> divergence engine -> presenters.
fn render_view(
    view: &ViewState,
    params: &IterationParams,
    pixels: &mut Pixels,
    png: &mut PngPresenter,
) -> anyhow::Result<DivergenceMap> {
    let grid = SampleGrid::sample(view, config::NX, config::NY)?;
    let map = compute_divergence(&grid, params);
    blit_rgba(&map, pixels.frame_mut());
    png.present(&map, view)?;
    Ok(map)
}

/// Turn a mouse press into a view transition request, or None for clicks
/// outside the drawing area and buttons without a binding.
fn translate_click(
    button: MouseButton,
    cursor: Option<PhysicalPosition<f64>>,
    view: &ViewState,
    pixels: &Pixels,
) -> Option<InputEvent> {
    match button {
        MouseButton::Left => {
            let position = cursor?;
            let (px, py) = pixels
                .window_pos_to_pixel((position.x as f32, position.y as f32))
                .ok()?;
            let (x, y) = coords::pixel_to_plane(view, px as u32, py as u32, config::NX, config::NY);
            Some(InputEvent::ZoomIn { x, y })
        }
        MouseButton::Right => Some(InputEvent::ZoomOut),
        _ => None,
    }
}
