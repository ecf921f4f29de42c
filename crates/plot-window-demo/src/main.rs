// File: crates/plot-window-demo/src/main.rs
// Summary: Interactive windowed plotter: CPU RGBA blit via winit + softbuffer,
// pointer-tracked focus marker and tooltip, Left/Right to cycle functions.

use plot_core::{Axis, Chart, RenderOptions, Theme};
use std::num::NonZeroU32;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Function choices cycled with the arrow keys.
const PRESETS: &[&str] = &[
    "sin(x)",
    "cos(x)",
    "sin(x) * exp(-x * x / 20)",
    "x^2 / 10 - 1",
    "tan(x)",
    "1/x",
];

const X_RANGE: (f64, f64) = (-6.28, 6.28);
const Y_SEED: (f64, f64) = (-1.0, 1.0);

fn build_chart(source: &str) -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("x", X_RANGE.0, X_RANGE.1);
    chart.y_axis = Axis::new("y", Y_SEED.0, Y_SEED.1);
    if let Err(e) = chart.plot_expression(source) {
        // presets are known-good; an axes-only chart is the fallback
        eprintln!("Error in function: {e}");
    }
    chart
}

fn main() {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(format!("Funcplot - {}", PRESETS[0]))
        .with_inner_size(winit::dpi::LogicalSize::new(800.0, 400.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut idx = 0usize;
    let mut chart = build_chart(PRESETS[idx]);
    let mut size = window.inner_size();
    let mut cursor: Option<(f64, f64)> = None;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    // pointer gone: hide the focus marker
                    cursor = None;
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    let switched = match key {
                        VirtualKeyCode::Right | VirtualKeyCode::Space => {
                            idx = (idx + 1) % PRESETS.len();
                            true
                        }
                        VirtualKeyCode::Left => {
                            idx = (idx + PRESETS.len() - 1) % PRESETS.len();
                            true
                        }
                        VirtualKeyCode::Escape => {
                            *cf = ControlFlow::Exit;
                            false
                        }
                        _ => false,
                    };
                    if switched {
                        chart = build_chart(PRESETS[idx]);
                        window.set_title(&format!("Funcplot - {}", PRESETS[idx]));
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let w = size.width.max(1);
                let h = size.height.max(1);
                surface
                    .resize(
                        NonZeroU32::new(w).expect("nonzero width"),
                        NonZeroU32::new(h).expect("nonzero height"),
                    )
                    .ok();

                let mut opts = RenderOptions::default();
                opts.width = w as i32;
                opts.height = h as i32;
                opts.theme = Theme::dark();
                opts.focus = cursor.map(|(x, y)| (x as f32, y as f32));

                match chart.render_to_rgba8(&opts) {
                    Ok((rgba, _, _, _)) => {
                        let mut frame = surface.buffer_mut().expect("frame");
                        let max_px = frame.len().min(rgba.len() / 4);
                        for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                            let r = px[0] as u32;
                            let g = px[1] as u32;
                            let b = px[2] as u32;
                            let a = px[3] as u32;
                            // Softbuffer expects 0RGB/ARGB layout on common platforms
                            frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
                        }
                        if let Err(e) = frame.present() {
                            eprintln!("present error: {e:?}");
                        }
                    }
                    Err(e) => eprintln!("render error: {e:?}"),
                }
            }
            _ => {}
        }
    });
}
