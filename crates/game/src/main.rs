//! Heli City: a helicopter flying over a procedurally generated city.

mod config;
mod events;
mod helicopter;
mod params;
mod render;
mod simulation;
mod state;
mod sun;
mod supply_crate;

use anyhow::Result;
use state::GameState;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Application handler for winit.
struct App {
    state: Option<GameState>,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_none() {
            let config = config::GameConfig::load();
            let window_attrs = Window::default_attributes()
                .with_title("Heli City")
                .with_inner_size(winit::dpi::LogicalSize::new(config.window_width, config.window_height));

            let window = match event_loop.create_window(window_attrs) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            match GameState::new(window.clone(), config) {
                Ok(s) => {
                    self.state = Some(s);
                    window.request_redraw();
                }
                Err(e) => {
                    log::error!("Failed to initialize simulation: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(state) = &mut self.state {
            if state.handle_window_event(event) || !state.running {
                event_loop.exit();
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                           Heli City                              ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║  FLIGHT:                                                         ║");
    println!("║    Up / Down  - Spool rotor, climb / descend                     ║");
    println!("║    R / F      - Accelerate / brake  │  D / G  - Turn             ║");
    println!("║    Left       - Orbit faster        │  Z      - Auto / manual    ║");
    println!("║    Space      - Drop crate          │  M      - New city         ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║  VIEW:                                                           ║");
    println!("║    1-4 - Fixed views  │ 5 - Free look  │ 6 - Cockpit             ║");
    println!("║    7   - Bottom       │ 8 - Follow     │ J/L/I/K - Look around   ║");
    println!("║    Q/A - Zoom         │ W/S - Wireframe / filled                 ║");
    println!("║    P   - Pause        │ +/- - Time faster / slower               ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");

    log::info!("Starting Heli City");

    let event_loop = EventLoop::new()?;
    // Redraw continuously; every redraw is one simulation tick.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}
