use std::process;

use macroquad::prelude::*;
use life_particles::{
    application::{FrameRequest, Simulation, SimulationConfig},
    input,
    rendering::{self, Canvas},
    ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Life & Particles".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// `life-particles [config.json]`, or `--example-config` to print the defaults.
fn load_config() -> SimulationConfig {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None => {
            log::info!("no config file given, using defaults");
            SimulationConfig::default()
        }
        Some("--example-config") => {
            println!("{}", SimulationConfig::default().to_json_pretty());
            process::exit(0);
        }
        Some(path) => match SimulationConfig::load(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path);
                config
            }
            Err(e) => {
                log::error!("{}: {}", path, e);
                eprintln!("Error loading config {}: {}", path, e);
                process::exit(1);
            }
        },
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = load_config();
    let (width, height) = (screen_width(), screen_height());
    let mut sim = Simulation::new(config, width, height);
    let mut canvas = Canvas::new(width, height);
    let mut frames = FrameRequest::new();

    // First frame starts the chain; every later one is requested by a tick
    sim.tick(&mut canvas, &mut frames);

    loop {
        let mouse_pos = mouse_position();
        // Taken before input so a resume, which ticks on its own, can't tick twice here
        let frame_due = frames.take();

        input::handle_resize(&mut sim, &mut canvas);

        let toolbar = ui::create_toolbar(sim.is_paused(), sim.color());
        input::handle_mouse(&mut sim, &toolbar, mouse_pos, &mut canvas, &mut frames);
        input::process_keyboard_input(&mut sim, &mut canvas, &mut frames);

        if frame_due {
            sim.tick(&mut canvas, &mut frames);
        }

        clear_background(BLACK);
        canvas.present();

        // Rebuilt so the pause label and swatch highlight follow this frame's input
        let toolbar = ui::create_toolbar(sim.is_paused(), sim.color());
        rendering::draw_toolbar(&sim, &toolbar, mouse_pos);

        next_frame().await;
    }
}
