use lenia::domain::{RadialWeight, default_weight, weight_by_name};
use lenia::{Grid, LeniaConfig, Session, input, presets, rendering};
use macroquad::prelude::*;

fn selected_preset() -> LeniaConfig {
    match std::env::args().nth(1) {
        Some(name) => presets::by_name(&name).unwrap_or_else(|err| {
            log::warn!("{err}, falling back to '{}'", presets::classic().name);
            presets::classic()
        }),
        None => presets::classic(),
    }
}

fn selected_weight() -> Box<dyn RadialWeight> {
    match std::env::args().nth(2) {
        Some(name) => weight_by_name(&name).unwrap_or_else(|err| {
            log::warn!("{err}, falling back to '{}'", default_weight().name());
            default_weight()
        }),
        None => default_weight(),
    }
}

fn window_conf() -> Conf {
    let (width, height) = selected_preset().window_size();
    Conf {
        window_title: "Lenia".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = selected_preset();
    let cell_size = config.cell_size as f32;
    let kernel_view = config.name == presets::kernel_view().name;

    let mut session = match Session::new(config, selected_weight()) {
        Ok(session) => session,
        Err(err) => {
            log::error!("cannot start session: {err}");
            return;
        }
    };
    let kernel_grid = kernel_view.then(|| Grid::paint_kernel(session.kernel()));

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        for event in input::poll_events(input::QUICKSAVE) {
            if let Err(err) = session.handle(event.clone()) {
                log::warn!("{event:?} failed: {err}");
            }
        }
        session.tick();

        clear_background(BLACK);
        match &kernel_grid {
            Some(grid) => rendering::draw_grid(grid, cell_size),
            None => rendering::draw_grid(session.grid(), cell_size),
        }
        rendering::draw_status(&session);
        next_frame().await;
    }
}
