use std::time::Instant;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use pixel_snake::{Display, Flow, FrameClock, Game, GameConfig, InputQueue};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixel_snake=info,snake=info".into()),
        )
        .init();

    let config = GameConfig::default();
    let event_loop = EventLoop::new();
    let mut display =
        Display::open(&event_loop, &config).context("failed to open the game window")?;

    let grid = config.grid();
    info!(
        width = config.width,
        height = config.height,
        cols = grid.cols(),
        rows = grid.rows(),
        "window opened"
    );

    let mut game = Game::new(config);
    let mut input = WinitInputHelper::new();
    let mut queue = InputQueue::new();
    let mut clock = FrameClock::new(Instant::now());

    event_loop.run(move |event, _, control_flow| {
        queue.record(&event);

        // Only act once the current batch of window events is done
        if !input.update(&event) {
            return;
        }

        let now = Instant::now();
        // Queued input, quit included, waits for the next due frame
        if clock.is_due(now) {
            let flow = game.frame(queue.drain(), &mut display.frame());

            if let Err(err) = display.present() {
                error!(%err, "failed to present frame");
                *control_flow = ControlFlow::Exit;
                return;
            }

            if flow == Flow::Quit {
                info!(score = game.score(), "quitting");
                *control_flow = ControlFlow::Exit;
                return;
            }

            clock.schedule(now, game.tick_rate());
        }

        *control_flow = ControlFlow::WaitUntil(clock.deadline());
    });
}
