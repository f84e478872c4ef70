pub mod config;
pub mod data;
pub mod db;
pub mod input;
pub mod presenter;
pub mod timer;

use config::AppConfig;
use db::SqliteRepository;
use input::{parse_line, Input};
use presenter::TerminalPresenter;
use quiz_core::{Game, Phase, RngSource, SubmitOutcome};
use timer::{Countdown, TICK_PERIOD};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_repository(config: &AppConfig) -> anyhow::Result<SqliteRepository> {
    match SqliteRepository::open(&config.db_path) {
        Ok(repository) => Ok(repository),
        Err(err) => {
            // Keep playing; the record just won't outlive the process
            tracing::warn!(path = %config.db_path.display(), %err, "failed to open score database, using memory");
            Ok(SqliteRepository::open_in_memory()?)
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let mut config = AppConfig::from_env()?;
    let catalog = data::load_catalog(config.data_path.as_deref());
    config.settings.total_entities = data::win_target(
        config.total_entities,
        &catalog,
        config.data_path.is_some(),
    );

    let repository = open_repository(&config)?;
    tracing::info!(db = %config.db_path.display(), "score database ready");

    let mut presenter = TerminalPresenter::new(std::io::stdout());
    presenter.banner(catalog.len(), config.settings.time_limit_secs);

    let mut game = Game::new(
        catalog,
        config.settings,
        repository,
        presenter,
        RngSource::thread(),
    );

    let (mut countdown, mut ticks) = Countdown::channel(TICK_PERIOD);
    countdown.apply(game.start());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(&line) {
                    Input::Quit => break,
                    Input::Help => game.presenter_mut().help(),
                    Input::Restart => countdown.apply(game.restart()),
                    Input::Guess(guess) => {
                        let outcome = game.submit(&guess);
                        let over = game.session().phase() != Phase::Playing;
                        if outcome == SubmitOutcome::Ignored && over {
                            game.presenter_mut().locked_hint();
                        }
                        countdown.apply(outcome.timer_command());
                    }
                }
            }
            Some(generation) = ticks.recv() => {
                if countdown.is_current(generation) {
                    let tick = game.tick();
                    countdown.apply(tick.timer_command());
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    countdown.stop();
    tracing::info!(high_score = game.session().high_score(), "bye");
    Ok(())
}
