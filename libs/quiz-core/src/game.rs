//! Game controller.
//!
//! `Game` owns the session and its collaborators and is the only way to
//! mutate state. Each operation reports the [`TimerCommand`] the caller must
//! apply to its countdown.

use crate::catalog::Catalog;
use crate::normalize::normalize;
use crate::presenter::{GameEvent, Presenter};
use crate::session::{MatchRecord, Session, Tick};
use crate::store::ScoreStore;
use crate::taunt::{record_ack, taunt_for, RandomSource};
use crate::types::{format_clock, GameSettings, Severity};

/// What the countdown driver should do after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Cancel any running countdown and start a fresh one.
    Restart,
    Stop,
    Keep,
}

/// Result of submitting a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank guess, or input is disabled.
    Ignored,
    NotFound,
    AlreadyFound { name: String },
    Added {
        name: String,
        count: usize,
        distance: usize,
    },
    /// The guess found the last remaining municipality.
    Completed { name: String, total: usize },
}

impl SubmitOutcome {
    pub fn timer_command(&self) -> TimerCommand {
        match self {
            Self::Added { .. } => TimerCommand::Restart,
            Self::Completed { .. } => TimerCommand::Stop,
            _ => TimerCommand::Keep,
        }
    }
}

impl Tick {
    pub fn timer_command(&self) -> TimerCommand {
        match self {
            Tick::Running { .. } => TimerCommand::Keep,
            Tick::Expired | Tick::Idle => TimerCommand::Stop,
        }
    }
}

/// The quiz: catalog, session, score store, presenter and random source.
pub struct Game<S, P, R> {
    catalog: Catalog,
    settings: GameSettings,
    session: Session,
    store: S,
    presenter: P,
    rng: R,
}

impl<S, P, R> Game<S, P, R>
where
    S: ScoreStore,
    P: Presenter,
    R: RandomSource,
{
    /// Create a game. The high score is read from `store`.
    pub fn new(catalog: Catalog, settings: GameSettings, store: S, presenter: P, rng: R) -> Self {
        let high_score = store.load_high_score();
        let session = Session::new(settings.time_limit_secs, settings.total_entities, high_score);

        tracing::debug!(
            entities = catalog.len(),
            total = settings.total_entities,
            high_score,
            "game created"
        );

        Self {
            catalog,
            settings,
            session,
            store,
            presenter,
            rng,
        }
    }

    /// Emit the initial display state.
    pub fn start(&mut self) -> TimerCommand {
        self.present(GameEvent::CounterUpdated {
            count: self.session.found_count(),
        });
        self.present_timer();
        self.present(GameEvent::HighScoreUpdated {
            score: self.session.high_score(),
        });
        TimerCommand::Restart
    }

    /// Check a guess and apply it.
    pub fn submit(&mut self, guess: &str) -> SubmitOutcome {
        if normalize(guess).is_empty() || !self.session.accepts_input() {
            return SubmitOutcome::Ignored;
        }

        let Some(resolution) = self
            .settings
            .matching
            .resolve(guess, self.catalog.entities())
        else {
            tracing::debug!(guess, "no municipality matched");
            self.message("Cidade não encontrada.", Severity::Error);
            return SubmitOutcome::NotFound;
        };

        let distance = resolution.distance;
        let entity = resolution.entity.clone();

        match self.session.record_match(&entity.name) {
            MatchRecord::Locked => SubmitOutcome::Ignored,
            MatchRecord::AlreadyFound => {
                self.message(format!("{} já foi adicionada!", entity.name), Severity::Warning);
                SubmitOutcome::AlreadyFound { name: entity.name }
            }
            MatchRecord::Added {
                count,
                high_score,
                completed,
            } => {
                tracing::debug!(name = %entity.name, count, distance, "municipality found");

                self.present(GameEvent::EntityAdded {
                    name: entity.name.clone(),
                    coordinate: entity.coordinate(),
                });
                self.present(GameEvent::CounterUpdated { count });
                self.present_timer();
                self.message(format!("Adicionado: {}", entity.name), Severity::Success);

                if let Some(change) = high_score {
                    self.persist_high_score(change.score);
                    self.present(GameEvent::HighScoreUpdated {
                        score: change.score,
                    });

                    let text = if change.first_this_session {
                        taunt_for(count, &mut self.rng).to_string()
                    } else {
                        record_ack(change.score)
                    };
                    self.message(text, Severity::Highlight);
                }

                if completed {
                    let total = self.session.total();
                    tracing::info!(total, "all municipalities found");
                    self.message(
                        format!("Parabéns! Você encontrou todos os {total} municípios!"),
                        Severity::Highlight,
                    );
                    self.present(GameEvent::Completed { total });
                    return SubmitOutcome::Completed {
                        name: entity.name,
                        total,
                    };
                }

                SubmitOutcome::Added {
                    name: entity.name,
                    count,
                    distance,
                }
            }
        }
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> Tick {
        let tick = self.session.tick();

        match tick {
            Tick::Idle => {}
            Tick::Running { .. } => self.present_timer(),
            Tick::Expired => {
                let found = self.session.found_count();
                tracing::debug!(found, "time expired");

                self.present_timer();
                self.present(GameEvent::GameOver { found });
                self.message(
                    format!("Tempo esgotado! Você encontrou {found} municípios."),
                    Severity::Error,
                );
            }
        }

        tick
    }

    /// Start a new round after game over or completion.
    pub fn restart(&mut self) -> TimerCommand {
        if !self.session.restart() {
            return TimerCommand::Keep;
        }

        tracing::debug!(high_score = self.session.high_score(), "session restarted");

        self.present(GameEvent::Restarted);
        self.present(GameEvent::CounterUpdated { count: 0 });
        self.present_timer();
        TimerCommand::Restart
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn persist_high_score(&mut self, score: u32) {
        if let Err(err) = self.store.save_high_score(score) {
            tracing::warn!(%err, score, "failed to persist high score");
        }
    }

    fn present(&mut self, event: GameEvent) {
        self.presenter.present(event);
    }

    fn present_timer(&mut self) {
        let remaining = self.session.time_remaining();
        self.present(GameEvent::TimerUpdated {
            display: format_clock(remaining),
            urgent: remaining < self.settings.urgency_threshold_secs,
        });
    }

    fn message(&mut self, text: impl Into<String>, severity: Severity) {
        self.present(GameEvent::Message {
            text: text.into(),
            severity,
            clear_after: self.settings.message_duration(),
        });
    }
}
