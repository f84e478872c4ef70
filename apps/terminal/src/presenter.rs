//! Terminal rendering of game events.

use crossterm::style::{StyledContent, Stylize};
use quiz_core::{GameEvent, Presenter, Severity};
use std::fmt::Display;
use std::io::Write;
use std::time::{Duration, Instant};

/// Message currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveMessage {
    pub text: String,
    pub severity: Severity,
    expires_at: Instant,
}

/// Single message slot. A message disappears once its duration passes,
/// unless a newer message has already replaced it.
#[derive(Debug, Default)]
pub struct MessageSlot {
    current: Option<ActiveMessage>,
}

impl MessageSlot {
    pub fn show(&mut self, text: String, severity: Severity, clear_after: Duration, now: Instant) {
        self.current = Some(ActiveMessage {
            text,
            severity,
            expires_at: now + clear_after,
        });
    }

    /// Message still visible at `now`. Expired messages are cleared.
    pub fn visible(&mut self, now: Instant) -> Option<&ActiveMessage> {
        if self
            .current
            .as_ref()
            .is_some_and(|message| now >= message.expires_at)
        {
            self.current = None;
        }
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// Renders events as lines on a writer (stdout in the binary).
pub struct TerminalPresenter<W: Write> {
    out: W,
    messages: MessageSlot,
    count: usize,
    high_score: u32,
    last_timer: Option<String>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            messages: MessageSlot::default(),
            count: 0,
            high_score: 0,
            last_timer: None,
        }
    }

    pub fn banner(&mut self, municipalities: usize, time_limit: u32) {
        self.line("Quantos municípios do Rio Grande do Sul você conhece?".bold());
        self.line(format!(
            "{municipalities} municípios no mapa. Cada acerto renova o relógio de {} segundos.",
            time_limit
        ));
        self.help();
    }

    pub fn help(&mut self) {
        self.line("Digite um nome e tecle Enter. /reiniciar recomeça após o fim, /sair encerra.".dim());
    }

    /// Shown when input arrives while the game is over.
    pub fn locked_hint(&mut self) {
        self.line("Fim de jogo. Digite /reiniciar para jogar novamente.".dim());
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn status(&mut self, display: &str, urgent: bool) {
        let clock = if urgent {
            display.red().bold()
        } else {
            display.bold()
        };
        let message = self
            .messages
            .visible(Instant::now())
            .map(|m| format!(" | {}", m.text))
            .unwrap_or_default();
        let line = format!(
            "[{clock}] encontrados: {} | recorde: {}{message}",
            self.count, self.high_score
        );
        self.line(line);
    }

    fn line(&mut self, content: impl Display) {
        if let Err(err) = writeln!(self.out, "{content}").and_then(|_| self.out.flush()) {
            tracing::warn!(%err, "failed to write to terminal");
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, event: GameEvent) {
        match event {
            GameEvent::EntityAdded { name, coordinate } => {
                self.line(format!("  + {name} ({:.4}, {:.4})", coordinate.lat, coordinate.lng).green());
            }
            GameEvent::Message {
                text,
                severity,
                clear_after,
            } => {
                self.line(styled(&text, severity));
                self.messages.show(text, severity, clear_after, Instant::now());
            }
            GameEvent::CounterUpdated { count } => self.count = count,
            GameEvent::HighScoreUpdated { score } => self.high_score = score,
            GameEvent::TimerUpdated { display, urgent } => {
                let refilled = self.last_timer.as_deref().map_or(true, |prev| display.as_str() > prev);
                if should_print_timer(&display, urgent, refilled) {
                    self.status(&display, urgent);
                }
                self.last_timer = Some(display);
            }
            GameEvent::GameOver { found } => {
                self.line(format!("Fim de jogo! Total: {found}. Recorde: {}.", self.high_score).red().bold());
                self.locked_hint();
            }
            GameEvent::Completed { total } => {
                self.line(format!("Mapa completo: {total} de {total}!").cyan().bold());
            }
            GameEvent::Restarted => {
                self.messages.clear();
                self.last_timer = None;
                self.line("Novo jogo! Mapa limpo.".bold());
            }
        }
    }
}

fn styled(text: &str, severity: Severity) -> StyledContent<&str> {
    match severity {
        Severity::Success => text.green(),
        Severity::Warning => text.dark_yellow(),
        Severity::Error => text.red(),
        Severity::Highlight => text.cyan().bold(),
    }
}

/// Print the status line when the timer was refilled, at every half minute,
/// and every five seconds once urgent.
fn should_print_timer(display: &str, urgent: bool, refilled: bool) -> bool {
    if refilled {
        return true;
    }
    if urgent {
        display.ends_with('0') || display.ends_with('5')
    } else {
        display.ends_with(":00") || display.ends_with(":30")
    }
}
