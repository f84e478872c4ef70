//! Messages shown the first time a session beats the high score.

use rand::Rng;

/// Source of random indices, injectable so selection stays deterministic in tests.
pub trait RandomSource {
    /// Return an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Adapts any `rand::Rng` into a `RandomSource`.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

impl RngSource<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

const BEGINNER: &[&str] = &[
    "Novo recorde! Mas até um turista sabe mais cidades que isso.",
    "Recorde batido... o mapa ainda está bem vazio, hein?",
    "Começou bem! Agora não para.",
];

const REGULAR: &[&str] = &[
    "Bah, tchê! Novo recorde!",
    "Recorde! O chimarrão está fazendo efeito.",
    "Já conhece o interior, hein? Novo recorde!",
];

const EXPERT: &[&str] = &[
    "Impressionante! Recorde digno de um gaúcho de verdade.",
    "Novo recorde! Já pode ser guia turístico do estado.",
    "Recorde! Poucos chegam tão longe.",
];

const LEGEND: &[&str] = &[
    "Lendário! Conhece o estado melhor que o IBGE.",
    "Recorde inacreditável! Sobrou algum município?",
];

/// Message tier for a found count.
pub fn tier(count: usize) -> &'static [&'static str] {
    match count {
        0..=49 => BEGINNER,
        50..=199 => REGULAR,
        200..=399 => EXPERT,
        _ => LEGEND,
    }
}

/// Pick a random message from the tier for `count`.
pub fn taunt_for(count: usize, rng: &mut impl RandomSource) -> &'static str {
    let messages = tier(count);
    let index = rng.next_index(messages.len()).min(messages.len() - 1);
    messages[index]
}

/// Plain acknowledgement for later records in the same session.
pub fn record_ack(score: u32) -> String {
    format!("Novo recorde: {score}!")
}
