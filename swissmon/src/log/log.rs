use std::{
    borrow::Cow,
    fmt::Display,
    mem,
};

use itertools::Itertools;

/// Trait for values that can be written as one or more parts of a battle event.
///
/// Automatically implemented for types that implement [`Display`].
pub trait BattleLoggable {
    fn log<'s>(&'s self, parts: &mut Vec<Cow<'s, str>>);
}

impl<T> BattleLoggable for T
where
    T: Display,
{
    fn log(&self, parts: &mut Vec<Cow<'_, str>>) {
        parts.push(Cow::Owned(format!("{self}")))
    }
}

/// A single line of the [`EventLog`].
///
/// Use the [`battle_event`] macro to construct events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleEvent(String);

impl BattleEvent {
    pub fn from_parts(parts: &[&dyn BattleLoggable]) -> Self {
        let mut log_parts = Vec::with_capacity(parts.len());
        for part in parts {
            part.log(&mut log_parts);
        }
        Self(log_parts.into_iter().join("|"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Constructs a [`BattleEvent`] from its parts, joined by `|`.
#[macro_export]
macro_rules! battle_event {
    ($($arg:expr),* $(,)?) => {{
        $crate::log::BattleEvent::from_parts(&[$(&$arg),*])
    }};
}

/// The pipe-delimited record of everything that happened in a battle.
///
/// The presentation layer renders the log line by line, either all at once with [`Self::logs`] or
/// incrementally with [`Self::read_out`].
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    logs: Vec<String>,
    last_read: usize,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Does the log contain new events since the last call to [`Self::read_out`]?
    pub fn has_new_messages(&self) -> bool {
        self.last_read < self.logs.len()
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.logs.push(event.0)
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    /// All events, oldest first.
    pub fn logs(&self) -> impl Iterator<Item = &str> {
        self.logs.iter().map(|s| s.as_ref())
    }

    /// Events added since the given index.
    pub fn logs_since(&self, index: usize) -> impl Iterator<Item = &str> {
        self.logs.iter().skip(index).map(|s| s.as_ref())
    }

    /// Reads out events added since the last call to this method.
    pub fn read_out(&mut self) -> impl Iterator<Item = &str> {
        let i = mem::replace(&mut self.last_read, self.logs.len());
        self.logs[i..].iter().map(|s| s.as_ref())
    }
}
