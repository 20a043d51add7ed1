//! Greeting card state: envelope opening and the greeting prefetch buffer.

use crate::audio::{AudioBackend, SoundFx};
use crate::greetings::{Blessings, Greeting};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardState {
    Closed,
    Opening,
    Opened,
}

/// The envelope/card the user interacts with.
///
/// Holds the shown greeting plus one buffered greeting so a refresh can
/// swap instantly. The buffer is refilled by [`Card::prefetch`], which the
/// front-end runs as a deferred task after each refresh.
pub struct Card {
    state: CardState,
    current: &'static Greeting,
    next: Option<&'static Greeting>,
    blessings: Blessings,
}

impl Card {
    pub fn new(seed: u64) -> Self {
        let mut blessings = Blessings::new(seed);
        let current = blessings.draw();
        let next = Some(blessings.draw());
        Self {
            state: CardState::Closed,
            current,
            next,
            blessings,
        }
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn greeting(&self) -> &'static Greeting {
        self.current
    }

    pub fn has_buffered(&self) -> bool {
        self.next.is_some()
    }

    /// Fireworks run only while the card is fully open.
    pub fn is_active(&self) -> bool {
        self.state == CardState::Opened
    }

    /// Tap on the closed envelope. Unlocks audio, plays the pop and starts
    /// the opening transition. Returns `false` if the card was not closed.
    pub fn open<B: AudioBackend>(&mut self, sfx: &mut SoundFx<B>) -> bool {
        if self.state != CardState::Closed {
            return false;
        }
        sfx.init();
        sfx.play_pop();
        self.state = CardState::Opening;
        log::info!("[card] opening");
        true
    }

    /// End of the opening transition.
    pub fn finish_opening<B: AudioBackend>(&mut self, sfx: &mut SoundFx<B>) -> bool {
        if self.state != CardState::Opening {
            return false;
        }
        self.state = CardState::Opened;
        sfx.play_sparkle();
        log::info!("[card] opened: {}", self.current.title);
        true
    }

    /// Show another greeting, taking the buffered one when available.
    ///
    /// Leaves the buffer empty; call [`Card::prefetch`] afterwards.
    pub fn refresh<B: AudioBackend>(&mut self, sfx: &mut SoundFx<B>) -> &'static Greeting {
        sfx.play_pop();
        self.current = match self.next.take() {
            Some(g) => g,
            None => {
                log::debug!("[card] buffer empty, drawing directly");
                self.blessings.draw()
            }
        };
        sfx.play_sparkle();
        self.current
    }

    /// Fill the buffer if it is empty.
    pub fn prefetch(&mut self) {
        if self.next.is_none() {
            self.next = Some(self.blessings.draw());
        }
    }
}
