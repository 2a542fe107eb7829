/// Background-music transport.  The game only issues commands; decoding and
/// output belong to the host.
pub trait AudioPlayer {
    fn play(&mut self);
    fn pause(&mut self);
    /// Seek back to the start of the track.
    fn rewind(&mut self);
}

/// Player without an output device.  Tracks transport state and logs each
/// command, which is all a terminal host can offer.
#[derive(Debug, Default)]
pub struct SilentAudio {
    playing: bool,
}

impl SilentAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl AudioPlayer for SilentAudio {
    fn play(&mut self) {
        log::debug!("audio: play");
        self.playing = true;
    }

    fn pause(&mut self) {
        log::debug!("audio: pause");
        self.playing = false;
    }

    fn rewind(&mut self) {
        log::debug!("audio: rewind");
    }
}
