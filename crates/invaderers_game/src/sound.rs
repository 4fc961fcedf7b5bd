use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use log::{error, warn};
use rodio::{Decoder, OutputStream, Source};

use crate::error::{AssetKind, AssetLoadError};
use crate::game::GameEvent;

/// The two effects the game plays.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Sound {
    Whoosh,
    Bang,
}

impl Sound {
    /// Launches whoosh, impacts bang, everything else is silent.
    pub fn for_event(event: GameEvent) -> Option<Sound> {
        match event {
            GameEvent::MissileFired | GameEvent::BombDropped => Some(Sound::Whoosh),
            GameEvent::InvaderHit | GameEvent::ShipHit => Some(Sound::Bang),
            _ => None,
        }
    }
}

/// Encoded sound files held in memory, checked to be decodable at load time.
#[derive(Clone, Default)]
pub struct SoundBank {
    clips: HashMap<Sound, Arc<[u8]>>,
}

impl SoundBank {
    pub fn load(whoosh: &str, bang: &str) -> Result<Self, AssetLoadError> {
        let mut bank = Self::default();
        bank.insert(Sound::Whoosh, whoosh)?;
        bank.insert(Sound::Bang, bang)?;
        Ok(bank)
    }

    fn insert(&mut self, sound: Sound, path: &str) -> Result<(), AssetLoadError> {
        let bytes: Arc<[u8]> = fs::read(path)
            .map_err(|e| AssetLoadError::new(AssetKind::Sound, path, e))?
            .into();
        Decoder::new(Cursor::new(bytes.clone()))
            .map_err(|e| AssetLoadError::new(AssetKind::Sound, path, e))?;
        self.clips.insert(sound, bytes);
        Ok(())
    }

    pub fn get(&self, sound: Sound) -> Option<Arc<[u8]>> {
        self.clips.get(&sound).cloned()
    }
}

struct SoundThread {
    receiver: Receiver<Sound>,
    bank: SoundBank,
}

impl SoundThread {
    fn run(self) {
        // The stream must outlive every sound handed to it.
        let Ok((_stream, stream_handle)) = OutputStream::try_default() else {
            warn!("No audio output device available, running silently");
            return;
        };

        while let Ok(sound) = self.receiver.recv() {
            let Some(bytes) = self.bank.get(sound) else {
                continue;
            };
            match Decoder::new(Cursor::new(bytes)) {
                Ok(source) => {
                    // Each clip gets its own voice so overlapping effects mix.
                    if let Err(e) = stream_handle.play_raw(source.convert_samples()) {
                        error!("Failed to play sound {:?}: {e}", sound);
                    }
                }
                Err(e) => error!("Failed to decode sound {:?}: {e}", sound),
            }
        }
    }
}

/// Fire-and-forget playback. Requests go to an audio thread that owns the
/// output stream, so `play` never blocks the frame.
pub struct SoundManager {
    sender: Sender<Sound>,
}

impl SoundManager {
    /// Start the audio thread. Returns `None` if it cannot be spawned; a
    /// missing output device is reported from the thread and makes later
    /// `play` calls silent.
    pub fn new(bank: SoundBank) -> Option<Self> {
        let (sender, receiver) = mpsc::channel::<Sound>();
        let sound_thread = SoundThread { receiver, bank };

        if let Err(e) = thread::Builder::new()
            .name("invaderers_sound".into())
            .spawn(move || sound_thread.run())
        {
            error!("Failed to spawn audio thread: {e}");
            return None;
        }

        Some(Self { sender })
    }

    pub fn play(&self, sound: Sound) {
        // If the audio thread has gone away we simply stop playing sounds.
        let _ = self.sender.send(sound);
    }
}
