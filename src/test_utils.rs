//! Test doubles for the host and notifier seams.

pub mod mocks {
    use anyhow::{Result, bail};

    use crate::traits::host::{HostCapabilities, PlayerHost};
    use crate::traits::notify::Notifier;

    /// Scriptable player host recording every call.
    #[derive(Debug, Default)]
    pub struct MockHost {
        pub duration_ms: u64,
        pub progress_ms: u64,
        pub volume: f32,
        pub playing: bool,
        pub muted: bool,
        pub caps: HostCapabilities,
        /// Every position committed through seek().
        pub seeks: Vec<u64>,
        /// Every volume committed through set_volume().
        pub volume_sets: Vec<f32>,
        pub play_toggles: u32,
        pub plays: u32,
        pub pauses: u32,
        pub mute_toggles: u32,
        pub nexts: u32,
        pub prevs: u32,
        /// When set, seek() and set_volume() fail.
        pub fail_calls: bool,
    }

    impl MockHost {
        pub fn with_track(duration_ms: u64, progress_ms: u64) -> Self {
            Self {
                duration_ms,
                progress_ms,
                volume: 0.5,
                ..Self::default()
            }
        }

        /// Total number of mutating host calls, for "no host calls" asserts.
        pub fn mutation_count(&self) -> usize {
            self.seeks.len()
                + self.volume_sets.len()
                + (self.play_toggles + self.plays + self.pauses + self.mute_toggles)
                    as usize
                + (self.nexts + self.prevs) as usize
        }
    }

    impl PlayerHost for MockHost {
        fn duration_ms(&self) -> u64 {
            self.duration_ms
        }

        fn progress_ms(&self) -> u64 {
            self.progress_ms
        }

        fn seek(&mut self, position_ms: u64) -> Result<()> {
            if self.fail_calls {
                bail!("seek refused");
            }
            self.seeks.push(position_ms);
            self.progress_ms = position_ms;
            Ok(())
        }

        fn volume(&self) -> f32 {
            self.volume
        }

        fn set_volume(&mut self, volume: f32) -> Result<()> {
            if self.fail_calls {
                bail!("set_volume refused");
            }
            self.volume_sets.push(volume);
            self.volume = volume;
            Ok(())
        }

        fn is_playing(&self) -> bool {
            self.playing
        }

        fn toggle_play(&mut self) -> Result<()> {
            self.play_toggles += 1;
            self.playing = !self.playing;
            Ok(())
        }

        fn play(&mut self) -> Result<()> {
            self.plays += 1;
            self.playing = true;
            Ok(())
        }

        fn pause(&mut self) -> Result<()> {
            self.pauses += 1;
            self.playing = false;
            Ok(())
        }

        fn is_muted(&self) -> bool {
            self.muted
        }

        fn toggle_mute(&mut self) -> Result<()> {
            self.mute_toggles += 1;
            self.muted = !self.muted;
            Ok(())
        }

        fn next_track(&mut self) -> Result<()> {
            self.nexts += 1;
            Ok(())
        }

        fn previous_track(&mut self) -> Result<()> {
            self.prevs += 1;
            Ok(())
        }

        fn capabilities(&self) -> HostCapabilities {
            self.caps
        }
    }

    /// Notifier capturing messages.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub messages: Vec<String>,
        /// When set, notify() fails.
        pub fail: bool,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, message: &str) -> Result<()> {
            if self.fail {
                bail!("notifier down");
            }
            self.messages.push(message.to_string());
            Ok(())
        }
    }
}
