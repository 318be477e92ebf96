//! Host platform facilities used by the writing exercise: a completion chime and a screen wake
//! lock.
//!
//! Both are passed in as owned handles by whoever composes the application. Failures are never
//! fatal: a failing chime gets logged and ignored, a failing wake lock is reported to the user
//! as its absence changes the experience.

use std::{
    fmt::Debug,
    io::{self, Write},
};

use crate::Error;

// -------------------------------------------------------------------------------------------------

/// Plays a short sound when the writing exercise completes.
pub trait Chime: Debug {
    /// Trigger the chime. Fire and forget: callers only log errors.
    fn play(&mut self) -> Result<(), Error>;
}

/// Keeps the screen awake while the writing exercise is running.
///
/// `enable` and `disable` are idempotent. Some hosts only accept `enable` when invoked directly
/// from a user interaction.
pub trait WakeLock: Debug {
    fn enable(&mut self) -> Result<(), Error>;
    fn disable(&mut self) -> Result<(), Error>;
    fn is_enabled(&self) -> bool;
}

// -------------------------------------------------------------------------------------------------

/// Chime which rings the terminal bell.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl Chime for TerminalBell {
    fn play(&mut self) -> Result<(), Error> {
        let mut stdout = io::stdout();
        stdout
            .write_all(b"\x07")
            .and_then(|_| stdout.flush())
            .map_err(|err| Error::platform("chime", err))
    }
}

/// Chime which does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentChime;

impl Chime for SilentChime {
    fn play(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

// -------------------------------------------------------------------------------------------------

/// Wake lock for hosts which can't keep the screen awake, such as plain terminals.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWakeLock;

impl WakeLock for NoWakeLock {
    fn enable(&mut self) -> Result<(), Error> {
        Err(Error::platform(
            "wake lock",
            "keeping the screen awake is not supported on this host",
        ))
    }

    fn disable(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

// -------------------------------------------------------------------------------------------------

/// Enable the given wake lock, logging failures. Returns true when the lock is held.
pub fn enable_wake_lock(wake_lock: &mut dyn WakeLock) -> bool {
    match wake_lock.enable() {
        Ok(()) => {
            log::debug!("Wake lock enabled");
            true
        }
        Err(err) => {
            log::warn!("Failed to enable wake lock: {}", err);
            false
        }
    }
}

/// Disable the given wake lock, logging failures.
pub fn disable_wake_lock(wake_lock: &mut dyn WakeLock) {
    if let Err(err) = wake_lock.disable() {
        log::warn!("Failed to disable wake lock: {}", err);
    } else {
        log::debug!("Wake lock disabled");
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Default)]
    struct ToggleWakeLock {
        enabled: bool,
        toggles: usize,
    }

    impl WakeLock for ToggleWakeLock {
        fn enable(&mut self) -> Result<(), Error> {
            if !self.enabled {
                self.enabled = true;
                self.toggles += 1;
            }
            Ok(())
        }

        fn disable(&mut self) -> Result<(), Error> {
            if self.enabled {
                self.enabled = false;
                self.toggles += 1;
            }
            Ok(())
        }

        fn is_enabled(&self) -> bool {
            self.enabled
        }
    }

    #[test]
    fn unsupported_wake_lock() {
        let mut wake_lock = NoWakeLock;
        assert!(!enable_wake_lock(&mut wake_lock));
        assert!(!wake_lock.is_enabled());
        assert!(matches!(
            wake_lock.enable(),
            Err(Error::Platform {
                facility: "wake lock",
                ..
            })
        ));
        disable_wake_lock(&mut wake_lock);
    }

    #[test]
    fn idempotent_wake_lock() {
        let mut wake_lock = ToggleWakeLock::default();
        assert!(enable_wake_lock(&mut wake_lock));
        assert!(enable_wake_lock(&mut wake_lock));
        assert!(wake_lock.is_enabled());
        disable_wake_lock(&mut wake_lock);
        disable_wake_lock(&mut wake_lock);
        assert!(!wake_lock.is_enabled());
        assert_eq!(wake_lock.toggles, 2);
    }

    #[test]
    fn silent_chime() {
        assert!(SilentChime.play().is_ok());
    }
}
