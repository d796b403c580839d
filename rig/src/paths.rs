use std::path::PathBuf;
#[cfg(test)]
use std::sync::{Mutex, MutexGuard, OnceLock};

pub const RIG_HOME_ENV: &str = "RIG_HOME";

/// Get rig's global home directory: `RIG_HOME` when set and non-empty,
/// otherwise `~/.rig`.
pub fn rig_home_dir() -> Result<PathBuf, std::io::Error> {
    if let Ok(v) = std::env::var(RIG_HOME_ENV)
        && !v.trim().is_empty()
    {
        return Ok(PathBuf::from(v));
    }

    let home = dirs::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;

    Ok(home.join(".rig"))
}

#[cfg(test)]
pub(crate) fn test_rig_home_env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .expect("RIG_HOME test env lock poisoned")
}
