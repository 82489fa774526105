//! Caching primitives: file helpers for the on-disk player snapshot and an
//! in-memory LRU memo for username lookups.

use lru::LruCache;
use std::{
    fs,
    io::{Read, Write},
    num::NonZeroUsize,
    path::Path,
    sync::{Mutex, MutexGuard},
    time::{Duration, Instant, SystemTime},
};

use crate::sleeper::types::User;

/// Default number of usernames remembered by `UserCache`.
pub const USER_CACHE_CAPACITY: usize = 1024;
/// How long a username -> user mapping is trusted.
pub const USER_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Read a file only if it was modified within `max_age`.
pub fn read_if_fresh(path: &Path, max_age: Duration) -> Option<String> {
    let modified = fs::metadata(path).and_then(|m| m.modified()).ok()?;
    let age = SystemTime::now().duration_since(modified).unwrap_or_default();
    if age > max_age {
        return None;
    }
    try_read_to_string(path)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Bounded, time-limited memo of username -> user.
///
/// Usernames are matched case-insensitively. Only successful lookups are
/// stored; a miss always goes back to the API.
pub struct UserCache {
    entries: Mutex<LruCache<String, (User, Instant)>>,
    ttl: Duration,
}

impl UserCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<String, (User, Instant)>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self, username: &str) -> Option<User> {
        let key = username.to_lowercase();
        let mut entries = self.lock();
        let (user, stored) = entries.get(&key).cloned()?;
        if stored.elapsed() > self.ttl {
            entries.pop(&key);
            return None;
        }
        Some(user)
    }

    pub fn put(&self, username: &str, user: User) {
        self.lock()
            .put(username.to_lowercase(), (user, Instant::now()));
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserCache {
    fn default() -> Self {
        Self::new(USER_CACHE_CAPACITY, USER_CACHE_TTL)
    }
}
