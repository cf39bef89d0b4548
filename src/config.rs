//! Centralized decoder configuration.
//!
//! Goals:
//! - Single place for tunables instead of env lookups scattered across modules.
//! - `DecoderConfig::from_env()` reads the DAMONREC_* variables; fluent `with_*`
//!   setters override them from code (tests, CLI).
//!
//! Variables:
//! - DAMONREC_READ_BUF_BYTES    : BufReader capacity for decode_file (default 64 KiB)
//! - DAMONREC_PREALLOC_LIMIT    : cap for Vec::with_capacity from wire counts (default 4096)
//! - DAMONREC_WARN_NON_MONOTONIC: warn when a record's end time goes backwards (default on)

use std::fmt;

pub const DEFAULT_READ_BUF_BYTES: usize = 64 * 1024;
pub const DEFAULT_PREALLOC_LIMIT: usize = 4096;

/// Tunables for a single decode pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Capacity of the buffered reader used by `decode_file`.
    /// Env: DAMONREC_READ_BUF_BYTES (default 65536, 0 is ignored)
    pub read_buf_bytes: usize,

    /// Upper bound for preallocation driven by snapshot/region counts.
    /// Counts come straight from the file, so a corrupted count must not
    /// turn into a huge allocation before the first truncated read.
    /// Env: DAMONREC_PREALLOC_LIMIT (default 4096)
    pub prealloc_limit: usize,

    /// Log a warning when end time of a record is below the running cursor.
    /// Env: DAMONREC_WARN_NON_MONOTONIC = 0|1|true|false (default true)
    pub warn_non_monotonic: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            read_buf_bytes: DEFAULT_READ_BUF_BYTES,
            prealloc_limit: DEFAULT_PREALLOC_LIMIT,
            warn_non_monotonic: true,
        }
    }
}

impl DecoderConfig {
    /// Load configuration from environment variables; unparsable values keep defaults.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("DAMONREC_READ_BUF_BYTES") {
            if let Ok(n) = v.trim().parse::<usize>() {
                if n > 0 {
                    cfg.read_buf_bytes = n;
                }
            }
        }

        if let Ok(v) = std::env::var("DAMONREC_PREALLOC_LIMIT") {
            if let Ok(n) = v.trim().parse::<usize>() {
                cfg.prealloc_limit = n;
            }
        }

        if let Ok(v) = std::env::var("DAMONREC_WARN_NON_MONOTONIC") {
            if let Some(on) = parse_flag(&v) {
                cfg.warn_non_monotonic = on;
            }
        }

        cfg
    }

    pub fn with_read_buf_bytes(mut self, n: usize) -> Self {
        self.read_buf_bytes = n.max(1);
        self
    }

    pub fn with_prealloc_limit(mut self, n: usize) -> Self {
        self.prealloc_limit = n;
        self
    }

    pub fn with_warn_non_monotonic(mut self, on: bool) -> Self {
        self.warn_non_monotonic = on;
        self
    }

    /// Capacity hint for a vector sized by a count read from the wire.
    #[inline]
    pub fn capacity_for(&self, count: u32) -> usize {
        (count as usize).min(self.prealloc_limit)
    }
}

impl fmt::Display for DecoderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecoderConfig {{ \
             read_buf_bytes: {}, \
             prealloc_limit: {}, \
             warn_non_monotonic: {} \
             }}",
            self.read_buf_bytes, self.prealloc_limit, self.warn_non_monotonic,
        )
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
