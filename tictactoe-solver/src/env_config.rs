//! Worker thread configuration.
//!
//! `--threads` wins, then `TICTACTOE_THREADS`, then `RAYON_NUM_THREADS`;
//! with none of them set rayon picks its own default.

use tracing::{debug, info};

/// Pick the requested thread count from the CLI flag and the two
/// environment variables, in that order. Zero or unparsable values are
/// ignored.
pub fn resolve_threads(
    cli: Option<usize>,
    tictactoe_env: Option<&str>,
    rayon_env: Option<&str>,
) -> Option<usize> {
    let parse = |s: &str| s.trim().parse::<usize>().ok().filter(|&n| n > 0);
    cli.filter(|&n| n > 0)
        .or_else(|| tictactoe_env.and_then(parse))
        .or_else(|| rayon_env.and_then(parse))
}

/// Build the global rayon pool. Tolerates an already-initialized pool.
/// Returns the thread count in effect.
pub fn init_threads(cli: Option<usize>) -> usize {
    let tictactoe_env = std::env::var("TICTACTOE_THREADS").ok();
    let rayon_env = std::env::var("RAYON_NUM_THREADS").ok();
    let requested = resolve_threads(cli, tictactoe_env.as_deref(), rayon_env.as_deref());

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = requested {
        builder = builder.num_threads(n);
    }
    if let Err(e) = builder.build_global() {
        debug!(error = %e, "rayon pool already initialized");
    }

    let threads = rayon::current_num_threads();
    info!(threads, "rayon threads");
    threads
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_wins() {
        assert_eq!(resolve_threads(Some(3), Some("5"), Some("7")), Some(3));
    }

    #[test]
    fn test_env_fallback_order() {
        assert_eq!(resolve_threads(None, Some("5"), Some("7")), Some(5));
        assert_eq!(resolve_threads(None, None, Some("7")), Some(7));
        assert_eq!(resolve_threads(None, Some("junk"), Some(" 2 ")), Some(2));
        assert_eq!(resolve_threads(None, None, None), None);
    }

    #[test]
    fn test_zero_is_ignored() {
        assert_eq!(resolve_threads(Some(0), Some("0"), None), None);
    }
}
