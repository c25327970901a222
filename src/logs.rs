use chrono::Local;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Default number of lines kept by a [BoundedLog].
pub const DEFAULT_LOG_CAPACITY: usize = 10_000;

/// Destination for the human-readable trace of a search. Implementations must be safe to share
/// between the thread running a search and the thread presenting its output.
pub trait LogSink: Send + Sync {
    fn write(&self, line: &str);
    fn clear(&self);
}

/// Append-only log holding at most `capacity` lines; the oldest line is evicted once full. Each
/// line is prefixed with the local wall-clock time.
#[derive(Debug)]
pub struct BoundedLog {
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl Default for BoundedLog {
    fn default() -> BoundedLog {
        BoundedLog::new(DEFAULT_LOG_CAPACITY)
    }
}

impl BoundedLog {
    pub fn new(capacity: usize) -> BoundedLog {
        BoundedLog {
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// A copy of the currently held lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.with_lines(|lines| lines.iter().cloned().collect())
    }

    /// The held lines with their timestamp prefix removed.
    pub fn messages(&self) -> Vec<String> {
        self.with_lines(|lines| {
            lines
                .iter()
                .map(|l| match l.split_once(":: ") {
                    Some((_, msg)) => msg.to_owned(),
                    None => l.clone(),
                })
                .collect()
        })
    }

    pub fn len(&self) -> usize {
        self.with_lines(|lines| lines.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_lines<T>(&self, f: impl FnOnce(&mut VecDeque<String>) -> T) -> T {
        // A writer panicking mid-push leaves the deque itself intact.
        let mut guard = match self.lines.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

impl LogSink for BoundedLog {
    fn write(&self, line: &str) {
        if self.capacity == 0 {
            return;
        }
        let stamped = format!("{}:: {}", Local::now().format("%I:%M:%S"), line);
        self.with_lines(|lines| {
            while lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(stamped);
        });
    }

    fn clear(&self) {
        self.with_lines(|lines| lines.clear());
    }
}

/// Forwards every line to the [log] facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct FacadeLog;

impl LogSink for FacadeLog {
    fn write(&self, line: &str) {
        log::info!("{}", line);
    }

    fn clear(&self) {}
}

/// Discards everything, useful as default in tests and benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLog;

impl LogSink for NoopLog {
    fn write(&self, _line: &str) {}
    fn clear(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn evicts_oldest_line() {
        let log = BoundedLog::new(2);
        log.write("a");
        log.write("b");
        log.write("c");
        assert_eq!(log.messages(), vec!["b".to_owned(), "c".to_owned()]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn lines_carry_timestamp() {
        let log = BoundedLog::default();
        log.write("hello");
        let line = &log.lines()[0];
        // hh:mm:ss:: hello
        assert_eq!(line.len(), "00:00:00:: hello".len());
        assert!(line.ends_with(":: hello"));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn concurrent_writers_are_serialized() {
        let log = Arc::new(BoundedLog::new(100));
        let handles = (0..4)
            .map(|t| {
                let log = log.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        log.write(&format!("{t}-{i}"));
                    }
                })
            })
            .collect::<Vec<_>>();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(log.len(), 100);
    }
}
