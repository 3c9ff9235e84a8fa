//! Unit tests for the resize signal and viewport watcher

#[cfg(test)]
mod tests {
    use coursegate::ViewportClass;
    use coursegate::runtime::{ManualResizeSource, ResizeSource, ViewportWatcher};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_watcher_tracks_resizes() {
        let source = ManualResizeSource::new();
        let watcher = ViewportWatcher::new(&source, 1200);

        assert_eq!(watcher.current(), ViewportClass::Wide);

        source.emit(400);
        assert_eq!(watcher.current(), ViewportClass::Compact);

        source.emit(1024);
        assert_eq!(watcher.current(), ViewportClass::Wide);
    }

    #[test]
    fn test_watcher_seeds_from_initial_width() {
        let source = ManualResizeSource::new();
        let watcher = ViewportWatcher::new(&source, 320);
        assert_eq!(watcher.current(), ViewportClass::Compact);
    }

    #[test]
    fn test_dropping_subscription_unregisters() {
        let source = ManualResizeSource::new();
        let calls = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&calls);

        let subscription = source.subscribe(Box::new(move |_| {
            seen.fetch_add(1, Ordering::Relaxed);
        }));

        source.emit(500);
        assert_eq!(calls.load(Ordering::Relaxed), 1);

        drop(subscription);
        source.emit(900);
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_dropped_watcher_leaves_source_usable() {
        let source = ManualResizeSource::new();
        let watcher = ViewportWatcher::new(&source, 1200);
        drop(watcher);

        // Emitting after the guard dropped must not panic or call into the
        // dead watcher.
        source.emit(400);

        let fresh = ViewportWatcher::new(&source, 400);
        assert_eq!(fresh.current(), ViewportClass::Compact);
        source.emit(1300);
        assert_eq!(fresh.current(), ViewportClass::Wide);
    }

    #[test]
    fn test_independent_listeners_each_receive_events() {
        let source = ManualResizeSource::new();
        let first = Arc::new(AtomicU32::new(0));
        let second = Arc::new(AtomicU32::new(0));

        let first_seen = Arc::clone(&first);
        let _a = source.subscribe(Box::new(move |width| {
            first_seen.store(width, Ordering::Relaxed);
        }));
        let second_seen = Arc::clone(&second);
        let _b = source.subscribe(Box::new(move |width| {
            second_seen.store(width, Ordering::Relaxed);
        }));

        source.emit(640);
        assert_eq!(first.load(Ordering::Relaxed), 640);
        assert_eq!(second.load(Ordering::Relaxed), 640);
    }
}
