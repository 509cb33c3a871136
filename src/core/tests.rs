#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures::FutureExt;
    use futures::executor::block_on;

    use crate::core::reveal::testing::StubObserver;
    use crate::core::reveal::{RevealOptions, RevealWatch, Visibility};
    use crate::core::sticker::fixtures::{gzip, sticker_bytes};
    use crate::core::sticker::testing::{Gate, GatedSource, MemorySource, RecordingBackend};
    use crate::core::sticker::{LoadOutcome, LoadPhase, StickerError, StickerLoader, StickerRequest};
    use crate::core::theme::testing::ClassList;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use crate::core::theme::{
        DARK_CLASS, MemoryStore, PreferenceStore, THEME_STORAGE_KEY, ThemePreference,
        ThemeSettings,
    };

    const PATH: &str = "/animations/AnimatedSticker.tgs";

    /// Counts ERROR-level events.
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    /// Run `f` with an error-counting subscriber and return how many errors it logged.
    fn count_errors(f: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(Arc::clone(&count)));
        tracing::subscriber::with_default(subscriber, f);
        count.load(Ordering::SeqCst)
    }

    // ========================================================================
    // Sticker loader
    // ========================================================================

    #[test]
    fn test_valid_sticker_one_player_destroyed_once() {
        let backend = RecordingBackend::default();
        let loader = StickerLoader::new(backend.clone());
        let source = MemorySource::with(PATH, sticker_bytes());

        assert_eq!(
            block_on(loader.load(&source, StickerRequest::new(PATH))),
            LoadOutcome::Playing
        );
        assert_eq!(backend.log.created.get(), 1);
        assert_eq!(backend.log.live(), 1);

        loader.teardown();
        drop(loader);

        assert_eq!(backend.log.created.get(), 1);
        assert_eq!(backend.log.destroyed.get(), 1);
    }

    #[test]
    fn test_malformed_inputs_produce_no_player() {
        let bytes = sticker_bytes();
        let cases: Vec<(&str, Vec<u8>)> = vec![
            ("truncated gzip", bytes[..bytes.len() / 2].to_vec()),
            ("non-json payload", gzip(b"<svg></svg>")),
            ("empty buffer", Vec::new()),
        ];

        for (label, payload) in cases {
            let backend = RecordingBackend::default();
            let loader = StickerLoader::new(backend.clone());
            let source = MemorySource::with(PATH, payload);

            let outcome = block_on(loader.load(&source, StickerRequest::new(PATH)));

            assert!(
                matches!(
                    outcome,
                    LoadOutcome::Failed(StickerError::Decompression(_) | StickerError::Parse(_))
                ),
                "{}: unexpected outcome {:?}",
                label,
                outcome
            );
            assert_eq!(backend.log.created.get(), 0, "{}", label);
            assert_eq!(loader.phase(), LoadPhase::Failed, "{}", label);
            assert!(!loader.has_player(), "{}", label);
        }
    }

    #[test]
    fn test_unmount_before_fetch_resolves_never_instantiates() {
        let backend = RecordingBackend::default();
        let loader = StickerLoader::new(backend.clone());
        let gate = Gate::default();
        let source = GatedSource {
            inner: MemorySource::with(PATH, sticker_bytes()),
            gate: gate.clone(),
        };

        let ticket = loader.begin(StickerRequest::new(PATH));
        let mut pending = Box::pin(loader.run(ticket, &source));
        assert!(pending.as_mut().now_or_never().is_none());
        assert_eq!(loader.phase(), LoadPhase::Loading);

        loader.teardown();
        gate.open();

        assert_eq!(block_on(pending), LoadOutcome::Cancelled);
        assert_eq!(backend.log.created.get(), 0);
        assert_eq!(loader.phase(), LoadPhase::Idle);
    }

    #[test]
    fn test_path_change_discards_stale_result() {
        let backend = RecordingBackend::default();
        let loader = StickerLoader::new(backend.clone());

        let slow_gate = Gate::default();
        let slow = GatedSource {
            inner: MemorySource::with("/old.tgs", sticker_bytes()),
            gate: slow_gate.clone(),
        };
        let fast = MemorySource::with("/new.tgs", sticker_bytes());

        let old_ticket = loader.begin(StickerRequest::new("/old.tgs"));
        let mut old = Box::pin(loader.run(old_ticket, &slow));
        assert!(old.as_mut().now_or_never().is_none());

        // Path changes while the first fetch is still in flight
        let outcome = block_on(loader.load(&fast, StickerRequest::new("/new.tgs")));
        assert_eq!(outcome, LoadOutcome::Playing);

        // The old fetch arrives late
        slow_gate.open();
        assert_eq!(block_on(old), LoadOutcome::Cancelled);

        assert_eq!(backend.log.created.get(), 1);
        assert_eq!(backend.log.live(), 1);
        assert_eq!(loader.phase(), LoadPhase::Playing);
    }

    #[test]
    fn test_each_malformed_load_logs_exactly_one_error() {
        let bytes = sticker_bytes();
        let cases: Vec<(&str, Vec<u8>)> = vec![
            ("empty buffer", Vec::new()),
            ("non-json payload", gzip(b"not an animation")),
            ("gzip header only", bytes[..10].to_vec()),
            ("truncated gzip", bytes[..bytes.len() / 2].to_vec()),
        ];

        for (label, payload) in cases {
            let loader = StickerLoader::new(RecordingBackend::default());
            let source = MemorySource::with(PATH, payload);

            let errors = count_errors(|| {
                block_on(loader.load(&source, StickerRequest::new(PATH)));
            });

            assert_eq!(errors, 1, "{}", label);
        }
    }

    #[test]
    fn test_successful_load_logs_no_error() {
        let loader = StickerLoader::new(RecordingBackend::default());
        let source = MemorySource::with(PATH, sticker_bytes());

        let errors = count_errors(|| {
            block_on(loader.load(&source, StickerRequest::new(PATH)));
        });

        assert_eq!(errors, 0);
    }

    #[test]
    fn test_cancelled_failing_load_logs_no_error() {
        let backend = RecordingBackend::default();
        let loader = StickerLoader::new(backend.clone());
        let gate = Gate::default();
        // Nothing at PATH: the fetch fails once the gate opens
        let source = GatedSource {
            inner: MemorySource::default(),
            gate: gate.clone(),
        };

        let errors = count_errors(|| {
            let ticket = loader.begin(StickerRequest::new(PATH));
            let mut pending = Box::pin(loader.run(ticket, &source));
            assert!(pending.as_mut().now_or_never().is_none());

            loader.teardown();
            gate.open();
            assert_eq!(block_on(pending), LoadOutcome::Cancelled);
        });

        assert_eq!(errors, 0);
        assert_eq!(backend.log.created.get(), 0);
    }

    // ========================================================================
    // Reveal on view
    // ========================================================================

    #[test]
    fn test_reveal_scenario_threshold_point_one() {
        let observer = StubObserver::default();
        let log = observer.log.clone();
        // The observer is registered with this threshold
        assert_eq!(RevealOptions::new(0.1, 0).threshold, 0.1);
        let mut watch = RevealWatch::start(Some(observer));
        assert!(!watch.is_visible());

        assert!(watch.on_visibility(Visibility::new(true, 0.5)));
        assert!(watch.is_visible());

        assert!(!watch.on_visibility(Visibility::new(false, 0.0)));
        assert!(watch.is_visible());

        assert_eq!(log.unobserved.get(), 1);
        drop(watch);
        assert_eq!(log.disconnected.get(), 1);
    }

    #[test]
    fn test_reveal_flag_flips_at_most_once() {
        let mut watch = RevealWatch::start(Some(StubObserver::default()));
        let reports = [
            Visibility::new(false, 0.0),
            Visibility::new(true, 0.2),
            Visibility::new(false, 0.0),
            Visibility::new(true, 0.9),
            Visibility::new(true, 0.01),
        ];

        let flips = reports
            .into_iter()
            .filter(|report| watch.on_visibility(*report))
            .count();

        assert_eq!(flips, 1);
        assert!(watch.is_visible());
    }

    // ========================================================================
    // Theme
    // ========================================================================

    #[test]
    fn test_theme_toggle_round_trip() {
        let mut settings = ThemeSettings::new(
            MemoryStore::with(THEME_STORAGE_KEY, "light"),
            ClassList::default(),
            false,
        );
        assert_eq!(settings.get(), ThemePreference::Light);
        assert!(!settings.surface().contains(DARK_CLASS));

        assert_eq!(settings.toggle(), ThemePreference::Dark);
        assert_eq!(
            settings.store().load(THEME_STORAGE_KEY).as_deref(),
            Some("dark")
        );
        assert!(settings.surface().contains(DARK_CLASS));

        assert_eq!(settings.toggle(), ThemePreference::Light);
        assert_eq!(
            settings.store().load(THEME_STORAGE_KEY).as_deref(),
            Some("light")
        );
        assert!(!settings.surface().contains(DARK_CLASS));
    }
}
