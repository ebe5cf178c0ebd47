//! The page runtime.
//!
//! [`Page`] owns the document, the session history and the capability
//! runtime, and routes document events to the feature detector and the tab
//! navigator. Events are handled one at a time, so each transition completes
//! before the next event is looked at.

use indexmap::IndexMap;
use showcase_detect::{FeatureDetector, FeatureStatus, Runtime};
use showcase_dom::{Document, ElementKey, ReadyState, SessionHistory};
use showcase_nav::{KeyboardEvent, NavError, TabNavigator, Transition};
use tracing::{debug, info, warn};

use crate::config::PageConfig;
use crate::error::PageResult;

/// An input delivered to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The document finished parsing.
    DomContentLoaded,
    /// An element was activated by pointer or equivalent.
    Click(ElementKey),
    /// A key was pressed.
    KeyDown(KeyboardEvent),
    /// The user moved through session history.
    PopState,
}

/// What handling an event did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The section transition performed, if any.
    pub transition: Option<Transition>,
    /// Whether the event's default action was suppressed.
    pub default_prevented: bool,
}

impl EventOutcome {
    /// An event that had no effect.
    pub fn ignored() -> Self {
        Self::default()
    }

    fn navigated(transition: Transition) -> Self {
        Self {
            transition: Some(transition),
            default_prevented: false,
        }
    }
}

/// A showcase page and its enhancements.
pub struct Page<R: Runtime> {
    document: Document,
    history: SessionHistory,
    runtime: R,
    detector: FeatureDetector,
    config: PageConfig,
    navigator: Option<TabNavigator>,
    results: IndexMap<String, bool>,
    started: bool,
}

impl<R: Runtime> Page<R> {
    /// Creates the page.
    ///
    /// If the document has finished loading, detection and navigation start
    /// immediately. Otherwise they start on [`PageEvent::DomContentLoaded`].
    pub fn new(
        document: Document,
        history: SessionHistory,
        runtime: R,
        config: PageConfig,
    ) -> PageResult<Self> {
        let detector = FeatureDetector::new(config.registry()?, config.detector.clone());
        let mut page = Self {
            document,
            history,
            runtime,
            detector,
            config,
            navigator: None,
            results: IndexMap::new(),
            started: false,
        };

        if page.document.ready_state().is_ready() {
            page.start()?;
        } else {
            debug!("Document still loading, deferring startup");
        }
        Ok(page)
    }

    /// Delivers one event.
    pub fn dispatch(&mut self, event: PageEvent) -> PageResult<EventOutcome> {
        match event {
            PageEvent::DomContentLoaded => {
                if self.started {
                    return Ok(EventOutcome::ignored());
                }
                self.document.set_ready_state(ReadyState::Interactive);
                Ok(match self.start()? {
                    Some(transition) => EventOutcome::navigated(transition),
                    None => EventOutcome::ignored(),
                })
            }
            PageEvent::Click(target) => self.on_click(target),
            PageEvent::KeyDown(mut event) => self.on_key_down(&mut event),
            PageEvent::PopState => self.on_pop_state(),
        }
    }

    /// Moves one history entry back and delivers [`PageEvent::PopState`].
    pub fn go_back(&mut self) -> PageResult<EventOutcome> {
        if !self.history.back() {
            return Ok(EventOutcome::ignored());
        }
        self.dispatch(PageEvent::PopState)
    }

    /// Moves one history entry forward and delivers [`PageEvent::PopState`].
    pub fn go_forward(&mut self) -> PageResult<EventOutcome> {
        if !self.history.forward() {
            return Ok(EventOutcome::ignored());
        }
        self.dispatch(PageEvent::PopState)
    }

    /// Runs the detection sweep again. Repeated sweeps leave the document unchanged.
    pub fn redetect(&mut self) -> &IndexMap<String, bool> {
        self.results = self.detector.detect_all(&self.runtime, &mut self.document);
        &self.results
    }

    /// Recomputes detection results without touching the document.
    pub fn detection_results(&self) -> IndexMap<String, FeatureStatus> {
        self.detector.detection_results(&self.runtime)
    }

    /// Renders [`detection_results`](Self::detection_results) as pretty JSON.
    pub fn detection_report_json(&self) -> PageResult<String> {
        Ok(self.detector.detection_report_json(&self.runtime)?)
    }

    /// Returns the results of the most recent detection sweep.
    pub fn results(&self) -> &IndexMap<String, bool> {
        &self.results
    }

    /// Returns true once startup has run.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Returns the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the document for direct edits, e.g. moving focus.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Returns the session history.
    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Returns the navigator, `None` before startup or when navigation is disabled.
    pub fn navigator(&self) -> Option<&TabNavigator> {
        self.navigator.as_ref()
    }

    /// Returns the active section id.
    pub fn active_section(&self) -> Option<&str> {
        self.navigator
            .as_ref()
            .and_then(|navigator| navigator.active_section())
    }

    /// Returns the detector.
    pub fn detector(&self) -> &FeatureDetector {
        &self.detector
    }

    /// Returns the capability runtime.
    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    fn start(&mut self) -> PageResult<Option<Transition>> {
        self.started = true;
        self.results = self.detector.detect_all(&self.runtime, &mut self.document);

        let mut navigator =
            match TabNavigator::attach(&self.document, self.config.navigation.clone()) {
                Ok(navigator) => navigator,
                Err(err) => {
                    warn!(error = %err, "Tab navigation disabled");
                    return Ok(None);
                }
            };
        let transition = navigator.sync_with_location(&mut self.document, &self.history)?;
        info!(
            features = self.results.len(),
            section = %transition.to,
            "Page enhancements started"
        );
        self.navigator = Some(navigator);
        Ok(Some(transition))
    }

    fn on_click(&mut self, target: ElementKey) -> PageResult<EventOutcome> {
        let Some(navigator) = self.navigator.as_mut() else {
            return Ok(EventOutcome::ignored());
        };
        match navigator.activate_tab(&mut self.document, &mut self.history, target) {
            Ok(transition) => Ok(EventOutcome::navigated(transition)),
            Err(NavError::NotATab) => Ok(EventOutcome::ignored()),
            Err(err @ (NavError::MissingTarget(_) | NavError::UnknownSection(_))) => {
                debug!(error = %err, "Tab activation refused");
                Ok(EventOutcome::ignored())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn on_key_down(&mut self, event: &mut KeyboardEvent) -> PageResult<EventOutcome> {
        let Some(navigator) = self.navigator.as_mut() else {
            return Ok(EventOutcome::ignored());
        };
        let transition = navigator.handle_key(&mut self.document, &mut self.history, event)?;
        Ok(EventOutcome {
            transition,
            default_prevented: event.is_default_prevented(),
        })
    }

    fn on_pop_state(&mut self) -> PageResult<EventOutcome> {
        let Some(navigator) = self.navigator.as_mut() else {
            return Ok(EventOutcome::ignored());
        };
        let transition = navigator.sync_with_location(&mut self.document, &self.history)?;
        Ok(EventOutcome::navigated(transition))
    }
}
