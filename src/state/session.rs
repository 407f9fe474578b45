/// The analysis workflow session
///
/// One owned record holds the "current image / request phase / current
/// report" triple and is the only place those fields are mutated. The
/// update loop calls the small set of operations below; everything else
/// reads through accessors.
///
/// Every image selection bumps a generation counter. Async completions
/// (file loads, analysis responses) carry the generation they started
/// under and are discarded when a newer selection has superseded them,
/// so a late response can never be attached to the wrong image.
use iced::widget::image;

use crate::error::AnalysisError;
use crate::state::ingest::UploadedImage;
use crate::state::report::AnalysisReport;

/// Lifecycle of the outstanding analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    /// No request outstanding; submit is available when an image exists
    #[default]
    Idle,
    /// A request is in flight; submit is disabled
    Pending,
    /// The last request produced the report currently on display
    Success,
    /// The last request failed; transient, acknowledged back to Idle
    Failed,
}

/// A successful analysis round-trip: the decoded report plus the
/// resolved annotated image bytes, when the service provided one.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    pub annotated_bytes: Option<Vec<u8>>,
}

/// What `apply_outcome` decided to do with a completion.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    /// The report was installed and is ready to render
    Report,
    /// The request failed; caller should notify the user and then
    /// acknowledge the failure
    Failure(AnalysisError),
    /// The completion belonged to a superseded image and was dropped
    Stale,
}

/// Owned state of the single active workflow instance.
///
/// `loading` is set between a selection and its load completion. The
/// previous image stays installed for display, but it is no longer the
/// current one, so submission is gated off until the replacement lands
/// or the load fails.
#[derive(Debug, Default)]
pub struct Session {
    image: Option<UploadedImage>,
    loading: bool,
    phase: RequestPhase,
    report: Option<AnalysisReport>,
    annotated: Option<image::Handle>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn annotated(&self) -> Option<&image::Handle> {
        self.annotated.as_ref()
    }

    /// Whether a completion stamped with `generation` still belongs to
    /// the current image.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// The submit control is enabled iff the current image exists and
    /// no request is in flight. While a replacement image is still
    /// loading, the displayed image is superseded and must not be
    /// submittable. Holds across every transition.
    pub fn can_submit(&self) -> bool {
        self.image.is_some() && !self.loading && self.phase != RequestPhase::Pending
    }

    /// The user picked a new file. Any existing report is cleared
    /// immediately (not lazily on load completion) and the request
    /// lifecycle resets. Returns the generation the load task must
    /// stamp its completion with.
    pub fn begin_selection(&mut self) -> u64 {
        self.report = None;
        self.annotated = None;
        self.phase = RequestPhase::Idle;
        self.loading = true;
        self.generation += 1;
        self.generation
    }

    /// A load task finished. Installs the image only if no newer
    /// selection happened meanwhile; returns whether it was installed.
    /// The phase is left alone: `begin_selection` already reset it, and
    /// nothing can become Pending while the load is outstanding.
    pub fn install_image(&mut self, generation: u64, image: UploadedImage) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.image = Some(image);
        self.loading = false;
        true
    }

    /// A load task failed. The previously installed image (if any)
    /// becomes current and submittable again. Returns whether the
    /// failure belonged to the current selection and should be
    /// surfaced; stale load failures are dropped silently.
    pub fn selection_failed(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.loading = false;
        true
    }

    /// Start a submission: transitions Idle → Pending and hands the
    /// caller the image to upload plus the generation to stamp the
    /// completion with. Returns `None` when submission is not allowed;
    /// the UI never offers the action in that case.
    pub fn begin_submission(&mut self) -> Option<(u64, UploadedImage)> {
        if !self.can_submit() {
            return None;
        }
        let image = self.image.clone()?;
        self.phase = RequestPhase::Pending;
        Some((self.generation, image))
    }

    /// An analysis task finished. Stale completions are dropped without
    /// touching any state; current ones either install the report or
    /// move to the transient Failed phase.
    pub fn apply_outcome(
        &mut self,
        generation: u64,
        outcome: Result<AnalysisOutcome, AnalysisError>,
    ) -> Applied {
        if !self.is_current(generation) {
            return Applied::Stale;
        }

        match outcome {
            Ok(outcome) => {
                self.annotated = outcome.annotated_bytes.map(image::Handle::from_bytes);
                self.report = Some(outcome.report);
                self.phase = RequestPhase::Success;
                Applied::Report
            }
            Err(error) => {
                self.phase = RequestPhase::Failed;
                Applied::Failure(error)
            }
        }
    }

    /// Auto-return after a failure: back to a retryable Idle with the
    /// image and preview untouched, while the notification is on
    /// screen.
    pub fn acknowledge_failure(&mut self) {
        if self.phase == RequestPhase::Failed {
            self.phase = RequestPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::report::AnalysisReport;
    use indexmap::IndexMap;

    fn test_image(name: &str) -> UploadedImage {
        let bytes = vec![0u8; 4];
        UploadedImage {
            file_name: name.to_string(),
            content_type: "image/png",
            bytes: bytes.clone(),
            preview: image::Handle::from_bytes(bytes),
        }
    }

    fn test_report() -> AnalysisReport {
        AnalysisReport {
            overall_score: 72,
            strengths: vec!["Clear labels.".into()],
            improvements: vec!["More spacing.".into()],
            metrics: IndexMap::from([("usability".to_string(), 80u8)]),
            detected_image: None,
        }
    }

    fn ok_outcome() -> Result<AnalysisOutcome, AnalysisError> {
        Ok(AnalysisOutcome {
            report: test_report(),
            annotated_bytes: None,
        })
    }

    #[test]
    fn test_submit_disabled_without_image() {
        let session = Session::new();
        assert!(!session.can_submit());
    }

    #[test]
    fn test_submit_enabled_exactly_when_image_present_and_not_pending() {
        let mut session = Session::new();

        let generation = session.begin_selection();
        assert!(!session.can_submit(), "no image installed yet");

        assert!(session.install_image(generation, test_image("a.png")));
        assert!(session.can_submit());

        let (generation, _) = session.begin_submission().unwrap();
        assert_eq!(session.phase(), RequestPhase::Pending);
        assert!(!session.can_submit(), "pending disables submit");
        assert!(session.begin_submission().is_none());

        session.apply_outcome(generation, ok_outcome());
        assert!(session.can_submit(), "success re-enables submit");
    }

    #[test]
    fn test_new_selection_clears_report_immediately() {
        let mut session = Session::new();
        let generation = session.begin_selection();
        session.install_image(generation, test_image("a.png"));
        let (generation, _) = session.begin_submission().unwrap();
        session.apply_outcome(generation, ok_outcome());
        assert!(session.report().is_some());

        // Picking a new file clears the result before any load finishes.
        session.begin_selection();
        assert!(session.report().is_none());
        assert_eq!(session.phase(), RequestPhase::Idle);
    }

    #[test]
    fn test_replacement_load_gates_submission() {
        let mut session = Session::new();
        let generation = session.begin_selection();
        session.install_image(generation, test_image("a.png"));
        assert!(session.can_submit());

        // A new pick supersedes a.png before its replacement loads;
        // the displayed image must not be submittable in the window.
        let replacement = session.begin_selection();
        assert!(!session.can_submit());
        assert!(session.begin_submission().is_none());

        // Once the replacement lands, only it can be submitted, and
        // the submission is stamped with its own generation.
        assert!(session.install_image(replacement, test_image("b.png")));
        assert!(session.can_submit());
        let (stamped, image) = session.begin_submission().unwrap();
        assert_eq!(stamped, replacement);
        assert_eq!(image.file_name, "b.png");
    }

    #[test]
    fn test_replacement_load_does_not_reenable_submit_mid_request() {
        let mut session = Session::new();
        let generation = session.begin_selection();
        session.install_image(generation, test_image("a.png"));
        session.begin_submission().unwrap();

        // Selecting a new image resets the lifecycle; installing its
        // load result keeps submit gated by the current phase only.
        let replacement = session.begin_selection();
        assert!(session.install_image(replacement, test_image("b.png")));
        assert_eq!(session.phase(), RequestPhase::Idle);
        assert!(session.can_submit());
        let (stamped, image) = session.begin_submission().unwrap();
        assert_eq!(stamped, replacement);
        assert_eq!(image.file_name, "b.png");
    }

    #[test]
    fn test_failed_load_keeps_prior_image_retryable() {
        let mut session = Session::new();
        let generation = session.begin_selection();
        session.install_image(generation, test_image("a.png"));
        let (generation, _) = session.begin_submission().unwrap();
        session.apply_outcome(generation, ok_outcome());

        // The failing pick cleared the report up front; the prior
        // image stays current and submittable after the load fails.
        let failed = session.begin_selection();
        assert!(!session.can_submit());
        assert!(session.selection_failed(failed), "failure is surfaced");
        assert_eq!(session.image().unwrap().file_name, "a.png");
        assert!(session.can_submit());
        assert_eq!(session.phase(), RequestPhase::Idle);
        assert!(session.report().is_none());
    }

    #[test]
    fn test_stale_load_failure_is_dropped_silently() {
        let mut session = Session::new();
        let first = session.begin_selection();
        let second = session.begin_selection();

        assert!(!session.selection_failed(first));
        assert!(!session.can_submit(), "newer load is still outstanding");

        session.install_image(second, test_image("b.png"));
        assert!(session.can_submit());
    }

    #[test]
    fn test_stale_image_load_is_dropped() {
        let mut session = Session::new();
        let first = session.begin_selection();
        let second = session.begin_selection();

        assert!(!session.install_image(first, test_image("old.png")));
        assert!(session.image().is_none());

        assert!(session.install_image(second, test_image("new.png")));
        assert_eq!(session.image().unwrap().file_name, "new.png");
    }

    #[test]
    fn test_stale_analysis_response_is_discarded() {
        let mut session = Session::new();
        let generation = session.begin_selection();
        session.install_image(generation, test_image("a.png"));
        let (in_flight, _) = session.begin_submission().unwrap();

        // A new image supersedes the outstanding request.
        let newer = session.begin_selection();
        session.install_image(newer, test_image("b.png"));

        assert_eq!(session.apply_outcome(in_flight, ok_outcome()), Applied::Stale);
        assert!(session.report().is_none(), "no partial result applied");
        assert!(session.can_submit());
    }

    #[test]
    fn test_failure_returns_to_retryable_idle() {
        let mut session = Session::new();
        let generation = session.begin_selection();
        session.install_image(generation, test_image("a.png"));
        let (generation, _) = session.begin_submission().unwrap();

        let applied = session.apply_outcome(generation, Err(AnalysisError::Http(500)));
        assert_eq!(applied, Applied::Failure(AnalysisError::Http(500)));
        assert_eq!(session.phase(), RequestPhase::Failed);
        assert!(session.report().is_none());

        session.acknowledge_failure();
        assert_eq!(session.phase(), RequestPhase::Idle);
        assert!(session.can_submit(), "image preserved for retry");
        assert_eq!(session.image().unwrap().file_name, "a.png");
    }

    #[test]
    fn test_success_installs_report_and_annotation() {
        let mut session = Session::new();
        let generation = session.begin_selection();
        session.install_image(generation, test_image("a.png"));
        let (generation, _) = session.begin_submission().unwrap();

        let outcome = Ok(AnalysisOutcome {
            report: test_report(),
            annotated_bytes: Some(vec![1, 2, 3]),
        });
        assert_eq!(session.apply_outcome(generation, outcome), Applied::Report);
        assert_eq!(session.phase(), RequestPhase::Success);
        assert!(session.annotated().is_some());
        assert_eq!(session.report().unwrap().overall_score, 72);
    }
}
