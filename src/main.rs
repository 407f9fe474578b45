use iced::widget::{column, container, scrollable};
use iced::{task, Element, Length, Task, Theme};
use rfd::FileDialog;
use tracing::{debug, error, info};

mod config;
mod error;
mod net;
mod state;
mod ui;

use config::Config;
use error::{AnalysisError, IngestionError};
use net::client::AnalysisClient;
use state::ingest::UploadedImage;
use state::session::{AnalysisOutcome, Applied, Session};
use state::view_mode::ViewMode;

/// Main application state
struct UiAnalyzer {
    /// Client bound to the configured analysis service
    client: AnalysisClient,
    /// The single active workflow instance
    session: Session,
    /// Selected comparison layout; persists across results
    view_mode: ViewMode,
    /// Abort handle for the outstanding analysis task, if any
    in_flight: Option<task::Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked one of the picker buttons
    PickImage,
    /// Background file load finished, stamped with its generation
    ImageLoaded(u64, Result<UploadedImage, IngestionError>),
    /// User clicked the analyze button
    Submit,
    /// Analysis round-trip finished, stamped with its generation
    AnalysisFinished(u64, Result<AnalysisOutcome, AnalysisError>),
    /// User switched the comparison layout
    SetViewMode(ViewMode),
    /// User dismissed a failure notification
    NoticeDismissed,
}

impl UiAnalyzer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::from_env();
        info!(base_url = %config.base_url, "UI Analyzer starting");

        let client = AnalysisClient::new(&config);

        (
            UiAnalyzer {
                client,
                session: Session::new(),
                view_mode: ViewMode::default(),
                in_flight: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select a UI Screenshot")
                    .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                    .pick_file();

                let Some(path) = file else {
                    return Task::none();
                };

                // A new selection supersedes any outstanding analysis.
                if let Some(handle) = self.in_flight.take() {
                    handle.abort();
                }

                let generation = self.session.begin_selection();
                Task::perform(UploadedImage::load(path), move |result| {
                    Message::ImageLoaded(generation, result)
                })
            }
            Message::ImageLoaded(generation, Ok(image)) => {
                if !self.session.install_image(generation, image) {
                    debug!("discarding load for a superseded selection");
                }
                Task::none()
            }
            Message::ImageLoaded(generation, Err(failure)) => {
                if self.session.selection_failed(generation) {
                    error!(%failure, "image ingestion failed");
                    return notify_failure(
                        "Could not read the selected image. Please try another file.",
                    );
                }
                Task::none()
            }
            Message::Submit => {
                // The button is only enabled when submission is valid,
                // so a None here is just a no-op.
                let Some((generation, image)) = self.session.begin_submission() else {
                    return Task::none();
                };

                let client = self.client.clone();
                let (request, handle) = Task::perform(
                    async move { client.analyze(image).await },
                    move |outcome| Message::AnalysisFinished(generation, outcome),
                )
                .abortable();

                self.in_flight = Some(handle);
                request
            }
            Message::AnalysisFinished(generation, outcome) => {
                self.in_flight = None;

                match self.session.apply_outcome(generation, outcome) {
                    Applied::Report => {
                        info!("analysis complete");
                        Task::none()
                    }
                    Applied::Failure(failure) => {
                        error!(%failure, "analysis failed");
                        self.session.acknowledge_failure();
                        notify_failure("Analysis failed. Please try again.")
                    }
                    Applied::Stale => {
                        debug!("discarding response for a superseded image");
                        Task::none()
                    }
                }
            }
            Message::SetViewMode(mode) => {
                self.view_mode = mode;
                Task::none()
            }
            Message::NoticeDismissed => Task::none(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut page = column![
            ui::header::view(),
            ui::uploader::view(&self.session, self.view_mode),
        ]
        .spacing(24)
        .max_width(900.0);

        if let Some(report) = self.session.report() {
            page = page.push(ui::report::view(report));
        }

        scrollable(
            container(page.padding(24))
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    iced::application("UI Analyzer", UiAnalyzer::update, UiAnalyzer::view)
        .theme(UiAnalyzer::theme)
        .centered()
        .run_with(UiAnalyzer::new)
}

/// Modal failure notification; every failure cause reads the same to
/// the user, causes are only distinguished in the logs. The dialog
/// runs as a task so the event loop keeps rendering underneath it.
fn notify_failure(description: &'static str) -> Task<Message> {
    let dialog = rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("UI Analyzer")
        .set_description(description);

    Task::perform(dialog.show(), |_| Message::NoticeDismissed)
}
