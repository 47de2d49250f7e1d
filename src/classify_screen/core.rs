use crate::classify_screen::format::top_classifications;
use crate::image_classifier::interface::Classification;
use crate::source_image::{Photo, SourceImage};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LibraryState {
    #[default]
    Closed,
    Loading,
    Open(Vec<PathBuf>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    #[default]
    Waiting,
    Classifying {
        request_id: u64,
    },
    Classified(Vec<Classification>),
    NothingRecognized,
    LoadFailed(String),
    ClassifyFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub camera_available: bool,
    pub library: LibraryState,
    pub photo: Option<Photo>,
    pub status: Status,
    pub next_request_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    CameraPressed,
    LibraryPressed,
    LibraryListed(Result<Vec<PathBuf>, String>),
    LibraryClosed,
    LibraryEntryPicked(PathBuf),
    FileDropped(PathBuf),
    ImageAcquired(Result<Photo, String>),
    ClassifyDone {
        request_id: u64,
        result: Result<Vec<Classification>, String>,
    },
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::ImageAcquired(Ok(photo)) => format!("ImageAcquired(Ok({}))", photo.source.name),
            Event::LibraryListed(Ok(entries)) => {
                format!("LibraryListed(Ok({} entries))", entries.len())
            }
            Event::ClassifyDone {
                request_id,
                result: Ok(classifications),
            } => match classifications.first() {
                Some(top) => format!(
                    "ClassifyDone {{ request_id: {}, {} results, top: ({:.2}) {} }}",
                    request_id,
                    classifications.len(),
                    top.confidence,
                    top.label
                ),
                None => format!("ClassifyDone {{ request_id: {}, 0 results }}", request_id),
            },
            event => format!("{:?}", event),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CaptureFromCamera,
    ListLibrary,
    LoadFromLibrary { path: PathBuf },
    ClassifyImage { request_id: u64, image: Arc<SourceImage> },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::ClassifyImage { request_id, image } => format!(
                "ClassifyImage {{ request_id: {}, image: {} ({}x{}) }}",
                request_id,
                image.name,
                image.pixels.width(),
                image.pixels.height()
            ),
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init(camera_available: bool) -> (State, Vec<Effect>) {
    (
        State {
            camera_available,
            library: LibraryState::Closed,
            photo: None,
            status: Status::Waiting,
            next_request_id: 0,
        },
        vec![],
    )
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match event {
        Event::CameraPressed => {
            if state.camera_available {
                (state, vec![Effect::CaptureFromCamera])
            } else {
                (state, vec![])
            }
        }

        Event::LibraryPressed => (
            State {
                library: LibraryState::Loading,
                ..state
            },
            vec![Effect::ListLibrary],
        ),
        Event::LibraryListed(_) if state.library != LibraryState::Loading => (state, vec![]),
        Event::LibraryListed(Ok(entries)) => (
            State {
                library: LibraryState::Open(entries),
                ..state
            },
            vec![],
        ),
        Event::LibraryListed(Err(message)) => (
            State {
                library: LibraryState::Failed(message),
                ..state
            },
            vec![],
        ),
        Event::LibraryClosed => (
            State {
                library: LibraryState::Closed,
                ..state
            },
            vec![],
        ),
        Event::LibraryEntryPicked(path) => (
            State {
                library: LibraryState::Closed,
                ..state
            },
            vec![Effect::LoadFromLibrary { path }],
        ),
        Event::FileDropped(path) => (state, vec![Effect::LoadFromLibrary { path }]),

        Event::ImageAcquired(Ok(photo)) => {
            let request_id = state.next_request_id;
            let image = photo.source.clone();
            (
                State {
                    photo: Some(photo),
                    status: Status::Classifying { request_id },
                    next_request_id: request_id + 1,
                    ..state
                },
                vec![Effect::ClassifyImage { request_id, image }],
            )
        }
        Event::ImageAcquired(Err(message)) => (
            State {
                status: Status::LoadFailed(message),
                ..state
            },
            vec![],
        ),

        Event::ClassifyDone { request_id, result } => {
            let is_current = matches!(
                state.status,
                Status::Classifying { request_id: current } if current == request_id
            );
            if !is_current {
                return (state, vec![]);
            }

            let status = match result {
                Ok(classifications) if classifications.is_empty() => Status::NothingRecognized,
                Ok(classifications) => Status::Classified(top_classifications(classifications)),
                Err(message) => Status::ClassifyFailed(message),
            };

            (State { status, ..state }, vec![])
        }
    }
}
