use crate::classify_screen::core::{init, transition, Effect, Event, LibraryState, State, Status};
use crate::image_classifier::interface::Classification;
use crate::source_image::{Photo, SourceImage};
use image::metadata::Orientation;
use image::DynamicImage;
use std::path::PathBuf;

fn photo(name: &str) -> Photo {
    Photo::new(
        SourceImage::new(name, DynamicImage::new_rgb8(8, 4), Orientation::NoTransforms),
        16,
    )
}

fn classifying(request_id: u64) -> State {
    let (state, _) = init(true);
    State {
        photo: Some(photo("current.jpg")),
        status: Status::Classifying { request_id },
        next_request_id: request_id + 1,
        ..state
    }
}

#[test]
fn test_init() {
    let (state, effects) = init(false);

    assert!(!state.camera_available);
    assert_eq!(state.library, LibraryState::Closed);
    assert_eq!(state.photo, None);
    assert_eq!(state.status, Status::Waiting);
    assert!(effects.is_empty());
}

#[test]
fn test_camera_pressed_when_available() {
    let (state, _) = init(true);

    let (state, effects) = transition(state, Event::CameraPressed);

    assert_eq!(effects, vec![Effect::CaptureFromCamera]);
    assert_eq!(state.status, Status::Waiting);
}

#[test]
fn test_camera_pressed_when_unavailable_does_nothing() {
    let (initial, _) = init(false);

    let (state, effects) = transition(initial.clone(), Event::CameraPressed);

    assert!(effects.is_empty());
    assert_eq!(state, initial);
}

#[test]
fn test_library_flow() {
    let (state, _) = init(false);

    let (state, effects) = transition(state, Event::LibraryPressed);
    assert_eq!(state.library, LibraryState::Loading);
    assert_eq!(effects, vec![Effect::ListLibrary]);

    let entries = vec![PathBuf::from("a.jpg"), PathBuf::from("b.png")];
    let (state, effects) = transition(state, Event::LibraryListed(Ok(entries.clone())));
    assert_eq!(state.library, LibraryState::Open(entries));
    assert!(effects.is_empty());

    let (state, effects) = transition(state, Event::LibraryEntryPicked(PathBuf::from("b.png")));
    assert_eq!(state.library, LibraryState::Closed);
    assert_eq!(
        effects,
        vec![Effect::LoadFromLibrary {
            path: PathBuf::from("b.png")
        }]
    );
}

#[test]
fn test_library_listing_failure_and_close() {
    let (state, _) = init(false);
    let (state, _) = transition(state, Event::LibraryPressed);

    let (state, _) = transition(state, Event::LibraryListed(Err("permission denied".to_string())));
    assert_eq!(
        state.library,
        LibraryState::Failed("permission denied".to_string())
    );

    let (state, effects) = transition(state, Event::LibraryClosed);
    assert_eq!(state.library, LibraryState::Closed);
    assert!(effects.is_empty());
}

#[test]
fn test_listing_after_close_keeps_library_closed() {
    let (state, _) = init(false);
    let (state, _) = transition(state, Event::LibraryPressed);
    let (closed, _) = transition(state, Event::LibraryClosed);

    let (state, effects) = transition(
        closed.clone(),
        Event::LibraryListed(Ok(vec![PathBuf::from("a.jpg")])),
    );
    assert_eq!(state.library, LibraryState::Closed);
    assert!(effects.is_empty());

    let (state, _) = transition(closed, Event::LibraryListed(Err("gone".to_string())));
    assert_eq!(state.library, LibraryState::Closed);
}

#[test]
fn test_file_dropped_loads_it() {
    let (state, _) = init(false);

    let (state, effects) = transition(state, Event::FileDropped(PathBuf::from("/tmp/horse.jpg")));

    assert_eq!(state.library, LibraryState::Closed);
    assert_eq!(
        effects,
        vec![Effect::LoadFromLibrary {
            path: PathBuf::from("/tmp/horse.jpg")
        }]
    );
}

#[test]
fn test_image_acquired_starts_classification() {
    let (state, _) = init(false);
    let acquired = photo("horse.jpg");

    let (state, effects) = transition(state, Event::ImageAcquired(Ok(acquired.clone())));

    assert_eq!(state.photo, Some(acquired.clone()));
    assert_eq!(state.status, Status::Classifying { request_id: 0 });
    assert_eq!(state.next_request_id, 1);
    assert_eq!(
        effects,
        vec![Effect::ClassifyImage {
            request_id: 0,
            image: acquired.source.clone()
        }]
    );

    let (state, effects) = transition(state, Event::ImageAcquired(Ok(photo("human.jpg"))));
    assert_eq!(state.status, Status::Classifying { request_id: 1 });
    assert!(matches!(
        effects.as_slice(),
        [Effect::ClassifyImage { request_id: 1, .. }]
    ));
}

#[test]
fn test_image_acquire_failure() {
    let (state, _) = init(false);

    let (state, effects) = transition(state, Event::ImageAcquired(Err("corrupt".to_string())));

    assert_eq!(state.status, Status::LoadFailed("corrupt".to_string()));
    assert!(effects.is_empty());
}

#[test]
fn test_classify_done_keeps_top_two() {
    let state = classifying(4);

    let (state, effects) = transition(
        state,
        Event::ClassifyDone {
            request_id: 4,
            result: Ok(vec![
                Classification::new("horses", 0.2),
                Classification::new("humans", 0.75),
                Classification::new("other", 0.05),
            ]),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(
        state.status,
        Status::Classified(vec![
            Classification::new("humans", 0.75),
            Classification::new("horses", 0.2),
        ])
    );
    assert!(state.photo.is_some());
}

#[test]
fn test_classify_done_empty_is_nothing_recognized() {
    let (state, _) = transition(
        classifying(0),
        Event::ClassifyDone {
            request_id: 0,
            result: Ok(vec![]),
        },
    );

    assert_eq!(state.status, Status::NothingRecognized);
}

#[test]
fn test_classify_done_error_is_shown() {
    let (state, _) = transition(
        classifying(0),
        Event::ClassifyDone {
            request_id: 0,
            result: Err("shape mismatch".to_string()),
        },
    );

    assert_eq!(
        state.status,
        Status::ClassifyFailed("shape mismatch".to_string())
    );
}

#[test]
fn test_stale_classify_done_is_ignored() {
    let state = classifying(2);

    let (state, effects) = transition(
        state.clone(),
        Event::ClassifyDone {
            request_id: 1,
            result: Ok(vec![Classification::new("stale", 0.9)]),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.status, Status::Classifying { request_id: 2 });
}

#[test]
fn test_classify_done_without_pending_request_is_ignored() {
    let (initial, _) = init(false);

    let (state, _) = transition(
        initial.clone(),
        Event::ClassifyDone {
            request_id: 0,
            result: Ok(vec![Classification::new("ghost", 0.9)]),
        },
    );

    assert_eq!(state, initial);
}

#[test]
fn test_classify_done_display_string_is_a_summary() {
    let result: Vec<Classification> = (0..1000)
        .map(|i| Classification::new(format!("label {}", i), 0.001))
        .collect();
    let event = Event::ClassifyDone {
        request_id: 7,
        result: Ok(result),
    };

    let display = event.to_display_string();

    assert!(display.contains("request_id: 7"));
    assert!(display.contains("1000 results"));
    assert!(display.contains("label 0"));
    assert!(!display.contains("label 999"));
}

#[test]
fn test_library_listed_display_string_counts_entries() {
    let event = Event::LibraryListed(Ok(vec![PathBuf::from("a.jpg"), PathBuf::from("b.png")]));

    assert_eq!(event.to_display_string(), "LibraryListed(Ok(2 entries))");
}
