use crate::classify_screen::core::{init, transition, Effect, Event, State};
use crate::classify_screen::render::{render, PreviewTexture};
use crate::classify_screen::run_effect::RunEffect;
use crate::library::logger::interface::Logger;
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

pub struct ClassifyScreen {
    pub state: State,
    event_receiver: Receiver<Event>,
    run_effect: RunEffect,
    logger: Arc<dyn Logger + Send + Sync>,
    preview_texture: Option<PreviewTexture>,
}

impl ClassifyScreen {
    /// `make_run_effect` receives the sender that effect results must be posted to.
    pub fn new(
        camera_available: bool,
        logger: Arc<dyn Logger + Send + Sync>,
        make_run_effect: impl FnOnce(Sender<Event>) -> RunEffect,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let run_effect = make_run_effect(event_sender);
        let (state, effects) = init(camera_available);

        let screen = Self {
            state,
            event_receiver,
            run_effect,
            logger: logger.with_namespace("classify_screen"),
            preview_texture: None,
        };
        screen.spawn_effects(effects);
        screen
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }

    pub fn dispatch(&mut self, event: Event) {
        let _ = self
            .logger
            .info(&format!("event: {}", event.to_display_string()));

        let (new_state, effects) = transition(self.state.clone(), event);
        self.state = new_state;

        self.spawn_effects(effects);
    }

    /// Applies every effect result that has arrived so far without blocking.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dispatch(event);
        }
    }
}

impl eframe::App for ClassifyScreen {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        let events = render(ctx, &self.state, &mut self.preview_texture);

        for event in events {
            self.dispatch(event);
        }
    }
}
