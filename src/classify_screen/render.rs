use crate::classify_screen::core::{Event, LibraryState, State};
use crate::classify_screen::format::status_text;
use crate::source_image::Photo;
use eframe::egui;
use image::RgbaImage;
use std::sync::Arc;

/// GPU copy of the current preview, replaced when the photo changes.
pub struct PreviewTexture {
    image: Arc<RgbaImage>,
    texture: egui::TextureHandle,
}

/// Draws the screen and returns what the user did this frame.
pub fn render(
    ctx: &egui::Context,
    state: &State,
    preview_texture: &mut Option<PreviewTexture>,
) -> Vec<Event> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let camera = ui
                .add_enabled(state.camera_available, egui::Button::new("Camera"))
                .on_disabled_hover_text("No camera available");
            if camera.clicked() {
                events.push(Event::CameraPressed);
            }
            if ui.button("Photo Library").clicked() {
                events.push(Event::LibraryPressed);
            }
        });
    });

    egui::TopBottomPanel::bottom("classification").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.label(egui::RichText::new(status_text(&state.status)).size(18.0));
        ui.add_space(8.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        let texture = state
            .photo
            .as_ref()
            .and_then(|photo| preview_texture_for(ctx, photo, preview_texture));

        ui.centered_and_justified(|ui| match texture {
            Some(texture) => {
                ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                        .shrink_to_fit(),
                );
            }
            None => {
                ui.label("Drop a photo here, or pick one from the camera or photo library.");
            }
        });
    });

    render_library(ctx, &state.library, &mut events);

    events.extend(ctx.input(|input| last_dropped(&input.raw.dropped_files)));

    events
}

/// Only the last dropped file is loaded, so it is the one that ends up shown.
fn last_dropped(files: &[egui::DroppedFile]) -> Option<Event> {
    files
        .iter()
        .filter_map(|file| file.path.clone())
        .last()
        .map(Event::FileDropped)
}

fn preview_texture_for<'a>(
    ctx: &egui::Context,
    photo: &Photo,
    cache: &'a mut Option<PreviewTexture>,
) -> Option<&'a egui::TextureHandle> {
    let is_stale = match cache {
        Some(cached) => !Arc::ptr_eq(&cached.image, &photo.preview),
        None => true,
    };

    if is_stale {
        let size = [photo.preview.width() as usize, photo.preview.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, photo.preview.as_raw());
        let texture = ctx.load_texture("photo-preview", color_image, egui::TextureOptions::LINEAR);
        *cache = Some(PreviewTexture {
            image: photo.preview.clone(),
            texture,
        });
    }

    cache.as_ref().map(|cached| &cached.texture)
}

fn render_library(ctx: &egui::Context, library: &LibraryState, events: &mut Vec<Event>) {
    if matches!(library, LibraryState::Closed) {
        return;
    }

    let mut open = true;

    egui::Window::new("Photo Library")
        .open(&mut open)
        .collapsible(false)
        .show(ctx, |ui| match library {
            LibraryState::Closed => {}
            LibraryState::Loading => {
                ui.spinner();
            }
            LibraryState::Failed(message) => {
                ui.colored_label(egui::Color32::RED, message);
            }
            LibraryState::Open(entries) if entries.is_empty() => {
                ui.label("No photos found.");
            }
            LibraryState::Open(entries) => {
                egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    for path in entries {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string());
                        if ui.selectable_label(false, name).clicked() {
                            events.push(Event::LibraryEntryPicked(path.clone()));
                        }
                    }
                });
            }
        });

    if !open {
        events.push(Event::LibraryClosed);
    }
}
