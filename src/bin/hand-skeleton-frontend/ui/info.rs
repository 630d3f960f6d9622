use egui::{Grid, RichText, Ui};

use crate::model::Model;

pub fn render_info(model: &mut Model, ui: &mut Ui) {
    ui.heading("Hand");
    if model.overlay.is_active() {
        ui.label(RichText::new("Tracking").strong());
    } else {
        ui.label("No hand");
    }

    if let Some(centre) = model.overlay.palm_centre() {
        if model.overlay.is_active() {
            ui.horizontal(|ui| {
                ui.label("Palm centre:");
                ui.label(format!("{:.2}, {:.2}, {:.2}", centre.x, centre.y, centre.z));
            });
        }
    }

    ui.separator();

    Grid::new("packets_grid").show(ui, |ui| {
        ui.label("Packets received: ");
        ui.label(format!("{}", model.overlay.packets_received()));
        ui.end_row();

        ui.label("Packets dropped: ");
        ui.label(format!("{}", model.overlay.packets_dropped()));
        ui.end_row();

        ui.label("Point markers: ");
        ui.label(format!("{}", model.overlay.scene().points().len()));
        ui.end_row();

        ui.label("Line markers: ");
        ui.label(format!("{}", model.overlay.scene().lines().len()));
        ui.end_row();
    });

    if model.overlay.is_active() {
        ui.separator();
        ui.heading("Bones");
        Grid::new("bones_grid").show(ui, |ui| {
            for bone in model.overlay.bones() {
                ui.label(format!("{} → {}", bone.from, bone.to));
                ui.label(format!("{:.2}", bone.length));
                ui.end_row();
            }
        });
    }
}
