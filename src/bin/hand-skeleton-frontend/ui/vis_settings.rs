use egui::{RichText, Slider, Ui};

use crate::model::Model;

pub fn render_vis_settings(model: &mut Model, ui: &mut Ui) {
    ui.heading("Skeleton Display");
    ui.group(|ui| {
        ui.checkbox(&mut model.show_bones, "Draw bones");
        ui.add_enabled_ui(model.show_bones, |ui| {
            ui.horizontal(|ui| {
                ui.label("Bone width");
                ui.add(Slider::new(&mut model.line_width, 0.5..=10.0));
            });
        });
        ui.horizontal(|ui| {
            ui.label("Joint radius");
            ui.add(Slider::new(&mut model.point_size, 1.0..=20.0));
        });
        ui.checkbox(&mut model.show_graph_labels, "Show landmark indices");
    });

    ui.label("Bone colours");
    ui.group(|ui| {
        for (name, colour) in &model.finger_legend {
            ui.label(RichText::new(*name).color(*colour));
        }
    });
}
