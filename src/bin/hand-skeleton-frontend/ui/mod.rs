mod info;
mod skeleton_graph;
mod vis_settings;

use egui::{
    plot::{Line, MarkerShape, PlotPoints, Points},
    Color32, Stroke,
};

use info::render_info;
use skeleton_graph::render_skeleton_graph;
use tether_hand_skeleton::Position;
use vis_settings::render_vis_settings;

use crate::model::Model;

pub const SPACING_AMOUNT: f32 = 16.0;

pub fn render_ui(ctx: &egui::Context, model: &mut Model) {
    egui::SidePanel::left("config").show(ctx, |ui| {
        ui.add_space(SPACING_AMOUNT);
        render_vis_settings(model, ui);
    });

    egui::SidePanel::right("stats").show(ctx, |ui| {
        render_info(model, ui);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Hand Skeleton");
        render_skeleton_graph(model, ui);
    });
}

/// Depth is dropped; the overlay is drawn looking down the camera axis
pub fn positions_to_plot_points(positions: &[Position], size: f32, color: Color32) -> Points {
    let plot_points = PlotPoints::new(
        positions
            .iter()
            .map(|p| [p.x as f64, p.y as f64])
            .collect(),
    );
    Points::new(plot_points)
        .filled(true)
        .radius(size)
        .shape(MarkerShape::Circle)
        .color(color)
}

pub fn draw_segment(a: &Position, b: &Position, width: f32, colour: Color32) -> Line {
    Line::new(PlotPoints::new(vec![
        [a.x as f64, a.y as f64],
        [b.x as f64, b.y as f64],
    ]))
    .stroke(Stroke::new(width, colour))
}
