use egui::{
    plot::{Plot, PlotPoint, Text},
    Color32, Ui,
};
use tether_hand_skeleton::{systems::remapping::OriginLocation, Position};

use crate::model::Model;

use super::{draw_segment, positions_to_plot_points};

pub fn render_skeleton_graph(model: &mut Model, ui: &mut Ui) {
    let (w, h) = model.overlay.systems().remapping.scene_extent();
    let (min_x, min_y, max_x, max_y) = match model.overlay.systems().remapping.origin_location() {
        OriginLocation::Corner => (0., 0., w, h),
        OriginLocation::Centre => (-w / 2., -h / 2., w / 2., h / 2.),
    };

    let skeleton_plot = Plot::new("skeleton")
        .data_aspect(1.0)
        .include_x(min_x)
        .include_x(max_x)
        .include_y(min_y)
        .include_y(max_y);

    skeleton_plot.show(ui, |plot_ui| {
        // Camera frame outline
        let corners = [
            Position::new(min_x, min_y, 0.),
            Position::new(max_x, min_y, 0.),
            Position::new(max_x, max_y, 0.),
            Position::new(min_x, max_y, 0.),
        ];
        for i in 0..corners.len() {
            let next = (i + 1) % corners.len();
            plot_ui.line(draw_segment(&corners[i], &corners[next], 1.0, Color32::RED));
        }

        if !model.overlay.is_active() {
            return;
        }

        let scene = model.overlay.scene();

        if model.show_bones {
            for (bound, colour) in model
                .overlay
                .skeleton()
                .lines()
                .iter()
                .zip(model.line_colours.iter())
            {
                if let Some((origin, destination)) = scene.line_endpoints(bound.line) {
                    plot_ui.line(draw_segment(&origin, &destination, model.line_width, *colour));
                }
            }
        }

        let positions: Vec<Position> = scene.points().iter().map(|p| p.position).collect();
        plot_ui.points(positions_to_plot_points(
            &positions,
            model.point_size,
            Color32::LIGHT_GRAY,
        ));

        if model.show_graph_labels {
            for (i, p) in positions.iter().enumerate() {
                plot_ui.text(
                    Text::new(PlotPoint::new(p.x, p.y), format!("{}", i)).color(Color32::WHITE),
                );
            }
        }
    });
}
