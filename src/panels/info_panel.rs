use egui::{Align, Layout, Rect, RichText};

use crate::action::Affordance;

// Space between the text and the button row
const CONTROLS_GAP: f32 = 8.0;

/// What the explanatory panel shows this frame
#[derive(Debug, Clone)]
pub struct InfoPanelView<'a> {
    pub frame: Rect,
    pub text: &'a str,
    pub position: usize,
    pub total: usize,
    pub animation_duration: f32,
}

/// Shows the panel at `view.frame`, sliding when the frame changes side.
///
/// Returns the button the user pressed, if any.
pub fn info_panel(ctx: &egui::Context, view: &InfoPanelView<'_>) -> Option<Affordance> {
    let id = egui::Id::new("spotlight_info_panel");
    let y = ctx.animate_value_with_time(id.with("y"), view.frame.min.y, view.animation_duration);

    let mut pressed = None;
    egui::Area::new(id)
        .order(egui::Order::Tooltip)
        .fixed_pos(egui::pos2(view.frame.min.x, y))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                let margin = ui.spacing().menu_margin;
                let inner_height = (view.frame.height() - margin.top - margin.bottom).max(0.0);
                ui.set_width((view.frame.width() - margin.left - margin.right).max(0.0));
                ui.set_height(inner_height);

                let spacing = ui.spacing();
                let controls_height = spacing.interact_size.y + spacing.item_spacing.y + CONTROLS_GAP;
                egui::ScrollArea::vertical()
                    .max_height(text_max_height(inner_height, controls_height))
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        ui.label(RichText::new(view.text).size(16.0));
                    });
                ui.add_space(CONTROLS_GAP);

                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("{} of {}", view.position, view.total)).weak());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            pressed = Some(Affordance::CloseButton);
                        }
                        let next_label = if view.position == view.total { "Done" } else { "Next" };
                        if ui.button(next_label).clicked() {
                            pressed = Some(Affordance::NextButton);
                        }
                        if ui.button("Back").clicked() {
                            pressed = Some(Affordance::BackButton);
                        }
                    });
                });
            });
        });

    pressed
}

/// Height left for the explanation once the button row is laid out.
/// Longer text scrolls instead of growing the panel past its frame.
fn text_max_height(inner_height: f32, controls_height: f32) -> f32 {
    (inner_height - controls_height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn run_frame(ctx: &egui::Context, view: &InfoPanelView<'_>) {
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))),
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            info_panel(ctx, view);
        });
    }

    #[test]
    fn test_text_height_leaves_room_for_buttons() {
        assert_eq!(text_max_height(108.0, 40.0), 68.0);
        assert_eq!(text_max_height(20.0, 40.0), 0.0);
    }

    #[test]
    fn test_long_text_stays_inside_frame() {
        let text = "A very long explanation of this part of the screen. ".repeat(60);
        let view = InfoPanelView {
            frame: Rect::from_min_size(pos2(16.0, 444.0), vec2(768.0, 140.0)),
            text: &text,
            position: 1,
            total: 3,
            animation_duration: 0.0,
        };
        let ctx = egui::Context::default();
        run_frame(&ctx, &view);
        run_frame(&ctx, &view);

        let area = ctx
            .memory(|memory| memory.area_rect(egui::Id::new("spotlight_info_panel")))
            .unwrap();
        assert!(
            area.height() <= view.frame.height() + 2.0,
            "panel grew to {} for a {} frame",
            area.height(),
            view.frame.height()
        );
    }
}
