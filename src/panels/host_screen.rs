use crate::node::PointOfInterest;

/// Draws the screen the tour walks through.
///
/// Returns the points of interest resolved from this frame's widget rects,
/// in tour order.
pub fn host_screen(ctx: &egui::Context) -> Vec<PointOfInterest> {
    let mut nodes = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let new = ui.button("➕ New");
            nodes.push(PointOfInterest::new(new.rect, "Start a fresh project from here."));
            let open = ui.button("📂 Open");
            nodes.push(PointOfInterest::new(open.rect, "Open something you worked on before."));
            let _ = ui.button("💾 Save");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let share = ui.button("🔗 Share");
                nodes.push(PointOfInterest::new(share.rect, "Share a link with your team."));
            });
        });
    });

    egui::SidePanel::left("library")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Library");
            for name in ["Inbox", "Drafts", "Archive"] {
                let _ = ui.selectable_label(false, name);
            }
            nodes.push(PointOfInterest::new(
                ui.min_rect(),
                "Everything you have saved lives in the library.",
            ));
        });

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        let status = ui.label("Ready");
        nodes.push(PointOfInterest::new(status.rect, "Background work shows up in the status bar."));
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Welcome");
        ui.label("Pick a document from the library or start a new one.");
    });

    nodes
}
