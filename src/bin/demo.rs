//! Standalone step-timeline window for development and testing.
//!
//! Eight steps with the fifth reached and the second failed, plus controls
//! for gravity and the selection indices.

use eframe::egui;
use stepline::{Item, MarkerSet, PointGravity, TimeLine, TimelineStyle};

fn main() -> eframe::Result<()> {
    init_logger();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 960.0])
            .with_title("stepline - demo"),
        ..Default::default()
    };

    eframe::run_native(
        "stepline-demo",
        options,
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)))),
    )
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

struct DemoApp {
    timeline: TimeLine,
    current: i32,
    error: i32,
}

impl DemoApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let style = TimelineStyle {
            vertical_spacing: 60.0,
            ..Default::default()
        };
        let markers = MarkerSet::circles(&cc.egui_ctx, &style);

        let mut timeline = TimeLine::new(style, markers);
        timeline.set_items((1..=8).map(|i| {
            Item::new(format!("Step {}", i), format!("2017-09-{:02}", 9 + i), i <= 5)
        }));
        timeline.set_current_item(4);
        timeline.set_error_item(1);

        Self {
            timeline,
            current: 4,
            error: 1,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Gravity:");
                let gravity = &mut self.timeline.style.point_gravity;
                egui::ComboBox::from_id_salt("gravity")
                    .selected_text(format!("{:?}", gravity))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(gravity, PointGravity::Top, "Top");
                        ui.selectable_value(gravity, PointGravity::Center, "Center");
                        ui.selectable_value(gravity, PointGravity::Bottom, "Bottom");
                    });

                ui.separator();
                let items = self.timeline.items().len() as i32;
                if ui
                    .add(egui::Slider::new(&mut self.current, -1..=items - 1).text("current"))
                    .changed()
                {
                    self.timeline.set_current_item(self.current);
                }
                if ui
                    .add(egui::Slider::new(&mut self.error, -1..=items - 1).text("error"))
                    .changed()
                {
                    self.timeline.set_error_item(self.error);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.timeline.ui(ui);
            });
        });
    }
}
